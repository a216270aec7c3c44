// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error type of entropy sources

use core::fmt;
#[cfg(feature = "std")]
use std::boxed::Box;

#[cfg(feature = "std")]
type Cause = Box<dyn std::error::Error + Send + Sync>;

/// Error type of entropy sources
///
/// A static message plus, with the `std` feature, an optional chained cause
/// such as the [`std::io::Error`] of a failed device read. The cause can be
/// reached through [`std::error::Error::source`] or taken with
/// [`Error::take_cause`].
#[derive(Debug)]
pub struct Error {
    msg: &'static str,
    #[cfg(feature = "std")]
    cause: Option<Cause>,
}

impl Error {
    /// Create an error with a message only.
    pub fn new(msg: &'static str) -> Self {
        Error {
            msg,
            #[cfg(feature = "std")]
            cause: None,
        }
    }

    /// Create an error with a message and a chained cause.
    #[cfg(feature = "std")]
    pub fn with_cause<E>(msg: &'static str, cause: E) -> Self
    where
        E: Into<Cause>,
    {
        Error {
            msg,
            cause: Some(cause.into()),
        }
    }

    /// The error message.
    pub fn msg(&self) -> &'static str {
        self.msg
    }

    /// Take the cause, if any, leaving `self` without one.
    #[cfg(feature = "std")]
    pub fn take_cause(&mut self) -> Option<Cause> {
        self.cause.take()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        #[cfg(feature = "std")]
        {
            if let Some(ref cause) = self.cause {
                return write!(f, "{}; cause: {}", self.msg, cause);
            }
        }
        write!(f, "{}", self.msg)
    }
}

#[cfg(feature = "os_rng")]
impl From<getrandom::Error> for Error {
    fn from(error: getrandom::Error) -> Self {
        Error::with_cause("OS generator failed", error)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

#[cfg(feature = "std")]
impl From<Error> for std::io::Error {
    fn from(error: Error) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, error)
    }
}
