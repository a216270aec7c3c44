// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The exponential distribution.

use crate::{Distribution, Open01};
use core::fmt;
use num_traits::Float;
use rngkit::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Samples floating-point numbers according to the exponential distribution
/// with rate 1, `Exp(1)`.
///
/// This is `-ln(U)` for `U` uniform on the open interval `(0, 1)`, so the
/// result is always finite and non-negative.
///
/// See [`Exp`] for the general exponential distribution.
///
/// # Example
/// ```
/// use rngkit::{Rng, SeedableGenerator};
/// use rngkit::rngs::Xorshift32;
/// use rngkit_distr::Exp1;
///
/// let val: f64 = Xorshift32::seed_from_u64(5).sample(Exp1);
/// assert!(val >= 0.0);
/// ```
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Exp1;

impl<F> Distribution<F> for Exp1
where
    F: Float,
    Open01: Distribution<F>,
{
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> F {
        let u: F = rng.sample(Open01);
        -u.ln()
    }
}

/// The exponential distribution `Exp(rate)`.
///
/// The density is `f(x) = rate * exp(-rate * x)` for `x >= 0`. A sample is
/// the inverse CDF applied to one uniform draw: `-ln(U) / rate`.
///
/// # Example
///
/// ```
/// use rngkit::SeedableGenerator;
/// use rngkit::rngs::Xoroshiro128Plus;
/// use rngkit_distr::{Distribution, Exp};
///
/// let exp = Exp::new(2.0).unwrap();
/// let v = exp.sample(&mut Xoroshiro128Plus::seed_from_u64(1));
/// println!("{} is from a Exp(2) distribution", v);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Exp<F> {
    rate: F,
}

/// Error type returned from [`Exp::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// `rate <= 0` or NaN.
    RateTooSmall,
    /// `rate` is infinite.
    RateNotFinite,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::RateTooSmall => "rate is not positive in exponential distribution",
            Error::RateNotFinite => "rate is infinite in exponential distribution",
        })
    }
}

impl std::error::Error for Error {}

impl<F: Float> Exp<F>
where
    Open01: Distribution<F>,
{
    /// Construct a new `Exp` with the given rate parameter (often written
    /// `lambda`).
    #[inline]
    pub fn new(rate: F) -> Result<Exp<F>, Error> {
        if !(rate > F::zero()) {
            return Err(Error::RateTooSmall);
        }
        if rate.is_infinite() {
            return Err(Error::RateNotFinite);
        }
        Ok(Exp { rate })
    }

    /// The rate parameter.
    pub fn rate(&self) -> F {
        self.rate
    }
}

impl<F: Float> Distribution<F> for Exp<F>
where
    Open01: Distribution<F>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> F {
        let e: F = rng.sample(Exp1);
        e / self.rate
    }
}
