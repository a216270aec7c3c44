// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The geometric distribution.

use crate::{Bernoulli, Distribution};
use core::fmt;
use rngkit::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The geometric distribution `Geometric(p)`.
///
/// This is the probability distribution of the number of failures before the
/// first success in a series of Bernoulli trials. It has the density function
/// `f(k) = (1 - p)^k p` for `k >= 0`, where `p` is the probability of success
/// on each trial.
///
/// Sampling runs [`Bernoulli`] trials until the first success, so a sample
/// costs `1 / p` draws on average.
///
/// # Example
///
/// ```
/// use rngkit::SeedableGenerator;
/// use rngkit::rngs::Xoroshiro128Plus;
/// use rngkit_distr::{Distribution, Geometric};
///
/// let geo = Geometric::new(0.25).unwrap();
/// let v = geo.sample(&mut Xoroshiro128Plus::seed_from_u64(1));
/// println!("{} is from a Geometric(0.25) distribution", v);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Geometric {
    p: f64,
    trial: Bernoulli,
}

/// Error type returned from [`Geometric::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// `p <= 0 || p > 1` or NaN
    InvalidProbability,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidProbability => "p is NaN or outside the interval (0, 1] in geometric distribution",
        })
    }
}

impl std::error::Error for Error {}

impl Geometric {
    /// Construct a new `Geometric` with the given probability of success
    /// on each trial, `p`.
    ///
    /// `p == 0` is rejected, as no trial would ever succeed.
    pub fn new(p: f64) -> Result<Self, Error> {
        if !(p > 0.0) {
            return Err(Error::InvalidProbability);
        }
        let trial = Bernoulli::new(p).map_err(|_| Error::InvalidProbability)?;
        Ok(Geometric { p, trial })
    }

    /// Probability of success of each trial.
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Distribution<u64> for Geometric {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let mut failures = 0;
        while !self.trial.sample(rng) {
            failures += 1;
        }
        failures
    }
}
