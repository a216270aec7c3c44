// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Poisson distribution.

use crate::{Distribution, StandardUniform};
use core::fmt;
use rngkit::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The Poisson distribution `Poisson(lambda)`.
///
/// This distribution has a density function:
/// `f(k) = lambda^k * exp(-lambda) / k!` for `k >= 0`.
///
/// Sampling uses Knuth's multiplicative method: uniform draws are
/// multiplied into a running product until it is no longer above
/// `exp(-lambda)`, and the number of draws before that point is the sample.
/// A sample costs `lambda + 1` draws on average.
///
/// # Example
///
/// ```
/// use rngkit::SeedableGenerator;
/// use rngkit::rngs::Xoroshiro128Plus;
/// use rngkit_distr::{Distribution, Poisson};
///
/// let poi = Poisson::new(2.0).unwrap();
/// let v: u64 = poi.sample(&mut Xoroshiro128Plus::seed_from_u64(1));
/// println!("{} is from a Poisson(2) distribution", v);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Poisson {
    lambda: f64,
    // exp(-lambda)
    limit: f64,
}

/// Error type returned from [`Poisson::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// `lambda <= 0` or NaN.
    ShapeTooSmall,
    /// `exp(-lambda)` underflows to zero.
    ShapeTooLarge,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::ShapeTooSmall => "lambda is not positive in Poisson distribution",
            Error::ShapeTooLarge => "lambda is too large for the Poisson multiplicative method",
        })
    }
}

impl std::error::Error for Error {}

impl Poisson {
    /// Construct a new `Poisson` with the given shape parameter
    /// `lambda`.
    ///
    /// `lambda` must be positive and small enough that `exp(-lambda)` is
    /// not zero, i.e. below about 745.
    pub fn new(lambda: f64) -> Result<Poisson, Error> {
        if !(lambda > 0.0) {
            return Err(Error::ShapeTooSmall);
        }
        let limit = (-lambda).exp();
        if limit == 0.0 {
            return Err(Error::ShapeTooLarge);
        }
        Ok(Poisson { lambda, limit })
    }

    /// The mean of the distribution.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl Distribution<u64> for Poisson {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let mut count = 0;
        let mut p = 1.0;
        loop {
            let u: f64 = rng.sample(StandardUniform);
            p *= u;
            if p <= self.limit {
                return count;
            }
            count += 1;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use average::{Estimate, Variance};
    use rngkit::rngs::mock::StepRng;

    fn test_poisson_avg_gen(lambda: f64, tol: f64) {
        let poisson = Poisson::new(lambda).unwrap();
        let mut rng = crate::test::rng(123);
        let mut stats = Variance::new();
        for _ in 0..10_000 {
            stats.add(poisson.sample(&mut rng) as f64);
        }
        assert!((stats.mean() - lambda).abs() < tol, "mean {} for {}", stats.mean(), lambda);
        assert!(
            (stats.sample_variance() - lambda).abs() < 4.0 * tol,
            "variance {} for {}",
            stats.sample_variance(),
            lambda
        );
    }

    #[test]
    fn test_poisson_avg() {
        test_poisson_avg_gen(10.0, 0.15);
        test_poisson_avg_gen(15.0, 0.2);
        test_poisson_avg_gen(0.5, 0.05);
        test_poisson_avg_gen(1.0, 0.05);
    }

    #[test]
    fn counts_multiplications() {
        // every draw is 0.5: count draws while 0.5^n > exp(-2)
        let mut rng = StepRng::new(1 << 63, 0);
        assert_eq!(Poisson::new(2.0).unwrap().sample(&mut rng), 2);
        // a zero draw ends the product immediately
        let mut zeros = StepRng::new(0, 0);
        assert_eq!(Poisson::new(50.0).unwrap().sample(&mut zeros), 0);
    }

    #[test]
    fn invalid_lambda() {
        assert_eq!(Poisson::new(0.0), Err(Error::ShapeTooSmall));
        assert_eq!(Poisson::new(-1.0), Err(Error::ShapeTooSmall));
        assert_eq!(Poisson::new(f64::NAN), Err(Error::ShapeTooSmall));
        assert_eq!(Poisson::new(1000.0), Err(Error::ShapeTooLarge));
        assert!(Poisson::new(700.0).is_ok());
    }
}
