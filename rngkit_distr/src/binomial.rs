// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The binomial distribution.

use crate::{Bernoulli, Distribution};
use core::fmt;
use rngkit::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The binomial distribution `Binomial(n, p)`.
///
/// This distribution has density function:
/// `f(k) = n!/(k! (n-k)!) p^k (1-p)^(n-k)` for `k >= 0`.
///
/// A sample is the number of successes in `n` independent [`Bernoulli`]
/// trials, so it costs `n` draws.
///
/// # Example
///
/// ```
/// use rngkit::SeedableGenerator;
/// use rngkit::rngs::Xoroshiro128Plus;
/// use rngkit_distr::{Binomial, Distribution};
///
/// let bin = Binomial::new(20, 0.3).unwrap();
/// let v = bin.sample(&mut Xoroshiro128Plus::seed_from_u64(1));
/// assert!(v <= 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binomial {
    /// Number of trials.
    n: u64,
    /// Probability of success.
    p: f64,
    trial: Bernoulli,
}

/// Error type returned from [`Binomial::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// `p < 0` or NaN.
    ProbabilityTooSmall,
    /// `p > 1`.
    ProbabilityTooLarge,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::ProbabilityTooSmall => "p < 0 or is NaN in binomial distribution",
            Error::ProbabilityTooLarge => "p > 1 in binomial distribution",
        })
    }
}

impl std::error::Error for Error {}

impl Binomial {
    /// Construct a new `Binomial` with the given shape parameters `n` (number
    /// of trials) and `p` (probability of success).
    pub fn new(n: u64, p: f64) -> Result<Binomial, Error> {
        if !(p >= 0.0) {
            return Err(Error::ProbabilityTooSmall);
        }
        if !(p <= 1.0) {
            return Err(Error::ProbabilityTooLarge);
        }
        let trial = Bernoulli::new(p).map_err(|_| Error::ProbabilityTooLarge)?;
        Ok(Binomial { n, p, trial })
    }

    /// Number of trials.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Probability of success of each trial.
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Distribution<u64> for Binomial {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        // Handle these values directly.
        if self.p == 0.0 {
            return 0;
        } else if self.p == 1.0 {
            return self.n;
        }
        let mut successes = 0;
        for _ in 0..self.n {
            if self.trial.sample(rng) {
                successes += 1;
            }
        }
        successes
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use average::{Estimate, Variance};
    use rngkit::rngs::mock::StepRng;

    fn test_binomial_mean_and_variance<R: Rng>(n: u64, p: f64, rng: &mut R) {
        let binomial = Binomial::new(n, p).unwrap();

        let expected_mean = n as f64 * p;
        let expected_variance = n as f64 * p * (1.0 - p);

        let mut stats = Variance::new();
        for _ in 0..2000 {
            stats.add(binomial.sample(rng) as f64);
        }
        let mean = stats.mean();
        let variance = stats.sample_variance();
        assert!((mean - expected_mean).abs() < expected_mean / 50.0, "n {} p {}: mean {}", n, p, mean);
        assert!(
            (variance - expected_variance).abs() < expected_variance / 10.0,
            "n {} p {}: variance {}",
            n,
            p,
            variance
        );
    }

    #[test]
    fn test_binomial() {
        let mut rng = crate::test::rng(351);
        test_binomial_mean_and_variance(150, 0.1, &mut rng);
        test_binomial_mean_and_variance(70, 0.6, &mut rng);
        test_binomial_mean_and_variance(40, 0.5, &mut rng);
        test_binomial_mean_and_variance(2000, 0.2, &mut rng);
    }

    #[test]
    fn test_binomial_end_points() {
        let mut rng = crate::test::rng(352);
        assert_eq!(rng.sample(Binomial::new(20, 0.0).unwrap()), 0);
        assert_eq!(rng.sample(Binomial::new(20, 1.0).unwrap()), 20);
        assert_eq!(rng.sample(Binomial::new(0, 0.5).unwrap()), 0);
    }

    #[test]
    fn one_draw_per_trial() {
        // draws below p * 2^64 succeed; the step alternates around it
        let mut rng = StepRng::new(0, 1 << 63);
        assert_eq!(Binomial::new(10, 0.5).unwrap().sample(&mut rng), 5);
    }

    #[test]
    fn test_binomial_invalid() {
        assert_eq!(Binomial::new(20, -10.0), Err(Error::ProbabilityTooSmall));
        assert_eq!(Binomial::new(20, f64::NAN), Err(Error::ProbabilityTooSmall));
        assert_eq!(Binomial::new(20, 10.0), Err(Error::ProbabilityTooLarge));
    }
}
