// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The normal and derived distributions.

use crate::{Distribution, StandardUniform};
use core::cell::Cell;
use core::fmt;
use num_traits::Float;
use rngkit::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Samples floating-point numbers according to the normal distribution
/// `N(0, 1)` (a.k.a. a standard normal, or Gaussian).
///
/// Implemented with the Marsaglia polar method. Two coordinates are drawn
/// uniformly from `[-1, 1)` until they fall strictly inside the unit
/// circle (and not on its centre); the accepted pair yields two independent
/// standard normal values. One is returned and the other is kept in a spare
/// slot for the next call.
///
/// The spare slot is per thread and per float type: an `f32` sample never
/// consumes an `f64` spare. A call that finds a spare returns it without
/// touching the generator and empties the slot. Consequently the draws
/// seen by a generator depend on earlier normal samples taken on the same
/// thread, even with a different generator; call [`clear_normal_cache`]
/// before replaying a seeded sequence.
///
/// # Example
/// ```
/// use rngkit::{Rng, SeedableGenerator};
/// use rngkit::rngs::Xoroshiro128Plus;
/// use rngkit_distr::StandardNormal;
///
/// let val: f64 = Xoroshiro128Plus::seed_from_u64(1).sample(StandardNormal);
/// println!("{}", val);
/// ```
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StandardNormal;

thread_local! {
    static SPARE_F32: Cell<Option<f32>> = const { Cell::new(None) };
    static SPARE_F64: Cell<Option<f64>> = const { Cell::new(None) };
}

/// Empty the spare normal values of the current thread.
///
/// After this call the next [`StandardNormal`] sample of each float type
/// draws a fresh pair from its generator.
pub fn clear_normal_cache() {
    SPARE_F32.with(|s| s.set(None));
    SPARE_F64.with(|s| s.set(None));
}

macro_rules! polar_impl {
    ($ty:ident, $spare:ident) => {
        impl Distribution<$ty> for StandardNormal {
            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> $ty {
                if let Some(spare) = $spare.with(|s| s.take()) {
                    return spare;
                }
                loop {
                    let u: $ty = rng.sample(StandardUniform);
                    let v: $ty = rng.sample(StandardUniform);
                    let x = 2.0 * u - 1.0;
                    let y = 2.0 * v - 1.0;
                    let s = x * x + y * y;
                    if s > 0.0 && s < 1.0 {
                        let m = (-2.0 * s.ln() / s).sqrt();
                        $spare.with(|slot| slot.set(Some(y * m)));
                        return x * m;
                    }
                }
            }
        }
    };
}

polar_impl!(f32, SPARE_F32);
polar_impl!(f64, SPARE_F64);

/// The normal distribution `N(mean, std_dev**2)`.
///
/// Samples are `mean + std_dev * z` for `z` from [`StandardNormal`], and
/// share its per-thread spare slot.
///
/// # Example
///
/// ```
/// use rngkit::SeedableGenerator;
/// use rngkit::rngs::Xoroshiro128Plus;
/// use rngkit_distr::{Distribution, Normal};
///
/// // mean 2, standard deviation 3
/// let normal = Normal::new(2.0, 3.0).unwrap();
/// let v = normal.sample(&mut Xoroshiro128Plus::seed_from_u64(1));
/// println!("{} is from a N(2, 9) distribution", v)
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Normal<F> {
    mean: F,
    std_dev: F,
}

/// Error type returned from [`Normal::new`] and [`LogNormal::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The mean is infinite or NaN.
    MeanNotFinite,
    /// `std_dev < 0`, or `std_dev` is infinite or NaN.
    BadStdDev,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::MeanNotFinite => "mean is not finite in normal distribution",
            Error::BadStdDev => "std_dev is negative or not finite in normal distribution",
        })
    }
}

impl std::error::Error for Error {}

impl<F> Normal<F>
where
    F: Float,
    StandardNormal: Distribution<F>,
{
    /// Construct a new `Normal` distribution with the given mean and
    /// standard deviation.
    ///
    /// A standard deviation of zero is allowed; every sample is then the
    /// mean.
    #[inline]
    pub fn new(mean: F, std_dev: F) -> Result<Normal<F>, Error> {
        if !mean.is_finite() {
            return Err(Error::MeanNotFinite);
        }
        if !(std_dev >= F::zero()) || !std_dev.is_finite() {
            return Err(Error::BadStdDev);
        }
        Ok(Normal { mean, std_dev })
    }

    /// Returns the mean of the distribution.
    pub fn mean(&self) -> F {
        self.mean
    }

    /// Returns the standard deviation of the distribution.
    pub fn std_dev(&self) -> F {
        self.std_dev
    }
}

impl<F> Distribution<F> for Normal<F>
where
    F: Float,
    StandardNormal: Distribution<F>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> F {
        let z: F = rng.sample(StandardNormal);
        self.mean + self.std_dev * z
    }
}

/// The log-normal distribution `ln N(mean, std_dev**2)`.
///
/// If `X` is log-normal distributed, then `ln(X)` is `N(mean, std_dev**2)`
/// distributed.
///
/// # Example
///
/// ```
/// use rngkit::SeedableGenerator;
/// use rngkit::rngs::Xoroshiro128Plus;
/// use rngkit_distr::{Distribution, LogNormal};
///
/// // mean 2, standard deviation 3
/// let log_normal = LogNormal::new(2.0, 3.0).unwrap();
/// let v = log_normal.sample(&mut Xoroshiro128Plus::seed_from_u64(1));
/// assert!(v > 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LogNormal<F> {
    norm: Normal<F>,
}

impl<F> LogNormal<F>
where
    F: Float,
    StandardNormal: Distribution<F>,
{
    /// Construct a new `LogNormal` distribution with the given mean
    /// and standard deviation of the logarithm of the distribution.
    #[inline]
    pub fn new(mean: F, std_dev: F) -> Result<LogNormal<F>, Error> {
        Ok(LogNormal {
            norm: Normal::new(mean, std_dev)?,
        })
    }
}

impl<F> Distribution<F> for LogNormal<F>
where
    F: Float,
    StandardNormal: Distribution<F>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> F {
        self.norm.sample(rng).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use average::{Estimate, Kurtosis};
    use rngkit::rngs::mock::StepRng;

    #[test]
    fn test_normal() {
        let norm = Normal::new(10.0, 10.0).unwrap();
        let mut rng = crate::test::rng(210);
        for _ in 0..1000 {
            norm.sample(&mut rng);
        }
    }

    #[test]
    fn invalid_parameters() {
        assert_eq!(Normal::new(10.0, -1.0), Err(Error::BadStdDev));
        assert_eq!(Normal::new(0.0, f64::NAN), Err(Error::BadStdDev));
        assert_eq!(Normal::new(0.0, f64::INFINITY), Err(Error::BadStdDev));
        assert_eq!(Normal::new(f64::NAN, 1.0), Err(Error::MeanNotFinite));
        assert_eq!(LogNormal::new(10.0, -1.0), Err(Error::BadStdDev));
        assert!(Normal::new(3.0, 0.0).is_ok());
    }

    #[test]
    fn test_log_normal() {
        let lnorm = LogNormal::new(10.0, 10.0).unwrap();
        let mut rng = crate::test::rng(211);
        for _ in 0..1000 {
            assert!(lnorm.sample(&mut rng) >= 0.0);
        }
    }

    #[test]
    fn spare_is_returned_without_drawing() {
        clear_normal_cache();
        // u = v = 0.75: x = y = 0.5, s = 0.5
        let mut rng = StepRng::new(0xC000_0000_0000_0000, 0);
        let first: f64 = rng.sample(StandardNormal);
        let m = (-2.0 * 0.5f64.ln() / 0.5).sqrt();
        assert_eq!(first, 0.5 * m);

        // a generator that would panic on use: the spare needs no draws
        struct Unused;
        impl rngkit::BitGenerator for Unused {
            fn next_u32(&mut self) -> u32 {
                panic!("spare sample drew from the generator")
            }
            fn next_u64(&mut self) -> u64 {
                panic!("spare sample drew from the generator")
            }
            fn fill_bytes(&mut self, _: &mut [u8]) {
                panic!("spare sample drew from the generator")
            }
        }
        let second: f64 = Unused.sample(StandardNormal);
        assert_eq!(second, 0.5 * m);
    }

    #[test]
    fn cache_is_per_type_and_clearable() {
        clear_normal_cache();
        let mut rng = crate::test::rng(212);
        let _: f64 = rng.sample(StandardNormal);
        assert!(SPARE_F64.with(|s| s.get()).is_some());
        assert!(SPARE_F32.with(|s| s.get()).is_none());
        clear_normal_cache();
        assert!(SPARE_F64.with(|s| s.get()).is_none());
    }

    #[test]
    fn replay_after_clear() {
        let mut a = crate::test::rng(213);
        clear_normal_cache();
        let first: Vec<f64> = (0..11).map(|_| a.sample(StandardNormal)).collect();
        let mut b = crate::test::rng(213);
        clear_normal_cache();
        let second: Vec<f64> = (0..11).map(|_| b.sample(StandardNormal)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn gaussian_moments() {
        clear_normal_cache();
        let mut rng = crate::test::rng(214);
        let mut stats = Kurtosis::new();
        for _ in 0..10_000 {
            stats.add(rng.sample::<f64, _>(StandardNormal));
        }
        assert!(stats.mean().abs() < 0.1, "mean {}", stats.mean());
        assert!((stats.sample_variance() - 1.0).abs() < 0.1);
        assert_eq!(stats.skewness().round(), 0.0);
        assert_eq!(stats.kurtosis().round(), 0.0);
    }

    #[test]
    fn shifted_moments() {
        let norm = Normal::new(-4.0f32, 0.5).unwrap();
        let mut rng = crate::test::rng(215);
        let n = 10_000;
        let sum: f64 = (0..n).map(|_| f64::from(norm.sample(&mut rng))).sum();
        assert!((sum / n as f64 + 4.0).abs() < 0.05);
    }
}
