// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Weibull distribution.

use crate::{Distribution, Open01};
use core::fmt;
use num_traits::Float;
use rngkit::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Samples floating-point numbers according to the Weibull distribution
///
/// A sample is `scale * (-ln U)^(1 / shape)` for `U` uniform on `(0, 1)`.
///
/// # Example
/// ```
/// use rngkit::{Rng, SeedableGenerator};
/// use rngkit::rngs::Xoroshiro128Plus;
/// use rngkit_distr::Weibull;
///
/// let val: f64 = Xoroshiro128Plus::seed_from_u64(8).sample(Weibull::new(1., 10.).unwrap());
/// println!("{}", val);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Weibull<F> {
    inv_shape: F,
    scale: F,
}

/// Error type returned from [`Weibull::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// `scale <= 0` or NaN.
    ScaleTooSmall,
    /// `shape <= 0` or NaN.
    ShapeTooSmall,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::ScaleTooSmall => "scale is not positive in Weibull distribution",
            Error::ShapeTooSmall => "shape is not positive in Weibull distribution",
        })
    }
}

impl std::error::Error for Error {}

impl<F> Weibull<F>
where
    F: Float,
    Open01: Distribution<F>,
{
    /// Construct a new `Weibull` distribution with given `scale` and `shape`.
    pub fn new(scale: F, shape: F) -> Result<Weibull<F>, Error> {
        if !(scale > F::zero()) {
            return Err(Error::ScaleTooSmall);
        }
        if !(shape > F::zero()) {
            return Err(Error::ShapeTooSmall);
        }
        Ok(Weibull {
            inv_shape: F::one() / shape,
            scale,
        })
    }
}

impl<F> Distribution<F> for Weibull<F>
where
    F: Float,
    Open01: Distribution<F>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> F {
        let x: F = rng.sample(Open01);
        self.scale * (-x.ln()).powf(self.inv_shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use average::{Estimate, Mean};

    #[test]
    fn invalid() {
        assert_eq!(Weibull::new(0., 0.), Err(Error::ScaleTooSmall));
        assert_eq!(Weibull::new(1., f64::NAN), Err(Error::ShapeTooSmall));
    }

    #[test]
    fn sample() {
        let scale = 1.0;
        let shape = 2.0;
        let d = Weibull::new(scale, shape).unwrap();
        let mut rng = crate::test::rng(1);
        for _ in 0..1000 {
            let r = d.sample(&mut rng);
            assert!(r >= 0.);
        }
    }

    #[test]
    fn shape_one_is_exponential() {
        // Weibull(scale, 1) has mean scale
        let d = Weibull::new(3.0, 1.0).unwrap();
        let mut rng = crate::test::rng(2);
        let mut mean = Mean::new();
        for _ in 0..20_000 {
            mean.add(d.sample(&mut rng));
        }
        assert!((mean.mean() - 3.0).abs() < 0.1, "{}", mean.mean());
    }
}
