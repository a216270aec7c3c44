// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Pareto distribution.

use crate::{Distribution, Open01};
use core::fmt;
use num_traits::Float;
use rngkit::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Samples floating-point numbers according to the Pareto distribution
///
/// A sample is `scale * U^(-1 / shape)` for `U` uniform on `(0, 1)`, which
/// is never below `scale`.
///
/// # Example
/// ```
/// use rngkit::{Rng, SeedableGenerator};
/// use rngkit::rngs::Xorshift1024Star;
/// use rngkit_distr::Pareto;
///
/// let val: f64 = Xorshift1024Star::seed_from_u64(3).sample(Pareto::new(1., 2.).unwrap());
/// assert!(val >= 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pareto<F> {
    scale: F,
    inv_neg_shape: F,
}

/// Error type returned from [`Pareto::new`].
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
            Error::ScaleTooSmall => "scale is not positive in Pareto distribution",
            Error::ShapeTooSmall => "shape is not positive in Pareto distribution",
        })
    }
}

impl std::error::Error for Error {}

impl<F> Pareto<F>
where
    F: Float,
    Open01: Distribution<F>,
{
    /// Construct a new Pareto distribution with given `scale` and `shape`.
    ///
    /// In the literature, `scale` is commonly written as x<sub>m</sub> or k and
    /// `shape` is often written as α.
    pub fn new(scale: F, shape: F) -> Result<Pareto<F>, Error> {
        if !(scale > F::zero()) {
            return Err(Error::ScaleTooSmall);
        }
        if !(shape > F::zero()) {
            return Err(Error::ShapeTooSmall);
        }
        Ok(Pareto {
            scale,
            inv_neg_shape: -F::one() / shape,
        })
    }
}

impl<F> Distribution<F> for Pareto<F>
where
    F: Float,
    Open01: Distribution<F>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> F {
        let u: F = rng.sample(Open01);
        self.scale * u.powf(self.inv_neg_shape)
    }
}
