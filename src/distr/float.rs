// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Basic floating-point number distributions

use crate::distr::{Distribution, StandardUniform};
use crate::Rng;
use core::mem;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A distribution to sample floating point numbers uniformly in the open
/// interval `(0, 1)`, i.e. not including either endpoint.
///
/// All values that can be generated are of the form `n * ε + ε/2`. For `f32`
/// the 23 most significant random bits of a `u32` are used, for `f64` 52
/// from a `u64`.
///
/// See also: [`StandardUniform`] which samples from `[0, 1)`, [`Closed01`]
/// which samples from `[0, 1]` and [`Uniform`](super::Uniform) which samples
/// from arbitrary ranges.
///
/// # Example
/// ```
/// use rngkit::{Rng, SeedableGenerator};
/// use rngkit::distr::Open01;
/// use rngkit::rngs::Xorshift32;
///
/// let val: f32 = Xorshift32::seed_from_u64(1).sample(Open01);
/// assert!(val > 0.0 && val < 1.0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Open01;

/// A distribution to sample floating point numbers uniformly in the closed
/// interval `[0, 1]`, including both endpoints.
///
/// The 23 (`f32`) or 52 (`f64`) most significant bits of a draw form an
/// integer `m`, and the result is `m / (2^bits - 1)`. Both `0.0` and `1.0`
/// are reachable.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Closed01;

pub(crate) trait IntoFloat {
    type F;

    /// Helper method to combine the fraction and a constant exponent into a
    /// float.
    ///
    /// Only the least significant bits of `self` may be set, 23 for `f32` and
    /// 52 for `f64`.
    /// The resulting value will fall in a range that depends on the exponent.
    /// As an example the range with exponent 0 will be
    /// [2<sup>0</sup>..2<sup>1</sup>), which is [1..2).
    fn into_float_with_exponent(self, exponent: i32) -> Self::F;
}

macro_rules! float_impls {
    ($ty:ident, $uty:ident, $fraction_bits:expr, $exponent_bias:expr) => {
        impl IntoFloat for $uty {
            type F = $ty;
            #[inline(always)]
            fn into_float_with_exponent(self, exponent: i32) -> $ty {
                // The exponent is encoded using an offset-binary representation
                let exponent_bits = (($exponent_bias + exponent) as $uty) << $fraction_bits;
                $ty::from_bits(self | exponent_bits)
            }
        }

        impl Distribution<$ty> for StandardUniform {
            /// Mantissa-based method; 23/52 random bits; `[0, 1)` interval.
            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> $ty {
                let float_size = mem::size_of::<$ty>() as u32 * 8;
                let value: $uty = rng.random();
                let fraction = value >> (float_size - $fraction_bits);
                fraction.into_float_with_exponent(0) - 1.0
            }
        }

        impl Distribution<$ty> for Open01 {
            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> $ty {
                // Same as StandardUniform, shifted up by half a step.
                let float_size = mem::size_of::<$ty>() as u32 * 8;
                let value: $uty = rng.random();
                let fraction = value >> (float_size - $fraction_bits);
                fraction.into_float_with_exponent(0) - (1.0 - $ty::EPSILON / 2.0)
            }
        }

        impl Distribution<$ty> for Closed01 {
            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> $ty {
                let float_size = mem::size_of::<$ty>() as u32 * 8;
                let value: $uty = rng.random();
                let fraction = value >> (float_size - $fraction_bits);
                const MAX: $uty = (1 << $fraction_bits) - 1;
                fraction as $ty / MAX as $ty
            }
        }
    };
}

float_impls! { f32, u32, 23, 127 }
float_impls! { f64, u64, 52, 1023 }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rngs::mock::StepRng;

    const EPSILON32: f32 = f32::EPSILON;
    const EPSILON64: f64 = f64::EPSILON;

    #[test]
    fn standard_fp_edge_cases() {
        let mut zeros = StepRng::new(0, 0);
        assert_eq!(zeros.random::<f32>(), 0.0);
        assert_eq!(zeros.random::<f64>(), 0.0);

        let mut one32 = StepRng::new(1 << 9, 0);
        assert_eq!(one32.random::<f32>(), EPSILON32);

        let mut one64 = StepRng::new(1 << 12, 0);
        assert_eq!(one64.random::<f64>(), EPSILON64);

        let mut max = StepRng::new(!0, 0);
        assert_eq!(max.random::<f32>(), 1.0 - EPSILON32);
        assert_eq!(max.random::<f64>(), 1.0 - EPSILON64);
    }

    #[test]
    fn open01_edge_cases() {
        let mut zeros = StepRng::new(0, 0);
        assert_eq!(zeros.sample::<f32, _>(Open01), 0.0 + EPSILON32 / 2.0);
        assert_eq!(zeros.sample::<f64, _>(Open01), 0.0 + EPSILON64 / 2.0);

        let mut one32 = StepRng::new(1 << 9, 0);
        assert_eq!(one32.sample::<f32, _>(Open01), EPSILON32 / 2.0 * 3.0);

        let mut one64 = StepRng::new(1 << 12, 0);
        assert_eq!(one64.sample::<f64, _>(Open01), EPSILON64 / 2.0 * 3.0);

        let mut max = StepRng::new(!0, 0);
        assert_eq!(max.sample::<f32, _>(Open01), 1.0 - EPSILON32 / 2.0);
        assert_eq!(max.sample::<f64, _>(Open01), 1.0 - EPSILON64 / 2.0);
    }

    #[test]
    fn closed01_edge_cases() {
        let mut zeros = StepRng::new(0, 0);
        assert_eq!(zeros.sample::<f32, _>(Closed01), 0.0);
        assert_eq!(zeros.sample::<f64, _>(Closed01), 0.0);

        let mut max = StepRng::new(!0, 0);
        assert_eq!(max.sample::<f32, _>(Closed01), 1.0);
        assert_eq!(max.sample::<f64, _>(Closed01), 1.0);

        let mut half = StepRng::new(1 << 63, 0);
        let x = half.sample::<f64, _>(Closed01);
        assert!(x > 0.5 && x - 0.5 < EPSILON64);
    }

    #[test]
    fn f32_uses_one_u32() {
        // the high 23 bits of the low u32 word
        let mut rng = StepRng::new(0xffff_ffff_0000_0000, 0);
        assert_eq!(rng.random::<f32>(), 0.0);
    }
}
