// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A distribution uniformly sampling numbers within a given range.
//!
//! [`Uniform`] is the standard distribution to sample uniformly from a
//! range; e.g. `Uniform::new_inclusive(1, 6).unwrap()` can sample integers
//! from 1 to 6, like a standard die. [`Rng::random_range`] is a convenient
//! shortcut for a single draw.
//!
//! At a lower level, [`UniformSampler`] is the back-end trait, implemented
//! by [`UniformInt`] and [`UniformFloat`], and [`SampleUniform`] links each
//! value type to its sampler.
//!
//! # Integers
//!
//! Integer sampling is exact. Both endpoints are mapped to the unsigned
//! type of the same width (for signed types, by flipping the sign bit,
//! which preserves order); with `range` the number of admissible values,
//! draws are rejected above
//! `zone = MAX - (2^bits mod range)` and the accepted draw is reduced
//! modulo `range`. The draw has the width of the sampled type. When the
//! range covers every value of the type, the raw draw is returned.
//!
//! # Floats
//!
//! Floats scale one draw affinely: `[low, high)` uses
//! [`StandardUniform`](super::StandardUniform) and redraws a result rounded
//! up to `high`; `[low, high]` uses [`Closed01`](super::Closed01) and clamps
//! at `high`.
//!
//! [`Rng::random_range`]: crate::Rng::random_range

use core::fmt;
use core::ops::{Range, RangeInclusive};

use crate::distr::{Closed01, Distribution};
use crate::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Error type returned from [`Uniform::new`] and `new_inclusive`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// `low > high`, or equal in case of exclusive range.
    EmptyRange,
    /// Input or range `high - low` is non-finite. Not relevant to integer
    /// types.
    NonFinite,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::EmptyRange => "low > high (or equal if exclusive) in uniform distribution",
            Error::NonFinite => "Non-finite range in uniform distribution",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Sample values uniformly between two bounds.
///
/// [`Uniform::new`] and [`Uniform::new_inclusive`] construct a uniform
/// distribution sampling from the given range; these functions may do
/// extra work up front to make sampling of multiple values faster. If only
/// one sample from the range is required, [`Rng::random_range`] can be
/// more efficient.
///
/// When sampling from a constant range, many calculations can happen at
/// compile-time and all methods should be fast; for floating-point ranges
/// and the full range of integer types, this should have comparable
/// performance to the [`StandardUniform`](super::StandardUniform)
/// distribution.
///
/// # Example
///
/// ```
/// use rngkit::SeedableGenerator;
/// use rngkit::distr::{Distribution, Uniform};
/// use rngkit::rngs::Xoroshiro128Plus;
///
/// let between = Uniform::try_from(10..10000).unwrap();
/// let mut rng = Xoroshiro128Plus::seed_from_u64(1);
/// let mut sum = 0;
/// for _ in 0..1000 {
///     sum += between.sample(&mut rng);
/// }
/// assert!(sum >= 1000 * 10);
/// ```
///
/// [`Rng::random_range`]: crate::Rng::random_range
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound(serialize = "X::Sampler: Serialize")))]
#[cfg_attr(feature = "serde", serde(bound(deserialize = "X::Sampler: Deserialize<'de>")))]
pub struct Uniform<X: SampleUniform>(X::Sampler);

impl<X: SampleUniform> Uniform<X> {
    /// Create a new `Uniform` instance, which samples uniformly from the
    /// half open range `[low, high)` (excluding `high`).
    ///
    /// Fails if `low >= high`, or if `low`, `high` or the range
    /// `high - low` is non-finite.
    pub fn new(low: X, high: X) -> Result<Uniform<X>, Error> {
        X::Sampler::new(low, high).map(Uniform)
    }

    /// Create a new `Uniform` instance, which samples uniformly from the
    /// closed range `[low, high]` (inclusive).
    ///
    /// Fails if `low > high`, or if `low`, `high` or the range
    /// `high - low` is non-finite.
    pub fn new_inclusive(low: X, high: X) -> Result<Uniform<X>, Error> {
        X::Sampler::new_inclusive(low, high).map(Uniform)
    }
}

impl<X: SampleUniform> Distribution<X> for Uniform<X> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> X {
        self.0.sample(rng)
    }
}

impl<X: SampleUniform> TryFrom<Range<X>> for Uniform<X> {
    type Error = Error;

    fn try_from(r: Range<X>) -> Result<Uniform<X>, Error> {
        Uniform::new(r.start, r.end)
    }
}

impl<X: SampleUniform> TryFrom<RangeInclusive<X>> for Uniform<X> {
    type Error = Error;

    fn try_from(r: RangeInclusive<X>) -> Result<Uniform<X>, Error> {
        let (low, high) = r.into_inner();
        Uniform::new_inclusive(low, high)
    }
}

/// Helper trait for creating objects using the correct implementation of
/// [`UniformSampler`] for the sampling type.
///
/// See the [module documentation](self) on how to implement [`Uniform`]
/// range sampling for a custom type.
pub trait SampleUniform: Sized {
    /// The `UniformSampler` implementation supporting type `X`.
    type Sampler: UniformSampler<X = Self>;
}

/// Helper trait handling actual uniform sampling.
///
/// See the [module documentation](self) on how to implement [`Uniform`]
/// range sampling for a custom type.
///
/// Implementation of [`sample_single`] is optional, and is only useful when
/// the implementation can be faster than `Self::new(low, high).sample(rng)`.
///
/// [`sample_single`]: UniformSampler::sample_single
pub trait UniformSampler: Sized {
    /// The type sampled by this implementation.
    type X;

    /// Construct self, with inclusive lower bound and exclusive upper bound
    /// `[low, high)`.
    fn new(low: Self::X, high: Self::X) -> Result<Self, Error>;

    /// Construct self, with inclusive bounds `[low, high]`.
    fn new_inclusive(low: Self::X, high: Self::X) -> Result<Self, Error>;

    /// Sample a value.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::X;

    /// Sample a single value uniformly from a range with inclusive lower
    /// bound and exclusive upper bound `[low, high)`.
    fn sample_single<R: Rng + ?Sized>(
        low: Self::X,
        high: Self::X,
        rng: &mut R,
    ) -> Result<Self::X, Error> {
        let uniform: Self = UniformSampler::new(low, high)?;
        Ok(uniform.sample(rng))
    }

    /// Sample a single value uniformly from a range with inclusive lower
    /// bound and inclusive upper bound `[low, high]`.
    fn sample_single_inclusive<R: Rng + ?Sized>(
        low: Self::X,
        high: Self::X,
        rng: &mut R,
    ) -> Result<Self::X, Error> {
        let uniform: Self = UniformSampler::new_inclusive(low, high)?;
        Ok(uniform.sample(rng))
    }
}

/// Range that supports generating a single sample efficiently.
///
/// Any type implementing this trait can be used to specify the sampled
/// range for [`Rng::random_range`](crate::Rng::random_range).
pub trait SampleRange<T> {
    /// Generate a sample from the given range.
    fn sample_single<R: Rng + ?Sized>(self, rng: &mut R) -> Result<T, Error>;

    /// Check whether the range is empty.
    fn is_empty(&self) -> bool;
}

impl<T: SampleUniform + PartialOrd> SampleRange<T> for Range<T> {
    #[inline]
    fn sample_single<R: Rng + ?Sized>(self, rng: &mut R) -> Result<T, Error> {
        T::Sampler::sample_single(self.start, self.end, rng)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        !(self.start < self.end)
    }
}

impl<T: SampleUniform + PartialOrd> SampleRange<T> for RangeInclusive<T> {
    #[inline]
    fn sample_single<R: Rng + ?Sized>(self, rng: &mut R) -> Result<T, Error> {
        let (low, high) = self.into_inner();
        T::Sampler::sample_single_inclusive(low, high, rng)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        !(self.start() <= self.end())
    }
}

/// The back-end implementing [`UniformSampler`] for integer types.
///
/// Unless you are implementing [`UniformSampler`] for your own type, this
/// type should not be used directly, use [`Uniform`] instead.
///
/// All three fields hold values of the unsigned type of the same width,
/// stored bit-for-bit in `X`. `range == 0` stands for the full domain of
/// the type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UniformInt<X> {
    low: X,
    range: X,
    zone: X,
}

macro_rules! uniform_int_impl {
    ($ty:ty, $uty:ty, $flip:expr) => {
        impl SampleUniform for $ty {
            type Sampler = UniformInt<$ty>;
        }

        impl UniformSampler for UniformInt<$ty> {
            type X = $ty;

            #[inline]
            fn new(low: $ty, high: $ty) -> Result<Self, Error> {
                if !(low < high) {
                    return Err(Error::EmptyRange);
                }
                UniformSampler::new_inclusive(low, high - 1)
            }

            #[inline]
            fn new_inclusive(low: $ty, high: $ty) -> Result<Self, Error> {
                if !(low <= high) {
                    return Err(Error::EmptyRange);
                }
                let low = (low as $uty) ^ $flip;
                let high = (high as $uty) ^ $flip;

                let range = high.wrapping_sub(low).wrapping_add(1);
                let zone = if range > 0 {
                    // 2^bits mod range == (2^bits - range) mod range
                    <$uty>::MAX - (range.wrapping_neg() % range)
                } else {
                    <$uty>::MAX
                };

                Ok(UniformInt {
                    low: low as $ty,
                    range: range as $ty,
                    zone: zone as $ty,
                })
            }

            #[inline]
            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> $ty {
                let range = self.range as $uty;
                if range == 0 {
                    return rng.random();
                }
                let zone = self.zone as $uty;
                loop {
                    let v: $uty = rng.random();
                    if v <= zone {
                        let low = self.low as $uty;
                        return (low.wrapping_add(v % range) ^ $flip) as $ty;
                    }
                }
            }
        }
    };
}

uniform_int_impl! { i8, u8, 1 << 7 }
uniform_int_impl! { i16, u16, 1 << 15 }
uniform_int_impl! { i32, u32, 1 << 31 }
uniform_int_impl! { i64, u64, 1 << 63 }
uniform_int_impl! { i128, u128, 1 << 127 }
uniform_int_impl! { isize, usize, 1 << (usize::BITS - 1) }
uniform_int_impl! { u8, u8, 0 }
uniform_int_impl! { u16, u16, 0 }
uniform_int_impl! { u32, u32, 0 }
uniform_int_impl! { u64, u64, 0 }
uniform_int_impl! { u128, u128, 0 }
uniform_int_impl! { usize, usize, 0 }

/// The back-end implementing [`UniformSampler`] for floating-point types.
///
/// Unless you are implementing [`UniformSampler`] for your own type, this
/// type should not be used directly, use [`Uniform`] instead.
///
/// Values have 23 (`f32`) or 52 (`f64`) bits of randomness.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UniformFloat<X> {
    low: X,
    high: X,
    scale: X,
    inclusive: bool,
}

macro_rules! uniform_float_impl {
    ($ty:ty) => {
        impl SampleUniform for $ty {
            type Sampler = UniformFloat<$ty>;
        }

        impl UniformFloat<$ty> {
            fn check(low: $ty, high: $ty) -> Result<$ty, Error> {
                if !(low.is_finite() && high.is_finite()) {
                    return Err(Error::NonFinite);
                }
                if !(low <= high) {
                    return Err(Error::EmptyRange);
                }
                let scale = high - low;
                if !scale.is_finite() {
                    return Err(Error::NonFinite);
                }
                Ok(scale)
            }
        }

        impl UniformSampler for UniformFloat<$ty> {
            type X = $ty;

            fn new(low: $ty, high: $ty) -> Result<Self, Error> {
                let scale = Self::check(low, high)?;
                if !(low < high) {
                    return Err(Error::EmptyRange);
                }
                Ok(UniformFloat {
                    low,
                    high,
                    scale,
                    inclusive: false,
                })
            }

            fn new_inclusive(low: $ty, high: $ty) -> Result<Self, Error> {
                let scale = Self::check(low, high)?;
                Ok(UniformFloat {
                    low,
                    high,
                    scale,
                    inclusive: true,
                })
            }

            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> $ty {
                if self.inclusive {
                    let value: $ty = rng.sample(Closed01);
                    let res = value * self.scale + self.low;
                    return if res > self.high { self.high } else { res };
                }
                loop {
                    let value: $ty = rng.random();
                    let res = value * self.scale + self.low;
                    // rounding may hit `high`
                    if res < self.high {
                        return res;
                    }
                }
            }
        }
    };
}

uniform_float_impl! { f32 }
uniform_float_impl! { f64 }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rngs::mock::StepRng;

    #[test]
    fn empty_ranges() {
        assert_eq!(Uniform::new(10, 10), Err(Error::EmptyRange));
        assert_eq!(Uniform::new(10, 9), Err(Error::EmptyRange));
        assert_eq!(Uniform::new_inclusive(10u8, 9), Err(Error::EmptyRange));
        assert!(Uniform::new_inclusive(10u8, 10).is_ok());
        assert_eq!(Uniform::new(1.0, 1.0), Err(Error::EmptyRange));
        assert_eq!(Uniform::new_inclusive(2.0f32, 1.0), Err(Error::EmptyRange));
    }

    #[test]
    fn non_finite_ranges() {
        assert_eq!(Uniform::new(0.0, f64::INFINITY), Err(Error::NonFinite));
        assert_eq!(Uniform::new(f64::NAN, 1.0), Err(Error::NonFinite));
        assert_eq!(Uniform::new_inclusive(f32::NEG_INFINITY, 0.0), Err(Error::NonFinite));
        assert_eq!(Uniform::new(-f64::MAX, f64::MAX), Err(Error::NonFinite));
    }

    #[test]
    fn rejects_above_zone() {
        // 2^8 mod 200 = 56, so the zone is [0, 199]
        let d = Uniform::new(0u8, 200).unwrap();
        assert_eq!(d.0.zone, 199);
        let mut rng = StepRng::new(250, 1);
        assert_eq!(d.sample(&mut rng), 0);
        assert_eq!(rng.random::<u64>(), 257);
    }

    #[test]
    fn exact_multiple_has_full_zone() {
        let d = Uniform::new(0u32, 1 << 16).unwrap();
        assert_eq!(d.0.zone, u32::MAX);
        assert_eq!(d.sample(&mut StepRng::new(0x1_0005, 0)), 5);
    }

    #[test]
    fn signed_ranges() {
        let d = Uniform::new_inclusive(-3i8, 3).unwrap();
        assert_eq!(d.sample(&mut StepRng::new(0, 0)), -3);
        assert_eq!(d.sample(&mut StepRng::new(6, 0)), 3);
        assert_eq!(d.sample(&mut StepRng::new(7, 0)), -3);

        let d = Uniform::new(i64::MIN, i64::MIN + 2).unwrap();
        assert_eq!(d.sample(&mut StepRng::new(1, 0)), i64::MIN + 1);
    }

    #[test]
    fn full_domain_returns_raw_draw() {
        let d = Uniform::new_inclusive(i32::MIN, i32::MAX).unwrap();
        assert_eq!(d.0.range, 0);
        assert_eq!(d.sample(&mut StepRng::new(0xdead_beef, 0)), 0xdead_beef_u32 as i32);

        let d = Uniform::new_inclusive(0u64, u64::MAX).unwrap();
        assert_eq!(d.sample(&mut StepRng::new(u64::MAX - 1, 0)), u64::MAX - 1);

        let d = Uniform::new_inclusive(u128::MIN, u128::MAX).unwrap();
        assert_eq!(d.sample(&mut StepRng::new(1, 1)), (2u128 << 64) | 1);
    }

    #[test]
    fn integers_in_range() {
        let mut rng = crate::test::rng(251);
        macro_rules! t {
            ($($ty:ident),*) => {{
                $(
                    let v: &[($ty, $ty)] = &[
                        (0, 10),
                        (10, 127),
                        ($ty::MIN, $ty::MAX),
                        ($ty::MIN, 0),
                        ($ty::MAX - 4, $ty::MAX),
                    ];
                    for &(low, high) in v.iter() {
                        let my_uniform = Uniform::new(low, high).unwrap();
                        for _ in 0..1000 {
                            let v: $ty = rng.sample(my_uniform);
                            assert!(low <= v && v < high);
                        }

                        let my_uniform = Uniform::new_inclusive(low, high).unwrap();
                        for _ in 0..1000 {
                            let v: $ty = rng.sample(my_uniform);
                            assert!(low <= v && v <= high);
                        }

                        for _ in 0..1000 {
                            let v = rng.random_range(low..high).unwrap();
                            assert!(low <= v && v < high);
                        }
                    }
                )*
            }};
        }
        t!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
    }

    #[test]
    fn floats_in_range() {
        let mut rng = crate::test::rng(252);
        let v: &[(f64, f64)] = &[
            (0.0, 100.0),
            (-1e35, -1e25),
            (1e-35, 1e-25),
            (-1e35, 1e35),
            (-3.0, -3.0 + 4.0 * f64::EPSILON),
        ];
        for &(low, high) in v.iter() {
            let my_uniform = Uniform::new(low, high).unwrap();
            let my_incl_uniform = Uniform::new_inclusive(low, high).unwrap();
            for _ in 0..100 {
                let v = rng.sample(my_uniform);
                assert!(low <= v && v < high);
                let v = rng.sample(my_incl_uniform);
                assert!(low <= v && v <= high);
            }
        }
    }

    #[test]
    fn float_edge_draws() {
        let d = Uniform::new_inclusive(2.0, 3.0).unwrap();
        assert_eq!(d.sample(&mut StepRng::new(u64::MAX, 0)), 3.0);
        assert_eq!(d.sample(&mut StepRng::new(0, 0)), 2.0);

        let d = Uniform::new(2.0, 3.0).unwrap();
        assert_eq!(d.sample(&mut StepRng::new(0, 0)), 2.0);
        assert!(d.sample(&mut StepRng::new(u64::MAX, 0)) < 3.0);

        let d = Uniform::new_inclusive(-11.0f32, -11.0).unwrap();
        assert_eq!(d.sample(&mut StepRng::new(12345, 0)), -11.0);
    }

    #[test]
    fn from_ranges() {
        let r = Uniform::try_from(2u32..7).unwrap();
        assert_eq!(r.0.low, 2);
        assert_eq!(r.0.range, 5);
        let r = Uniform::try_from(2u32..=6).unwrap();
        assert_eq!(r.0.range, 5);
        assert!(Uniform::try_from(7u32..2).is_err());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            Error::NonFinite.to_string(),
            "Non-finite range in uniform distribution"
        );
    }
}
