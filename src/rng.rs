// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Rng`] trait

use crate::distr::uniform::{SampleRange, SampleUniform};
use crate::distr::{self, Distribution, StandardUniform};
use rngkit_core::{BitGenerator, Fill};
use zerocopy::{FromBytes, IntoBytes};

/// An automatically-implemented extension trait on [`BitGenerator`]
/// deriving typed values from raw bits.
///
/// This is the primary trait to use when generating random values.
///
/// # Generic usage
///
/// The basic pattern is `fn foo<R: Rng + ?Sized>(rng: &mut R)`. Since every
/// [`BitGenerator`] implements `Rng`, `R: Rng` and `R: BitGenerator` are
/// equivalent bounds. The `?Sized` relaxation allows calling `foo` directly
/// on a `&mut dyn BitGenerator`.
///
/// ```
/// use rngkit::{Rng, SeedableGenerator};
/// use rngkit::rngs::Xorshift32;
///
/// fn foo<R: Rng + ?Sized>(rng: &mut R) -> f32 {
///     rng.random()
/// }
///
/// let v = foo(&mut Xorshift32::seed_from_u64(1));
/// assert!(v < 1.0);
/// ```
pub trait Rng: BitGenerator {
    /// Return a random value via the [`StandardUniform`] distribution.
    ///
    /// Integers use the full range of the type, `bool` is a fair coin and
    /// floats are uniform over `[0, 1)`.
    ///
    /// ```
    /// use rngkit::Rng;
    /// use rngkit::rngs::Mt19937_64;
    ///
    /// let mut rng = Mt19937_64::default();
    /// let x: u64 = rng.random();
    /// assert_eq!(x, 14514284786278117030);
    /// ```
    #[inline]
    fn random<T>(&mut self) -> T
    where
        StandardUniform: Distribution<T>,
    {
        StandardUniform.sample(self)
    }

    /// Generate a random value in the given range, or `None` if the range
    /// is empty.
    ///
    /// Both `low..high` and `low..=high` are supported. Integer results are
    /// exactly uniform. See also [`Uniform`](distr::Uniform), which
    /// precomputes the rejection zone for repeated draws from one range.
    ///
    /// ```
    /// use rngkit::{Rng, SeedableGenerator};
    /// use rngkit::rngs::Xoroshiro128Plus;
    ///
    /// let mut rng = Xoroshiro128Plus::seed_from_u64(3);
    /// let n: u32 = rng.random_range(0..10).unwrap();
    /// assert!(n < 10);
    /// let m: i64 = rng.random_range(i64::MIN..=i64::MAX).unwrap();
    /// let x: f64 = rng.random_range(-40.0..1.3e5).unwrap();
    /// assert!((-40.0..1.3e5).contains(&x));
    ///
    /// assert_eq!(rng.random_range(5..5), None::<u8>);
    /// ```
    fn random_range<T, R>(&mut self, range: R) -> Option<T>
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        range.sample_single(self).ok()
    }

    /// Return a bool with a probability `p` of being true.
    ///
    /// See also the [`Bernoulli`](distr::Bernoulli) distribution.
    ///
    /// # Panics
    ///
    /// If `p < 0`, `p > 1` or `p` is NaN.
    #[inline]
    #[track_caller]
    fn random_bool(&mut self, p: f64) -> bool {
        match distr::Bernoulli::new(p) {
            Ok(d) => self.sample(d),
            Err(_) => panic!("p={:?} is outside range [0.0, 1.0]", p),
        }
    }

    /// Return a bool with a probability of `numerator/denominator` of being
    /// true.
    ///
    /// # Panics
    ///
    /// If `denominator == 0` or `numerator > denominator`.
    #[inline]
    #[track_caller]
    fn random_ratio(&mut self, numerator: u32, denominator: u32) -> bool {
        match distr::Bernoulli::from_ratio(numerator, denominator) {
            Ok(d) => self.sample(d),
            Err(_) => panic!("p={}/{} is outside range [0.0, 1.0]", numerator, denominator),
        }
    }

    /// Sample a new value, using the given distribution.
    ///
    /// ```
    /// use rngkit::{Rng, SeedableGenerator};
    /// use rngkit::distr::Uniform;
    /// use rngkit::rngs::Xorshift1024Star;
    ///
    /// let mut rng = Xorshift1024Star::seed_from_u64(9);
    /// let x = rng.sample(Uniform::new(10u32, 15).unwrap());
    /// let y = rng.sample::<u16, _>(Uniform::new(10, 15).unwrap());
    /// assert!((10..15).contains(&x) && (10..15).contains(&y));
    /// ```
    fn sample<T, D: Distribution<T>>(&mut self, distr: D) -> T {
        distr.sample(self)
    }

    /// Create an iterator that generates values using the given
    /// distribution.
    ///
    /// This consumes the generator. Use `(&mut rng).sample_iter(..)` to
    /// keep it.
    ///
    /// ```
    /// use rngkit::Rng;
    /// use rngkit::distr::StandardUniform;
    /// use rngkit::rngs::mock::StepRng;
    ///
    /// let mut rng = StepRng::new(1, 1);
    /// let v: Vec<u64> = (&mut rng).sample_iter(StandardUniform).take(3).collect();
    /// assert_eq!(v, [1, 2, 3]);
    /// ```
    fn sample_iter<T, D>(self, distr: D) -> distr::DistIter<D, Self, T>
    where
        D: Distribution<T>,
        Self: Sized,
    {
        distr.sample_iter(self)
    }

    /// Fill a slice of integers with random data.
    ///
    /// Values are read from [`fill_bytes`](BitGenerator::fill_bytes) in
    /// little-endian order, so results are portable. They are generally not
    /// equal to the values [`Rng::random`] would yield.
    ///
    /// ```
    /// use rngkit::Rng;
    /// use rngkit::rngs::mock::StepRng;
    ///
    /// let mut arr = [0u32; 2];
    /// StepRng::new(0x0000_0002_0000_0001, 0).fill(&mut arr);
    /// assert_eq!(arr, [1, 2]);
    /// ```
    fn fill<T: Fill>(&mut self, dest: &mut [T]) {
        T::fill_slice(dest, self)
    }

    /// Fill a slice of plain data by randomizing its bytes in place.
    ///
    /// This is the raw fast path: any type without indirection and without
    /// invalid bit patterns qualifies. Byte order is native, so results of
    /// multi-byte types differ between platforms of different endianness.
    fn fill_raw<T: FromBytes + IntoBytes>(&mut self, dest: &mut [T]) {
        rngkit_core::fill_raw(self, dest)
    }
}

impl<R: BitGenerator + ?Sized> Rng for R {}
