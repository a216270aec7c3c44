// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Generating random samples from probability distributions
//!
//! A distribution is a type implementing [`Distribution<T>`]: a descriptor
//! whose parameters are validated once by its constructor and which can
//! then produce any number of samples from a generator, through
//! [`Distribution::sample`] or [`Rng::sample`](crate::Rng::sample).
//!
//! This module provides the building blocks:
//!
//! - [`StandardUniform`]: integers over their full range, fair booleans and
//!   floats in `[0, 1)`. [`Rng::random`](crate::Rng::random) draws from it.
//! - [`Open01`] and [`Closed01`]: floats in `(0, 1)` and `[0, 1]`.
//! - [`Uniform`]: values uniformly distributed within a range.
//! - [`Bernoulli`]: booleans with a given probability.
//!
//! Continuous and discrete distributions such as the normal, gamma or
//! Poisson distribution live in the `rngkit_distr` crate.

use crate::Rng;
use core::iter;
use core::marker::PhantomData;

mod bernoulli;
mod float;
mod integer;
pub mod uniform;

pub use self::bernoulli::{Bernoulli, BernoulliError};
pub use self::float::{Closed01, Open01};
#[doc(inline)]
pub use self::uniform::Uniform;

/// Types (distributions) that can be used to create a random instance of
/// `T`.
///
/// All implementations are expected to be immutable; this has the
/// significant advantage of not needing to consider thread safety, and for
/// most distributions efficient state-less sampling algorithms are
/// available.
pub trait Distribution<T> {
    /// Generate a random value of `T`, using `rng` as the source of
    /// randomness.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T;

    /// Create an iterator that generates random values of `T`, using `rng`
    /// as the source of randomness.
    ///
    /// Note that this function takes `self` by value. This works since
    /// `Distribution<T>` is implemented for `&D` where `D: Distribution<T>`,
    /// however borrowing is not automatic hence `distr.sample_iter(...)` may
    /// need to be replaced with `(&distr).sample_iter(...)` to borrow or
    /// `(&*distr).sample_iter(...)` to reborrow an existing reference.
    ///
    /// # Example
    ///
    /// ```
    /// use rngkit::SeedableGenerator;
    /// use rngkit::distr::{Distribution, StandardUniform, Uniform};
    /// use rngkit::rngs::Xoroshiro128Plus;
    ///
    /// let mut rng = Xoroshiro128Plus::seed_from_u64(5);
    ///
    /// // Vec of 16 x f32:
    /// let v: Vec<f32> = StandardUniform.sample_iter(&mut rng).take(16).collect();
    ///
    /// // Dice-rolling:
    /// let die_range = Uniform::new_inclusive(1, 6).unwrap();
    /// let mut roll_die = die_range.sample_iter(&mut rng);
    /// while roll_die.next().unwrap() != 6 {
    ///     println!("Not a 6; rolling again!");
    /// }
    /// ```
    fn sample_iter<R>(self, rng: R) -> DistIter<Self, R, T>
    where
        R: Rng,
        Self: Sized,
    {
        DistIter {
            distr: self,
            rng,
            phantom: PhantomData,
        }
    }
}

impl<T, D: Distribution<T> + ?Sized> Distribution<T> for &D {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        (*self).sample(rng)
    }
}

/// An iterator that generates random values of `T` with distribution `D`,
/// using `R` as the source of randomness.
///
/// This `struct` is created by the [`sample_iter`] method on
/// [`Distribution`]. See its documentation for more.
///
/// [`sample_iter`]: Distribution::sample_iter
#[derive(Debug)]
pub struct DistIter<D, R, T> {
    distr: D,
    rng: R,
    phantom: PhantomData<T>,
}

impl<D, R, T> Iterator for DistIter<D, R, T>
where
    D: Distribution<T>,
    R: Rng,
{
    type Item = T;

    #[inline(always)]
    fn next(&mut self) -> Option<T> {
        // Limitation: the sample is always some value, but the iterator
        // never ends.
        Some(self.distr.sample(&mut self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<D, R, T> iter::FusedIterator for DistIter<D, R, T>
where
    D: Distribution<T>,
    R: Rng,
{
}

/// The standard distribution of each type
///
/// - Integers (`i8`..`i128`, `u8`..`u128`, `isize`, `usize`): uniformly
///   distributed over all values of the type. Types narrower than 32 bits
///   take the low bits of one `u32` draw; `u128` and `i128` join two `u64`
///   draws, the first forming the low half.
/// - `bool`: the most significant bit of one `u32` draw.
/// - `f32`, `f64`: uniformly distributed over `[0, 1)`, built from the
///   high bits of one `u32` or `u64` draw. See [`Open01`] and [`Closed01`]
///   for the other intervals.
///
/// # Example
///
/// ```
/// use rngkit::Rng;
/// use rngkit::distr::StandardUniform;
/// use rngkit::rngs::mock::StepRng;
///
/// let mut rng = StepRng::new(0x8000_0000, 0);
/// let b: bool = rng.sample(StandardUniform);
/// assert!(b);
/// ```
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardUniform;
