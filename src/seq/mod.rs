// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sequence-related functionality
//!
//! This module provides:
//!
//! *   [`IndexedRandom`] for sampling slices and other indexable lists
//! *   [`IteratorRandom`] for sampling iterators
//! *   [`sample_reservoir`] and [`sample_weighted_reservoir`], the reservoir
//!     algorithms behind the `choose_multiple*` methods
//!
//! In order to make results reproducible across 32-64 bit architectures, all
//! `usize` indices are sampled as a `u32` where possible (also providing a
//! small performance boost in some cases).

#[cfg(feature = "alloc")]
mod reservoir;

#[cfg(feature = "alloc")]
pub use self::reservoir::{sample_reservoir, sample_weighted_reservoir};

use core::ops::Index;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::Rng;

/// Extension trait on indexable lists, providing random sampling methods.
///
/// This trait is implemented on `[T]` slice types. Other types supporting
/// [`Index<usize>`] may implement this (only [`Self::len`] must be
/// specified).
pub trait IndexedRandom: Index<usize> {
    /// The length
    fn len(&self) -> usize;

    /// True when the length is zero
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Uniformly sample one element
    ///
    /// Returns a reference to one uniformly-sampled random element of
    /// the slice, or `None` if the slice is empty.
    ///
    /// For slices, complexity is `O(1)`.
    ///
    /// # Example
    ///
    /// ```
    /// use rngkit::SeedableGenerator;
    /// use rngkit::rngs::Xorshift32;
    /// use rngkit::seq::IndexedRandom;
    ///
    /// let choices = [1, 2, 4, 8, 16, 32];
    /// let mut rng = Xorshift32::seed_from_u64(1);
    /// assert!(choices.choose(&mut rng).is_some());
    /// assert_eq!(choices[..0].choose(&mut rng), None);
    /// ```
    fn choose<R>(&self, rng: &mut R) -> Option<&Self::Output>
    where
        R: Rng + ?Sized,
    {
        if self.is_empty() {
            None
        } else {
            Some(&self[gen_index(rng, self.len())])
        }
    }

    /// Sample `amount` elements with probabilities biased by `weights`
    ///
    /// The first `amount` elements fill a reservoir. Each later element `i`
    /// is accepted with probability `weights[i] / sum`, where `sum` is the
    /// total weight of the elements before it, and then replaces a
    /// uniformly chosen reservoir slot. See [`sample_weighted_reservoir`].
    ///
    /// Returns references to all elements, in order, when
    /// `amount >= self.len()` or when `weights` is shorter than `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use rngkit::SeedableGenerator;
    /// use rngkit::rngs::Xoroshiro128Plus;
    /// use rngkit::seq::IndexedRandom;
    ///
    /// let choices = ['a', 'b', 'c', 'd'];
    /// let weights = [1.0, 2.0, 3.0, 4.0];
    /// let mut rng = Xoroshiro128Plus::seed_from_u64(3);
    /// let picked = choices.choose_multiple_weighted(&mut rng, &weights, 2);
    /// assert_eq!(picked.len(), 2);
    /// ```
    #[cfg(feature = "alloc")]
    fn choose_multiple_weighted<R>(
        &self,
        rng: &mut R,
        weights: &[f64],
        amount: usize,
    ) -> Vec<&Self::Output>
    where
        Self::Output: Sized,
        R: Rng + ?Sized,
    {
        reservoir::weighted_indices(rng, weights, self.len(), amount)
            .into_iter()
            .map(|i| &self[i])
            .collect()
    }
}

/// Extension trait on iterators, providing random sampling methods.
///
/// This trait is implemented on all iterators `I` where `I: Iterator + Sized`
/// and provides methods for choosing one or more elements. You must
/// `use` this trait:
///
/// ```
/// use rngkit::SeedableGenerator;
/// use rngkit::rngs::Xoroshiro128Plus;
/// use rngkit::seq::IteratorRandom;
///
/// let mut rng = Xoroshiro128Plus::seed_from_u64(11);
/// let faces = "😀😎😐😕😠😢";
/// println!("I am {}!", faces.chars().choose(&mut rng).unwrap());
/// ```
pub trait IteratorRandom: Iterator + Sized {
    /// Uniformly sample one element
    ///
    /// Returns `None` only if the iterator is empty. When the iterator
    /// reports an exact size through [`Iterator::size_hint`], one index is
    /// drawn and the element is reached with [`Iterator::nth`]; otherwise
    /// every element is visited, replacing the pick with probability
    /// `1 / (elements seen)`.
    fn choose<R>(mut self, rng: &mut R) -> Option<Self::Item>
    where
        R: Rng + ?Sized,
    {
        let (lower, upper) = self.size_hint();
        if upper == Some(lower) {
            return match lower {
                0 => None,
                1 => self.next(),
                _ => self.nth(gen_index(rng, lower)),
            };
        }

        let mut result = None;
        for (i, elem) in self.enumerate() {
            if gen_index(rng, i + 1) == 0 {
                result = Some(elem);
            }
        }
        result
    }

    /// Uniformly sample `amount` distinct elements into a [`Vec`]
    ///
    /// This is reservoir sampling, Algorithm R; see [`sample_reservoir`].
    ///
    /// Although the elements are selected randomly, the order of elements
    /// in the result is neither stable nor fully random.
    ///
    /// The length of the returned vector equals `amount` unless the
    /// iterator contains insufficient elements, in which case it equals the
    /// number of elements available.
    ///
    /// Complexity is `O(n)` where `n` is the length of the iterator.
    #[cfg(feature = "alloc")]
    fn choose_multiple<R>(self, rng: &mut R, amount: usize) -> Vec<Self::Item>
    where
        R: Rng + ?Sized,
    {
        sample_reservoir(rng, self, amount)
    }
}

impl<T> IndexedRandom for [T] {
    fn len(&self) -> usize {
        self.len()
    }
}

impl<I> IteratorRandom for I where I: Iterator + Sized {}

// Sample a number uniformly between 0 and `ubound`. Uses 32-bit sampling where
// possible, primarily in order to produce the same output on 32-bit and 64-bit
// platforms.
#[inline]
pub(crate) fn gen_index<R: Rng + ?Sized>(rng: &mut R, ubound: usize) -> usize {
    debug_assert!(ubound > 0);
    if ubound <= (u32::MAX as usize) {
        rng.random_range(0..ubound as u32).unwrap_or(0) as usize
    } else {
        rng.random_range(0..ubound).unwrap_or(0)
    }
}
