// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The [`BlockCore`] trait and the [`BlockGenerator`] buffer
//!
//! Some generators compute a whole block of `u32` words per step of their
//! state machine. Such a generator only implements [`BlockCore::generate`];
//! wrapping it in a [`BlockGenerator`] supplies the [`BitGenerator`] methods,
//! handing out the buffered words one at a time and computing the next
//! block once they are used up.
//!
//! # Example
//!
//! ```
//! use rngkit_core::{BitGenerator, SeedableGenerator};
//! use rngkit_core::block::{BlockCore, BlockGenerator};
//!
//! struct CountingCore(u32);
//!
//! impl BlockCore for CountingCore {
//!     type Results = [u32; 4];
//!
//!     fn generate(&mut self, results: &mut Self::Results) {
//!         for r in results.iter_mut() {
//!             *r = self.0;
//!             self.0 += 1;
//!         }
//!     }
//! }
//!
//! let mut rng = BlockGenerator::new(CountingCore(7));
//! assert_eq!(rng.next_u32(), 7);
//! assert_eq!(rng.next_u64(), (9 << 32) | 8);
//! ```

use crate::impls::next_u64_via_u32;
use crate::le::fill_via_chunks;
use crate::{BitGenerator, CryptoGenerator, SeedableGenerator};
use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A generator computing its output a block of `u32` words at a time.
///
/// See the [module][crate::block] documentation for details.
pub trait BlockCore {
    /// The block produced by one call to [`generate`](BlockCore::generate),
    /// usually an array like `[u32; 16]`.
    type Results: AsRef<[u32]> + AsMut<[u32]> + Default;

    /// Compute the next block, advancing the core's state.
    fn generate(&mut self, results: &mut Self::Results);
}

/// Marker for block cores whose output is believed to be unpredictable.
///
/// [`BlockGenerator`] implements [`CryptoGenerator`] over such cores.
pub trait CryptoBlockCore: BlockCore {}

/// A [`BitGenerator`] over a [`BlockCore`]
///
/// Words are consumed strictly in order and none is skipped:
///
/// - [`next_u32`](BitGenerator::next_u32) returns the next buffered word;
/// - [`next_u64`](BitGenerator::next_u64) combines two consecutive words,
///   the first one least significant, even across a block boundary;
/// - [`fill_bytes`](BitGenerator::fill_bytes) copies words in little-endian
///   order; a partial trailing word is consumed in full.
///
/// The `core` field may be accessed directly, for example to seek. After
/// changing the core's position call [`reset`](BlockGenerator::reset) so
/// that stale buffered words are discarded.
#[derive(Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockGenerator<C: BlockCore> {
    /// The block computing part of the generator.
    pub core: C,
    results: C::Results,
    index: usize,
}

// Buffered output is not shown.
impl<C: BlockCore + fmt::Debug> fmt::Debug for BlockGenerator<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BlockGenerator")
            .field("core", &self.core)
            .field("index", &self.index)
            .finish()
    }
}

impl<C: BlockCore> BlockGenerator<C> {
    /// Wrap `core`. The first block is computed on first use.
    #[inline]
    pub fn new(core: C) -> Self {
        let results = C::Results::default();
        let index = results.as_ref().len();
        BlockGenerator {
            core,
            results,
            index,
        }
    }

    /// Position of the next word in the buffer.
    ///
    /// Equals the block length when the buffer is used up.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Discard the buffered words; the next draw computes a fresh block.
    #[inline]
    pub fn reset(&mut self) {
        self.index = self.results.as_ref().len();
    }

    /// Compute a new block and continue reading it at `index`.
    ///
    /// # Panics
    ///
    /// If `index` exceeds the block length.
    #[inline]
    pub fn generate_and_set(&mut self, index: usize) {
        assert!(index <= self.results.as_ref().len());
        self.core.generate(&mut self.results);
        self.index = index;
    }
}

impl<C: BlockCore> BitGenerator for BlockGenerator<C> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        if self.index >= self.results.as_ref().len() {
            self.generate_and_set(0);
        }
        let value = self.results.as_ref()[self.index];
        self.index += 1;
        value
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        next_u64_via_u32(self)
    }

    #[inline]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        let mut filled = 0;
        while filled < dst.len() {
            if self.index >= self.results.as_ref().len() {
                self.generate_and_set(0);
            }
            let (words, bytes) =
                fill_via_chunks(&self.results.as_ref()[self.index..], &mut dst[filled..]);
            self.index += words;
            filled += bytes;
        }
    }
}

impl<C: BlockCore + SeedableGenerator> SeedableGenerator for BlockGenerator<C> {
    type Seed = C::Seed;

    #[inline(always)]
    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(C::from_seed(seed))
    }

    #[inline(always)]
    fn seed_from_u64(seed: u64) -> Self {
        Self::new(C::seed_from_u64(seed))
    }

    #[inline(always)]
    fn from_rng<G: BitGenerator + ?Sized>(rng: &mut G) -> Self {
        Self::new(C::from_rng(rng))
    }
}

impl<C: CryptoBlockCore> CryptoGenerator for BlockGenerator<C> {}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, Clone)]
    struct Counter {
        next: u32,
    }

    impl BlockCore for Counter {
        type Results = [u32; 4];

        fn generate(&mut self, results: &mut Self::Results) {
            for r in results.iter_mut() {
                *r = self.next;
                self.next = self.next.wrapping_add(1);
            }
        }
    }

    impl SeedableGenerator for Counter {
        type Seed = u32;

        fn from_seed(seed: u32) -> Self {
            Counter { next: seed }
        }
    }

    #[test]
    fn words_in_order_across_blocks() {
        let mut rng = BlockGenerator::<Counter>::from_seed(10);
        assert_eq!(rng.next_u32(), 10);
        assert_eq!(rng.next_u32(), 11);
        assert_eq!(rng.next_u32(), 12);
        // straddles the block boundary
        assert_eq!(rng.next_u64(), (14 << 32) | 13);
        assert_eq!(rng.index(), 1);
    }

    #[test]
    fn fill_consumes_partial_word() {
        let mut rng = BlockGenerator::<Counter>::from_seed(0x0403_0201);
        let mut buf = [0u8; 18];
        rng.fill_bytes(&mut buf);
        assert_eq!(&buf[..4], &[1, 2, 3, 4]);
        assert_eq!(&buf[16..], &[5, 2]);
        assert_eq!(rng.next_u32(), 0x0403_0206);
    }

    #[test]
    fn reset_discards_buffer() {
        let mut rng = BlockGenerator::<Counter>::from_seed(0);
        assert_eq!(rng.next_u32(), 0);
        rng.reset();
        assert_eq!(rng.next_u32(), 4);
    }

    #[test]
    fn clone_forks_stream() {
        let mut a = BlockGenerator::<Counter>::from_seed(3);
        a.next_u32();
        let mut b = a.clone();
        for _ in 0..9 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }
}
