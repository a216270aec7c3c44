// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The ChaCha20 generator.

use core::fmt;
use rngkit_core::block::{BlockCore, BlockGenerator, CryptoBlockCore};
use rngkit_core::{BitGenerator, CryptoGenerator, SeedableGenerator};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const BLOCK_WORDS: usize = 16;
const KEY_WORDS: usize = 8;
const CONSTANTS: [u32; 4] = [0x61707865, 0x3320646e, 0x79622d32, 0x6b206574];

macro_rules! quarter_round {
    ($a: expr, $b: expr, $c: expr, $d: expr) => {{
        $a = $a.wrapping_add($b); $d ^= $a; $d = $d.rotate_left(16);
        $c = $c.wrapping_add($d); $b ^= $c; $b = $b.rotate_left(12);
        $a = $a.wrapping_add($b); $d ^= $a; $d = $d.rotate_left(8);
        $c = $c.wrapping_add($d); $b ^= $c; $b = $b.rotate_left(7);
    }};
}

macro_rules! double_round {
    ($x: expr) => {{
        // Column round
        quarter_round!($x[0], $x[4], $x[8], $x[12]);
        quarter_round!($x[1], $x[5], $x[9], $x[13]);
        quarter_round!($x[2], $x[6], $x[10], $x[14]);
        quarter_round!($x[3], $x[7], $x[11], $x[15]);
        // Diagonal round
        quarter_round!($x[0], $x[5], $x[10], $x[15]);
        quarter_round!($x[1], $x[6], $x[11], $x[12]);
        quarter_round!($x[2], $x[7], $x[8], $x[13]);
        quarter_round!($x[3], $x[4], $x[9], $x[14]);
    }};
}

/// The ChaCha20 block function, keyed and positioned.
///
/// Word layout of the input block:
///
/// ```text
/// constant constant constant constant
/// key      key      key      key
/// key      key      key      key
/// counter  counter  counter  counter
/// ```
///
/// The four counter words form one 128-bit little-endian block counter,
/// overlapping what the stream cipher uses as nonce. With a 96-bit nonce
/// `n` and 32-bit block count `c` the cipher's keystream is therefore
/// reached through the counter `c | n << 32`.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChaCha20Core {
    state: [u32; BLOCK_WORDS],
}

// Does not expose the key.
impl fmt::Debug for ChaCha20Core {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ChaCha20Core {{}}")
    }
}

impl ChaCha20Core {
    fn counter(&self) -> u128 {
        self.state[12..]
            .iter()
            .rev()
            .fold(0u128, |acc, &w| (acc << 32) | u128::from(w))
    }

    fn set_counter(&mut self, counter: u128) {
        for (i, word) in self.state[12..].iter_mut().enumerate() {
            *word = (counter >> (32 * i)) as u32;
        }
    }

    fn key(&self) -> [u32; KEY_WORDS] {
        let mut key = [0; KEY_WORDS];
        key.copy_from_slice(&self.state[4..12]);
        key
    }
}

impl BlockCore for ChaCha20Core {
    type Results = [u32; BLOCK_WORDS];

    fn generate(&mut self, results: &mut Self::Results) {
        let mut x = self.state;
        for _ in 0..10 {
            double_round!(x);
        }
        for (out, (&mixed, &input)) in results.iter_mut().zip(x.iter().zip(self.state.iter())) {
            *out = mixed.wrapping_add(input);
        }
        self.set_counter(self.counter().wrapping_add(1));
    }
}

impl CryptoBlockCore for ChaCha20Core {}

impl SeedableGenerator for ChaCha20Core {
    type Seed = [u32; KEY_WORDS];

    /// The counter starts at zero.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut state = [0; BLOCK_WORDS];
        state[..4].copy_from_slice(&CONSTANTS);
        state[4..12].copy_from_slice(&seed);
        ChaCha20Core { state }
    }
}

/// A generator running the ChaCha20 block function in counter mode.
///
/// The 256-bit key is the seed and the 128-bit block counter starts at
/// zero. Each block yields sixteen `u32` words, emitted in order before the
/// next block is computed; a 64-bit draw combines two consecutive words.
///
/// ChaCha20 carries the [`CryptoGenerator`] marker. This is a statement of
/// intent with no formal security claim.
///
/// ```
/// use rngkit::{BitGenerator, SeedableGenerator};
/// use rngkit::rngs::ChaCha20;
///
/// let mut rng = ChaCha20::from_seed([0; 8]);
/// assert_eq!(rng.next_u32(), 0xade0b876);
/// ```
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChaCha20 {
    rng: BlockGenerator<ChaCha20Core>,
}

// Does not expose the key or buffered output.
impl fmt::Debug for ChaCha20 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ChaCha20 {{}}")
    }
}

impl ChaCha20 {
    /// The block counter of the block the next word is taken from.
    pub fn get_counter(&self) -> u128 {
        let counter = self.rng.core.counter();
        if self.rng.index() < BLOCK_WORDS {
            counter.wrapping_sub(1)
        } else {
            counter
        }
    }

    /// Seek to the start of block `counter`.
    ///
    /// This permits jumping arbitrarily ahead or back in the stream.
    /// Buffered words of the current block are discarded.
    pub fn set_counter(&mut self, counter: u128) {
        self.rng.core.set_counter(counter);
        self.rng.reset();
    }

    /// The key this generator was seeded with.
    pub fn get_seed(&self) -> [u32; KEY_WORDS] {
        self.rng.core.key()
    }
}

impl BitGenerator for ChaCha20 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst)
    }
}

impl SeedableGenerator for ChaCha20 {
    type Seed = [u32; KEY_WORDS];

    fn from_seed(seed: Self::Seed) -> Self {
        ChaCha20 {
            rng: BlockGenerator::new(ChaCha20Core::from_seed(seed)),
        }
    }
}

impl CryptoGenerator for ChaCha20 {}

impl From<ChaCha20Core> for ChaCha20 {
    fn from(core: ChaCha20Core) -> Self {
        ChaCha20 {
            rng: BlockGenerator::new(core),
        }
    }
}
