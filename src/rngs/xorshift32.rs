// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use rngkit_core::impls::{fill_bytes_via_u32, next_u64_via_u32};
use rngkit_core::{BitGenerator, Seed, SeedableGenerator};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Marsaglia's xor-shift generator with 128 bits of state.
///
/// Native width is 32 bits. Very fast, but fails several statistical test
/// batteries; prefer [`Xoroshiro128Plus`](super::Xoroshiro128Plus) unless
/// compatibility with this exact sequence is wanted.
///
/// The seed is `[x, y, z, w]`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Xorshift32 {
    x: u32,
    y: u32,
    z: u32,
    w: u32,
}

impl BitGenerator for Xorshift32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let t = self.x ^ (self.x << 11);
        self.x = self.y;
        self.y = self.z;
        self.z = self.w;
        self.w = self.w ^ (self.w >> 19) ^ (t ^ (t >> 8));
        self.w
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        next_u64_via_u32(self)
    }

    #[inline]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        fill_bytes_via_u32(self, dst)
    }
}

impl SeedableGenerator for Xorshift32 {
    type Seed = [u32; 4];

    /// # Panics
    ///
    /// If `seed` is all zero.
    fn from_seed(seed: [u32; 4]) -> Self {
        assert!(!seed.is_zero(), "Xorshift32 cannot be seeded with zero");
        Xorshift32 {
            x: seed[0],
            y: seed[1],
            z: seed[2],
            w: seed[3],
        }
    }

    nonzero_seeding!();
}
