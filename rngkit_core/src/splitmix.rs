// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::impls::fill_bytes_via_u64;
use crate::{BitGenerator, SeedableGenerator};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const PHI: u64 = 0x9e3779b97f4a7c15;

/// SplitMix64, a 64-bit generator with a single word of state.
///
/// Every state, including zero, is valid, which makes it suitable for
/// expanding a `u64` into the seed of a larger generator; this is what
/// [`SeedableGenerator::seed_from_u64`] does.
///
/// Not suitable as a general-purpose generator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SplitMix64 {
    state: u64,
}

impl BitGenerator for SplitMix64 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(PHI);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    #[inline]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        fill_bytes_via_u64(self, dst)
    }
}

impl SeedableGenerator for SplitMix64 {
    type Seed = u64;

    fn from_seed(seed: u64) -> Self {
        SplitMix64 { state: seed }
    }

    /// The `u64` is used directly as the state.
    fn seed_from_u64(state: u64) -> Self {
        Self::from_seed(state)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reference() {
        let mut rng = SplitMix64::seed_from_u64(0);
        assert_eq!(rng.next_u64(), 0xe220a8397b1dcdaf);
        assert_eq!(rng.next_u64(), 0x6e789e6aa1b965f4);
        assert_eq!(rng.next_u64(), 0x06c45d188009454f);
    }

    #[test]
    fn narrow_draw_is_low_half() {
        let mut a = SplitMix64::from_seed(99);
        let mut b = a.clone();
        assert_eq!(a.next_u32(), b.next_u64() as u32);
    }
}
