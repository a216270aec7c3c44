// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use rngkit_core::impls::fill_bytes_via_u64;
use rngkit_core::{BitGenerator, Jump, Seed, SeedableGenerator};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A xoroshiro128+ generator.
///
/// Native width is 64 bits; [`next_u32`](BitGenerator::next_u32) returns
/// the low half of a 64-bit draw. The lowest bits have low linear
/// complexity, which matters for a few statistical tests only.
///
/// This is the original 2016 parameterisation (rotations 55 and 36, shift
/// 14) by David Blackman and Sebastiano Vigna, including its jump
/// polynomial.
#[allow(missing_copy_implementations)]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Xoroshiro128Plus {
    s0: u64,
    s1: u64,
}

impl Jump for Xoroshiro128Plus {
    /// Jump forward, equivalently to 2^64 calls to `next_u64()`.
    ///
    /// This can be used to generate 2^64 non-overlapping subsequences for
    /// parallel computations.
    ///
    /// ```
    /// use rngkit::{Jump, SeedableGenerator};
    /// use rngkit::rngs::Xoroshiro128Plus;
    ///
    /// let rng1 = Xoroshiro128Plus::seed_from_u64(0);
    /// let mut rng2 = rng1.clone();
    /// rng2.jump();
    /// let mut rng3 = rng2.clone();
    /// rng3.jump();
    /// ```
    fn jump(&mut self) {
        const JUMP: [u64; 2] = [0xbeac0467eba5facb, 0xd86b048b86aa9922];
        let mut s0 = 0;
        let mut s1 = 0;
        for j in &JUMP {
            for b in 0..64 {
                if (j & 1 << b) != 0 {
                    s0 ^= self.s0;
                    s1 ^= self.s1;
                }
                self.next_u64();
            }
        }
        self.s0 = s0;
        self.s1 = s1;
    }
}

impl BitGenerator for Xoroshiro128Plus {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let r = self.s0.wrapping_add(self.s1);
        let s1 = self.s1 ^ self.s0;
        self.s0 = self.s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.s1 = s1.rotate_left(36);
        r
    }

    #[inline]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        fill_bytes_via_u64(self, dst)
    }
}

impl SeedableGenerator for Xoroshiro128Plus {
    type Seed = [u64; 2];

    /// # Panics
    ///
    /// If `seed` is all zero.
    fn from_seed(seed: [u64; 2]) -> Self {
        assert!(!seed.is_zero(), "Xoroshiro128Plus cannot be seeded with zero");
        Xoroshiro128Plus {
            s0: seed[0],
            s1: seed[1],
        }
    }

    nonzero_seeding!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference() {
        let mut rng = Xoroshiro128Plus::from_seed([1, 2]);
        let expected = [
            3,
            36029003177443331,
            78883775479546723,
            11565523463456473958,
            4242646275387589636,
        ];
        for &e in &expected {
            assert_eq!(rng.next_u64(), e);
        }
    }

    #[test]
    fn jump_reference() {
        // Reference state computed independently as M^(2^64) over GF(2),
        // M being the 128x128 transition matrix.
        let mut rng = Xoroshiro128Plus::from_seed([0xCAFEBABE, 0xDEADBEEF]);
        rng.jump();
        assert_eq!(
            rng,
            Xoroshiro128Plus {
                s0: 0x75557e876d932b79,
                s1: 0xc59b81ae6869029f
            }
        );
        let expected = [
            0x3af10035d5fc2e18,
            0x1360b353d9255303,
            0x050ed3fdd1ccf08f,
            0x0ea5541fe327da68,
        ];
        for &e in &expected {
            assert_eq!(rng.next_u64(), e);
        }
    }

    #[test]
    fn narrow_is_low_half() {
        let mut a = Xoroshiro128Plus::from_seed([1, 2]);
        a.next_u64();
        assert_eq!(a.next_u32(), 36029003177443331u64 as u32);
    }

    #[test]
    fn seed_from_u64_via_splitmix() {
        let mut rng = Xoroshiro128Plus::seed_from_u64(0);
        let expected = [
            0x509946a41cd733a3,
            0x00885667b1934bfa,
            0x1061f9ad258fd5d5,
            0x3f8be44897a4317c,
        ];
        for &e in &expected {
            assert_eq!(rng.next_u64(), e);
        }
    }

    #[test]
    #[should_panic]
    fn zero_seed() {
        Xoroshiro128Plus::from_seed([0, 0]);
    }
}
