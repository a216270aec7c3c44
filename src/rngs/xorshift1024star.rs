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

const MULTIPLIER: u64 = 1181783497276652981;

/// Vigna's xorshift1024* generator.
///
/// Sixteen words of state plus a rotating index, giving a period of
/// 2^1024 − 1. Native width is 64 bits.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Xorshift1024Star {
    s: [u64; 16],
    p: usize,
}

impl Jump for Xorshift1024Star {
    /// Jump forward, equivalently to 2^512 calls to `next_u64()`.
    fn jump(&mut self) {
        const JUMP: [u64; 16] = [
            0x84242f96eca9c41d, 0xa3c65b8776f96855, 0x5b34a39f070b5837, 0x4489affce4f31a1e,
            0x2ffeeb0a48316f40, 0xdc2d9891fe68c022, 0x3659132bb12fea70, 0xaac17d8efa43cab8,
            0xc4cb815590989b13, 0x5ee975283d71c93b, 0x691548c86c1bd540, 0x7910c41d10a1e6a5,
            0x0b5fc64563b3e2a8, 0x047f7684e9fc949d, 0xb99181f2d8f685ca, 0x284600e3f30e38c3,
        ];
        let mut t = [0u64; 16];
        for j in &JUMP {
            for b in 0..64 {
                if (j & 1 << b) != 0 {
                    for (k, t) in t.iter_mut().enumerate() {
                        *t ^= self.s[(k + self.p) & 15];
                    }
                }
                self.next_u64();
            }
        }
        for (k, &t) in t.iter().enumerate() {
            self.s[(k + self.p) & 15] = t;
        }
    }
}

impl BitGenerator for Xorshift1024Star {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let s0 = self.s[self.p];
        self.p = (self.p + 1) & 15;
        let mut s1 = self.s[self.p];
        s1 ^= s1 << 31;
        self.s[self.p] = s1 ^ s0 ^ (s1 >> 11) ^ (s0 >> 30);
        self.s[self.p].wrapping_mul(MULTIPLIER)
    }

    #[inline]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        fill_bytes_via_u64(self, dst)
    }
}

impl SeedableGenerator for Xorshift1024Star {
    type Seed = [u64; 16];

    /// The index starts at zero.
    ///
    /// # Panics
    ///
    /// If `seed` is all zero.
    fn from_seed(seed: [u64; 16]) -> Self {
        assert!(!seed.is_zero(), "Xorshift1024Star cannot be seeded with zero");
        Xorshift1024Star { s: seed, p: 0 }
    }

    nonzero_seeding!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting_seed() -> [u64; 16] {
        core::array::from_fn(|i| i as u64 + 1)
    }

    #[test]
    fn reference() {
        let mut rng = Xorshift1024Star::from_seed(counting_seed());
        let expected = [
            0xc0562e31b467f91f,
            0x092b6fabadaff6d4,
            0x06a37d6c71bffb6a,
            0xd534ffc84bb7e231,
            0x61cf9e3dc667e6c7,
            0xc791485a5b500000,
        ];
        for &e in &expected {
            assert_eq!(rng.next_u64(), e);
        }
    }

    // Reference states below were computed independently as T^(2^508) over
    // GF(2), T being the sixteen-step transition of the full state.
    #[test]
    fn jump_reference() {
        let mut rng = Xorshift1024Star::from_seed(counting_seed());
        rng.jump();
        assert_eq!(rng.p, 0);
        assert_eq!(
            rng.s,
            [
                0x759ba80b5a39fc27, 0x6a48db8209c3aa8e, 0x82d34efa8d6bfb07, 0x592532a0af351a56,
                0xb2282a07eabe477f, 0xa113b5209fa9b2ba, 0x790ddc306001da47, 0x514cdfc9a778083d,
                0x05ecb754ef5ec5b1, 0x7c38c268294bec1f, 0x7770f4f4e0d44357, 0x9c0b676f1b8a0d17,
                0x946ffa7449160130, 0x557de16ca1b91051, 0x7fcdffb7d9a8d418, 0xa776a378394cb6eb,
            ]
        );
        let expected = [
            0x11f284de38b67d65,
            0x712f63f508a214f0,
            0x5da9411e485029c0,
            0x60d3ddde163b1c66,
        ];
        for &e in &expected {
            assert_eq!(rng.next_u64(), e);
        }
    }

    #[test]
    fn jump_commutes_with_draws() {
        let mut rng = Xorshift1024Star::from_seed(counting_seed());
        for _ in 0..3 {
            rng.next_u64();
        }
        rng.jump();
        assert_eq!(rng.p, 3);
        let expected = [
            0x60d3ddde163b1c66,
            0x0c69581766143eef,
            0x6dd2134e91ed9ae3,
            0x38f7dd06a03c341f,
        ];
        for &e in &expected {
            assert_eq!(rng.next_u64(), e);
        }
    }

    #[test]
    #[should_panic]
    fn zero_seed() {
        Xorshift1024Star::from_seed([0; 16]);
    }
}
