// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::fmt;
use rngkit_core::impls::fill_bytes_via_u64;
use rngkit_core::{BitGenerator, SeedableGenerator};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const NN: usize = 312;
const MM: usize = 156;
const MATRIX_A: u64 = 0xB5026F5AA96619E9;
/// Most significant 33 bits
const UM: u64 = 0xFFFFFFFF80000000;
/// Least significant 31 bits
const LM: u64 = 0x7FFFFFFF;

/// The 64-bit Mersenne Twister of Matsumoto and Nishimura (2004).
///
/// 312 words of state and a period of 2^19937 − 1. Native width is 64 bits.
/// Output matches the reference `mt19937-64.c`, both for a single `u64` seed
/// ([`from_seed`](SeedableGenerator::from_seed)) and for a key sequence
/// ([`from_seed_slice`](Mt19937_64::from_seed_slice)).
///
/// The state is large; prefer another generator where memory matters.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mt19937_64 {
    #[cfg_attr(feature = "serde", serde(with = "state_serde"))]
    mt: [u64; NN],
    index: usize,
}

impl fmt::Debug for Mt19937_64 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Mt19937_64")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl Mt19937_64 {
    fn init(seed: u64) -> [u64; NN] {
        let mut mt = [0u64; NN];
        mt[0] = seed;
        for i in 1..NN {
            let prev = mt[i - 1];
            mt[i] = 6364136223846793005u64
                .wrapping_mul(prev ^ (prev >> 62))
                .wrapping_add(i as u64);
        }
        mt
    }

    /// Seed from a key sequence, as `init_by_array64` of the reference
    /// implementation.
    ///
    /// An empty key is treated as the single key word `0`.
    pub fn from_seed_slice(key: &[u64]) -> Self {
        let key = if key.is_empty() { &[0u64][..] } else { key };
        let mut mt = Self::init(19650218);
        let mut i = 1;
        let mut j = 0;
        for _ in 0..NN.max(key.len()) {
            let prev = mt[i - 1];
            mt[i] = (mt[i] ^ (prev ^ (prev >> 62)).wrapping_mul(3935559000370003845))
                .wrapping_add(key[j])
                .wrapping_add(j as u64);
            i += 1;
            j += 1;
            if i >= NN {
                mt[0] = mt[NN - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }
        for _ in 0..NN - 1 {
            let prev = mt[i - 1];
            mt[i] = (mt[i] ^ (prev ^ (prev >> 62)).wrapping_mul(2862933555777941757))
                .wrapping_sub(i as u64);
            i += 1;
            if i >= NN {
                mt[0] = mt[NN - 1];
                i = 1;
            }
        }
        // non-zero initial array
        mt[0] = 1 << 63;
        Mt19937_64 { mt, index: NN }
    }

    /// Regenerate all 312 words in place.
    fn twist(&mut self) {
        let mag01 = |x: u64| if x & 1 == 0 { 0 } else { MATRIX_A };
        for i in 0..NN - MM {
            let x = (self.mt[i] & UM) | (self.mt[i + 1] & LM);
            self.mt[i] = self.mt[i + MM] ^ (x >> 1) ^ mag01(x);
        }
        for i in NN - MM..NN - 1 {
            let x = (self.mt[i] & UM) | (self.mt[i + 1] & LM);
            self.mt[i] = self.mt[i + MM - NN] ^ (x >> 1) ^ mag01(x);
        }
        let x = (self.mt[NN - 1] & UM) | (self.mt[0] & LM);
        self.mt[NN - 1] = self.mt[MM - 1] ^ (x >> 1) ^ mag01(x);
        self.index = 0;
    }
}

impl BitGenerator for Mt19937_64 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        if self.index >= NN {
            self.twist();
        }
        let mut x = self.mt[self.index];
        self.index += 1;

        x ^= (x >> 29) & 0x5555555555555555;
        x ^= (x << 17) & 0x71D67FFFEDA60000;
        x ^= (x << 37) & 0xFFF7EEE000000000;
        x ^ (x >> 43)
    }

    #[inline]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        fill_bytes_via_u64(self, dst)
    }
}

impl SeedableGenerator for Mt19937_64 {
    type Seed = u64;

    /// Every `u64`, including zero, is a valid seed.
    fn from_seed(seed: u64) -> Self {
        Mt19937_64 {
            mt: Self::init(seed),
            index: NN,
        }
    }
}

impl Default for Mt19937_64 {
    /// The reference default seed, 5489.
    fn default() -> Self {
        Self::from_seed(5489)
    }
}

#[cfg(feature = "serde")]
mod state_serde {
    use super::NN;
    use core::fmt;
    use core::marker::PhantomData;
    use serde::de::{self, SeqAccess, Visitor};
    use serde::ser::SerializeTuple;
    use serde::{Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(arr: &[u64; NN], ser: S) -> Result<S::Ok, S::Error> {
        let mut seq = ser.serialize_tuple(NN)?;
        for e in arr.iter() {
            seq.serialize_element(e)?;
        }
        seq.end()
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<[u64; NN], D::Error> {
        struct StateVisitor(PhantomData<[u64; NN]>);

        impl<'de> Visitor<'de> for StateVisitor {
            type Value = [u64; NN];

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("Mersenne Twister state array")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<[u64; NN], A::Error> {
                let mut out = [0u64; NN];
                for (i, slot) in out.iter_mut().enumerate() {
                    match seq.next_element()? {
                        Some(val) => *slot = val,
                        None => return Err(de::Error::invalid_length(i, &self)),
                    }
                }
                Ok(out)
            }
        }

        de.deserialize_tuple(NN, StateVisitor(PhantomData))
    }
}
