// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bit generators
//!
//! ## Algorithmic generators
//!
//! | generator             | native width | state          | period         | `Jump`  |
//! |-----------------------|--------------|----------------|----------------|---------|
//! | [`Xorshift32`]        | 32           | 4 × `u32`      | 2^128 − 1      |         |
//! | [`Xoroshiro128Plus`]  | 64           | 2 × `u64`      | 2^128 − 1      | 2^64    |
//! | [`Xorshift1024Star`]  | 64           | 16 × `u64`     | 2^1024 − 1     | 2^512   |
//! | [`ChaCha20`]          | 32           | 16 × `u32`     | 2^128 blocks   |         |
//! | [`Mt19937_64`]        | 64           | 312 × `u64`    | 2^19937 − 1    |         |
//!
//! All of these are deterministic: the same seed and the same sequence of
//! calls give the same output on every platform. None of them is suitable
//! for cryptographic use except possibly [`ChaCha20`], which carries the
//! [`CryptoGenerator`](crate::CryptoGenerator) marker without any formal
//! claim.
//!
//! The xorshift family has no valid all-zero state: `from_seed` panics on
//! an all-zero seed, while `from_rng` and `seed_from_u64` draw again.
//!
//! ## Wrappers
//!
//! [`ReseedingGenerator`] periodically replaces the state of a seedable
//! generator with fresh material from another source. [`ThreadRng`] is the
//! per-thread default built from it.
//!
//! [`mock::StepRng`] yields an arithmetic sequence for testing.

/// Seeding methods of the xorshift family, which redraw a seed that is
/// all zero instead of panicking in `from_seed`.
macro_rules! nonzero_seeding {
    () => {
        fn from_rng<G: rngkit_core::BitGenerator + ?Sized>(rng: &mut G) -> Self {
            use rngkit_core::Seed;
            loop {
                let seed = Self::Seed::from_fill(|buf| rng.fill_bytes(buf));
                if !seed.is_zero() {
                    return Self::from_seed(seed);
                }
            }
        }

        fn try_from_rng<G: rngkit_core::TryBitGenerator + ?Sized>(
            rng: &mut G,
        ) -> Result<Self, G::Error> {
            use rngkit_core::Seed;
            loop {
                let seed = Self::Seed::try_from_fill(|buf| rng.try_fill_bytes(buf))?;
                if !seed.is_zero() {
                    return Ok(Self::from_seed(seed));
                }
            }
        }
    };
}

pub mod mock;

mod chacha20;
mod mt19937_64;
mod reseeding;
#[cfg(feature = "thread_rng")]
pub(crate) mod thread;
mod xoroshiro128plus;
mod xorshift1024star;
mod xorshift32;

pub use self::chacha20::{ChaCha20, ChaCha20Core};
pub use self::mt19937_64::Mt19937_64;
pub use self::reseeding::{ReseedingGenerator, DEFAULT_THRESHOLD};
#[cfg(feature = "thread_rng")]
pub use self::thread::ThreadRng;
pub use self::xoroshiro128plus::Xoroshiro128Plus;
pub use self::xorshift1024star::Xorshift1024Star;
pub use self::xorshift32::Xorshift32;
pub use rngkit_core::SplitMix64;

#[cfg(feature = "os_rng")]
pub use rngkit_core::OsEntropy;
#[cfg(feature = "std")]
pub use rngkit_core::{DeviceEntropy, EntropyConfig, EntropyKind, EntropySource};
