// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bit generator traits
//!
//! This crate is mainly of interest to crates publishing implementations of
//! [`BitGenerator`]. Other users are encouraged to use the `rngkit` crate
//! instead, which re-exports the relevant items.
//!
//! [`BitGenerator`] is the core trait implemented by algorithmic
//! pseudo-random number generators. [`TryBitGenerator`] is its fallible twin,
//! implemented by external sources such as [`EntropySource`].
//!
//! [`SeedableGenerator`] covers construction and reseeding, and [`Jump`]
//! covers advancing a generator far along its stream in one step.
//!
//! The [`impls`] and [`le`] sub-modules include a few small functions to
//! assist implementation of [`BitGenerator`], and [`block`] provides
//! buffering for generators producing output a block at a time.

#![doc(
    html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128-blk.png",
    html_favicon_url = "https://www.rust-lang.org/favicon.ico"
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

use core::convert::Infallible;
use core::fmt;

#[macro_use]
mod log_macros;

mod blanket_impls;
pub mod block;
#[cfg(feature = "std")]
pub mod entropy;
mod error;
mod fill;
pub mod impls;
pub mod le;
mod seed;
mod splitmix;

pub use error::Error;
pub use fill::{fill_raw, Fill};
pub use seed::Seed;
pub use splitmix::SplitMix64;

#[cfg(feature = "std")]
pub use entropy::{DeviceEntropy, EntropyConfig, EntropyKind, EntropySource};
#[cfg(feature = "os_rng")]
pub use entropy::OsEntropy;

/// Implementation-level interface for bit generators
///
/// This trait encapsulates the low-level functionality common to all
/// generators. Every generator has a *native width* `W`, the width of the
/// word its state machine produces per step:
///
/// - requests narrower than `W` take the low bits of one `W`-bit draw;
/// - requests wider than `W` concatenate two consecutive `W`-bit draws,
///   the first draw forming the least-significant half;
/// - [`fill_bytes`] writes whole native words in little-endian order and
///   copies the low bytes of one more word for any remainder.
///
/// The helpers in [`impls`] implement the non-native methods this way.
///
/// Algorithmic generators are expected to be reproducible: when seeded with
/// a fixed value, calling *any* sequence of methods must produce the same
/// values on every platform. Implementations therefore use fixed
/// (little-endian) byte order.
///
/// Implementations should also implement [`Debug`](fmt::Debug), but must
/// not expose the internal state of cryptographic generators through it.
///
/// [`fill_bytes`]: BitGenerator::fill_bytes
pub trait BitGenerator {
    /// Return the next random `u32`.
    fn next_u32(&mut self) -> u32;

    /// Return the next random `u64`.
    fn next_u64(&mut self) -> u64;

    /// Fill `dst` entirely with random data.
    fn fill_bytes(&mut self, dst: &mut [u8]);

    /// Return the next random `u16`.
    ///
    /// This is the low half of [`next_u32`](BitGenerator::next_u32).
    #[inline]
    fn next_u16(&mut self) -> u16 {
        self.next_u32() as u16
    }

    /// Return the next random `u8`.
    ///
    /// This is the low byte of [`next_u32`](BitGenerator::next_u32).
    #[inline]
    fn next_u8(&mut self) -> u8 {
        self.next_u32() as u8
    }
}

/// A marker trait for generators whose output is believed to be
/// unpredictable to an observer.
///
/// No formal guarantee is implied; see the crate-level documentation of
/// `rngkit` for which generators carry this marker.
pub trait CryptoGenerator: BitGenerator {}

/// A potentially fallible variant of [`BitGenerator`]
///
/// This trait is implemented by sources which may fail, such as the
/// operating system generator or a device file. Every [`BitGenerator`]
/// automatically implements this trait with [`Infallible`] as the error.
pub trait TryBitGenerator {
    /// The type returned in the event of a generator error.
    type Error: fmt::Debug + fmt::Display;

    /// Return the next random `u32`.
    fn try_next_u32(&mut self) -> Result<u32, Self::Error>;
    /// Return the next random `u64`.
    fn try_next_u64(&mut self) -> Result<u64, Self::Error>;
    /// Fill `dst` entirely with random data.
    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error>;

    /// Wrap `self` into a [`BitGenerator`] which panics on error.
    fn unwrap_err(self) -> UnwrapErr<Self>
    where
        Self: Sized,
    {
        UnwrapErr(self)
    }
}

impl<R: BitGenerator + ?Sized> TryBitGenerator for R {
    type Error = Infallible;

    #[inline]
    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        Ok(self.next_u32())
    }

    #[inline]
    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        Ok(self.next_u64())
    }

    #[inline]
    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error> {
        self.fill_bytes(dst);
        Ok(())
    }
}

/// A marker trait over [`TryBitGenerator`] for sources believed to be
/// unpredictable.
pub trait TryCryptoGenerator: TryBitGenerator {}

impl<R: CryptoGenerator + ?Sized> TryCryptoGenerator for R {}

/// Wrapper around a [`TryBitGenerator`] implementing [`BitGenerator`]
///
/// Every method panics if the wrapped source reports an error. This is the
/// only way a fallible source becomes infallible: no method ever
/// substitutes data for a failed read.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct UnwrapErr<R: TryBitGenerator>(pub R);

impl<R: TryBitGenerator> BitGenerator for UnwrapErr<R> {
    #[inline]
    #[track_caller]
    fn next_u32(&mut self) -> u32 {
        match self.0.try_next_u32() {
            Ok(v) => v,
            Err(err) => panic!("entropy source failed: {}", err),
        }
    }

    #[inline]
    #[track_caller]
    fn next_u64(&mut self) -> u64 {
        match self.0.try_next_u64() {
            Ok(v) => v,
            Err(err) => panic!("entropy source failed: {}", err),
        }
    }

    #[inline]
    #[track_caller]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        if let Err(err) = self.0.try_fill_bytes(dst) {
            panic!("entropy source failed: {}", err)
        }
    }
}

impl<R: TryCryptoGenerator> CryptoGenerator for UnwrapErr<R> {}

/// A generator that can be explicitly seeded.
///
/// This trait encapsulates the low-level functionality common to all
/// pseudo-random number generators with a seed.
///
/// Seeding determines the whole future output sequence. A seed is consumed
/// on use; generators do not retain it.
pub trait SeedableGenerator: Sized {
    /// Seed type: one or more fixed-width integers specific to the algorithm.
    ///
    /// The [`Seed`] trait lets a seed be built from bytes, which is how
    /// [`from_rng`](SeedableGenerator::from_rng) draws one from another
    /// generator.
    type Seed: Seed + Clone;

    /// Create a new generator using the given seed.
    ///
    /// Generators for which some seeds are invalid (e.g. all-zero states of
    /// the xorshift family) panic on such a seed.
    fn from_seed(seed: Self::Seed) -> Self;

    /// Create a new generator using a `u64` seed.
    ///
    /// The `u64` is expanded with [`SplitMix64`] into a full seed, so that
    /// even small or similar inputs yield well-mixed states.
    fn seed_from_u64(state: u64) -> Self {
        let mut rng = SplitMix64::from_seed(state);
        Self::from_rng(&mut rng)
    }

    /// Create a new generator seeded from another generator.
    ///
    /// Seeding a simple numerical generator from another of the same type
    /// can effectively clone it; prefer a different algorithm, or a
    /// cryptographic one, as the source.
    fn from_rng<R: BitGenerator + ?Sized>(rng: &mut R) -> Self {
        Self::from_seed(Self::Seed::from_fill(|buf| rng.fill_bytes(buf)))
    }

    /// Create a new generator seeded from a potentially fallible source.
    ///
    /// This is the fallible equivalent of
    /// [`from_rng`](SeedableGenerator::from_rng).
    fn try_from_rng<R: TryBitGenerator + ?Sized>(rng: &mut R) -> Result<Self, R::Error> {
        let seed = Self::Seed::try_from_fill(|buf| rng.try_fill_bytes(buf))?;
        Ok(Self::from_seed(seed))
    }

    /// Replace the state of `self` with the state derived from `seed`.
    fn reseed(&mut self, seed: Self::Seed) {
        *self = Self::from_seed(seed);
    }

    /// Replace the state of `self` with seed material drawn from `rng`.
    fn reseed_from_rng<R: BitGenerator + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::from_rng(rng);
    }

    /// Create a new generator seeded from the operating system.
    #[cfg(feature = "os_rng")]
    fn from_os_rng() -> Result<Self, Error> {
        Self::try_from_rng(&mut OsEntropy)
    }
}

/// Generators able to advance their state by a fixed, very large number of
/// steps at once.
///
/// Jumping is used to partition one seed into many non-overlapping streams,
/// one per execution context.
pub trait Jump {
    /// Advance the state as if a fixed, algorithm-specific number of values
    /// had been drawn.
    fn jump(&mut self);

    /// Return a copy of the current stream and jump `self` past it.
    ///
    /// Calling this repeatedly hands out consecutive non-overlapping
    /// streams:
    ///
    /// ```ignore
    /// let mut base = Xoroshiro128Plus::seed_from_u64(7);
    /// let streams: Vec<_> = (0..4).map(|_| base.split()).collect();
    /// ```
    fn split(&mut self) -> Self
    where
        Self: Clone,
    {
        let stream = self.clone();
        self.jump();
        stream
    }
}
