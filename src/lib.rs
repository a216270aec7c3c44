// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Utilities for random number generation
//!
//! rngkit provides deterministic bit generators, bias-free derivation of
//! bounded values from their raw output, sampling from common probability
//! distributions, and reservoir sampling over sequences.
//!
//! # Quick start
//!
//! ```
//! use rngkit::{Rng, SeedableGenerator};
//! use rngkit::rngs::Xoroshiro128Plus;
//!
//! let mut rng = Xoroshiro128Plus::seed_from_u64(7);
//! let roll: u8 = rng.random_range(1..=6).unwrap();
//! assert!((1..=6).contains(&roll));
//!
//! let x: f64 = rng.random();
//! assert!((0.0..1.0).contains(&x));
//! ```
//!
//! # The layers
//!
//! - [`BitGenerator`] is the source of raw bits; see [`rngs`] for the
//!   generators and their seeding.
//! - [`Rng`] is an extension trait on every [`BitGenerator`] deriving
//!   values: uniform integers and floats, booleans, filled slices.
//! - [`distr`] holds the distribution descriptors; more distributions are
//!   in the `rngkit_distr` crate.
//! - [`seq`] samples elements from slices and iterators.
//!
//! Generators are passed explicitly. With the `thread_rng` feature a
//! per-thread, automatically seeded generator is available through
//! [`thread_rng`], and [`random`] draws a single value from it.

#![doc(
    html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128-blk.png",
    html_favicon_url = "https://www.rust-lang.org/favicon.ico"
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![doc(test(attr(allow(unused_variables), deny(warnings))))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod log_macros;

pub mod distr;
mod rng;
pub mod rngs;
pub mod seq;

pub use rng::Rng;
pub use rngkit_core::{
    BitGenerator, CryptoGenerator, Error, Fill, Jump, Seed, SeedableGenerator, TryBitGenerator,
    TryCryptoGenerator, UnwrapErr,
};

#[cfg(feature = "thread_rng")]
pub use crate::rngs::thread::thread_rng;

/// Generate a random value using the thread-local generator.
///
/// A shortcut for `thread_rng().random()`. Each call goes through the
/// thread-local handle; in a loop, prefer calling [`thread_rng`] once.
///
/// # Example
///
/// ```
/// let x = rngkit::random::<u8>();
/// println!("{}", x);
///
/// if rngkit::random() {
///     println!("heads");
/// }
/// ```
#[cfg(feature = "thread_rng")]
#[inline]
pub fn random<T>() -> T
where
    distr::StandardUniform: distr::Distribution<T>,
{
    thread_rng().random()
}
