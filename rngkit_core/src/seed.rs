// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::convert::Infallible;
use zerocopy::IntoBytes;

/// Types usable as a generator seed.
///
/// A seed can be produced from a byte-filling closure, which is how one
/// generator seeds another. Bytes are interpreted in little-endian order.
///
/// Implemented for `[u8; N]`, the unsigned integers, and arrays of the
/// unsigned integers.
pub trait Seed: Sized {
    /// Create a seed from a fallible closure which fills the provided buffer.
    fn try_from_fill<E>(fill: impl FnOnce(&mut [u8]) -> Result<(), E>) -> Result<Self, E>;

    /// Create a seed from an infallible closure which fills the provided
    /// buffer.
    fn from_fill(fill: impl FnOnce(&mut [u8])) -> Self {
        let seed = Self::try_from_fill::<Infallible>(|buf| {
            fill(buf);
            Ok(())
        });
        match seed {
            Ok(seed) => seed,
            Err(never) => match never {},
        }
    }

    /// Whether every bit of the seed is zero.
    ///
    /// Xorshift-family generators have no valid all-zero state.
    fn is_zero(&self) -> bool;
}

impl<const N: usize> Seed for [u8; N] {
    fn try_from_fill<E>(fill: impl FnOnce(&mut [u8]) -> Result<(), E>) -> Result<Self, E> {
        let mut buf = [0u8; N];
        fill(&mut buf)?;
        Ok(buf)
    }

    fn is_zero(&self) -> bool {
        self.iter().all(|&b| b == 0)
    }
}

macro_rules! impl_uint {
    ($($t:ty)*) => {$(
        impl Seed for $t {
            fn try_from_fill<E>(fill: impl FnOnce(&mut [u8]) -> Result<(), E>) -> Result<Self, E> {
                let mut buf = [0u8; core::mem::size_of::<$t>()];
                fill(&mut buf)?;
                Ok(<$t>::from_le_bytes(buf))
            }

            fn is_zero(&self) -> bool {
                *self == 0
            }
        }
    )*};
}

impl_uint!(u8 u16 u32 u64 u128);

macro_rules! impl_uint_array {
    ($($t:ty)*) => {$(
        impl<const N: usize> Seed for [$t; N] {
            fn try_from_fill<E>(fill: impl FnOnce(&mut [u8]) -> Result<(), E>) -> Result<Self, E> {
                let mut buf: [$t; N] = [0; N];
                fill(buf.as_mut_bytes())?;
                for word in &mut buf {
                    *word = <$t>::from_le(*word);
                }
                Ok(buf)
            }

            fn is_zero(&self) -> bool {
                self.iter().all(|&w| w == 0)
            }
        }
    )*};
}

impl_uint_array!(u16 u32 u64 u128);
