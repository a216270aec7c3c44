// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Filling slices of plain data

use crate::BitGenerator;
use core::num::Wrapping;
use zerocopy::{FromBytes, IntoBytes};

/// Support filling a slice with random data
///
/// Integer slices are filled through [`BitGenerator::fill_bytes`] and each
/// value is read in little-endian order, so a seeded generator fills the
/// same values on every platform.
pub trait Fill: Sized {
    /// Fill `this` with random data.
    fn fill_slice<G: BitGenerator + ?Sized>(this: &mut [Self], rng: &mut G);
}

impl Fill for u8 {
    fn fill_slice<G: BitGenerator + ?Sized>(this: &mut [Self], rng: &mut G) {
        rng.fill_bytes(this)
    }
}

macro_rules! impl_fill {
    ($($t:ty)*) => {$(
        impl Fill for $t {
            fn fill_slice<G: BitGenerator + ?Sized>(this: &mut [Self], rng: &mut G) {
                if this.is_empty() {
                    return;
                }
                rng.fill_bytes(this.as_mut_bytes());
                for x in this {
                    *x = <$t>::from_le(*x);
                }
            }
        }

        impl Fill for Wrapping<$t> {
            fn fill_slice<G: BitGenerator + ?Sized>(this: &mut [Self], rng: &mut G) {
                for x in this {
                    let mut v = [0 as $t];
                    <$t>::fill_slice(&mut v, rng);
                    *x = Wrapping(v[0]);
                }
            }
        }
    )*};
}

impl_fill!(u16 u32 u64 u128 i8 i16 i32 i64 i128);

/// Fill `this` by randomizing its bytes in place.
///
/// Any type without indirection and without invalid bit patterns qualifies,
/// including structs deriving the `zerocopy` traits. The bytes are written
/// in the generator's `fill_bytes` order with no byte swapping, so multi-byte
/// values differ between little- and big-endian platforms. Prefer [`Fill`]
/// where reproducibility across platforms matters.
pub fn fill_raw<T, G>(rng: &mut G, this: &mut [T])
where
    T: FromBytes + IntoBytes,
    G: BitGenerator + ?Sized,
{
    rng.fill_bytes(this.as_mut_bytes())
}
