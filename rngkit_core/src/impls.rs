// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Width adaptation helpers for implementing [`BitGenerator`]
//!
//! A generator implements the method matching its native width and derives
//! the others with these functions:
//!
//! | native | `next_u32`                 | `next_u64`                  | `fill_bytes`                |
//! |--------|----------------------------|-----------------------------|-----------------------------|
//! | 32-bit | native                     | [`next_u64_via_u32`]        | [`fill_bytes_via_u32`]      |
//! | 64-bit | `self.next_u64() as u32`   | native                      | [`fill_bytes_via_u64`]      |
//! | bytes  | [`next_u32_via_fill`]      | [`next_u64_via_fill`]       | native                      |
//!
//! All helpers use little-endian order: the first value drawn is the
//! least-significant part of the result.

use crate::BitGenerator;

/// Implement `next_u64` via `next_u32`, little-endian order.
///
/// The first draw forms the low half.
#[inline]
pub fn next_u64_via_u32<G: BitGenerator + ?Sized>(rng: &mut G) -> u64 {
    let lo = u64::from(rng.next_u32());
    let hi = u64::from(rng.next_u32());
    (hi << 32) | lo
}

macro_rules! fill_bytes_via {
    ($rng:ident, $next:ident, $n:expr, $dst:ident) => {{
        let mut chunks = $dst.chunks_exact_mut($n);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&$rng.$next().to_le_bytes());
        }
        let rem = chunks.into_remainder();
        if !rem.is_empty() {
            let word = $rng.$next().to_le_bytes();
            let len = rem.len();
            rem.copy_from_slice(&word[..len]);
        }
    }};
}

/// Implement `fill_bytes` via `next_u32`.
///
/// Writes whole little-endian `u32` words; a tail shorter than four bytes
/// consumes one more word and keeps its low bytes.
#[inline]
pub fn fill_bytes_via_u32<G: BitGenerator + ?Sized>(rng: &mut G, dst: &mut [u8]) {
    fill_bytes_via!(rng, next_u32, 4, dst)
}

/// Implement `fill_bytes` via `next_u64`.
///
/// Writes whole little-endian `u64` words; a tail shorter than eight bytes
/// consumes one more word and keeps its low bytes.
#[inline]
pub fn fill_bytes_via_u64<G: BitGenerator + ?Sized>(rng: &mut G, dst: &mut [u8]) {
    fill_bytes_via!(rng, next_u64, 8, dst)
}

/// Implement `next_u32` via `fill_bytes`, little-endian order.
pub fn next_u32_via_fill<G: BitGenerator + ?Sized>(rng: &mut G) -> u32 {
    let mut buf = [0; 4];
    rng.fill_bytes(&mut buf);
    u32::from_le_bytes(buf)
}

/// Implement `next_u64` via `fill_bytes`, little-endian order.
pub fn next_u64_via_fill<G: BitGenerator + ?Sized>(rng: &mut G) -> u64 {
    let mut buf = [0; 8];
    rng.fill_bytes(&mut buf);
    u64::from_le_bytes(buf)
}
