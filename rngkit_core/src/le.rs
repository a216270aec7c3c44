// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Little-endian conversions between byte buffers and words
//!
//! Seeds are exchanged as bytes when one generator seeds another, and block
//! generators hand out buffered words as bytes. Both directions use
//! little-endian order so results are reproducible across platforms.

/// Words which can be written out as little-endian bytes.
pub(crate) trait LeWord: Copy {
    type Bytes: AsRef<[u8]>;
    fn to_le_bytes(self) -> Self::Bytes;
}

impl LeWord for u32 {
    type Bytes = [u8; 4];

    fn to_le_bytes(self) -> Self::Bytes {
        u32::to_le_bytes(self)
    }
}

impl LeWord for u64 {
    type Bytes = [u8; 8];

    fn to_le_bytes(self) -> Self::Bytes {
        u64::to_le_bytes(self)
    }
}

/// Copy as many words of `src` into `dst` as fit
///
/// Returns `(words, bytes)`: `src[..words]` was consumed and `dst[..bytes]`
/// written. When `dst` ends partway through a word, that word is consumed
/// and its low bytes are written.
pub(crate) fn fill_via_chunks<T: LeWord>(src: &[T], dst: &mut [u8]) -> (usize, usize) {
    let size = core::mem::size_of::<T>();
    let mut chunks = dst.chunks_exact_mut(size);
    let mut words = src.iter();

    let mut n = 0;
    for (chunk, word) in chunks.by_ref().zip(words.by_ref()) {
        chunk.copy_from_slice(word.to_le_bytes().as_ref());
        n += 1;
    }

    let rem = chunks.into_remainder();
    if !rem.is_empty() {
        if let Some(word) = words.next() {
            let len = rem.len();
            rem.copy_from_slice(&word.to_le_bytes().as_ref()[..len]);
            return (n + 1, n * size + len);
        }
    }
    (n, n * size)
}

/// Fill `dst` with little-endian `u32` words read from `src`
///
/// # Panics
///
/// If `src.len() < 4 * dst.len()`.
#[inline]
#[track_caller]
pub fn read_u32_into(src: &[u8], dst: &mut [u32]) {
    assert!(src.len() >= 4 * dst.len());
    for (out, chunk) in dst.iter_mut().zip(src.chunks_exact(4)) {
        let mut word = [0u8; 4];
        word.copy_from_slice(chunk);
        *out = u32::from_le_bytes(word);
    }
}

/// Fill `dst` with little-endian `u64` words read from `src`
///
/// # Panics
///
/// If `src.len() < 8 * dst.len()`.
#[inline]
#[track_caller]
pub fn read_u64_into(src: &[u8], dst: &mut [u64]) {
    assert!(src.len() >= 8 * dst.len());
    for (out, chunk) in dst.iter_mut().zip(src.chunks_exact(8)) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        *out = u64::from_le_bytes(word);
    }
}
