// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// `TryBitGenerator` for these wrappers comes from the blanket impl over
// every `BitGenerator`.

#[cfg(feature = "alloc")]
use alloc::boxed::Box;

use crate::{BitGenerator, CryptoGenerator};

impl<'a, G: BitGenerator + ?Sized> BitGenerator for &'a mut G {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        G::next_u32(self)
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        G::next_u64(self)
    }

    #[inline(always)]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        G::fill_bytes(self, dst)
    }

    #[inline(always)]
    fn next_u16(&mut self) -> u16 {
        G::next_u16(self)
    }

    #[inline(always)]
    fn next_u8(&mut self) -> u8 {
        G::next_u8(self)
    }
}

impl<'a, G: CryptoGenerator + ?Sized> CryptoGenerator for &'a mut G {}

#[cfg(feature = "alloc")]
impl<G: BitGenerator + ?Sized> BitGenerator for Box<G> {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        G::next_u32(self)
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        G::next_u64(self)
    }

    #[inline(always)]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        G::fill_bytes(self, dst)
    }

    #[inline(always)]
    fn next_u16(&mut self) -> u16 {
        G::next_u16(self)
    }

    #[inline(always)]
    fn next_u8(&mut self) -> u8 {
        G::next_u8(self)
    }
}

#[cfg(feature = "alloc")]
impl<G: CryptoGenerator + ?Sized> CryptoGenerator for Box<G> {}
