// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::fmt;
use rngkit_core::impls::fill_bytes_via_u64;
use rngkit_core::{
    BitGenerator, Jump, Seed, SeedableGenerator, SplitMix64, TryBitGenerator, UnwrapErr,
};

/// Two words of state; all zero is rejected like the xorshift family.
#[derive(Clone, Debug, PartialEq)]
struct Pair([u64; 2]);

impl BitGenerator for Pair {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }
    fn next_u64(&mut self) -> u64 {
        self.0[0] = self.0[0].wrapping_add(self.0[1]);
        self.0[0]
    }
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        fill_bytes_via_u64(self, dst)
    }
}

impl SeedableGenerator for Pair {
    type Seed = [u64; 2];
    fn from_seed(seed: [u64; 2]) -> Self {
        assert!(!seed.is_zero(), "zero seed");
        Pair(seed)
    }
}

impl Jump for Pair {
    fn jump(&mut self) {
        self.0[0] = self.0[0].wrapping_add(self.0[1].wrapping_mul(1000));
    }
}

#[derive(Debug)]
struct Exhausted;

impl fmt::Display for Exhausted {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("exhausted")
    }
}

/// A source that yields `left` bytes and then fails.
struct Limited {
    left: usize,
}

impl TryBitGenerator for Limited {
    type Error = Exhausted;
    fn try_next_u32(&mut self) -> Result<u32, Exhausted> {
        let mut buf = [0; 4];
        self.try_fill_bytes(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }
    fn try_next_u64(&mut self) -> Result<u64, Exhausted> {
        let mut buf = [0; 8];
        self.try_fill_bytes(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }
    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Exhausted> {
        if dst.len() > self.left {
            return Err(Exhausted);
        }
        self.left -= dst.len();
        dst.fill(0xab);
        Ok(())
    }
}

#[test]
fn seed_from_u64_uses_splitmix() {
    let mut sm = SplitMix64::seed_from_u64(42);
    let expected = [sm.next_u64(), sm.next_u64()];
    assert_eq!(Pair::seed_from_u64(42).0, expected);
}

#[test]
fn reseed_replays() {
    let mut rng = Pair::from_seed([3, 5]);
    let first: Vec<u64> = (0..4).map(|_| rng.next_u64()).collect();
    rng.reseed([3, 5]);
    let again: Vec<u64> = (0..4).map(|_| rng.next_u64()).collect();
    assert_eq!(first, again);
}

#[test]
fn reseed_from_rng_replaces_state() {
    let mut rng = Pair::from_seed([1, 1]);
    let mut src = SplitMix64::seed_from_u64(9);
    rng.reseed_from_rng(&mut src);
    assert_eq!(rng, Pair::from_rng(&mut SplitMix64::seed_from_u64(9)));
}

#[test]
#[should_panic(expected = "zero seed")]
fn zero_seed_panics() {
    Pair::from_seed([0, 0]);
}

#[test]
fn try_from_rng_reports_failure() {
    assert!(Pair::try_from_rng(&mut Limited { left: 15 }).is_err());
    let rng = Pair::try_from_rng(&mut Limited { left: 16 }).unwrap();
    assert_eq!(rng.0, [0xabab_abab_abab_abab; 2]);
}

#[test]
fn infallible_through_try() {
    let mut a = SplitMix64::seed_from_u64(3);
    let mut b = a.clone();
    match a.try_next_u64() {
        Ok(v) => assert_eq!(v, b.next_u64()),
        Err(never) => match never {},
    }
}

#[test]
#[should_panic(expected = "entropy source failed: exhausted")]
fn unwrap_err_panics() {
    let mut rng = UnwrapErr(Limited { left: 4 });
    rng.next_u32();
    rng.next_u32();
}

#[test]
fn split_hands_out_jumped_streams() {
    let mut base = Pair::from_seed([0, 1]);
    let s0 = base.split();
    let s1 = base.split();
    assert_eq!(s0.0[0], 0);
    assert_eq!(s1.0[0], 1000);
    assert_eq!(base.0[0], 2000);
}

#[test]
fn dyn_and_boxed_generators() {
    let mut rng = SplitMix64::seed_from_u64(0);
    let expected = rng.clone().next_u64();
    let r: &mut dyn BitGenerator = &mut rng;
    assert_eq!(r.next_u64(), expected);

    let mut boxed: Box<dyn BitGenerator> = Box::new(SplitMix64::seed_from_u64(0));
    assert_eq!(boxed.next_u64(), expected);
}
