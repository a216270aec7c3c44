// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![cfg(feature = "serde")]

use rngkit::distr::{Distribution, Uniform};
use rngkit::rngs::{ChaCha20, Mt19937_64, Xoroshiro128Plus, Xorshift1024Star, Xorshift32};
use rngkit::{BitGenerator, SeedableGenerator};
use serde::{de::DeserializeOwned, Serialize};

fn resume_mid_stream<G>(seed: u64)
where
    G: BitGenerator + SeedableGenerator + Serialize + DeserializeOwned,
{
    let mut rng = G::seed_from_u64(seed);
    // leave buffered block generators part-way through a block
    for _ in 0..7 {
        rng.next_u32();
    }
    let encoded = bincode::serialize(&rng).unwrap();
    let mut restored: G = bincode::deserialize(&encoded).unwrap();
    for _ in 0..1000 {
        assert_eq!(rng.next_u64(), restored.next_u64());
    }
}

#[test]
fn generators_resume() {
    resume_mid_stream::<Xorshift32>(1);
    resume_mid_stream::<Xoroshiro128Plus>(2);
    resume_mid_stream::<Xorshift1024Star>(3);
    resume_mid_stream::<ChaCha20>(4);
    resume_mid_stream::<Mt19937_64>(5);
}

#[test]
fn uniform_round_trip() {
    let dist = Uniform::new_inclusive(-7i32, 300).unwrap();
    let restored: Uniform<i32> = bincode::deserialize(&bincode::serialize(&dist).unwrap()).unwrap();
    let mut a = Xoroshiro128Plus::seed_from_u64(6);
    let mut b = a.clone();
    for _ in 0..100 {
        assert_eq!(dist.sample(&mut a), restored.sample(&mut b));
    }

    let dist = Uniform::new(0.5f64, 2.0).unwrap();
    let restored: Uniform<f64> = bincode::deserialize(&bincode::serialize(&dist).unwrap()).unwrap();
    for _ in 0..100 {
        assert_eq!(dist.sample(&mut a), restored.sample(&mut b));
    }
}
