// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use rngkit::rngs::{Xoroshiro128Plus, Xorshift1024Star};
use rngkit::seq::{sample_reservoir, sample_weighted_reservoir, IndexedRandom, IteratorRandom};
use rngkit::SeedableGenerator;

#[test]
fn reservoir_cardinality() {
    let mut rng = Xoroshiro128Plus::seed_from_u64(1);
    for n in 0..30usize {
        for k in 0..35usize {
            let sample = sample_reservoir(&mut rng, 0..n, k);
            assert_eq!(sample.len(), k.min(n));
            if k >= n {
                assert_eq!(sample, (0..n).collect::<Vec<_>>());
            }
        }
    }
}

#[test]
fn reservoir_is_uniform() {
    let mut rng = Xorshift1024Star::seed_from_u64(2);
    let mut hits = [0u32; 10];
    let rounds = 20_000;
    for _ in 0..rounds {
        for x in (0..10usize).choose_multiple(&mut rng, 3) {
            hits[x] += 1;
        }
    }
    let expected = rounds as f64 * 0.3;
    for &h in hits.iter() {
        assert!((h as f64 - expected).abs() < expected * 0.05, "{:?}", hits);
    }
}

#[test]
fn weighted_cardinality() {
    let mut rng = Xoroshiro128Plus::seed_from_u64(3);
    let items: Vec<u32> = (0..50).collect();
    let weights: Vec<f64> = (0..50).map(|i| 1.0 + i as f64).collect();
    for k in 0..60usize {
        let picked = sample_weighted_reservoir(&mut rng, &items, &weights, k);
        assert_eq!(picked.len(), k.min(items.len()));
        let mut sorted = picked.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), picked.len());
    }
}

#[test]
fn weighted_prefers_heavy_items() {
    let mut rng = Xoroshiro128Plus::seed_from_u64(4);
    let items = ['a', 'b', 'c', 'd', 'e', 'f'];
    let weights = [1.0, 1.0, 1.0, 1.0, 1.0, 50.0];
    let mut heavy = 0;
    for _ in 0..1000 {
        if items.choose_multiple_weighted(&mut rng, &weights, 2).contains(&&'f') {
            heavy += 1;
        }
    }
    // 'f' is accepted with probability 50 / 5 >= 1
    assert_eq!(heavy, 1000);
}

#[test]
fn weighted_fallbacks() {
    let mut rng = Xoroshiro128Plus::seed_from_u64(5);
    let items = [1, 2, 3, 4, 5];
    assert!(sample_weighted_reservoir(&mut rng, &items, &[1.0; 5], 0).is_empty());
    assert_eq!(sample_weighted_reservoir(&mut rng, &items, &[1.0; 5], 5), items);
    assert_eq!(sample_weighted_reservoir(&mut rng, &items, &[1.0; 3], 2), items);
}

#[test]
fn choose_one() {
    let mut rng = Xoroshiro128Plus::seed_from_u64(6);
    let items = [10, 20, 30];
    let mut seen = [false; 3];
    for _ in 0..100 {
        let v = *items.choose(&mut rng).unwrap();
        seen[v / 10 - 1] = true;
    }
    assert_eq!(seen, [true; 3]);

    let empty: [u8; 0] = [];
    assert_eq!(empty.choose(&mut rng), None);
    assert_eq!((0..0).choose(&mut rng), None);
    assert!("abc".chars().choose(&mut rng).is_some());
}
