// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reservoir sampling: uniform (Algorithm R) and weighted (A-Chao)

use alloc::vec::Vec;

use super::gen_index;
use crate::Rng;

/// Randomly sample `k` elements from `iter` with Algorithm R.
///
/// The first `k` elements fill the reservoir. Each later element, at
/// position `i`, draws `j` uniformly from `[0, i]` and replaces reservoir
/// slot `j` if `j < k`. Every element ends up in the result with
/// probability `k / n`.
///
/// The result has `min(k, n)` elements; with `k >= n` it is the whole input
/// in order. With `k == 0` nothing is consumed.
///
/// # Example
///
/// ```
/// use rngkit::SeedableGenerator;
/// use rngkit::rngs::Xorshift1024Star;
/// use rngkit::seq::sample_reservoir;
///
/// let mut rng = Xorshift1024Star::seed_from_u64(2);
/// let sample = sample_reservoir(&mut rng, 1..=100, 5);
/// assert_eq!(sample.len(), 5);
/// assert_eq!(sample_reservoir(&mut rng, 1..=3, 5), [1, 2, 3]);
/// ```
pub fn sample_reservoir<R, I>(rng: &mut R, iter: I, k: usize) -> Vec<I::Item>
where
    R: Rng + ?Sized,
    I: IntoIterator,
{
    if k == 0 {
        return Vec::new();
    }
    let mut iter = iter.into_iter();
    let mut reservoir = Vec::with_capacity(k);
    reservoir.extend(iter.by_ref().take(k));

    // Continue unless the iterator was exhausted
    //
    // note: this prevents iterators that "restart" from causing problems.
    // If the iterator stops once, then so do we.
    if reservoir.len() == k {
        for (i, elem) in iter.enumerate() {
            let j = gen_index(rng, i + 1 + k);
            if let Some(slot) = reservoir.get_mut(j) {
                *slot = elem;
            }
        }
    } else {
        reservoir.shrink_to_fit();
    }
    reservoir
}

/// Randomly sample `k` elements of `items`, biased by `weights`, with the
/// A-Chao reservoir algorithm.
///
/// The first `k` items fill the reservoir and their weights start a running
/// sum. Each later item `i` is accepted with probability
/// `weights[i] / sum`, where `sum` does not yet include `weights[i]`; an
/// accepted item replaces a uniformly chosen reservoir slot. The running
/// sum then grows by `weights[i]` whether or not the item was accepted.
/// A weight of zero is never accepted; a weight at least as large as the
/// running sum always is.
///
/// Edge cases:
///
/// - `k == 0` gives an empty result;
/// - `k >= items.len()` returns all items in order;
/// - if `weights` is shorter than `items`, all items are returned in order
///   and a warning is logged.
///
/// Weights beyond `items.len()` are ignored.
///
/// # Example
///
/// ```
/// use rngkit::SeedableGenerator;
/// use rngkit::rngs::Xoroshiro128Plus;
/// use rngkit::seq::sample_weighted_reservoir;
///
/// let mut rng = Xoroshiro128Plus::seed_from_u64(4);
/// let items = ["apple", "pear", "plum", "fig"];
/// let picked = sample_weighted_reservoir(&mut rng, &items, &[5.0, 1.0, 1.0, 3.0], 2);
/// assert_eq!(picked.len(), 2);
/// ```
pub fn sample_weighted_reservoir<R, T>(rng: &mut R, items: &[T], weights: &[f64], k: usize) -> Vec<T>
where
    R: Rng + ?Sized,
    T: Clone,
{
    weighted_indices(rng, weights, items.len(), k)
        .into_iter()
        .map(|i| items[i].clone())
        .collect()
}

/// Indices chosen by A-Chao over a population of `n`.
pub(super) fn weighted_indices<R>(rng: &mut R, weights: &[f64], n: usize, k: usize) -> Vec<usize>
where
    R: Rng + ?Sized,
{
    if k == 0 {
        return Vec::new();
    }
    if weights.len() < n {
        warn!(
            "{} weights for {} items; returning the population unchanged",
            weights.len(),
            n
        );
        return (0..n).collect();
    }
    if k >= n {
        return (0..n).collect();
    }

    let mut reservoir: Vec<usize> = (0..k).collect();
    let mut sum: f64 = weights[..k].iter().sum();
    for (i, &w) in weights.iter().enumerate().take(n).skip(k) {
        let u: f64 = rng.random();
        if u < w / sum {
            reservoir[gen_index(rng, k)] = i;
        }
        sum += w;
    }
    reservoir
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rngs::mock::StepRng;

    #[test]
    fn algorithm_r_replaces_slot() {
        // every draw is 0: element i replaces slot 0
        let mut rng = StepRng::new(0, 0);
        assert_eq!(sample_reservoir(&mut rng, 0..10, 3), [9, 1, 2]);
    }

    #[test]
    fn algorithm_r_keeps_on_large_draw() {
        // every draw is 3, which is never below k for i >= k
        let mut rng = StepRng::new(3, 0);
        assert_eq!(sample_reservoir(&mut rng, 0..10, 3), [0, 1, 2]);
    }

    #[test]
    fn zero_k_draws_nothing() {
        let mut rng = StepRng::new(0, 1);
        assert!(sample_reservoir(&mut rng, 0..10, 0).is_empty());
        assert!(weighted_indices(&mut rng, &[1.0; 10], 10, 0).is_empty());
        assert_eq!(rng.random::<u64>(), 0);
    }

    #[test]
    fn every_element_selectable() {
        let mut rng = crate::test::rng(501);
        let mut hits = [0u32; 20];
        for _ in 0..2000 {
            for x in sample_reservoir(&mut rng, 0..20usize, 5) {
                hits[x] += 1;
            }
        }
        // each element: Binomial(2000, 1/4)
        for &h in hits.iter() {
            assert!(h > 400 && h < 600, "count {}", h);
        }
    }

    #[test]
    fn weighted_edge_cases() {
        let mut rng = crate::test::rng(502);
        let items = [10, 20, 30, 40];
        assert!(sample_weighted_reservoir(&mut rng, &items, &[1.0; 4], 0).is_empty());
        assert_eq!(sample_weighted_reservoir(&mut rng, &items, &[1.0; 4], 4), items);
        assert_eq!(sample_weighted_reservoir(&mut rng, &items, &[1.0; 4], 9), items);
        assert_eq!(sample_weighted_reservoir(&mut rng, &items, &[1.0; 2], 1), items);
        let empty: [u8; 0] = [];
        assert!(sample_weighted_reservoir(&mut rng, &empty, &[], 3).is_empty());
    }

    #[test]
    fn zero_weight_never_enters() {
        let mut rng = crate::test::rng(503);
        let weights = [1.0, 1.0, 0.0, 1.0, 0.0];
        for _ in 0..1000 {
            let picked = weighted_indices(&mut rng, &weights, 5, 2);
            assert_eq!(picked.len(), 2);
            assert!(!picked.contains(&2) && !picked.contains(&4));
        }
    }

    #[test]
    fn acceptance_probability() {
        // k = 1, weights [1, 3]: index 1 is accepted with probability 3 / 1,
        // i.e. always; with [3, 1] it is accepted with probability 1/3.
        let mut rng = crate::test::rng(504);
        for _ in 0..100 {
            assert_eq!(weighted_indices(&mut rng, &[1.0, 3.0], 2, 1), [1]);
        }
        let n = 30_000;
        let mut accepted = 0;
        for _ in 0..n {
            if weighted_indices(&mut rng, &[3.0, 1.0], 2, 1) == [1] {
                accepted += 1;
            }
        }
        let frac = accepted as f64 / n as f64;
        assert!((frac - 1.0 / 3.0).abs() < 0.02, "{}", frac);
    }
}
