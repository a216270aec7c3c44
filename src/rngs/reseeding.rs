// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A wrapper around another generator that reseeds it after it has
//! generated a certain number of bytes.

use rngkit_core::{BitGenerator, CryptoGenerator, SeedableGenerator, TryBitGenerator, TryCryptoGenerator};

/// How many bytes the wrapped generator may produce before it is reseeded.
pub const DEFAULT_THRESHOLD: u64 = 32 * 1024;

/// A wrapper around a seedable generator which replaces its state with
/// fresh seed material after it has generated a certain number of bytes.
///
/// Every draw first checks the byte counter: once it has reached the
/// threshold, the base generator is rebuilt from the reseeder and the
/// counter restarts at zero. The draw then runs on the base generator and
/// its size in bytes (4 for `next_u32`, 8 for `next_u64`, the buffer length
/// for `fill_bytes`) is added to the counter.
///
/// A threshold of zero disables automatic reseeding.
///
/// The reseeder may be fallible. When it fails the error is logged, the
/// counter restarts, and the base generator continues from its current
/// state; draws themselves never fail.
///
/// ```
/// use rngkit::{BitGenerator, SeedableGenerator};
/// use rngkit::rngs::{ChaCha20, ReseedingGenerator, SplitMix64};
///
/// let reseeder = SplitMix64::seed_from_u64(1);
/// let mut rng = ReseedingGenerator::<ChaCha20, _>::new(1024, reseeder).unwrap();
/// let mut buf = [0u8; 4096];
/// rng.fill_bytes(&mut buf);
/// rng.next_u32();
/// assert_eq!(rng.reseed_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ReseedingGenerator<G, Rs> {
    inner: G,
    reseeder: Rs,
    threshold: u64,
    bytes_generated: u64,
    reseeds: u64,
}

impl<G, Rs> ReseedingGenerator<G, Rs>
where
    G: BitGenerator + SeedableGenerator,
    Rs: TryBitGenerator,
{
    /// Create a new `ReseedingGenerator`, seeding the base generator from
    /// `reseeder`.
    ///
    /// `threshold` is the number of generated bytes after which the base
    /// generator is reseeded; zero disables automatic reseeding.
    pub fn new(threshold: u64, mut reseeder: Rs) -> Result<Self, Rs::Error> {
        let inner = G::try_from_rng(&mut reseeder)?;
        Ok(Self::from_parts(inner, threshold, reseeder))
    }

    /// Wrap an already seeded base generator.
    pub fn from_parts(inner: G, threshold: u64, reseeder: Rs) -> Self {
        ReseedingGenerator {
            inner,
            reseeder,
            threshold,
            bytes_generated: 0,
            reseeds: 0,
        }
    }

    /// Immediately reseed the base generator and restart the byte counter.
    ///
    /// On error the base generator is left unchanged.
    pub fn reseed(&mut self) -> Result<(), Rs::Error> {
        self.bytes_generated = 0;
        self.inner = G::try_from_rng(&mut self.reseeder)?;
        self.reseeds += 1;
        Ok(())
    }

    /// Number of successful reseeds, automatic or forced.
    pub fn reseed_count(&self) -> u64 {
        self.reseeds
    }

    /// Bytes generated since the last reseed attempt.
    pub fn bytes_generated(&self) -> u64 {
        self.bytes_generated
    }

    /// The configured threshold.
    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    #[inline(always)]
    fn reseed_if_necessary(&mut self) {
        if self.threshold != 0 && self.bytes_generated >= self.threshold {
            self.reseed_and_log();
        }
    }

    #[inline(never)]
    fn reseed_and_log(&mut self) {
        trace!("Reseeding generator after {} generated bytes", self.bytes_generated);
        if let Err(e) = self.reseed() {
            error!("Reseeding generator failed; continuing without reseeding: {}", e);
        }
    }
}

impl<G, Rs> BitGenerator for ReseedingGenerator<G, Rs>
where
    G: BitGenerator + SeedableGenerator,
    Rs: TryBitGenerator,
{
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.reseed_if_necessary();
        self.bytes_generated += 4;
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.reseed_if_necessary();
        self.bytes_generated += 8;
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.reseed_if_necessary();
        self.bytes_generated += dst.len() as u64;
        self.inner.fill_bytes(dst)
    }
}

impl<G, Rs> CryptoGenerator for ReseedingGenerator<G, Rs>
where
    G: CryptoGenerator + SeedableGenerator,
    Rs: TryCryptoGenerator,
{
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rngs::mock::StepRng;
    use crate::rngs::ChaCha20;
    use core::fmt;
    use rngkit_core::impls::{fill_bytes_via_u32, next_u64_via_u32};

    /// Counts up from its seed.
    #[derive(Debug)]
    struct Counter(u32);

    impl BitGenerator for Counter {
        fn next_u32(&mut self) -> u32 {
            let v = self.0;
            self.0 = self.0.wrapping_add(1);
            v
        }
        fn next_u64(&mut self) -> u64 {
            next_u64_via_u32(self)
        }
        fn fill_bytes(&mut self, dst: &mut [u8]) {
            fill_bytes_via_u32(self, dst)
        }
    }

    impl SeedableGenerator for Counter {
        type Seed = u32;
        fn from_seed(seed: u32) -> Self {
            Counter(seed)
        }
    }

    #[test]
    fn reseeds_at_threshold() {
        // the reseeder always yields zero, so each reseed restarts the count
        let mut rng = ReseedingGenerator::<Counter, _>::new(400, StepRng::new(0, 0)).unwrap();
        for i in 0..1000 {
            assert_eq!(rng.next_u32(), i % 100);
        }
        assert_eq!(rng.reseed_count(), 9);
        assert_eq!(rng.bytes_generated(), 400);
    }

    #[test]
    fn one_reseed_per_crossing() {
        let mut rng = ReseedingGenerator::<Counter, _>::new(100, StepRng::new(0, 0)).unwrap();
        let mut buf = [0u8; 250];
        rng.fill_bytes(&mut buf);
        assert_eq!(rng.reseed_count(), 0);
        rng.next_u64();
        assert_eq!(rng.reseed_count(), 1);
        assert_eq!(rng.bytes_generated(), 8);
    }

    #[test]
    fn zero_threshold_never_reseeds() {
        let mut rng = ReseedingGenerator::<Counter, _>::new(0, StepRng::new(5, 0)).unwrap();
        for i in 0..500 {
            assert_eq!(rng.next_u32(), 5 + i);
        }
        assert_eq!(rng.reseed_count(), 0);
    }

    #[test]
    fn forced_reseed() {
        let mut rng = ReseedingGenerator::<Counter, _>::new(1 << 20, StepRng::new(7, 0)).unwrap();
        rng.next_u32();
        rng.next_u32();
        rng.reseed().unwrap();
        assert_eq!(rng.next_u32(), 7);
        assert_eq!(rng.reseed_count(), 1);
    }

    #[test]
    fn clone_is_independent_copy() {
        let mut a = ReseedingGenerator::<ChaCha20, _>::new(64, StepRng::new(3, 11)).unwrap();
        a.next_u64();
        let mut b = a.clone();
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
        assert_eq!(a.reseed_count(), b.reseed_count());
    }

    #[derive(Debug)]
    struct Failing;

    impl fmt::Display for Failing {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("entropy unavailable")
        }
    }

    /// Succeeds for `n` fills, then fails.
    struct Flaky(u32);

    impl TryBitGenerator for Flaky {
        type Error = Failing;
        fn try_next_u32(&mut self) -> Result<u32, Failing> {
            Err(Failing)
        }
        fn try_next_u64(&mut self) -> Result<u64, Failing> {
            Err(Failing)
        }
        fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Failing> {
            if self.0 == 0 {
                return Err(Failing);
            }
            self.0 -= 1;
            dst.fill(0);
            Ok(())
        }
    }

    #[test]
    fn failed_reseed_keeps_running() {
        let mut rng = ReseedingGenerator::<Counter, _>::new(8, Flaky(1)).unwrap();
        for i in 0..10 {
            assert_eq!(rng.next_u32(), i);
        }
        assert_eq!(rng.reseed_count(), 0);
        assert!(rng.bytes_generated() <= 8);
    }

    #[test]
    fn construction_error_is_returned() {
        assert!(ReseedingGenerator::<Counter, _>::new(8, Flaky(0)).is_err());
    }
}
