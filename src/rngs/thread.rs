// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Thread-local default generator

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::{ChaCha20, ReseedingGenerator, DEFAULT_THRESHOLD};
use rngkit_core::{BitGenerator, CryptoGenerator, OsEntropy, SeedableGenerator};

type Core = ReseedingGenerator<ChaCha20, OsEntropy>;

/// A reference to the thread-local generator
///
/// Obtained through [`thread_rng`](crate::thread_rng). The generator is a
/// [`ChaCha20`] seeded from [`OsEntropy`] on first use in each thread and
/// reseeded from it after every [`DEFAULT_THRESHOLD`] bytes.
///
/// `ThreadRng` is neither `Send` nor `Sync`: each thread has its own
/// instance. Cloning yields another handle to the same instance.
#[derive(Clone)]
pub struct ThreadRng {
    rng: Rc<RefCell<Core>>,
}

// State is not shown.
impl fmt::Debug for ThreadRng {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ThreadRng {{ .. }}")
    }
}

impl ThreadRng {
    /// Immediately reseed the thread's generator from the operating system.
    pub fn reseed(&mut self) -> Result<(), rngkit_core::Error> {
        self.rng.borrow_mut().reseed()
    }
}

thread_local!(
    static THREAD_RNG_KEY: Rc<RefCell<Core>> = {
        let rng = match ChaCha20::try_from_rng(&mut OsEntropy) {
            Ok(rng) => rng,
            Err(err) => panic!("could not initialize thread_rng: {}", err),
        };
        Rc::new(RefCell::new(ReseedingGenerator::from_parts(
            rng,
            DEFAULT_THRESHOLD,
            OsEntropy,
        )))
    }
);

/// Access the thread-local generator
///
/// Returns a handle to the lazily-initialized generator of the calling
/// thread. Use it in method chaining style, `thread_rng().random::<i32>()`,
/// or keep it in a local variable.
///
/// # Panics
///
/// On first use in a thread, if the operating system generator fails.
pub fn thread_rng() -> ThreadRng {
    ThreadRng {
        rng: THREAD_RNG_KEY.with(|t| t.clone()),
    }
}

impl BitGenerator for ThreadRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.rng.borrow_mut().next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.rng.borrow_mut().next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.borrow_mut().fill_bytes(dst)
    }
}

impl CryptoGenerator for ThreadRng {}
