// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Mock generator

use rngkit_core::impls::fill_bytes_via_u64;
use rngkit_core::BitGenerator;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A mock generator yielding very predictable output
///
/// This generates an arithmetic sequence over a `u64` (adding a constant
/// each step with wrapping arithmetic). If the increment is 0 the generator
/// yields a constant. Narrower words are the low bits of the `u64`, as for
/// any generator of native width 64.
///
/// Useful for driving value derivation into edge cases: `StepRng::new(0, 0)`
/// always draws zero and `StepRng::new(u64::MAX, 0)` always draws all ones.
///
/// # Example
///
/// ```
/// use rngkit::BitGenerator;
/// use rngkit::rngs::mock::StepRng;
///
/// let mut rng = StepRng::new(2, 1);
/// assert_eq!(rng.next_u64(), 2);
/// assert_eq!(rng.next_u32(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepRng {
    v: u64,
    a: u64,
}

impl StepRng {
    /// Create a `StepRng`, yielding an arithmetic sequence starting with
    /// `initial` and incremented by `increment` each time.
    pub fn new(initial: u64, increment: u64) -> Self {
        StepRng {
            v: initial,
            a: increment,
        }
    }
}

impl BitGenerator for StepRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let res = self.v;
        self.v = self.v.wrapping_add(self.a);
        res
    }

    #[inline]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        fill_bytes_via_u64(self, dst)
    }
}
