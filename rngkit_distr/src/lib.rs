// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![allow(clippy::excessive_precision, clippy::float_cmp, clippy::unreadable_literal)]
#![allow(clippy::neg_cmp_op_on_partial_ord)]

//! Generating random samples from probability distributions.
//!
//! Every distribution here is a descriptor: a small value holding validated
//! parameters, built by a fallible constructor and sampled through
//! [`Distribution::sample`] with an explicitly passed generator.
//!
//! ## Re-exports
//!
//! The [`Distribution`] trait, [`StandardUniform`], [`Uniform`], [`Open01`],
//! [`Closed01`] and [`Bernoulli`] are re-exported from [`rngkit::distr`].
//!
//! ## Distributions
//!
//! - Related to real-valued quantities that grow linearly:
//!   - [`Normal`] distribution, and [`StandardNormal`] as a primitive
//! - Related to positive real-valued quantities that grow exponentially:
//!   - [`LogNormal`] distribution
//! - Related to the occurrence of independent events at a given rate:
//!   - [`Exp`]onential distribution, and [`Exp1`] as a primitive
//!   - [`Pareto`] distribution
//!   - [`Weibull`] distribution
//!   - [`Poisson`] distribution
//! - Related to Bernoulli trials (yes/no events, with a given probability):
//!   - [`Binomial`] distribution
//!   - [`Geometric`] distribution
//! - Gamma and derived distributions:
//!   - [`Gamma`] distribution
//!   - [`Beta`] distribution
//!
//! The gamma and beta samplers are rejection loops. Their expected number
//! of iterations is small, but no hard bound exists.
//!
//! ```
//! use rngkit::SeedableGenerator;
//! use rngkit::rngs::Xoroshiro128Plus;
//! use rngkit_distr::{Distribution, Normal, Poisson};
//!
//! let mut rng = Xoroshiro128Plus::seed_from_u64(10);
//! let height = Normal::new(170.0, 8.0).unwrap().sample(&mut rng);
//! let arrivals = Poisson::new(3.5).unwrap().sample(&mut rng);
//! println!("{height:.1} cm, {arrivals} arrivals");
//! ```

pub use rngkit::distr::{
    uniform, Bernoulli, BernoulliError, Closed01, DistIter, Distribution, Open01, StandardUniform,
    Uniform,
};

pub use self::binomial::{Binomial, Error as BinomialError};
pub use self::exponential::{Error as ExpError, Exp, Exp1};
pub use self::gamma::{Beta, BetaError, Error as GammaError, Gamma};
pub use self::geometric::{Error as GeometricError, Geometric};
pub use self::normal::{clear_normal_cache, Error as NormalError, LogNormal, Normal, StandardNormal};
pub use self::pareto::{Error as ParetoError, Pareto};
pub use self::poisson::{Error as PoissonError, Poisson};
pub use self::weibull::{Error as WeibullError, Weibull};

mod binomial;
mod exponential;
mod gamma;
mod geometric;
mod normal;
mod pareto;
mod poisson;
mod weibull;

#[cfg(test)]
mod test {
    use rngkit::rngs::Xoroshiro128Plus;
    use rngkit::SeedableGenerator;

    /// Construct a deterministic generator with the given seed
    pub fn rng(seed: u64) -> Xoroshiro128Plus {
        Xoroshiro128Plus::seed_from_u64(seed)
    }
}
