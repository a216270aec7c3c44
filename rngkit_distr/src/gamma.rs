// Copyright 2026 Developers of the rngkit project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Gamma and Beta distributions.

use self::BetaAlgorithm::*;
use self::GammaRepr::*;

use crate::{Distribution, Exp, Open01, StandardUniform};
use core::fmt;
use num_traits::Float;
use rngkit::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The Gamma distribution `Gamma(shape, rate)`.
///
/// The density function of this distribution is
///
/// ```text
/// f(x) =  x^(k - 1) * rate^k * exp(-rate * x) / Γ(k)
/// ```
///
/// where `Γ` is the Gamma function, `k` is the shape and both `k` and
/// `rate` are strictly positive.
///
/// Three samplers cover the shape range:
///
/// - `shape < 1`: Ahrens and Dieter's algorithm GS[^1];
/// - `shape == 1`: the exponential distribution;
/// - `shape > 1`: Cheng's algorithm GB[^2].
///
/// GS and GB are rejection loops over pairs of uniform draws.
///
/// # Example
///
/// ```
/// use rngkit::SeedableGenerator;
/// use rngkit::rngs::Xoroshiro128Plus;
/// use rngkit_distr::{Distribution, Gamma};
///
/// let gamma = Gamma::new(2.0, 0.2).unwrap();
/// let v = gamma.sample(&mut Xoroshiro128Plus::seed_from_u64(1));
/// println!("{} is from a Gamma(2, 0.2) distribution", v);
/// ```
///
/// [^1]: J. H. Ahrens and U. Dieter. 1974. "Computer methods for sampling
///       from gamma, beta, Poisson and binomial distributions."
///       *Computing* 12, 223-246.
/// [^2]: R. C. H. Cheng. 1977. "The generation of Gamma variables with
///       non-integral shape parameter." *Applied Statistics* 26, 71-75.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Gamma<F> {
    repr: GammaRepr<F>,
}

/// Error type returned from [`Gamma::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// `shape <= 0` or NaN.
    ShapeTooSmall,
    /// `rate <= 0` or NaN.
    RateTooSmall,
    /// `shape` or `rate` is infinite.
    NotFinite,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::ShapeTooSmall => "shape is not positive in gamma distribution",
            Error::RateTooSmall => "rate is not positive in gamma distribution",
            Error::NotFinite => "shape or rate is infinite in gamma distribution",
        })
    }
}

impl std::error::Error for Error {}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
enum GammaRepr<F> {
    Small(GammaSmallShape<F>),
    One(Exp<F>),
    Large(GammaLargeShape<F>),
}

/// Algorithm GS, for `shape < 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct GammaSmallShape<F> {
    shape: F,
    inv_shape: F,
    // (e + shape) / e
    b: F,
    rate: F,
}

/// Algorithm GB, for `shape > 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct GammaLargeShape<F> {
    shape: F,
    a: F,
    b: F,
    c: F,
    rate: F,
}

impl<F> Gamma<F>
where
    F: Float,
    Open01: Distribution<F>,
    StandardUniform: Distribution<F>,
{
    /// Construct an object representing the `Gamma(shape, rate)`
    /// distribution.
    #[inline]
    pub fn new(shape: F, rate: F) -> Result<Gamma<F>, Error> {
        if !(shape > F::zero()) {
            return Err(Error::ShapeTooSmall);
        }
        if !(rate > F::zero()) {
            return Err(Error::RateTooSmall);
        }
        if shape.is_infinite() || rate.is_infinite() {
            return Err(Error::NotFinite);
        }

        let repr = if shape == F::one() {
            One(Exp::new(rate).map_err(|_| Error::NotFinite)?)
        } else if shape < F::one() {
            Small(GammaSmallShape::new_raw(shape, rate))
        } else {
            Large(GammaLargeShape::new_raw(shape, rate))
        };
        Ok(Gamma { repr })
    }
}

impl<F: Float> GammaSmallShape<F> {
    fn new_raw(shape: F, rate: F) -> GammaSmallShape<F> {
        let e = F::one().exp();
        GammaSmallShape {
            shape,
            inv_shape: F::one() / shape,
            b: (e + shape) / e,
            rate,
        }
    }
}

impl<F: Float> GammaLargeShape<F> {
    fn new_raw(shape: F, rate: F) -> GammaLargeShape<F> {
        let two = F::one() + F::one();
        let four = two * two;
        let a = F::one() / (two * shape - F::one()).sqrt();
        GammaLargeShape {
            shape,
            a,
            b: shape - four.ln(),
            c: shape + F::one() / a,
            rate,
        }
    }
}

impl<F> Distribution<F> for Gamma<F>
where
    F: Float,
    Open01: Distribution<F>,
    StandardUniform: Distribution<F>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> F {
        match self.repr {
            Small(ref g) => g.sample(rng),
            One(ref g) => g.sample(rng),
            Large(ref g) => g.sample(rng),
        }
    }
}

impl<F> Distribution<F> for GammaSmallShape<F>
where
    F: Float,
    Open01: Distribution<F>,
    StandardUniform: Distribution<F>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> F {
        loop {
            let u1: F = rng.sample(Open01);
            let u2: F = rng.sample(StandardUniform);
            let p = self.b * u1;
            if p <= F::one() {
                let x = p.powf(self.inv_shape);
                if u2 <= (-x).exp() {
                    return x / self.rate;
                }
            } else {
                let x = -((self.b - p) / self.shape).ln();
                if u2 <= x.powf(self.shape - F::one()) {
                    return x / self.rate;
                }
            }
        }
    }
}

impl<F> Distribution<F> for GammaLargeShape<F>
where
    F: Float,
    Open01: Distribution<F>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> F {
        // 1 + ln(4.5)
        let d = F::from(2.504077396776274).unwrap_or_else(F::one);
        let four_and_half = F::from(4.5).unwrap_or_else(F::one);
        loop {
            let u1: F = rng.sample(Open01);
            let u2: F = rng.sample(Open01);
            let v = self.a * (u1 / (F::one() - u1)).ln();
            let x = self.shape * v.exp();
            let z = u1 * u1 * u2;
            let r = self.b + self.c * v - x;
            if r + d - four_and_half * z >= F::zero() || r >= z.ln() {
                return x / self.rate;
            }
        }
    }
}

/// The algorithm used for sampling the Beta distribution.
///
/// Reference:
///
/// R. C. H. Cheng (1978).
/// Generating beta variates with nonintegral shape parameters.
/// Communications of the ACM 21, 317-322.
/// https://doi.org/10.1145/359460.359482
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
enum BetaAlgorithm<F> {
    BB(BB<F>),
    BC(BC<F>),
}

/// Algorithm BB for `min(alpha, beta) > 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct BB<F> {
    alpha: F,
    beta: F,
    gamma: F,
}

/// Algorithm BC for `min(alpha, beta) <= 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct BC<F> {
    alpha: F,
    beta: F,
    kappa1: F,
    kappa2: F,
}

/// The Beta distribution with shape parameters `alpha` and `beta`.
///
/// Sampled with Cheng's algorithms BB (both parameters above one) and BC
/// (otherwise), both rejection loops over pairs of uniform draws.
///
/// # Example
///
/// ```
/// use rngkit::SeedableGenerator;
/// use rngkit::rngs::Xoroshiro128Plus;
/// use rngkit_distr::{Distribution, Beta};
///
/// let beta = Beta::new(2.0, 5.0).unwrap();
/// let v = beta.sample(&mut Xoroshiro128Plus::seed_from_u64(1));
/// assert!((0.0..=1.0).contains(&v));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Beta<F> {
    a: F,
    b: F,
    switched_params: bool,
    algorithm: BetaAlgorithm<F>,
}

/// Error type returned from [`Beta::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BetaError {
    /// `alpha <= 0`, infinite or NaN.
    AlphaTooSmall,
    /// `beta <= 0`, infinite or NaN.
    BetaTooSmall,
}

impl fmt::Display for BetaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BetaError::AlphaTooSmall => "alpha is not positive and finite in beta distribution",
            BetaError::BetaTooSmall => "beta is not positive and finite in beta distribution",
        })
    }
}

impl std::error::Error for BetaError {}

impl<F> Beta<F>
where
    F: Float,
    Open01: Distribution<F>,
{
    /// Construct an object representing the `Beta(alpha, beta)`
    /// distribution.
    pub fn new(alpha: F, beta: F) -> Result<Beta<F>, BetaError> {
        if !(alpha > F::zero()) || alpha.is_infinite() {
            return Err(BetaError::AlphaTooSmall);
        }
        if !(beta > F::zero()) || beta.is_infinite() {
            return Err(BetaError::BetaTooSmall);
        }
        let two = F::one() + F::one();
        let const_f = |x: f64| F::from(x).unwrap_or_else(F::zero);
        if alpha > F::one() && beta > F::one() {
            // BB works with a = min(alpha, beta)
            let (a, b, switched_params) = if alpha < beta {
                (alpha, beta, false)
            } else {
                (beta, alpha, true)
            };
            let sum = a + b;
            let beta = ((sum - two) / (two * a * b - sum)).sqrt();
            let gamma = a + F::one() / beta;
            Ok(Beta {
                a,
                b,
                switched_params,
                algorithm: BB(BB {
                    alpha: sum,
                    beta,
                    gamma,
                }),
            })
        } else {
            // BC works with a = max(alpha, beta)
            let (a, b, switched_params) = if alpha > beta {
                (alpha, beta, false)
            } else {
                (beta, alpha, true)
            };
            let sum = a + b;
            let beta = F::one() / b;
            let delta = F::one() + a - b;
            let kappa1 = delta * (const_f(1.0 / 72.0) + const_f(1.0 / 24.0) * b)
                / (a * beta - const_f(7.0 / 9.0));
            let kappa2 = const_f(0.25) + (const_f(0.5) + const_f(0.25) / delta) * b;
            Ok(Beta {
                a,
                b,
                switched_params,
                algorithm: BC(BC {
                    alpha: sum,
                    beta,
                    kappa1,
                    kappa2,
                }),
            })
        }
    }
}

impl<F> Distribution<F> for Beta<F>
where
    F: Float,
    Open01: Distribution<F>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> F {
        let const_f = |x: f64| F::from(x).unwrap_or_else(F::zero);
        let ln4 = const_f(4.0).ln();
        let mut w;
        match self.algorithm {
            BB(algo) => loop {
                let u1: F = rng.sample(Open01);
                let u2: F = rng.sample(Open01);
                let v = algo.beta * (u1 / (F::one() - u1)).ln();
                w = self.a * v.exp();
                let z = u1 * u1 * u2;
                let r = algo.gamma * v - ln4;
                let s = self.a + r - w;
                // 1 + ln(5)
                if s + const_f(2.6094379124341003) >= const_f(5.0) * z {
                    break;
                }
                let t = z.ln();
                if s >= t {
                    break;
                }
                if r + algo.alpha * (algo.alpha / (self.b + w)).ln() >= t {
                    break;
                }
            },
            BC(algo) => loop {
                let u1: F = rng.sample(Open01);
                let u2: F = rng.sample(Open01);
                let z;
                if u1 < const_f(0.5) {
                    let y = u1 * u2;
                    z = u1 * y;
                    if const_f(0.25) * u2 + z - y >= algo.kappa1 {
                        continue;
                    }
                } else {
                    z = u1 * u1 * u2;
                    if z <= const_f(0.25) {
                        let v = algo.beta * (u1 / (F::one() - u1)).ln();
                        w = self.a * v.exp();
                        break;
                    }
                    if z >= algo.kappa2 {
                        continue;
                    }
                }
                let v = algo.beta * (u1 / (F::one() - u1)).ln();
                w = self.a * v.exp();
                if algo.alpha * ((algo.alpha / (self.b + w)).ln() + v) - ln4 >= z.ln() {
                    break;
                }
            },
        };
        // an overflowing w stands for an extremely large value
        if w.is_infinite() {
            w = F::max_value();
        }
        if !self.switched_params {
            w / (self.b + w)
        } else {
            self.b / (self.b + w)
        }
    }
}
