// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Beta distribution.

use crate::source::{RngSource, UniformSource};
use crate::Distribution;
use core::fmt;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `ln(4)`, as used by Cheng's algorithm BB.
const LN_4: f64 = 1.38629436112;
/// `1 + ln(5)`, the squeeze constant of Cheng's algorithm BB.
const ONE_PLUS_LN_5: f64 = 2.609438;

/// The Beta distribution with shape parameters `alpha` and `beta`.
///
/// The density function of this distribution is
///
/// ```text
/// f(x) = x^(α - 1) * (1 - x)^(β - 1) / B(α, β)
/// ```
///
/// on `0 < x < 1`, where `B` is the Beta function and both shape
/// parameters are strictly positive.
///
/// One of three algorithms is selected at construction, depending on the
/// parameters (see [`Algorithm`]):
///
/// - Joehnk's method[^1] if both `alpha < 0.5` and `beta < 0.5`;
/// - Cheng's algorithm BB[^2] if both `alpha > 1` and `beta > 1`;
/// - Atkinson's switching method[^3], as described by Dagpunar[^4],
///   otherwise.
///
/// All three are rejection samplers: a single sample consumes at least two
/// uniform draws and, with small probability, many more. There is no
/// iteration cap; with a well-behaved [`UniformSource`] the loops terminate
/// with probability one.
///
/// Samples lie in `[0, 1]`. For moderate parameters they lie strictly inside
/// the open interval; parameters producing probability mass within an ulp of
/// an endpoint may round onto it.
///
/// # Example
///
/// ```
/// use rand_beta::{Beta, Distribution};
/// use rand_beta::source::RngSource;
///
/// let beta = Beta::new(2.0, 5.0).unwrap();
/// let v = beta.draw(&mut RngSource::thread());
/// println!("{} is from a Beta(2, 5) distribution", v);
/// ```
///
/// [^1]: M. D. Joehnk. 1964. "Erzeugung von betaverteilten und
///       gammaverteilten Zufallszahlen" *Metrika* 8, 5-15.
/// [^2]: R. C. H. Cheng. 1978. "Generating Beta Variates with Nonintegral
///       Shape Parameters" *Communications of the ACM* 21, 317-322.
/// [^3]: A. C. Atkinson. 1979. "A family of switching algorithms for the
///       computer generation of beta random variables" *Biometrika* 66,
///       141-145.
/// [^4]: J. Dagpunar. 1988. *Principles of Random Variate Generation*.
///       Oxford University Press.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Beta {
    alpha: f64,
    beta: f64,
    min: f64,
    max: f64,
    sum: f64,
    /// `alpha` is the smaller shape (or the shapes are equal).
    alpha_is_min: bool,
    repr: BetaRepr,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
enum BetaRepr {
    Joehnk,
    Cheng {
        lambda: f64,
        c: f64,
    },
    Atkinson {
        /// Switch point between the two envelope pieces.
        t: f64,
        /// Probability of sampling from the left piece.
        r: f64,
        /// Normaliser of `1 - w` in the left acceptance test: `1` when
        /// `max >= 1`, else `1 - t`.
        tail: f64,
    },
}

/// The sampling method chosen by [`Beta::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    /// Joehnk's method, used when `max(alpha, beta) < 0.5`.
    Joehnk,
    /// Cheng's algorithm BB, used when `min(alpha, beta) > 1`.
    Cheng,
    /// Atkinson's switching method, used for all other parameters.
    Atkinson,
}

/// Error type returned from [`Beta::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BetaError {
    /// `alpha <= 0` or `nan`.
    AlphaTooSmall,
    /// `beta <= 0` or `nan`.
    BetaTooSmall,
    /// `alpha` is infinite.
    AlphaTooLarge,
    /// `beta` is infinite.
    BetaTooLarge,
}

impl fmt::Display for BetaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BetaError::AlphaTooSmall => "alpha is not positive in beta distribution",
            BetaError::BetaTooSmall => "beta is not positive in beta distribution",
            BetaError::AlphaTooLarge => "alpha is infinite in beta distribution",
            BetaError::BetaTooLarge => "beta is infinite in beta distribution",
        })
    }
}

impl std::error::Error for BetaError {}

/// `exponent * ln(ratio)`, taken as zero when `exponent` is zero.
///
/// A shape of exactly one contributes a constant factor to the density; the
/// log of its ratio may be infinite and `0 * inf` must not poison the test.
#[inline]
fn log_weight(exponent: f64, ratio: f64) -> f64 {
    if exponent == 0.0 {
        0.0
    } else {
        exponent * ratio.ln()
    }
}

impl Beta {
    /// Construct an object representing the `Beta(alpha, beta)`
    /// distribution.
    ///
    /// Both parameters must be strictly positive and finite.
    pub fn new(alpha: f64, beta: f64) -> Result<Beta, BetaError> {
        if !(alpha > 0.0) {
            warn!("rejecting beta distribution: alpha = {}", alpha);
            return Err(BetaError::AlphaTooSmall);
        }
        if !(beta > 0.0) {
            warn!("rejecting beta distribution: beta = {}", beta);
            return Err(BetaError::BetaTooSmall);
        }
        if alpha.is_infinite() {
            warn!("rejecting beta distribution: alpha is infinite");
            return Err(BetaError::AlphaTooLarge);
        }
        if beta.is_infinite() {
            warn!("rejecting beta distribution: beta is infinite");
            return Err(BetaError::BetaTooLarge);
        }

        let min = alpha.min(beta);
        let max = alpha.max(beta);
        let sum = alpha + beta;

        let repr = if max < 0.5 {
            BetaRepr::Joehnk
        } else if min > 1.0 {
            let lambda = ((sum - 2.0) / (2.0 * alpha * beta - sum)).sqrt();
            BetaRepr::Cheng {
                lambda,
                c: min + 1.0 / lambda,
            }
        } else {
            let (t, r) = if max > 1.0 {
                let t = (1.0 - min) / (1.0 + max - min);
                (t, max * t / (max * t + min * (1.0 - t).powf(max)))
            } else if min == 1.0 {
                (0.5, 0.5)
            } else {
                let t = 1.0 / (1.0 + (max * (1.0 - max) / (min * (1.0 - min))).sqrt());
                (t, max * t / (max * t + min * (1.0 - t)))
            };
            let tail = if max >= 1.0 { 1.0 } else { 1.0 - t };
            BetaRepr::Atkinson { t, r, tail }
        };

        let distr = Beta {
            alpha,
            beta,
            min,
            max,
            sum,
            alpha_is_min: alpha == min,
            repr,
        };
        debug!(
            "Beta({}, {}): using {:?} ({:?})",
            alpha, beta, distr.algorithm(), repr
        );
        Ok(distr)
    }

    /// The first shape parameter.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The second shape parameter.
    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// The mean, `alpha / (alpha + beta)`.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.alpha / self.sum
    }

    /// The sampling method selected for these parameters.
    pub fn algorithm(&self) -> Algorithm {
        match self.repr {
            BetaRepr::Joehnk => Algorithm::Joehnk,
            BetaRepr::Cheng { .. } => Algorithm::Cheng,
            BetaRepr::Atkinson { .. } => Algorithm::Atkinson,
        }
    }

    fn draw_joehnk<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        loop {
            let u1 = source.draw();
            let u2 = source.draw();
            let log_v = u1.ln() / self.alpha;
            let log_w = u2.ln() / self.beta;
            // ln(v + w) without leaving log space
            let log_sum = if log_v > log_w {
                log_v + (1.0 + (log_w - log_v).exp()).ln()
            } else {
                log_w + (1.0 + (log_v - log_w).exp()).ln()
            };
            if log_sum <= 0.0 {
                debug_assert!(log_v <= log_sum);
                return (log_v - log_sum).exp();
            }
        }
    }

    fn draw_cheng<S: UniformSource + ?Sized>(&self, source: &mut S, lambda: f64, c: f64) -> f64 {
        let (min, max, sum) = (self.min, self.max, self.sum);
        loop {
            let u1 = source.draw();
            let u2 = source.draw();
            let v = lambda * (u1 / (1.0 - u1)).ln();
            let mut w = min * v.exp();
            if w == f64::INFINITY {
                w = f64::MAX;
            }
            let z = u1 * u1 * u2;
            let r = c * v - LN_4;
            let s = min + r - w;
            // Accept on the cheap squeeze, else on the full test.
            if s + ONE_PLUS_LN_5 >= 5.0 * z || r + sum * (sum / (max + w)).ln() >= z.ln() {
                // w / (max + w) is Beta(min, max)
                let numerator = if self.alpha_is_min { w } else { max };
                return numerator / (max + w);
            }
        }
    }

    fn draw_atkinson<S: UniformSource + ?Sized>(
        &self, source: &mut S, t: f64, r: f64, tail: f64,
    ) -> f64 {
        let (min, max) = (self.min, self.max);
        let w = loop {
            let u1 = source.draw();
            let u2 = source.draw();
            if u1 < r {
                let w = t * (u1 / r).powf(1.0 / min);
                if u2.ln() < log_weight(max - 1.0, (1.0 - w) / tail) {
                    break w;
                }
            } else {
                let w = 1.0 - (1.0 - t) * ((1.0 - u1) / (1.0 - r)).powf(1.0 / max);
                if u2.ln() < log_weight(min - 1.0, w / t) {
                    break w;
                }
            }
        };
        if self.alpha_is_min {
            w
        } else {
            1.0 - w
        }
    }
}

impl Distribution for Beta {
    fn draw<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        match self.repr {
            BetaRepr::Joehnk => self.draw_joehnk(source),
            BetaRepr::Cheng { lambda, c } => self.draw_cheng(source, lambda, c),
            BetaRepr::Atkinson { t, r, tail } => self.draw_atkinson(source, t, r, tail),
        }
    }
}

impl rand::distr::Distribution<f64> for Beta {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        Distribution::draw(self, &mut RngSource::new(rng))
    }
}
