// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Adapter from `rand` generators to [`UniformSource`].

use super::UniformSource;
use rand::distr::{Distribution, Open01};
use rand_core::RngCore;

#[cfg(feature = "std")]
use rand::rngs::{StdRng, ThreadRng};
#[cfg(feature = "std")]
use rand_core::SeedableRng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A [`UniformSource`] backed by the thread-local generator.
#[cfg(feature = "std")]
pub type ThreadSource = RngSource<ThreadRng>;

/// A [`UniformSource`] drawing from any [`RngCore`] generator.
///
/// Values are sampled from [`Open01`], so neither `0.0` nor `1.0` is ever
/// returned. This keeps `ln(u)` and `u / (1 - u)` finite inside the
/// samplers' rejection loops.
///
/// # Example
///
/// ```
/// use rand_beta::source::{RngSource, UniformSource};
/// use rand_pcg::Pcg32;
///
/// let mut source = RngSource::new(Pcg32::new(0xcafef00dd15ea5e5, 0xa02bdbf7bb3c0a7));
/// let u = source.draw();
/// assert!(u > 0.0 && u < 1.0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    /// Wrap `rng`.
    #[inline]
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }

    /// Borrow the underlying generator.
    #[inline]
    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Unwrap, returning the underlying generator.
    #[inline]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

#[cfg(feature = "std")]
impl RngSource<ThreadRng> {
    /// A source backed by the lazily-initialized thread-local generator.
    pub fn thread() -> Self {
        RngSource::new(rand::rng())
    }
}

#[cfg(feature = "std")]
impl RngSource<StdRng> {
    /// A source backed by [`StdRng`] seeded from `seed`.
    ///
    /// The output is reproducible for a given `seed` and version of `rand`,
    /// but not across versions.
    pub fn seeded(seed: u64) -> Self {
        RngSource::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> UniformSource for RngSource<R> {
    #[inline]
    fn draw(&mut self) -> f64 {
        Open01.sample(&mut self.rng)
    }
}
