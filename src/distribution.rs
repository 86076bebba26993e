// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The `Distribution` trait and bound samplers.

use crate::histogram::Histogram;
use crate::source::UniformSource;

#[cfg(feature = "std")]
use crate::source::{RngSource, ThreadSource};
#[cfg(feature = "std")]
use rand::rngs::StdRng;

/// Types (distributions) that can be used to create a random `f64` from a
/// [`UniformSource`].
///
/// A distribution is immutable once constructed; any state it needs lives in
/// the source passed to [`Distribution::draw`]. Sharing one distribution
/// between threads is therefore safe whenever each thread supplies its own
/// source, or shares one that supports it, such as [`CyclicSource`].
///
/// The remaining methods are conveniences built on `draw`.
///
/// [`CyclicSource`]: crate::source::CyclicSource
pub trait Distribution {
    /// Draw one sample, consuming as many uniform values from `source` as
    /// the sampling method requires.
    fn draw<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64;

    /// Bind this distribution to the thread-local generator, giving a
    /// zero-argument sampler.
    ///
    /// ```
    /// use rand_beta::{Beta, Distribution};
    ///
    /// let mut sampler = Beta::new(0.5, 0.5).unwrap().bind();
    /// let x = sampler.draw();
    /// assert!((0.0..=1.0).contains(&x));
    /// ```
    #[cfg(feature = "std")]
    fn bind(self) -> Bound<Self, ThreadSource>
    where
        Self: Sized,
    {
        Bound::new(self, RngSource::thread())
    }

    /// Bind this distribution to a [`StdRng`] seeded from `seed`.
    #[cfg(feature = "std")]
    fn bind_seeded(self, seed: u64) -> Bound<Self, RngSource<StdRng>>
    where
        Self: Sized,
    {
        Bound::new(self, RngSource::seeded(seed))
    }

    /// Bind this distribution to `source`.
    ///
    /// ```
    /// use rand_beta::{Beta, Distribution};
    /// use rand_beta::source::CyclicSource;
    ///
    /// let source = CyclicSource::new([0.3, 0.8]).unwrap();
    /// let mut sampler = Beta::new(1.0, 1.0).unwrap().bind_to(&source);
    /// assert_eq!(sampler.draw(), 0.3);
    /// ```
    fn bind_to<S: UniformSource>(self, source: S) -> Bound<Self, S>
    where
        Self: Sized,
    {
        Bound::new(self, source)
    }

    /// Overwrite every element of `values` with a fresh sample, in order,
    /// and return `values`.
    fn fill<'a, S: UniformSource + ?Sized>(
        &self, source: &mut S, values: &'a mut [f64],
    ) -> &'a mut [f64] {
        for v in values.iter_mut() {
            *v = self.draw(source);
        }
        values
    }

    /// Collect `len` samples into a new vector.
    fn generate<S: UniformSource + ?Sized>(&self, source: &mut S, len: usize) -> Vec<f64> {
        let mut values = vec![0.0; len];
        self.fill(source, &mut values);
        values
    }

    /// Draw `samples` values and count them in a [`Histogram`] with
    /// `buckets` divisions of the unit interval.
    ///
    /// # Panics
    ///
    /// Panics if `buckets` is zero.
    fn histogram<S: UniformSource + ?Sized>(
        &self, source: &mut S, samples: usize, buckets: u32,
    ) -> Histogram {
        let mut histogram = Histogram::new(buckets);
        for _ in 0..samples {
            histogram.record(self.draw(source));
        }
        histogram
    }
}

impl<'a, D: Distribution + ?Sized> Distribution for &'a D {
    #[inline]
    fn draw<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        D::draw(*self, source)
    }
}

/// A distribution bound to a uniform source.
///
/// Created by [`Distribution::bind`], [`Distribution::bind_seeded`] and
/// [`Distribution::bind_to`]. Each call to [`Bound::draw`] yields one
/// sample; the sampler is also an endless [`Iterator`].
///
/// ```
/// use rand_beta::{Beta, Distribution};
///
/// let samples: Vec<f64> = Beta::new(2.0, 5.0).unwrap().bind_seeded(7).take(4).collect();
/// assert_eq!(samples.len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct Bound<D, S> {
    distr: D,
    source: S,
}

impl<D: Distribution, S: UniformSource> Bound<D, S> {
    /// Bind `distr` to `source`.
    pub fn new(distr: D, source: S) -> Self {
        Bound { distr, source }
    }

    /// Draw one sample.
    #[inline]
    pub fn draw(&mut self) -> f64 {
        self.distr.draw(&mut self.source)
    }

    /// Overwrite every element of `values` with a fresh sample.
    pub fn fill<'a>(&mut self, values: &'a mut [f64]) -> &'a mut [f64] {
        self.distr.fill(&mut self.source, values)
    }

    /// The bound distribution.
    pub fn distribution(&self) -> &D {
        &self.distr
    }

    /// Unwrap into the distribution and its source.
    pub fn into_parts(self) -> (D, S) {
        (self.distr, self.source)
    }
}

impl<D: Distribution, S: UniformSource> Iterator for Bound<D, S> {
    type Item = f64;

    #[inline(always)]
    fn next(&mut self) -> Option<f64> {
        Some(self.draw())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<D: Distribution, S: UniformSource> core::iter::FusedIterator for Bound<D, S> {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::source::CyclicSource;

    /// Returns the uniform draw unchanged.
    struct Identity;

    impl Distribution for Identity {
        fn draw<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
            source.draw()
        }
    }

    #[test]
    fn test_fill_in_order() {
        let source = CyclicSource::new([0.1, 0.2, 0.3]).unwrap();
        let mut buf = [9.0; 5];
        let filled = Identity.fill(&mut &source, &mut buf);
        assert_eq!(filled, &[0.1, 0.2, 0.3, 0.1, 0.2]);
        assert_eq!(Identity.generate(&mut &source, 2), [0.3, 0.1]);
        assert!(Identity.generate(&mut &source, 0).is_empty());
    }

    #[test]
    fn test_histogram() {
        let source = CyclicSource::new([0.1, 0.12, 0.5, 0.9]).unwrap();
        let h = Identity.histogram(&mut &source, 8, 10);
        let items: Vec<(f64, u64)> = h.iter().collect();
        assert_eq!(items, [(0.1, 4), (0.5, 2), (0.9, 2)]);
        assert_eq!(h.samples(), 8);
    }

    #[test]
    fn test_bound() {
        let source = CyclicSource::new([0.25, 0.75]).unwrap();
        let mut bound = (&Identity).bind_to(&source);
        assert_eq!(bound.draw(), 0.25);
        assert_eq!(bound.next(), Some(0.75));
        let mut buf = [0.0; 3];
        bound.fill(&mut buf);
        assert_eq!(buf, [0.25, 0.75, 0.25]);
        assert_eq!(source.position(), 1);
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_bind_seeded() {
        let a: Vec<f64> = Identity.bind_seeded(42).take(8).collect();
        let b: Vec<f64> = Identity.bind_seeded(42).take(8).collect();
        assert_eq!(a, b);
        assert!(a.iter().all(|&x| x > 0.0 && x < 1.0));

        let mut sampler = Identity.bind();
        let x = sampler.draw();
        assert!(x > 0.0 && x < 1.0);
    }
}
