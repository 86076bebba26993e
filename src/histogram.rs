// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bucketed counts of samples on the unit interval.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Counts of samples, rounded to the nearest multiple of `1 / buckets`.
///
/// A sample `x` is recorded under the key `round(x * buckets) / buckets`, so
/// a histogram with `buckets == 20` over samples in `[0, 1]` has up to 21
/// keys: `0.0, 0.05, ..., 1.0`. Keys iterate in ascending order and only
/// keys which received at least one sample are present.
///
/// Usually built by [`Distribution::histogram`](crate::Distribution::histogram).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Histogram {
    buckets: u32,
    counts: BTreeMap<i64, u64>,
}

impl Histogram {
    /// An empty histogram with `buckets` divisions of the unit interval.
    ///
    /// # Panics
    ///
    /// Panics if `buckets` is zero.
    pub fn new(buckets: u32) -> Histogram {
        assert!(buckets > 0, "histogram requires at least one bucket");
        Histogram {
            buckets,
            counts: BTreeMap::new(),
        }
    }

    #[inline]
    fn index(&self, value: f64) -> i64 {
        // `as` saturates, and maps NaN to bucket zero
        (value * f64::from(self.buckets)).round() as i64
    }

    #[inline]
    fn key(&self, index: i64) -> f64 {
        index as f64 / f64::from(self.buckets)
    }

    /// Count one sample.
    pub fn record(&mut self, value: f64) {
        *self.counts.entry(self.index(value)).or_insert(0) += 1;
    }

    /// Number of divisions of the unit interval.
    #[inline]
    pub fn buckets(&self) -> u32 {
        self.buckets
    }

    /// Number of occupied buckets.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if nothing has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of recorded samples.
    pub fn samples(&self) -> u64 {
        self.counts.values().sum()
    }

    /// The count of the bucket containing `key`, if occupied.
    ///
    /// `key` is rounded the same way as a sample, so `get(0.2)` and
    /// `get(0.21)` address the same bucket when `buckets == 20`.
    pub fn get(&self, key: f64) -> Option<u64> {
        self.counts.get(&self.index(key)).copied()
    }

    /// Iterate over `(key, count)` in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, u64)> + '_ {
        self.counts.iter().map(move |(&i, &n)| (self.key(i), n))
    }

    /// Occupied keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = f64> + '_ {
        self.counts.keys().map(move |&i| self.key(i))
    }

    /// Counts in ascending key order.
    pub fn counts(&self) -> impl Iterator<Item = u64> + '_ {
        self.counts.values().copied()
    }

    /// The lowest occupied bucket.
    pub fn first(&self) -> Option<(f64, u64)> {
        self.iter().next()
    }

    /// The highest occupied bucket.
    pub fn last(&self) -> Option<(f64, u64)> {
        self.counts.iter().next_back().map(|(&i, &n)| (self.key(i), n))
    }

    /// The largest count.
    pub fn max_count(&self) -> Option<u64> {
        self.counts().max()
    }

    /// The smallest count among occupied buckets.
    pub fn min_count(&self) -> Option<u64> {
        self.counts().min()
    }

    /// The bucket with the largest count; the lowest such key on ties.
    pub fn mode(&self) -> Option<(f64, u64)> {
        self.iter()
            .fold(None, |best: Option<(f64, u64)>, (k, n)| match best {
                Some((_, m)) if m >= n => best,
                _ => Some((k, n)),
            })
    }
}

impl Extend<f64> for Histogram {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.record(value);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rounding_to_buckets() {
        let mut h = Histogram::new(20);
        h.extend([0.01, 0.024, 0.026, 0.2, 0.21, 0.19, 0.999]);
        let items: Vec<(f64, u64)> = h.iter().collect();
        assert_eq!(items, [(0.0, 2), (0.05, 1), (0.2, 3), (1.0, 1)]);
        assert_eq!(h.get(0.2), Some(3));
        assert_eq!(h.get(0.5), None);
        assert_eq!(h.samples(), 7);
        assert_eq!(h.len(), 4);
    }

    #[test]
    fn test_extremes() {
        let mut h = Histogram::new(10);
        assert!(h.is_empty());
        assert_eq!(h.mode(), None);
        assert_eq!(h.first(), None);

        h.extend([0.3, 0.3, 0.5, 0.5, 0.9]);
        assert_eq!(h.first(), Some((0.3, 2)));
        assert_eq!(h.last(), Some((0.9, 1)));
        assert_eq!(h.max_count(), Some(2));
        assert_eq!(h.min_count(), Some(1));
        assert_eq!(h.mode(), Some((0.3, 2)));
        assert_eq!(h.keys().collect::<Vec<_>>(), [0.3, 0.5, 0.9]);
        assert_eq!(h.counts().collect::<Vec<_>>(), [2, 2, 1]);
    }

    #[test]
    #[should_panic]
    fn test_zero_buckets() {
        Histogram::new(0);
    }
}
