// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A uniform source replaying a fixed sequence

use super::UniformSource;
use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};
use rand_core::{impls, RngCore};

/// A deterministic source yielding a fixed sequence of values, cyclically.
///
/// Each draw returns the value under a shared cursor and advances the cursor,
/// wrapping to the start of the sequence after the last value. The cursor is
/// atomic, so one `CyclicSource` may be shared between threads via
/// `&CyclicSource`; every draw observes a distinct cursor position.
///
/// Derived outputs (integers, booleans, Gaussians) are all defined in terms
/// of the same cyclic draw, see [`CyclicSource::next_u64`]. This makes the
/// source usable with any `rand` API through its [`RngCore`] implementation,
/// though only [`CyclicSource::next_f64`] replays the supplied values
/// verbatim.
///
/// # Example
///
/// ```
/// use rand_beta::source::CyclicSource;
///
/// let source = CyclicSource::new([0.1, 0.5, 0.9]).unwrap();
/// assert_eq!(source.next_f64(), 0.1);
/// assert_eq!(source.next_f64(), 0.5);
/// assert_eq!(source.next_f64(), 0.9);
/// assert_eq!(source.next_f64(), 0.1);
///
/// assert!(CyclicSource::new([0.5, 1.5]).is_err());
/// ```
#[derive(Debug)]
pub struct CyclicSource {
    values: Box<[f64]>,
    cursor: AtomicUsize,
}

/// Error type returned from [`CyclicSource::new`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SourceError {
    /// The sequence has no values.
    Empty,
    /// The value at `index` lies outside `[0, 1]` or is NaN.
    OutOfRange {
        /// Position of the offending value.
        index: usize,
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Empty => f.write_str("cyclic source requires at least one value"),
            SourceError::OutOfRange { index, value } => write!(
                f,
                "value {} at index {} is outside [0, 1] in cyclic source",
                value, index
            ),
        }
    }
}

impl std::error::Error for SourceError {}

impl CyclicSource {
    /// Construct a source replaying `values`.
    ///
    /// Every value must lie in the closed interval `[0, 1]`.
    pub fn new<I: IntoIterator<Item = f64>>(values: I) -> Result<CyclicSource, SourceError> {
        let values: Box<[f64]> = values.into_iter().collect();
        if values.is_empty() {
            warn!("rejecting empty cyclic source");
            return Err(SourceError::Empty);
        }
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !(**v >= 0.0 && **v <= 1.0))
        {
            warn!("rejecting cyclic source: value {} at index {}", value, index);
            return Err(SourceError::OutOfRange { index, value });
        }
        trace!("cyclic source over {} values", values.len());
        Ok(CyclicSource {
            values,
            cursor: AtomicUsize::new(0),
        })
    }

    /// The replayed sequence.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Index of the value the next draw will return.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }

    /// Rewind to the start of the sequence.
    pub fn reset(&self) {
        self.cursor.store(0, Ordering::Relaxed);
    }

    /// Seeding has no effect: the sequence is fixed at construction.
    #[inline]
    pub fn set_seed(&self, _seed: u64) {}

    fn next_index(&self) -> usize {
        let len = self.values.len();
        // The closure always returns `Some`, so `fetch_update` cannot fail.
        match self
            .cursor
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |i| Some((i + 1) % len))
        {
            Ok(i) | Err(i) => i,
        }
    }

    /// Return the next value of the sequence.
    #[inline]
    pub fn next_f64(&self) -> f64 {
        self.values[self.next_index()]
    }

    /// Return the next value of the sequence, narrowed to `f32`.
    #[inline]
    pub fn next_f32(&self) -> f32 {
        self.next_f64() as f32
    }

    /// Return the IEEE 754 bit pattern of the next value.
    #[inline]
    pub fn next_u64(&self) -> u64 {
        self.next_f64().to_bits()
    }

    /// Return the low 32 bits of [`CyclicSource::next_u64`].
    #[inline]
    pub fn next_u32(&self) -> u32 {
        self.next_u64() as u32
    }

    /// Return the low 32 bits of [`CyclicSource::next_u64`] as a signed value.
    #[inline]
    pub fn next_i32(&self) -> i32 {
        self.next_u32() as i32
    }

    /// Return `true` if the bit pattern of the next value is even.
    #[inline]
    pub fn next_bool(&self) -> bool {
        self.next_u64() % 2 == 0
    }

    /// Return `|next_i32()| mod bound`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn next_bounded(&self, bound: u32) -> u32 {
        assert!(bound > 0, "bound must be non-zero");
        self.next_i32().unsigned_abs() % bound
    }

    /// Return the next value unchanged; no Gaussian transform is applied.
    #[inline]
    pub fn next_gaussian(&self) -> f64 {
        self.next_f64()
    }
}

impl UniformSource for CyclicSource {
    #[inline]
    fn draw(&mut self) -> f64 {
        self.next_f64()
    }
}

impl<'a> UniformSource for &'a CyclicSource {
    #[inline]
    fn draw(&mut self) -> f64 {
        self.next_f64()
    }
}

impl RngCore for CyclicSource {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        CyclicSource::next_u32(self)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        CyclicSource::next_u64(self)
    }

    #[inline]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}
