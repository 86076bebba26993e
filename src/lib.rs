// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![doc(
    html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128-blk.png",
    html_favicon_url = "https://www.rust-lang.org/favicon.ico"
)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![allow(clippy::excessive_precision, clippy::float_cmp, clippy::unreadable_literal)]
#![allow(clippy::neg_cmp_op_on_partial_ord)] // suggested fix too verbose

//! Generating random samples from the Beta distribution.
//!
//! The [`Beta`] distribution picks one of three classical samplers when it
//! is constructed (Joehnk's method, Cheng's algorithm BB or Atkinson's
//! switching method) and precomputes that sampler's constants. Each draw
//! then runs the chosen rejection loop against a [`UniformSource`].
//!
//! ## Sources
//!
//! Samplers are decoupled from the generator feeding them through the
//! [`UniformSource`] trait. [`source::RngSource`] adapts any `rand`
//! generator; [`source::CyclicSource`] replays a fixed sequence for
//! reproducible tests.
//!
//! ## Drawing samples
//!
//! ```
//! use rand_beta::{Beta, Distribution};
//! use rand_beta::source::RngSource;
//!
//! let beta = Beta::new(2.0, 5.0).unwrap();
//!
//! // one sample from an explicit source
//! let mut source = RngSource::seeded(1);
//! let x = beta.draw(&mut source);
//!
//! // a zero-argument sampler over the thread-local generator
//! let mut sampler = beta.bind();
//! let y = sampler.draw();
//!
//! // bulk helpers
//! let mut buf = [0.0; 16];
//! beta.fill(&mut source, &mut buf);
//! let histogram = beta.histogram(&mut source, 1000, 20);
//! # let _ = (x, y, histogram);
//! ```
//!
//! [`Beta`] also implements [`rand::distr::Distribution<f64>`], so it can be
//! used directly with `rand`'s `Rng::sample` and `sample_iter`.
//!
//! ## Crate features
//!
//! - `std` (default): the thread-local and seeded sources
//!   ([`source::RngSource::thread`], [`source::RngSource::seeded`]) and the
//!   [`Distribution::bind`] and [`Distribution::bind_seeded`] helpers.
//! - `serde`: `Serialize`/`Deserialize` for [`Beta`], [`Algorithm`],
//!   [`Histogram`] and [`source::RngSource`].
//! - `log`: report algorithm selection and rejected parameters through the
//!   `log` crate.

#[macro_use]
mod log_macros;

mod beta;
mod distribution;
mod histogram;
pub mod source;

pub use crate::beta::{Algorithm, Beta, BetaError};
pub use crate::distribution::{Bound, Distribution};
pub use crate::histogram::Histogram;
pub use crate::source::UniformSource;

/// Construct the `Beta(alpha, beta)` distribution.
///
/// Shorthand for [`Beta::new`].
#[inline]
pub fn beta(alpha: f64, beta: f64) -> Result<Beta, BetaError> {
    Beta::new(alpha, beta)
}
