// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sources of uniform random numbers.
//!
//! Every sampler in this crate consumes randomness through the narrow
//! [`UniformSource`] trait: one `f64` per call, uniformly distributed on the
//! unit interval. Two implementations are provided:
//!
//! - [`RngSource`] adapts any generator implementing [`rand_core::RngCore`],
//!   including the thread-local generator and seeded [`rand::rngs::StdRng`].
//! - [`CyclicSource`] replays a fixed sequence of values, cyclically. It is
//!   intended for tests which need to drive a sampler down a known path.
//!
//! Implementing [`UniformSource`] for another generator requires only the
//! single [`UniformSource::draw`] method.

mod cyclic;
mod rng;

pub use self::cyclic::{CyclicSource, SourceError};
pub use self::rng::RngSource;
#[cfg(feature = "std")]
pub use self::rng::ThreadSource;

/// A source of independent uniform draws on the unit interval.
///
/// Implementations should return values in `[0, 1)` or `(0, 1)`. Samplers
/// take logarithms and ratios of these values; behaviour for draws outside
/// the unit interval is unspecified (the result may be NaN or a sampling
/// loop may fail to terminate). This precondition is not checked per draw.
pub trait UniformSource {
    /// Return the next uniform value.
    fn draw(&mut self) -> f64;
}

impl<'a, S: UniformSource + ?Sized> UniformSource for &'a mut S {
    #[inline(always)]
    fn draw(&mut self) -> f64 {
        S::draw(self)
    }
}

impl<S: UniformSource + ?Sized> UniformSource for Box<S> {
    #[inline(always)]
    fn draw(&mut self) -> f64 {
        S::draw(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Constant(f64);

    impl UniformSource for Constant {
        fn draw(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_forwarding_impls() {
        let mut c = Constant(0.25);
        let mut by_ref = &mut c;
        assert_eq!(UniformSource::draw(&mut by_ref), 0.25);

        let mut boxed: Box<dyn UniformSource> = Box::new(Constant(0.75));
        assert_eq!(boxed.draw(), 0.75);
    }
}
