// Copyright 2021 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! One-sample Kolmogorov-Smirnov test against an exact CDF.

use rand_beta::source::RngSource;
use rand_beta::Distribution;

/// Number of samples drawn per test.
const N_SAMPLES: usize = 100_000;
/// Critical value of sqrt(n) * D for a false-rejection rate of about 1e-6.
const CRITICAL: f64 = 2.69;

fn rng(seed: u64) -> RngSource<rand_pcg::Pcg32> {
    const INC: u64 = 11634580027462260723;
    RngSource::new(rand_pcg::Pcg32::new(seed, INC))
}

/// Kolmogorov-Smirnov statistic of the sorted sample against `cdf`.
fn kolmogorov_smirnov(sorted: &[f64], cdf: impl Fn(f64) -> f64) -> f64 {
    let n = sorted.len() as f64;
    sorted
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let f = cdf(x);
            let below = f - i as f64 / n;
            let above = (i + 1) as f64 / n - f;
            below.max(above)
        })
        .fold(0.0, f64::max)
}

/// Draw from `dist` with a generator seeded from `seed` and check the
/// empirical distribution against `cdf`.
pub fn test_continuous<D: Distribution>(seed: u64, dist: D, cdf: impl Fn(f64) -> f64) {
    let mut source = rng(seed);
    let mut samples = dist.generate(&mut source, N_SAMPLES);
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let d = kolmogorov_smirnov(&samples, cdf);
    let critical = CRITICAL / (N_SAMPLES as f64).sqrt();
    assert!(
        d < critical,
        "KS statistic {} exceeds critical value {} (seed {})",
        d,
        critical,
        seed
    );
}
