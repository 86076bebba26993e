// Copyright 2021 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use rand_beta::source::CyclicSource;
use rand_beta::{Algorithm, Beta, Distribution};

/// Uniform input for which every branch accepts its first candidate.
const INPUT: [f64; 8] = [0.3, 0.8, 0.65, 0.1, 0.2, 0.4, 0.9, 0.35];

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() <= 1e-12 * e.abs().max(1.0), "{:?} != {:?}", actual, expected);
    }
}

fn test_samples(alpha: f64, beta: f64, algorithm: Algorithm, expected: &[f64]) {
    let distr = Beta::new(alpha, beta).unwrap();
    assert_eq!(distr.algorithm(), algorithm);
    let source = CyclicSource::new(INPUT).unwrap();
    let samples = distr.generate(&mut &source, expected.len());
    assert_close(&samples, expected);
    // two draws per accepted candidate
    assert_eq!(source.position(), (2 * expected.len()) % INPUT.len());
}

#[test]
fn beta_joehnk_stability() {
    test_samples(0.3, 0.4, Algorithm::Joehnk, &[
        0.030608707823633455,
        0.9868814113831139,
        0.04418976421646155,
        0.9066460198650882,
    ]);
    test_samples(0.45, 0.2, Algorithm::Joehnk, &[
        0.1736785961346561,
        0.9999739542549771,
        0.7320257829437258,
        0.9934059793356032,
    ]);
}

#[test]
fn beta_atkinson_stability() {
    test_samples(0.3, 2.5, Algorithm::Atkinson, &[
        0.009382215155055388,
        0.12348448490020494,
        0.002428479963084218,
        0.43851119261760674,
    ]);
    test_samples(0.9, 0.7, Algorithm::Atkinson, &[
        0.805165627284762,
        0.4120118408806851,
        0.89082916398005,
        0.10244627033870812,
    ]);
    test_samples(1.0, 0.6, Algorithm::Atkinson, &[
        0.8655578576032851,
        0.512259378045825,
        0.9316009621329321,
        0.16104722339245803,
    ]);
}

#[test]
fn beta_cheng_stability() {
    test_samples(2.0, 5.0, Algorithm::Cheng, &[
        0.19127255473483823,
        0.36996221562384657,
        0.14479354621369314,
        0.6097758479845709,
    ]);
    test_samples(5.0, 2.0, Algorithm::Cheng, &[
        0.8087274452651617,
        0.6300377843761534,
        0.8552064537863068,
        0.3902241520154292,
    ]);
    test_samples(20.0, 30.0, Algorithm::Cheng, &[
        0.35926184362242786,
        0.43070032276262654,
        0.3343251715319796,
        0.5108561228133668,
    ]);
}

#[test]
fn rejected_candidates_consume_draws() {
    // The first pair of each input is rejected; the second pair is the
    // first pair of `INPUT`, so the result matches the first sample above.
    for &(alpha, beta, u1, u2, expected) in &[
        (0.3, 0.4, 0.5, 0.99, 0.030608707823633455),
        (0.3, 2.5, 0.3, 0.99, 0.009382215155055388),
        (2.0, 5.0, 0.05, 0.95, 0.19127255473483823),
    ] {
        let source = CyclicSource::new([u1, u2, 0.3, 0.8]).unwrap();
        let x = Beta::new(alpha, beta).unwrap().draw(&mut &source);
        assert_close(&[x], &[expected]);
        assert_eq!(source.position(), 0, "Beta({}, {})", alpha, beta);
    }
}
