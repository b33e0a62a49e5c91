// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Goodness-of-fit helpers shared by the statistical tests.
//!
//! Every statistical test runs on fixed seeds, so these checks are
//! deterministic; the thresholds sit far in the tails so that a failure
//! points at a real defect rather than bad luck.

#![allow(dead_code)]

/// Run seed used by the statistical tests.
pub const TEST_SEED: u64 = 0x5EED_B175;

/// Pearson chi-square statistic of `histogram` against a uniform expectation.
pub fn chi_square_uniform(histogram: &[u64]) -> f64 {
    let total: u64 = histogram.iter().sum();
    let expected = total as f64 / histogram.len() as f64;
    histogram
        .iter()
        .map(|&observed| {
            let d = observed as f64 - expected;
            d * d / expected
        })
        .sum()
}

/// Chi-square statistic comparing two histograms over the same bins.
pub fn chi_square_two_sample(a: &[u64], b: &[u64]) -> f64 {
    assert_eq!(a.len(), b.len(), "histograms must have the same bins");
    let total_a: u64 = a.iter().sum();
    let total_b: u64 = b.iter().sum();
    let ka = (total_b as f64 / total_a as f64).sqrt();
    let kb = (total_a as f64 / total_b as f64).sqrt();
    a.iter()
        .zip(b)
        .filter(|(x, y)| **x + **y > 0)
        .map(|(&x, &y)| {
            let d = ka * x as f64 - kb * y as f64;
            d * d / (x + y) as f64
        })
        .sum()
}

/// Upper acceptance bound for a chi-square statistic with `bins - 1`
/// degrees of freedom: the mean plus five standard deviations.
pub fn chi_square_bound(bins: usize) -> f64 {
    let df = (bins - 1) as f64;
    df + 5.0 * (2.0 * df).sqrt()
}

/// Kolmogorov-Smirnov statistic scaled by `sqrt(n)`.
pub fn ks_scaled(samples: &mut [f64], cdf: impl Fn(f64) -> f64) -> f64 {
    samples.sort_by(|a, b| a.total_cmp(b));
    let n = samples.len() as f64;
    let d = samples
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let f = cdf(x);
            let above = (i + 1) as f64 / n - f;
            let below = f - i as f64 / n;
            above.max(below)
        })
        .fold(0.0, f64::max);
    d * n.sqrt()
}

/// Scaled KS bound; the asymptotic p-value at this distance is below 1e-4.
pub const KS_BOUND: f64 = 2.3;

/// Standard score of `successes` out of `trials` for success probability `p`.
pub fn binomial_z(successes: u64, trials: u64, p: f64) -> f64 {
    let n = trials as f64;
    (successes as f64 - n * p) / (n * p * (1.0 - p)).sqrt()
}

/// CDF of the exponential distribution with `rate`, truncated to `[0, 1)`.
pub fn truncated_exponential_cdf(rate: f64, x: f64) -> f64 {
    if rate > 0.0 {
        (-x * rate).exp_m1() / (-rate).exp_m1()
    } else {
        x
    }
}
