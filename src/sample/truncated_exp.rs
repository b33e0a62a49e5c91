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

use crate::bitstream::BitSource;
use crate::error::Error;
use crate::sample::uniform_double;
use crate::sample::uniform_double_half;

/// Exponential distribution truncated to `[0, 1)`.
///
/// The density is proportional to `exp(-rate * x)` on `[0, 1)`. Rate 0 is
/// the uniform distribution. Construction precomputes the constants of a
/// rejection sampler so that drawing never evaluates more than one `expm1`
/// per attempt and usually none. Rates whose `exp(rate)` overflows are
/// sampled by inverting the CDF instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruncatedExponential {
    rate: f64,
    /// `expm1(rate) / rate`
    c1: f64,
    /// `-ln(0.5 * (1 + exp(-rate))) / rate`
    c2: f64,
    /// `-expm1(-rate) / rate`
    c3: f64,
    /// Set when the rejection constants overflow.
    invert: bool,
}

impl TruncatedExponential {
    /// Creates the distribution for the given rate.
    ///
    /// # Panics
    ///
    /// Panics if `rate` is negative, NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitstream_random::bitstream::WyRandBitStream;
    /// # use bitstream_random::sample::TruncatedExponential;
    /// let distribution = TruncatedExponential::new(2.0);
    /// let mut stream = WyRandBitStream::new(11, 12);
    /// let x = distribution.sample(&mut stream);
    /// assert!((0.0..1.0).contains(&x));
    /// ```
    pub fn new(rate: f64) -> Self {
        assert!(
            rate.is_finite() && rate >= 0.0,
            "rate must be finite and non-negative, got {rate}"
        );

        // Removable singularity at 0: the limits reduce sampling to a plain uniform draw.
        let (c1, c2, c3) = if rate != 0.0 {
            (
                rate.exp_m1() / rate,
                -((-rate).exp_m1() * 0.5).ln_1p() / rate,
                -(-rate).exp_m1() / rate,
            )
        } else {
            (1.0, 0.5, 1.0)
        };
        // The exact acceptance test compares against c1 * rate * y, up to twice expm1(rate).
        let invert = !(2.0 * rate.exp_m1()).is_finite();
        tracing::trace!(rate, c1, c2, c3, invert, "truncated exponential constants");

        TruncatedExponential {
            rate,
            c1,
            c2,
            c3,
            invert,
        }
    }

    /// Creates the distribution, rejecting rates that are negative, NaN or infinite.
    pub fn try_new(rate: f64) -> Result<Self, Error> {
        if !(rate.is_finite() && rate >= 0.0) {
            return Err(
                Error::config_invalid("rate must be finite and non-negative")
                    .with_context("rate", rate),
            );
        }
        Ok(Self::new(rate))
    }

    /// Returns the rate parameter.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Draws a value from `[0, 1)`.
    pub fn sample<S: BitSource + ?Sized>(&self, source: &mut S) -> f64 {
        if self.invert {
            // expm1(-rate) is -1 here, so the result stays below 37 / rate.
            let u = uniform_double(source);
            return -(u * (-self.rate).exp_m1()).ln_1p() / self.rate;
        }

        let x = uniform_double(source) * self.c1;
        if x < 1.0 {
            return x;
        }

        loop {
            let mut x = uniform_double(source);
            if x <= self.c2 {
                return x;
            }
            let mut y = uniform_double_half(source);
            // Reflect the upper-right corner; hit a quarter of the time.
            if y > 1.0 - x {
                x = 1.0 - x;
                y = 1.0 - y;
            }

            // Acceptance tests ordered from cheapest to exact.
            if x <= self.c3 * (1.0 - y) {
                return x;
            }
            let c1y = self.c1 * y;
            if c1y <= 1.0 - x {
                return x;
            }
            if c1y * self.rate <= (self.rate * (1.0 - x)).exp_m1() {
                return x;
            }
        }
    }
}

impl Default for TruncatedExponential {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitstream::WyRandBitStream;
    use crate::error::ErrorKind;

    #[test]
    fn test_zero_rate_is_uniform() {
        let distribution = TruncatedExponential::default();
        let mut a = WyRandBitStream::new(21, 22);
        let mut b = WyRandBitStream::new(21, 22);
        for _ in 0..1000 {
            assert_eq!(distribution.sample(&mut a), uniform_double(&mut b));
        }
    }

    #[test]
    fn test_constants_approach_zero_rate_limits() {
        let distribution = TruncatedExponential::new(1e-9);
        assert!((distribution.c1 - 1.0).abs() < 1e-6);
        assert!((distribution.c2 - 0.5).abs() < 1e-6);
        assert!((distribution.c3 - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_try_new_rejects_invalid_rates() {
        for rate in [-1.0, f64::NAN, f64::INFINITY] {
            let err = TruncatedExponential::try_new(rate).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        }
        assert_eq!(TruncatedExponential::try_new(0.5).unwrap().rate(), 0.5);
    }

    #[test]
    #[should_panic(expected = "rate must be finite and non-negative")]
    fn test_negative_rate_panics() {
        TruncatedExponential::new(-0.1);
    }

    #[test]
    #[should_panic(expected = "rate must be finite and non-negative")]
    fn test_infinite_rate_panics() {
        TruncatedExponential::new(f64::INFINITY);
    }

    #[test]
    fn test_overflowing_rates_switch_to_inversion() {
        assert!(!TruncatedExponential::new(700.0).invert);
        assert!(TruncatedExponential::new(709.5).invert);
        assert!(TruncatedExponential::new(1000.0).invert);

        let distribution = TruncatedExponential::new(1000.0);
        let mut source = WyRandBitStream::new(1, 2);
        for _ in 0..10_000 {
            let x = distribution.sample(&mut source);
            assert!((0.0..0.05).contains(&x), "{x} is too far in the tail");
        }
    }
}
