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

mod sealed {
    pub trait Sealed {}
}

/// Unsigned integer types accepted as counts by [`bernoulli_ratio`].
///
/// Implemented for `u8`, `u16`, `u32`, `u64` and `usize`; sealed.
pub trait Count: sealed::Sealed + Copy {
    /// Widens the count for overflow-free doubling.
    fn to_u128(self) -> u128;
}

macro_rules! impl_count {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Count for $t {
                #[inline]
                fn to_u128(self) -> u128 {
                    self as u128
                }
            }
        )*
    };
}

impl_count!(u8, u16, u32, u64, usize);

/// Returns `true` with probability `success_probability`.
///
/// Walks the binary expansion of the probability one random bit at a time,
/// so the expected cost is two bits and probabilities 0 and 1 cost none.
///
/// # Panics
///
/// In debug builds, panics if `success_probability` is not in `[0, 1]`.
///
/// # Examples
///
/// ```
/// # use bitstream_random::bitstream::WyRandBitStream;
/// # use bitstream_random::sample::bernoulli;
/// let mut stream = WyRandBitStream::new(1, 2);
/// assert!(bernoulli(1.0, &mut stream));
/// assert!(!bernoulli(0.0, &mut stream));
/// assert_eq!(stream.available_bits(), 0);
/// ```
pub fn bernoulli<S: BitSource + ?Sized>(success_probability: f64, source: &mut S) -> bool {
    debug_assert!(
        (0.0..=1.0).contains(&success_probability),
        "success probability must be in [0.0, 1.0], got {success_probability}"
    );

    let mut p = success_probability;
    loop {
        if p == 0.0 {
            return false;
        }
        if p == 1.0 {
            return true;
        }
        let upper = p > 0.5;
        if source.bit() {
            return upper;
        }
        p += p;
        if upper {
            p -= 1.0;
        }
    }
}

/// Returns `true` with probability exactly `numerator / denominator`.
///
/// Same expansion as [`bernoulli`] carried out in integer arithmetic, so no
/// rounding is involved. Numerator and denominator may use different
/// unsigned integer types, including `usize` counts.
///
/// # Panics
///
/// Panics if `denominator` is 0 or `numerator` exceeds `denominator`.
///
/// # Examples
///
/// ```
/// # use bitstream_random::bitstream::WyRandBitStream;
/// # use bitstream_random::sample::bernoulli_ratio;
/// let mut stream = WyRandBitStream::new(1, 2);
/// let hits = (0..3000).filter(|_| bernoulli_ratio(1u32, 3u64, &mut stream)).count();
/// assert!(hits > 850 && hits < 1150);
/// ```
pub fn bernoulli_ratio<N, D, S>(numerator: N, denominator: D, source: &mut S) -> bool
where
    N: Count,
    D: Count,
    S: BitSource + ?Sized,
{
    let denominator = denominator.to_u128();
    let mut numerator = numerator.to_u128();
    assert!(denominator > 0, "denominator must be greater than 0");
    assert!(
        numerator <= denominator,
        "numerator must not exceed denominator"
    );

    let half = denominator / 2;
    loop {
        if numerator == 0 {
            return false;
        }
        if numerator == denominator {
            return true;
        }
        let upper = numerator > half;
        if source.bit() {
            return upper;
        }
        numerator += numerator;
        if upper {
            numerator -= denominator;
        }
    }
}
