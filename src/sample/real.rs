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

/// Bits of randomness in a uniform double: the width of the f64 significand.
const DOUBLE_BITS: u8 = 53;
const MAX_INVERSE: f64 = 1.0 / (1u64 << 53) as f64;
const MAX_INVERSE_HALF: f64 = 1.0 / (1u64 << 54) as f64;

/// Returns a uniform double from `[0, 1)` on the grid of multiples of 2^-53.
#[inline]
pub fn uniform_double<S: BitSource + ?Sized>(source: &mut S) -> f64 {
    source.bits(DOUBLE_BITS) as f64 * MAX_INVERSE
}

/// Returns a uniform double from `[0, 0.5)` on the grid of multiples of 2^-54.
#[inline]
pub fn uniform_double_half<S: BitSource + ?Sized>(source: &mut S) -> f64 {
    source.bits(DOUBLE_BITS) as f64 * MAX_INVERSE_HALF
}

/// Returns a standard exponential variate (rate 1) by inversion.
#[inline]
pub fn exponential1<S: BitSource + ?Sized>(source: &mut S) -> f64 {
    -(-uniform_double(source)).ln_1p()
}

/// Returns a gamma variate with shape 2 and rate 1.
#[inline]
pub fn gamma21<S: BitSource + ?Sized>(source: &mut S) -> f64 {
    exponential1(source) + exponential1(source)
}

/// Returns a uniform integer from `[0, 2^num_bits)`.
///
/// # Panics
///
/// Requires `1 <= num_bits <= 64`, checked in debug builds by the source.
#[inline]
pub fn uniform_pow2<S: BitSource + ?Sized>(num_bits: u8, source: &mut S) -> u64 {
    source.bits(num_bits)
}
