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

/// Returns the smallest `r` such that `v < 2^r`.
#[inline]
fn log2_base(v: u32) -> u8 {
    (u32::BITS - v.leading_zeros()) as u8
}

/// Returns a uniform integer from `[0, n)` using as few random bits as possible.
///
/// A modified version of the method described in Lumbroso, Jérémie.
/// "Optimal discrete uniform generation from coin flips, and applications."
/// arXiv:1304.1916 (2013). A first candidate of `ceil(log2(n))` bits is
/// accepted when in range; otherwise the rejected slack is recycled one bit
/// at a time instead of being thrown away.
///
/// `n = 1` returns 0 without touching the source.
///
/// # Panics
///
/// Panics if `n` is 0.
///
/// # Examples
///
/// ```
/// # use bitstream_random::bitstream::WyRandBitStream;
/// # use bitstream_random::sample::uniform_lumbroso;
/// let mut stream = WyRandBitStream::new(3, 4);
/// assert!(uniform_lumbroso(6, &mut stream) < 6);
/// assert_eq!(uniform_lumbroso(1, &mut stream), 0);
/// ```
pub fn uniform_lumbroso<S: BitSource + ?Sized>(n: u32, source: &mut S) -> u32 {
    assert!(n >= 1, "n must be at least 1");
    if n == 1 {
        return 0;
    }

    let n = n as u64;
    let l = log2_base((n - 1) as u32);
    let mut c = source.bits(l);
    if c < n {
        return c as u32;
    }

    // c is uniform on [0, v) after the shift, and stays so while v grows.
    let mut v = (1u64 << l) - n;
    c -= n;
    loop {
        v <<= 1;
        c = (c << 1) | source.bit() as u64;
        if v >= n {
            if c < n {
                return c as u32;
            }
            v -= n;
            c -= n;
        }
    }
}

/// Returns a uniform integer from `[0, n)` with a single multiplication.
///
/// Lemire, Daniel. "Fast random integer generation in an interval."
/// ACM TOMACS 29.1 (2019). Draws 32 bits per attempt, so it spends more
/// bits than [`uniform_lumbroso`] but almost never branches: an attempt is
/// rejected with probability below `n / 2^32`.
///
/// # Panics
///
/// Panics if `n` is 0.
pub fn uniform_lemire<S: BitSource + ?Sized>(n: u32, source: &mut S) -> u32 {
    assert!(n >= 1, "n must be at least 1");

    let s = n as u64;
    let mut m = source.bits(32) * s;
    let mut l = m as u32;
    if l < n {
        // 2^32 mod n
        let t = n.wrapping_neg() % n;
        while l < t {
            m = source.bits(32) * s;
            l = m as u32;
        }
    }
    (m >> 32) as u32
}
