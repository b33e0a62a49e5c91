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
use crate::hash::hash_bytes;
use crate::hash::wyhash_pair;
use crate::hash::wyhash64;
use crate::hash::wyrand;

const BUFFER_BITS: u32 = u64::BITS;

/// Bit stream backed by the wyrand generator.
///
/// The stream keeps one 64-bit word of generator output and hands it out
/// most significant bit first, refilling only when a request cannot be
/// served from the bits left over by earlier calls. Two streams built from
/// the same identity and seed produce identical bits on every platform.
///
/// The type is deliberately neither `Clone` nor `Copy`: duplicating a
/// stream would silently duplicate its random sequence.
///
/// # Panics
///
/// [`bits`](BitSource::bits) requires `1 <= num_bits <= 64`; this is only
/// checked in debug builds.
#[derive(Debug)]
pub struct WyRandBitStream {
    /// Generator state, advanced once per refill.
    state: u64,
    /// Unconsumed bits in the low `available` positions; all higher bits are zero.
    buffer: u64,
    /// Always in `[0, 63]` between calls.
    available: u32,
}

impl WyRandBitStream {
    /// Creates a stream for a single 64-bit item identity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitstream_random::bitstream::BitSource;
    /// # use bitstream_random::bitstream::WyRandBitStream;
    /// let mut a = WyRandBitStream::new(7, 99);
    /// let mut b = WyRandBitStream::new(7, 99);
    /// assert_eq!(a.bits(64), b.bits(64));
    /// ```
    pub fn new(value: u64, seed: u64) -> Self {
        Self::from_state(wyhash64(value, seed))
    }

    /// Creates a stream for an item identified by two 64-bit values.
    pub fn with_pair(value1: u64, value2: u64, seed: u64) -> Self {
        Self::from_state(wyhash_pair(value1, value2, seed))
    }

    /// Creates a stream for an arbitrary byte item, such as a k-mer.
    ///
    /// The bytes are first reduced to a 128-bit identity with
    /// [`hash_bytes`], then seeded like [`with_pair`](Self::with_pair).
    pub fn from_bytes(bytes: &[u8], seed: u64) -> Self {
        let (h1, h2) = hash_bytes(bytes);
        Self::with_pair(h1, h2, seed)
    }

    fn from_state(state: u64) -> Self {
        WyRandBitStream {
            state,
            buffer: 0,
            available: 0,
        }
    }

    /// Returns how many already generated bits are waiting in the buffer.
    pub fn available_bits(&self) -> u32 {
        self.available
    }

    #[inline]
    fn refill(&mut self) {
        self.buffer = wyrand(&mut self.state);
        self.available = BUFFER_BITS;
    }

    /// Keeps only the low `remaining` bits of the buffer; `remaining < 64`.
    #[inline]
    fn retain(&mut self, remaining: u32) {
        self.buffer &= (1u64 << remaining) - 1;
        self.available = remaining;
    }
}

impl BitSource for WyRandBitStream {
    #[inline]
    fn bits(&mut self, num_bits: u8) -> u64 {
        debug_assert!(
            (1..=64).contains(&num_bits),
            "num_bits must be in [1, 64], got {num_bits}"
        );
        debug_assert!(self.available < BUFFER_BITS);

        let num_bits = num_bits as u32;
        if num_bits <= self.available {
            let remaining = self.available - num_bits;
            let result = self.buffer >> remaining;
            self.retain(remaining);
            return result;
        }

        // Leftover bits become the high part of the result.
        let missing = num_bits - self.available;
        let high = self.buffer.checked_shl(missing).unwrap_or(0);
        self.refill();
        let remaining = BUFFER_BITS - missing;
        let low = self.buffer >> remaining;
        self.retain(remaining);
        high | low
    }

    #[inline]
    fn bit(&mut self) -> bool {
        debug_assert!(self.available < BUFFER_BITS);
        if self.available == 0 {
            self.refill();
        }
        let remaining = self.available - 1;
        let result = (self.buffer >> remaining) != 0;
        self.retain(remaining);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_words() {
        let mut stream = WyRandBitStream::new(42, 123456789);
        assert_eq!(stream.bits(64), 0x35AA91E28DAF9E32);
        assert_eq!(stream.bits(64), 0xF6294626835102BD);
        assert_eq!(stream.available_bits(), 0);
    }

    #[test]
    fn test_small_chunks_track_buffer() {
        let mut stream = WyRandBitStream::new(42, 123456789);
        let chunks: Vec<u64> = (0..5).map(|_| stream.bits(7)).collect();
        assert_eq!(chunks, vec![26, 106, 82, 30, 20]);
        assert_eq!(stream.available_bits(), 29);
    }

    #[test]
    fn test_pair_constructor() {
        let mut stream = WyRandBitStream::with_pair(7, 11, 123456789);
        assert_eq!(stream.bits(64), 0xBB18AC113E0ABB1E);
    }

    #[test]
    fn test_request_spanning_refill() {
        let mut whole = WyRandBitStream::new(42, 123456789);
        let first = whole.bits(64);
        let second = whole.bits(64);

        let mut split = WyRandBitStream::new(42, 123456789);
        assert_eq!(split.bits(60), first >> 4);
        // 4 old bits on top, 36 new bits below
        let spanning = split.bits(40);
        assert_eq!(spanning, ((first & 0xF) << 36) | (second >> 28));
        assert_eq!(split.available_bits(), 28);
    }

    #[test]
    fn test_bit_never_leaves_full_buffer() {
        let mut stream = WyRandBitStream::new(1, 2);
        for _ in 0..200 {
            stream.bit();
            assert!(stream.available_bits() < 64);
        }
    }
}
