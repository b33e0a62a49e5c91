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

//! Seeded sources of pseudorandom bits.
//!
//! Every sampler in this crate pulls randomness through [`BitSource`], one
//! bit or a small group of bits at a time, so that cheap decisions cost
//! only the bits they actually need.
//!
//! # Usage
//!
//! ```rust
//! use bitstream_random::bitstream::BitSource;
//! use bitstream_random::bitstream::WyRandBitStream;
//!
//! let mut stream = WyRandBitStream::new(42, 123456789);
//! let first = stream.bits(7);
//! assert!(first < 128);
//! let _coin = stream.bit();
//! ```

mod wyrand;

pub use self::wyrand::WyRandBitStream;

/// Source of pseudorandom bits for samplers.
pub trait BitSource {
    /// Returns the next `num_bits` bits, first drawn bit most significant.
    ///
    /// Implementations require `1 <= num_bits <= 64`.
    fn bits(&mut self, num_bits: u8) -> u64;

    /// Returns the next bit.
    fn bit(&mut self) -> bool {
        self.bits(1) != 0
    }
}

impl<S: BitSource + ?Sized> BitSource for &mut S {
    #[inline]
    fn bits(&mut self, num_bits: u8) -> u64 {
        (**self).bits(num_bits)
    }

    #[inline]
    fn bit(&mut self) -> bool {
        (**self).bit()
    }
}
