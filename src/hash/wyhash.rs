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

// 64-bit constants from wyhash.
const P0: u64 = 0xA0761D6478BD642F;
const P1: u64 = 0xE7037ED1A0B428DB;
const P2: u64 = 0x8EBC6AF09C88C6E3;

/// Width in bytes of the identity pair hashed by [`wyhash_pair`].
const PAIR_LEN: u64 = 16;

/// Multiplies `a` and `b` into 128 bits and folds the halves together.
#[inline]
fn mum(a: u64, b: u64) -> u64 {
    let r = (a as u128).wrapping_mul(b as u128);
    ((r >> 64) as u64) ^ (r as u64)
}

/// Mixes a single 64-bit value with a seed.
///
/// This is the `wyhash64` mixer: two rounds of multiply-fold over the
/// inputs whitened with distinct constants.
#[inline]
pub fn wyhash64(value: u64, seed: u64) -> u64 {
    mum(mum(value ^ P0, seed ^ P1), P2)
}

/// Mixes a pair of 64-bit values with a seed.
///
/// Equivalent to hashing the 16-byte little-endian encoding of
/// `(value1, value2)` with a single-block wyhash round, so the length is
/// folded into the final mix.
#[inline]
pub fn wyhash_pair(value1: u64, value2: u64, seed: u64) -> u64 {
    let seed = seed ^ P0;
    mum(P1 ^ PAIR_LEN, mum(value1 ^ P1, value2 ^ seed) ^ seed)
}

/// Advances `state` by one wyrand step and returns 64 fresh bits.
#[inline]
pub fn wyrand(state: &mut u64) -> u64 {
    *state = state.wrapping_add(P0);
    mum(*state ^ P1, *state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wyhash64_vectors() {
        assert_eq!(wyhash64(0, 0), 0xA5506FF52926AC13);
        assert_eq!(wyhash64(42, 123456789), 0xF0AE4B147484A9C6);
    }

    #[test]
    fn test_wyhash_pair_vectors() {
        assert_eq!(wyhash_pair(0, 0, 0), 0x9B6DF0700435A0D4);
        assert_eq!(wyhash_pair(1, 2, 3), 0xD1D590518DD631B6);
    }

    #[test]
    fn test_pair_is_order_sensitive() {
        assert_ne!(wyhash_pair(1, 2, 3), wyhash_pair(2, 1, 3));
    }

    #[test]
    fn test_wyrand_sequence() {
        let mut state = 0;
        assert_eq!(wyrand(&mut state), 0x111CB3A78F59A58E);
        assert_eq!(wyrand(&mut state), 0xCEABD938FF4E856D);
        assert_eq!(state, 0x40EC3AC8F17AC85E);
    }
}
