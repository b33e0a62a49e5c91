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

/// Hashes an arbitrary byte item into the 128-bit identity consumed by
/// [`WyRandBitStream::from_bytes`](crate::bitstream::WyRandBitStream::from_bytes).
///
/// The identity is MurmurHash3 x64/128 with seed 0; the run seed is applied
/// afterwards by the bit stream, so one item hash can be reused across seeds.
pub fn hash_bytes(bytes: &[u8]) -> (u64, u64) {
    mur3::murmurhash3_x64_128(bytes, 0)
}
