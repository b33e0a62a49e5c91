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

//! Reusable streaming permutations.
//!
//! [`PermutationStream`] emits a uniformly random permutation of `[0, size)`
//! one element at a time with an incremental Fisher-Yates shuffle. Starting
//! a new permutation costs O(1): slots written in earlier rounds are
//! invalidated by bumping a version counter rather than by clearing the
//! storage, so the early-stopping loops of sketching algorithms pay only for
//! the elements they actually consume.
//!
//! # Usage
//!
//! ```rust
//! use bitstream_random::bitstream::WyRandBitStream;
//! use bitstream_random::permutation::PermutationStream;
//!
//! let mut permutation = PermutationStream::new(10);
//! for item in 0..3u64 {
//!     let mut stream = WyRandBitStream::new(item, 123456789);
//!     permutation.reset();
//!     let mut drawn: Vec<u32> = permutation.iter(&mut stream).collect();
//!     drawn.sort_unstable();
//!     assert_eq!(drawn, (0..10).collect::<Vec<_>>());
//! }
//! ```

mod stream;

pub use self::stream::Permutation;
pub use self::stream::PermutationStream;
