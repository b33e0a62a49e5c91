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

//! Bit-budgeted pseudorandom sampling for probabilistic sketches.
//!
//! Weighted similarity sketches such as ProbMinHash need one or more
//! independent random streams for every element of every input set, and
//! generating random bits dominates their cost. This crate provides a
//! seeded bit stream that hands out randomness one bit at a time, plus
//! samplers built to consume as few of those bits as possible:
//!
//! - [`bitstream`]: the [`BitSource`](bitstream::BitSource) trait and the
//!   deterministic [`WyRandBitStream`](bitstream::WyRandBitStream).
//! - [`sample`]: uniform reals, exponential and gamma variates, exact
//!   Bernoulli coins, bounded integers, and the truncated exponential.
//! - [`permutation`]: a reusable, lazily reset Fisher-Yates stream.
//! - [`hash`]: the mixing functions that define the seed contract.
//!
//! A stream seeded with the same item identity and run seed yields the same
//! bits on every platform, which makes signatures reproducible.
//!
//! # Usage
//!
//! ```rust
//! use bitstream_random::bitstream::WyRandBitStream;
//! use bitstream_random::hash::DEFAULT_SEED;
//! use bitstream_random::sample;
//!
//! let weight = 2.5;
//! let mut stream = WyRandBitStream::from_bytes(b"ACGTTGCA", DEFAULT_SEED);
//! let first_point = sample::exponential1(&mut stream) / weight;
//! assert!(first_point >= 0.0);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod bitstream;
pub mod error;
pub mod hash;
pub mod permutation;
pub mod sample;
