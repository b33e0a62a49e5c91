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

//! Samplers that draw from a [`BitSource`](crate::bitstream::BitSource).
//!
//! All samplers are free functions over a mutable source reference except
//! [`TruncatedExponential`], which carries precomputed constants. They read
//! only as many bits as the sampled value needs:
//!
//! - reals: [`uniform_double`], [`uniform_double_half`], [`exponential1`], [`gamma21`]
//! - coins: [`bernoulli`], [`bernoulli_ratio`]
//! - bounded integers: [`uniform_lumbroso`] (fewest bits), [`uniform_lemire`]
//!   (fewest instructions), [`uniform_pow2`]
//!
//! # Usage
//!
//! ```rust
//! use bitstream_random::bitstream::WyRandBitStream;
//! use bitstream_random::sample;
//!
//! let mut stream = WyRandBitStream::new(0xC0FFEE, 123456789);
//! let u = sample::uniform_double(&mut stream);
//! assert!((0.0..1.0).contains(&u));
//! let e = sample::exponential1(&mut stream);
//! assert!(e >= 0.0);
//! let k = sample::uniform_lumbroso(10, &mut stream);
//! assert!(k < 10);
//! ```

mod bernoulli;
mod real;
mod truncated_exp;
mod uniform;

pub use self::bernoulli::Count;
pub use self::bernoulli::bernoulli;
pub use self::bernoulli::bernoulli_ratio;
pub use self::real::exponential1;
pub use self::real::gamma21;
pub use self::real::uniform_double;
pub use self::real::uniform_double_half;
pub use self::real::uniform_pow2;
pub use self::truncated_exp::TruncatedExponential;
pub use self::uniform::uniform_lemire;
pub use self::uniform::uniform_lumbroso;
