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

use bitstream_random::bitstream::WyRandBitStream;
use bitstream_random::hash::DEFAULT_SEED;
use bitstream_random::permutation::PermutationStream;
use bitstream_random::sample::uniform_lemire;
use bitstream_random::sample::uniform_lumbroso;
use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;

const DRAWS: u32 = 10_000;

fn bench_bounded(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounded");

    for &n in &[3u32, 1000, (1 << 31) + 1] {
        group.bench_function(format!("lumbroso_n{n}"), |b| {
            let mut stream = WyRandBitStream::new(1, DEFAULT_SEED);
            b.iter(|| {
                for _ in 0..DRAWS {
                    black_box(uniform_lumbroso(black_box(n), &mut stream));
                }
            })
        });

        group.bench_function(format!("lemire_n{n}"), |b| {
            let mut stream = WyRandBitStream::new(1, DEFAULT_SEED);
            b.iter(|| {
                for _ in 0..DRAWS {
                    black_box(uniform_lemire(black_box(n), &mut stream));
                }
            })
        });
    }
    group.finish();
}

fn bench_permutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("permutation");

    // Sketches typically stop after a few elements of a large permutation.
    for &(size, taken) in &[(1024u32, 8u32), (1024, 1024)] {
        group.bench_function(format!("size{size}_take{taken}"), |b| {
            let mut permutation = PermutationStream::new(size);
            let mut item = 0u64;
            b.iter(|| {
                item += 1;
                let mut stream = WyRandBitStream::new(item, DEFAULT_SEED);
                permutation.reset();
                for _ in 0..taken {
                    black_box(permutation.next(&mut stream));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_bounded, bench_permutation);
criterion_main!(benches);
