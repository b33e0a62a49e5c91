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
use crate::error::Error;
use crate::sample::uniform_lumbroso;

/// One position of the shuffle state.
///
/// The stored value is only meaningful when `version` matches the stream's
/// current version; otherwise the position still holds its own index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Slot {
    value: u32,
    version: u32,
}

/// Lazily shuffled permutation of `[0, size)`, reusable without reallocation.
///
/// Call [`reset`](Self::reset) before every permutation, then draw with
/// [`next`](Self::next) while [`has_next`](Self::has_next) holds.
#[derive(Debug)]
pub struct PermutationStream {
    size: u32,
    /// Number of elements emitted from the current permutation.
    idx: u32,
    /// 0 until the first reset.
    version: u32,
    slots: Vec<Slot>,
}

impl PermutationStream {
    /// Creates a stream over `[0, size)`.
    ///
    /// Storage is reserved here and written on the first [`reset`](Self::reset).
    pub fn new(size: u32) -> Self {
        tracing::debug!(size, "allocating permutation stream");
        PermutationStream {
            size,
            idx: 0,
            version: 0,
            slots: Vec::with_capacity(size as usize),
        }
    }

    /// Creates a stream over `[0, size)`, rejecting sizes beyond `u32::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitstream_random::permutation::PermutationStream;
    /// assert_eq!(PermutationStream::try_new(16).unwrap().size(), 16);
    /// ```
    pub fn try_new(size: usize) -> Result<Self, Error> {
        let size = u32::try_from(size).map_err(|err| {
            Error::config_invalid("permutation size must fit in 32 bits")
                .with_context("size", size)
                .set_source(err)
        })?;
        Ok(Self::new(size))
    }

    /// Returns the number of elements in each permutation.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns how many elements of the current permutation are left.
    pub fn remaining(&self) -> u32 {
        if self.version == 0 {
            0
        } else {
            self.size - self.idx
        }
    }

    /// Returns `true` if the current permutation has elements left.
    ///
    /// Always `false` before the first [`reset`](Self::reset).
    pub fn has_next(&self) -> bool {
        self.remaining() > 0
    }

    /// Starts a new permutation.
    ///
    /// Only the first call and the call that would overflow the version
    /// counter touch the storage.
    pub fn reset(&mut self) {
        self.idx = 0;
        if self.version == 0 || self.version == u32::MAX {
            self.initialize();
        }
        self.version += 1;
    }

    fn initialize(&mut self) {
        tracing::debug!(size = self.size, "initializing permutation slots");
        self.slots.clear();
        self.slots.extend((0..self.size).map(|i| Slot {
            value: i,
            version: 0,
        }));
        self.version = 0;
    }

    /// Value currently at `pos` for this permutation.
    #[inline]
    fn value_at(&self, pos: u32) -> u32 {
        let slot = self.slots[pos as usize];
        if slot.version == self.version {
            slot.value
        } else {
            pos
        }
    }

    /// Emits the next element of the current permutation.
    ///
    /// # Panics
    ///
    /// Panics if [`has_next`](Self::has_next) is `false`.
    pub fn next<S: BitSource + ?Sized>(&mut self, source: &mut S) -> u32 {
        assert!(self.has_next(), "permutation stream is exhausted");

        let k = self.idx + uniform_lumbroso(self.size - self.idx, source);
        let result = self.value_at(k);
        // Position idx is never read again in this version, so only k is written.
        self.slots[k as usize] = Slot {
            value: self.value_at(self.idx),
            version: self.version,
        };
        self.idx += 1;
        result
    }

    /// Returns an iterator over the rest of the current permutation.
    pub fn iter<'a, S: BitSource + ?Sized>(
        &'a mut self,
        source: &'a mut S,
    ) -> Permutation<'a, S> {
        Permutation {
            stream: self,
            source,
        }
    }
}

/// Iterator draining a [`PermutationStream`], created by [`PermutationStream::iter`].
#[derive(Debug)]
pub struct Permutation<'a, S: ?Sized> {
    stream: &'a mut PermutationStream,
    source: &'a mut S,
}

impl<S: BitSource + ?Sized> Iterator for Permutation<'_, S> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.stream.has_next() {
            Some(self.stream.next(&mut *self.source))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.stream.remaining() as usize;
        (remaining, Some(remaining))
    }
}

impl<S: BitSource + ?Sized> ExactSizeIterator for Permutation<'_, S> {}
