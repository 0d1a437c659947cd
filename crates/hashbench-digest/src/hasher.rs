// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::{self, Read};

use serde::{Deserialize, Serialize};

use crate::digest::Digest;

/// Block size used when streaming without an explicit size (1 MiB).
pub const DEFAULT_BLOCK_SIZE: usize = 1024 * 1024;

/// Incremental hashing object.
///
/// Feeding chunks through [`update`](StreamingHasher::update) and calling
/// [`finalize`](StreamingHasher::finalize) yields the same digest as hashing
/// the concatenation of all chunks at once.
pub trait StreamingHasher: Send {
    /// Absorbs the next chunk of input.
    fn update(&mut self, chunk: &[u8]);

    /// Consumes the hasher and returns the digest.
    fn finalize(self: Box<Self>) -> Digest;
}

/// One-shot digest function.
pub type BulkFn = fn(&[u8]) -> Digest;

/// Constructor for a fresh incremental hasher.
pub type StreamingFactory = fn() -> Box<dyn StreamingHasher>;

/// Selects which [`Hasher`] variant the catalog hands out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HasherKind {
    /// Whole input in memory, one call.
    #[default]
    Bulk,
    /// Input fed in fixed-size blocks.
    Streaming,
}

/// Hash capability of an algorithm.
///
/// Both variants are plain function pointers, so a `Hasher` is `Copy`,
/// `Send` and `Sync` and can be handed to any number of workers.
#[derive(Debug, Clone, Copy)]
pub enum Hasher {
    /// One-shot `digest(bytes)`.
    Bulk(BulkFn),
    /// Incremental `update(chunk)` / `finalize()`.
    Streaming(StreamingFactory),
}

impl Hasher {
    /// Returns which variant this is.
    pub fn kind(&self) -> HasherKind {
        match self {
            Hasher::Bulk(_) => HasherKind::Bulk,
            Hasher::Streaming(_) => HasherKind::Streaming,
        }
    }

    /// Hashes a whole buffer. Streaming hashers receive it as one chunk.
    pub fn digest(&self, data: &[u8]) -> Digest {
        match self {
            Hasher::Bulk(f) => f(data),
            Hasher::Streaming(factory) => {
                let mut hasher = factory();
                hasher.update(data);
                hasher.finalize()
            }
        }
    }

    /// Hashes a buffer, feeding streaming hashers `block_size` bytes at a time.
    ///
    /// Bulk hashers ignore `block_size`. A zero block size is treated as one.
    pub fn digest_chunked(&self, data: &[u8], block_size: usize) -> Digest {
        match self {
            Hasher::Bulk(f) => f(data),
            Hasher::Streaming(factory) => {
                let mut hasher = factory();
                for chunk in data.chunks(block_size.max(1)) {
                    hasher.update(chunk);
                }
                hasher.finalize()
            }
        }
    }

    /// Hashes everything readable from `reader`.
    ///
    /// Bulk hashers read the input to the end first; streaming hashers are fed
    /// one `block_size` read at a time and never hold more than one block.
    pub fn digest_reader<R: Read>(&self, mut reader: R, block_size: usize) -> io::Result<Digest> {
        match self {
            Hasher::Bulk(f) => {
                let mut data = Vec::new();
                reader.read_to_end(&mut data)?;
                Ok(f(&data))
            }
            Hasher::Streaming(factory) => {
                let mut hasher = factory();
                let mut block = vec![0u8; block_size.max(1)];

                loop {
                    match reader.read(&mut block) {
                        Ok(0) => break,
                        Ok(n) => hasher.update(&block[..n]),
                        Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                        Err(e) => return Err(e),
                    }
                }

                Ok(hasher.finalize())
            }
        }
    }
}
