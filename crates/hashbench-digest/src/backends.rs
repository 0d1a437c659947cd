// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Adapters from the upstream hash crates to [`Hasher`](crate::Hasher) entries.

use sha2::digest::Digest as RustCryptoDigest;
use xxhash_rust::xxh3::{Xxh3, xxh3_64};

use crate::digest::Digest;
use crate::hasher::StreamingHasher;

// RustCrypto family (MD5, SHA-2, SHA-3, BLAKE2)

pub(crate) fn rustcrypto_bulk<D: RustCryptoDigest>(data: &[u8]) -> Digest {
    Digest::from_bytes(D::digest(data).to_vec())
}

pub(crate) fn rustcrypto_streaming<D>() -> Box<dyn StreamingHasher>
where
    D: RustCryptoDigest + Send + 'static,
{
    Box::new(RustCryptoStream(D::new()))
}

struct RustCryptoStream<D>(D);

impl<D: RustCryptoDigest + Send> StreamingHasher for RustCryptoStream<D> {
    fn update(&mut self, chunk: &[u8]) {
        RustCryptoDigest::update(&mut self.0, chunk);
    }

    fn finalize(self: Box<Self>) -> Digest {
        Digest::from_bytes(self.0.finalize().to_vec())
    }
}

// BLAKE3

pub(crate) fn blake3_bulk(data: &[u8]) -> Digest {
    Digest::from_bytes(blake3::hash(data).as_bytes().to_vec())
}

pub(crate) fn blake3_streaming() -> Box<dyn StreamingHasher> {
    Box::new(Blake3Stream(blake3::Hasher::new()))
}

struct Blake3Stream(blake3::Hasher);

impl StreamingHasher for Blake3Stream {
    fn update(&mut self, chunk: &[u8]) {
        self.0.update(chunk);
    }

    fn finalize(self: Box<Self>) -> Digest {
        Digest::from_bytes(self.0.finalize().as_bytes().to_vec())
    }
}

// XXH3-64, big-endian so the hex form matches the canonical representation

pub(crate) fn xxh3_bulk(data: &[u8]) -> Digest {
    Digest::from_bytes(xxh3_64(data).to_be_bytes().to_vec())
}

pub(crate) fn xxh3_streaming() -> Box<dyn StreamingHasher> {
    Box::new(Xxh3Stream(Xxh3::new()))
}

struct Xxh3Stream(Xxh3);

impl StreamingHasher for Xxh3Stream {
    fn update(&mut self, chunk: &[u8]) {
        self.0.update(chunk);
    }

    fn finalize(self: Box<Self>) -> Digest {
        Digest::from_bytes(self.0.digest().to_be_bytes().to_vec())
    }
}
