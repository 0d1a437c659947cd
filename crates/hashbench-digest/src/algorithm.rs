// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::str::FromStr;

use blake2::Blake2b512;
use md5::Md5;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use sha3::Sha3_256;

use crate::algorithm_spec::AlgorithmSpec;
use crate::backends;
use crate::error::DigestError;
use crate::hasher::{BulkFn, Hasher, HasherKind, StreamingFactory};

/// Hash algorithms known to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// MD5
    Md5,
    /// SHA-256
    #[serde(alias = "sha256")]
    Sha2,
    /// SHA3-256
    #[serde(alias = "sha3-256")]
    Sha3,
    /// BLAKE2b-512
    #[serde(alias = "blake2b")]
    Blake2,
    /// BLAKE3
    Blake3,
    /// XXH3-64
    #[serde(alias = "xxh3-64")]
    Xxh3,
}

impl Algorithm {
    /// Every algorithm, in reporting order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Sha2,
        Algorithm::Sha3,
        Algorithm::Blake2,
        Algorithm::Blake3,
        Algorithm::Xxh3,
        Algorithm::Md5,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha2 => "sha2",
            Algorithm::Sha3 => "sha3",
            Algorithm::Blake2 => "blake2",
            Algorithm::Blake3 => "blake3",
            Algorithm::Xxh3 => "xxh3",
        }
    }

    /// Digest size in bytes.
    pub fn digest_len(self) -> usize {
        match self {
            Algorithm::Md5 => 16,
            Algorithm::Sha2 | Algorithm::Sha3 | Algorithm::Blake3 => 32,
            Algorithm::Blake2 => 64,
            Algorithm::Xxh3 => 8,
        }
    }

    /// One-shot digest function.
    pub fn bulk(self) -> BulkFn {
        match self {
            Algorithm::Md5 => backends::rustcrypto_bulk::<Md5>,
            Algorithm::Sha2 => backends::rustcrypto_bulk::<Sha256>,
            Algorithm::Sha3 => backends::rustcrypto_bulk::<Sha3_256>,
            Algorithm::Blake2 => backends::rustcrypto_bulk::<Blake2b512>,
            Algorithm::Blake3 => backends::blake3_bulk,
            Algorithm::Xxh3 => backends::xxh3_bulk,
        }
    }

    /// Incremental hasher factory.
    pub fn streaming(self) -> StreamingFactory {
        match self {
            Algorithm::Md5 => backends::rustcrypto_streaming::<Md5>,
            Algorithm::Sha2 => backends::rustcrypto_streaming::<Sha256>,
            Algorithm::Sha3 => backends::rustcrypto_streaming::<Sha3_256>,
            Algorithm::Blake2 => backends::rustcrypto_streaming::<Blake2b512>,
            Algorithm::Blake3 => backends::blake3_streaming,
            Algorithm::Xxh3 => backends::xxh3_streaming,
        }
    }

    /// Returns the requested [`Hasher`] variant.
    pub fn hasher(self, kind: HasherKind) -> Hasher {
        match kind {
            HasherKind::Bulk => Hasher::Bulk(self.bulk()),
            HasherKind::Streaming => Hasher::Streaming(self.streaming()),
        }
    }

    /// Builds a named [`AlgorithmSpec`] for this algorithm.
    pub fn spec(self, kind: HasherKind) -> AlgorithmSpec {
        AlgorithmSpec::new(self.name(), self.hasher(kind))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md5" => Ok(Algorithm::Md5),
            "sha2" | "sha256" => Ok(Algorithm::Sha2),
            "sha3" | "sha3-256" => Ok(Algorithm::Sha3),
            "blake2" | "blake2b" => Ok(Algorithm::Blake2),
            "blake3" => Ok(Algorithm::Blake3),
            "xxh3" | "xxh3-64" => Ok(Algorithm::Xxh3),
            _ => Err(DigestError::UnknownAlgorithm(s.to_string())),
        }
    }
}
