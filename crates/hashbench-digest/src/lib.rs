// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # hashbench_digest
//!
//! Hash algorithm catalog for the hashbench harness.
//!
//! Every algorithm is exposed through a [`Hasher`], a tagged value with two
//! variants:
//!
//! - [`Hasher::Bulk`]: one-shot digest of a whole in-memory buffer
//! - [`Hasher::Streaming`]: factory for an incremental [`StreamingHasher`]
//!
//! ## Algorithms
//!
//! | Name     | Function     | Digest size |
//! |----------|--------------|-------------|
//! | `md5`    | MD5          | 16 bytes    |
//! | `sha2`   | SHA-256      | 32 bytes    |
//! | `sha3`   | SHA3-256     | 32 bytes    |
//! | `blake2` | BLAKE2b-512  | 64 bytes    |
//! | `blake3` | BLAKE3       | 32 bytes    |
//! | `xxh3`   | XXH3-64      | 8 bytes     |
//!
//! ## Example
//!
//! ```rust
//! use hashbench_digest::{Algorithm, HasherKind};
//!
//! let spec = Algorithm::Md5.spec(HasherKind::Streaming);
//! let digest = spec.hasher().digest_chunked(b"abc", 1);
//!
//! assert_eq!(digest.to_hex(), "900150983cd24fb0d6963f7d28e17f72");
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod algorithm;
mod algorithm_spec;
mod backends;
mod digest;
mod error;
mod hasher;

pub use algorithm::Algorithm;
pub use algorithm_spec::{AlgorithmSpec, catalog, resolve};
pub use digest::Digest;
pub use error::DigestError;
pub use hasher::{BulkFn, DEFAULT_BLOCK_SIZE, Hasher, HasherKind, StreamingFactory, StreamingHasher};
