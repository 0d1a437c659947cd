// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from file generation and AES-256-CBC.
#[derive(Debug, Error)]
pub enum CipherError {
    /// The OS entropy source failed.
    #[error("entropy source not available")]
    EntropyNotAvailable,

    /// Key or IV has the wrong length.
    #[error("invalid key or IV length")]
    InvalidKeyLength,

    /// Ciphertext shorter than an IV plus one block, or not block aligned.
    #[error("ciphertext length {0} is not an IV plus whole blocks")]
    InvalidCiphertextLength(usize),

    /// PKCS#7 padding did not verify after decryption.
    #[error("invalid PKCS#7 padding")]
    InvalidPadding,

    /// Requested size in megabytes does not fit in a byte count.
    #[error("file size of {0} MB overflows a byte count")]
    SizeOverflow(u64),

    /// Reading or writing a file failed.
    #[error("I/O error on {path:?}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl CipherError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
