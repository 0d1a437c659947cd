// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors from the algorithm catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// The name does not match any algorithm in the catalog.
    #[error("unknown hash algorithm: {0:?}")]
    UnknownAlgorithm(String),
}
