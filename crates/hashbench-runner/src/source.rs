// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where the sampler takes its input from.
///
/// `block_size` only matters for streaming hashers; `None` means
/// [`DEFAULT_BLOCK_SIZE`](hashbench_digest::DEFAULT_BLOCK_SIZE).
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Bytes already in memory, shared read-only between workers.
    Memory {
        /// Input bytes.
        data: Arc<[u8]>,
        /// Chunk size fed to streaming hashers.
        block_size: Option<usize>,
    },

    /// A file each worker opens on its own.
    File {
        /// Input file path.
        path: PathBuf,
        /// Read size for streaming hashers.
        block_size: Option<usize>,
    },
}

impl InputSource {
    /// In-memory input with the default block size.
    pub fn memory(data: impl Into<Arc<[u8]>>) -> Self {
        Self::Memory {
            data: data.into(),
            block_size: None,
        }
    }

    /// File input.
    pub fn file(path: impl AsRef<Path>, block_size: Option<usize>) -> Self {
        Self::File {
            path: path.as_ref().to_path_buf(),
            block_size,
        }
    }

    /// Returns the same source with a different block size.
    pub fn with_block_size(self, block_size: Option<usize>) -> Self {
        match self {
            Self::Memory { data, .. } => Self::Memory { data, block_size },
            Self::File { path, .. } => Self::File { path, block_size },
        }
    }

    /// Configured block size, if any.
    pub fn block_size(&self) -> Option<usize> {
        match self {
            Self::Memory { block_size, .. } | Self::File { block_size, .. } => *block_size,
        }
    }
}
