// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Why a resource ceiling could not be applied.
#[derive(Debug, Error)]
pub enum LimitError {
    /// The platform has no equivalent of the call.
    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),

    /// The requested CPU index does not fit in the affinity mask.
    #[error("cpu {cpu} is out of range (max {max})")]
    CpuOutOfRange {
        /// Requested CPU index.
        cpu: usize,
        /// Number of CPUs the mask can address.
        max: usize,
    },

    /// The syscall returned an error.
    #[error("{call} failed: {source}")]
    Syscall {
        /// Name of the failing call.
        call: &'static str,
        /// OS error captured right after the call.
        source: std::io::Error,
    },
}

impl LimitError {
    #[cfg_attr(not(target_os = "linux"), allow(dead_code))]
    pub(crate) fn syscall(call: &'static str) -> Self {
        Self::Syscall {
            call,
            source: std::io::Error::last_os_error(),
        }
    }
}
