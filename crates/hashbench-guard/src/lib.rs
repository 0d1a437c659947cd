// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! hashbench_guard - Best-effort process resource ceilings
//!
//! Pins the calling process to one logical CPU via `sched_setaffinity` and
//! caps its address space via `setrlimit(RLIMIT_AS)`. Both are optional and
//! both are non-fatal: a failed or unsupported call is logged as a warning
//! and the benchmark continues unconstrained. Nothing is retried.
//!
//! Limits are process-wide. Apply them before spawning worker threads so the
//! workers inherit the affinity mask.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;

use serde::{Deserialize, Serialize};

pub use error::LimitError;

/// Requested resource ceilings. `None` leaves a resource untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourceLimits {
    /// Logical CPU index to pin the process to.
    pub cpu: Option<usize>,

    /// Address-space ceiling in bytes.
    pub memory_bytes: Option<u64>,
}

impl ResourceLimits {
    /// Returns true when no ceiling is requested.
    pub fn is_empty(&self) -> bool {
        self.cpu.is_none() && self.memory_bytes.is_none()
    }
}

/// Which of the requested ceilings actually took effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LimitStatus {
    /// Whether `sched_setaffinity` succeeded.
    pub affinity_applied: bool,

    /// Whether `setrlimit(RLIMIT_AS)` succeeded.
    pub memory_cap_applied: bool,
}

/// Applies `limits` to the current process.
///
/// Never fails: each ceiling that cannot be applied is reported through
/// `tracing::warn!` and left out of the returned [`LimitStatus`].
///
/// # Example
///
/// ```
/// use hashbench_guard::{ResourceLimits, apply_limits};
///
/// let status = apply_limits(&ResourceLimits::default());
/// assert!(!status.affinity_applied);
/// assert!(!status.memory_cap_applied);
/// ```
pub fn apply_limits(limits: &ResourceLimits) -> LimitStatus {
    let mut status = LimitStatus::default();

    if let Some(cpu) = limits.cpu {
        match pin_to_cpu(cpu) {
            Ok(()) => {
                tracing::info!(cpu, "pinned process to a single logical CPU");
                status.affinity_applied = true;
            }
            Err(e) => tracing::warn!(cpu, error = %e, "CPU pinning failed, continuing unpinned"),
        }
    }

    if let Some(bytes) = limits.memory_bytes {
        match cap_address_space(bytes) {
            Ok(()) => {
                tracing::info!(bytes, "capped process address space");
                status.memory_cap_applied = true;
            }
            Err(e) => tracing::warn!(bytes, error = %e, "memory cap failed, continuing uncapped"),
        }
    }

    status
}

/// Restricts the calling process to logical CPU `cpu`.
#[cfg(target_os = "linux")]
pub fn pin_to_cpu(cpu: usize) -> Result<(), LimitError> {
    // CPU_SET indexes a fixed-size bitmap.
    let max = 8 * core::mem::size_of::<libc::cpu_set_t>();
    if cpu >= max {
        return Err(LimitError::CpuOutOfRange { cpu, max });
    }

    let mut set: libc::cpu_set_t = unsafe { core::mem::zeroed() };
    unsafe { libc::CPU_SET(cpu, &mut set) };

    // pid 0 = calling thread; threads spawned afterwards inherit the mask.
    let rc = unsafe { libc::sched_setaffinity(0, core::mem::size_of::<libc::cpu_set_t>(), &set) };
    if rc != 0 {
        return Err(LimitError::syscall("sched_setaffinity"));
    }

    Ok(())
}

/// Restricts the calling process to logical CPU `cpu`.
#[cfg(not(target_os = "linux"))]
pub fn pin_to_cpu(_cpu: usize) -> Result<(), LimitError> {
    Err(LimitError::Unsupported("sched_setaffinity"))
}

/// Lowers the soft `RLIMIT_AS` to `bytes`, never above the hard limit.
#[cfg(target_os = "linux")]
pub fn cap_address_space(bytes: u64) -> Result<(), LimitError> {
    let mut current = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };
    if unsafe { libc::getrlimit(libc::RLIMIT_AS, &mut current) } != 0 {
        return Err(LimitError::syscall("getrlimit"));
    }

    // Only the soft limit moves; lowering the hard limit is irreversible.
    let limit = libc::rlimit {
        rlim_cur: (bytes as libc::rlim_t).min(current.rlim_max),
        rlim_max: current.rlim_max,
    };
    if unsafe { libc::setrlimit(libc::RLIMIT_AS, &limit) } != 0 {
        return Err(LimitError::syscall("setrlimit"));
    }

    Ok(())
}

/// Lowers the soft `RLIMIT_AS` to `bytes`, never above the hard limit.
#[cfg(not(target_os = "linux"))]
pub fn cap_address_space(_bytes: u64) -> Result<(), LimitError> {
    Err(LimitError::Unsupported("setrlimit(RLIMIT_AS)"))
}
