// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use serde::Serialize;

use crate::memory::resident_set_bytes;

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Host and process figures shown before a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SystemInfo {
    /// CPUs this process may run on (honours the affinity mask).
    pub logical_cpus: usize,

    /// CPUs online on the host.
    pub online_cpus: usize,

    /// Physical memory in bytes.
    pub total_memory_bytes: u64,

    /// Memory available for new allocations in bytes.
    pub available_memory_bytes: u64,

    /// Resident set size of this process in bytes.
    pub process_rss_bytes: u64,
}

impl SystemInfo {
    /// Physical memory in gigabytes (GiB).
    pub fn total_memory_gb(&self) -> f64 {
        self.total_memory_bytes as f64 / BYTES_PER_GB
    }

    /// Available memory in gigabytes (GiB).
    pub fn available_memory_gb(&self) -> f64 {
        self.available_memory_bytes as f64 / BYTES_PER_GB
    }

    /// Emits the figures at `info` level.
    pub fn log(&self) {
        tracing::info!(
            logical_cpus = self.logical_cpus,
            online_cpus = self.online_cpus,
            total_memory_gb = self.total_memory_gb(),
            available_memory_gb = self.available_memory_gb(),
            process_rss_bytes = self.process_rss_bytes,
            "system info"
        );
    }
}

/// Reads current CPU and memory figures. Unavailable values read as `0`.
pub fn system_info() -> SystemInfo {
    let (total_memory_bytes, available_memory_bytes) = read_meminfo();

    SystemInfo {
        logical_cpus: std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(0),
        online_cpus: online_cpus(),
        total_memory_bytes,
        available_memory_bytes,
        process_rss_bytes: resident_set_bytes(),
    }
}

#[cfg(unix)]
fn online_cpus() -> usize {
    let n = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };
    if n > 0 { n as usize } else { 0 }
}

#[cfg(not(unix))]
fn online_cpus() -> usize {
    0
}

#[cfg(target_os = "linux")]
fn read_meminfo() -> (u64, u64) {
    use crate::memory::parse_kb_field;

    match std::fs::read_to_string("/proc/meminfo") {
        Ok(listing) => (
            parse_kb_field(&listing, "MemTotal:").unwrap_or(0),
            parse_kb_field(&listing, "MemAvailable:").unwrap_or(0),
        ),
        Err(_) => (0, 0),
    }
}

#[cfg(not(target_os = "linux"))]
fn read_meminfo() -> (u64, u64) {
    (0, 0)
}
