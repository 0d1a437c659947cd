// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Bytes in one megabyte as reported by the harness (MiB).
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Converts a byte count to megabytes.
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Resident set size of the current process in bytes.
///
/// On Linux this reads `VmRSS` from `/proc/self/status`. Elsewhere, or when
/// the file cannot be parsed, it returns `0`.
pub fn resident_set_bytes() -> u64 {
    read_vm_rss()
}

#[cfg(target_os = "linux")]
fn read_vm_rss() -> u64 {
    std::fs::read_to_string("/proc/self/status")
        .ok()
        .and_then(|status| parse_kb_field(&status, "VmRSS:"))
        .unwrap_or(0)
}

#[cfg(not(target_os = "linux"))]
fn read_vm_rss() -> u64 {
    0
}

/// Finds `field` in a `/proc`-style `Key:   1234 kB` listing, in bytes.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
pub(crate) fn parse_kb_field(listing: &str, field: &str) -> Option<u64> {
    listing.lines().find_map(|line| {
        let rest = line.strip_prefix(field)?;
        let kb = rest.trim().trim_end_matches("kB").trim().parse::<u64>().ok()?;
        Some(kb * 1024)
    })
}
