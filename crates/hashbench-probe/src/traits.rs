// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Source of the CPU and memory snapshots taken around each repetition.
///
/// One probe belongs to one measurement loop; it is not shared between
/// workers.
pub trait ResourceProbe {
    /// Starts a new CPU window without reporting anything, like the first
    /// reading of a fresh process handle.
    fn reset_cpu_window(&mut self);

    /// CPU usage in percent since the last reset or reading.
    fn cpu_percent(&mut self) -> f64;

    /// Current resident set size in megabytes.
    fn rss_mb(&mut self) -> f64;
}
