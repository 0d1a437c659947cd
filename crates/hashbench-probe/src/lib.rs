// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # hashbench_probe
//!
//! Read-only views of the host and the running process.
//!
//! - [`system_info`]: logical CPU count and memory figures, reported once
//!   before a run
//! - [`ResourceProbe`]: the seam the sampler reads CPU percent and RSS
//!   through; [`ThreadProbe`] is the real implementation
//!
//! Missing platform data never fails a probe: it reads as `0`.
//!
//! ## CPU percent semantics
//!
//! [`ThreadProbe::cpu_percent`] is non-blocking and reports CPU time consumed
//! by the calling thread since the previous call or the last
//! [`reset_cpu_window`](ResourceProbe::reset_cpu_window), as a percentage of
//! the wall time elapsed over the same span. The first call measures from
//! construction.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod cpu;
mod memory;
mod support;
mod system;
mod traits;

pub use cpu::{ThreadProbe, thread_cpu_time};
pub use memory::{BYTES_PER_MB, bytes_to_mb, resident_set_bytes};
pub use system::{SystemInfo, system_info};
pub use traits::ResourceProbe;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
