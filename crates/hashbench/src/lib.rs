// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # hashbench
//!
//! Measures how fast common hash functions digest a file, and what that
//! costs in CPU and memory.
//!
//! | Algorithm | Backend                   | Digest   |
//! |-----------|---------------------------|----------|
//! | `sha2`    | SHA-256 (`sha2`)          | 32 bytes |
//! | `sha3`    | SHA3-256 (`sha3`)         | 32 bytes |
//! | `blake2`  | BLAKE2b-512 (`blake2`)    | 64 bytes |
//! | `blake3`  | BLAKE3 (`blake3`)         | 32 bytes |
//! | `xxh3`    | XXH3-64 (`xxhash-rust`)   | 8 bytes  |
//! | `md5`     | MD5 (`md-5`)              | 16 bytes |
//!
//! Each algorithm is run N times over the same input. Per repetition the
//! harness records wall time, the CPU percentage of the measuring thread and
//! the RSS delta; results are the mean over repetitions. Power and
//! temperature are linear *estimates* derived from CPU usage, not sensor
//! readings.
//!
//! # Quick Start
//!
//! ```rust
//! use hashbench::digest::Algorithm;
//! use hashbench::runner::{RunConfig, run};
//!
//! let dir = tempfile::tempdir()?;
//! let file = dir.path().join("input.bin");
//! std::fs::write(&file, vec![7u8; 64 * 1024])?;
//!
//! let config = RunConfig {
//!     file,
//!     repetitions: 2,
//!     algorithms: vec![Algorithm::Blake3, Algorithm::Xxh3],
//!     ..RunConfig::default()
//! };
//!
//! let report = run(&config)?;
//! assert!(report.is_success());
//! assert_eq!(report.results().count(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Crates
//!
//! - [`digest`]: algorithm catalog, bulk and streaming hashers
//! - [`runner`]: sampler, orchestrator, run configuration
//! - [`probe`]: CPU/RSS probes and system info
//! - [`guard`]: CPU affinity and address-space limits
//! - [`cipher`]: random input files and AES-256-CBC encrypted copies
//!
//! The `hashbench` binary wraps these as `info`, `run` and `generate`
//! subcommands (see [`cli`]).

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

pub mod cli;
pub mod report;

pub use hashbench_cipher as cipher;
pub use hashbench_digest as digest;
pub use hashbench_guard as guard;
pub use hashbench_probe as probe;
pub use hashbench_runner as runner;
