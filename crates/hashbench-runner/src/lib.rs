// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # hashbench_runner
//!
//! The benchmark harness: a [performance sampler](measure) that times one
//! algorithm over one input for N repetitions, and an
//! [orchestrator](run) that drives the sampler over a set of algorithms
//! either sequentially or across a worker pool.
//!
//! ## Estimates
//!
//! `estimated_power_w` and `estimated_temperature_c` in [`AggregateResult`]
//! are linear functions of CPU usage with fixed constants (see
//! [`estimate`]). They are not hardware readings.
//!
//! ## Example
//!
//! ```rust
//! use hashbench_digest::{Algorithm, HasherKind};
//! use hashbench_runner::{InputSource, measure};
//!
//! let spec = Algorithm::Blake3.spec(HasherKind::Bulk);
//! let source = InputSource::memory(vec![0u8; 4096]);
//!
//! let result = measure(&spec, &source, 3).expect("Failed to measure(..)");
//! assert_eq!(result.hash, "blake3");
//! assert!(result.speed >= 0.0);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod config;
mod error;
mod orchestrator;
mod sample;
mod sampler;
mod source;

pub mod estimate;

pub use config::{DEFAULT_FILE, DEFAULT_REPETITIONS, ExecutionMode, RunConfig};
pub use error::{BenchError, ConfigError};
pub use orchestrator::{AlgorithmRun, RunReport, run, run_parallel, run_sequential};
pub use sample::{AggregateResult, MeasurementSample, aggregate};
pub use sampler::{Measurement, collect_samples, measure, measure_with_probe};
pub use source::InputSource;
