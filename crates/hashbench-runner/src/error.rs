// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for hashbench-runner.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a [`RunConfig`](crate::RunConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path:?}: {source}")]
    Io {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML for a run config.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Repetitions must be at least one.
    #[error("repetitions must be at least 1")]
    InvalidRepetitions,

    /// A streaming block size of zero bytes.
    #[error("block size must be at least 1 byte")]
    InvalidBlockSize,

    /// A worker pool of zero workers.
    #[error("worker count must be at least 1")]
    InvalidWorkers,

    /// No algorithm selected.
    #[error("no algorithms selected")]
    EmptyAlgorithms,

    /// The same algorithm was selected twice.
    #[error("algorithm {0:?} selected more than once")]
    DuplicateAlgorithm(String),

    /// Execution mode string not recognised.
    #[error("unknown execution mode {0:?} (expected \"single\" or \"multi\")")]
    UnknownMode(String),
}

/// Errors raised by the sampler and the orchestrator.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The input file could not be opened or read.
    #[error("failed to read input {path:?}: {source}")]
    Io {
        /// Input file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Repetitions must be at least one.
    #[error("repetitions must be at least 1")]
    InvalidRepetitions,

    /// Two algorithm specs share a name.
    #[error("algorithm name {0:?} is not unique within the run")]
    DuplicateAlgorithm(String),

    /// The worker pool could not be built.
    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),

    /// A worker finished without reporting a result.
    #[error("no result reported for algorithm {0:?}")]
    MissingResult(String),

    /// Invalid run configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BenchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
