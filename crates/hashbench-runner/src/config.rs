// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::str::FromStr;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use hashbench_digest::{Algorithm, AlgorithmSpec, HasherKind, resolve};
use hashbench_guard::ResourceLimits;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::source::InputSource;

/// Input file used when none is configured.
pub const DEFAULT_FILE: &str = "upload/10MB.bin";

/// Repetitions per algorithm when none are configured.
pub const DEFAULT_REPETITIONS: usize = 10;

/// How the orchestrator schedules algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// One thread, one algorithm at a time, results in algorithm order.
    #[default]
    Single,
    /// One worker per logical CPU, one algorithm per worker.
    Multi,
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExecutionMode::Single => "single",
            ExecutionMode::Multi => "multi",
        })
    }
}

impl FromStr for ExecutionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "single-core" | "sequential" => Ok(ExecutionMode::Single),
            "multi" | "multi-core" | "parallel" => Ok(ExecutionMode::Multi),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

/// Immutable description of one benchmark run.
///
/// Every field has a default, so an empty TOML document is a valid config:
///
/// ```toml
/// file = "upload/100MB.bin"
/// repetitions = 10
/// block_size = 65536           # omit to preload the whole file
/// mode = "multi"
/// workers = 4                  # omit for one per logical CPU
/// algorithms = ["sha2", "blake3", "xxh3"]
///
/// [limits]
/// cpu = 0
/// memory_bytes = 4294967296
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Input file.
    pub file: PathBuf,

    /// Repetitions per algorithm.
    pub repetitions: usize,

    /// Streamed read size. `None` preloads the whole file.
    pub block_size: Option<usize>,

    /// Sequential or worker-pool scheduling.
    pub mode: ExecutionMode,

    /// Worker pool size in multi mode. `None` uses the logical CPU count.
    pub workers: Option<usize>,

    /// Algorithms to measure, in reporting order.
    pub algorithms: Vec<Algorithm>,

    /// Best-effort process ceilings.
    pub limits: ResourceLimits,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_FILE),
            repetitions: DEFAULT_REPETITIONS,
            block_size: None,
            mode: ExecutionMode::default(),
            workers: None,
            algorithms: Algorithm::ALL.to_vec(),
            limits: ResourceLimits::default(),
        }
    }
}

impl RunConfig {
    /// Parses a TOML document. Missing fields take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Rejects configs the harness cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repetitions == 0 {
            return Err(ConfigError::InvalidRepetitions);
        }
        if self.block_size == Some(0) {
            return Err(ConfigError::InvalidBlockSize);
        }
        if self.workers == Some(0) {
            return Err(ConfigError::InvalidWorkers);
        }
        if self.algorithms.is_empty() {
            return Err(ConfigError::EmptyAlgorithms);
        }

        let mut seen = HashSet::new();
        for algorithm in &self.algorithms {
            if !seen.insert(algorithm) {
                return Err(ConfigError::DuplicateAlgorithm(algorithm.name().to_string()));
            }
        }

        Ok(())
    }

    /// Streaming hashers when a block size is set, bulk otherwise.
    pub fn hasher_kind(&self) -> HasherKind {
        match self.block_size {
            Some(_) => HasherKind::Streaming,
            None => HasherKind::Bulk,
        }
    }

    /// Input source for every worker.
    pub fn input_source(&self) -> InputSource {
        InputSource::file(&self.file, self.block_size)
    }

    /// Specs for the configured algorithms, in order.
    pub fn algorithm_specs(&self) -> Vec<AlgorithmSpec> {
        resolve(&self.algorithms, self.hasher_kind())
    }

    /// Worker pool size, never below one.
    pub fn worker_count(&self) -> usize {
        self.workers
            .unwrap_or_else(|| hashbench_probe::system_info().logical_cpus)
            .max(1)
    }
}
