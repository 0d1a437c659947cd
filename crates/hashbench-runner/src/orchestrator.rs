// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Run orchestrator.
//!
//! Drives the sampler once per algorithm, sequentially or on a rayon pool.
//! Parallel results arrive in completion order and are re-keyed by name into
//! algorithm order before they are returned.

use std::collections::{HashMap, HashSet};
use std::sync::mpsc;

use hashbench_digest::AlgorithmSpec;
use hashbench_guard::{LimitStatus, apply_limits};

use crate::config::{ExecutionMode, RunConfig};
use crate::error::BenchError;
use crate::sample::AggregateResult;
use crate::sampler::measure;
use crate::source::InputSource;

/// Outcome of one algorithm's measurement loop.
#[derive(Debug)]
pub struct AlgorithmRun {
    /// Algorithm name.
    pub name: String,

    /// The aggregate, or why it could not be produced.
    pub outcome: Result<AggregateResult, BenchError>,
}

/// Everything a run produced.
#[derive(Debug)]
pub struct RunReport {
    /// Scheduling mode used.
    pub mode: ExecutionMode,

    /// Number of workers (1 in single mode).
    pub workers: usize,

    /// Which resource ceilings took effect.
    pub limits: LimitStatus,

    /// One entry per algorithm, in configured order.
    pub runs: Vec<AlgorithmRun>,
}

impl RunReport {
    /// Successful aggregates, in order.
    pub fn results(&self) -> impl Iterator<Item = &AggregateResult> {
        self.runs.iter().filter_map(|r| r.outcome.as_ref().ok())
    }

    /// Failed algorithms with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &BenchError)> {
        self.runs
            .iter()
            .filter_map(|r| r.outcome.as_ref().err().map(|e| (r.name.as_str(), e)))
    }

    /// True when every algorithm produced an aggregate.
    pub fn is_success(&self) -> bool {
        self.runs.iter().all(|r| r.outcome.is_ok())
    }
}

fn ensure_unique_names(specs: &[AlgorithmSpec]) -> Result<(), BenchError> {
    let mut seen = HashSet::new();
    for spec in specs {
        if !seen.insert(spec.name()) {
            return Err(BenchError::DuplicateAlgorithm(spec.name().to_string()));
        }
    }
    Ok(())
}

/// Measures every spec on the calling thread, in order.
pub fn run_sequential(
    specs: &[AlgorithmSpec],
    source: &InputSource,
    repetitions: usize,
) -> Result<Vec<AlgorithmRun>, BenchError> {
    ensure_unique_names(specs)?;

    Ok(specs
        .iter()
        .map(|spec| AlgorithmRun {
            name: spec.name().to_string(),
            outcome: measure(spec, source, repetitions),
        })
        .collect())
}

/// Measures every spec on its own task in a pool of `workers` threads.
///
/// Each task loads its own copy of the input. Results are returned in spec
/// order regardless of completion order.
pub fn run_parallel(
    specs: &[AlgorithmSpec],
    source: &InputSource,
    repetitions: usize,
    workers: usize,
) -> Result<Vec<AlgorithmRun>, BenchError> {
    ensure_unique_names(specs)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers.max(1))
        .thread_name(|i| format!("hashbench-worker-{i}"))
        .build()
        .map_err(|e| BenchError::WorkerPool(e.to_string()))?;

    let (tx, rx) = mpsc::channel();
    pool.scope(|scope| {
        for spec in specs {
            let tx = tx.clone();
            scope.spawn(move |_| {
                let outcome = measure(spec, source, repetitions);
                // The receiver outlives the scope.
                let _ = tx.send((spec.name().to_string(), outcome));
            });
        }
    });
    drop(tx);

    let mut by_name: HashMap<String, Result<AggregateResult, BenchError>> = rx.into_iter().collect();

    Ok(specs
        .iter()
        .map(|spec| {
            let name = spec.name().to_string();
            let outcome = by_name
                .remove(&name)
                .unwrap_or_else(|| Err(BenchError::MissingResult(name.clone())));
            AlgorithmRun { name, outcome }
        })
        .collect())
}

/// Validates `config`, applies its resource limits and runs every algorithm.
///
/// Limits are applied before the worker pool exists so workers inherit them.
/// Individual algorithm failures are reported in [`RunReport::runs`]; only
/// configuration and pool errors fail the whole run.
pub fn run(config: &RunConfig) -> Result<RunReport, BenchError> {
    config.validate()?;

    let limits = if config.limits.is_empty() {
        LimitStatus::default()
    } else {
        apply_limits(&config.limits)
    };

    let specs = config.algorithm_specs();
    let source = config.input_source();

    tracing::info!(
        file = %config.file.display(),
        repetitions = config.repetitions,
        mode = %config.mode,
        algorithms = specs.len(),
        "starting run"
    );

    let (workers, runs) = match config.mode {
        ExecutionMode::Single => (1, run_sequential(&specs, &source, config.repetitions)?),
        ExecutionMode::Multi => {
            let workers = config.worker_count();
            (
                workers,
                run_parallel(&specs, &source, config.repetitions, workers)?,
            )
        }
    };

    for run in &runs {
        if let Err(e) = &run.outcome {
            tracing::error!(algorithm = %run.name, error = %e, "measurement failed");
        }
    }

    Ok(RunReport {
        mode: config.mode,
        workers,
        limits,
        runs,
    })
}
