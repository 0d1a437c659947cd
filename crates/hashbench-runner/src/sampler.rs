// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Performance sampler.
//!
//! Each repetition snapshots RSS, opens a fresh CPU window, runs the hasher
//! once over the full input, then reads the window and RSS again:
//!
//! ```text
//! rss0, reset cpu, t0 -> hash(input) -> t1, cpu, rss1
//! ```
//!
//! The CPU window starts from a zero baseline, so a sample's CPU value is the
//! usage over the hash alone. Input loading and earlier repetitions never
//! leak into it.
//!
//! The same [`ResourceProbe`] policy is used for every algorithm in a run.

use std::fs::File;
use std::hint::black_box;
use std::path::Path;
use std::time::Instant;

use hashbench_digest::{AlgorithmSpec, DEFAULT_BLOCK_SIZE, Digest, Hasher};
use hashbench_probe::{ResourceProbe, ThreadProbe};

use crate::error::BenchError;
use crate::sample::{AggregateResult, MeasurementSample, aggregate};
use crate::source::InputSource;

/// Raw per-repetition samples plus the final digest.
#[derive(Debug, Clone)]
pub struct Measurement {
    /// One sample per repetition, in order.
    pub samples: Vec<MeasurementSample>,

    /// Digest from the last repetition.
    pub digest: Digest,
}

/// Input resolved for the measurement loop.
enum Prepared<'a> {
    Borrowed(&'a [u8]),
    Owned(Vec<u8>),
    Stream(&'a Path),
}

impl<'a> Prepared<'a> {
    /// Bulk hashers read files into memory once, outside the timed region.
    fn new(source: &'a InputSource, hasher: Hasher) -> Result<Self, BenchError> {
        match (source, hasher) {
            (InputSource::Memory { data, .. }, _) => Ok(Prepared::Borrowed(&data[..])),
            (InputSource::File { path, .. }, Hasher::Bulk(_)) => {
                let data = std::fs::read(path).map_err(|e| BenchError::io(path, e))?;
                Ok(Prepared::Owned(data))
            }
            (InputSource::File { path, .. }, Hasher::Streaming(_)) => Ok(Prepared::Stream(path)),
        }
    }

    fn digest(&self, hasher: Hasher, block_size: usize) -> Result<Digest, BenchError> {
        match self {
            Prepared::Borrowed(data) => Ok(hasher.digest_chunked(data, block_size)),
            Prepared::Owned(data) => Ok(hasher.digest_chunked(data, block_size)),
            Prepared::Stream(path) => {
                let file = File::open(path).map_err(|e| BenchError::io(*path, e))?;
                hasher
                    .digest_reader(file, block_size)
                    .map_err(|e| BenchError::io(*path, e))
            }
        }
    }
}

/// Runs `spec` over `source` `repetitions` times and returns the raw samples.
///
/// # Errors
///
/// - [`BenchError::InvalidRepetitions`] if `repetitions` is zero
/// - [`BenchError::Io`] if the input file cannot be opened or read
pub fn collect_samples<P: ResourceProbe>(
    spec: &AlgorithmSpec,
    source: &InputSource,
    repetitions: usize,
    probe: &mut P,
) -> Result<Measurement, BenchError> {
    if repetitions == 0 {
        return Err(BenchError::InvalidRepetitions);
    }

    let hasher = spec.hasher();
    let block_size = source.block_size().unwrap_or(DEFAULT_BLOCK_SIZE);
    let input = Prepared::new(source, hasher)?;

    let mut samples = Vec::with_capacity(repetitions);
    let mut digest = None;

    for repetition in 0..repetitions {
        let start_mem = probe.rss_mb();
        probe.reset_cpu_window();
        let start = Instant::now();

        let out = black_box(input.digest(hasher, block_size)?);

        let elapsed = start.elapsed();
        let cpu = probe.cpu_percent();
        let end_mem = probe.rss_mb();

        let sample = MeasurementSample {
            elapsed_secs: elapsed.as_secs_f64(),
            cpu_delta: cpu,
            memory_delta_mb: end_mem - start_mem,
        };
        tracing::debug!(
            algorithm = spec.name(),
            repetition,
            elapsed_secs = sample.elapsed_secs,
            cpu_delta = sample.cpu_delta,
            memory_delta_mb = sample.memory_delta_mb,
            "repetition done"
        );

        samples.push(sample);
        digest = Some(out);
    }

    let digest = digest.ok_or(BenchError::InvalidRepetitions)?;
    Ok(Measurement { samples, digest })
}

/// [`collect_samples`] followed by [`aggregate`].
pub fn measure_with_probe<P: ResourceProbe>(
    spec: &AlgorithmSpec,
    source: &InputSource,
    repetitions: usize,
    probe: &mut P,
) -> Result<AggregateResult, BenchError> {
    let measurement = collect_samples(spec, source, repetitions, probe)?;

    let mut result = aggregate(spec.name(), &measurement.samples);
    result.digest = Some(measurement.digest.to_hex());

    tracing::info!(
        algorithm = spec.name(),
        speed = result.speed,
        cpu_usage = result.cpu_usage,
        memory_usage = result.memory_usage,
        "measurement done"
    );

    Ok(result)
}

/// Measures `spec` with a fresh [`ThreadProbe`] on the calling thread.
pub fn measure(
    spec: &AlgorithmSpec,
    source: &InputSource,
    repetitions: usize,
) -> Result<AggregateResult, BenchError> {
    let mut probe = ThreadProbe::new();
    measure_with_probe(spec, source, repetitions, &mut probe)
}
