// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use serde::{Deserialize, Serialize};

use crate::estimate::{estimate_power, estimate_temperature};

/// Raw observations from one repetition. Deltas may be negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSample {
    /// Wall time of the hash call, in seconds.
    pub elapsed_secs: f64,

    /// CPU percent after minus CPU percent before.
    pub cpu_delta: f64,

    /// RSS after minus RSS before, in megabytes.
    pub memory_delta_mb: f64,
}

/// Per-algorithm averages over all repetitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Algorithm name.
    pub hash: String,

    /// Mean elapsed seconds per repetition.
    pub speed: f64,

    /// Mean CPU percent delta, negatives clamped to zero.
    pub cpu_usage: f64,

    /// Mean RSS delta in megabytes, negatives clamped to zero.
    pub memory_usage: f64,

    /// Estimated power draw in watts. Not a measurement.
    pub estimated_power_w: f64,

    /// Estimated CPU temperature in degrees Celsius. Not a measurement.
    pub estimated_temperature_c: f64,

    /// Number of samples averaged.
    pub repetitions: usize,

    /// Hex digest from the last repetition, for display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

/// Sampling noise can drive a delta below zero; such readings count as zero.
/// NaN also reads as zero.
fn clamp_delta(delta: f64) -> f64 {
    if delta > 0.0 { delta } else { 0.0 }
}

/// Averages `samples` into an [`AggregateResult`] named `hash`.
///
/// CPU and memory deltas are clamped per sample before averaging; power and
/// temperature are derived from the clamped mean CPU usage. An empty slice
/// yields zero means.
pub fn aggregate(hash: &str, samples: &[MeasurementSample]) -> AggregateResult {
    let n = samples.len();
    let mean = |f: fn(&MeasurementSample) -> f64| {
        if n == 0 {
            0.0
        } else {
            samples.iter().map(f).sum::<f64>() / n as f64
        }
    };

    let speed = mean(|s| s.elapsed_secs);
    let cpu_usage = mean(|s| clamp_delta(s.cpu_delta));
    let memory_usage = mean(|s| clamp_delta(s.memory_delta_mb));

    AggregateResult {
        hash: hash.to_string(),
        speed,
        cpu_usage,
        memory_usage,
        estimated_power_w: estimate_power(cpu_usage),
        estimated_temperature_c: estimate_temperature(cpu_usage),
        repetitions: n,
        digest: None,
    }
}
