// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::estimate::{estimate_power, estimate_temperature};
use crate::{MeasurementSample, aggregate};

fn sample(elapsed_secs: f64, cpu_delta: f64, memory_delta_mb: f64) -> MeasurementSample {
    MeasurementSample {
        elapsed_secs,
        cpu_delta,
        memory_delta_mb,
    }
}

#[test]
fn test_aggregate_means_each_field() {
    let samples = [
        sample(0.10, 20.0, 4.0),
        sample(0.20, 40.0, 2.0),
        sample(0.30, 60.0, 0.0),
    ];

    let result = aggregate("sha2", &samples);

    assert_eq!(result.hash, "sha2");
    assert_eq!(result.repetitions, 3);
    assert!((result.speed - 0.20).abs() < 1e-12);
    assert!((result.cpu_usage - 40.0).abs() < 1e-12);
    assert!((result.memory_usage - 2.0).abs() < 1e-12);
    assert_eq!(result.estimated_power_w, estimate_power(result.cpu_usage));
    assert_eq!(result.estimated_temperature_c, estimate_temperature(result.cpu_usage));
    assert_eq!(result.digest, None);
}

#[test]
fn test_aggregate_clamps_negative_deltas_before_averaging() {
    let samples = [sample(0.0, -30.0, -8.0), sample(0.0, 10.0, 2.0)];

    let result = aggregate("md5", &samples);

    // (0 + 10) / 2, not (-30 + 10) / 2
    assert_eq!(result.cpu_usage, 5.0);
    assert_eq!(result.memory_usage, 1.0);
    assert_eq!(result.estimated_power_w, 13.0);
    assert_eq!(result.estimated_temperature_c, 37.5);
}

#[test]
fn test_aggregate_treats_nan_deltas_as_zero() {
    let result = aggregate("xxh3", &[sample(0.0, f64::NAN, f64::NAN)]);

    assert_eq!(result.cpu_usage, 0.0);
    assert_eq!(result.memory_usage, 0.0);
}

#[test]
fn test_aggregate_of_nothing_is_zero() {
    let result = aggregate("blake3", &[]);

    assert_eq!(result.repetitions, 0);
    assert_eq!(result.speed, 0.0);
    assert_eq!(result.cpu_usage, 0.0);
    assert_eq!(result.estimated_power_w, 10.0);
    assert_eq!(result.estimated_temperature_c, 35.0);
}

#[test]
fn test_aggregate_result_serializes_labeled_estimates() {
    let result = aggregate("md5", &[sample(0.5, 10.0, 1.0)]);
    let json = serde_json::to_string(&result).expect("Failed to serialize");

    assert!(json.contains("estimated_power_w"));
    assert!(json.contains("estimated_temperature_c"));
    assert!(!json.contains("digest"));
}

proptest! {
    #[test]
    fn clamped_means_are_never_negative(
        deltas in proptest::collection::vec((-1_000.0f64..1_000.0, -1_000.0f64..1_000.0), 1..50)
    ) {
        let samples: Vec<_> = deltas
            .iter()
            .map(|&(cpu, mem)| sample(0.001, cpu, mem))
            .collect();

        let result = aggregate("sha3", &samples);

        prop_assert!(result.cpu_usage >= 0.0);
        prop_assert!(result.memory_usage >= 0.0);
        prop_assert!(result.estimated_power_w >= 10.0);
        prop_assert!(result.estimated_temperature_c >= 35.0);

        let expected_cpu = deltas.iter().map(|&(cpu, _)| cpu.max(0.0)).sum::<f64>() / deltas.len() as f64;
        prop_assert!((result.cpu_usage - expected_cpu).abs() < 1e-9);
    }
}
