// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Power and temperature *estimates* derived from CPU usage.
//!
//! These are declared linear models, not telemetry. Nothing here reads a
//! sensor.

/// Idle power draw assumed by the model, in watts.
pub const BASE_POWER_W: f64 = 10.0;

/// Additional watts per percent of CPU usage.
pub const POWER_W_PER_CPU_PERCENT: f64 = 0.6;

/// Idle temperature assumed by the model, in degrees Celsius.
pub const BASE_TEMPERATURE_C: f64 = 35.0;

/// Additional degrees Celsius per percent of CPU usage.
pub const TEMPERATURE_C_PER_CPU_PERCENT: f64 = 0.5;

/// Estimated power draw in watts for `cpu_usage` percent.
pub fn estimate_power(cpu_usage: f64) -> f64 {
    BASE_POWER_W + cpu_usage * POWER_W_PER_CPU_PERCENT
}

/// Estimated temperature in degrees Celsius for `cpu_usage` percent.
pub fn estimate_temperature(cpu_usage: f64) -> f64 {
    BASE_TEMPERATURE_C + cpu_usage * TEMPERATURE_C_PER_CPU_PERCENT
}
