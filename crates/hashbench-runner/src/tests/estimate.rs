// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::estimate::{
    BASE_POWER_W, BASE_TEMPERATURE_C, estimate_power, estimate_temperature,
};

#[test]
fn test_idle_estimates_are_base_values() {
    assert_eq!(estimate_power(0.0), BASE_POWER_W);
    assert_eq!(estimate_temperature(0.0), BASE_TEMPERATURE_C);
}

#[test]
fn test_full_core_estimates() {
    assert_eq!(estimate_power(100.0), 70.0);
    assert_eq!(estimate_temperature(100.0), 85.0);
}

proptest! {
    #[test]
    fn power_and_temperature_follow_the_linear_model(cpu in 0.0f64..10_000.0) {
        prop_assert_eq!(estimate_power(cpu), 10.0 + 0.6 * cpu);
        prop_assert_eq!(estimate_temperature(cpu), 35.0 + 0.5 * cpu);
    }
}
