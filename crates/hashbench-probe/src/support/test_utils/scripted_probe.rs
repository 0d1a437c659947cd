// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::VecDeque;

use crate::traits::ResourceProbe;

/// [`ResourceProbe`] that replays fixed readings in order.
///
/// Once a script runs out, the probe keeps returning `0.0`.
#[derive(Debug, Default, Clone)]
pub struct ScriptedProbe {
    cpu: VecDeque<f64>,
    rss: VecDeque<f64>,
    cpu_calls: usize,
    cpu_resets: usize,
    rss_calls: usize,
}

impl ScriptedProbe {
    /// Creates a probe replaying `cpu` and `rss` readings.
    pub fn new(cpu: impl IntoIterator<Item = f64>, rss: impl IntoIterator<Item = f64>) -> Self {
        Self {
            cpu: cpu.into_iter().collect(),
            rss: rss.into_iter().collect(),
            cpu_calls: 0,
            cpu_resets: 0,
            rss_calls: 0,
        }
    }

    /// Builds the script for `(cpu_delta, rss_delta)` pairs, one per repetition.
    ///
    /// CPU is read once per repetition, after the window reset. RSS reads a
    /// zero baseline before and the delta after.
    pub fn from_deltas(deltas: &[(f64, f64)]) -> Self {
        let cpu = deltas.iter().map(|&(cpu, _)| cpu);
        let rss = deltas.iter().flat_map(|&(_, rss)| [0.0, rss]);
        Self::new(cpu, rss)
    }

    /// Number of `cpu_percent` calls so far.
    pub fn cpu_calls(&self) -> usize {
        self.cpu_calls
    }

    /// Number of `reset_cpu_window` calls so far.
    pub fn cpu_resets(&self) -> usize {
        self.cpu_resets
    }

    /// Number of `rss_mb` calls so far.
    pub fn rss_calls(&self) -> usize {
        self.rss_calls
    }
}

impl ResourceProbe for ScriptedProbe {
    fn reset_cpu_window(&mut self) {
        self.cpu_resets += 1;
    }

    fn cpu_percent(&mut self) -> f64 {
        self.cpu_calls += 1;
        self.cpu.pop_front().unwrap_or(0.0)
    }

    fn rss_mb(&mut self) -> f64 {
        self.rss_calls += 1;
        self.rss.pop_front().unwrap_or(0.0)
    }
}
