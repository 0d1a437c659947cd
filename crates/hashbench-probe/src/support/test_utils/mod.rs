// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Deterministic probes for exercising the sampler without real hardware.

mod scripted_probe;

pub use scripted_probe::ScriptedProbe;
