// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::algorithm::Algorithm;
use crate::hasher::{Hasher, HasherKind};

/// A named hash capability taking part in a benchmark run.
///
/// Names are unique within one run; the runner rejects duplicates.
#[derive(Debug, Clone)]
pub struct AlgorithmSpec {
    name: String,
    hasher: Hasher,
}

impl AlgorithmSpec {
    /// Pairs a name with a hasher.
    pub fn new(name: impl Into<String>, hasher: Hasher) -> Self {
        Self {
            name: name.into(),
            hasher,
        }
    }

    /// Algorithm name as reported in results.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The hash capability.
    pub fn hasher(&self) -> Hasher {
        self.hasher
    }
}

/// Every catalog algorithm, in [`Algorithm::ALL`] order.
pub fn catalog(kind: HasherKind) -> Vec<AlgorithmSpec> {
    resolve(&Algorithm::ALL, kind)
}

/// Specs for the given algorithms, preserving their order.
pub fn resolve(algorithms: &[Algorithm], kind: HasherKind) -> Vec<AlgorithmSpec> {
    algorithms.iter().map(|a| a.spec(kind)).collect()
}
