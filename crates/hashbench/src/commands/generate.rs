// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! generate command - write random inputs and encrypted copies

use std::path::Path;

use anyhow::{Context, Result};
use hashbench::cipher::generate_test_files;
use hashbench::report::write_generated;

pub fn execute(dir: &Path, sizes_mb: &[u64], encrypt: bool) -> Result<()> {
    tracing::info!(dir = ?dir, ?sizes_mb, encrypt, "Generating test files");

    let files = generate_test_files(dir, sizes_mb, encrypt)
        .with_context(|| format!("Failed to generate test files in {}", dir.display()))?;

    let mut stdout = std::io::stdout().lock();
    write_generated(&mut stdout, &files).context("Failed to write file list")
}
