// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! info command - show local CPU and memory figures

use anyhow::{Context, Result};
use hashbench::cli::OutputFormat;
use hashbench::probe::system_info;
use hashbench::report::write_system_info;

pub fn execute(format: OutputFormat) -> Result<()> {
    let info = system_info();
    info.log();

    let mut stdout = std::io::stdout().lock();
    write_system_info(&mut stdout, &info, format).context("Failed to write system info")
}
