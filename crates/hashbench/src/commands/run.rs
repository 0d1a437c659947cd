// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! run command - benchmark the configured algorithms

use anyhow::{Context, Result, bail};
use hashbench::cli::{OutputFormat, RunArgs};
use hashbench::probe::system_info;
use hashbench::report::{write_report, write_system_info};
use hashbench::runner::run;

/// Runs the benchmark and prints the report.
///
/// # Errors
/// Returns an error if:
/// - The config file cannot be read or is invalid
/// - The run cannot start (worker pool, duplicate algorithms)
/// - Any algorithm failed to measure (after printing the report)
pub fn execute(args: &RunArgs) -> Result<()> {
    let config = args.to_config().context("Invalid run configuration")?;

    let info = system_info();
    info.log();

    let mut stdout = std::io::stdout().lock();
    if args.format == OutputFormat::Table {
        write_system_info(&mut stdout, &info, args.format).context("Failed to write system info")?;
    }

    let report = run(&config).context("Benchmark run failed")?;

    write_report(&mut stdout, &report, args.format).context("Failed to write report")?;

    let failed = report.failures().count();
    if failed > 0 {
        bail!("{failed} of {} algorithm(s) failed", report.runs.len());
    }

    Ok(())
}
