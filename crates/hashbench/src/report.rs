// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Console and JSON-lines rendering of run reports.

use std::io::{self, Write};

use hashbench_cipher::GeneratedFile;
use hashbench_probe::SystemInfo;
use hashbench_runner::{AggregateResult, RunReport};
use serde::Serialize;

use crate::cli::OutputFormat;

const RULE_WIDTH: usize = 88;

/// One JSON line for an algorithm that could not be measured.
#[derive(Debug, Serialize)]
struct FailureLine<'a> {
    hash: &'a str,
    error: String,
}

/// Writes `report` in the requested format.
pub fn write_report<W: Write>(out: &mut W, report: &RunReport, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Table => write_table(out, report),
        OutputFormat::Json => write_json_lines(out, report),
    }
}

/// Aligned table with one row per algorithm, in report order.
/// Failed algorithms get a row with their error instead of figures.
pub fn write_table<W: Write>(out: &mut W, report: &RunReport) -> io::Result<()> {
    writeln!(
        out,
        "Mode: {} ({} worker{})",
        report.mode,
        report.workers,
        if report.workers == 1 { "" } else { "s" }
    )?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(
        out,
        "{:<8} {:>12} {:>9} {:>12} {:>14} {:>16} {:>5}",
        "Hash", "Speed (s)", "CPU (%)", "Memory (MB)", "Est. power (W)", "Est. temp (°C)", "Reps"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    for run in &report.runs {
        match &run.outcome {
            Ok(result) => write_row(out, result)?,
            Err(e) => writeln!(out, "{:<8} FAILED: {}", run.name, e)?,
        }
    }

    Ok(())
}

fn write_row<W: Write>(out: &mut W, result: &AggregateResult) -> io::Result<()> {
    writeln!(
        out,
        "{:<8} {:>12.6} {:>9.2} {:>12.3} {:>14.2} {:>16.2} {:>5}",
        result.hash,
        result.speed,
        result.cpu_usage,
        result.memory_usage,
        result.estimated_power_w,
        result.estimated_temperature_c,
        result.repetitions
    )
}

/// One JSON object per algorithm, one per line.
pub fn write_json_lines<W: Write>(out: &mut W, report: &RunReport) -> io::Result<()> {
    for run in &report.runs {
        match &run.outcome {
            Ok(result) => serde_json::to_writer(&mut *out, result)?,
            Err(e) => serde_json::to_writer(
                &mut *out,
                &FailureLine {
                    hash: &run.name,
                    error: e.to_string(),
                },
            )?,
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Host figures printed before a run and by `hashbench info`.
pub fn write_system_info<W: Write>(out: &mut W, info: &SystemInfo, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, info)?;
            writeln!(out)
        }
        OutputFormat::Table => {
            writeln!(out, "System Info")?;
            writeln!(out, "{}", "=".repeat(40))?;
            writeln!(out, "  Logical CPUs:     {}", info.logical_cpus)?;
            writeln!(out, "  Online CPUs:      {}", info.online_cpus)?;
            writeln!(out, "  Total memory:     {:.2} GB", info.total_memory_gb())?;
            writeln!(out, "  Available memory: {:.2} GB", info.available_memory_gb())?;
            writeln!(out)
        }
    }
}

/// Lists the files written by `hashbench generate`.
pub fn write_generated<W: Write>(out: &mut W, files: &[GeneratedFile]) -> io::Result<()> {
    for file in files {
        match &file.encrypted {
            Some(encrypted) => writeln!(
                out,
                "{:>6} MB  {}  {}",
                file.size_mb,
                file.plain.display(),
                encrypted.display()
            )?,
            None => writeln!(out, "{:>6} MB  {}", file.size_mb, file.plain.display())?,
        }
    }

    Ok(())
}
