// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use hashbench_digest::Algorithm;
use hashbench_runner::{ConfigError, ExecutionMode, RunConfig};

/// Default sizes for `generate`, in megabytes.
pub const DEFAULT_SIZES_MB: [u64; 3] = [10, 100, 1000];

/// Default output directory for `generate`.
pub const DEFAULT_UPLOAD_DIR: &str = "upload";

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "hashbench")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log filter directive for the `-v` count.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show CPU and memory figures of this host
    Info {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Benchmark hash algorithms over an input file
    Run(RunArgs),
    /// Write random input files and their AES-256-CBC encrypted copies
    Generate {
        /// Output directory, created if missing
        #[arg(long, default_value = DEFAULT_UPLOAD_DIR)]
        dir: PathBuf,
        /// File sizes in megabytes
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES_MB)]
        sizes: Vec<u64>,
        /// Skip writing encrypted copies
        #[arg(long)]
        no_encrypt: bool,
    },
}

/// Report rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned console table.
    #[default]
    Table,
    /// One JSON object per line.
    Json,
}

/// Flags of `hashbench run`. Each one overrides the config file.
#[derive(Debug, Default, Args)]
pub struct RunArgs {
    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Input file
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Repetitions per algorithm
    #[arg(short = 'n', long)]
    pub repetitions: Option<usize>,
    /// Read the file in blocks of this many bytes with streaming hashers
    #[arg(long)]
    pub block_size: Option<usize>,
    /// single: one algorithm at a time; multi: one worker per CPU
    #[arg(long)]
    pub mode: Option<ExecutionMode>,
    /// Worker count in multi mode
    #[arg(long)]
    pub workers: Option<usize>,
    /// Comma-separated algorithms, in reporting order
    #[arg(long, value_delimiter = ',')]
    pub algorithms: Option<Vec<Algorithm>>,
    /// Pin the process to this CPU
    #[arg(long)]
    pub pin_cpu: Option<usize>,
    /// Cap the address space at this many bytes
    #[arg(long)]
    pub memory_limit: Option<u64>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl RunArgs {
    /// Loads `--config` (or defaults) and applies the flag overrides.
    pub fn to_config(&self) -> Result<RunConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };

        if let Some(file) = &self.file {
            config.file = file.clone();
        }
        if let Some(repetitions) = self.repetitions {
            config.repetitions = repetitions;
        }
        if self.block_size.is_some() {
            config.block_size = self.block_size;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if self.workers.is_some() {
            config.workers = self.workers;
        }
        if let Some(algorithms) = &self.algorithms {
            config.algorithms = algorithms.clone();
        }
        if self.pin_cpu.is_some() {
            config.limits.cpu = self.pin_cpu;
        }
        if self.memory_limit.is_some() {
            config.limits.memory_bytes = self.memory_limit;
        }

        config.validate()?;
        Ok(config)
    }
}
