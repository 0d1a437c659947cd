// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! hashbench CLI - hash algorithm benchmarks

use anyhow::Result;
use clap::Parser;
use hashbench::cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Info { format } => commands::info::execute(format),
        Commands::Run(args) => commands::run::execute(&args),
        Commands::Generate {
            dir,
            sizes,
            no_encrypt,
        } => commands::generate::execute(&dir, &sizes, !no_encrypt),
    }
}
