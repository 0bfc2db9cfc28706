// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! panel - render control panel pages from the command line

mod commands;
mod config;
mod manifest;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{blocks, render};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "panel",
    version,
    about = "Panel - block template rendering for hosting control panels"
)]
struct Cli {
    /// Template root directory (overrides the configuration file)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Configuration file [default: $PANEL_CONFIG, then <config dir>/panel/panel.toml]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a page manifest
    Render(render::RenderArgs),
    /// Show the dynamic block tree of a template
    Blocks(blocks::BlocksArgs),
}

fn main() -> ExitCode {
    setup_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::resolve(cli.config, cli.root)?;

    match cli.command {
        Commands::Render(args) => render::handle(args, config),
        Commands::Blocks(args) => blocks::handle(args, config),
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`)
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
