//! Command-line interface for repo-snapshot
//!
//! Provides `generate`, `info` and `completions` subcommands; invoking the
//! binary with no arguments runs `generate` against the current directory.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod completions;
mod generate;
mod info;
mod utils;

/// Assemble a single-document snapshot of a project's structure and source files
#[derive(Parser)]
#[command(name = "repo-snapshot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the snapshot document (the default when no subcommand is given)
    Generate(generate::GenerateArgs),

    /// Show the effective configuration and tree without writing the snapshot
    Info(info::InfoArgs),

    /// Generate shell completion scripts
    Completions(completions::CompletionsArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Some(Commands::Generate(args)) => generate::run(args),
        Some(Commands::Info(args)) => info::run(args),
        Some(Commands::Completions(args)) => completions::run(args),
        None => generate::run(generate::GenerateArgs::default()),
    }
}
