//! Generate command implementation

use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;
use console::style;
use std::path::PathBuf;
use tracing::debug;

use super::utils::{non_empty, parse_csv};
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::render::{build_document, write_snapshot, TIMESTAMP_FORMAT};

#[derive(Args, Default)]
pub struct GenerateArgs {
    /// Project root to snapshot (defaults to the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Path to config file (repo-snapshot.toml or .repo-snapshot.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output file name, relative to the project root
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<String>,

    /// Maximum lines per file before truncation
    #[arg(long, value_name = "LINES")]
    pub max_lines: Option<usize>,

    /// Max depth for the directory tree diagram
    #[arg(long, value_name = "DEPTH")]
    pub tree_depth: Option<usize>,

    /// Subtree rendered as the tree diagram
    #[arg(long, value_name = "DIR")]
    pub tree_root: Option<String>,

    /// Top-level files to enumerate (repeatable or comma-separated)
    #[arg(long = "top-level-file", value_name = "FILES", value_delimiter = ',', num_args = 1..)]
    pub top_level_files: Vec<String>,

    /// Directories to collect recursively (repeatable or comma-separated)
    #[arg(long = "include-dir", value_name = "DIRS", value_delimiter = ',', num_args = 1..)]
    pub include_dirs: Vec<String>,

    /// Collect only these extensions (comma-separated, e.g., '.ts,.tsx')
    #[arg(short = 'i', long, value_name = "EXTS")]
    pub include_ext: Option<String>,

    /// Omit the timestamp for reproducible output
    #[arg(long)]
    pub no_timestamp: bool,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let root = match args.path {
        Some(path) => path,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };
    let root = root
        .canonicalize()
        .with_context(|| format!("Project root not accessible: {}", root.display()))?;
    if !root.is_dir() {
        anyhow::bail!("Path is not a directory: {}", root.display());
    }

    let config = load_config(&root, args.config.as_deref())?;
    let config = merge_cli_with_config(
        config,
        CliOverrides {
            output_file: args.output,
            max_lines: args.max_lines,
            tree_depth: args.tree_depth,
            tree_root: args.tree_root,
            top_level_files: non_empty(args.top_level_files),
            include_dirs: non_empty(args.include_dirs),
            include_extensions: parse_csv(&args.include_ext),
        },
    );
    debug!("snapshotting {} into {}", root.display(), config.output_file);

    let timestamp =
        (!args.no_timestamp).then(|| Local::now().format(TIMESTAMP_FORMAT).to_string());
    let document = build_document(&root, &config, timestamp.as_deref());

    let output_path = root.join(&config.output_file);
    write_snapshot(&output_path, &document)?;

    println!(
        "{} {} has been generated successfully.",
        style("✅").green(),
        style(&config.output_file).bold()
    );
    Ok(())
}
