//! Info command implementation

use anyhow::Result;
use clap::Args;
use console::style;
use std::path::PathBuf;

use crate::config::load_config;
use crate::tree::render_tree;

#[derive(Args)]
pub struct InfoArgs {
    /// Project root to inspect (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Path to config file (repo-snapshot.toml or .repo-snapshot.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Print the effective configuration and what a run would find, without
/// writing the artifact.
pub fn run(args: InfoArgs) -> Result<()> {
    let root = match args.path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let root = root.canonicalize()?;
    if !root.is_dir() {
        anyhow::bail!("Path is not a directory: {}", root.display());
    }

    let config = load_config(&root, args.config.as_deref())?;

    let project_name = root.file_name().and_then(|n| n.to_str()).unwrap_or("");
    println!("Project: {}", project_name);
    println!("Output file: {}", config.output_file);
    println!("Max lines per file: {}", config.max_lines);
    println!("Tree depth: {}", config.tree_depth);
    println!("Collected extensions: {}", config.include_extensions.join(", "));

    println!("{}", style("Top-level files:").bold());
    for name in &config.top_level_files {
        let marker = if root.join(name).exists() { "present" } else { "missing" };
        println!("  {} ({})", name, marker);
    }

    println!("{}", style("Collected directories:").bold());
    for dir in &config.include_dirs {
        let marker = if root.join(dir).exists() { "present" } else { "missing" };
        println!("  {} ({})", dir, marker);
    }

    let tree = render_tree(&root.join(&config.tree_root), config.tree_depth);
    if !tree.is_empty() {
        println!("\n{}", tree);
    }

    Ok(())
}
