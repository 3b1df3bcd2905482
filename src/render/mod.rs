//! Snapshot document assembly and the final write.
//!
//! The assembler is the only stage with a fatal failure mode: every read
//! error earlier in the pipeline has already been converted into placeholder
//! content, so a run either writes the artifact or exits reporting why the
//! write failed.

use crate::collect::collect_directory;
use crate::domain::SnapshotConfig;
use crate::error::SnapshotError;
use crate::extract::{extract_file, missing_file, render};
use crate::tree::render_tree;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Assemble the full snapshot document: metadata block, top-level file
/// section, tree diagram, then one collected section per configured
/// directory, separated by blank lines.
///
/// `timestamp` is pre-rendered by the caller; `None` omits the
/// `Generated on:` line for reproducible output.
pub fn build_document(
    project_root: &Path,
    config: &SnapshotConfig,
    timestamp: Option<&str>,
) -> String {
    let mut sections = vec![
        metadata_block(config, timestamp),
        top_level_section(project_root, config),
        tree_section(project_root, config),
    ];
    for dir in &config.include_dirs {
        debug!("collecting directory {}", dir);
        sections.push(collect_directory(project_root, dir, config));
    }
    sections.join("\n\n")
}

/// Write the assembled document, fully overwriting any previous artifact.
/// This is the run's single fatal step.
pub fn write_snapshot(output_path: &Path, document: &str) -> Result<(), SnapshotError> {
    fs::write(output_path, document)
        .map_err(|source| SnapshotError::Write { path: output_path.to_path_buf(), source })
}

fn metadata_block(config: &SnapshotConfig, timestamp: Option<&str>) -> String {
    let mut block = String::from("# Project Information\n\n");
    if let Some(ts) = timestamp {
        block.push_str(&format!("Generated on: {}\n\n", ts));
    }
    block.push_str(
        "About: This document contains the project structure and source code files.\n\
         It provides a snapshot of the project's implementation and structure at the\n\
         time of generation.\n",
    );
    if let Some(notes) = &config.project_notes {
        block.push_str(&format!("\n## Project Notes\n\n{}\n", notes));
    }
    block
}

/// Every configured top-level name appears exactly once: extracted when the
/// file exists, as a `File not found.` placeholder otherwise.
fn top_level_section(project_root: &Path, config: &SnapshotConfig) -> String {
    let mut parts = vec!["# Top Level Configuration Files\n".to_string()];
    for name in &config.top_level_files {
        let path = project_root.join(name);
        let extracted = if path.exists() {
            extract_file(&path, project_root, config)
        } else {
            missing_file(name)
        };
        parts.push(render(&extracted));
    }
    parts.join("\n")
}

fn tree_section(project_root: &Path, config: &SnapshotConfig) -> String {
    let tree = render_tree(&project_root.join(&config.tree_root), config.tree_depth);
    format!("# Directory Structure\n\n```\n{}\n```\n", tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn metadata_block_with_and_without_timestamp() {
        let cfg = SnapshotConfig::default();
        let with = metadata_block(&cfg, Some("2026-08-07 12:00:00"));
        assert!(with.contains("Generated on: 2026-08-07 12:00:00"));

        let without = metadata_block(&cfg, None);
        assert!(!without.contains("Generated on:"));
        assert!(without.contains("# Project Information"));
    }

    #[test]
    fn metadata_block_appends_project_notes() {
        let mut cfg = SnapshotConfig::default();
        cfg.project_notes = Some("Uses the App Router.".to_string());
        let block = metadata_block(&cfg, None);
        assert!(block.contains("## Project Notes\n\nUses the App Router.\n"));
    }

    #[test]
    fn every_configured_top_level_name_appears_exactly_once() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("package.json"), "{}\n").expect("write");

        let mut cfg = SnapshotConfig::default();
        cfg.top_level_files =
            vec!["package.json".to_string(), "tsconfig.json".to_string(), "README.md".to_string()];

        let section = top_level_section(tmp.path(), &cfg);
        for name in &cfg.top_level_files {
            let heading = format!("## {}", name);
            assert_eq!(section.matches(&heading).count(), 1, "heading for {}", name);
        }
        // Two of the three names are absent from disk.
        assert_eq!(section.matches("File not found.").count(), 2);
        assert!(section.contains("Location: package.json"));
    }

    #[test]
    fn document_orders_sections_and_renders_collected_dirs() {
        let tmp = TempDir::new().expect("tmp");
        let app = tmp.path().join("app");
        fs::create_dir_all(&app).expect("mkdir");
        fs::write(app.join("page.tsx"), "export {}\n").expect("write");

        let mut cfg = SnapshotConfig::default();
        cfg.top_level_files = vec!["package.json".to_string()];

        let document = build_document(tmp.path(), &cfg, None);
        let info = document.find("# Project Information").expect("metadata");
        let top = document.find("# Top Level Configuration Files").expect("top level");
        let tree = document.find("# Directory Structure").expect("tree");
        let collected = document.find("# Directory: app").expect("collected");
        assert!(info < top && top < tree && tree < collected);
        assert!(document.contains("## page.tsx"));
    }

    #[test]
    fn missing_collected_directory_still_produces_a_document() {
        let tmp = TempDir::new().expect("tmp");
        let mut cfg = SnapshotConfig::default();
        cfg.include_dirs = vec!["app".to_string(), "lib".to_string()];

        let document = build_document(tmp.path(), &cfg, None);
        assert_eq!(document.matches("Directory does not exist.").count(), 2);
    }

    #[test]
    fn write_snapshot_overwrites_previous_artifact() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("AI.md");
        fs::write(&path, "old").expect("seed");

        write_snapshot(&path, "new document").expect("write");
        assert_eq!(fs::read_to_string(&path).expect("read"), "new document");
    }

    #[test]
    fn write_snapshot_fails_when_target_is_unwritable() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("missing-dir").join("AI.md");
        let err = write_snapshot(&path, "doc").expect_err("should fail");
        assert!(err.to_string().contains("failed to write snapshot"));
    }
}
