//! repo-snapshot: Assemble a single-document snapshot of a project
//!
//! This tool walks a project directory and produces one consolidated Markdown
//! document describing the project's structure and the contents of a selected
//! subset of its source files, sized for consumption by an AI assistant.
//!
//! The pipeline has four stages: extracting individual files (with per-file
//! line truncation and language tagging), rendering a directory tree diagram,
//! collecting every matching file under the configured directories, and
//! assembling the sections into the final artifact. Read failures along the
//! way are embedded in the document as placeholder text; only a failure to
//! write the final artifact aborts a run.

pub mod cli;
pub mod collect;
pub mod config;
pub mod domain;
pub mod error;
pub mod extract;
pub mod render;
pub mod tree;

pub use domain::{ExtractedFile, FileBody, SnapshotConfig};
pub use error::SnapshotError;
