//! Library error types.

use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the snapshot pipeline.
///
/// Read failures are converted to in-document placeholders by the callers
/// that encounter them; only `Write` terminates a run.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read {}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write snapshot to {}: {}", path.display(), source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
