//! repo-snapshot: assemble a single-document snapshot of a project for AI review.

use anyhow::Result;

fn main() -> Result<()> {
    repo_snapshot::cli::run()
}
