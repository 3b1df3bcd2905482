//! Single-file content extraction and Markdown rendering.
//!
//! Each file becomes an [`ExtractedFile`]: a display name, a project-relative
//! path, a language tag derived from the extension, and a [`FileBody`]
//! variant. Open and decode failures are captured in the body rather than
//! returned, so the caller can always render something for the file.

use crate::domain::{ExtractedFile, FileBody, SnapshotConfig};
use crate::error::SnapshotError;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Extract one file, applying the configured line cap.
///
/// The rendered `Location:` path is anchored at `project_root`, not at any
/// intermediate directory; callers must pass the same root the run started
/// from.
pub fn extract_file(path: &Path, project_root: &Path, config: &SnapshotConfig) -> ExtractedFile {
    let name = file_name(path);
    let relative_path = relative_to_root(path, project_root);
    let language = config.language_for(&extension_of(path));

    let body = match read_capped(path, config.max_lines) {
        Ok((text, omitted_lines)) => FileBody::Content { text, omitted_lines },
        Err(err) => {
            warn!("{}", err);
            FileBody::Unreadable { reason: err.to_string() }
        }
    };

    ExtractedFile { name, relative_path, language, body }
}

/// Placeholder for a configured file that is absent from disk. No read is
/// attempted.
pub fn missing_file(name: &str) -> ExtractedFile {
    ExtractedFile {
        name: name.to_string(),
        relative_path: name.to_string(),
        language: String::new(),
        body: FileBody::Missing,
    }
}

/// Render an extracted file as a labeled, fenced Markdown block.
pub fn render(file: &ExtractedFile) -> String {
    match &file.body {
        FileBody::Content { text, omitted_lines } => {
            let mut content = text.clone();
            if *omitted_lines > 0 {
                content.push_str(&format!("\n\n... (truncated, {} more lines)", omitted_lines));
            }
            format!(
                "## {}\n\nLocation: {}\n\n```{}\n{}\n```\n",
                file.name, file.relative_path, file.language, content
            )
        }
        FileBody::Missing => format!("## {}\n\nFile not found.\n", file.name),
        FileBody::Unreadable { reason } => {
            format!("## {}\n\nError reading file: {}\n", file.name, reason)
        }
    }
}

/// Read a file as strict UTF-8 and truncate to `max_lines`, returning the
/// kept text and how many lines were dropped. A line is any segment ended by
/// a newline, plus a trailing unterminated segment if present.
fn read_capped(path: &Path, max_lines: usize) -> Result<(String, usize), SnapshotError> {
    let text = fs::read_to_string(path)
        .map_err(|source| SnapshotError::Read { path: path.to_path_buf(), source })?;

    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    if lines.len() <= max_lines {
        return Ok((text, 0));
    }
    Ok((lines[..max_lines].concat(), lines.len() - max_lines))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn relative_to_root(path: &Path, project_root: &Path) -> String {
    path.strip_prefix(project_root)
        .map(|p| normalize_path(&p.to_string_lossy()))
        .unwrap_or_else(|_| normalize_path(&path.to_string_lossy()))
}

fn extension_of(path: &Path) -> String {
    path.extension().and_then(|e| e.to_str()).map(|e| format!(".{}", e)).unwrap_or_default()
}

fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
