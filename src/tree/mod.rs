//! Directory tree rendering.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Render a plain-text tree diagram of `root`, depth-limited and with hidden
/// entries (leading `.`) filtered at every level.
///
/// Within each directory, sub-directories precede files and each group is in
/// ascending lexicographic order, so the output is stable across runs on an
/// unchanged tree. The depth limit is a hard cutoff: entries deeper than
/// `max_depth` (root = 0) are not emitted and no marker replaces them.
///
/// A nonexistent root renders as an empty string; a directory that cannot be
/// listed is logged and its subtree skipped without affecting siblings.
pub fn render_tree(root: &Path, max_depth: usize) -> String {
    if !root.exists() {
        warn!("tree root does not exist: {}", root.display());
        return String::new();
    }

    let mut lines = vec![root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())];
    walk(root, "", 1, max_depth, &mut lines);
    lines.join("\n")
}

fn walk(dir: &Path, prefix: &str, depth: usize, max_depth: usize, lines: &mut Vec<String>) {
    if depth > max_depth {
        return;
    }

    let reader = match fs::read_dir(dir) {
        Ok(reader) => reader,
        Err(err) => {
            warn!("cannot list {}: {}", dir.display(), err);
            return;
        }
    };

    let mut entries: Vec<(bool, String, PathBuf)> = reader
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with('.') {
                return None;
            }
            let is_dir = entry.file_type().ok()?.is_dir();
            Some((is_dir, name, entry.path()))
        })
        .collect();

    // Directories before files, lexicographic within each group.
    entries.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

    let total = entries.len();
    for (idx, (is_dir, name, path)) in entries.into_iter().enumerate() {
        let is_last = idx + 1 == total;
        let connector = if is_last { "└── " } else { "├── " };
        lines.push(format!("{}{}{}", prefix, connector, name));

        if is_dir {
            let continuation = if is_last { "    " } else { "│   " };
            walk(&path, &format!("{}{}", prefix, continuation), depth + 1, max_depth, lines);
        }
    }
}
