//! Recursive collection of matching files under a configured directory.

use crate::domain::SnapshotConfig;
use crate::extract::{extract_file, render};
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Collect every file under `relative_dir` whose extension is on the
/// configured allow-list and concatenate the extracted renderings under one
/// section heading.
///
/// The walk is exhaustive: no depth limit, and hidden entries are NOT
/// filtered here (only the tree diagram hides them). Files are visited in
/// depth-first directory-listing order, which is not sorted — reruns on a
/// tree whose directory listing order changed may order sections differently.
///
/// A missing target directory yields a placeholder section; unwalkable
/// entries mid-walk are logged and skipped.
pub fn collect_directory(
    project_root: &Path,
    relative_dir: &str,
    config: &SnapshotConfig,
) -> String {
    let target = project_root.join(relative_dir);
    if !target.exists() {
        return format!("# Directory: {}\n\nDirectory does not exist.\n", relative_dir);
    }

    let mut rendered = Vec::new();
    for entry in WalkDir::new(&target) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable entry under {}: {}", relative_dir, err);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if !matches_extension(entry.path(), &config.include_extensions) {
            continue;
        }
        debug!("collecting {}", entry.path().display());
        rendered.push(render(&extract_file(entry.path(), project_root, config)));
    }

    format!("# Directory: {}\n\n{}", relative_dir, rendered.join("\n"))
}

fn matches_extension(path: &Path, allow_list: &[String]) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => {
            let ext = format!(".{}", ext.to_ascii_lowercase());
            allow_list.iter().any(|allowed| allowed == &ext)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_directory_yields_placeholder_section() {
        let tmp = TempDir::new().expect("tmp");
        let cfg = SnapshotConfig::default();
        let section = collect_directory(tmp.path(), "app", &cfg);
        assert_eq!(section, "# Directory: app\n\nDirectory does not exist.\n");
    }

    #[test]
    fn only_allow_listed_extensions_are_collected() {
        let tmp = TempDir::new().expect("tmp");
        let app = tmp.path().join("app");
        fs::create_dir_all(app.join("lib")).expect("mkdir");
        fs::write(app.join("page.tsx"), "export {}\n").expect("write page");
        fs::write(app.join("lib/data.json"), "{}\n").expect("write json");
        fs::write(app.join("styles.css"), "body {}\n").expect("write css");
        fs::write(app.join("notes.txt"), "notes\n").expect("write txt");

        let cfg = SnapshotConfig::default();
        let section = collect_directory(tmp.path(), "app", &cfg);

        assert!(section.starts_with("# Directory: app\n\n"));
        assert!(section.contains("## page.tsx"));
        assert!(section.contains("## data.json"));
        assert!(section.contains("Location: app/lib/data.json"));
        assert!(!section.contains("styles.css"));
        assert!(!section.contains("notes.txt"));
    }

    #[test]
    fn extensionless_files_are_not_collected() {
        let tmp = TempDir::new().expect("tmp");
        let app = tmp.path().join("app");
        fs::create_dir_all(&app).expect("mkdir");
        fs::write(app.join("Makefile"), "all:\n").expect("write makefile");
        fs::write(app.join(".env"), "SECRET=1\n").expect("write env");

        let cfg = SnapshotConfig::default();
        let section = collect_directory(tmp.path(), "app", &cfg);
        assert!(!section.contains("Makefile"));
        assert!(!section.contains(".env"));
    }

    #[test]
    fn hidden_directories_are_still_walked() {
        // Unlike the tree diagram, the collector filters on extension only.
        let tmp = TempDir::new().expect("tmp");
        let app = tmp.path().join("app");
        fs::create_dir_all(app.join(".internal")).expect("mkdir hidden");
        fs::write(app.join(".internal/config.json"), "{}\n").expect("write hidden json");

        let cfg = SnapshotConfig::default();
        let section = collect_directory(tmp.path(), "app", &cfg);
        assert!(section.contains("Location: app/.internal/config.json"));
    }

    #[test]
    fn unreadable_file_becomes_inline_placeholder_without_affecting_others() {
        let tmp = TempDir::new().expect("tmp");
        let app = tmp.path().join("app");
        fs::create_dir_all(&app).expect("mkdir");
        fs::write(app.join("good.ts"), "export {}\n").expect("write good");
        fs::write(app.join("bad.ts"), [0xff, 0xfe, 0x00]).expect("write bad");

        let cfg = SnapshotConfig::default();
        let section = collect_directory(tmp.path(), "app", &cfg);
        assert!(section.contains("## good.ts"));
        assert!(section.contains("Error reading file:"));
    }
}
