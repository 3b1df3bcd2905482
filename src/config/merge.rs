//! CLI-over-config merging.

use crate::domain::{normalize_extensions, SnapshotConfig};

/// CLI flag values that may override a loaded config. `None` (or an empty
/// list) leaves the corresponding field untouched.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub output_file: Option<String>,
    pub max_lines: Option<usize>,
    pub tree_depth: Option<usize>,
    pub tree_root: Option<String>,
    pub top_level_files: Option<Vec<String>>,
    pub include_dirs: Option<Vec<String>>,
    pub include_extensions: Option<Vec<String>>,
}

pub fn merge_cli_with_config(
    mut config: SnapshotConfig,
    overrides: CliOverrides,
) -> SnapshotConfig {
    if let Some(output_file) = overrides.output_file {
        config.output_file = output_file;
    }
    if let Some(max_lines) = overrides.max_lines {
        config.max_lines = max_lines;
    }
    if let Some(tree_depth) = overrides.tree_depth {
        config.tree_depth = tree_depth;
    }
    if let Some(tree_root) = overrides.tree_root {
        config.tree_root = tree_root;
    }
    if let Some(top_level_files) = overrides.top_level_files {
        config.top_level_files = top_level_files;
    }
    if let Some(include_dirs) = overrides.include_dirs {
        config.include_dirs = include_dirs;
    }
    if let Some(extensions) = overrides.include_extensions {
        config.include_extensions = normalize_extensions(&extensions);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_overrides_leave_config_untouched() {
        let merged = merge_cli_with_config(SnapshotConfig::default(), CliOverrides::default());
        let defaults = SnapshotConfig::default();
        assert_eq!(merged.max_lines, defaults.max_lines);
        assert_eq!(merged.include_dirs, defaults.include_dirs);
        assert_eq!(merged.output_file, defaults.output_file);
    }

    #[test]
    fn overrides_replace_loaded_values() {
        let overrides = CliOverrides {
            output_file: Some("SNAPSHOT.md".to_string()),
            max_lines: Some(100),
            tree_depth: Some(2),
            tree_root: Some("src".to_string()),
            top_level_files: Some(vec!["Cargo.toml".to_string()]),
            include_dirs: Some(vec!["src".to_string()]),
            include_extensions: Some(vec!["rs".to_string(), ".toml".to_string()]),
        };
        let merged = merge_cli_with_config(SnapshotConfig::default(), overrides);
        assert_eq!(merged.output_file, "SNAPSHOT.md");
        assert_eq!(merged.max_lines, 100);
        assert_eq!(merged.tree_depth, 2);
        assert_eq!(merged.tree_root, "src");
        assert_eq!(merged.top_level_files, vec!["Cargo.toml".to_string()]);
        assert_eq!(merged.include_dirs, vec!["src".to_string()]);
        assert_eq!(merged.include_extensions, vec![".rs".to_string(), ".toml".to_string()]);
    }
}
