//! Config file loading

use crate::domain::SnapshotConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Load the run configuration for `project_root`.
///
/// An explicit `config_path` must parse or the run fails; an auto-discovered
/// file that fails to parse is logged and the compiled-in defaults are used
/// instead. With neither, defaults apply.
pub fn load_config(project_root: &Path, config_path: Option<&Path>) -> Result<SnapshotConfig> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(project_root),
    };

    let Some(config_file) = discovered else {
        return Ok(SnapshotConfig::default());
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "toml" => parse_toml_config(&content, &config_file),
        "yaml" | "yml" => parse_yaml_config(&content, &config_file),
        other => Err(anyhow::anyhow!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        )),
    };

    match parsed {
        Ok(config) => Ok(config),
        Err(err) => {
            if config_path_provided {
                return Err(err);
            }
            // Auto-discovered: warn and fall back to defaults
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {}",
                config_file.display(),
                err
            );
            Ok(SnapshotConfig::default())
        }
    }
}

/// Parse TOML config, supporting a nested [repo-snapshot] or [snapshot]
/// section alongside the flat form.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<SnapshotConfig> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = if let Some(nested) = raw.get("repo-snapshot") {
        nested.clone()
    } else if let Some(nested) = raw.get("snapshot") {
        nested.clone()
    } else {
        raw
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, supporting the same nested sections as TOML.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<SnapshotConfig> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    let config_val = if let Some(nested) = raw.get("repo-snapshot") {
        nested.clone()
    } else if let Some(nested) = raw.get("snapshot") {
        nested.clone()
    } else {
        raw
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(project_root: &Path) -> Option<PathBuf> {
    let candidates = [
        "repo-snapshot.toml",
        ".repo-snapshot.toml",
        "repo-snapshot.yml",
        ".repo-snapshot.yml",
        "repo-snapshot.yaml",
        ".repo-snapshot.yaml",
    ];

    for candidate in candidates {
        let path = project_root.join(candidate);
        if path.exists() {
            return Some(path);
        }
    }

    None
}
