//! Core data model: the effective run configuration and per-file results.

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer};
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_MAX_LINES: usize = 600;
pub const DEFAULT_TREE_DEPTH: usize = 5;
pub const DEFAULT_OUTPUT_FILE: &str = "AI.md";

/// Built-in extension → display-language-tag table. Config-level
/// `language_tags` entries take precedence over these.
static LANGUAGE_TAGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (".ts", "typescript"),
        (".tsx", "typescript"),
        (".js", "javascript"),
        (".jsx", "javascript"),
        (".mjs", "javascript"),
        (".json", "json"),
        (".css", "css"),
        (".md", "markdown"),
        (".html", "html"),
        (".py", "python"),
        (".rs", "rust"),
        (".toml", "toml"),
        (".yml", "yaml"),
        (".yaml", "yaml"),
        (".sh", "bash"),
    ])
});

pub fn default_top_level_files() -> Vec<String> {
    [
        "tsconfig.json",
        "tailwind.config.ts",
        "next.config.mjs",
        "package.json",
        ".eslintrc.json",
        "README.md",
        "middleware.ts",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub fn default_include_extensions() -> Vec<String> {
    [".ts", ".tsx", ".js", ".jsx", ".mjs", ".json"].iter().map(|s| s.to_string()).collect()
}

/// Effective configuration for one snapshot run.
///
/// Defaults are compiled in; a discovered or explicit config file and CLI
/// flags may override any field. Loaded once per run, never mutated.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Top-level file names always enumerated in the output, present or not.
    pub top_level_files: Vec<String>,

    /// Directories (relative to the project root) whose matching files are
    /// recursively collected into one section each.
    pub include_dirs: Vec<String>,

    /// Subtree of the project root rendered as the tree diagram.
    pub tree_root: String,

    /// Extension allow-list for the directory collector.
    #[serde(deserialize_with = "deserialize_extensions")]
    pub include_extensions: Vec<String>,

    /// Maximum lines of a file included verbatim before truncation.
    pub max_lines: usize,

    /// Maximum tree-diagram depth (project root = 0).
    pub tree_depth: usize,

    /// Output artifact name, relative to the project root.
    pub output_file: String,

    /// Extension → language-tag overrides, keys including the leading dot.
    pub language_tags: BTreeMap<String, String>,

    /// Free-form notes appended to the metadata block.
    pub project_notes: Option<String>,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            top_level_files: default_top_level_files(),
            include_dirs: vec!["app".to_string()],
            tree_root: "app".to_string(),
            include_extensions: default_include_extensions(),
            max_lines: DEFAULT_MAX_LINES,
            tree_depth: DEFAULT_TREE_DEPTH,
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            language_tags: BTreeMap::new(),
            project_notes: None,
        }
    }
}

impl SnapshotConfig {
    /// Look up the display-language tag for an extension (leading dot
    /// included). Unknown extensions map to an empty tag; the renderer emits
    /// an untagged fence in that case.
    pub fn language_for(&self, extension: &str) -> String {
        let ext = extension.to_ascii_lowercase();
        if let Some(tag) = self.language_tags.get(&ext) {
            return tag.clone();
        }
        LANGUAGE_TAGS.get(ext.as_str()).map(|tag| tag.to_string()).unwrap_or_default()
    }
}

/// Trim, lowercase, and prefix a leading dot on each extension, discarding
/// empty entries.
pub fn normalize_extensions(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|ext| ext.trim())
        .filter(|ext| !ext.is_empty())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            if ext.starts_with('.') {
                ext
            } else {
                format!(".{}", ext)
            }
        })
        .collect()
}

/// Accept either a comma-separated string or a list for `include_extensions`.
fn deserialize_extensions<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    let raw = match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => value.split(',').map(|part| part.to_string()).collect(),
        OneOrMany::Many(values) => values,
    };
    Ok(normalize_extensions(&raw))
}

/// One file as it will appear in the snapshot document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFile {
    /// Display name (the file name component).
    pub name: String,
    /// Path relative to the project root, forward slashes.
    pub relative_path: String,
    /// Display-language tag; empty when the extension is unknown.
    pub language: String,
    pub body: FileBody,
}

/// Per-file outcome. Read failures become document content rather than
/// propagating; one bad file never sacrifices the rest of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileBody {
    /// File content, truncated to the configured line cap. `omitted_lines`
    /// is zero when the file fit under the cap.
    Content { text: String, omitted_lines: usize },
    /// Configured top-level file absent from disk; no read was attempted.
    Missing,
    /// The file could not be opened or decoded as UTF-8.
    Unreadable { reason: String },
}
