//! Edge-list loader settings, optionally read from TOML.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parsing options for tab-separated edge-list files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default = "default_comment_prefix")]
    pub comment_prefix: Option<String>,
    #[serde(default = "default_true")]
    pub trim_fields: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            comment_prefix: default_comment_prefix(),
            trim_fields: default_true(),
        }
    }
}

impl LoaderConfig {
    /// Whether `line` should be skipped as a comment.
    #[must_use]
    pub fn is_comment(&self, line: &str) -> bool {
        self.comment_prefix
            .as_deref()
            .is_some_and(|prefix| !prefix.is_empty() && line.trim_start().starts_with(prefix))
    }
}

/// Read a [`LoaderConfig`] from a TOML file.
///
/// A missing file yields the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_loader_config(path: &Path) -> Result<LoaderConfig> {
    if !path.exists() {
        return Ok(LoaderConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read loader config {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse loader config {}", path.display()))
}

const fn default_delimiter() -> char {
    '\t'
}

fn default_comment_prefix() -> Option<String> {
    Some("#".to_string())
}

const fn default_true() -> bool {
    true
}
