use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Locale strings used between label parts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Separators {
    /// Between a member and its post-qualifier: `bar - Foo`
    pub concat: String,
    /// Between list entries: `(int, String)`
    pub comma: String,
    /// Before an appended type: `bar : int`
    pub declaration: String,
    /// Variadic marker and elided parameter lists: `(...)`
    pub ellipsis: String,
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            concat: " - ".to_string(),
            comma: ", ".to_string(),
            declaration: " : ".to_string(),
            ellipsis: "...".to_string(),
        }
    }
}

impl Separators {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("separators file is not valid JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read separators from {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("in {}", path.display()))
    }

    /// Separators from the user's config directory, or the defaults if none are configured.
    pub fn discover() -> Result<Self> {
        match user_config_path() {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "loading separators");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// `<config dir>/labeler/separators.json`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("labeler").join("separators.json"))
}
