//! Export configuration persistence.
//!
//! Stores CLI export preferences (default output format, JS indentation) as
//! JSON at `~/.config/webgpu-enums/config.json`, or wherever
//! `WEBGPU_ENUMS_CONFIG` points. Missing or unreadable files fall back to
//! defaults, which reproduce the persisted table layout exactly.

use crate::error::Result;
use crate::format::MAX_INDENT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "WEBGPU_ENUMS_CONFIG";

/// Default config file path.
fn default_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("webgpu-enums")
        .join("config.json")
}

/// Output format for exported tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// JavaScript object-literal body (the persisted layout).
    #[default]
    Js,
    /// JSON object of category → names, `null` for unnamed slots.
    Json,
}

/// Persisted export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default)]
    pub format: ExportFormat,
    /// Indentation of category lines; variant lines get two more spaces.
    #[serde(default = "default_indent")]
    pub indent: usize,
    /// Path the config was loaded from (not serialized).
    #[serde(skip)]
    path: PathBuf,
}

fn default_indent() -> usize { 4 }

impl Default for ExportConfig {
    fn default() -> Self {
        Self::defaults_at(&default_path())
    }
}

impl ExportConfig {
    fn defaults_at(path: &Path) -> Self {
        Self {
            format: ExportFormat::default(),
            indent: default_indent(),
            path: path.to_path_buf(),
        }
    }

    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(&default_path())
    }

    /// Load from `path`, falling back to defaults on any error.
    pub fn load_from(path: &Path) -> Self {
        let mut config = match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed config {}: {}", path.display(), e);
                Self::defaults_at(path)
            }),
            Err(_) => Self::defaults_at(path),
        };
        if config.indent > MAX_INDENT {
            tracing::warn!(
                "Ignoring indent {} in {} (max {})",
                config.indent,
                path.display(),
                MAX_INDENT
            );
            config.indent = default_indent();
        }
        config.path = path.to_path_buf();
        config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist current config to disk.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&self.path, json)?;
        tracing::debug!("Saved config to {}", self.path.display());
        Ok(())
    }
}
