//! Configuration file handling
//!
//! Looked up at `--config <path>` or, failing that,
//! `~/.config/hashroot/config.json`. Command-line flags override it.

use crate::hashing::HashConfig;
use crate::tree::TreeShape;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Persistent defaults for the `hashroot` tool
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hash algorithm name, resolved at startup
    pub algorithm: String,
    pub shape: TreeShape,
    /// Digest file used when `--store` is not given
    pub store_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            algorithm: "blake3".into(),
            shape: TreeShape::default(),
            store_path: None,
        }
    }
}

impl Config {
    /// Default location (`<config dir>/hashroot/config.json`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("hashroot").join("config.json"))
    }

    /// Load from an explicit file, which must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Load `explicit` if given, else the default file if present, else defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Resolve the algorithm name into a hash configuration
    pub fn hash_config(&self) -> Result<HashConfig> {
        HashConfig::from_name(&self.algorithm)
    }
}
