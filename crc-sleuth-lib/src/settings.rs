//! Optional user settings: `~/.config/crc-sleuth/settings.toml`.
//!
//! Every field is optional. Command-line flags override whatever is set here.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::registry::AlgorithmRegistry;

/// Canonical path to the settings file: `~/.config/crc-sleuth/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("crc-sleuth").join("settings.toml")
}

/// Parsed settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub search: SearchSettings,
}

/// The `[search]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Default `--limit`.
    pub threshold: Option<usize>,
    /// Default `--skip`.
    pub skip_single_byte: bool,
    /// Restrict the registry to these algorithm names.
    pub algorithms: Option<Vec<String>>,
}

impl Settings {
    /// Load from [`settings_path`]. A missing file yields defaults.
    pub fn load() -> Result<Self, SearchError> {
        Self::load_from(&settings_path())
    }

    /// Load from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, SearchError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                log::debug!("Loading settings from {}", path.display());
                Self::from_toml_str(&contents)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, SearchError> {
        toml::from_str(contents).map_err(|e| SearchError::settings(e.to_string()))
    }

    /// Pretty-printed TOML for display.
    pub fn to_toml_string(&self) -> Result<String, SearchError> {
        toml::to_string_pretty(self).map_err(|e| SearchError::settings(e.to_string()))
    }

    /// Registry for these settings: the configured subset, or every
    /// built-in algorithm when none is configured.
    pub fn registry(&self) -> Result<AlgorithmRegistry, SearchError> {
        match &self.search.algorithms {
            Some(names) => AlgorithmRegistry::select(names.as_slice()),
            None => Ok(AlgorithmRegistry::builtin()),
        }
    }
}
