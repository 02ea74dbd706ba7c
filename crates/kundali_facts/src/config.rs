//! Runtime configuration.
//!
//! Every field has a default, so an empty `{}` (or no file at all) is a
//! complete configuration.

use std::path::{Path, PathBuf};

use kundali_base::{DashaLevel, Locale, YoginiStart};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::keywords::KeywordRule;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "KUNDALI_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Locale for labels and justifications.
    pub locale: Locale,
    pub yogini_start: YoginiStart,
    /// Deepest level built for locally computed dasha items.
    pub dasha_depth: DashaLevel,
    /// Keyword rows appended to the built-in tables.
    pub extra_keywords: Vec<KeywordRule>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            yogini_start: YoginiStart::default(),
            dasha_depth: DashaLevel::Pratyantar,
            extra_keywords: Vec::new(),
        }
    }
}

impl CoreConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Load from `explicit`, else from `$KUNDALI_CONFIG`, else defaults.
    ///
    /// An explicitly named file must exist; the environment path is also
    /// treated as explicit once set.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            return Self::from_path(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV).map(PathBuf::from) {
            debug!(path = %path.display(), "loading config from {CONFIG_ENV}");
            return Self::from_path(&path);
        }
        debug!("no config file, using defaults");
        Ok(Self::default())
    }
}
