//! Runtime settings.
//!
//! Settings are read from the JSON file named by the `FORMGUARD_CONFIG`
//! environment variable (a `.env` file is honoured by the binary). Every key
//! is optional.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::consts::CONFIG_ENV_VAR;
use crate::utils::localization::TableLocalizer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Log to this file instead of stderr.
    pub log_file: Option<PathBuf>,
    pub log_level: String,
    /// Message key -> displayed text.
    pub translations: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: None,
            log_level: "info".to_string(),
            translations: HashMap::new(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Invalid settings file {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let settings = serde_json::from_str(raw).context("Failed to parse settings")?;
        Ok(settings)
    }

    /// Loads the file named by the environment, or the defaults when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| anyhow!("Invalid log level {:?}", self.log_level))
    }

    pub fn localizer(&self) -> TableLocalizer {
        TableLocalizer::new(self.translations.clone())
    }
}
