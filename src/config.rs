// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application settings.
//!
//! Settings are read from the YAML file named by `PLAYBYPLAY_CONFIG`, or
//! `playbyplay.yaml` in the working directory. A missing file means
//! defaults; every field is optional.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the settings path.
pub const CONFIG_ENV: &str = "PLAYBYPLAY_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "playbyplay.yaml";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display names for players 1 to 4
    pub players: [String; 4],
    /// File name proposed when exporting the play-by-play
    pub datasheet_name: String,
    /// Paint the drifting circles behind the panels
    pub animate_background: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            players: ["p1", "p2", "p3", "p4"].map(String::from),
            datasheet_name: "datasheet.txt".to_string(),
            animate_background: true,
        }
    }
}

impl Settings {
    /// Path the settings are read from.
    pub fn config_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Read settings from `path`. A missing file yields defaults.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let yaml = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        // An empty file parses as YAML null.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&yaml).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings, logging and falling back to defaults on error.
    pub fn load() -> Self {
        let path = Self::config_path();
        match Self::from_file(&path) {
            Ok(settings) => {
                log::debug!("Settings loaded from {}", path.display());
                settings
            }
            Err(e) => {
                log::error!("{}", e);
                log::warn!("Using default settings");
                Self::default()
            }
        }
    }
}
