use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::PolicyViewError;

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct SettingsFile {
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Table appearance
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplaySettings {
    /// Highlight the header and the State column with ANSI colors
    pub color: bool,
    /// Truncation width of the From/To zone columns
    pub zone_width: usize,
    /// Truncation width of the address columns
    pub address_width: usize,
    /// Truncation width of the service column
    pub service_width: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            color: true,
            zone_width: 15,
            address_width: 25,
            service_width: 15,
        }
    }
}

impl SettingsFile {
    /// Load settings file
    pub fn load(path: &Path) -> Result<Self, PolicyViewError> {
        let content = fs::read_to_string(path).map_err(|source| PolicyViewError::ConfigRead {
            path: PathBuf::from(path),
            source,
        })?;
        toml::from_str(&content).map_err(|source| PolicyViewError::SettingsParse {
            path: PathBuf::from(path),
            source,
        })
    }
}
