//! Remembered window settings, stored as YAML.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Settings location, relative to the working directory.
pub const SETTINGS_FILE: &str = ".kyc/settings.yaml";

const DEFAULT_CSV: &str = "kyc_data.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub csv_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV),
        }
    }
}

impl Settings {
    /// Load settings; a missing file gives the defaults.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(AppError::SettingsRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_yaml::from_str(&content).map_err(|source| AppError::SettingsFormat {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`Settings::load`], but falls back to defaults on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|err| {
            warn!(error = %err, "using default settings");
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        let write_err = |source| AppError::SettingsWrite {
            path: path.to_path_buf(),
            source,
        };
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            std::fs::create_dir_all(dir).map_err(write_err)?;
        }

        let content = serde_yaml::to_string(self).map_err(|source| AppError::SettingsFormat {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, content).map_err(write_err)
    }
}
