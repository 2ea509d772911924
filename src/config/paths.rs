//! Path management for paycycle
//!
//! Provides XDG-compliant path resolution for the configuration file.
//!
//! ## Path Resolution Order
//!
//! 1. `PAYCYCLE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/paycycle-cli` or `~/.config/paycycle-cli`
//! 3. Windows: `%APPDATA%\paycycle-cli`

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::ForecastError;

/// Manages all paths used by paycycle
#[derive(Debug, Clone)]
pub struct ForecastPaths {
    base_dir: PathBuf,
}

impl ForecastPaths {
    /// Resolve the base directory, honoring the `PAYCYCLE_DATA_DIR` override
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ForecastError> {
        let base_dir = if let Ok(custom) = std::env::var("PAYCYCLE_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = BaseDirs::new().ok_or_else(|| {
                ForecastError::Config("Could not determine home directory".into())
            })?;
            dirs.config_dir().join("paycycle-cli")
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// The base directory (~/.config/paycycle-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Create the base directory if it does not exist
    pub fn ensure_directories(&self) -> Result<(), ForecastError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ForecastError::Io(format!("Failed to create config directory: {}", e)))
    }
}
