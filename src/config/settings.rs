//! User settings for paycycle
//!
//! The settings file names the two calendars the forecaster reads (income
//! on the default calendar, expenses on the bills calendar) and where the
//! local events document lives. Environment variables override file values
//! so the tool can run without a config file at all.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::ForecastPaths;
use crate::error::{ForecastError, ForecastResult};

/// User settings for paycycle
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Calendar holding payday events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_calendar_id: Option<String>,

    /// Calendar holding bill events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bills_calendar_id: Option<String>,

    /// Path to the JSON events document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_file: Option<PathBuf>,
}

impl Settings {
    /// Load settings from disk, or return defaults if no file exists
    pub fn load_or_create(paths: &ForecastPaths) -> ForecastResult<Self> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ForecastError::Io(format!("Failed to read settings file: {}", e)))?;
            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ForecastError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ForecastPaths) -> ForecastResult<()> {
        paths.ensure_directories()?;
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ForecastError::Config(format!("Failed to serialize settings: {}", e)))?;
        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ForecastError::Io(format!("Failed to write settings file: {}", e)))
    }

    /// The payday calendar id: `DEFAULT_CALENDAR_ID` env var, then the file
    pub fn resolve_default_calendar_id(&self) -> ForecastResult<String> {
        resolve("DEFAULT_CALENDAR_ID", self.default_calendar_id.as_deref())
    }

    /// The bills calendar id: `BILLS_CALENDAR_ID` env var, then the file
    pub fn resolve_bills_calendar_id(&self) -> ForecastResult<String> {
        resolve("BILLS_CALENDAR_ID", self.bills_calendar_id.as_deref())
    }

    /// The configured events document path
    ///
    /// The `--events` flag and `PAYCYCLE_EVENTS_FILE` env var take precedence
    /// at the CLI layer; this is the fallback from the config file.
    pub fn resolve_events_file(&self) -> ForecastResult<PathBuf> {
        self.events_file.clone().ok_or_else(|| {
            ForecastError::Config(
                "No events file configured (set PAYCYCLE_EVENTS_FILE or events_file)".into(),
            )
        })
    }
}

fn resolve(env_var: &str, file_value: Option<&str>) -> ForecastResult<String> {
    if let Ok(value) = std::env::var(env_var) {
        return Ok(value);
    }
    file_value
        .map(str::to_owned)
        .ok_or_else(|| ForecastError::Config(format!("{} is required", env_var)))
}
