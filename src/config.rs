use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::comparison::types::ComparisonError;

/// Application-level constants
pub const APP_NAME: &str = "Labtrend";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "labtrend=info"
}

/// Numeric thresholds for trend classification and critical-change ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Relative change (percent of the old value) below which a pair is stable.
    pub stable_percent_threshold: f64,
    /// Absolute change below which a pair with a zero baseline is stable.
    pub stable_absolute_threshold: f64,
    /// Relative change above which a non-worsened pair is still critical.
    pub critical_percent_threshold: f64,
    /// Maximum number of critical changes kept in the summary.
    pub max_critical_changes: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            stable_percent_threshold: 2.0,
            stable_absolute_threshold: 0.1,
            critical_percent_threshold: 20.0,
            max_critical_changes: 10,
        }
    }
}

impl EngineSettings {
    /// Load settings from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ComparisonError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            ComparisonError::SettingsLoad(path.display().to_string(), e.to_string())
        })?;
        Self::from_json(&path.display().to_string(), &json)
    }

    pub fn from_json(source: &str, json: &str) -> Result<Self, ComparisonError> {
        serde_json::from_str(json)
            .map_err(|e| ComparisonError::SettingsParse(source.into(), e.to_string()))
    }
}
