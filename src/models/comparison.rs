use serde::{Deserialize, Serialize};

use super::enums::Trend;
use super::measurement::MeasuredValue;

/// Outcome of comparing one parameter present in both reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub parameter_name: String,
    pub old_value: MeasuredValue,
    pub new_value: MeasuredValue,
    /// `new - old`, 2 decimals. Numeric pairs only.
    pub change: Option<f64>,
    /// `change / old * 100` (0 when old is 0), 2 decimals. Numeric pairs only.
    pub change_percentage: Option<f64>,
    pub trend: Trend,
    pub unit: Option<String>,
}

impl ComparisonResult {
    /// Magnitude used for ranking critical changes.
    pub fn abs_change_percentage(&self) -> f64 {
        self.change_percentage.map(f64::abs).unwrap_or(0.0)
    }
}
