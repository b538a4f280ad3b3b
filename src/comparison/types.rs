use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    Category, ComparisonResult, MeasuredValue, Measurement, OverallTrend, Severity, Trend,
};

// ---------------------------------------------------------------------------
// CategoryBreakdown
// ---------------------------------------------------------------------------

/// Per-category tally. The `stable` bucket absorbs both `stable` and
/// `changed` trends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub total: usize,
    pub improved: usize,
    pub worsened: usize,
    pub stable: usize,
    pub parameters: Vec<String>,
}

impl CategoryBreakdown {
    pub fn empty(category: Category) -> Self {
        Self {
            category,
            total: 0,
            improved: 0,
            worsened: 0,
            stable: 0,
            parameters: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, result: &ComparisonResult) {
        self.total += 1;
        self.parameters.push(result.parameter_name.clone());
        match result.trend {
            Trend::Improved => self.improved += 1,
            Trend::Worsened => self.worsened += 1,
            Trend::Stable | Trend::Changed => self.stable += 1,
            Trend::Increased | Trend::Decreased => {}
        }
    }
}

// ---------------------------------------------------------------------------
// CriticalChange
// ---------------------------------------------------------------------------

/// A parameter that worsened or moved by more than the critical percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalChange {
    pub parameter: String,
    pub old_value: MeasuredValue,
    pub new_value: MeasuredValue,
    pub change: Option<f64>,
    pub change_percentage: Option<f64>,
    pub trend: Trend,
    pub unit: Option<String>,
    pub severity: Severity,
}

impl CriticalChange {
    pub fn abs_change_percentage(&self) -> f64 {
        self.change_percentage.map(f64::abs).unwrap_or(0.0)
    }
}

// ---------------------------------------------------------------------------
// Visualization payload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TrendDistribution {
    pub improved: usize,
    pub worsened: usize,
    pub stable: usize,
    pub changed: usize,
    pub increased: usize,
    pub decreased: usize,
}

impl TrendDistribution {
    pub fn from_results(results: &[ComparisonResult]) -> Self {
        let mut dist = Self::default();
        for result in results {
            match result.trend {
                Trend::Improved => dist.improved += 1,
                Trend::Worsened => dist.worsened += 1,
                Trend::Stable => dist.stable += 1,
                Trend::Changed => dist.changed += 1,
                Trend::Increased => dist.increased += 1,
                Trend::Decreased => dist.decreased += 1,
            }
        }
        dist
    }

    pub fn total(&self) -> usize {
        self.improved + self.worsened + self.stable + self.changed + self.increased + self.decreased
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: f64,
    pub improved: usize,
    pub worsened: usize,
    pub stable: usize,
    pub total: usize,
}

/// One row per comparison, for external charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub parameter: String,
    pub old_value: MeasuredValue,
    pub new_value: MeasuredValue,
    pub trend: Trend,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VisualizationData {
    pub trend_distribution: TrendDistribution,
    pub category_scores: Vec<CategoryScore>,
    pub timeline_data: Vec<TimelineEntry>,
}

// ---------------------------------------------------------------------------
// Summary & ComparisonReport
// ---------------------------------------------------------------------------

/// Aggregate view of a comparison run. Purely a projection of the
/// comparison results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_parameters: usize,
    pub improved: usize,
    pub worsened: usize,
    pub stable: usize,
    pub changed: usize,
    pub improvement_rate: f64,
    pub health_score: f64,
    pub overall_trend: OverallTrend,
    pub category_breakdown: Vec<CategoryBreakdown>,
    pub critical_changes: Vec<CriticalChange>,
    pub insights: Vec<String>,
    pub visualization_data: VisualizationData,
}

/// Results plus summary, as handed to persistence and presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub comparisons: Vec<ComparisonResult>,
    pub summary: Summary,
}

// ---------------------------------------------------------------------------
// ComparisonError
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum ComparisonError {
    #[error("Reference data load failed ({0}): {1}")]
    ReferenceDataLoad(String, String),

    #[error("Reference data parse failed ({0}): {1}")]
    ReferenceDataParse(String, String),

    #[error("Settings load failed ({0}): {1}")]
    SettingsLoad(String, String),

    #[error("Settings parse failed ({0}): {1}")]
    SettingsParse(String, String),

    #[error("Invalid {field} value: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Not enough reports for comparison (minimum 2 required, found {found})")]
    NotEnoughReports { found: usize },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ComparisonError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// ComparisonEngine trait
// ---------------------------------------------------------------------------

/// The comparison engine. Implementations are pure: no I/O, no shared
/// mutable state, identical output for identical input.
pub trait ComparisonEngine {
    /// Match two measurement sets by name and classify each matched pair.
    fn compare(&self, old: &[Measurement], new: &[Measurement]) -> Vec<ComparisonResult>;

    /// Fold classified pairs into scores, breakdowns and insights.
    fn summarize(&self, results: &[ComparisonResult]) -> Summary;

    /// `compare` followed by `summarize`.
    fn run(&self, old: &[Measurement], new: &[Measurement]) -> ComparisonReport {
        let comparisons = self.compare(old, new);
        let summary = self.summarize(&comparisons);
        ComparisonReport {
            comparisons,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, trend: Trend) -> ComparisonResult {
        ComparisonResult {
            parameter_name: name.into(),
            old_value: MeasuredValue::Numeric(1.0),
            new_value: MeasuredValue::Numeric(2.0),
            change: Some(1.0),
            change_percentage: Some(100.0),
            trend,
            unit: None,
        }
    }

    #[test]
    fn breakdown_stable_bucket_absorbs_changed() {
        let mut b = CategoryBreakdown::empty(Category::OtherTests);
        b.record(&result("a", Trend::Stable));
        b.record(&result("b", Trend::Changed));
        b.record(&result("c", Trend::Increased));
        assert_eq!(b.total, 3);
        assert_eq!(b.stable, 2);
        assert_eq!(b.improved + b.worsened, 0);
        assert_eq!(b.parameters, vec!["a", "b", "c"]);
    }

    #[test]
    fn distribution_counts_every_tag() {
        let results = vec![
            result("a", Trend::Improved),
            result("b", Trend::Worsened),
            result("c", Trend::Decreased),
            result("d", Trend::Decreased),
        ];
        let dist = TrendDistribution::from_results(&results);
        assert_eq!(dist.decreased, 2);
        assert_eq!(dist.total(), 4);
    }
}
