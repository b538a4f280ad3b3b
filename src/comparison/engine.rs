use std::time::Instant;

use crate::config::EngineSettings;
use crate::models::{ComparisonResult, Measurement};

use super::matcher::match_measurements;
use super::reference::KeywordTaxonomy;
use super::summary::summarize;
use super::trend::classify_pair;
use super::types::{ComparisonEngine, ComparisonReport, Summary};

/// Default implementation of the comparison engine.
/// Holds only read-only keyword tables and thresholds, so one instance can
/// serve concurrent callers.
#[derive(Debug, Clone)]
pub struct DefaultComparisonEngine {
    pub(crate) taxonomy: KeywordTaxonomy,
    pub(crate) settings: EngineSettings,
}

impl DefaultComparisonEngine {
    pub fn new(taxonomy: KeywordTaxonomy, settings: EngineSettings) -> Self {
        Self { taxonomy, settings }
    }

    /// Engine with the bundled keyword tables and default thresholds.
    pub fn builtin() -> Self {
        Self::new(KeywordTaxonomy::builtin(), EngineSettings::default())
    }

    /// Keyword tables in use, for callers that categorize outside a run.
    pub fn taxonomy(&self) -> &KeywordTaxonomy {
        &self.taxonomy
    }
}

impl Default for DefaultComparisonEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ComparisonEngine for DefaultComparisonEngine {
    fn compare(&self, old: &[Measurement], new: &[Measurement]) -> Vec<ComparisonResult> {
        match_measurements(old, new)
            .iter()
            .map(|pair| classify_pair(pair, &self.taxonomy, &self.settings))
            .collect()
    }

    fn summarize(&self, results: &[ComparisonResult]) -> Summary {
        summarize(results, &self.taxonomy, &self.settings)
    }

    fn run(&self, old: &[Measurement], new: &[Measurement]) -> ComparisonReport {
        let start = Instant::now();

        let comparisons = self.compare(old, new);
        let summary = self.summarize(&comparisons);

        tracing::info!(
            old_parameters = old.len(),
            new_parameters = new.len(),
            matched = comparisons.len(),
            improved = summary.improved,
            worsened = summary.worsened,
            health_score = summary.health_score,
            overall_trend = summary.overall_trend.as_str(),
            processing_ms = start.elapsed().as_millis() as u64,
            "Report comparison complete"
        );

        ComparisonReport {
            comparisons,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{Category, OverallTrend, Severity, Trend};

    fn panel_old() -> Vec<Measurement> {
        vec![
            Measurement::numeric("Hemoglobin", 10.0).with_unit("g/dL"),
            Measurement::numeric("Glucose", 90.0).with_unit("mg/dL"),
            Measurement::numeric("Sodium", 140.0).with_unit("mmol/L"),
            Measurement::qualitative("BloodGroup", "A+"),
            Measurement::numeric("LDL Cholesterol", 160.0),
            Measurement::numeric("TSH", 2.0),
            Measurement::new("Vitamin D", None),
        ]
    }

    fn panel_new() -> Vec<Measurement> {
        vec![
            Measurement::numeric("hemoglobin", 14.0).with_unit("g/dL"),
            Measurement::numeric("GLUCOSE", 95.0).with_unit("mg/dL"),
            Measurement::numeric("Sodium", 140.9).with_unit("mmol/L"),
            Measurement::qualitative("BloodGroup", "A+"),
            Measurement::numeric("LDL Cholesterol", 120.0),
            Measurement::numeric("Vitamin D", 30.0),
            Measurement::numeric("Ferritin", 80.0),
        ]
    }

    fn trend_of(report: &ComparisonReport, name: &str) -> Trend {
        report
            .comparisons
            .iter()
            .find(|c| c.parameter_name == name)
            .map(|c| c.trend)
            .unwrap()
    }

    #[test]
    fn full_panel_comparison() {
        let engine = DefaultComparisonEngine::builtin();
        let report = engine.run(&panel_old(), &panel_new());

        let names: Vec<&str> = report
            .comparisons
            .iter()
            .map(|c| c.parameter_name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Hemoglobin", "Glucose", "Sodium", "BloodGroup", "LDL Cholesterol"]
        );

        assert_eq!(trend_of(&report, "Hemoglobin"), Trend::Improved);
        assert_eq!(trend_of(&report, "Glucose"), Trend::Worsened);
        assert_eq!(trend_of(&report, "Sodium"), Trend::Stable);
        assert_eq!(trend_of(&report, "BloodGroup"), Trend::Stable);
        assert_eq!(trend_of(&report, "LDL Cholesterol"), Trend::Improved);

        let s = &report.summary;
        assert_eq!(s.total_parameters, 5);
        assert_eq!((s.improved, s.worsened, s.stable), (2, 1, 2));
        // (200 + 100 - 100) / 5
        assert_eq!(s.health_score, 40.0);
        assert_eq!(s.overall_trend, OverallTrend::Improving);

        // Glucose worsened (high); Hemoglobin +40% and LDL -25% (medium)
        let crit: Vec<(&str, Severity)> = s
            .critical_changes
            .iter()
            .map(|c| (c.parameter.as_str(), c.severity))
            .collect();
        assert_eq!(
            crit,
            vec![
                ("Glucose", Severity::High),
                ("Hemoglobin", Severity::Medium),
                ("LDL Cholesterol", Severity::Medium),
            ]
        );

        let cats: Vec<Category> = s.category_breakdown.iter().map(|b| b.category).collect();
        assert_eq!(
            cats,
            vec![
                Category::BloodCount,
                Category::LipidProfile,
                Category::Diabetes,
                Category::KidneyFunction,
                Category::OtherTests,
            ]
        );
    }

    #[test]
    fn no_shared_parameters_is_no_data() {
        let engine = DefaultComparisonEngine::builtin();
        let old = vec![Measurement::numeric("TSH", 2.0)];
        let new = vec![Measurement::numeric("Ferritin", 80.0)];
        let report = engine.run(&old, &new);
        assert!(report.comparisons.is_empty());
        assert_eq!(report.summary.total_parameters, 0);
        assert_eq!(report.summary.overall_trend, OverallTrend::NoData);
        assert_eq!(report.summary.insights.len(), 1);
    }

    #[test]
    fn repeated_runs_are_byte_identical() {
        let engine = DefaultComparisonEngine::builtin();
        let first = serde_json::to_string(&engine.run(&panel_old(), &panel_new())).unwrap();
        for _ in 0..5 {
            let again = serde_json::to_string(&engine.run(&panel_old(), &panel_new())).unwrap();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn summary_is_recomputable_from_results() {
        let engine = DefaultComparisonEngine::builtin();
        let report = engine.run(&panel_old(), &panel_new());
        assert_eq!(engine.summarize(&report.comparisons), report.summary);
    }

    #[test]
    fn half_way_values_round_to_even() {
        let engine = DefaultComparisonEngine::builtin();
        let old = vec![
            Measurement::qualitative("Blood Group", "A+"),
            Measurement::numeric("Sodium", 1.0),
            Measurement::numeric("Potassium", 10.0),
            Measurement::numeric("Chloride", 10.0),
        ];
        let new = vec![
            Measurement::qualitative("Blood Group", "B+"),
            Measurement::numeric("Sodium", 1.125),
            Measurement::numeric("Potassium", 20.0),
            Measurement::numeric("Chloride", 20.0),
        ];
        let report = engine.run(&old, &new);

        let sodium = report
            .comparisons
            .iter()
            .find(|c| c.parameter_name == "Sodium")
            .unwrap();
        assert_eq!(sodium.change, Some(0.12));
        assert_eq!(sodium.change_percentage, Some(12.5));
        // one changed (25) over four results: 6.25
        assert_eq!(report.summary.health_score, 6.2);
    }

    #[test]
    fn custom_settings_change_thresholds() {
        let settings = EngineSettings {
            stable_percent_threshold: 10.0,
            ..EngineSettings::default()
        };
        let engine = DefaultComparisonEngine::new(KeywordTaxonomy::builtin(), settings);
        let report = engine.run(&panel_old(), &panel_new());
        // +5.56% is now inside the stable band
        assert_eq!(trend_of(&report, "Glucose"), Trend::Stable);
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DefaultComparisonEngine>();

        let engine = std::sync::Arc::new(DefaultComparisonEngine::builtin());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = engine.clone();
                std::thread::spawn(move || engine.run(&panel_old(), &panel_new()).summary)
            })
            .collect();
        let summaries: Vec<Summary> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(summaries.windows(2).all(|w| w[0] == w[1]));
    }
}
