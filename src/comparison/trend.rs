use crate::config::EngineSettings;
use crate::models::{ComparisonResult, MeasuredValue, Trend};

use super::helpers::round_to;
use super::matcher::MatchedPair;
use super::reference::KeywordTaxonomy;

/// Is the change too small to call a direction?
///
/// Non-zero baseline: relative change under `stable_percent_threshold`.
/// Zero baseline: absolute change under `stable_absolute_threshold`.
pub fn is_stable(old: f64, change: f64, settings: &EngineSettings) -> bool {
    if old != 0.0 {
        (change / old * 100.0).abs() < settings.stable_percent_threshold
    } else {
        change.abs() < settings.stable_absolute_threshold
    }
}

/// Directional trend for a significant change.
///
/// Rise: increase_bad is checked before decrease_bad. Fall: decrease_bad is
/// checked first. A name on both lists therefore always reads as worsened.
pub fn directional_trend(name_lower: &str, change: f64, taxonomy: &KeywordTaxonomy) -> Trend {
    if change > 0.0 {
        if taxonomy.rise_is_adverse(name_lower) {
            Trend::Worsened
        } else if taxonomy.fall_is_adverse(name_lower) {
            Trend::Improved
        } else {
            Trend::Increased
        }
    } else if taxonomy.fall_is_adverse(name_lower) {
        Trend::Worsened
    } else if taxonomy.rise_is_adverse(name_lower) {
        Trend::Improved
    } else {
        Trend::Decreased
    }
}

/// Trend for a numeric pair, applying the stability test first.
pub fn numeric_trend(
    name_lower: &str,
    old: f64,
    change: f64,
    taxonomy: &KeywordTaxonomy,
    settings: &EngineSettings,
) -> Trend {
    if is_stable(old, change, settings) {
        Trend::Stable
    } else {
        directional_trend(name_lower, change, taxonomy)
    }
}

/// Trend for a qualitative pair (or a numeric/text mismatch): equal values
/// are stable, anything else has changed.
pub fn qualitative_trend(old: &MeasuredValue, new: &MeasuredValue) -> Trend {
    if old == new {
        Trend::Stable
    } else {
        Trend::Changed
    }
}

/// Classify a matched pair into a comparison result.
pub fn classify_pair(
    pair: &MatchedPair<'_>,
    taxonomy: &KeywordTaxonomy,
    settings: &EngineSettings,
) -> ComparisonResult {
    let name_lower = pair.old.match_key();

    let (trend, change, change_percentage) = match (pair.old_value, pair.new_value) {
        (MeasuredValue::Numeric(old), MeasuredValue::Numeric(new)) => {
            let change = new - old;
            let change_percentage = if *old != 0.0 { change / old * 100.0 } else { 0.0 };
            let trend = numeric_trend(&name_lower, *old, change, taxonomy, settings);
            (
                trend,
                Some(round_to(change, 2)),
                Some(round_to(change_percentage, 2)),
            )
        }
        (old, new) => (qualitative_trend(old, new), None, None),
    };

    tracing::debug!(
        parameter = %pair.old.name,
        trend = trend.as_str(),
        change = ?change,
        "Classified parameter"
    );

    ComparisonResult {
        parameter_name: pair.old.name.clone(),
        old_value: pair.old_value.clone(),
        new_value: pair.new_value.clone(),
        change,
        change_percentage,
        trend,
        unit: pair.new.unit.clone(),
    }
}
