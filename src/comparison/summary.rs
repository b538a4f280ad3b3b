use indexmap::IndexMap;

use crate::config::EngineSettings;
use crate::models::{Category, ComparisonResult, OverallTrend, Severity, Trend};

use super::categorize::categorize;
use super::helpers::{percentage, round_to, weighted_score};
use super::insights::{generate_insights, InsightCounts};
use super::messages::InsightTemplates;
use super::reference::KeywordTaxonomy;
use super::types::{
    CategoryBreakdown, CategoryScore, CriticalChange, Summary, TimelineEntry, TrendDistribution,
    VisualizationData,
};

/// Score reported for a category with no members.
const EMPTY_CATEGORY_SCORE: f64 = 50.0;

/// The defined terminal summary for an empty comparison.
pub fn empty_summary() -> Summary {
    Summary {
        total_parameters: 0,
        improved: 0,
        worsened: 0,
        stable: 0,
        changed: 0,
        improvement_rate: 0.0,
        health_score: 0.0,
        overall_trend: OverallTrend::NoData,
        category_breakdown: Vec::new(),
        critical_changes: Vec::new(),
        insights: vec![InsightTemplates::no_data()],
        visualization_data: VisualizationData::default(),
    }
}

pub fn overall_trend(improved: usize, worsened: usize) -> OverallTrend {
    if improved > worsened {
        OverallTrend::Improving
    } else if worsened > improved {
        OverallTrend::Declining
    } else {
        OverallTrend::Stable
    }
}

/// Category iteration order: taxonomy order, then any category the
/// taxonomy leaves out, in declaration order.
fn category_order(taxonomy: &KeywordTaxonomy) -> Vec<Category> {
    let mut order: Vec<Category> = Vec::with_capacity(Category::ALL.len());
    for category in taxonomy
        .categories
        .iter()
        .map(|c| c.category)
        .chain(Category::ALL)
    {
        if !order.contains(&category) {
            order.push(category);
        }
    }
    order
}

/// Group results by category, dropping empty categories.
pub fn category_breakdown(
    results: &[ComparisonResult],
    taxonomy: &KeywordTaxonomy,
) -> Vec<CategoryBreakdown> {
    let mut groups: IndexMap<Category, CategoryBreakdown> = category_order(taxonomy)
        .into_iter()
        .map(|c| (c, CategoryBreakdown::empty(c)))
        .collect();

    for result in results {
        let category = categorize(&result.parameter_name, taxonomy);
        if let Some(group) = groups.get_mut(&category) {
            group.record(result);
        }
    }

    groups.into_values().filter(|g| g.total > 0).collect()
}

/// Worsened results, plus anything that moved more than the critical
/// percentage. High severity first, then by descending magnitude, capped.
pub fn critical_changes(
    results: &[ComparisonResult],
    settings: &EngineSettings,
) -> Vec<CriticalChange> {
    let mut critical: Vec<CriticalChange> = results
        .iter()
        .filter(|r| {
            r.trend == Trend::Worsened
                || r.abs_change_percentage() > settings.critical_percent_threshold
        })
        .map(|r| CriticalChange {
            parameter: r.parameter_name.clone(),
            old_value: r.old_value.clone(),
            new_value: r.new_value.clone(),
            change: r.change,
            change_percentage: r.change_percentage,
            trend: r.trend,
            unit: r.unit.clone(),
            severity: if r.trend == Trend::Worsened {
                Severity::High
            } else {
                Severity::Medium
            },
        })
        .collect();

    // stable sort: ties keep result order
    critical.sort_by(|a, b| {
        a.severity
            .rank()
            .cmp(&b.severity.rank())
            .then_with(|| b.abs_change_percentage().total_cmp(&a.abs_change_percentage()))
    });
    critical.truncate(settings.max_critical_changes);
    critical
}

pub fn category_score(breakdown: &CategoryBreakdown) -> CategoryScore {
    let score = weighted_score(
        breakdown.improved,
        breakdown.stable,
        0,
        breakdown.worsened,
        breakdown.total,
    )
    .map(|s| round_to(s, 1))
    .unwrap_or(EMPTY_CATEGORY_SCORE);

    CategoryScore {
        category: breakdown.category,
        score,
        improved: breakdown.improved,
        worsened: breakdown.worsened,
        stable: breakdown.stable,
        total: breakdown.total,
    }
}

fn timeline(results: &[ComparisonResult], taxonomy: &KeywordTaxonomy) -> Vec<TimelineEntry> {
    results
        .iter()
        .map(|r| TimelineEntry {
            parameter: r.parameter_name.clone(),
            old_value: r.old_value.clone(),
            new_value: r.new_value.clone(),
            trend: r.trend,
            category: categorize(&r.parameter_name, taxonomy),
        })
        .collect()
}

/// Fold comparison results into a summary.
pub fn summarize(
    results: &[ComparisonResult],
    taxonomy: &KeywordTaxonomy,
    settings: &EngineSettings,
) -> Summary {
    if results.is_empty() {
        return empty_summary();
    }

    let distribution = TrendDistribution::from_results(results);
    let total = distribution.total();

    let health_score = weighted_score(
        distribution.improved,
        distribution.stable,
        distribution.changed,
        distribution.worsened,
        total,
    )
    .map(|s| round_to(s, 1))
    .unwrap_or(0.0);

    let breakdown = category_breakdown(results, taxonomy);
    let critical = critical_changes(results, settings);

    let insights = generate_insights(
        InsightCounts {
            improved: distribution.improved,
            worsened: distribution.worsened,
            stable: distribution.stable,
        },
        &breakdown,
        &critical,
    );

    let visualization_data = VisualizationData {
        trend_distribution: distribution.clone(),
        category_scores: breakdown.iter().map(category_score).collect(),
        timeline_data: timeline(results, taxonomy),
    };

    Summary {
        total_parameters: total,
        improved: distribution.improved,
        worsened: distribution.worsened,
        stable: distribution.stable,
        changed: distribution.changed,
        improvement_rate: round_to(percentage(distribution.improved, total), 1),
        health_score,
        overall_trend: overall_trend(distribution.improved, distribution.worsened),
        category_breakdown: breakdown,
        critical_changes: critical,
        insights,
        visualization_data,
    }
}
