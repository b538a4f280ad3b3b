use crate::models::Severity;

use super::helpers::percentage;
use super::messages::InsightTemplates;
use super::types::{CategoryBreakdown, CriticalChange};

/// Trend counts feeding the insight rules.
#[derive(Debug, Clone, Copy)]
pub struct InsightCounts {
    pub improved: usize,
    pub worsened: usize,
    pub stable: usize,
}

/// Build the ordered insight sentences.
///
/// Order: one headline, then per-category notes in breakdown order, then
/// the high-severity note, then a closing recommendation. The headline
/// ratios use `improved + worsened + stable` as denominator; when that is
/// zero only the no-data sentence is returned.
pub fn generate_insights(
    counts: InsightCounts,
    breakdown: &[CategoryBreakdown],
    critical_changes: &[CriticalChange],
) -> Vec<String> {
    let InsightCounts {
        improved,
        worsened,
        stable,
    } = counts;

    let total = improved + worsened + stable;
    if total == 0 {
        return vec![InsightTemplates::no_data()];
    }

    let mut insights = Vec::new();

    let improvement_rate = percentage(improved, total);
    let worsening_rate = percentage(worsened, total);

    let headline = if improvement_rate > 60.0 {
        InsightTemplates::excellent(improved, total)
    } else if improvement_rate > 40.0 {
        InsightTemplates::good(improved)
    } else if worsening_rate > 40.0 {
        InsightTemplates::attention_needed(worsened)
    } else {
        InsightTemplates::stable(stable)
    };
    insights.push(headline);

    for cat in breakdown {
        if cat.worsened > cat.improved && cat.worsened > 0 {
            insights.push(InsightTemplates::category_declined(cat.category, cat.worsened));
        } else if cat.improved > cat.worsened && cat.improved > 1 {
            insights.push(InsightTemplates::category_improved(cat.category, cat.improved));
        }
    }

    let high_severity = critical_changes
        .iter()
        .filter(|c| c.severity == Severity::High)
        .count();
    if high_severity > 0 {
        insights.push(InsightTemplates::high_severity(high_severity));
    }

    if worsened > improved {
        insights.push(InsightTemplates::recommend_follow_up());
    } else if improved > worsened {
        insights.push(InsightTemplates::keep_it_up());
    }

    insights
}
