use crate::models::Category;

/// Sentence templates for summary insights.
/// Counts are always spelled out literally so the text can be checked
/// against the numbers next to it.
pub struct InsightTemplates;

impl InsightTemplates {
    /// No parameter could be compared.
    pub fn no_data() -> String {
        "No comparable parameters found between reports.".to_string()
    }

    /// Headline: more than 60% improved.
    pub fn excellent(improved: usize, total: usize) -> String {
        format!(
            "Excellent progress! {} out of {} parameters have improved.",
            improved, total,
        )
    }

    /// Headline: more than 40% improved.
    pub fn good(improved: usize) -> String {
        format!("Good progress! {} parameters are showing improvement.", improved)
    }

    /// Headline: more than 40% worsened.
    pub fn attention_needed(worsened: usize) -> String {
        format!(
            "⚠ Attention needed: {} parameters have worsened since last report.",
            worsened,
        )
    }

    /// Headline: none of the above.
    pub fn stable(stable: usize) -> String {
        format!(
            "Health status is relatively stable with {} parameters unchanged.",
            stable,
        )
    }

    pub fn category_declined(category: Category, worsened: usize) -> String {
        format!(
            "⚠ {}: {} parameter(s) declined. Consider consulting your doctor.",
            category, worsened,
        )
    }

    pub fn category_improved(category: Category, improved: usize) -> String {
        format!(
            "✓ {}: Showing positive changes with {} parameter(s) improved.",
            category, improved,
        )
    }

    pub fn high_severity(count: usize) -> String {
        format!(
            "⚠ {} parameter(s) require immediate attention. Review critical changes below.",
            count,
        )
    }

    pub fn recommend_follow_up() -> String {
        "Recommendation: Schedule a follow-up consultation with your healthcare provider."
            .to_string()
    }

    pub fn keep_it_up() -> String {
        "Keep up the good work! Continue maintaining your current health regimen.".to_string()
    }
}
