/// Round to a fixed number of decimal places. Exact halves go to the
/// even neighbour.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// True when any keyword is a substring of `haystack`.
/// Both sides are expected to be lowercase already.
pub fn contains_any(haystack: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| haystack.contains(k.as_str()))
}

/// Weighted trend score on a 0-100 scale.
///
/// improved +100, stable +50, changed +25, worsened -100, increased and
/// decreased 0; divided by `total` and clamped. `None` for an empty set.
pub fn weighted_score(
    improved: usize,
    stable: usize,
    changed: usize,
    worsened: usize,
    total: usize,
) -> Option<f64> {
    if total == 0 {
        return None;
    }
    let numerator = improved as f64 * 100.0 + stable as f64 * 50.0 + changed as f64 * 25.0
        - worsened as f64 * 100.0;
    Some((numerator / total as f64).clamp(0.0, 100.0))
}

/// Share of `part` in `total` as a percentage; 0 for an empty total.
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_two_decimals() {
        assert_eq!(round_to(5.555_555, 2), 5.56);
        assert_eq!(round_to(-0.444, 2), -0.44);
        assert_eq!(round_to(58.04, 1), 58.0);
    }

    #[test]
    fn exact_halves_round_to_even() {
        assert_eq!(round_to(6.25, 1), 6.2);
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(18.75, 1), 18.8);
        assert_eq!(round_to(-2.5, 0), -2.0);
    }

    #[test]
    fn contains_any_substring() {
        let kws = vec!["ldl".to_string(), "glucose".to_string()];
        assert!(contains_any("vldl cholesterol", &kws));
        assert!(contains_any("fasting glucose", &kws));
        assert!(!contains_any("sodium", &kws));
    }

    #[test]
    fn weighted_score_formula() {
        // 6 improved, 2 stable, 2 worsened of 10
        assert_eq!(weighted_score(6, 2, 0, 2, 10), Some(50.0));
        assert_eq!(weighted_score(0, 0, 0, 0, 0), None);
    }

    #[test]
    fn weighted_score_is_clamped() {
        assert_eq!(weighted_score(0, 0, 0, 5, 5), Some(0.0));
        assert_eq!(weighted_score(5, 0, 0, 0, 5), Some(100.0));
    }

    #[test]
    fn percentage_of_empty_total_is_zero() {
        assert_eq!(percentage(3, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
    }
}
