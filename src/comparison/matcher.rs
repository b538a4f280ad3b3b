use indexmap::IndexMap;

use crate::models::{MeasuredValue, Measurement};

/// A parameter present with a value in both reports.
#[derive(Debug, Clone, Copy)]
pub struct MatchedPair<'a> {
    pub old: &'a Measurement,
    pub new: &'a Measurement,
    pub old_value: &'a MeasuredValue,
    pub new_value: &'a MeasuredValue,
}

/// Index measurements by lowercased name. A repeated name keeps its first
/// position but the last measurement wins.
fn index_by_key(measurements: &[Measurement]) -> IndexMap<String, &Measurement> {
    let mut index = IndexMap::with_capacity(measurements.len());
    for m in measurements {
        index.insert(m.match_key(), m);
    }
    index
}

/// Align two measurement sets by case-insensitive name.
///
/// Output follows the order of first appearance in `old`. Names found in
/// only one set are ignored; pairs where either side has no value are
/// dropped.
pub fn match_measurements<'a>(
    old: &'a [Measurement],
    new: &'a [Measurement],
) -> Vec<MatchedPair<'a>> {
    let old_index = index_by_key(old);
    let new_index = index_by_key(new);

    let mut pairs = Vec::new();
    for (key, old_m) in &old_index {
        let Some(new_m) = new_index.get(key) else {
            continue;
        };
        match (&old_m.value, &new_m.value) {
            (Some(old_value), Some(new_value)) => pairs.push(MatchedPair {
                old: old_m,
                new: new_m,
                old_value,
                new_value,
            }),
            _ => {
                tracing::debug!(parameter = %key, "Skipping pair with absent value");
            }
        }
    }
    pairs
}
