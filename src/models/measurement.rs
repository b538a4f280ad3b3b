use serde::{Deserialize, Serialize};

/// A single reported value: a number, or a qualitative result such as a
/// blood group. Absence is modelled as `Option<MeasuredValue>` on the owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MeasuredValue {
    Numeric(f64),
    Qualitative(String),
}

impl MeasuredValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Numeric(v) => Some(*v),
            Self::Qualitative(_) => None,
        }
    }
}

impl std::fmt::Display for MeasuredValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric(v) => write!(f, "{}", v),
            Self::Qualitative(s) => f.write_str(s),
        }
    }
}

impl From<f64> for MeasuredValue {
    fn from(v: f64) -> Self {
        Self::Numeric(v)
    }
}

impl From<&str> for MeasuredValue {
    fn from(s: &str) -> Self {
        Self::Qualitative(s.to_string())
    }
}

/// One named parameter from a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub name: String,
    #[serde(default)]
    pub value: Option<MeasuredValue>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub reference_range: Option<String>,
    /// Lab-reported flag (normal, high, low). Descriptive only.
    #[serde(default)]
    pub status: Option<String>,
    /// Category assigned by the extraction step, if any. Descriptive only.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl Measurement {
    pub fn new(name: impl Into<String>, value: Option<MeasuredValue>) -> Self {
        Self {
            name: name.into(),
            value,
            unit: None,
            reference_range: None,
            status: None,
            category: None,
            remarks: None,
        }
    }

    pub fn numeric(name: impl Into<String>, value: f64) -> Self {
        Self::new(name, Some(MeasuredValue::Numeric(value)))
    }

    pub fn qualitative(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, Some(MeasuredValue::Qualitative(value.into())))
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Lowercased name used as the matching key.
    pub fn match_key(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_deserializes_number_or_string() {
        let m: Measurement =
            serde_json::from_str(r#"{"name": "Hemoglobin", "value": 13.5, "unit": "g/dL"}"#)
                .unwrap();
        assert_eq!(m.value, Some(MeasuredValue::Numeric(13.5)));

        let m: Measurement =
            serde_json::from_str(r#"{"name": "Blood Group", "value": "A+"}"#).unwrap();
        assert_eq!(m.value, Some(MeasuredValue::Qualitative("A+".into())));
    }

    #[test]
    fn missing_or_null_value_is_absent() {
        let m: Measurement = serde_json::from_str(r#"{"name": "TSH"}"#).unwrap();
        assert!(m.value.is_none());
        let m: Measurement = serde_json::from_str(r#"{"name": "TSH", "value": null}"#).unwrap();
        assert!(m.value.is_none());
    }

    #[test]
    fn match_key_is_lowercase() {
        assert_eq!(Measurement::numeric("LDL Cholesterol", 1.0).match_key(), "ldl cholesterol");
    }

    #[test]
    fn display_value() {
        assert_eq!(MeasuredValue::Numeric(14.0).to_string(), "14");
        assert_eq!(MeasuredValue::from("B-").to_string(), "B-");
    }
}
