use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::Category;

use super::helpers::contains_any;
use super::types::ComparisonError;

/// Keywords that place a parameter in a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryKeywords {
    pub category: Category,
    pub keywords: Vec<String>,
}

/// Keyword tables driving trend direction and categorization.
///
/// Matching is case-insensitive substring search against the parameter
/// name. Category order matters: the first category with a matching keyword
/// wins. Entries for `Other Tests` are never matched; it is the fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordTaxonomy {
    /// Parameters where a rise is clinically adverse.
    pub increase_bad: Vec<String>,
    /// Parameters where a fall is clinically adverse.
    pub decrease_bad: Vec<String>,
    pub categories: Vec<CategoryKeywords>,
}

const INCREASE_BAD: &[&str] = &[
    "glucose",
    "cholesterol",
    "ldl",
    "triglycerides",
    "creatinine",
    "urea",
    "blood pressure",
    "weight",
];

const DECREASE_BAD: &[&str] = &[
    "hemoglobin",
    "hb",
    "hdl",
    "platelet",
    "rbc",
    "oxygen saturation",
    "spo2",
];

const CATEGORY_TABLE: &[(Category, &[&str])] = &[
    (
        Category::BloodCount,
        &[
            "hemoglobin", "haemoglobin", "hb", "hgb", "rbc", "red blood cell", "wbc",
            "white blood cell", "platelet", "hematocrit", "haematocrit", "hct", "mcv", "mch",
            "mchc", "rdw", "mpv", "esr", "neutrophil", "lymphocyte", "eosinophil", "monocyte",
            "basophil",
        ],
    ),
    (
        Category::LipidProfile,
        &[
            "cholesterol", "triglyceride", "hdl", "ldl", "vldl", "chol/hdl", "ldl/hdl",
            "non hdl",
        ],
    ),
    (
        Category::Diabetes,
        &[
            "glucose", "sugar", "fasting", "random", "pp", "ppbs", "hba1c", "glycated",
            "glycosylated",
        ],
    ),
    (
        Category::Thyroid,
        &["t3", "t4", "tsh", "triiodothyronine", "thyroxine", "thyroid stimulating"],
    ),
    (
        Category::LiverFunction,
        &[
            "sgpt", "alt", "sgot", "ast", "alp", "ggt", "bilirubin", "albumin", "globulin",
            "protein", "a/g ratio",
        ],
    ),
    (
        Category::KidneyFunction,
        &[
            "creatinine", "urea", "bun", "uric acid", "sodium", "potassium", "chloride",
            "calcium",
        ],
    ),
    (Category::Vitamins, &["vitamin", "vit", "b12", "folate", "folic"]),
    (Category::IronStudies, &["iron", "ferritin", "tibc", "transferrin"]),
    (Category::OtherTests, &[]),
];

fn to_owned_list(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl KeywordTaxonomy {
    /// The bundled clinical keyword tables.
    pub fn builtin() -> Self {
        Self {
            increase_bad: to_owned_list(INCREASE_BAD),
            decrease_bad: to_owned_list(DECREASE_BAD),
            categories: CATEGORY_TABLE
                .iter()
                .map(|(category, words)| CategoryKeywords {
                    category: *category,
                    keywords: to_owned_list(words),
                })
                .collect(),
        }
    }

    /// Load an override taxonomy from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ComparisonError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            ComparisonError::ReferenceDataLoad(path.display().to_string(), e.to_string())
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_json(&name, &json)
    }

    /// Parse a taxonomy from JSON text. `source` names it in errors.
    pub fn from_json(source: &str, json: &str) -> Result<Self, ComparisonError> {
        let parsed: Self = serde_json::from_str(json)
            .map_err(|e| ComparisonError::ReferenceDataParse(source.into(), e.to_string()))?;
        let taxonomy = parsed.normalized();
        tracing::debug!(
            source,
            categories = taxonomy.categories.len(),
            increase_bad = taxonomy.increase_bad.len(),
            decrease_bad = taxonomy.decrease_bad.len(),
            "Loaded keyword taxonomy"
        );
        Ok(taxonomy)
    }

    /// Lowercase and trim every keyword, dropping blanks.
    fn normalized(self) -> Self {
        let clean = |words: Vec<String>| -> Vec<String> {
            words
                .into_iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        };
        Self {
            increase_bad: clean(self.increase_bad),
            decrease_bad: clean(self.decrease_bad),
            categories: self
                .categories
                .into_iter()
                .map(|c| CategoryKeywords {
                    category: c.category,
                    keywords: clean(c.keywords),
                })
                .collect(),
        }
    }

    /// Does a rise in this (lowercased) parameter count as worsening?
    pub fn rise_is_adverse(&self, name_lower: &str) -> bool {
        contains_any(name_lower, &self.increase_bad)
    }

    /// Does a fall in this (lowercased) parameter count as worsening?
    pub fn fall_is_adverse(&self, name_lower: &str) -> bool {
        contains_any(name_lower, &self.decrease_bad)
    }
}

impl Default for KeywordTaxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}
