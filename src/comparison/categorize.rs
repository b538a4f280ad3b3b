use crate::models::Category;

use super::helpers::contains_any;
use super::reference::KeywordTaxonomy;

/// Assign a parameter to exactly one category.
///
/// Categories are tried in taxonomy order and the first keyword hit wins,
/// so a name matching several categories lands in the earliest one.
/// Unmatched names fall into `Other Tests`.
pub fn categorize(parameter_name: &str, taxonomy: &KeywordTaxonomy) -> Category {
    let name_lower = parameter_name.to_lowercase();
    taxonomy
        .categories
        .iter()
        .filter(|c| c.category != Category::OtherTests)
        .find(|c| contains_any(&name_lower, &c.keywords))
        .map(|c| c.category)
        .unwrap_or(Category::OtherTests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::reference::CategoryKeywords;

    #[test]
    fn common_panels() {
        let t = KeywordTaxonomy::builtin();
        assert_eq!(categorize("Hemoglobin", &t), Category::BloodCount);
        assert_eq!(categorize("Total Cholesterol", &t), Category::LipidProfile);
        assert_eq!(categorize("Fasting Glucose", &t), Category::Diabetes);
        assert_eq!(categorize("TSH", &t), Category::Thyroid);
        assert_eq!(categorize("SGPT", &t), Category::LiverFunction);
        assert_eq!(categorize("Potassium", &t), Category::KidneyFunction);
        assert_eq!(categorize("Vitamin D", &t), Category::Vitamins);
        assert_eq!(categorize("Serum Iron", &t), Category::IronStudies);
    }

    #[test]
    fn unmatched_name_is_other() {
        let t = KeywordTaxonomy::builtin();
        assert_eq!(categorize("Blood Group", &t), Category::OtherTests);
        assert_eq!(categorize("", &t), Category::OtherTests);
    }

    #[test]
    fn earliest_category_wins() {
        // "hb" (Blood Count) is declared before "hba1c" (Diabetes)
        let t = KeywordTaxonomy::builtin();
        assert_eq!(categorize("HbA1c", &t), Category::BloodCount);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let t = KeywordTaxonomy::builtin();
        assert_eq!(categorize("FERRITIN", &t), Category::IronStudies);
    }

    #[test]
    fn other_tests_keywords_are_never_matched() {
        let t = KeywordTaxonomy {
            increase_bad: vec![],
            decrease_bad: vec![],
            categories: vec![
                CategoryKeywords {
                    category: Category::OtherTests,
                    keywords: vec!["troponin".into()],
                },
                CategoryKeywords {
                    category: Category::Thyroid,
                    keywords: vec!["troponin".into()],
                },
            ],
        };
        assert_eq!(categorize("Troponin I", &t), Category::Thyroid);
    }

    #[test]
    fn every_name_maps_to_one_of_nine() {
        let t = KeywordTaxonomy::builtin();
        for name in ["WBC", "Uric Acid", "B12", "Weight", "CRP", "ESR", "T4"] {
            assert!(Category::ALL.contains(&categorize(name, &t)));
        }
    }
}
