use serde::{Deserialize, Serialize};

use crate::comparison::types::ComparisonError;

/// Macro to generate a tag enum with as_str + std::str::FromStr + serde names
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ComparisonError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ComparisonError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Trend {
    Improved => "improved",
    Worsened => "worsened",
    Stable => "stable",
    Changed => "changed",
    Increased => "increased",
    Decreased => "decreased",
});

str_enum!(OverallTrend {
    Improving => "improving",
    Declining => "declining",
    Stable => "stable",
    NoData => "no_data",
});

str_enum!(Severity {
    High => "high",
    Medium => "medium",
});

str_enum!(Category {
    BloodCount => "Blood Count",
    LipidProfile => "Lipid Profile",
    Diabetes => "Diabetes",
    Thyroid => "Thyroid",
    LiverFunction => "Liver Function",
    KidneyFunction => "Kidney Function",
    Vitamins => "Vitamins",
    IronStudies => "Iron Studies",
    OtherTests => "Other Tests",
});

impl Category {
    /// All categories in declaration order; the catch-all comes last.
    pub const ALL: [Category; 9] = [
        Category::BloodCount,
        Category::LipidProfile,
        Category::Diabetes,
        Category::Thyroid,
        Category::LiverFunction,
        Category::KidneyFunction,
        Category::Vitamins,
        Category::IronStudies,
        Category::OtherTests,
    ];
}

impl Severity {
    /// Sort rank: high before medium.
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
        }
    }
}
