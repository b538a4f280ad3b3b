pub mod categorize;
pub mod engine;
pub mod helpers;
pub mod insights;
pub mod matcher;
pub mod messages;
pub mod reference;
pub mod summary;
pub mod trend;
pub mod types;

pub use engine::DefaultComparisonEngine;
pub use reference::{CategoryKeywords, KeywordTaxonomy};
pub use types::{
    CategoryBreakdown, CategoryScore, ComparisonEngine, ComparisonError, ComparisonReport,
    CriticalChange, Summary, TimelineEntry, TrendDistribution, VisualizationData,
};
