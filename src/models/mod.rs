pub mod comparison;
pub mod enums;
pub mod measurement;
pub mod report;

pub use comparison::ComparisonResult;
pub use enums::{Category, OverallTrend, Severity, Trend};
pub use measurement::{MeasuredValue, Measurement};
pub use report::Report;
