//! Export of report measurements as JSON or CSV.

use serde::{Deserialize, Serialize};

use crate::comparison::categorize::categorize;
use crate::comparison::{ComparisonError, ComparisonReport, KeywordTaxonomy};
use crate::models::{MeasuredValue, Measurement, Report};

pub const CSV_HEADER: &str = "Category,Test Name,Value,Unit,Reference Range,Status,Remarks";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ComparisonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(ComparisonError::UnsupportedFormat(s.into())),
        }
    }
}

/// Rendered export ready to hand to a download.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedDocument {
    pub format: ExportFormat,
    pub content: String,
    pub filename: String,
}

/// Numeric cell text. Whole numbers keep one decimal ("95.0") so exported
/// values read the same as the extraction output.
fn number_cell(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

fn value_cell(value: &MeasuredValue) -> String {
    match value.as_number() {
        Some(n) => number_cell(n),
        None => value.to_string(),
    }
}

/// Wrap in double quotes, doubling embedded quotes.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn csv_row(m: &Measurement, taxonomy: &KeywordTaxonomy) -> String {
    let category = m
        .category
        .clone()
        .unwrap_or_else(|| categorize(&m.name, taxonomy).as_str().to_string());
    let value = m.value.as_ref().map(value_cell).unwrap_or_default();

    [
        category.as_str(),
        m.name.as_str(),
        value.as_str(),
        m.unit.as_deref().unwrap_or(""),
        m.reference_range.as_deref().unwrap_or(""),
        m.status.as_deref().unwrap_or(""),
        m.remarks.as_deref().unwrap_or(""),
    ]
    .iter()
    .map(|f| quote(f))
    .collect::<Vec<_>>()
    .join(",")
}

/// CSV with a fixed header and every field quoted. Rows are joined by `\n`
/// with no trailing newline.
pub fn measurements_to_csv(measurements: &[Measurement], taxonomy: &KeywordTaxonomy) -> String {
    std::iter::once(CSV_HEADER.to_string())
        .chain(measurements.iter().map(|m| csv_row(m, taxonomy)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn measurements_to_json(measurements: &[Measurement]) -> Result<String, ComparisonError> {
    Ok(serde_json::to_string_pretty(measurements)?)
}

pub fn comparison_to_json(report: &ComparisonReport) -> Result<String, ComparisonError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Export a report's measurements in the requested format.
pub fn export_report(
    report: &Report,
    format: ExportFormat,
    taxonomy: &KeywordTaxonomy,
) -> Result<ExportedDocument, ComparisonError> {
    let content = match format {
        ExportFormat::Json => measurements_to_json(&report.measurements)?,
        ExportFormat::Csv => measurements_to_csv(&report.measurements, taxonomy),
    };
    Ok(ExportedDocument {
        format,
        content,
        filename: format!("{}_export.{}", report.file_name, format.as_str()),
    })
}
