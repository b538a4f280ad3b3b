//! Report pairing and comparison records.
//!
//! Selects which two reports to compare and packages the engine output into
//! the record shape a persistence layer stores. Nothing here performs I/O:
//! callers fetch reports and write records themselves.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::comparison::{ComparisonEngine, ComparisonError, ComparisonReport, Summary};
use crate::models::{ComparisonResult, Report};

/// Metadata about one side of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportInfo {
    pub id: Uuid,
    pub file_name: String,
    pub date: NaiveDateTime,
    pub parameters_count: usize,
}

impl ReportInfo {
    pub fn from_report(report: &Report) -> Self {
        Self {
            id: report.id,
            file_name: report.file_name.clone(),
            date: report.report_date,
            parameters_count: report.measurements.len(),
        }
    }
}

/// Identity of a stored comparison. One record per key; the latest
/// comparison for a key replaces the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordKey {
    pub user_id: Uuid,
    pub old_report_id: Uuid,
    pub new_report_id: Uuid,
}

/// A comparison as handed to persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    pub comparison_id: Uuid,
    pub user_id: Uuid,
    pub old_report_id: Uuid,
    pub new_report_id: Uuid,
    pub comparison_date: NaiveDateTime,
    pub comparisons: Vec<ComparisonResult>,
    pub summary: Summary,
    pub old_report_info: ReportInfo,
    pub new_report_info: ReportInfo,
}

impl ComparisonRecord {
    pub fn new(
        user_id: Uuid,
        old: &Report,
        new: &Report,
        report: ComparisonReport,
        comparison_date: NaiveDateTime,
    ) -> Self {
        Self {
            comparison_id: Uuid::new_v4(),
            user_id,
            old_report_id: old.id,
            new_report_id: new.id,
            comparison_date,
            comparisons: report.comparisons,
            summary: report.summary,
            old_report_info: ReportInfo::from_report(old),
            new_report_info: ReportInfo::from_report(new),
        }
    }

    pub fn key(&self) -> RecordKey {
        RecordKey {
            user_id: self.user_id,
            old_report_id: self.old_report_id,
            new_report_id: self.new_report_id,
        }
    }

    /// Upsert semantics: every field comes from `self`, except that an
    /// existing record with the same key keeps its `comparison_id`.
    pub fn upsert_over(mut self, existing: Option<&ComparisonRecord>) -> Self {
        if let Some(prev) = existing.filter(|prev| prev.key() == self.key()) {
            self.comparison_id = prev.comparison_id;
        }
        self
    }
}

/// Number of records returned by a history listing when no limit is given.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// A user's stored comparisons, newest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonHistory<'a> {
    /// Number of records returned (after the limit).
    pub total_comparisons: usize,
    pub comparisons: Vec<&'a ComparisonRecord>,
}

/// Records owned by `user_id`, newest `comparison_date` first, at most
/// `limit` of them. Records sharing a date keep their input order.
pub fn history_for_user<'a>(
    records: &'a [ComparisonRecord],
    user_id: &Uuid,
    limit: usize,
) -> ComparisonHistory<'a> {
    let mut owned: Vec<&'a ComparisonRecord> =
        records.iter().filter(|r| r.user_id == *user_id).collect();
    owned.sort_by(|a, b| b.comparison_date.cmp(&a.comparison_date));
    owned.truncate(limit);
    ComparisonHistory {
        total_comparisons: owned.len(),
        comparisons: owned,
    }
}

/// A single record by id, visible only to the user who owns it.
pub fn find_record<'a>(
    records: &'a [ComparisonRecord],
    comparison_id: &Uuid,
    user_id: &Uuid,
) -> Option<&'a ComparisonRecord> {
    records
        .iter()
        .find(|r| r.comparison_id == *comparison_id && r.user_id == *user_id)
}

/// Reports owned by `user_id`, in input order.
pub fn reports_for_user<'a>(reports: &'a [Report], user_id: &Uuid) -> Vec<&'a Report> {
    reports.iter().filter(|r| r.user_id == *user_id).collect()
}

/// The two most recent reports by date, as `(older, newer)`.
/// Reports sharing a date keep their input order.
pub fn select_latest_pair<'a>(
    reports: &[&'a Report],
) -> Result<(&'a Report, &'a Report), ComparisonError> {
    if reports.len() < 2 {
        return Err(ComparisonError::NotEnoughReports {
            found: reports.len(),
        });
    }
    let mut sorted: Vec<&'a Report> = reports.to_vec();
    sorted.sort_by(|a, b| b.report_date.cmp(&a.report_date));
    Ok((sorted[1], sorted[0]))
}

/// Compare two reports and package the result for storage.
pub fn compare_reports<E: ComparisonEngine>(
    engine: &E,
    user_id: Uuid,
    old: &Report,
    new: &Report,
) -> ComparisonRecord {
    let report = engine.run(&old.measurements, &new.measurements);
    let record = ComparisonRecord::new(user_id, old, new, report, Utc::now().naive_utc());
    tracing::info!(
        comparison_id = %record.comparison_id,
        user_id = %user_id,
        old_report_id = %old.id,
        new_report_id = %new.id,
        "Built comparison record"
    );
    record
}

/// Compare a user's two most recent reports.
pub fn compare_latest<E: ComparisonEngine>(
    engine: &E,
    reports: &[Report],
    user_id: Uuid,
) -> Result<ComparisonRecord, ComparisonError> {
    let owned = reports_for_user(reports, &user_id);
    let (old, new) = select_latest_pair(&owned)?;
    Ok(compare_reports(engine, user_id, old, new))
}
