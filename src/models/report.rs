use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::measurement::Measurement;

/// An uploaded report with its extracted measurements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: Uuid,
    pub user_id: Uuid,
    /// blood_test, lipid_panel, etc.
    pub report_type: String,
    pub report_date: NaiveDateTime,
    pub file_name: String,
    #[serde(default)]
    pub measurements: Vec<Measurement>,
}
