//! Scheduler and medical-record entries.
//!
//! Both carry a `patient_id` that should reference a roster `Patient`. Nothing
//! enforces this; records created ad hoc may dangle.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One scheduled visit.
///
/// `time` is kept as the displayed clock string (`"09:00 AM"`). `status` is a
/// free string; the dashboard never enforces transitions between values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub date: NaiveDate,
    pub time: String,
    /// Minutes.
    pub duration: u32,
    #[serde(rename = "type")]
    pub appointment_type: String,
    pub doctor: String,
    pub status: String,
    pub notes: String,
}

/// One document in the medical-records listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub date: NaiveDate,
    pub doctor: String,
    pub description: String,
    pub status: String,
    pub file_name: String,
}
