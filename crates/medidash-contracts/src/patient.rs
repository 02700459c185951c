//! Patient roster and patient chart types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the patient roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Roster identifier. New patients get `count + 1`; not collision-checked.
    pub id: String,
    pub name: String,
    pub age: i64,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub last_visit: NaiveDate,
    pub condition: String,
}

/// Minimal patient reference used by selectors and linked records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRef {
    pub id: String,
    pub name: String,
}

impl From<&Patient> for PatientRef {
    fn from(p: &Patient) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
        }
    }
}

/// Who to call for the patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub relation: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub diagnosis: String,
    pub doctor: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub start_date: NaiveDate,
}

/// A past or upcoming visit as listed on the chart (not a scheduler entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitEntry {
    pub date: NaiveDate,
    pub time: String,
    #[serde(rename = "type")]
    pub visit_type: String,
    pub doctor: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalSigns {
    pub date: NaiveDate,
    pub blood_pressure: String,
    pub heart_rate: u32,
    pub temperature: String,
    pub respiratory_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabResult {
    pub date: NaiveDate,
    pub test: String,
    pub result: String,
    pub notes: String,
}

impl LabResult {
    /// True when the lab flagged the result as outside the normal range.
    pub fn is_abnormal(&self) -> bool {
        self.result.eq_ignore_ascii_case("abnormal")
    }
}

/// Clinical detail shown on the patient detail view.
///
/// Every list is ordered most recent first, as charted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientChart {
    pub blood_type: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub allergies: Vec<String>,
    pub emergency_contact: Option<EmergencyContact>,
    pub medical_history: Vec<HistoryEntry>,
    pub medications: Vec<Medication>,
    pub appointments: Vec<VisitEntry>,
    pub vital_signs: Vec<VitalSigns>,
    pub lab_results: Vec<LabResult>,
}

/// A free-text note added from the patient detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalNote {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ClinicalNote {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}
