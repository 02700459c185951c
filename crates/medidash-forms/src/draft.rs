//! Editable form drafts.
//!
//! Every field is kept as the text the user typed or selected; conversion to
//! typed values happens only on submit, after validation. Drafts serialize to
//! camelCase JSON, which is what the form schemas validate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::options::{
    DEFAULT_APPOINTMENT_TYPE, DEFAULT_DOCTOR, DEFAULT_DURATION, DEFAULT_RECORD_TYPE,
    DEFAULT_TIME_SLOT,
};

/// The add-patient form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDraft {
    pub name: String,
    /// Must be an integer literal, as a number input would enforce.
    pub age: String,
    /// One of `Male`, `Female`, `Other`. Empty until selected.
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub condition: String,
}

/// The schedule-appointment form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDraft {
    /// Roster id of the selected patient; empty when nothing is selected.
    pub patient_id: String,
    pub date: NaiveDate,
    /// `"HH:MM"` from the slot list, or an already formatted `"hh:mm AM"`.
    pub time: String,
    /// Minutes, as text.
    pub duration: String,
    #[serde(rename = "type")]
    pub appointment_type: String,
    pub doctor: String,
    /// Optional.
    pub notes: String,
}

impl AppointmentDraft {
    /// A fresh draft dated `today` with the form's default selections.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            patient_id: String::new(),
            date: today,
            time: DEFAULT_TIME_SLOT.to_string(),
            duration: DEFAULT_DURATION.to_string(),
            appointment_type: DEFAULT_APPOINTMENT_TYPE.to_string(),
            doctor: DEFAULT_DOCTOR.to_string(),
            notes: String::new(),
        }
    }
}

/// The upload-record form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDraft {
    /// Optional. Empty means the fixed fallback patient.
    pub patient_id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub description: String,
    pub doctor: String,
    /// Name of the attached file, if any.
    pub file_name: Option<String>,
}

impl Default for RecordDraft {
    fn default() -> Self {
        Self {
            patient_id: String::new(),
            record_type: DEFAULT_RECORD_TYPE.to_string(),
            description: String::new(),
            doctor: DEFAULT_DOCTOR.to_string(),
            file_name: None,
        }
    }
}

/// The add-note form on the patient detail view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}
