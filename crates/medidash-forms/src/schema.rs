//! JSON Schema documents for the creation forms.
//!
//! The schemas reproduce what the browser enforces on `required` inputs:
//! the field must be present and non-empty. Beyond that only input-type
//! constraints are checked (an integer age, a plausible e-mail, a gender from
//! the select list). No range or length limits.

use serde_json::{json, Value};

use crate::options::GENDERS;

/// Which form a draft belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Patient,
    Appointment,
    Record,
    Note,
}

impl FormKind {
    pub const ALL: [FormKind; 4] = [
        FormKind::Patient,
        FormKind::Appointment,
        FormKind::Record,
        FormKind::Note,
    ];

    /// Name used in `FormInvalid` errors and logs.
    pub fn name(self) -> &'static str {
        match self {
            FormKind::Patient => "add-patient",
            FormKind::Appointment => "schedule-appointment",
            FormKind::Record => "upload-record",
            FormKind::Note => "add-note",
        }
    }

    pub fn schema(self) -> Value {
        match self {
            FormKind::Patient => json!({
                "type": "object",
                "required": ["name", "age", "gender", "phone", "email", "address", "condition"],
                "properties": {
                    "name": { "type": "string", "minLength": 1 },
                    "age": { "type": "string", "pattern": "^-?[0-9]+$" },
                    "gender": { "type": "string", "enum": GENDERS },
                    "phone": { "type": "string", "minLength": 1 },
                    "email": { "type": "string", "pattern": "^[^@\\s]+@[^@\\s]+$" },
                    "address": { "type": "string", "minLength": 1 },
                    "condition": { "type": "string", "minLength": 1 }
                }
            }),
            // No patientId: a missing patient drops the submission instead.
            FormKind::Appointment => json!({
                "type": "object",
                "required": ["date", "time", "duration", "type", "doctor"],
                "properties": {
                    "date": { "type": "string", "minLength": 1 },
                    "time": { "type": "string", "minLength": 1 },
                    "duration": { "type": "string", "pattern": "^[0-9]+$" },
                    "type": { "type": "string", "minLength": 1 },
                    "doctor": { "type": "string", "minLength": 1 },
                    "notes": { "type": "string" }
                }
            }),
            FormKind::Record => json!({
                "type": "object",
                "required": ["type", "description", "doctor"],
                "properties": {
                    "type": { "type": "string", "minLength": 1 },
                    "description": { "type": "string", "minLength": 1 },
                    "doctor": { "type": "string", "minLength": 1 },
                    "fileName": { "type": ["string", "null"] }
                }
            }),
            FormKind::Note => json!({
                "type": "object",
                "required": ["title", "content"],
                "properties": {
                    "title": { "type": "string", "minLength": 1 },
                    "content": { "type": "string", "minLength": 1 }
                }
            }),
        }
    }
}
