//! Modal form layout and field access.
//!
//! Each modal is a column of fields. Text fields take typed characters;
//! choice fields cycle through their options with ←/→; the appointment date
//! moves a day at a time.

use medidash_forms::{
    options::{APPOINTMENT_TYPES, DOCTORS, DURATIONS, GENDERS, RECORD_TYPES, TIME_SLOTS},
    AppointmentDraft, NoteDraft, PatientDraft, RecordDraft,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    AddPatient,
    Schedule,
    UploadRecord,
    AddNote,
}

impl Modal {
    pub fn title(self) -> &'static str {
        match self {
            Modal::AddPatient => " Add New Patient ",
            Modal::Schedule => " Schedule Appointment ",
            Modal::UploadRecord => " Upload Medical Record ",
            Modal::AddNote => " Add Clinical Note ",
        }
    }

    pub fn fields(self) -> &'static [FieldId] {
        match self {
            Modal::AddPatient => &[
                FieldId::Name,
                FieldId::Age,
                FieldId::Gender,
                FieldId::Phone,
                FieldId::Email,
                FieldId::Address,
                FieldId::Condition,
            ],
            Modal::Schedule => &[
                FieldId::Patient,
                FieldId::Date,
                FieldId::Time,
                FieldId::Duration,
                FieldId::AppointmentType,
                FieldId::Doctor,
                FieldId::Notes,
            ],
            Modal::UploadRecord => &[
                FieldId::Patient,
                FieldId::RecordType,
                FieldId::Description,
                FieldId::Doctor,
                FieldId::File,
            ],
            Modal::AddNote => &[FieldId::Title, FieldId::Content],
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Modal::AddPatient => "Add Patient",
            Modal::Schedule => "Schedule",
            Modal::UploadRecord => "Upload",
            Modal::AddNote => "Save Note",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    Age,
    Gender,
    Phone,
    Email,
    Address,
    Condition,
    Patient,
    Date,
    Time,
    Duration,
    AppointmentType,
    RecordType,
    Description,
    Doctor,
    Notes,
    File,
    Title,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Choice,
    Date,
}

impl FieldId {
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Full Name",
            FieldId::Age => "Age",
            FieldId::Gender => "Gender",
            FieldId::Phone => "Phone",
            FieldId::Email => "Email",
            FieldId::Address => "Address",
            FieldId::Condition => "Medical Condition",
            FieldId::Patient => "Patient",
            FieldId::Date => "Date",
            FieldId::Time => "Time",
            FieldId::Duration => "Duration (min)",
            FieldId::AppointmentType => "Appointment Type",
            FieldId::RecordType => "Record Type",
            FieldId::Description => "Description",
            FieldId::Doctor => "Doctor",
            FieldId::Notes => "Notes",
            FieldId::File => "File",
            FieldId::Title => "Title",
            FieldId::Content => "Note",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldId::Gender
            | FieldId::Patient
            | FieldId::Time
            | FieldId::Duration
            | FieldId::AppointmentType
            | FieldId::RecordType
            | FieldId::Doctor => FieldKind::Choice,
            FieldId::Date => FieldKind::Date,
            _ => FieldKind::Text,
        }
    }

    /// Fixed options of a choice field. The patient list comes from the
    /// page's roster instead.
    pub fn options(self) -> Vec<String> {
        let fixed: &[&str] = match self {
            FieldId::Gender => &GENDERS,
            FieldId::Time => &TIME_SLOTS,
            FieldId::AppointmentType => &APPOINTMENT_TYPES,
            FieldId::RecordType => &RECORD_TYPES,
            FieldId::Doctor => &DOCTORS,
            FieldId::Duration => return DURATIONS.iter().map(u32::to_string).collect(),
            _ => &[],
        };
        fixed.iter().map(|s| s.to_string()).collect()
    }
}

/// The option after (or before) `current`. A value not among the options
/// steps onto the first (or last) one.
pub fn cycle(options: &[String], current: &str, forward: bool) -> String {
    let n = options.len();
    if n == 0 {
        return current.to_string();
    }
    let next = match options.iter().position(|o| o == current) {
        Some(i) if forward => (i + 1) % n,
        Some(i) => (i + n - 1) % n,
        None if forward => 0,
        None => n - 1,
    };
    options[next].clone()
}

/// String-valued fields of a draft.
pub trait DraftFields {
    fn value(&self, id: FieldId) -> Option<&str>;
    fn slot(&mut self, id: FieldId) -> Option<&mut String>;
}

impl DraftFields for PatientDraft {
    fn value(&self, id: FieldId) -> Option<&str> {
        let v = match id {
            FieldId::Name => &self.name,
            FieldId::Age => &self.age,
            FieldId::Gender => &self.gender,
            FieldId::Phone => &self.phone,
            FieldId::Email => &self.email,
            FieldId::Address => &self.address,
            FieldId::Condition => &self.condition,
            _ => return None,
        };
        Some(v)
    }

    fn slot(&mut self, id: FieldId) -> Option<&mut String> {
        let v = match id {
            FieldId::Name => &mut self.name,
            FieldId::Age => &mut self.age,
            FieldId::Gender => &mut self.gender,
            FieldId::Phone => &mut self.phone,
            FieldId::Email => &mut self.email,
            FieldId::Address => &mut self.address,
            FieldId::Condition => &mut self.condition,
            _ => return None,
        };
        Some(v)
    }
}

impl DraftFields for AppointmentDraft {
    fn value(&self, id: FieldId) -> Option<&str> {
        let v = match id {
            FieldId::Patient => &self.patient_id,
            FieldId::Time => &self.time,
            FieldId::Duration => &self.duration,
            FieldId::AppointmentType => &self.appointment_type,
            FieldId::Doctor => &self.doctor,
            FieldId::Notes => &self.notes,
            _ => return None,
        };
        Some(v)
    }

    fn slot(&mut self, id: FieldId) -> Option<&mut String> {
        let v = match id {
            FieldId::Patient => &mut self.patient_id,
            FieldId::Time => &mut self.time,
            FieldId::Duration => &mut self.duration,
            FieldId::AppointmentType => &mut self.appointment_type,
            FieldId::Doctor => &mut self.doctor,
            FieldId::Notes => &mut self.notes,
            _ => return None,
        };
        Some(v)
    }
}

impl DraftFields for RecordDraft {
    fn value(&self, id: FieldId) -> Option<&str> {
        match id {
            FieldId::Patient => Some(&self.patient_id),
            FieldId::RecordType => Some(&self.record_type),
            FieldId::Description => Some(&self.description),
            FieldId::Doctor => Some(&self.doctor),
            FieldId::File => Some(self.file_name.as_deref().unwrap_or_default()),
            _ => None,
        }
    }

    fn slot(&mut self, id: FieldId) -> Option<&mut String> {
        match id {
            FieldId::Patient => Some(&mut self.patient_id),
            FieldId::RecordType => Some(&mut self.record_type),
            FieldId::Description => Some(&mut self.description),
            FieldId::Doctor => Some(&mut self.doctor),
            FieldId::File => Some(self.file_name.get_or_insert_with(String::new)),
            _ => None,
        }
    }
}

impl DraftFields for NoteDraft {
    fn value(&self, id: FieldId) -> Option<&str> {
        match id {
            FieldId::Title => Some(&self.title),
            FieldId::Content => Some(&self.content),
            _ => None,
        }
    }

    fn slot(&mut self, id: FieldId) -> Option<&mut String> {
        match id {
            FieldId::Title => Some(&mut self.title),
            FieldId::Content => Some(&mut self.content),
            _ => None,
        }
    }
}
