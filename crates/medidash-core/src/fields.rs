//! Column definitions for the three listed record types.

use medidash_contracts::{
    appointment::{Appointment, MedicalRecord},
    patient::Patient,
};

use crate::listing::{FieldValue, Listable};

/// Patient roster columns. Search covers name, email and condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatientField {
    Name,
    Age,
    Gender,
    LastVisit,
    Condition,
}

impl PatientField {
    /// Columns whose header toggles the sort.
    pub const SORTABLE: [PatientField; 3] = [PatientField::Name, PatientField::Age, PatientField::LastVisit];

    pub fn label(self) -> &'static str {
        match self {
            PatientField::Name => "Name",
            PatientField::Age => "Age",
            PatientField::Gender => "Gender",
            PatientField::LastVisit => "Last Visit",
            PatientField::Condition => "Condition",
        }
    }
}

impl Listable for Patient {
    type Field = PatientField;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.condition.as_str()]
    }

    fn field(&self, field: PatientField) -> FieldValue<'_> {
        match field {
            PatientField::Name => FieldValue::Text(&self.name),
            PatientField::Age => FieldValue::Number(self.age),
            PatientField::Gender => FieldValue::Text(&self.gender),
            PatientField::LastVisit => FieldValue::Date(self.last_visit),
            PatientField::Condition => FieldValue::Text(&self.condition),
        }
    }
}

/// Scheduler columns. Search covers patient name, type and doctor; date and
/// type are exact-match filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppointmentField {
    PatientName,
    Date,
    Type,
    Doctor,
    Status,
}

impl Listable for Appointment {
    type Field = AppointmentField;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.patient_name.as_str(),
            self.appointment_type.as_str(),
            self.doctor.as_str(),
        ]
    }

    fn field(&self, field: AppointmentField) -> FieldValue<'_> {
        match field {
            AppointmentField::PatientName => FieldValue::Text(&self.patient_name),
            AppointmentField::Date => FieldValue::Date(self.date),
            AppointmentField::Type => FieldValue::Text(&self.appointment_type),
            AppointmentField::Doctor => FieldValue::Text(&self.doctor),
            AppointmentField::Status => FieldValue::Text(&self.status),
        }
    }
}

/// Medical record columns. Search covers patient name, description and
/// doctor; type is an exact-match filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    PatientName,
    Type,
    Description,
    Date,
    Doctor,
}

impl RecordField {
    pub const SORTABLE: [RecordField; 5] = [
        RecordField::PatientName,
        RecordField::Type,
        RecordField::Description,
        RecordField::Date,
        RecordField::Doctor,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RecordField::PatientName => "Patient",
            RecordField::Type => "Type",
            RecordField::Description => "Description",
            RecordField::Date => "Date",
            RecordField::Doctor => "Doctor",
        }
    }
}

impl Listable for MedicalRecord {
    type Field = RecordField;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.patient_name.as_str(),
            self.description.as_str(),
            self.doctor.as_str(),
        ]
    }

    fn field(&self, field: RecordField) -> FieldValue<'_> {
        match field {
            RecordField::PatientName => FieldValue::Text(&self.patient_name),
            RecordField::Type => FieldValue::Text(&self.record_type),
            RecordField::Description => FieldValue::Text(&self.description),
            RecordField::Date => FieldValue::Date(self.date),
            RecordField::Doctor => FieldValue::Text(&self.doctor),
        }
    }
}
