//! Turning validated drafts into roster entries.
//!
//! Each `submit_*` function validates the draft, builds the new entry with
//! id `(count + 1)` and prepends it to the list it belongs to. Ids are not
//! collision-checked. Resetting the draft and closing the modal is left to
//! the page that owns them.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use medidash_contracts::{
    appointment::{Appointment, MedicalRecord},
    error::MedidashResult,
    patient::{ClinicalNote, Patient},
};
use medidash_core::grouping::{format_clock, parse_clock};

use crate::{
    draft::{AppointmentDraft, NoteDraft, PatientDraft, RecordDraft},
    schema::FormKind,
    verifier::{invalid, FormVerifier},
};

/// Patient a record is filed under when the form names none.
pub const FALLBACK_PATIENT_ID: &str = "1";
pub const FALLBACK_PATIENT_NAME: &str = "Emma Wilson";

pub const SCHEDULED_STATUS: &str = "Scheduled";
pub const COMPLETED_STATUS: &str = "Completed";
pub const DEFAULT_FILE_NAME: &str = "document.pdf";

fn next_id(count: usize) -> String {
    (count + 1).to_string()
}

/// Add a patient to the front of `roster`. `lastVisit` is `today`.
pub fn submit_patient(
    verifier: &FormVerifier,
    draft: &PatientDraft,
    roster: &mut Vec<Patient>,
    today: NaiveDate,
) -> MedidashResult<Patient> {
    verifier.check(FormKind::Patient, draft)?;

    let age: i64 = draft.age.trim().parse().map_err(|e| {
        invalid(
            FormKind::Patient,
            vec![format!("/age: '{}' is not a whole number: {}", draft.age, e)],
        )
    })?;

    let patient = Patient {
        id: next_id(roster.len()),
        name: draft.name.clone(),
        age,
        gender: draft.gender.clone(),
        phone: draft.phone.clone(),
        email: draft.email.clone(),
        address: draft.address.clone(),
        last_visit: today,
        condition: draft.condition.clone(),
    };

    info!(patient_id = %patient.id, "patient added");
    roster.insert(0, patient.clone());
    Ok(patient)
}

/// Schedule an appointment for the selected roster patient.
///
/// Returns `Ok(None)` without touching `appointments` when no patient is
/// selected or the selected id is not on the roster.
pub fn submit_appointment(
    verifier: &FormVerifier,
    draft: &AppointmentDraft,
    roster: &[Patient],
    appointments: &mut Vec<Appointment>,
) -> MedidashResult<Option<Appointment>> {
    verifier.check(FormKind::Appointment, draft)?;

    let Some(patient) = roster.iter().find(|p| p.id == draft.patient_id) else {
        debug!(patient_id = %draft.patient_id, "no roster patient selected; appointment dropped");
        return Ok(None);
    };

    let time = parse_clock(&draft.time).map(format_clock).ok_or_else(|| {
        invalid(
            FormKind::Appointment,
            vec![format!("/time: '{}' is not a time of day", draft.time)],
        )
    })?;

    let duration: u32 = draft.duration.trim().parse().map_err(|e| {
        invalid(
            FormKind::Appointment,
            vec![format!("/duration: '{}' is not a number of minutes: {}", draft.duration, e)],
        )
    })?;

    let appointment = Appointment {
        id: next_id(appointments.len()),
        patient_id: patient.id.clone(),
        patient_name: patient.name.clone(),
        date: draft.date,
        time,
        duration,
        appointment_type: draft.appointment_type.clone(),
        doctor: draft.doctor.clone(),
        status: SCHEDULED_STATUS.to_string(),
        notes: draft.notes.clone(),
    };

    info!(
        appointment_id = %appointment.id,
        patient_id = %appointment.patient_id,
        date = %appointment.date,
        "appointment scheduled"
    );
    appointments.insert(0, appointment.clone());
    Ok(Some(appointment))
}

/// File a medical record dated `today` with status `Completed`.
///
/// The record goes to the selected roster patient, or to the fallback
/// patient when none is selected or the selection is not on the roster.
pub fn submit_record(
    verifier: &FormVerifier,
    draft: &RecordDraft,
    roster: &[Patient],
    records: &mut Vec<MedicalRecord>,
    today: NaiveDate,
) -> MedidashResult<MedicalRecord> {
    verifier.check(FormKind::Record, draft)?;

    let (patient_id, patient_name) = match roster.iter().find(|p| p.id == draft.patient_id) {
        Some(p) => (p.id.clone(), p.name.clone()),
        None => {
            if !draft.patient_id.is_empty() {
                warn!(patient_id = %draft.patient_id, "unknown patient on record; using fallback");
            }
            (FALLBACK_PATIENT_ID.to_string(), FALLBACK_PATIENT_NAME.to_string())
        }
    };

    let file_name = draft
        .file_name
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .unwrap_or(DEFAULT_FILE_NAME)
        .to_string();

    let record = MedicalRecord {
        id: next_id(records.len()),
        patient_id,
        patient_name,
        record_type: draft.record_type.clone(),
        date: today,
        doctor: draft.doctor.clone(),
        description: draft.description.clone(),
        status: COMPLETED_STATUS.to_string(),
        file_name,
    };

    info!(record_id = %record.id, patient_id = %record.patient_id, "record uploaded");
    records.insert(0, record.clone());
    Ok(record)
}

/// Prepend a clinical note.
pub fn submit_note(
    verifier: &FormVerifier,
    draft: &NoteDraft,
    notes: &mut Vec<ClinicalNote>,
) -> MedidashResult<ClinicalNote> {
    verifier.check(FormKind::Note, draft)?;
    let note = ClinicalNote::new(draft.title.clone(), draft.content.clone());
    debug!(note_id = %note.id, "note added");
    notes.insert(0, note.clone());
    Ok(note)
}
