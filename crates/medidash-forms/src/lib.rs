//! # medidash-forms
//!
//! Creation forms for the MEDIDASH dashboard: add patient, schedule
//! appointment, upload record and add note.
//!
//! ## Overview
//!
//! A form is edited as a text-only draft ([`PatientDraft`],
//! [`AppointmentDraft`], [`RecordDraft`], [`NoteDraft`]). On submit the draft
//! is serialized to JSON and checked by [`FormVerifier`] against the form's
//! JSON Schema, which emulates browser required-field semantics. A valid
//! draft becomes a new entry with id `count + 1`, prepended to its list.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use medidash_forms::{submit_patient, FormVerifier, PatientDraft};
//!
//! let verifier = FormVerifier::new()?;
//! let patient = submit_patient(&verifier, &draft, &mut roster, today)?;
//! ```

pub mod draft;
pub mod options;
pub mod schema;
pub mod submit;
pub mod verifier;

pub use draft::{AppointmentDraft, NoteDraft, PatientDraft, RecordDraft};
pub use schema::FormKind;
pub use submit::{submit_appointment, submit_note, submit_patient, submit_record};
pub use verifier::FormVerifier;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use medidash_contracts::{
        appointment::{Appointment, MedicalRecord},
        error::MedidashError,
        patient::Patient,
    };

    use crate::{
        submit::{DEFAULT_FILE_NAME, FALLBACK_PATIENT_NAME},
        submit_appointment, submit_note, submit_patient, submit_record, AppointmentDraft,
        FormKind, FormVerifier, NoteDraft, PatientDraft, RecordDraft,
    };

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn verifier() -> FormVerifier {
        FormVerifier::new().expect("form schemas must compile")
    }

    /// A roster of `n` patients with ids `"1"..="n"`.
    fn roster(n: usize) -> Vec<Patient> {
        (1..=n)
            .map(|i| Patient {
                id: i.to_string(),
                name: format!("Patient {}", i),
                age: 30,
                gender: "Female".to_string(),
                phone: "(555) 000-0000".to_string(),
                email: format!("patient{}@example.com", i),
                address: "1 Main St".to_string(),
                last_visit: day("2025-04-01"),
                condition: "Asthma".to_string(),
            })
            .collect()
    }

    fn test_patient_draft() -> PatientDraft {
        PatientDraft {
            name: "Test Patient".to_string(),
            age: "40".to_string(),
            gender: "Male".to_string(),
            phone: "(555) 111-2222".to_string(),
            email: "test.patient@example.com".to_string(),
            address: "1 Test Way".to_string(),
            condition: "Checkup".to_string(),
        }
    }

    fn reasons(err: MedidashError) -> (String, Vec<String>) {
        match err {
            MedidashError::FormInvalid { form, reasons } => (form, reasons),
            other => panic!("expected FormInvalid, got {:?}", other),
        }
    }

    // ── 1. add patient ────────────────────────────────────────────────────────

    #[test]
    fn add_patient_gets_next_id_and_is_prepended() {
        let mut patients = roster(10);
        let today = day("2025-04-15");

        let created = submit_patient(&verifier(), &test_patient_draft(), &mut patients, today).unwrap();

        assert_eq!(created.id, "11");
        assert_eq!(created.age, 40);
        assert_eq!(created.last_visit, today);
        assert_eq!(patients.len(), 11);
        assert_eq!(patients[0], created);
        assert_eq!(patients[1].id, "1");
    }

    #[test]
    fn add_patient_reports_every_missing_field() {
        let mut patients = roster(2);
        let draft = PatientDraft {
            name: "Only A Name".to_string(),
            ..PatientDraft::default()
        };

        let err = submit_patient(&verifier(), &draft, &mut patients, day("2025-04-15")).unwrap_err();
        let (form, reasons) = reasons(err);

        assert_eq!(form, "add-patient");
        for field in ["/age", "/gender", "/phone", "/email", "/address", "/condition"] {
            assert!(reasons.iter().any(|r| r.starts_with(field)), "no reason for {}: {:?}", field, reasons);
        }
        assert!(!reasons.iter().any(|r| r.starts_with("/name")));
        assert_eq!(patients.len(), 2, "rejected draft must not touch the roster");
    }

    #[test]
    fn add_patient_age_must_be_an_integer_without_bounds() {
        let v = verifier();
        let mut patients = roster(1);

        let mut draft = test_patient_draft();
        draft.age = "forty".to_string();
        assert!(submit_patient(&v, &draft, &mut patients, day("2025-04-15")).is_err());

        draft.age = "130".to_string();
        assert_eq!(
            submit_patient(&v, &draft, &mut patients, day("2025-04-15")).unwrap().age,
            130
        );
    }

    #[test]
    fn gender_must_come_from_the_select_list() {
        let mut draft = test_patient_draft();
        draft.gender = "Unknown".to_string();
        let err = verifier().check(FormKind::Patient, &draft).unwrap_err();
        assert!(reasons(err).1.iter().any(|r| r.starts_with("/gender")));
    }

    // ── 2. schedule appointment ───────────────────────────────────────────────

    #[test]
    fn appointment_draft_defaults() {
        let draft = AppointmentDraft::new(day("2025-04-15"));
        assert_eq!(draft.patient_id, "");
        assert_eq!(draft.time, "09:00");
        assert_eq!(draft.duration, "30");
        assert_eq!(draft.appointment_type, "Follow-up");
        assert_eq!(draft.doctor, "Dr. John Smith");
        assert_eq!(draft.date, day("2025-04-15"));
    }

    #[test]
    fn appointment_for_roster_patient_is_scheduled() {
        let patients = roster(3);
        let mut appointments: Vec<Appointment> = Vec::new();
        let mut draft = AppointmentDraft::new(day("2025-04-20"));
        draft.patient_id = "2".to_string();
        draft.time = "13:30".to_string();
        draft.duration = "45".to_string();

        let created = submit_appointment(&verifier(), &draft, &patients, &mut appointments)
            .unwrap()
            .expect("patient 2 is on the roster");

        assert_eq!(created.id, "1");
        assert_eq!(created.patient_name, "Patient 2");
        assert_eq!(created.time, "01:30 PM");
        assert_eq!(created.duration, 45);
        assert_eq!(created.status, "Scheduled");
        assert_eq!(created.date.to_string(), "2025-04-20");
        assert_eq!(appointments, vec![created]);
    }

    #[test]
    fn appointment_keeps_an_already_formatted_time() {
        let patients = roster(1);
        let mut appointments = Vec::new();
        let mut draft = AppointmentDraft::new(day("2025-04-20"));
        draft.patient_id = "1".to_string();
        draft.time = "09:00 AM".to_string();

        let created = submit_appointment(&verifier(), &draft, &patients, &mut appointments)
            .unwrap()
            .unwrap();
        assert_eq!(created.time, "09:00 AM");
    }

    #[test]
    fn appointment_without_known_patient_is_dropped() {
        let v = verifier();
        let patients = roster(3);
        let mut appointments = Vec::new();

        let draft = AppointmentDraft::new(day("2025-04-20"));
        assert_eq!(submit_appointment(&v, &draft, &patients, &mut appointments).unwrap(), None);

        let mut unknown = draft.clone();
        unknown.patient_id = "99".to_string();
        assert_eq!(submit_appointment(&v, &unknown, &patients, &mut appointments).unwrap(), None);

        assert!(appointments.is_empty());
    }

    #[test]
    fn appointment_duration_must_be_numeric() {
        let patients = roster(1);
        let mut appointments = Vec::new();
        let mut draft = AppointmentDraft::new(day("2025-04-20"));
        draft.patient_id = "1".to_string();
        draft.duration = "half an hour".to_string();

        let err = submit_appointment(&verifier(), &draft, &patients, &mut appointments).unwrap_err();
        assert_eq!(reasons(err).0, "schedule-appointment");
        assert!(appointments.is_empty());
    }

    // ── 3. upload record ──────────────────────────────────────────────────────

    #[test]
    fn record_without_patient_uses_fallback_and_default_file() {
        let patients = roster(3);
        let mut records: Vec<MedicalRecord> = Vec::new();
        let draft = RecordDraft {
            description: "Thyroid panel".to_string(),
            ..RecordDraft::default()
        };

        let created =
            submit_record(&verifier(), &draft, &patients, &mut records, day("2025-04-15")).unwrap();

        assert_eq!(created.id, "1");
        assert_eq!(created.patient_id, "1");
        assert_eq!(created.patient_name, FALLBACK_PATIENT_NAME);
        assert_eq!(created.record_type, "Lab Results");
        assert_eq!(created.status, "Completed");
        assert_eq!(created.file_name, DEFAULT_FILE_NAME);
        assert_eq!(created.date, day("2025-04-15"));
    }

    #[test]
    fn record_for_selected_patient_keeps_file_name() {
        let patients = roster(3);
        let mut records = Vec::new();
        let draft = RecordDraft {
            patient_id: "3".to_string(),
            record_type: "Imaging".to_string(),
            description: "MRI".to_string(),
            file_name: Some("mri.pdf".to_string()),
            ..RecordDraft::default()
        };

        let created =
            submit_record(&verifier(), &draft, &patients, &mut records, day("2025-04-15")).unwrap();
        assert_eq!(created.patient_name, "Patient 3");
        assert_eq!(created.file_name, "mri.pdf");
    }

    #[test]
    fn record_requires_a_description() {
        let mut records = Vec::new();
        let err = submit_record(
            &verifier(),
            &RecordDraft::default(),
            &roster(1),
            &mut records,
            day("2025-04-15"),
        )
        .unwrap_err();
        assert!(reasons(err).1.iter().any(|r| r.starts_with("/description")));
        assert!(records.is_empty());
    }

    // ── 4. add note ───────────────────────────────────────────────────────────

    #[test]
    fn notes_are_prepended_and_require_both_fields() {
        let v = verifier();
        let mut notes = Vec::new();

        let first = submit_note(
            &v,
            &NoteDraft {
                title: "BP".to_string(),
                content: "Stable".to_string(),
            },
            &mut notes,
        )
        .unwrap();
        let second = submit_note(
            &v,
            &NoteDraft {
                title: "Follow-up".to_string(),
                content: "Call in two weeks".to_string(),
            },
            &mut notes,
        )
        .unwrap();

        assert_eq!(notes, vec![second, first]);

        let empty = NoteDraft {
            title: "No content".to_string(),
            content: String::new(),
        };
        assert!(submit_note(&v, &empty, &mut notes).is_err());
        assert_eq!(notes.len(), 2);
    }
}
