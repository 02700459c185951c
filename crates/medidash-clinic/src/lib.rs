//! # medidash-clinic
//!
//! The clinic side of the MEDIDASH dashboard: built-in sample data, the state
//! behind every page, and the shell (sidebar links, sign-out).
//!
//! All clinical data is hardcoded and fictional and lives only in memory.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use medidash_clinic::Clinic;
//!
//! let mut clinic = Clinic::load()?;
//! clinic.patients.set_search("wilson");
//! for patient in clinic.patients.visible() {
//!     println!("{}", patient.name);
//! }
//! ```

pub mod clinic;
pub mod pages;
pub mod sample_data;
pub mod shell;

pub use clinic::Clinic;
pub use sample_data::SampleData;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use medidash_contracts::{
        navigation::{Navigation, View},
        patient::PatientChart,
    };
    use medidash_core::{
        fields::{PatientField, RecordField},
        listing::SortDirection,
        traits::RouteResolver,
        SessionManager,
    };
    use medidash_forms::{FormVerifier, PatientDraft};
    use medidash_router::TomlRouteTable;
    use medidash_storage::InMemoryStore;

    use crate::{
        pages::DetailTab,
        sample_data::patient_chart,
        shell::{active_item, sign_out},
        Clinic, SampleData,
    };

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn clinic() -> Clinic {
        Clinic::load().expect("sample data must load")
    }

    fn ids<'a, T: 'a>(rows: impl IntoIterator<Item = &'a T>, id: impl Fn(&T) -> &str) -> Vec<String> {
        rows.into_iter().map(|r| id(r).to_string()).collect()
    }

    // ── 1. sample data ────────────────────────────────────────────────────────

    #[test]
    fn sample_data_decodes() {
        let data = SampleData::load().unwrap();
        assert_eq!(data.patients.len(), 10);
        assert_eq!(data.appointments.len(), 10);
        assert_eq!(data.records.len(), 10);
        assert_eq!(data.dashboard.stats.len(), 4);
        assert_eq!(data.dashboard.stats[0].value, "1,284");
        assert_eq!(data.dashboard.recent_patients.len(), 5);
        assert_eq!(data.dashboard.upcoming_appointments[3].time, "02:15 PM");
        assert_eq!(data.records[3].status, "Active");
    }

    #[test]
    fn only_patient_one_has_a_chart() {
        let chart = patient_chart("1").unwrap();
        assert_eq!(chart.blood_type.as_deref(), Some("A+"));
        assert_eq!(chart.height.as_deref(), Some("5'6\""));
        assert_eq!(chart.allergies, vec!["Penicillin", "Peanuts"]);
        assert_eq!(chart.medications.len(), 2);
        assert_eq!(chart.vital_signs[2].heart_rate, 78);
        assert_eq!(chart.lab_results.iter().filter(|l| l.is_abnormal()).count(), 1);

        assert_eq!(patient_chart("2").unwrap(), PatientChart::default());
    }

    // ── 2. patients page ──────────────────────────────────────────────────────

    #[test]
    fn wilson_search_finds_both_wilsons() {
        let mut c = clinic();
        c.patients.set_search("wilson");
        let names: Vec<&str> = c.patients.visible().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Emma Wilson", "David Wilson"]);
        assert_eq!(c.patients.summary(), "Showing 1 to 2 of 2 results");
    }

    #[test]
    fn patients_start_unsorted_and_sort_ascending_first() {
        let mut c = clinic();
        assert_eq!(c.patients.sort().field(), None);
        assert_eq!(c.patients.visible()[0].name, "Emma Wilson");

        c.patients.sort_by(PatientField::Age);
        assert_eq!(c.patients.visible()[0].name, "Isabella Garcia");

        c.patients.sort_by(PatientField::Age);
        assert_eq!(c.patients.sort().direction(), SortDirection::Desc);
        assert_eq!(c.patients.visible()[0].name, "Robert Taylor");

        c.patients.set_search("no such patient");
        assert_eq!(c.patients.summary(), "Showing 0 to 0 of 0 results");
    }

    #[test]
    fn add_patient_prepends_and_closes_modal() {
        let mut c = clinic();
        c.patients.open_add();
        *c.patients.draft_mut().unwrap() = PatientDraft {
            name: "Test Patient".to_string(),
            age: "40".to_string(),
            gender: "Male".to_string(),
            phone: "(555) 000-1111".to_string(),
            email: "test.patient@example.com".to_string(),
            address: "1 Test Way".to_string(),
            condition: "Checkup".to_string(),
        };

        let created = c.add_patient(day("2025-04-15")).unwrap().unwrap();

        assert_eq!(created.id, "11");
        assert_eq!(c.patients.patients().len(), 11);
        assert_eq!(c.patients.patients()[0].name, "Test Patient");
        assert!(c.patients.draft().is_none());

        // The new patient's chart opens (empty) from the updated roster.
        let details = c.patient_details("11").unwrap().unwrap();
        assert!(details.chart().medical_history.is_empty());
    }

    #[test]
    fn invalid_patient_keeps_modal_open() {
        let mut c = clinic();
        c.patients.open_add();
        let verifier = FormVerifier::new().unwrap();
        assert!(c.patients.submit_add(&verifier, day("2025-04-15")).is_err());
        assert!(c.patients.draft().is_some());
        assert_eq!(c.patients.patients().len(), 10);
    }

    // ── 3. appointments page ──────────────────────────────────────────────────

    #[test]
    fn appointments_group_by_day_then_time() {
        let c = clinic();
        let groups = c.appointments.grouped();

        let dates: Vec<String> = groups.iter().map(|g| g.date.to_string()).collect();
        assert_eq!(
            dates,
            vec!["2025-04-15", "2025-04-16", "2025-04-17", "2025-04-18", "2025-04-19"]
        );
        assert_eq!(
            ids(groups[0].appointments.iter().copied(), |a| a.id.as_str()),
            vec!["1", "2", "3"]
        );

        let flattened: usize = groups.iter().map(|g| g.appointments.len()).sum();
        assert_eq!(flattened, c.appointments.visible().len());
    }

    #[test]
    fn appointment_filters_combine() {
        let mut c = clinic();
        c.appointments.set_type_filter(Some("Follow-up".to_string()));
        assert_eq!(ids(c.appointments.visible(), |a| a.id.as_str()), vec!["1", "4", "6"]);

        c.appointments.set_date_filter(Some(day("2025-04-16")));
        assert_eq!(ids(c.appointments.visible(), |a| a.id.as_str()), vec!["4"]);
        assert_eq!(c.appointments.date_filter(), Some(day("2025-04-16")));

        c.appointments.set_type_filter(Some(String::new()));
        assert_eq!(c.appointments.type_filter(), None);
        assert_eq!(ids(c.appointments.visible(), |a| a.id.as_str()), vec!["4", "5"]);

        c.appointments.set_search("zzz");
        assert!(c.appointments.is_empty_state());
        assert!(c.appointments.grouped().is_empty());
    }

    #[test]
    fn schedule_without_patient_keeps_modal_open() {
        let mut c = clinic();
        let verifier = FormVerifier::new().unwrap();
        c.appointments.open_schedule(day("2025-04-20"));

        assert_eq!(c.appointments.submit_schedule(&verifier).unwrap(), None);
        assert!(c.appointments.draft().is_some());

        c.appointments.draft_mut().unwrap().patient_id = "5".to_string();
        let created = c.appointments.submit_schedule(&verifier).unwrap().unwrap();
        assert_eq!(created.id, "11");
        assert_eq!(created.patient_name, "Sophia Lee");
        assert!(c.appointments.draft().is_none());
        assert_eq!(c.appointments.grouped().last().unwrap().date, day("2025-04-20"));
    }

    // ── 4. records page ───────────────────────────────────────────────────────

    #[test]
    fn records_start_newest_first_and_toggle() {
        let mut c = clinic();
        assert_eq!(c.records.sort().indicator(RecordField::Date), Some("▼"));
        assert_eq!(
            ids(c.records.visible(), |r| r.id.as_str()),
            vec!["5", "9", "1", "7", "4", "3", "2", "8", "10", "6"]
        );

        c.records.sort_by(RecordField::Date);
        assert_eq!(
            ids(c.records.visible(), |r| r.id.as_str()),
            vec!["6", "10", "8", "2", "3", "4", "7", "1", "9", "5"]
        );

        // A new column starts descending.
        c.records.sort_by(RecordField::PatientName);
        assert_eq!(c.records.sort().direction(), SortDirection::Desc);
        assert_eq!(c.records.visible()[0].patient_name, "William Johnson");
    }

    #[test]
    fn toggling_a_tied_column_reverses_the_listing() {
        let mut c = clinic();
        c.records.sort_by(RecordField::Type);
        let first: Vec<String> = c.records.visible().iter().map(|r| r.id.clone()).collect();
        c.records.sort_by(RecordField::Type);
        let mut second: Vec<String> = c.records.visible().iter().map(|r| r.id.clone()).collect();
        second.reverse();
        assert_eq!(first, second);
        // New columns start descending; tied Imaging records come last-first.
        assert_eq!(first, vec!["7", "4", "9", "3", "1", "10", "8", "5", "2", "6"]);
    }

    #[test]
    fn records_type_filter_and_upload() {
        let mut c = clinic();
        c.records.set_type_filter(Some("Imaging".to_string()));
        assert_eq!(c.records.visible().len(), 4);

        c.records.open_upload();
        let draft = c.records.draft_mut().unwrap();
        draft.record_type = "Imaging".to_string();
        draft.description = "MRI of Spine".to_string();

        let created = c.upload_record(day("2025-04-20")).unwrap().unwrap();
        assert_eq!(created.id, "11");
        assert_eq!(created.patient_name, "Emma Wilson");
        assert_eq!(created.file_name, "document.pdf");
        assert_eq!(c.records.visible()[0].id, "11");
    }

    // ── 5. patient details ────────────────────────────────────────────────────

    #[test]
    fn details_for_unknown_patient_are_not_found() {
        assert!(clinic().patient_details("42").unwrap().is_none());
    }

    #[test]
    fn detail_tabs_cycle_and_notes_prepend() {
        let c = clinic();
        let mut details = c.patient_details("1").unwrap().unwrap();
        assert_eq!(details.patient().name, "Emma Wilson");
        assert_eq!(details.tab(), DetailTab::Overview);
        assert_eq!(DetailTab::Overview.previous(), DetailTab::LabResults);
        assert_eq!(DetailTab::LabResults.next(), DetailTab::Overview);

        details.select_tab(DetailTab::Medications);
        assert_eq!(details.tab().label(), "Medications");

        details.open_note();
        let draft = details.note_draft_mut().unwrap();
        draft.title = "Phone call".to_string();
        draft.content = "Reports fewer headaches".to_string();
        details.submit_note(c.verifier()).unwrap().unwrap();
        assert_eq!(details.notes().len(), 1);
        assert!(details.note_draft().is_none());
    }

    // ── 6. dashboard and shell ────────────────────────────────────────────────

    #[test]
    fn dashboard_greets_the_display_name() {
        let c = clinic();
        let mut session =
            SessionManager::new(Box::new(InMemoryStore::new()), Box::new(InMemoryStore::new()));
        session.guest_enter().unwrap();

        let page = c.dashboard(&session.display());
        assert_eq!(page.welcome(), "Welcome back, Guest User");
        assert_eq!(page.stats()[1].name, "Appointments Today");
        assert_eq!(page.recent_patients()[3].status, "Critical");
        assert_eq!(page.upcoming_appointments().len(), 5);
    }

    #[test]
    fn active_sidebar_item_is_longest_prefix() {
        assert_eq!(active_item("/").unwrap().label, "Dashboard");
        assert_eq!(active_item("/patients").unwrap().label, "Patients");
        assert_eq!(active_item("/patients/4").unwrap().label, "Patients");
        assert_eq!(active_item("/patientsx").unwrap().label, "Dashboard");
        assert_eq!(active_item("/medical-records").unwrap().label, "Medical Records");
    }

    #[test]
    fn after_sign_out_patients_redirects_to_login() {
        let routes = TomlRouteTable::builtin().unwrap();
        let mut session =
            SessionManager::new(Box::new(InMemoryStore::new()), Box::new(InMemoryStore::new()));
        assert!(session.login("nurse@example.com", "password").unwrap());
        assert_eq!(
            routes.resolve(&session.navigation_request("/patients")).unwrap().view(),
            Some(View::Patients)
        );

        let next = sign_out(&mut session, &routes).unwrap();
        assert_eq!(next, "/login");
        assert_eq!(
            routes.resolve(&session.navigation_request("/patients")).unwrap(),
            Navigation::Redirect {
                to: "/login".to_string()
            }
        );
    }
}
