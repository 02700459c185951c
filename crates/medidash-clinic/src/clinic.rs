//! All page state of one dashboard run.

use chrono::NaiveDate;

use medidash_contracts::{
    appointment::{Appointment, MedicalRecord},
    error::MedidashResult,
    patient::Patient,
};
use medidash_core::session::SessionDisplay;
use medidash_forms::FormVerifier;

use crate::{
    pages::{
        AppointmentsPage, DashboardData, DashboardPage, PatientDetailsPage, PatientsPage,
        RecordsPage,
    },
    sample_data::SampleData,
};

/// The pages a front end switches between, plus the form verifier they
/// submit through. Page state lives as long as this value does.
#[derive(Debug)]
pub struct Clinic {
    pub patients: PatientsPage,
    pub appointments: AppointmentsPage,
    pub records: RecordsPage,
    dashboard: DashboardData,
    verifier: FormVerifier,
}

impl Clinic {
    /// Pages seeded from the built-in sample data.
    pub fn load() -> MedidashResult<Self> {
        Self::from_sample(SampleData::load()?)
    }

    pub fn from_sample(data: SampleData) -> MedidashResult<Self> {
        Ok(Self {
            appointments: AppointmentsPage::new(data.appointments, data.patients.clone()),
            records: RecordsPage::new(data.records, data.patients.clone()),
            patients: PatientsPage::new(data.patients),
            dashboard: data.dashboard,
            verifier: FormVerifier::new()?,
        })
    }

    pub fn verifier(&self) -> &FormVerifier {
        &self.verifier
    }

    /// The dashboard greeting `display`.
    pub fn dashboard(&self, display: &SessionDisplay) -> DashboardPage {
        DashboardPage::new(self.dashboard.clone(), display)
    }

    // ── Modal submission ──────────────────────────────────────────────────────

    /// Submit the add-patient modal. See [`PatientsPage::submit_add`].
    pub fn add_patient(&mut self, today: NaiveDate) -> MedidashResult<Option<Patient>> {
        self.patients.submit_add(&self.verifier, today)
    }

    /// Submit the schedule modal. See [`AppointmentsPage::submit_schedule`].
    pub fn schedule_appointment(&mut self) -> MedidashResult<Option<Appointment>> {
        self.appointments.submit_schedule(&self.verifier)
    }

    /// Submit the upload modal. See [`RecordsPage::submit_upload`].
    pub fn upload_record(&mut self, today: NaiveDate) -> MedidashResult<Option<MedicalRecord>> {
        self.records.submit_upload(&self.verifier, today)
    }

    /// Chart for patient `id`, looked up on the current roster (which
    /// includes patients added this run). `Ok(None)` for an unknown id.
    pub fn patient_details(&self, id: &str) -> MedidashResult<Option<PatientDetailsPage>> {
        PatientDetailsPage::open(self.patients.patients(), id)
    }
}
