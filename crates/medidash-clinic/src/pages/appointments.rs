//! Scheduler page: appointments grouped by day.

use chrono::NaiveDate;
use tracing::debug;

use medidash_contracts::{
    appointment::Appointment,
    error::MedidashResult,
    patient::{Patient, PatientRef},
};
use medidash_core::{
    fields::AppointmentField,
    grouping::{group_by_date, DateGroup},
    listing::{self, ListQuery, SortDirection, SortState},
};
use medidash_forms::{submit_appointment, AppointmentDraft, FormVerifier};

/// Appointments, search, the date and type filters, and the schedule modal.
///
/// There is no column sort; order comes from grouping.
#[derive(Debug, Clone)]
pub struct AppointmentsPage {
    appointments: Vec<Appointment>,
    roster: Vec<Patient>,
    query: ListQuery<AppointmentField>,
    draft: Option<AppointmentDraft>,
}

impl AppointmentsPage {
    /// `roster` backs the patient selector of the schedule form.
    pub fn new(appointments: Vec<Appointment>, roster: Vec<Patient>) -> Self {
        Self {
            appointments,
            roster,
            query: ListQuery::new(SortState::unsorted(SortDirection::Asc)),
            draft: None,
        }
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Choices for the schedule form's patient selector.
    pub fn patient_choices(&self) -> Vec<PatientRef> {
        self.roster.iter().map(PatientRef::from).collect()
    }

    pub fn search(&self) -> &str {
        &self.query.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.search = text.into();
    }

    pub fn date_filter(&self) -> Option<NaiveDate> {
        self.query
            .filter(AppointmentField::Date)
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }

    pub fn set_date_filter(&mut self, date: Option<NaiveDate>) {
        let value = date.map(|d| d.format("%Y-%m-%d").to_string());
        self.query.set_filter(AppointmentField::Date, value);
    }

    pub fn type_filter(&self) -> Option<&str> {
        self.query.filter(AppointmentField::Type)
    }

    /// An empty string clears the filter, as the "All types" option does.
    pub fn set_type_filter(&mut self, appointment_type: Option<String>) {
        let value = appointment_type.filter(|t| !t.is_empty());
        debug!(filter = ?value, "appointment type filter changed");
        self.query.set_filter(AppointmentField::Type, value);
    }

    /// Appointments passing search and filters, in insertion order.
    pub fn visible(&self) -> Vec<&Appointment> {
        listing::apply(&self.appointments, &self.query)
    }

    /// Visible appointments by day, days ascending, times ascending.
    pub fn grouped(&self) -> Vec<DateGroup<'_>> {
        group_by_date(self.visible())
    }

    /// True when nothing passes search and filters ("No appointments found").
    pub fn is_empty_state(&self) -> bool {
        self.visible().is_empty()
    }

    // ── Schedule modal ────────────────────────────────────────────────────────

    /// Open the modal with a fresh draft dated `today`, or keep the open one.
    pub fn open_schedule(&mut self, today: NaiveDate) {
        self.draft.get_or_insert_with(|| AppointmentDraft::new(today));
    }

    pub fn cancel_schedule(&mut self) {
        self.draft = None;
    }

    pub fn draft(&self) -> Option<&AppointmentDraft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut AppointmentDraft> {
        self.draft.as_mut()
    }

    /// Submit the open draft.
    ///
    /// A draft whose patient is not on the roster is dropped: `Ok(None)` and
    /// the modal stays open. `Ok(None)` also when no modal is open.
    pub fn submit_schedule(&mut self, verifier: &FormVerifier) -> MedidashResult<Option<Appointment>> {
        let Some(draft) = &self.draft else {
            return Ok(None);
        };
        let created = submit_appointment(verifier, draft, &self.roster, &mut self.appointments)?;
        if created.is_some() {
            self.draft = None;
        }
        Ok(created)
    }
}
