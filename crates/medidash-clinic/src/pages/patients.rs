//! Patient roster page.

use chrono::NaiveDate;
use tracing::debug;

use medidash_contracts::{error::MedidashResult, patient::Patient};
use medidash_core::{
    fields::PatientField,
    listing::{self, ListQuery, SortDirection, SortState},
};
use medidash_forms::{submit_patient, FormVerifier, PatientDraft};

/// Roster, search, sort and the add-patient modal.
///
/// Starts unsorted; a newly selected column sorts ascending.
#[derive(Debug, Clone)]
pub struct PatientsPage {
    patients: Vec<Patient>,
    query: ListQuery<PatientField>,
    draft: Option<PatientDraft>,
}

impl PatientsPage {
    pub fn new(patients: Vec<Patient>) -> Self {
        Self {
            patients,
            query: ListQuery::new(SortState::unsorted(SortDirection::Asc)),
            draft: None,
        }
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn search(&self) -> &str {
        &self.query.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.search = text.into();
    }

    pub fn sort(&self) -> &SortState<PatientField> {
        &self.query.sort
    }

    /// Header click on `field`.
    pub fn sort_by(&mut self, field: PatientField) {
        self.query.sort.select(field);
        debug!(field = ?field, direction = ?self.query.sort.direction(), "patients sort changed");
    }

    /// The rows currently shown.
    pub fn visible(&self) -> Vec<&Patient> {
        listing::apply(&self.patients, &self.query)
    }

    /// Pagination footer text.
    pub fn summary(&self) -> String {
        let shown = self.visible().len();
        let first = usize::from(shown > 0);
        format!("Showing {} to {} of {} results", first, shown, shown)
    }

    // ── Add-patient modal ─────────────────────────────────────────────────────

    pub fn open_add(&mut self) {
        self.draft.get_or_insert_with(PatientDraft::default);
    }

    /// Close the modal, discarding the draft.
    pub fn cancel_add(&mut self) {
        self.draft = None;
    }

    pub fn draft(&self) -> Option<&PatientDraft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut PatientDraft> {
        self.draft.as_mut()
    }

    /// Submit the open draft. On success the new patient heads the roster
    /// and the modal closes; on a validation error the modal stays open.
    /// Returns `Ok(None)` when no modal is open.
    pub fn submit_add(
        &mut self,
        verifier: &FormVerifier,
        today: NaiveDate,
    ) -> MedidashResult<Option<Patient>> {
        let Some(draft) = &self.draft else {
            return Ok(None);
        };
        let patient = submit_patient(verifier, draft, &mut self.patients, today)?;
        self.draft = None;
        Ok(Some(patient))
    }
}
