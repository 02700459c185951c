//! Medical records page.

use chrono::NaiveDate;
use tracing::debug;

use medidash_contracts::{
    appointment::MedicalRecord,
    error::MedidashResult,
    patient::{Patient, PatientRef},
};
use medidash_core::{
    fields::RecordField,
    listing::{self, ListQuery, SortDirection, SortState},
};
use medidash_forms::{submit_record, FormVerifier, RecordDraft};

/// Records, search, type filter, column sort and the upload modal.
///
/// Starts sorted by date, newest first; a newly selected column also starts
/// descending.
#[derive(Debug, Clone)]
pub struct RecordsPage {
    records: Vec<MedicalRecord>,
    roster: Vec<Patient>,
    query: ListQuery<RecordField>,
    draft: Option<RecordDraft>,
}

impl RecordsPage {
    pub fn new(records: Vec<MedicalRecord>, roster: Vec<Patient>) -> Self {
        Self {
            records,
            roster,
            query: ListQuery::new(SortState::sorted_by(
                RecordField::Date,
                SortDirection::Desc,
                SortDirection::Desc,
            )),
            draft: None,
        }
    }

    pub fn records(&self) -> &[MedicalRecord] {
        &self.records
    }

    pub fn patient_choices(&self) -> Vec<PatientRef> {
        self.roster.iter().map(PatientRef::from).collect()
    }

    pub fn search(&self) -> &str {
        &self.query.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.search = text.into();
    }

    pub fn type_filter(&self) -> Option<&str> {
        self.query.filter(RecordField::Type)
    }

    pub fn set_type_filter(&mut self, record_type: Option<String>) {
        let value = record_type.filter(|t| !t.is_empty());
        self.query.set_filter(RecordField::Type, value);
    }

    pub fn sort(&self) -> &SortState<RecordField> {
        &self.query.sort
    }

    pub fn sort_by(&mut self, field: RecordField) {
        self.query.sort.select(field);
        debug!(field = ?field, direction = ?self.query.sort.direction(), "records sort changed");
    }

    pub fn visible(&self) -> Vec<&MedicalRecord> {
        listing::apply(&self.records, &self.query)
    }

    // ── Upload modal ──────────────────────────────────────────────────────────

    pub fn open_upload(&mut self) {
        self.draft.get_or_insert_with(RecordDraft::default);
    }

    pub fn cancel_upload(&mut self) {
        self.draft = None;
    }

    pub fn draft(&self) -> Option<&RecordDraft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut RecordDraft> {
        self.draft.as_mut()
    }

    /// Submit the open draft; the record is dated `today`.
    pub fn submit_upload(
        &mut self,
        verifier: &FormVerifier,
        today: NaiveDate,
    ) -> MedidashResult<Option<MedicalRecord>> {
        let Some(draft) = &self.draft else {
            return Ok(None);
        };
        let record = submit_record(verifier, draft, &self.roster, &mut self.records, today)?;
        self.draft = None;
        Ok(Some(record))
    }
}
