//! One patient's chart, split into tabs, with a notes form.

use tracing::debug;

use medidash_contracts::{
    error::MedidashResult,
    patient::{ClinicalNote, Patient, PatientChart},
};
use medidash_forms::{submit_note, FormVerifier, NoteDraft};

use crate::sample_data::patient_chart;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Overview,
    MedicalHistory,
    Medications,
    Appointments,
    LabResults,
}

impl DetailTab {
    pub const ALL: [DetailTab; 5] = [
        DetailTab::Overview,
        DetailTab::MedicalHistory,
        DetailTab::Medications,
        DetailTab::Appointments,
        DetailTab::LabResults,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::MedicalHistory => "Medical History",
            DetailTab::Medications => "Medications",
            DetailTab::Appointments => "Appointments",
            DetailTab::LabResults => "Lab Results",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// The tab to the right, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone)]
pub struct PatientDetailsPage {
    patient: Patient,
    chart: PatientChart,
    tab: DetailTab,
    notes: Vec<ClinicalNote>,
    note_draft: Option<NoteDraft>,
}

impl PatientDetailsPage {
    /// Open the chart of roster patient `id`.
    ///
    /// Returns `Ok(None)` when `id` is not on the roster; the caller shows
    /// the not-found view.
    pub fn open(roster: &[Patient], id: &str) -> MedidashResult<Option<Self>> {
        let Some(patient) = roster.iter().find(|p| p.id == id) else {
            debug!(patient_id = id, "patient not on roster");
            return Ok(None);
        };

        Ok(Some(Self {
            patient: patient.clone(),
            chart: patient_chart(id)?,
            tab: DetailTab::default(),
            notes: Vec::new(),
            note_draft: None,
        }))
    }

    pub fn patient(&self) -> &Patient {
        &self.patient
    }

    pub fn chart(&self) -> &PatientChart {
        &self.chart
    }

    pub fn tab(&self) -> DetailTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: DetailTab) {
        self.tab = tab;
    }

    /// Newest first.
    pub fn notes(&self) -> &[ClinicalNote] {
        &self.notes
    }

    // ── Add-note form ─────────────────────────────────────────────────────────

    pub fn open_note(&mut self) {
        self.note_draft.get_or_insert_with(NoteDraft::default);
    }

    pub fn cancel_note(&mut self) {
        self.note_draft = None;
    }

    pub fn note_draft(&self) -> Option<&NoteDraft> {
        self.note_draft.as_ref()
    }

    pub fn note_draft_mut(&mut self) -> Option<&mut NoteDraft> {
        self.note_draft.as_mut()
    }

    pub fn submit_note(&mut self, verifier: &FormVerifier) -> MedidashResult<Option<ClinicalNote>> {
        let Some(draft) = &self.note_draft else {
            return Ok(None);
        };
        let note = submit_note(verifier, draft, &mut self.notes)?;
        self.note_draft = None;
        Ok(Some(note))
    }
}
