//! Built-in clinic data.
//!
//! All data in this module is hardcoded and fictional. The datasets are kept
//! as JSON documents under `data/` in the same camelCase shape the contract
//! types serialize to, and decoded on load.

use serde::de::DeserializeOwned;
use tracing::debug;

use medidash_contracts::{
    appointment::{Appointment, MedicalRecord},
    error::{MedidashError, MedidashResult},
    patient::{Patient, PatientChart},
};

use crate::pages::dashboard::DashboardData;

const PATIENTS: &str = include_str!("../data/patients.json");
const APPOINTMENTS: &str = include_str!("../data/appointments.json");
const RECORDS: &str = include_str!("../data/records.json");
const DASHBOARD: &str = include_str!("../data/dashboard.json");

/// Chart of the only patient with charted detail (roster id `"1"`).
const CHARTED_PATIENT_ID: &str = "1";
const CHART_1: &str = include_str!("../data/chart-1.json");

/// Every dataset the pages start from.
#[derive(Debug, Clone)]
pub struct SampleData {
    pub patients: Vec<Patient>,
    pub appointments: Vec<Appointment>,
    pub records: Vec<MedicalRecord>,
    pub dashboard: DashboardData,
}

impl SampleData {
    pub fn load() -> MedidashResult<Self> {
        let data = Self {
            patients: decode("patients", PATIENTS)?,
            appointments: decode("appointments", APPOINTMENTS)?,
            records: decode("records", RECORDS)?,
            dashboard: decode("dashboard", DASHBOARD)?,
        };
        debug!(
            patients = data.patients.len(),
            appointments = data.appointments.len(),
            records = data.records.len(),
            "sample data loaded"
        );
        Ok(data)
    }
}

/// The chart for roster patient `patient_id`. Patients without charted
/// detail get an empty chart.
pub fn patient_chart(patient_id: &str) -> MedidashResult<PatientChart> {
    if patient_id == CHARTED_PATIENT_ID {
        decode("chart", CHART_1)
    } else {
        Ok(PatientChart::default())
    }
}

fn decode<T: DeserializeOwned>(name: &str, json: &str) -> MedidashResult<T> {
    serde_json::from_str(json).map_err(|e| MedidashError::Serialization {
        reason: format!("built-in {} dataset does not decode: {}", name, e),
    })
}
