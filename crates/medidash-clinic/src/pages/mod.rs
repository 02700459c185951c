//! Page state for each dashboard view.
//!
//! A page owns its dataset, its search/filter/sort settings and the draft of
//! whichever modal is open. Rendering is left to the front ends.

pub mod appointments;
pub mod dashboard;
pub mod patient_details;
pub mod patients;
pub mod records;

pub use appointments::AppointmentsPage;
pub use dashboard::{DashboardData, DashboardPage};
pub use patient_details::{DetailTab, PatientDetailsPage};
pub use patients::PatientsPage;
pub use records::RecordsPage;
