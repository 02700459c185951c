//! Fixed choices offered by the creation forms' select inputs.

pub const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

pub const APPOINTMENT_TYPES: [&str; 10] = [
    "Follow-up",
    "Consultation",
    "Checkup",
    "Prenatal",
    "Cardiology",
    "Neurology",
    "Pulmonology",
    "Psychiatry",
    "Allergy",
    "Vaccination",
];

pub const RECORD_TYPES: [&str; 10] = [
    "Lab Results",
    "Imaging",
    "Prescription",
    "ECG",
    "Pulmonary Function",
    "Surgical Report",
    "Discharge Summary",
    "Consultation Note",
    "Progress Note",
    "Vaccination Record",
];

pub const DOCTORS: [&str; 3] = ["Dr. John Smith", "Dr. Sarah Johnson", "Dr. Michael Brown"];

/// Bookable slots, 24-hour. Morning 09:00–11:30, afternoon 13:00–16:30.
pub const TIME_SLOTS: [&str; 14] = [
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "13:00", "13:30", "14:00", "14:30",
    "15:00", "15:30", "16:00", "16:30",
];

/// Appointment lengths in minutes.
pub const DURATIONS: [u32; 5] = [15, 30, 45, 60, 90];

pub const DEFAULT_APPOINTMENT_TYPE: &str = "Follow-up";
pub const DEFAULT_RECORD_TYPE: &str = "Lab Results";
pub const DEFAULT_DOCTOR: &str = "Dr. John Smith";
pub const DEFAULT_TIME_SLOT: &str = "09:00";
pub const DEFAULT_DURATION: &str = "30";
