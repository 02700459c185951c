//! The landing page: a welcome line, headline stats, recent patients and
//! today's upcoming appointments.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use medidash_core::session::SessionDisplay;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentPatient {
    pub id: String,
    pub name: String,
    pub age: i64,
    pub status: String,
    pub date: NaiveDate,
    pub condition: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingAppointment {
    pub id: String,
    pub patient: String,
    pub time: String,
    #[serde(rename = "type")]
    pub appointment_type: String,
    pub doctor: String,
}

/// Static content of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub stats: Vec<Stat>,
    pub recent_patients: Vec<RecentPatient>,
    pub upcoming_appointments: Vec<UpcomingAppointment>,
}

#[derive(Debug, Clone)]
pub struct DashboardPage {
    welcome: String,
    data: DashboardData,
}

impl DashboardPage {
    pub fn new(data: DashboardData, display: &SessionDisplay) -> Self {
        Self {
            welcome: format!("Welcome back, {}", display.name),
            data,
        }
    }

    pub fn welcome(&self) -> &str {
        &self.welcome
    }

    pub fn stats(&self) -> &[Stat] {
        &self.data.stats
    }

    pub fn recent_patients(&self) -> &[RecentPatient] {
        &self.data.recent_patients
    }

    pub fn upcoming_appointments(&self) -> &[UpcomingAppointment] {
        &self.data.upcoming_appointments
    }
}
