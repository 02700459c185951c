//! View routing types.
//!
//! A route resolver consumes a `NavigationRequest` and produces a
//! `Navigation`: either a view to render (with any path parameters captured
//! from the pattern) or a redirect to another path.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The fixed set of pages the dashboard can show.
///
/// Written in TOML route tables as kebab-case (`"patient-details"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Login,
    Dashboard,
    Patients,
    PatientDetails,
    Appointments,
    MedicalRecords,
    NotFound,
}

impl View {
    /// Page title shown in the header.
    pub fn title(self) -> &'static str {
        match self {
            View::Login => "Sign in",
            View::Dashboard => "Dashboard",
            View::Patients => "Patients",
            View::PatientDetails => "Patient Details",
            View::Appointments => "Appointments",
            View::MedicalRecords => "Medical Records",
            View::NotFound => "Page Not Found",
        }
    }
}

/// Everything the resolver needs to decide where a path leads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRequest {
    /// The requested path, e.g. `/patients/4`.
    pub path: String,
    /// True when a signed-in identity is present.
    pub authenticated: bool,
    /// True when the session-scoped guest flag is set.
    pub guest: bool,
}

impl NavigationRequest {
    pub fn new(path: impl Into<String>, authenticated: bool, guest: bool) -> Self {
        Self {
            path: path.into(),
            authenticated,
            guest,
        }
    }

    /// Protected views open for a signed-in identity or a guest.
    pub fn may_enter_protected(&self) -> bool {
        self.authenticated || self.guest
    }
}

/// The outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Navigation {
    /// Show `view`. `params` holds the `:name` captures of the matched pattern.
    Render {
        view: View,
        params: BTreeMap<String, String>,
    },
    /// The path is gated; go to `to` instead (replacing the current entry).
    Redirect { to: String },
}

impl Navigation {
    /// Render `view` with no captured parameters.
    pub fn render(view: View) -> Self {
        Navigation::Render {
            view,
            params: BTreeMap::new(),
        }
    }

    /// The rendered view, or `None` for a redirect.
    pub fn view(&self) -> Option<View> {
        match self {
            Navigation::Render { view, .. } => Some(*view),
            Navigation::Redirect { .. } => None,
        }
    }

    /// A captured path parameter, e.g. `param("id")` for `/patients/:id`.
    pub fn param(&self, name: &str) -> Option<&str> {
        match self {
            Navigation::Render { params, .. } => params.get(name).map(String::as_str),
            Navigation::Redirect { .. } => None,
        }
    }
}
