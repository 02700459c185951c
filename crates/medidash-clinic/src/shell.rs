//! Header and sidebar helpers shared by the front ends.

use tracing::info;

use medidash_contracts::error::MedidashResult;
use medidash_core::{traits::RouteResolver, SessionManager};

/// One sidebar link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

/// Sidebar links, top to bottom. `/settings` has no page and lands on
/// not-found.
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        label: "Dashboard",
        path: "/",
    },
    NavItem {
        label: "Patients",
        path: "/patients",
    },
    NavItem {
        label: "Appointments",
        path: "/appointments",
    },
    NavItem {
        label: "Medical Records",
        path: "/medical-records",
    },
    NavItem {
        label: "Settings",
        path: "/settings",
    },
];

/// The link to highlight for `path`: the one with the longest path that is
/// `path` itself or a segment-wise prefix of it.
pub fn active_item(path: &str) -> Option<&'static NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| {
            item.path == "/"
                || path == item.path
                || path
                    .strip_prefix(item.path)
                    .is_some_and(|rest| rest.starts_with('/'))
        })
        .max_by_key(|item| item.path.len())
}

/// Sign out and return where to go next (the login path).
pub fn sign_out(session: &mut SessionManager, routes: &dyn RouteResolver) -> MedidashResult<String> {
    session.logout()?;
    info!("signed out");
    Ok(routes.login_path().to_string())
}
