//! Session and authentication gate.
//!
//! `SessionManager` owns the signed-in identity and the guest flag, and keeps
//! both mirrored into the two stores it was built with:
//!
//! - durable store, key `user`: the identity as JSON, written on login and
//!   removed on logout;
//! - session store, key `guestMode`: `"true"` while guest mode is on.
//!
//! Credentials are the three fixed demo accounts. There is no hashing and no
//! external verification.

use tracing::{debug, info, warn};

use medidash_contracts::{
    error::MedidashResult,
    identity::{Identity, Role},
    navigation::NavigationRequest,
};

use crate::traits::KeyValueStore;

/// Durable-store key holding the signed-in identity as JSON.
pub const USER_KEY: &str = "user";

/// Session-store key holding the guest flag.
pub const GUEST_MODE_KEY: &str = "guestMode";

const GUEST_FLAG_VALUE: &str = "true";

const GUEST_DISPLAY_NAME: &str = "Guest User";

/// A fixed demo login and the identity it maps to.
struct DemoAccount {
    email: &'static str,
    password: &'static str,
    id: &'static str,
    name: &'static str,
    role: Role,
}

const DEMO_ACCOUNTS: [DemoAccount; 3] = [
    DemoAccount {
        email: "doctor@example.com",
        password: "password",
        id: "1",
        name: "Dr. John Smith",
        role: Role::Doctor,
    },
    DemoAccount {
        email: "nurse@example.com",
        password: "password",
        id: "2",
        name: "Nurse Sarah Johnson",
        role: Role::Nurse,
    },
    DemoAccount {
        email: "admin@example.com",
        password: "password",
        id: "3",
        name: "Admin User",
        role: Role::Admin,
    },
];

/// Emails of the demo accounts, for login screen hints.
pub fn demo_emails() -> impl Iterator<Item = &'static str> {
    DEMO_ACCOUNTS.iter().map(|a| a.email)
}

/// Name, role badge and avatar initial shown by the header and sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDisplay {
    pub name: String,
    pub role: String,
    pub initial: String,
}

/// The dashboard's session state.
pub struct SessionManager {
    local: Box<dyn KeyValueStore>,
    session: Box<dyn KeyValueStore>,
    identity: Option<Identity>,
    guest: bool,
}

impl SessionManager {
    /// Build an empty session (no identity, no guest flag) over the two stores.
    ///
    /// Stores are not read; use `restore` to pick up a previous sign-in.
    pub fn new(local: Box<dyn KeyValueStore>, session: Box<dyn KeyValueStore>) -> Self {
        Self {
            local,
            session,
            identity: None,
            guest: false,
        }
    }

    /// Build a session and re-establish any identity and guest flag found in
    /// the stores.
    ///
    /// A stored `user` value that does not decode as an identity is ignored
    /// (and logged); the visitor simply starts signed out.
    pub fn restore(
        local: Box<dyn KeyValueStore>,
        session: Box<dyn KeyValueStore>,
    ) -> MedidashResult<Self> {
        let mut manager = Self::new(local, session);

        if let Some(raw) = manager.local.get(USER_KEY)? {
            match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => {
                    info!(user_id = %identity.id, role = %identity.role, "restored signed-in identity");
                    manager.identity = Some(identity);
                }
                Err(e) => {
                    warn!(error = %e, "stored identity could not be decoded; starting signed out");
                }
            }
        }

        manager.guest = manager.session.get(GUEST_MODE_KEY)?.as_deref() == Some(GUEST_FLAG_VALUE);
        debug!(guest = manager.guest, "restored guest flag");

        Ok(manager)
    }

    /// Attempt to sign in.
    ///
    /// Returns `Ok(true)` and stores the identity when `(email, password)` is
    /// one of the demo accounts. Any other pair returns `Ok(false)` and leaves
    /// the session untouched. `Err` only when the durable store cannot be
    /// written, in which case the session is also untouched.
    pub fn login(&mut self, email: &str, password: &str) -> MedidashResult<bool> {
        let Some(account) = DEMO_ACCOUNTS
            .iter()
            .find(|a| a.email == email && a.password == password)
        else {
            debug!("login rejected");
            return Ok(false);
        };

        let identity = Identity::new(account.id, account.name, account.email, account.role);
        let json = serde_json::to_string(&identity)?;
        self.local.set(USER_KEY, &json)?;

        info!(user_id = %identity.id, role = %identity.role, "signed in");
        self.identity = Some(identity);
        Ok(true)
    }

    /// Sign out: forget the identity and the guest flag, and remove both from
    /// storage.
    pub fn logout(&mut self) -> MedidashResult<()> {
        self.local.remove(USER_KEY)?;
        self.session.remove(GUEST_MODE_KEY)?;
        let had_identity = self.identity.take().is_some();
        self.guest = false;
        info!(had_identity, "signed out");
        Ok(())
    }

    /// Turn guest mode on. Guests pass the navigation gate without an identity.
    pub fn guest_enter(&mut self) -> MedidashResult<()> {
        self.session.set(GUEST_MODE_KEY, GUEST_FLAG_VALUE)?;
        self.guest = true;
        info!("entered guest mode");
        Ok(())
    }

    /// Turn guest mode off.
    pub fn guest_exit(&mut self) -> MedidashResult<()> {
        self.session.remove(GUEST_MODE_KEY)?;
        self.guest = false;
        info!("left guest mode");
        Ok(())
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn is_guest(&self) -> bool {
        self.guest
    }

    /// True when protected views are open to this session.
    pub fn may_navigate(&self) -> bool {
        self.is_authenticated() || self.guest
    }

    /// Package `path` with this session's gate flags for a `RouteResolver`.
    pub fn navigation_request(&self, path: &str) -> NavigationRequest {
        NavigationRequest::new(path, self.is_authenticated(), self.guest)
    }

    /// What the header and sidebar show. The guest flag wins over an identity.
    pub fn display(&self) -> SessionDisplay {
        if self.guest {
            return SessionDisplay {
                name: GUEST_DISPLAY_NAME.to_string(),
                role: Role::Guest.label().to_string(),
                initial: "G".to_string(),
            };
        }

        match &self.identity {
            Some(identity) => SessionDisplay {
                name: identity.name.clone(),
                role: identity.role.label().to_string(),
                initial: identity.name.chars().next().map(String::from).unwrap_or_default(),
            },
            None => SessionDisplay {
                name: String::new(),
                role: String::new(),
                initial: String::new(),
            },
        }
    }
}
