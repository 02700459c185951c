//! Core trait definitions for the dashboard.
//!
//! Two seams separate the dashboard logic from its surroundings:
//!
//! - `KeyValueStore`: string-keyed storage. One instance plays durable
//!   per-user storage, another plays session-scoped storage.
//! - `RouteResolver`: maps a requested path plus the session's gate flags to
//!   a view or a redirect.
//!
//! Front ends wire concrete implementations into a `SessionManager` and pass
//! it explicitly; nothing reads storage through ambient globals.

use medidash_contracts::{
    error::MedidashResult,
    navigation::{Navigation, NavigationRequest},
};

/// A string-keyed, string-valued store.
///
/// Methods take `&self`; implementations guard their state internally so a
/// store can be shared between the session manager and a front end.
pub trait KeyValueStore: Send + Sync {
    /// Return the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> MedidashResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> MedidashResult<()>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> MedidashResult<()>;
}

/// The view router.
///
/// Implementations must be deterministic: the same request always resolves to
/// the same navigation.
pub trait RouteResolver: Send + Sync {
    /// The path unauthenticated visitors are redirected to.
    fn login_path(&self) -> &str;

    /// Resolve `request.path` to a view, or a redirect when the view is gated
    /// and the request carries neither an identity nor the guest flag.
    fn resolve(&self, request: &NavigationRequest) -> MedidashResult<Navigation>;
}
