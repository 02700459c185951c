//! # medidash-router
//!
//! A TOML-declared view router with an authentication gate.
//!
//! ## Overview
//!
//! This crate provides [`TomlRouteTable`], which implements the
//! [`RouteResolver`](medidash_core::traits::RouteResolver) trait. Routes are
//! declared in a TOML file, tried in order, and the first matching pattern
//! wins. Protected routes redirect to the login path unless the request
//! carries a signed-in identity or the guest flag. A path no route matches
//! renders the not-found view.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use medidash_core::traits::RouteResolver;
//! use medidash_router::TomlRouteTable;
//!
//! let routes = TomlRouteTable::builtin()?;
//! match routes.resolve(&session.navigation_request("/patients"))? {
//!     Navigation::Render { view, .. } => show(view),
//!     Navigation::Redirect { to } => go(&to),
//! }
//! ```
//!
//! ## Pattern syntax
//!
//! Literal segments match ignoring ASCII case, `:name` captures one segment
//! and a trailing `*` matches whatever remains.

pub mod engine;
pub mod rule;

pub use engine::{TomlRouteTable, BUILTIN_ROUTES};
pub use rule::{normalize_path, Access, RouteConfig, RouteRule};

// ── Tests ─────────────────────────────────────────────────────────────────────
