//! # medidash-core
//!
//! The logic shared by every MEDIDASH front end.
//!
//! This crate provides:
//! - The two seams (`KeyValueStore`, `RouteResolver`)
//! - `SessionManager`, the session/auth gate
//! - The list filter/sort engine and the column definitions of the three
//!   listed record types
//! - Day grouping for the scheduler
//! - `DashboardConfig`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use medidash_core::{SessionManager, listing::{apply, ListQuery}};
//! ```

pub mod config;
pub mod fields;
pub mod grouping;
pub mod listing;
pub mod session;
pub mod traits;

pub use config::DashboardConfig;
pub use session::SessionManager;
