//! # medidash-contracts
//!
//! Shared types and error contracts for the MEDIDASH hospital dashboard.
//!
//! Every crate in the workspace imports from here. No business logic lives in
//! this crate, only the records the pages display, the signed-in identity,
//! navigation types, and the error enum.

pub mod appointment;
pub mod error;
pub mod identity;
pub mod navigation;
pub mod patient;
