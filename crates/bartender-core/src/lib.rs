//! bartender-core
//!
//! Pure domain types and request-metadata conventions.
//! No HTTP or database dependency; this is the shared vocabulary of the Bartender backend.

pub mod error;
pub mod fields;
pub mod models;
