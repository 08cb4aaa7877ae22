//! bartender-storage
//!
//! Relational persistence for recommendations and ratings. Thin wrapper around
//! a pooled `sqlx` connection; every write is a single parameterized insert.

pub mod client;
pub mod error;
pub mod records;
pub mod schema;
