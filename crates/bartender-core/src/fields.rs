//! Request metadata field names.
//!
//! The browser client sends every parameter as a request header. Header names
//! are case-insensitive on the wire; these are the canonical spellings the
//! frontend uses, and `header_name` gives the lowercase form HTTP libraries
//! store them under.

pub const PROMPT: &str = "prompt";
pub const SESSION_UUID: &str = "sessionUUID";
pub const RECOMMENDATION_UUID: &str = "recommendationUUID";
pub const RATING: &str = "rating";

/// Lowercase form of a field name, as stored in a header map.
pub fn header_name(field: &str) -> String {
    field.to_ascii_lowercase()
}
