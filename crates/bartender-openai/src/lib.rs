//! bartender-openai
//!
//! Completion API client and the two-stage cocktail generation built on it.

pub mod client;
pub mod cocktail;
pub mod completion;
pub mod error;
pub mod prompt;
