use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid rating: {0} (expected \"liked\" or \"disliked\")")]
    InvalidRating(String),
}
