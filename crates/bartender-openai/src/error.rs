use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no user input")]
    InvalidInput,

    #[error("completion request failed: {0}")]
    Request(String),

    #[error("completion request timed out after {0:?}")]
    Timeout(Duration),

    #[error("completion API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("failed to read training corpus {path}: {source}")]
    Corpus {
        path: PathBuf,
        source: std::io::Error,
    },
}
