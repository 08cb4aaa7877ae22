//! Request and response shapes of the engine completions endpoint.

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

const STOP_NEWLINE: &str = "\n";

/// Body of `POST /engines/{engine}/completions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub presence_penalty: f64,
    pub frequency_penalty: f64,
    pub best_of: u32,
    pub n: u32,
    pub stream: bool,
    pub stop: Vec<String>,
}

impl CompletionRequest {
    /// Sampling used to write the recommendation: short, fairly creative,
    /// a single line.
    pub fn cocktail(prompt: String) -> Self {
        Self {
            prompt,
            max_tokens: 100,
            temperature: 0.9,
            top_p: 1.0,
            presence_penalty: 0.0,
            frequency_penalty: 0.0,
            best_of: 1,
            n: 1,
            stream: false,
            stop: vec![STOP_NEWLINE.to_string()],
        }
    }

    /// Deterministic single-token sampling for the content filter label.
    pub fn content_filter(prompt: String) -> Self {
        Self {
            prompt,
            max_tokens: 1,
            temperature: 0.0,
            top_p: 1.0,
            presence_penalty: 0.0,
            frequency_penalty: 0.0,
            best_of: 1,
            n: 1,
            stream: false,
            stop: vec![STOP_NEWLINE.to_string()],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Completion {
    #[serde(default)]
    pub id: Option<String>,
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub text: Option<String>,
}

impl Completion {
    /// Text of the first choice. A response without choices, or whose first
    /// choice carries no text, is malformed.
    pub fn into_first_text(self) -> Result<String, GenerationError> {
        self.choices
            .into_iter()
            .next()
            .ok_or_else(|| GenerationError::ResponseParse("no choices in response".to_string()))?
            .text
            .ok_or_else(|| GenerationError::ResponseParse("first choice has no text".to_string()))
    }
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
}
