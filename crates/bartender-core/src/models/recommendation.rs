/// Text returned to the caller when the content filter rejects a generation.
pub const FALLBACK_TEXT: &str = "Try another suggestion.";

/// One "generate" click from the browser. Lives for the duration of a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub session_id: String,
    pub recommendation_id: String,
    pub prompt_text: String,
}

/// Row written to the `recommendations` table after a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRecord {
    pub session_id: String,
    pub recommendation_id: String,
    pub prompt_text: String,
    pub output_text: String,
}

impl RecommendationRecord {
    pub fn new(request: &RecommendationRequest, output_text: impl Into<String>) -> Self {
        Self {
            session_id: request.session_id.clone(),
            recommendation_id: request.recommendation_id.clone(),
            prompt_text: request.prompt_text.clone(),
            output_text: output_text.into(),
        }
    }
}

/// Result of the two-stage generation: the model's text, or the fallback when
/// the content filter flagged it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutput {
    Generated(String),
    Filtered,
}

impl GenerationOutput {
    pub fn text(&self) -> &str {
        match self {
            GenerationOutput::Generated(text) => text,
            GenerationOutput::Filtered => FALLBACK_TEXT,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            GenerationOutput::Generated(text) => text,
            GenerationOutput::Filtered => FALLBACK_TEXT.to_string(),
        }
    }

    pub fn is_filtered(&self) -> bool {
        matches!(self, GenerationOutput::Filtered)
    }
}
