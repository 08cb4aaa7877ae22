//! Two-stage cocktail generation: write a recommendation, then have the
//! content-filter engine label it.

use std::sync::Arc;

use tracing::{info, warn};

use bartender_core::models::recommendation::GenerationOutput;

use crate::client::CompletionApi;
use crate::completion::CompletionRequest;
use crate::error::GenerationError;
use crate::prompt::{TrainingCorpus, cocktail_prompt, content_filter_prompt};

pub const DEFAULT_GENERATION_ENGINE: &str = "davinci";
pub const DEFAULT_FILTER_ENGINE: &str = "content-filter-alpha-c4";

/// Content-filter label for unsafe output.
pub const UNSAFE_LABEL: &str = "2";

#[derive(Debug, Clone)]
pub struct Engines {
    pub generation: String,
    pub content_filter: String,
}

impl Default for Engines {
    fn default() -> Self {
        Self {
            generation: DEFAULT_GENERATION_ENGINE.to_string(),
            content_filter: DEFAULT_FILTER_ENGINE.to_string(),
        }
    }
}

/// Generates cocktail recommendations. Holds no per-request state.
#[derive(Clone)]
pub struct CocktailGenerator {
    api: Arc<dyn CompletionApi>,
    corpus: Arc<TrainingCorpus>,
    engines: Engines,
}

impl CocktailGenerator {
    pub fn new(api: Arc<dyn CompletionApi>, corpus: TrainingCorpus, engines: Engines) -> Self {
        Self {
            api,
            corpus: Arc::new(corpus),
            engines,
        }
    }

    /// Turn a free-text request into a recommendation.
    ///
    /// Blank input is rejected before any external call. Otherwise exactly
    /// two completions run in sequence; if the filter labels the first
    /// one unsafe the fallback text is returned in its place.
    pub async fn generate(&self, prompt_text: &str) -> Result<GenerationOutput, GenerationError> {
        let user_text = prompt_text.trim();
        if user_text.is_empty() {
            return Err(GenerationError::InvalidInput);
        }

        let request = CompletionRequest::cocktail(cocktail_prompt(&self.corpus, user_text));
        let output = self
            .api
            .complete(&self.engines.generation, &request)
            .await?
            .into_first_text()?;

        let filter_request = CompletionRequest::content_filter(content_filter_prompt(&output));
        let label = self
            .api
            .complete(&self.engines.content_filter, &filter_request)
            .await?
            .into_first_text()?;

        if label == UNSAFE_LABEL {
            warn!(
                label = label.as_str(),
                output_len = output.len(),
                "generated text rejected by content filter"
            );
            return Ok(GenerationOutput::Filtered);
        }

        info!(label = label.as_str(), output_len = output.len(), "cocktail generated");
        Ok(GenerationOutput::Generated(output))
    }
}
