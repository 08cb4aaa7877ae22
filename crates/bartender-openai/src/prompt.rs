//! Prompt assembly for the generation and content-filter calls.
//!
//! The generation prompt is a few-shot corpus of example requests and
//! cocktails followed by the user's request and an open `Cocktail:` line for
//! the model to complete.

use std::path::Path;

use tracing::info;

use crate::error::GenerationError;

pub const PROMPT_SUFFIX: &str = "Cocktail:";

/// Few-shot examples prepended to every generation prompt.
#[derive(Debug, Clone)]
pub struct TrainingCorpus {
    text: String,
}

impl TrainingCorpus {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Read the corpus file. Called once at startup.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, GenerationError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| GenerationError::Corpus {
                path: path.to_path_buf(),
                source,
            })?;

        info!(path = %path.display(), len = text.len(), "training corpus loaded");
        Ok(Self { text })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// `<corpus> <user text>\nCocktail:`. `user_text` is expected to be trimmed already.
pub fn cocktail_prompt(corpus: &TrainingCorpus, user_text: &str) -> String {
    let mut prompt =
        String::with_capacity(corpus.text.len() + user_text.len() + PROMPT_SUFFIX.len() + 2);
    prompt.push_str(&corpus.text);
    prompt.push(' ');
    prompt.push_str(user_text);
    prompt.push('\n');
    prompt.push_str(PROMPT_SUFFIX);
    prompt
}

/// Wrap generated text in the delimiters the content-filter engine expects.
pub fn content_filter_prompt(output: &str) -> String {
    format!("<|endoftext|>[{output}]\n--\nLabel:")
}
