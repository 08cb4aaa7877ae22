use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tracing::{debug, info};

use crate::completion::{ApiErrorResponse, Completion, CompletionRequest};
use crate::error::GenerationError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can run a completion against a named engine.
///
/// The HTTP client implements this; tests substitute scripted fakes.
pub trait CompletionApi: Send + Sync {
    fn complete<'a>(
        &'a self,
        engine: &'a str,
        request: &'a CompletionRequest,
    ) -> BoxFuture<'a, Result<Completion, GenerationError>>;
}

/// Client settings. Holds the API key, so this type is not `Debug`.
#[derive(Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    /// Upper bound on each call, connect through body read.
    pub timeout: Duration,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// HTTP client for the engine completions endpoint.
///
/// Built once at startup and shared; `reqwest::Client` pools connections
/// internally.
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            timeout_ms = config.timeout.as_millis() as u64,
            "completion client initialized"
        );

        Ok(Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
        })
    }

    fn endpoint(&self, engine: &str) -> String {
        format!("{}/engines/{}/completions", self.base_url, engine)
    }

    fn map_transport(&self, e: reqwest::Error) -> GenerationError {
        if e.is_timeout() {
            GenerationError::Timeout(self.timeout)
        } else {
            GenerationError::Request(e.to_string())
        }
    }

    async fn send(
        &self,
        engine: &str,
        request: &CompletionRequest,
    ) -> Result<Completion, GenerationError> {
        debug!(engine, prompt_len = request.prompt.len(), "requesting completion");

        let response = self
            .http
            .post(self.endpoint(engine))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_transport(e))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|r| r.error.message)
                .unwrap_or(body);
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: Completion = serde_json::from_str(&body).map_err(|e| {
            GenerationError::ResponseParse(format!("invalid completion body: {e}"))
        })?;

        debug!(
            engine,
            completion_id = completion.id.as_deref().unwrap_or(""),
            choices = completion.choices.len(),
            "completion received"
        );

        Ok(completion)
    }
}

impl CompletionApi for OpenAiClient {
    fn complete<'a>(
        &'a self,
        engine: &'a str,
        request: &'a CompletionRequest,
    ) -> BoxFuture<'a, Result<Completion, GenerationError>> {
        Box::pin(self.send(engine, request))
    }
}
