use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use eyre::{WrapErr, eyre};

use bartender_openai::client::{DEFAULT_BASE_URL, OpenAiConfig};
use bartender_openai::cocktail::{DEFAULT_FILTER_ENGINE, DEFAULT_GENERATION_ENGINE, Engines};
use bartender_storage::client::{DEFAULT_MAX_CONNECTIONS, StorageConfig};

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_TRAINING_TEXT_PATH: &str = "training-text.txt";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Process configuration, read from the environment once at startup.
#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub storage: StorageConfig,
    pub openai: OpenAiConfig,
    pub engines: Engines,
    pub training_text_path: PathBuf,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset and empty values are the same.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = var("DATABASE_URL").ok_or_else(|| eyre!("DATABASE_URL must be set"))?;
        let api_key = var("OPENAI_API_KEY")
            .or_else(|| var("GPT_KEY"))
            .ok_or_else(|| eyre!("OPENAI_API_KEY (or GPT_KEY) must be set"))?;

        let timeout_secs: u64 = parse_or(var("GENERATION_TIMEOUT_SECS"), DEFAULT_TIMEOUT_SECS)
            .wrap_err("invalid GENERATION_TIMEOUT_SECS")?;

        Ok(Self {
            port: parse_or(var("PORT"), DEFAULT_PORT).wrap_err("invalid PORT")?,
            storage: StorageConfig {
                database_url,
                max_connections: parse_or(
                    var("DATABASE_MAX_CONNECTIONS"),
                    DEFAULT_MAX_CONNECTIONS,
                )
                .wrap_err("invalid DATABASE_MAX_CONNECTIONS")?,
            },
            openai: OpenAiConfig {
                api_key,
                base_url: var("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                timeout: Duration::from_secs(timeout_secs),
            },
            engines: Engines {
                generation: var("GENERATION_ENGINE")
                    .unwrap_or_else(|| DEFAULT_GENERATION_ENGINE.to_string()),
                content_filter: var("FILTER_ENGINE")
                    .unwrap_or_else(|| DEFAULT_FILTER_ENGINE.to_string()),
            },
            training_text_path: var("TRAINING_TEXT_PATH")
                .unwrap_or_else(|| DEFAULT_TRAINING_TEXT_PATH.to_string())
                .into(),
        })
    }
}

fn parse_or<T>(value: Option<String>, default: T) -> eyre::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .wrap_err_with(|| format!("could not parse {raw:?}")),
        None => Ok(default),
    }
}
