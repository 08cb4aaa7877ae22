use sqlx::AnyPool;
use sqlx::any::{AnyPoolOptions, install_default_drivers};
use tracing::info;

use crate::error::StorageError;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connection settings. The URL may carry credentials, so this type is not `Debug`.
#[derive(Clone)]
pub struct StorageConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl StorageConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

/// Open a bounded connection pool.
///
/// Postgres and SQLite URLs are accepted. Statements borrow a connection from
/// the pool and hand it back when they finish, whether they succeed or fail.
pub async fn connect(config: &StorageConfig) -> Result<AnyPool, StorageError> {
    install_default_drivers();

    let url = with_default_ssl_mode(&config.database_url)?;
    let pool = AnyPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&url)
        .await
        .map_err(|e| StorageError::Connect(e.to_string()))?;

    info!(
        backend = scheme(&url).unwrap_or("unknown"),
        max_connections = config.max_connections,
        "database pool ready"
    );

    Ok(pool)
}

/// Postgres URLs without an explicit `sslmode` get `sslmode=require`:
/// the connection is encrypted but the server certificate is not verified.
/// Other supported URLs pass through unchanged.
pub fn with_default_ssl_mode(url: &str) -> Result<String, StorageError> {
    match scheme(url) {
        Some("postgres" | "postgresql") => {
            if url.contains("sslmode=") {
                Ok(url.to_string())
            } else if url.contains('?') {
                Ok(format!("{url}&sslmode=require"))
            } else {
                Ok(format!("{url}?sslmode=require"))
            }
        }
        Some("sqlite") => Ok(url.to_string()),
        Some(other) => Err(StorageError::InvalidUrl(format!(
            "unsupported scheme: {other}"
        ))),
        None => Err(StorageError::InvalidUrl("missing scheme".to_string())),
    }
}

fn scheme(url: &str) -> Option<&str> {
    url.split_once(':')
        .map(|(scheme, _)| scheme)
        .filter(|s| !s.is_empty())
}
