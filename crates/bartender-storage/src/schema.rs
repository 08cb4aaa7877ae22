//! Table definitions. Both tables are append-only from this service's side.

use sqlx::AnyPool;
use tracing::info;

use crate::error::StorageError;

const CREATE_RECOMMENDATIONS: &str = "\
CREATE TABLE IF NOT EXISTS recommendations (
    session_id TEXT NOT NULL,
    recommendation_id TEXT PRIMARY KEY,
    prompt_text TEXT NOT NULL,
    output_text TEXT NOT NULL
)";

// No key: a recommendation can be rated more than once, and the id is not
// required to exist in `recommendations`.
const CREATE_RATINGS: &str = "\
CREATE TABLE IF NOT EXISTS ratings (
    recommendation_id TEXT NOT NULL,
    rating_value TEXT NOT NULL
)";

/// Create the `recommendations` and `ratings` tables if they do not exist.
pub async fn ensure_schema(pool: &AnyPool) -> Result<(), StorageError> {
    for statement in [CREATE_RECOMMENDATIONS, CREATE_RATINGS] {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| StorageError::Schema(e.to_string()))?;
    }

    info!("database schema ready");
    Ok(())
}
