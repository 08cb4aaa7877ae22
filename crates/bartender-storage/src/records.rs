use std::future::Future;
use std::pin::Pin;

use sqlx::AnyPool;
use tracing::{debug, error, info};

use bartender_core::models::rating::RatingRecord;
use bartender_core::models::recommendation::RecommendationRecord;

use crate::error::StorageError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

const INSERT_RECOMMENDATION: &str = "INSERT INTO recommendations \
     (session_id, recommendation_id, prompt_text, output_text) VALUES ($1, $2, $3, $4)";

const INSERT_RATING: &str =
    "INSERT INTO ratings (recommendation_id, rating_value) VALUES ($1, $2)";

/// Append-only sink for generated recommendations and user ratings.
pub trait InteractionStore: Send + Sync {
    fn insert_recommendation<'a>(
        &'a self,
        record: &'a RecommendationRecord,
    ) -> BoxFuture<'a, Result<(), StorageError>>;

    fn insert_rating<'a>(
        &'a self,
        record: &'a RatingRecord,
    ) -> BoxFuture<'a, Result<(), StorageError>>;
}

/// `InteractionStore` backed by a SQL connection pool.
#[derive(Clone)]
pub struct SqlStore {
    pool: AnyPool,
}

impl SqlStore {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    async fn insert_recommendation_row(
        &self,
        record: &RecommendationRecord,
    ) -> Result<(), StorageError> {
        sqlx::query(INSERT_RECOMMENDATION)
            .bind(&record.session_id)
            .bind(&record.recommendation_id)
            .bind(&record.prompt_text)
            .bind(&record.output_text)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::Insert {
                table: "recommendations",
                message: e.to_string(),
            })?;
        Ok(())
    }

    async fn insert_rating_row(&self, record: &RatingRecord) -> Result<(), StorageError> {
        sqlx::query(INSERT_RATING)
            .bind(&record.recommendation_id)
            .bind(record.rating.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::Insert {
                table: "ratings",
                message: e.to_string(),
            })?;
        Ok(())
    }
}

impl InteractionStore for SqlStore {
    fn insert_recommendation<'a>(
        &'a self,
        record: &'a RecommendationRecord,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(self.insert_recommendation_row(record))
    }

    fn insert_rating<'a>(
        &'a self,
        record: &'a RatingRecord,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(self.insert_rating_row(record))
    }
}

/// Best-effort recommendation log. Failures are logged here and never
/// reach the caller.
pub async fn write_recommendation(store: &dyn InteractionStore, record: &RecommendationRecord) {
    match store.insert_recommendation(record).await {
        Ok(()) => debug!(
            recommendation_id = %record.recommendation_id,
            session_id = %record.session_id,
            "recommendation logged"
        ),
        Err(e) => error!(
            recommendation_id = %record.recommendation_id,
            session_id = %record.session_id,
            error = %e,
            "failed to log recommendation"
        ),
    }
}

/// Record a rating. Unlike [`write_recommendation`], failures are returned.
pub async fn write_rating(
    store: &dyn InteractionStore,
    record: &RatingRecord,
) -> Result<(), StorageError> {
    if let Err(e) = store.insert_rating(record).await {
        error!(
            recommendation_id = %record.recommendation_id,
            rating = %record.rating,
            error = %e,
            "failed to save rating"
        );
        return Err(e);
    }

    info!(
        recommendation_id = %record.recommendation_id,
        rating = %record.rating,
        "rating saved"
    );
    Ok(())
}
