use std::sync::Arc;

use axum::extract::State;
use tracing::info;

use bartender_core::models::recommendation::RecommendationRecord;
use bartender_storage::records;

use crate::error::ApiError;
use crate::extract::RecommendationHeaders;
use crate::state::AppState;

/// Generate a cocktail for the request in the `prompt` header.
///
/// The interaction is logged on a detached task: the response goes out
/// without waiting for the insert, and a failed insert is only logged.
pub async fn recommend(
    State(state): State<AppState>,
    RecommendationHeaders(request): RecommendationHeaders,
) -> Result<String, ApiError> {
    let output = state.generator.generate(&request.prompt_text).await?;

    info!(
        session_id = %request.session_id,
        recommendation_id = %request.recommendation_id,
        filtered = output.is_filtered(),
        "recommendation ready"
    );

    let record = RecommendationRecord::new(&request, output.text());
    let store = Arc::clone(&state.store);
    tokio::spawn(async move {
        records::write_recommendation(store.as_ref(), &record).await;
    });

    Ok(output.into_text())
}
