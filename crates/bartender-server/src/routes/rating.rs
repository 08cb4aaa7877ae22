use axum::extract::State;

use bartender_storage::records;

use crate::error::ApiError;
use crate::extract::RatingHeaders;
use crate::state::AppState;

pub const RATING_SAVED: &str = "rating saved";

/// Save a thumbs up/down. Responds only after the row is written.
pub async fn rate(
    State(state): State<AppState>,
    RatingHeaders(record): RatingHeaders,
) -> Result<&'static str, ApiError> {
    records::write_rating(state.store.as_ref(), &record).await?;
    Ok(RATING_SAVED)
}
