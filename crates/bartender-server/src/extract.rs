//! Header extractors for the browser client's request fields.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;

use bartender_core::error::CoreError;
use bartender_core::fields;
use bartender_core::models::rating::{Rating, RatingRecord};
use bartender_core::models::recommendation::RecommendationRequest;

use crate::error::ApiError;

fn header(headers: &HeaderMap, field: &str) -> Option<String> {
    headers
        .get(fields::header_name(field))
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
}

fn required(headers: &HeaderMap, field: &str) -> Result<String, CoreError> {
    header(headers, field)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| CoreError::MissingField(field.to_string()))
}

/// `prompt`, `sessionUUID` and `recommendationUUID` headers.
///
/// Every field is optional. A missing prompt reads as empty text and is
/// rejected later by the generator. Missing identifiers are recorded as empty
/// strings and never block generation.
pub struct RecommendationHeaders(pub RecommendationRequest);

impl<S> FromRequestParts<S> for RecommendationHeaders
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let headers = &parts.headers;

        Ok(RecommendationHeaders(RecommendationRequest {
            session_id: header(headers, fields::SESSION_UUID).unwrap_or_default(),
            recommendation_id: header(headers, fields::RECOMMENDATION_UUID).unwrap_or_default(),
            prompt_text: header(headers, fields::PROMPT).unwrap_or_default(),
        }))
    }
}

/// `recommendationUUID` and `rating` headers.
pub struct RatingHeaders(pub RatingRecord);

impl<S> FromRequestParts<S> for RatingHeaders
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let headers = &parts.headers;

        let recommendation_id = required(headers, fields::RECOMMENDATION_UUID)?;
        let rating: Rating = required(headers, fields::RATING)?.parse()?;

        Ok(RatingHeaders(RatingRecord {
            recommendation_id,
            rating,
        }))
    }
}
