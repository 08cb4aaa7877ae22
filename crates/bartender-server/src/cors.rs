use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

pub const ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "https://backendbartender.com",
    "https://backend-bartender.netlify.app",
];

const ALLOWED_HEADERS: [&str; 11] = [
    "access-control-allow-headers",
    "origin",
    "accept",
    "x-requested-with",
    "content-type",
    "access-control-request-method",
    "access-control-request-headers",
    "prompt",
    "sessionuuid",
    "recommendationuuid",
    "rating",
];

/// Echo `Access-Control-Allow-Origin` only for the frontend's own origins.
/// Any other origin gets no allow header and the browser blocks the response.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            ALLOWED_ORIGINS.map(HeaderValue::from_static),
        ))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(ALLOWED_HEADERS.map(HeaderName::from_static))
}
