//! bartender-server
//!
//! HTTP surface of the Bartender backend: cocktail recommendations, ratings,
//! and a health probe, behind an origin allow-list.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::get;

pub mod config;
pub mod cors;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/recommendation", get(routes::recommendation::recommend))
        .route("/rating", get(routes::rating::rate))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors::cors_layer())
        .with_state(state)
}
