//! numclass library - number classification microservice
//!
//! Exposes a single stateless endpoint that classifies an integer
//! (primality, perfection, Armstrong-ness, parity, digit sum) and decorates
//! the result with a trivia string from the Numbers API.

use axum::Router;
use tower_http::cors::CorsLayer;

pub mod api;
pub mod classify;
pub mod config;
pub mod services;

use services::FunFactClient;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Outbound Numbers API client
    pub facts: FunFactClient,
}

impl AppState {
    /// Create new application state
    pub fn new(facts: FunFactClient) -> Self {
        Self { facts }
    }
}

/// Build application router
///
/// CORS is fully permissive: the endpoint is public, read-only, and
/// unauthenticated.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/api/classify-number", get(api::classify_number))
        .merge(api::health_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
