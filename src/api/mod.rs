pub mod routes;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::FetchSettings;

/// Shared state of the message endpoint. One handler set is registered when
/// the router is built and lives until the hosting process exits.
#[derive(Clone)]
pub struct AppState {
    pub fetch: FetchSettings,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", axum::routing::get(routes::health))
        .route("/api/message", axum::routing::post(routes::message))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
