pub mod insights;
pub mod models;

// Re-exports
pub use models::*;

use axum::{extract::State, routing::get, Json, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub async fn health_handler(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    Json(models::HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend_url: state.client.backend().base_url().to_string(),
    })
}

/// Full dashboard router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(insights::routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
