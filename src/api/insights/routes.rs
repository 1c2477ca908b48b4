use crate::api::insights::handlers::{fetch_insights_handler, regenerate_headline_handler};
use crate::api::models::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/insights", post(fetch_insights_handler))
        .route("/insights/headline", get(regenerate_headline_handler))
}
