use crate::insight::{BusinessRequest, InsightClient};
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<InsightClient>,
}

/// Raw dashboard form input, before trimming
#[derive(Debug, Deserialize)]
pub struct InsightForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub backend_url: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl InsightForm {
    /// Validate the form into a backend request
    pub fn validate(&self) -> Result<BusinessRequest, AppError> {
        BusinessRequest::parse(&self.name, &self.location)
            .map_err(|e| AppError::BadRequest(e.to_string()))
    }
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => {
                warn!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
        };

        (status, Json(ErrorResponse {
            error: status.to_string(),
            message,
        }))
        .into_response()
    }
}
