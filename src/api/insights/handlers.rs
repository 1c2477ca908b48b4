use crate::api::models::*;
use crate::insight::{BusinessData, HeadlineResponse};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use tracing::info;

pub async fn fetch_insights_handler(
    State(state): State<AppState>,
    payload: Result<Json<InsightForm>, JsonRejection>,
) -> Result<Json<BusinessData>, AppError> {
    let Json(form) = payload?;
    let request = form.validate()?;

    let data = state.client.fetch_insights(&request).await;

    info!(rating = data.rating, reviews = data.reviews, "Insights ready");
    Ok(Json(data))
}

pub async fn regenerate_headline_handler(
    State(state): State<AppState>,
    query: Result<Query<InsightForm>, QueryRejection>,
) -> Result<Json<HeadlineResponse>, AppError> {
    let Query(form) = query?;
    let request = form.validate()?;

    let headline = state
        .client
        .regenerate_headline(&request.name, &request.location)
        .await;

    Ok(Json(headline))
}
