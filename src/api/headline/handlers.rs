use crate::api::models::*;
use crate::generator::generate_headline;
use crate::models::HeadlineResponse;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use chrono::Utc;
use tracing::{info, warn};

pub async fn regenerate_headline_handler(
    State(state): State<AppState>,
    query: Result<Query<BusinessRequest>, QueryRejection>,
) -> Result<Json<HeadlineResponse>, AppError> {
    let Query(request) = query.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "Rejected headline query");
        AppError::Validation
    })?;

    let form = request.validate().inspect_err(|_| {
        warn!("Headline request missing name or location");
    })?;

    info!(name = %form.name, location = %form.location, "Regenerating headline");

    tokio::time::sleep(state.delays.regenerate_headline()).await;

    let headline = state.with_rng(|rng| generate_headline(rng, &form.name, &form.location))?;

    Ok(Json(HeadlineResponse {
        headline,
        timestamp: Utc::now(),
    }))
}
