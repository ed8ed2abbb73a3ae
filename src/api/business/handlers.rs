use crate::api::models::*;
use crate::generator::{generate_headline, generate_rating, generate_review_count};
use crate::models::BusinessData;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::Utc;
use tracing::{info, warn};

pub async fn submit_business_data_handler(
    State(state): State<AppState>,
    payload: Result<Json<BusinessRequest>, JsonRejection>,
) -> Result<Json<BusinessData>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "Rejected business data body");
        AppError::Validation
    })?;

    // Validate
    let form = request.validate().inspect_err(|_| {
        warn!("Business data request missing name or location");
    })?;

    info!(name = %form.name, location = %form.location, "Generating business data");

    tokio::time::sleep(state.delays.business_data()).await;

    let (rating, reviews, headline) = state.with_rng(|rng| {
        let rating = generate_rating(rng);
        let reviews = generate_review_count(rng);
        let headline = generate_headline(rng, &form.name, &form.location);
        (rating, reviews, headline)
    })?;

    info!(rating, reviews, "Business data generated");

    Ok(Json(BusinessData {
        rating,
        reviews,
        headline,
        name: form.name,
        location: form.location,
        timestamp: Utc::now(),
    }))
}
