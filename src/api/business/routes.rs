use crate::api::business::handlers::submit_business_data_handler;
use crate::api::models::AppState;
use axum::{routing::post, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/business-data", post(submit_business_data_handler))
}
