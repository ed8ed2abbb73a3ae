use crate::config::DelayConfig;
use crate::models::{BusinessFormData, ErrorResponse};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::error;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub rng: Arc<Mutex<StdRng>>,
    pub delays: DelayConfig,
}

impl AppState {
    /// Entropy-seeded unless `seed` is given.
    pub fn new(delays: DelayConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Arc::new(Mutex::new(rng)),
            delays,
        }
    }

    /// Run `f` with exclusive access to the random source.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> Result<T, AppError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| AppError::Internal("random source lock poisoned".to_string()))?;
        Ok(f(&mut rng))
    }
}

/// Name and location, from a JSON body or a query string.
///
/// Both fields are optional at the wire level so an absent field reaches
/// validation instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct BusinessRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl BusinessRequest {
    /// Validate the request. Values are passed through as supplied.
    pub fn validate(self) -> Result<BusinessFormData, AppError> {
        match (self.name, self.location) {
            (Some(name), Some(location))
                if !name.trim().is_empty() && !location.trim().is_empty() =>
            {
                Ok(BusinessFormData { name, location })
            }
            _ => Err(AppError::Validation),
        }
    }
}

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Business name and location are required")]
    Validation,
    #[error("Route not found")]
    NotFound,
    /// Detail is logged, never returned.
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(detail) = &self {
            error!("Internal error: {}", detail);
        }

        let status = self.status();
        (status, Json(ErrorResponse {
            error: self.to_string(),
        }))
        .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: Option<&str>, location: Option<&str>) -> BusinessRequest {
        BusinessRequest {
            name: name.map(str::to_string),
            location: location.map(str::to_string),
        }
    }

    #[test]
    fn accepts_both_fields_untrimmed() {
        let form = request(Some(" Cake & Co "), Some("Mumbai")).validate().unwrap();
        assert_eq!(form.name, " Cake & Co ");
        assert_eq!(form.location, "Mumbai");
    }

    #[test]
    fn rejects_missing_empty_or_blank_fields() {
        for (name, location) in [
            (None, Some("Mumbai")),
            (Some("Cake & Co"), None),
            (Some(""), Some("Mumbai")),
            (Some("Cake & Co"), Some("   ")),
            (None, None),
        ] {
            assert!(matches!(
                request(name, location).validate(),
                Err(AppError::Validation)
            ));
        }
    }

    #[test]
    fn seeded_state_is_reproducible() {
        let a = AppState::new(DelayConfig::default(), Some(11));
        let b = AppState::new(DelayConfig::default(), Some(11));
        let draw = |state: &AppState| {
            state
                .with_rng(|rng| crate::generator::generate_review_count(rng))
                .unwrap()
        };
        assert_eq!(draw(&a), draw(&b));
    }

    #[test]
    fn errors_map_to_statuses() {
        assert_eq!(AppError::Validation.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Internal("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(AppError::Internal("boom".into()).to_string(), "Internal server error");
    }
}
