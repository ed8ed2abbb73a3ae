use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name and location as entered in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessFormData {
    pub name: String,
    pub location: String,
}

/// Mock dashboard data for one submitted business
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessData {
    pub rating: f64,
    pub reviews: u32,
    pub headline: String,
    pub name: String,
    pub location: String,
    pub timestamp: DateTime<Utc>,
}

impl BusinessData {
    /// Take the new headline and its timestamp, keep everything else.
    pub fn merge_headline(&mut self, update: HeadlineResponse) {
        self.headline = update.headline;
        self.timestamp = update.timestamp;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineResponse {
    pub headline: String,
    pub timestamp: DateTime<Utc>,
}

/// Health check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceBanner {
    pub service: String,
    pub version: String,
    pub status: String,
}

/// Error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
