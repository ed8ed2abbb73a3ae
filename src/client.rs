//! HTTP client for the dashboard API.

use crate::models::{BusinessData, BusinessFormData, HeadlineResponse, HealthResponse};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),
    #[error("server responded with {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// The two business calls the dashboard makes.
#[allow(async_fn_in_trait)]
pub trait BusinessApi {
    async fn submit_business_data(&self, form: &BusinessFormData) -> Result<BusinessData, ClientError>;

    async fn regenerate_headline(&self, name: &str, location: &str) -> Result<HeadlineResponse, ClientError>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health_check(&self) -> Result<HealthResponse, ClientError> {
        let res = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .map_err(ClientError::Network)?;
        decode(res).await
    }
}

impl BusinessApi for ApiClient {
    async fn submit_business_data(&self, form: &BusinessFormData) -> Result<BusinessData, ClientError> {
        let res = self
            .http
            .post(format!("{}/business-data", self.base_url))
            .json(form)
            .send()
            .await
            .map_err(ClientError::Network)?;
        decode(res).await
    }

    async fn regenerate_headline(&self, name: &str, location: &str) -> Result<HeadlineResponse, ClientError> {
        let res = self
            .http
            .get(format!("{}/regenerate-headline", self.base_url))
            .query(&[("name", name), ("location", location)])
            .send()
            .await
            .map_err(ClientError::Network)?;
        decode(res).await
    }
}

async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, ClientError> {
    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        warn!(%status, body = %body, "API error");
        return Err(ClientError::Status { status, body });
    }
    res.json::<T>().await.map_err(ClientError::Decode)
}
