//! # Network Service
//!
//! Fetches population records for a category from the remote API. Exactly one
//! attempt per invocation; retry policy, if any, belongs to the caller. The
//! call is an ordinary future, so the owner can run it inside a task it holds
//! a handle to and abort it for cancellation.

use async_trait::async_trait;

use crate::config;
use crate::models::{Category, PopulationData, PopulationRecord};
use crate::services::error::FetchError;

/// Seam for fetching population data, mockable in tests
#[async_trait]
pub trait PopulationProvider: Send + Sync {
    /// Fetch all records for a category
    async fn fetch_population(&self, category: Category)
        -> Result<Vec<PopulationRecord>, FetchError>;
}

/// HTTP-backed provider against the population API
pub struct NetworkService {
    client: reqwest::Client,
    url_template: String,
}

impl NetworkService {
    /// Create a service against the configured API URL template
    pub fn new() -> Self {
        Self::with_url(config::get_api_url())
    }

    /// Create a service against an explicit URL template, e.g. a local stub
    /// server in tests. The template must contain the category placeholder.
    pub fn with_url(url_template: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url_template: url_template.into(),
        }
    }
}

impl Default for NetworkService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PopulationProvider for NetworkService {
    async fn fetch_population(
        &self,
        category: Category,
    ) -> Result<Vec<PopulationRecord>, FetchError> {
        let target = self
            .url_template
            .replace(config::URL_CATEGORY_PLACEHOLDER, category.as_str());
        let url = reqwest::Url::parse(&target).map_err(|_| FetchError::InvalidUrl)?;

        tracing::debug!("fetching {category} population data from {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("population fetch failed with status {status}");
            return Err(FetchError::InvalidResponse {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(FetchError::from_transport)?;
        let envelope: PopulationData = serde_json::from_str(&body).map_err(|err| {
            tracing::error!("failed to decode population payload: {err}");
            FetchError::Decoding
        })?;

        let records = envelope.into_records();
        tracing::info!("fetched {} {category} records", records.len());
        Ok(records)
    }
}
