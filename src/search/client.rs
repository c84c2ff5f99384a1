use std::time::Duration;

use super::types::{ProviderResponse, SearchResult};
use crate::error::ApiError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const PROVIDER_ERROR_MESSAGE: &str = "Problem getting data from external service";

/// Client for the external search provider.
///
/// Owns a shared `reqwest::Client`. One provider round-trip per search, no
/// retries; any transport, status or decode failure maps to a single
/// internal error.
pub struct SearchClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http_client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Forwards `query` to the provider and maps the response to flat search
    /// results.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ApiError> {
        let url = format!("{}/", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("q", query), ("format", "json")])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Search provider request failed: {}", err);
                ApiError::internal(PROVIDER_ERROR_MESSAGE)
            })?;

        if !response.status().is_success() {
            tracing::error!("Search provider returned status {}", response.status());
            return Err(ApiError::internal(PROVIDER_ERROR_MESSAGE));
        }

        let payload: ProviderResponse = response.json().await.map_err(|err| {
            tracing::error!("Failed to decode search provider response: {}", err);
            ApiError::internal(PROVIDER_ERROR_MESSAGE)
        })?;

        Ok(map_provider_response(payload))
    }
}

/// Keeps only related topics that carry both a non-empty text and a link,
/// preserving provider order.
pub fn map_provider_response(response: ProviderResponse) -> Vec<SearchResult> {
    response
        .related_topics
        .into_iter()
        .filter_map(|topic| match (topic.text, topic.first_url) {
            (Some(title), Some(url)) if !title.is_empty() && !url.is_empty() => {
                Some(SearchResult { title, url })
            }
            _ => None,
        })
        .collect()
}
