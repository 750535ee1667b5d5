//! Unsplash image-search client
//!
//! Optional middle step of the portrait fallback chain, active only when
//! an access key is configured. Searches public photos by author name and
//! returns the first small-size result URL.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const UNSPLASH_SEARCH_BASE_URL: &str = "https://api.unsplash.com/search/photos";
const USER_AGENT: &str = "quoteit/0.1.0 (https://github.com/quoteit/quoteit)";

/// Image search client errors
#[derive(Debug, Error)]
pub enum ImageSearchError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error {0}: {1}")]
    ApiError(u16, String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("No results for: {0}")]
    NoResults(String),
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    urls: Option<ResultUrls>,
}

#[derive(Debug, Deserialize)]
struct ResultUrls {
    small: Option<String>,
}

/// Unsplash photo search client
#[derive(Clone)]
pub struct ImageSearchClient {
    http_client: reqwest::Client,
    base_url: String,
    access_key: String,
}

impl ImageSearchClient {
    /// Create a client against the live search endpoint
    pub fn new(access_key: String, timeout: Duration) -> Result<Self, ImageSearchError> {
        Self::with_base_url(UNSPLASH_SEARCH_BASE_URL, access_key, timeout)
    }

    /// Create a client against an explicit endpoint
    pub fn with_base_url(
        base_url: &str,
        access_key: String,
        timeout: Duration,
    ) -> Result<Self, ImageSearchError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ImageSearchError::NetworkError(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.to_string(),
            access_key,
        })
    }

    /// Search for a portrait photo by author name
    pub async fn search_portrait(&self, author: &str) -> Result<String, ImageSearchError> {
        tracing::debug!(author = %author, "Querying image search API");

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[("query", author), ("per_page", "1")])
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .header("Accept-Version", "v1")
            .send()
            .await
            .map_err(|e| ImageSearchError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ImageSearchError::ApiError(status.as_u16(), error_text));
        }

        let search: SearchResponse = response
            .json()
            .await
            .map_err(|e| ImageSearchError::ParseError(e.to_string()))?;

        search
            .results
            .into_iter()
            .find_map(|r| r.urls.and_then(|u| u.small))
            .ok_or_else(|| ImageSearchError::NoResults(author.to_string()))
    }
}
