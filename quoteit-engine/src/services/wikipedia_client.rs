//! Wikipedia REST summary client
//!
//! Looks up the page summary for an author name: a thumbnail portrait, a
//! short extract, and the canonical article URL. Every lookup is bounded
//! by an explicit per-attempt timeout, distinct from the ambient request
//! timeout, so a slow knowledge base cannot stall the user-visible quote.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const WIKIPEDIA_SUMMARY_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";
const USER_AGENT: &str = "quoteit/0.1.0 (https://github.com/quoteit/quoteit)";

/// Wikipedia client errors
#[derive(Debug, Error)]
pub enum WikiError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("No article for: {0}")]
    PageNotFound(String),

    #[error("API error {0}: {1}")]
    ApiError(u16, String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Lookup timed out after {0:?}")]
    Timeout(Duration),
}

/// Page summary response (simplified)
///
/// The full response carries many more fields; only the ones the
/// enrichment chain consumes are modeled.
#[derive(Debug, Clone, Deserialize)]
pub struct WikiSummary {
    /// Canonical article title
    pub title: Option<String>,
    /// Short plain-text biography extract
    pub extract: Option<String>,
    /// Thumbnail portrait, when the article has a lead image
    pub thumbnail: Option<WikiThumbnail>,
    /// Canonical page URLs per platform
    pub content_urls: Option<WikiContentUrls>,
}

/// Article lead-image thumbnail
#[derive(Debug, Clone, Deserialize)]
pub struct WikiThumbnail {
    pub source: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Canonical page URLs
#[derive(Debug, Clone, Deserialize)]
pub struct WikiContentUrls {
    pub desktop: Option<WikiPageUrls>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WikiPageUrls {
    pub page: Option<String>,
}

impl WikiSummary {
    /// Thumbnail image URL, when present
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail.as_ref()?.source.as_deref()
    }

    /// Canonical desktop article URL, when present
    pub fn page_url(&self) -> Option<&str> {
        self.content_urls.as_ref()?.desktop.as_ref()?.page.as_deref()
    }
}

/// Wikipedia summary API client
#[derive(Clone)]
pub struct WikipediaClient {
    http_client: reqwest::Client,
    base_url: String,
    lookup_timeout: Duration,
}

impl WikipediaClient {
    /// Create a client against the live summary endpoint
    pub fn new(lookup_timeout: Duration) -> Result<Self, WikiError> {
        Self::with_base_url(WIKIPEDIA_SUMMARY_BASE_URL, lookup_timeout)
    }

    /// Create a client against an explicit endpoint
    pub fn with_base_url(base_url: &str, lookup_timeout: Duration) -> Result<Self, WikiError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(lookup_timeout)
            .build()
            .map_err(|e| WikiError::NetworkError(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.to_string(),
            lookup_timeout,
        })
    }

    /// Fetch the page summary for an author name
    ///
    /// The whole attempt, including the body read, is bounded by the
    /// configured lookup timeout.
    pub async fn summary(&self, author: &str) -> Result<WikiSummary, WikiError> {
        tokio::time::timeout(self.lookup_timeout, self.summary_inner(author))
            .await
            .map_err(|_| WikiError::Timeout(self.lookup_timeout))?
    }

    async fn summary_inner(&self, author: &str) -> Result<WikiSummary, WikiError> {
        let url = self.summary_url(author)?;

        tracing::debug!(author = %author, url = %url, "Querying Wikipedia summary API");

        let response = self
            .http_client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| WikiError::NetworkError(e.to_string()))?;

        let status = response.status();

        if status == 404 {
            return Err(WikiError::PageNotFound(author.to_string()));
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(WikiError::ApiError(status.as_u16(), error_text));
        }

        let summary: WikiSummary = response
            .json()
            .await
            .map_err(|e| WikiError::ParseError(e.to_string()))?;

        tracing::debug!(
            author = %author,
            has_thumbnail = summary.thumbnail_url().is_some(),
            has_extract = summary.extract.is_some(),
            "Wikipedia summary lookup successful"
        );

        Ok(summary)
    }

    /// Build the summary URL with the author as a percent-encoded path segment
    fn summary_url(&self, author: &str) -> Result<reqwest::Url, WikiError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| WikiError::ParseError(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| WikiError::ParseError("Base URL cannot carry path segments".to_string()))?
            .push(author);

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = WikipediaClient::new(Duration::from_secs(5));
        assert!(client.is_ok());
    }

    #[test]
    fn test_summary_url_encodes_author() {
        let client = WikipediaClient::new(Duration::from_secs(5)).unwrap();
        let url = client.summary_url("Albert Einstein").unwrap();
        assert_eq!(
            url.as_str(),
            "https://en.wikipedia.org/api/rest_v1/page/summary/Albert%20Einstein"
        );
    }

    #[test]
    fn test_summary_parse_full() {
        let summary: WikiSummary = serde_json::from_str(
            r#"{
                "title": "Albert Einstein",
                "extract": "German-born theoretical physicist.",
                "thumbnail": {"source": "https://upload.wikimedia.org/einstein.jpg", "width": 240, "height": 320},
                "content_urls": {"desktop": {"page": "https://en.wikipedia.org/wiki/Albert_Einstein"}}
            }"#,
        )
        .unwrap();

        assert_eq!(
            summary.thumbnail_url(),
            Some("https://upload.wikimedia.org/einstein.jpg")
        );
        assert_eq!(
            summary.page_url(),
            Some("https://en.wikipedia.org/wiki/Albert_Einstein")
        );
        assert_eq!(
            summary.extract.as_deref(),
            Some("German-born theoretical physicist.")
        );
    }

    #[test]
    fn test_summary_parse_without_thumbnail() {
        let summary: WikiSummary =
            serde_json::from_str(r#"{"title": "Laozi", "extract": "Chinese philosopher."}"#)
                .unwrap();

        assert!(summary.thumbnail_url().is_none());
        assert!(summary.page_url().is_none());
    }
}
