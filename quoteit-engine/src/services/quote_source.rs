//! Quote provider client
//!
//! Fetches a random quote, optionally filtered by category, from the
//! primary provider, with at most one alternate-provider attempt when the
//! primary fails at the transport level. The two providers use different
//! wire shapes; both normalize into a single `RawQuote`.
//!
//! Malformed payloads surface as `Error::QuoteUnavailable` without an
//! alternate attempt — the alternate exists to cover unreachable
//! endpoints and non-success statuses, not provider contract violations.

use quoteit_common::{Error, Result};
use serde::Deserialize;
use std::time::Duration;

use crate::models::quote::UNKNOWN_AUTHOR;
use crate::models::{Category, RawQuote};

const QUOTABLE_BASE_URL: &str = "https://api.quotable.io/random";
const ZENQUOTES_BASE_URL: &str = "https://zenquotes.io/api/random";
const USER_AGENT: &str = "quoteit/0.1.0 (https://github.com/quoteit/quoteit)";

/// Primary provider response shape
///
/// The body field has shipped under both `content` and `text` across
/// provider revisions; accept either.
#[derive(Debug, Deserialize)]
struct QuotableResponse {
    #[serde(alias = "text")]
    content: Option<String>,
    author: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

/// Alternate provider entry (`[{ "q": ..., "a": ... }]` array shape)
#[derive(Debug, Deserialize)]
struct ZenQuotesEntry {
    q: Option<String>,
    a: Option<String>,
}

/// Quote provider client with alternate-provider fallback
#[derive(Clone)]
pub struct QuoteSourceClient {
    http_client: reqwest::Client,
    primary_url: String,
    alternate_url: String,
}

impl QuoteSourceClient {
    /// Create a client against the default providers
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_base_urls(QUOTABLE_BASE_URL, ZENQUOTES_BASE_URL, timeout)
    }

    /// Create a client against explicit provider endpoints
    pub fn with_base_urls(primary_url: &str, alternate_url: &str, timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            primary_url: primary_url.to_string(),
            alternate_url: alternate_url.to_string(),
        })
    }

    /// Fetch a random quote, optionally filtered by category
    ///
    /// Never returns a `RawQuote` with empty text. On total failure the
    /// error is surfaced to the caller — no canned substitute quote.
    pub async fn fetch_quote(&self, category: Option<Category>) -> Result<RawQuote> {
        match self.fetch_primary(category).await {
            Ok(raw) => Ok(raw),
            Err(Error::Network(primary_error)) => {
                tracing::warn!(
                    error = %primary_error,
                    "Primary quote provider failed, trying alternate"
                );

                if category.is_some() {
                    // The alternate wire shape has no tag filter; the
                    // category is dropped rather than failing the fetch.
                    tracing::debug!("Alternate provider does not support category filters");
                }

                match self.fetch_alternate().await {
                    Ok(raw) => {
                        tracing::info!(author = %raw.author, "Quote fetched from alternate provider");
                        Ok(raw)
                    }
                    Err(alternate_error) => {
                        tracing::error!(
                            primary_error = %primary_error,
                            alternate_error = %alternate_error,
                            "Both quote providers failed"
                        );
                        Err(alternate_error)
                    }
                }
            }
            Err(e) => Err(e),
        }
    }

    async fn fetch_primary(&self, category: Option<Category>) -> Result<RawQuote> {
        let mut request = self.http_client.get(&self.primary_url);
        if let Some(category) = category {
            request = request.query(&[("tags", category.as_tag())]);
        }

        tracing::debug!(url = %self.primary_url, category = ?category, "Querying primary quote provider");

        let response = request
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network(format!(
                "Primary quote provider returned status {}",
                status.as_u16()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        normalize_quotable(&body)
    }

    async fn fetch_alternate(&self) -> Result<RawQuote> {
        tracing::debug!(url = %self.alternate_url, "Querying alternate quote provider");

        let response = self
            .http_client
            .get(&self.alternate_url)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network(format!(
                "Alternate quote provider returned status {}",
                status.as_u16()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        normalize_zenquotes(&body)
    }
}

/// Normalize a primary-provider payload into a `RawQuote`
fn normalize_quotable(body: &str) -> Result<RawQuote> {
    let parsed: QuotableResponse = serde_json::from_str(body)
        .map_err(|e| Error::QuoteUnavailable(format!("Malformed provider payload: {}", e)))?;

    let text = parsed
        .content
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| {
            Error::QuoteUnavailable("Provider payload carried no quotation body".to_string())
        })?;

    Ok(RawQuote {
        text,
        author: non_empty_author(parsed.author),
        tags: parsed.tags,
    })
}

/// Normalize an alternate-provider payload into a `RawQuote`
fn normalize_zenquotes(body: &str) -> Result<RawQuote> {
    let entries: Vec<ZenQuotesEntry> = serde_json::from_str(body)
        .map_err(|e| Error::QuoteUnavailable(format!("Malformed provider payload: {}", e)))?;

    let entry = entries
        .into_iter()
        .next()
        .ok_or_else(|| Error::QuoteUnavailable("Provider returned no quotes".to_string()))?;

    let text = entry.q.filter(|t| !t.trim().is_empty()).ok_or_else(|| {
        Error::QuoteUnavailable("Provider payload carried no quotation body".to_string())
    })?;

    Ok(RawQuote {
        text,
        author: non_empty_author(entry.a),
        tags: Vec::new(),
    })
}

fn non_empty_author(author: Option<String>) -> String {
    author
        .filter(|a| !a.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
}
