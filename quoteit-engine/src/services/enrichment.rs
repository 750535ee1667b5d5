//! Enrichment adapter and orchestrator
//!
//! Decorates a `RawQuote` with an author portrait and a biography link.
//! Both lookups are best-effort with a guaranteed terminal fallback:
//!
//! - portrait: Wikipedia thumbnail → image search (when a key is
//!   configured) → generated initials-avatar placeholder
//! - biography: Wikipedia summary → slug-constructed article URL
//!
//! Enrichment therefore never fails and never surfaces an error to the
//! caller; the worst case is a quote carrying both fallbacks. The two
//! lookups run concurrently, each bounded by the configured per-lookup
//! timeout inside its client.

use quoteit_common::slug::slugify;
use quoteit_common::{Config, EnrichMode, Error, Result};
use tokio::sync::oneshot;

use crate::models::{BiographyLink, Quote, RawQuote};
use crate::services::image_search::ImageSearchClient;
use crate::services::wikipedia_client::WikipediaClient;

const UI_AVATARS_BASE_URL: &str = "https://ui-avatars.com/api/";
const WIKIPEDIA_ARTICLE_BASE_URL: &str = "https://en.wikipedia.org/wiki";

/// Outcome of an enrichment request
///
/// `Ready` carries the fully-enriched quote (synchronous mode).
/// `Pending` carries an immediately-renderable base quote plus a channel
/// delivering the enriched version once the lookups settle (optimistic
/// mode). Both variants always hold a usable portrait URL and biography
/// link.
#[derive(Debug)]
pub enum Enriched {
    Ready(Quote),
    Pending {
        base: Quote,
        update: oneshot::Receiver<Quote>,
    },
}

impl Enriched {
    /// The quote that is renderable right now
    pub fn quote(&self) -> &Quote {
        match self {
            Enriched::Ready(quote) => quote,
            Enriched::Pending { base, .. } => base,
        }
    }

    /// Wait for the final quote
    ///
    /// In synchronous mode this is immediate; in optimistic mode it
    /// awaits the follow-up update, keeping the base quote if the
    /// enrichment task was dropped.
    pub async fn settled(self) -> Quote {
        match self {
            Enriched::Ready(quote) => quote,
            Enriched::Pending { base, update } => update.await.unwrap_or(base),
        }
    }
}

/// Enrichment orchestrator
#[derive(Clone)]
pub struct Enricher {
    wikipedia: WikipediaClient,
    image_search: Option<ImageSearchClient>,
    mode: EnrichMode,
}

impl Enricher {
    /// Build an enricher from resolved configuration
    ///
    /// The image-search step is enabled only when an access key is
    /// configured; portrait lookups still work without it via the
    /// placeholder fallback.
    pub fn new(config: &Config) -> Result<Self> {
        let wikipedia = WikipediaClient::new(config.enrichment_timeout)
            .map_err(|e| Error::Network(e.to_string()))?;

        let image_search = match &config.unsplash_access_key {
            Some(key) => {
                match ImageSearchClient::new(key.clone(), config.enrichment_timeout) {
                    Ok(client) => {
                        tracing::info!("Image search enabled for portrait fallback");
                        Some(client)
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Image search client unavailable, using placeholder fallback only");
                        None
                    }
                }
            }
            None => None,
        };

        Ok(Self {
            wikipedia,
            image_search,
            mode: config.enrichment_mode,
        })
    }

    /// Build an enricher from explicit clients (test seam)
    pub fn with_clients(
        wikipedia: WikipediaClient,
        image_search: Option<ImageSearchClient>,
        mode: EnrichMode,
    ) -> Self {
        Self {
            wikipedia,
            image_search,
            mode,
        }
    }

    /// Decorate a raw quote with portrait and biography
    ///
    /// Never fails. Synchronous mode waits for the bounded join;
    /// optimistic mode returns a base quote immediately and delivers the
    /// enriched quote through the `Pending` channel.
    pub async fn enrich(&self, raw: RawQuote) -> Enriched {
        match self.mode {
            EnrichMode::Synchronous => Enriched::Ready(self.enrich_now(raw).await),
            EnrichMode::Optimistic => {
                let base = base_quote(&raw);
                let (tx, rx) = oneshot::channel();
                let enricher = self.clone();

                tokio::spawn(async move {
                    let quote = enricher.enrich_now(raw).await;
                    // Receiver may be gone if the caller moved on
                    let _ = tx.send(quote);
                });

                Enriched::Pending { base, update: rx }
            }
        }
    }

    /// Run both lookups concurrently and merge the results
    async fn enrich_now(&self, raw: RawQuote) -> Quote {
        let (portrait_url, biography) = tokio::join!(
            self.fetch_portrait(&raw.author),
            self.fetch_biography(&raw.author)
        );

        Quote {
            text: raw.text,
            author: raw.author,
            tags: raw.tags,
            portrait_url,
            biography,
        }
    }

    /// Resolve a portrait URL for an author
    ///
    /// Always produces a non-empty URL.
    pub async fn fetch_portrait(&self, author: &str) -> String {
        match self.wikipedia.summary(author).await {
            Ok(summary) => {
                if let Some(thumbnail) = summary.thumbnail_url() {
                    return thumbnail.to_string();
                }
                tracing::debug!(author = %author, "Wikipedia article has no thumbnail");
            }
            Err(e) => {
                tracing::debug!(author = %author, error = %e, "Wikipedia portrait lookup failed");
            }
        }

        if let Some(image_search) = &self.image_search {
            match image_search.search_portrait(author).await {
                Ok(url) => return url,
                Err(e) => {
                    tracing::debug!(author = %author, error = %e, "Image search failed");
                }
            }
        }

        placeholder_portrait_url(author)
    }

    /// Resolve a biography link for an author
    ///
    /// Always produces a non-empty URL; `exists` reflects whether the
    /// knowledge base confirmed the article.
    pub async fn fetch_biography(&self, author: &str) -> BiographyLink {
        match self.wikipedia.summary(author).await {
            Ok(summary) => BiographyLink {
                exists: true,
                url: summary
                    .page_url()
                    .map(str::to_string)
                    .unwrap_or_else(|| fallback_biography_url(author)),
                extract: summary.extract,
            },
            Err(e) => {
                tracing::debug!(author = %author, error = %e, "Biography lookup failed, using fallback link");
                BiographyLink {
                    exists: false,
                    url: fallback_biography_url(author),
                    extract: None,
                }
            }
        }
    }
}

/// Base quote for optimistic delivery: raw fields plus both fallbacks
fn base_quote(raw: &RawQuote) -> Quote {
    Quote {
        text: raw.text.clone(),
        author: raw.author.clone(),
        tags: raw.tags.clone(),
        portrait_url: placeholder_portrait_url(&raw.author),
        biography: BiographyLink {
            exists: false,
            url: fallback_biography_url(&raw.author),
            extract: None,
        },
    }
}

/// Deterministic initials-avatar URL for an author name
pub fn placeholder_portrait_url(author: &str) -> String {
    reqwest::Url::parse_with_params(
        UI_AVATARS_BASE_URL,
        &[
            ("name", author),
            ("size", "150"),
            ("background", "random"),
            ("color", "fff"),
        ],
    )
    .map(|url| url.to_string())
    .unwrap_or_else(|_| format!("{}?name={}&size=150", UI_AVATARS_BASE_URL, slugify(author)))
}

/// Best-guess article URL from a slugified author name
pub fn fallback_biography_url(author: &str) -> String {
    format!("{}/{}", WIKIPEDIA_ARTICLE_BASE_URL, slugify(author))
}
