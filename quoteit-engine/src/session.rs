//! Fetch session state and result ordering
//!
//! One explicit state struct instead of ambient globals: the session owns
//! the source adapter, the enrichment orchestrator, and the currently
//! displayed quote. Every fetch is issued under a monotonically
//! increasing generation; a result is applied only while its generation
//! is still the latest, so a stale slower request can never overwrite a
//! newer one.

use quoteit_common::Result;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{Category, Quote};
use crate::services::{Enriched, Enricher, QuoteSourceClient};

#[derive(Debug, Default)]
struct SessionState {
    /// Generation of the most recently issued fetch
    generation: u64,
    /// Quote currently handed to the rendering layer
    current: Option<Quote>,
}

/// Quote fetch session
#[derive(Clone)]
pub struct QuoteSession {
    source: QuoteSourceClient,
    enricher: Enricher,
    state: Arc<RwLock<SessionState>>,
}

impl QuoteSession {
    pub fn new(source: QuoteSourceClient, enricher: Enricher) -> Self {
        Self {
            source,
            enricher,
            state: Arc::new(RwLock::new(SessionState::default())),
        }
    }

    /// Issue a new fetch generation
    pub async fn begin_fetch(&self) -> u64 {
        let mut state = self.state.write().await;
        state.generation += 1;
        state.generation
    }

    /// Install a fetch result, unless a newer fetch has been issued since
    ///
    /// Returns false when the result was stale and discarded.
    pub async fn apply(&self, generation: u64, quote: Quote) -> bool {
        let mut state = self.state.write().await;
        if generation != state.generation {
            tracing::debug!(
                generation,
                latest = state.generation,
                "Discarding stale fetch result"
            );
            return false;
        }
        state.current = Some(quote);
        true
    }

    /// The currently displayed quote, if any
    pub async fn current(&self) -> Option<Quote> {
        self.state.read().await.current.clone()
    }

    /// Fetch, enrich, and install the next quote
    ///
    /// In optimistic enrichment mode the base quote is installed and
    /// returned immediately; the deferred enrichment update passes
    /// through the same generation gate, so it too is discarded if a
    /// newer fetch has been issued meanwhile.
    pub async fn next_quote(&self, category: Option<Category>) -> Result<Quote> {
        let generation = self.begin_fetch().await;

        let raw = self.source.fetch_quote(category).await?;

        match self.enricher.enrich(raw).await {
            Enriched::Ready(quote) => {
                self.apply(generation, quote.clone()).await;
                Ok(quote)
            }
            Enriched::Pending { base, update } => {
                self.apply(generation, base.clone()).await;

                let session = self.clone();
                tokio::spawn(async move {
                    if let Ok(quote) = update.await {
                        session.apply(generation, quote).await;
                    }
                });

                Ok(base)
            }
        }
    }
}
