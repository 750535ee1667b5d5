//! Favorites store
//!
//! A deduplicated, insertion-ordered collection of quotes keyed by
//! `(text, author)`. The whole collection is serialized and written back
//! on every mutation; no incremental diffing. A missing or corrupt
//! snapshot loads as an empty collection, never a startup failure.
//!
//! Single-threaded read-modify-write discipline: the pipeline serializes
//! user-initiated fetches, so no locking is needed here.

use quoteit_common::{Error, Result};
use rand::Rng;
use std::path::PathBuf;

use crate::models::Quote;

/// Persistent favorites collection
pub struct FavoritesStore {
    path: PathBuf,
    quotes: Vec<Quote>,
}

impl FavoritesStore {
    /// Load the snapshot at `path`, degrading to empty on any read or
    /// parse failure.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let quotes = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Vec<Quote>>(&content) {
                Ok(quotes) => {
                    tracing::debug!(path = %path.display(), count = quotes.len(), "Favorites loaded");
                    quotes
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Corrupt favorites snapshot, starting with an empty collection"
                    );
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Favorites snapshot unreadable, starting with an empty collection"
                );
                Vec::new()
            }
        };

        Self { path, quotes }
    }

    /// Toggle a quote's membership; returns true if it is now favorited.
    ///
    /// Membership is keyed on `(text, author)`, so toggling a quote with
    /// different tags or enrichment removes the stored entry with the
    /// same key. Idempotent under pairs of identical toggles.
    pub fn toggle(&mut self, quote: &Quote) -> Result<bool> {
        let now_favorited = match self.position(quote) {
            Some(index) => {
                self.quotes.remove(index);
                false
            }
            None => {
                self.quotes.push(quote.clone());
                true
            }
        };

        self.save()?;
        Ok(now_favorited)
    }

    /// Whether a quote with the same key is currently favorited
    pub fn contains(&self, quote: &Quote) -> bool {
        self.position(quote).is_some()
    }

    /// Uniform random pick; `None` on an empty collection
    pub fn random_pick(&self) -> Option<&Quote> {
        if self.quotes.is_empty() {
            return None;
        }
        let index = rand::thread_rng().gen_range(0..self.quotes.len());
        self.quotes.get(index)
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Favorites in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Quote> {
        self.quotes.iter()
    }

    fn position(&self, quote: &Quote) -> Option<usize> {
        self.quotes.iter().position(|q| q.same_key(quote))
    }

    /// Write the full snapshot
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.quotes)
            .map_err(|e| Error::Internal(format!("Favorites serialization failed: {}", e)))?;

        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
