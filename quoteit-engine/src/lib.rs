//! # quoteit engine
//!
//! Quote acquisition and enrichment pipeline:
//! - Quote Source Adapter with alternate-provider fallback
//! - Enrichment Adapter (portrait + biography, guaranteed fallbacks)
//! - Enrichment Orchestrator (bounded concurrent join, two delivery modes)
//! - Favorites Store (deduplicated, order-preserving, persisted wholesale)
//! - Fetch session with stale-result discard

pub mod favorites;
pub mod models;
pub mod services;
pub mod session;

pub use favorites::FavoritesStore;
pub use models::{BiographyLink, Category, Quote, RawQuote};
pub use services::{Enriched, Enricher, QuoteSourceClient};
pub use session::QuoteSession;
