//! Upstream service clients and the enrichment orchestrator

pub mod enrichment;
pub mod image_search;
pub mod quote_source;
pub mod wikipedia_client;

pub use enrichment::{Enriched, Enricher};
pub use quote_source::QuoteSourceClient;
