//! # Quoteit Common Library
//!
//! Shared code for the quoteit pipeline:
//! - Error types
//! - Configuration loading
//! - Slug normalization for fallback links

pub mod config;
pub mod error;
pub mod slug;

pub use config::{Config, EnrichMode};
pub use error::{Error, Result};
