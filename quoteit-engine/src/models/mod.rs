//! Data model for the quote pipeline

pub mod category;
pub mod quote;

pub use category::Category;
pub use quote::{BiographyLink, Quote, RawQuote};
