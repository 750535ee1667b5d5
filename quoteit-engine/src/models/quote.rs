//! Quote value objects
//!
//! A `RawQuote` is what the source adapter produces; enrichment turns it
//! into a full `Quote`. Favorite identity is the `(text, author)` pair —
//! two quotes with identical text and author are the same favorite
//! regardless of tags or enrichment results.

use serde::{Deserialize, Serialize};

/// Author name used when the upstream omits one
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Normalized quote as returned by a provider, before enrichment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuote {
    /// Quotation body; never empty
    pub text: String,
    /// Author name; `"Unknown Author"` when the source omits it
    pub author: String,
    /// Category labels; may be empty
    pub tags: Vec<String>,
}

/// Biography link for a quote's author
///
/// `exists == false` still carries a best-guess search URL constructed
/// from the slugified author name, never an absent value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiographyLink {
    /// Whether the knowledge base actually has an article for this author
    pub exists: bool,
    /// Article URL (canonical when `exists`, slug-constructed otherwise)
    pub url: String,
    /// Short biography extract, when the knowledge base provided one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extract: Option<String>,
}

/// Fully-enriched quote record handed to the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub tags: Vec<String>,
    /// Portrait image URL; always resolvable (placeholder fallback), never empty
    pub portrait_url: String,
    pub biography: BiographyLink,
}

impl Quote {
    /// Identity key for favorites deduplication
    pub fn key(&self) -> (&str, &str) {
        (&self.text, &self.author)
    }

    /// Whether two quotes are the same favorite
    pub fn same_key(&self, other: &Quote) -> bool {
        self.key() == other.key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(text: &str, author: &str, tags: &[&str]) -> Quote {
        Quote {
            text: text.to_string(),
            author: author.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            portrait_url: "https://example.com/portrait.png".to_string(),
            biography: BiographyLink {
                exists: false,
                url: "https://en.wikipedia.org/wiki/Test".to_string(),
                extract: None,
            },
        }
    }

    #[test]
    fn test_key_ignores_tags_and_enrichment() {
        let a = quote("Stay hungry.", "Steve Jobs", &["motivational"]);
        let mut b = quote("Stay hungry.", "Steve Jobs", &["success"]);
        b.portrait_url = "https://elsewhere.example/img.png".to_string();

        assert!(a.same_key(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_key_distinguishes_author() {
        let a = quote("Know thyself.", "Socrates", &[]);
        let b = quote("Know thyself.", "Plato", &[]);
        assert!(!a.same_key(&b));
    }

    #[test]
    fn test_serde_round_trip() {
        let q = quote("The obstacle is the way.", "Marcus Aurelius", &["wisdom"]);
        let json = serde_json::to_string(&q).unwrap();
        let parsed: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(q, parsed);
    }

    #[test]
    fn test_biography_extract_omitted_when_absent() {
        let link = BiographyLink {
            exists: false,
            url: "https://en.wikipedia.org/wiki/Nobody".to_string(),
            extract: None,
        };
        let json = serde_json::to_string(&link).unwrap();
        assert!(!json.contains("extract"));
    }
}
