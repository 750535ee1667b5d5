//! Slug normalization for fallback Wikipedia links
//!
//! One pure function shared by every call site that needs a best-guess
//! article name from an author string: strip anything that is not a word
//! character, collapse whitespace runs to single underscores.

/// Normalize an author name into a Wikipedia-style article slug.
///
/// `"Dr. Martin Luther King, Jr."` becomes `"Dr_Martin_Luther_King_Jr"`.
/// Unicode alphanumerics are kept, so non-Latin names survive intact.
pub fn slugify(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join("_")
}
