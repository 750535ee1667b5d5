//! Quote categories
//!
//! Closed set of tags understood by the quote providers.

use quoteit_common::Error;
use std::fmt;
use std::str::FromStr;

/// Category filter for quote fetches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Motivational,
    Wisdom,
    Success,
    Inspirational,
    FamousQuotes,
}

impl Category {
    /// All valid categories, in display order
    pub const ALL: [Category; 5] = [
        Category::Motivational,
        Category::Wisdom,
        Category::Success,
        Category::Inspirational,
        Category::FamousQuotes,
    ];

    /// Wire tag sent to the quote provider
    pub fn as_tag(&self) -> &'static str {
        match self {
            Category::Motivational => "motivational",
            Category::Wisdom => "wisdom",
            Category::Success => "success",
            Category::Inspirational => "inspirational",
            Category::FamousQuotes => "famous-quotes",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Parse a wire tag; the empty string means "no filter" and is handled
    /// by callers as `None` before reaching here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "motivational" => Ok(Category::Motivational),
            "wisdom" => Ok(Category::Wisdom),
            "success" => Ok(Category::Success),
            "inspirational" => Ok(Category::Inspirational),
            "famous-quotes" => Ok(Category::FamousQuotes),
            other => Err(Error::InvalidInput(format!(
                "Unknown category '{}' (expected one of: motivational, wisdom, success, inspirational, famous-quotes)",
                other
            ))),
        }
    }
}
