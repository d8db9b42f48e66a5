//! Keyword classification of free-text queries.
//!
//! Matching is a plain case-insensitive substring test. There is no
//! tokenization and no negation handling: "no shorts please" still asks for
//! short-form content.

use serde::Serialize;

/// What a user query asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QueryIntent {
    /// Fetch the trending chart instead of running a search.
    pub trending: bool,
    /// Keep only short-form videos.
    pub short_form: bool,
}

impl QueryIntent {
    #[must_use]
    pub fn classify(text: &str) -> Self {
        Self {
            trending: wants_trending(text),
            short_form: wants_short_form(text),
        }
    }
}

/// `true` if the text contains "trend" in any case ("trending" included).
#[must_use]
pub fn wants_trending(text: &str) -> bool {
    text.to_lowercase().contains("trend")
}

/// `true` if the text contains "short" in any case ("shorts" included).
#[must_use]
pub fn wants_short_form(text: &str) -> bool {
    text.to_lowercase().contains("short")
}
