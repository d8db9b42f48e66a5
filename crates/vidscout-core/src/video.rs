use serde::{Deserialize, Serialize};

use crate::duration::parse_duration;

/// Longest summary kept on an [`EnrichmentResult`], in characters.
pub const MAX_SUMMARY_CHARS: usize = 220;
/// Longest justification kept on an [`EnrichmentResult`], in characters.
pub const MAX_JUSTIFICATION_CHARS: usize = 120;
/// Placeholder summary for videos whose annotation failed.
pub const FALLBACK_SUMMARY: &str = "Summary unavailable.";
/// Videos longer than this are dropped when only short-form content is wanted.
pub const SHORT_FORM_MAX_SECS: u64 = 60;

const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// A video record as a backend hands it over, before normalization.
///
/// Counts arrive as strings (the Data API encodes 64-bit integers that way)
/// and the duration is an ISO-8601 code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawVideo {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub view_count: Option<String>,
    #[serde(default)]
    pub like_count: Option<String>,
    /// ISO-8601 duration code, e.g. `"PT4M13S"`.
    #[serde(default)]
    pub duration: Option<String>,
}

/// A fetched video, normalized and ready for enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoCandidate {
    pub id: String,
    pub title: String,
    pub channel: String,
    pub description: String,
    pub thumbnail: Option<String>,
    /// `None` when the backend omitted the count or sent something unparseable.
    pub views: Option<u64>,
    pub likes: Option<u64>,
    pub duration_secs: u64,
    /// Canonical watch page, e.g. `"https://www.youtube.com/watch?v=abc123"`.
    pub link: String,
}

impl VideoCandidate {
    /// Canonical watch link for a video id.
    #[must_use]
    pub fn watch_link(id: &str) -> String {
        format!("{WATCH_URL_PREFIX}{id}")
    }

    /// Returns `true` if the video is short enough to count as short-form.
    #[must_use]
    pub fn is_short_form(&self) -> bool {
        self.duration_secs <= SHORT_FORM_MAX_SECS
    }
}

impl From<RawVideo> for VideoCandidate {
    fn from(raw: RawVideo) -> Self {
        let link = Self::watch_link(&raw.id);
        Self {
            title: raw.title.unwrap_or_else(|| "Untitled".to_string()),
            channel: raw.channel.unwrap_or_else(|| "Unknown".to_string()),
            description: raw.description.unwrap_or_default(),
            thumbnail: raw.thumbnail.filter(|t| !t.trim().is_empty()),
            views: parse_count(raw.view_count.as_deref()),
            likes: parse_count(raw.like_count.as_deref()),
            duration_secs: raw.duration.as_deref().map_or(0, parse_duration),
            link,
            id: raw.id,
        }
    }
}

fn parse_count(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
}

/// Drop every candidate longer than [`SHORT_FORM_MAX_SECS`] when
/// `short_form_only` is set; otherwise return the list untouched.
#[must_use]
pub fn filter_short_form(
    candidates: Vec<VideoCandidate>,
    short_form_only: bool,
) -> Vec<VideoCandidate> {
    if !short_form_only {
        return candidates;
    }
    candidates
        .into_iter()
        .filter(VideoCandidate::is_short_form)
        .collect()
}

/// Annotation attached to one candidate.
///
/// Fields are private so the bounds hold for every instance. Relevance is
/// within `0..=100`. Summary and justification are cut to
/// [`MAX_SUMMARY_CHARS`] and [`MAX_JUSTIFICATION_CHARS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichmentResult {
    summary: String,
    relevance: u8,
    why: String,
}

impl EnrichmentResult {
    /// Build a result, clamping `relevance` and truncating both texts.
    #[must_use]
    pub fn new(summary: &str, relevance: i64, why: &str) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let relevance = relevance.clamp(0, 100) as u8;
        Self {
            summary: truncate_chars(summary, MAX_SUMMARY_CHARS),
            relevance,
            why: truncate_chars(why, MAX_JUSTIFICATION_CHARS),
        }
    }

    /// The placeholder used when annotation failed outright.
    #[must_use]
    pub fn fallback() -> Self {
        Self::new(FALLBACK_SUMMARY, 0, "")
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    #[must_use]
    pub fn relevance(&self) -> u8 {
        self.relevance
    }

    #[must_use]
    pub fn why(&self) -> &str {
        &self.why
    }
}

/// Keep at most `max` characters of `text`, never splitting a code point.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// A candidate joined with its annotation, the unit the ranker sorts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedItem {
    #[serde(flatten)]
    pub candidate: VideoCandidate,
    #[serde(flatten)]
    pub enrichment: EnrichmentResult,
    /// `false` when `enrichment` is the fallback placeholder.
    pub annotated: bool,
}

impl EnrichedItem {
    #[must_use]
    pub fn new(candidate: VideoCandidate, enrichment: EnrichmentResult) -> Self {
        Self {
            candidate,
            enrichment,
            annotated: true,
        }
    }

    #[must_use]
    pub fn degraded(candidate: VideoCandidate) -> Self {
        Self {
            candidate,
            enrichment: EnrichmentResult::fallback(),
            annotated: false,
        }
    }

    #[must_use]
    pub fn relevance(&self) -> u8 {
        self.enrichment.relevance()
    }
}
