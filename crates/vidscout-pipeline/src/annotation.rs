//! Annotation requests and defensive parsing of annotator replies.

use serde_json::Value;
use vidscout_core::{truncate_chars, EnrichmentResult, VideoCandidate};

/// Longest description forwarded to the annotator, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 1000;

/// Everything the annotator sees about one video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRequest {
    pub video_id: String,
    pub title: String,
    pub channel: String,
    /// Description cut to [`MAX_DESCRIPTION_CHARS`].
    pub description: String,
    /// The user's query text.
    pub context: String,
}

impl AnnotationRequest {
    #[must_use]
    pub fn from_candidate(candidate: &VideoCandidate, context: &str) -> Self {
        Self {
            video_id: candidate.id.clone(),
            title: candidate.title.clone(),
            channel: candidate.channel.clone(),
            description: truncate_chars(&candidate.description, MAX_DESCRIPTION_CHARS),
            context: context.to_string(),
        }
    }

    /// Instruction text for a chat-style model asking for a strict JSON reply.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!(
            "You are ranking YouTube results for a user query.\n\n\
             User query: {context}\n\n\
             Video:\n\
             - Title: {title}\n\
             - Channel: {channel}\n\
             - Description (truncated): {description}\n\n\
             Return a short result in STRICT JSON with keys:\n\
             - \"summary\": one crisp sentence describing the video (max 28 words).\n\
             - \"relevance\": integer 0-100 for how well this matches the query.\n\
             - \"why\": a short clause on why it matches (max 18 words).\n",
            context = self.context,
            title = self.title,
            channel = self.channel,
            description = self.description,
        )
    }
}

/// Turn an annotator reply into an [`EnrichmentResult`]. Never fails.
///
/// A JSON object reply supplies `summary`, `relevance` and `why`. Missing or
/// non-string text fields become empty. Relevance accepts integers, floats
/// (truncated), numeric strings and booleans; anything else is 0. A reply
/// that is not a JSON object becomes the summary verbatim (trimmed) with
/// relevance 0.
#[must_use]
pub fn parse_annotation(raw: &str) -> EnrichmentResult {
    let trimmed = raw.trim();
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(fields)) => EnrichmentResult::new(
            text_field(fields.get("summary")),
            relevance_field(fields.get("relevance")),
            text_field(fields.get("why")),
        ),
        _ => EnrichmentResult::new(trimmed, 0, ""),
    }
}

fn text_field(value: Option<&Value>) -> &str {
    value.and_then(Value::as_str).unwrap_or("")
}

// Float casts saturate, which the clamp in `EnrichmentResult::new` relies on.
#[allow(clippy::cast_possible_truncation)]
fn relevance_field(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse::<i64>().unwrap_or(0),
        Some(Value::Bool(b)) => i64::from(*b),
        _ => 0,
    }
}
