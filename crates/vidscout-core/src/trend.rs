//! Recency-weighted popularity scoring.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// A recently published video, before its statistics are known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentVideo {
    pub id: String,
    pub title: String,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// Engagement counters for one video. Missing counters are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoStats {
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: u64,
}

/// A video with its stats and computed trend score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendRecord {
    pub id: String,
    pub title: String,
    pub published_at: DateTime<Utc>,
    pub thumbnail: Option<String>,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub trend_score: f64,
}

impl TrendRecord {
    /// Join a video with its stats and score it against `now`.
    #[must_use]
    pub fn new(video: RecentVideo, stats: VideoStats, now: DateTime<Utc>) -> Self {
        let trend_score = trend_score(stats.views, video.published_at, now);
        Self {
            id: video.id,
            title: video.title,
            published_at: video.published_at,
            thumbnail: video.thumbnail,
            views: stats.views,
            likes: stats.likes,
            comments: stats.comments,
            trend_score,
        }
    }
}

/// Views per hour since publication, rounded to two decimals.
///
/// Elapsed time is floored at one hour, so fresh uploads and timestamps in
/// the future (clock skew) are divided by exactly 1.
#[must_use]
pub fn trend_score(views: u64, published_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let elapsed_hours = (now - published_at).num_milliseconds() as f64 / MILLIS_PER_HOUR;
    let hours = elapsed_hours.max(1.0);
    #[allow(clippy::cast_precision_loss)]
    let raw = views as f64 / hours;
    (raw * 100.0).round() / 100.0
}
