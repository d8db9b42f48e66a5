//! Trend detection: fetch recent uploads, attach stats, rank by trend score.

use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use vidscout_core::{rank_by_trend, AppConfig, TrendRecord, VideoStats};

use crate::collaborators::TrendSource;
use crate::error::{PipelineError, SourceError};

/// Batch size and per-call limit for trend detection.
#[derive(Debug, Clone)]
pub struct TrendOptions {
    /// Number of recent videos to score.
    pub limit: u32,
    /// Upper bound on one stats call.
    pub stats_timeout: Duration,
}

impl Default for TrendOptions {
    fn default() -> Self {
        Self {
            limit: 10,
            stats_timeout: Duration::from_secs(10),
        }
    }
}

impl TrendOptions {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            limit: config.trend_max_results,
            stats_timeout: config.stats_timeout(),
        }
    }
}

/// Score recent videos for `query` by views per hour since publication.
///
/// Stats for every video are fetched concurrently, each call bounded by
/// `options.stats_timeout`. A video whose stats call fails or times out is
/// kept with zero stats, which puts it at the bottom. `now` is the reference
/// instant for the trend score.
///
/// # Errors
///
/// Returns [`PipelineError::Source`] if the list of recent videos cannot be
/// fetched.
pub async fn detect_trends<S>(
    source: &S,
    query: &str,
    options: &TrendOptions,
    now: DateTime<Utc>,
) -> Result<Vec<TrendRecord>, PipelineError>
where
    S: TrendSource,
{
    let videos = source.recent(query, options.limit).await?;
    if videos.is_empty() {
        tracing::info!(query, "no recent videos to score");
        return Ok(Vec::new());
    }

    let stats = join_all(
        videos
            .iter()
            .map(|v| fetch_stats(source, &v.id, options.stats_timeout)),
    )
    .await;

    let records: Vec<TrendRecord> = videos
        .into_iter()
        .zip(stats)
        .map(|(video, stats)| {
            let stats = stats.unwrap_or_else(|e| {
                tracing::warn!(
                    video_id = %video.id,
                    error = %e,
                    "stats fetch failed, scoring with zero stats"
                );
                VideoStats::default()
            });
            TrendRecord::new(video, stats, now)
        })
        .collect();

    tracing::info!(query, count = records.len(), "trend scoring complete");
    Ok(rank_by_trend(records))
}

async fn fetch_stats<S>(
    source: &S,
    video_id: &str,
    timeout: Duration,
) -> Result<VideoStats, SourceError>
where
    S: TrendSource,
{
    tokio::time::timeout(timeout, source.stats(video_id))
        .await
        .map_err(|_| SourceError::timeout(timeout))?
}
