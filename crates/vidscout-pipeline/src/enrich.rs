//! Concurrent per-video annotation with per-item failure isolation.

use std::time::Duration;

use futures::future::join_all;
use vidscout_core::{AppConfig, EnrichedItem, EnrichmentResult, VideoCandidate};

use crate::annotation::{parse_annotation, AnnotationRequest};
use crate::collaborators::AnnotationService;
use crate::error::AnnotationError;
use crate::retry::retry_with_backoff;

/// Per-call limits for the enrichment stage.
#[derive(Debug, Clone)]
pub struct EnrichmentConfig {
    /// Upper bound on one annotation call, retries included.
    pub timeout: Duration,
    pub max_retries: u32,
    pub retry_backoff_ms: u64,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_retries: 0,
            retry_backoff_ms: 500,
        }
    }
}

impl EnrichmentConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            timeout: config.annotation_timeout(),
            max_retries: config.annotation_max_retries,
            retry_backoff_ms: config.annotation_retry_backoff_ms,
        }
    }
}

/// Annotate every candidate concurrently and pair each with its result.
///
/// All calls are started together and awaited as one batch, so latency is
/// that of the slowest call. Output is index-for-index with the input. A call
/// that errors or times out degrades only its own item to
/// [`EnrichmentResult::fallback`]. Nothing is dropped and no error is returned.
pub async fn enrich<A>(
    annotator: &A,
    candidates: Vec<VideoCandidate>,
    context: &str,
    config: &EnrichmentConfig,
) -> Vec<EnrichedItem>
where
    A: AnnotationService,
{
    let outcomes = join_all(
        candidates
            .iter()
            .map(|candidate| annotate_one(annotator, candidate, context, config)),
    )
    .await;

    let mut degraded = 0usize;
    let items: Vec<EnrichedItem> = candidates
        .into_iter()
        .zip(outcomes)
        .map(|(candidate, outcome)| match outcome {
            Ok(result) => {
                tracing::debug!(
                    video_id = %candidate.id,
                    relevance = result.relevance(),
                    "annotated video"
                );
                EnrichedItem::new(candidate, result)
            }
            Err(e) => {
                degraded += 1;
                tracing::warn!(
                    video_id = %candidate.id,
                    error = %e,
                    "annotation failed, using fallback summary"
                );
                EnrichedItem::degraded(candidate)
            }
        })
        .collect();

    tracing::info!(total = items.len(), degraded, "enrichment batch complete");
    items
}

async fn annotate_one<A>(
    annotator: &A,
    candidate: &VideoCandidate,
    context: &str,
    config: &EnrichmentConfig,
) -> Result<EnrichmentResult, AnnotationError>
where
    A: AnnotationService,
{
    let request = AnnotationRequest::from_candidate(candidate, context);
    let request = &request;
    let call = retry_with_backoff(config.max_retries, config.retry_backoff_ms, move || {
        annotator.annotate(request)
    });
    let raw = tokio::time::timeout(config.timeout, call)
        .await
        .map_err(|_| AnnotationError::timeout(config.timeout))??;
    Ok(parse_annotation(&raw))
}
