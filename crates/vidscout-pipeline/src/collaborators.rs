//! Seams to the external systems the pipelines depend on.

use std::future::Future;

use vidscout_core::{RecentVideo, VideoCandidate, VideoStats};

use crate::annotation::AnnotationRequest;
use crate::error::{AnnotationError, SourceError};

/// Fetches candidate videos by search or by trending chart.
///
/// `short_form_only` is a hint the backend may use to pre-filter. The
/// pipeline still drops anything longer than the short-form limit itself.
pub trait VideoSource: Send + Sync {
    fn search(
        &self,
        query: &str,
        limit: u32,
        short_form_only: bool,
    ) -> impl Future<Output = Result<Vec<VideoCandidate>, SourceError>> + Send;

    fn trending(
        &self,
        region: &str,
        limit: u32,
        short_form_only: bool,
    ) -> impl Future<Output = Result<Vec<VideoCandidate>, SourceError>> + Send;
}

/// Produces a raw annotation payload for one video.
///
/// The payload is expected, not guaranteed, to be a JSON object with
/// `summary`, `relevance` and `why`. See [`parse_annotation`](crate::parse_annotation).
pub trait AnnotationService: Send + Sync {
    fn annotate(
        &self,
        request: &AnnotationRequest,
    ) -> impl Future<Output = Result<String, AnnotationError>> + Send;
}

/// Supplies recently published videos and their engagement counters.
pub trait TrendSource: Send + Sync {
    fn recent(
        &self,
        query: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<RecentVideo>, SourceError>> + Send;

    fn stats(&self, video_id: &str) -> impl Future<Output = Result<VideoStats, SourceError>> + Send;
}
