//! Recorded collaborator responses loaded from a catalog file.
//!
//! A catalog stands in for the live video and annotation backends: it holds
//! the raw search and trending listings, recorded annotator payloads keyed
//! by video id, and recent uploads with their stats.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use vidscout_core::{RawVideo, RecentVideo, VideoCandidate, VideoStats};
use vidscout_pipeline::{
    AnnotationError, AnnotationRequest, AnnotationService, SourceError, TrendSource, VideoSource,
};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Catalog {
    #[serde(default)]
    pub search: Vec<RawVideo>,
    #[serde(default)]
    pub trending: Vec<RawVideo>,
    /// Raw annotator payloads keyed by video id.
    #[serde(default)]
    pub annotations: HashMap<String, String>,
    #[serde(default)]
    pub recent: Vec<RecentVideo>,
    #[serde(default)]
    pub stats: HashMap<String, VideoStats>,
}

/// Read and parse a catalog. YAML is accepted, and so is JSON.
pub(crate) fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    parse_catalog(&content).with_context(|| format!("failed to parse catalog {}", path.display()))
}

fn parse_catalog(content: &str) -> Result<Catalog, serde_yaml::Error> {
    serde_yaml::from_str(content)
}

/// Serves a [`Catalog`] through the pipeline's collaborator traits.
pub(crate) struct Replay {
    catalog: Catalog,
}

impl Replay {
    pub(crate) fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    fn listing(videos: &[RawVideo], limit: u32) -> Vec<VideoCandidate> {
        videos
            .iter()
            .take(limit as usize)
            .cloned()
            .map(VideoCandidate::from)
            .collect()
    }
}

impl VideoSource for Replay {
    async fn search(
        &self,
        query: &str,
        limit: u32,
        _short_form_only: bool,
    ) -> Result<Vec<VideoCandidate>, SourceError> {
        tracing::debug!(query, limit, "replaying search listing");
        Ok(Self::listing(&self.catalog.search, limit))
    }

    async fn trending(
        &self,
        region: &str,
        limit: u32,
        _short_form_only: bool,
    ) -> Result<Vec<VideoCandidate>, SourceError> {
        tracing::debug!(region, limit, "replaying trending listing");
        Ok(Self::listing(&self.catalog.trending, limit))
    }
}

impl AnnotationService for Replay {
    async fn annotate(&self, request: &AnnotationRequest) -> Result<String, AnnotationError> {
        self.catalog
            .annotations
            .get(&request.video_id)
            .cloned()
            .ok_or_else(|| {
                AnnotationError::Transport(format!(
                    "no recorded annotation for {}",
                    request.video_id
                ))
            })
    }
}

impl TrendSource for Replay {
    async fn recent(&self, query: &str, limit: u32) -> Result<Vec<RecentVideo>, SourceError> {
        tracing::debug!(query, limit, "replaying recent uploads");
        Ok(self
            .catalog
            .recent
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn stats(&self, video_id: &str) -> Result<VideoStats, SourceError> {
        self.catalog
            .stats
            .get(video_id)
            .copied()
            .ok_or_else(|| SourceError::NotFound {
                what: format!("stats for {video_id}"),
            })
    }
}
