//! In-memory collaborators shared by the integration suites.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use vidscout_core::{RawVideo, RecentVideo, VideoCandidate, VideoStats};
use vidscout_pipeline::{
    AnnotationError, AnnotationRequest, AnnotationService, SourceError, TrendSource, VideoSource,
};

/// How the scripted annotator answers for one video id.
#[derive(Debug, Clone)]
pub enum Reply {
    Payload(String),
    Delayed(Duration, String),
    Transport,
    Status(u16),
    /// Fail with a transport error this many times, then answer.
    FlakyThen(u32, String),
}

#[derive(Default)]
pub struct ScriptedAnnotator {
    replies: HashMap<String, Reply>,
    attempts: Mutex<HashMap<String, u32>>,
    pub requests: Mutex<Vec<AnnotationRequest>>,
}

impl ScriptedAnnotator {
    pub fn new<I>(replies: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Reply)>,
    {
        Self {
            replies: replies
                .into_iter()
                .map(|(id, r)| (id.to_string(), r))
                .collect(),
            ..Self::default()
        }
    }

    pub fn attempts(&self, id: &str) -> u32 {
        self.attempts.lock().unwrap().get(id).copied().unwrap_or(0)
    }
}

impl AnnotationService for ScriptedAnnotator {
    async fn annotate(&self, request: &AnnotationRequest) -> Result<String, AnnotationError> {
        self.requests.lock().unwrap().push(request.clone());
        let attempt = {
            let mut attempts = self.attempts.lock().unwrap();
            let n = attempts.entry(request.video_id.clone()).or_insert(0);
            *n += 1;
            *n
        };
        match self.replies.get(&request.video_id).cloned() {
            Some(Reply::Payload(p)) => Ok(p),
            Some(Reply::Delayed(d, p)) => {
                tokio::time::sleep(d).await;
                Ok(p)
            }
            Some(Reply::Status(status)) => Err(AnnotationError::UnexpectedStatus { status }),
            Some(Reply::FlakyThen(failures, p)) if attempt > failures => Ok(p),
            Some(Reply::Transport | Reply::FlakyThen(..)) | None => {
                Err(AnnotationError::Transport("connection refused".to_string()))
            }
        }
    }
}

pub fn payload(summary: &str, relevance: i64, why: &str) -> Reply {
    Reply::Payload(
        serde_json::json!({ "summary": summary, "relevance": relevance, "why": why }).to_string(),
    )
}

pub fn candidate(id: &str, duration_secs: u64) -> VideoCandidate {
    VideoCandidate {
        duration_secs,
        ..VideoCandidate::from(RawVideo {
            id: id.to_string(),
            title: Some(format!("title {id}")),
            channel: Some(format!("channel {id}")),
            description: Some(format!("description {id}")),
            ..RawVideo::default()
        })
    }
}

/// Video source that serves fixed lists and records how it was called.
#[derive(Default)]
pub struct FixedSource {
    pub search_results: Vec<VideoCandidate>,
    pub trending_results: Vec<VideoCandidate>,
    pub fail_with_status: Option<u16>,
    pub calls: Mutex<Vec<String>>,
}

impl VideoSource for FixedSource {
    async fn search(
        &self,
        query: &str,
        limit: u32,
        short_form_only: bool,
    ) -> Result<Vec<VideoCandidate>, SourceError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("search:{query}:{limit}:{short_form_only}"));
        if let Some(status) = self.fail_with_status {
            return Err(SourceError::UnexpectedStatus { status });
        }
        Ok(self.search_results.clone())
    }

    async fn trending(
        &self,
        region: &str,
        limit: u32,
        short_form_only: bool,
    ) -> Result<Vec<VideoCandidate>, SourceError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("trending:{region}:{limit}:{short_form_only}"));
        if let Some(status) = self.fail_with_status {
            return Err(SourceError::UnexpectedStatus { status });
        }
        Ok(self.trending_results.clone())
    }
}

/// Trend source backed by a recent-video list and a stats map.
#[derive(Default)]
pub struct FixedTrendSource {
    pub recent: Vec<RecentVideo>,
    pub stats: HashMap<String, VideoStats>,
    pub stats_delay: Option<Duration>,
    pub fail_recent: bool,
}

impl TrendSource for FixedTrendSource {
    async fn recent(&self, _query: &str, limit: u32) -> Result<Vec<RecentVideo>, SourceError> {
        if self.fail_recent {
            return Err(SourceError::Transport("dns failure".to_string()));
        }
        Ok(self.recent.iter().take(limit as usize).cloned().collect())
    }

    async fn stats(&self, video_id: &str) -> Result<VideoStats, SourceError> {
        if let Some(d) = self.stats_delay {
            tokio::time::sleep(d).await;
        }
        self.stats
            .get(video_id)
            .copied()
            .ok_or_else(|| SourceError::NotFound {
                what: format!("stats for {video_id}"),
            })
    }
}
