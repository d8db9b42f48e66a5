use std::time::Duration;

use thiserror::Error;

/// Failure of a single annotation call.
///
/// These never leave the enrichment stage: the affected video gets the
/// fallback result instead.
#[derive(Debug, Error)]
pub enum AnnotationError {
    /// The annotator could not be reached or dropped the connection.
    #[error("annotation transport error: {0}")]
    Transport(String),

    #[error("annotation service returned HTTP {status}")]
    UnexpectedStatus { status: u16 },

    #[error("annotation timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u128 },
}

impl AnnotationError {
    pub(crate) fn timeout(after: Duration) -> Self {
        Self::Timeout {
            timeout_ms: after.as_millis(),
        }
    }

    /// Transport failures and 5xx statuses may succeed on a later attempt.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::UnexpectedStatus { status } => (500..600).contains(status),
            Self::Timeout { .. } => false,
        }
    }
}

/// Failure reported by a [`VideoSource`](crate::VideoSource) or
/// [`TrendSource`](crate::TrendSource).
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("video source transport error: {0}")]
    Transport(String),

    #[error("video source returned HTTP {status}")]
    UnexpectedStatus { status: u16 },

    #[error("not found: {what}")]
    NotFound { what: String },

    #[error("video source timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u128 },
}

impl SourceError {
    pub(crate) fn timeout(after: Duration) -> Self {
        Self::Timeout {
            timeout_ms: after.as_millis(),
        }
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The source returned nothing usable, so enrichment never ran.
    #[error("no videos found for query \"{query}\"")]
    NoResults { query: String },
}
