//! Core data model and pure ranking logic for vidscout.
//!
//! Everything here is synchronous and free of network I/O: duration parsing,
//! trend scoring, relevance ranking, query intent classification, display
//! formatting and env-driven configuration.

pub mod app_config;
pub mod config;
pub mod display;
pub mod duration;
pub mod intent;
pub mod rank;
pub mod trend;
pub mod video;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use display::{human_count, human_duration};
pub use duration::parse_duration;
pub use intent::QueryIntent;
pub use rank::{rank, rank_by_trend};
pub use trend::{trend_score, RecentVideo, TrendRecord, VideoStats};
pub use video::{
    filter_short_form, truncate_chars, EnrichedItem, EnrichmentResult, RawVideo, VideoCandidate,
    FALLBACK_SUMMARY, MAX_JUSTIFICATION_CHARS, MAX_SUMMARY_CHARS, SHORT_FORM_MAX_SECS,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
