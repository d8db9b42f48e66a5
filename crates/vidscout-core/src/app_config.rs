use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Region code used for trending charts, e.g. `"US"`.
    pub region: String,
    /// Number of videos requested per query.
    pub max_results: u32,
    pub annotation_timeout_secs: u64,
    /// Extra attempts after a transient annotation failure.
    pub annotation_max_retries: u32,
    pub annotation_retry_backoff_ms: u64,
    /// Topic used by trend detection when none is given.
    pub trend_query: String,
    pub trend_max_results: u32,
    pub stats_timeout_secs: u64,
}

impl AppConfig {
    #[must_use]
    pub fn annotation_timeout(&self) -> Duration {
        Duration::from_secs(self.annotation_timeout_secs)
    }

    #[must_use]
    pub fn stats_timeout(&self) -> Duration {
        Duration::from_secs(self.stats_timeout_secs)
    }
}
