//! The query entry point: classify, fetch, enrich, rank.

use serde::Serialize;
use vidscout_core::{filter_short_form, rank, AppConfig, EnrichedItem, QueryIntent};

use crate::collaborators::{AnnotationService, VideoSource};
use crate::enrich::{enrich, EnrichmentConfig};
use crate::error::PipelineError;

/// Fetch and enrichment settings for [`run_query`].
#[derive(Debug, Clone)]
pub struct QueryOptions {
    /// Region code passed to [`VideoSource::trending`].
    pub region: String,
    pub max_results: u32,
    pub enrichment: EnrichmentConfig,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            region: "US".to_string(),
            max_results: 12,
            enrichment: EnrichmentConfig::default(),
        }
    }
}

impl QueryOptions {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            region: config.region.clone(),
            max_results: config.max_results,
            enrichment: EnrichmentConfig::from_app_config(config),
        }
    }
}

/// Ranked, enriched results for one query.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResults {
    pub intent: QueryIntent,
    /// Sorted by relevance, highest first.
    pub items: Vec<EnrichedItem>,
}

impl QueryResults {
    /// The highest-ranked item.
    #[must_use]
    pub fn best_pick(&self) -> Option<&EnrichedItem> {
        self.items.first()
    }

    /// Section title describing where the results came from.
    #[must_use]
    pub fn header(&self) -> &'static str {
        match (self.intent.trending, self.intent.short_form) {
            (true, true) => "Trending Shorts",
            (true, false) => "Trending",
            (false, true) => "Search results (Shorts)",
            (false, false) => "Search results",
        }
    }

    /// Number of items that fell back to the placeholder annotation.
    #[must_use]
    pub fn degraded_count(&self) -> usize {
        self.items.iter().filter(|i| !i.annotated).count()
    }
}

/// Run a free-text query end to end.
///
/// Queries mentioning "trend" read the trending chart for
/// [`QueryOptions::region`]; everything else is a search. Queries mentioning
/// "short" keep only videos of at most 60 seconds. Every fetched video is
/// annotated against the raw query text and the batch is ranked by relevance.
///
/// # Errors
///
/// - [`PipelineError::Source`] if the video source fails.
/// - [`PipelineError::NoResults`] if nothing survives fetching and filtering.
///
/// Annotation failures are never returned; they degrade single items.
pub async fn run_query<S, A>(
    source: &S,
    annotator: &A,
    options: &QueryOptions,
    raw_query: &str,
) -> Result<QueryResults, PipelineError>
where
    S: VideoSource,
    A: AnnotationService,
{
    let intent = QueryIntent::classify(raw_query);
    tracing::info!(
        query = raw_query,
        trending = intent.trending,
        short_form = intent.short_form,
        "running query"
    );

    let fetched = if intent.trending {
        source
            .trending(&options.region, options.max_results, intent.short_form)
            .await?
    } else {
        source
            .search(raw_query, options.max_results, intent.short_form)
            .await?
    };
    let fetched_count = fetched.len();
    let candidates = filter_short_form(fetched, intent.short_form);
    tracing::debug!(
        fetched = fetched_count,
        kept = candidates.len(),
        "fetched candidates"
    );

    if candidates.is_empty() {
        return Err(PipelineError::NoResults {
            query: raw_query.to_string(),
        });
    }

    let enriched = enrich(annotator, candidates, raw_query, &options.enrichment).await;
    Ok(QueryResults {
        intent,
        items: rank(enriched),
    })
}
