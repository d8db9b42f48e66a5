//! Enrichment and ranking pipelines for vidscout.
//!
//! Video backends and the language-model annotator are reached only through
//! the traits in [`collaborators`]. [`run_query`] classifies a query, fetches
//! candidates, annotates every candidate concurrently and ranks the result.
//! [`detect_trends`] does the same fan-out for view statistics and ranks by
//! trend score.

pub mod annotation;
pub mod collaborators;
pub mod enrich;
pub mod error;
pub mod query;
pub mod trends;

mod retry;

pub use annotation::{parse_annotation, AnnotationRequest, MAX_DESCRIPTION_CHARS};
pub use collaborators::{AnnotationService, TrendSource, VideoSource};
pub use enrich::{enrich, EnrichmentConfig};
pub use error::{AnnotationError, PipelineError, SourceError};
pub use query::{run_query, QueryOptions, QueryResults};
pub use trends::{detect_trends, TrendOptions};
