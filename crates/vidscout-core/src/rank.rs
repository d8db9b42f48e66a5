//! Stable descending sorts for enriched items and trend records.

use crate::trend::TrendRecord;
use crate::video::EnrichedItem;

/// Sort by relevance, highest first. Ties keep their input order.
///
/// The head of the returned list is the best pick.
#[must_use]
pub fn rank(mut items: Vec<EnrichedItem>) -> Vec<EnrichedItem> {
    items.sort_by(|a, b| b.relevance().cmp(&a.relevance()));
    items
}

/// Sort by trend score, highest first. Ties keep their input order.
#[must_use]
pub fn rank_by_trend(mut records: Vec<TrendRecord>) -> Vec<TrendRecord> {
    records.sort_by(|a, b| b.trend_score.total_cmp(&a.trend_score));
    records
}
