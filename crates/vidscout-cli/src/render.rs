//! Plain-text rendering of pipeline output.

use vidscout_core::{human_count, human_duration, EnrichedItem, QueryIntent, TrendRecord};
use vidscout_pipeline::QueryResults;

pub(crate) fn acknowledgement(intent: QueryIntent) -> String {
    format!(
        "Got it, pulling videos{}{}...",
        if intent.short_form { " (Shorts)" } else { "" },
        if intent.trending { " and trends" } else { "" },
    )
}

fn stats_line(item: &EnrichedItem) -> String {
    format!(
        "views {} | likes {} | {} | {}% relevant",
        human_count(item.candidate.views),
        human_count(item.candidate.likes),
        human_duration(item.candidate.duration_secs),
        item.relevance(),
    )
}

pub(crate) fn query_results(results: &QueryResults) -> String {
    let mut lines = vec![format!("## {}", results.header())];

    if let Some(best) = results.best_pick() {
        lines.push(String::new());
        lines.push("Best pick".to_string());
        lines.push(format!("  {}  <{}>", best.candidate.title, best.candidate.link));
        lines.push(format!("  {}", best.candidate.channel));
        lines.push(format!("  {}", stats_line(best)));
        lines.push(format!("  {}", best.enrichment.summary()));
        if !best.enrichment.why().is_empty() {
            lines.push(format!("  Why: {}", best.enrichment.why()));
        }
    }

    lines.push(String::new());
    lines.push("All results".to_string());
    for (rank, item) in results.items.iter().enumerate() {
        lines.push(format!(
            "{:>2}. {} ({})  <{}>",
            rank + 1,
            item.candidate.title,
            item.candidate.channel,
            item.candidate.link
        ));
        lines.push(format!("    {}", stats_line(item)));
        if !item.enrichment.summary().is_empty() {
            lines.push(format!("    {}", item.enrichment.summary()));
        }
    }

    let degraded = results.degraded_count();
    if degraded > 0 {
        lines.push(String::new());
        lines.push(format!(
            "{degraded} of {} summaries unavailable",
            results.items.len()
        ));
    }

    lines.join("\n")
}

pub(crate) fn trend_records(records: &[TrendRecord]) -> String {
    if records.is_empty() {
        return "No recent videos found.".to_string();
    }
    records
        .iter()
        .enumerate()
        .map(|(rank, r)| {
            format!(
                "{:>2}. {} | trend score {:.2} | views {} | likes {} | comments {}",
                rank + 1,
                r.title,
                r.trend_score,
                human_count(Some(r.views)),
                human_count(Some(r.likes)),
                human_count(Some(r.comments)),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
