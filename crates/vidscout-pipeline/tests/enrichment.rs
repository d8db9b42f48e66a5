mod common;

use std::time::Duration;

use common::{candidate, payload, Reply, ScriptedAnnotator};
use vidscout_core::FALLBACK_SUMMARY;
use vidscout_pipeline::{enrich, EnrichmentConfig};

fn config() -> EnrichmentConfig {
    EnrichmentConfig {
        timeout: Duration::from_secs(5),
        max_retries: 0,
        retry_backoff_ms: 0,
    }
}

#[tokio::test]
async fn partial_failures_keep_every_item_in_input_order() {
    let annotator = ScriptedAnnotator::new([
        ("a", payload("alpha", 70, "matches")),
        ("b", Reply::Transport),
        ("c", payload("gamma", 40, "partly")),
        ("d", Reply::Status(500)),
        ("e", payload("epsilon", 150, "very")),
    ]);
    let input: Vec<_> = ["a", "b", "c", "d", "e"]
        .iter()
        .map(|id| candidate(id, 30))
        .collect();

    let out = enrich(&annotator, input, "query", &config()).await;

    let ids: Vec<&str> = out.iter().map(|i| i.candidate.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);

    for failed in [&out[1], &out[3]] {
        assert!(!failed.annotated);
        assert_eq!(failed.relevance(), 0);
        assert_eq!(failed.enrichment.summary(), FALLBACK_SUMMARY);
        assert_eq!(failed.enrichment.why(), "");
    }

    assert!(out[0].annotated);
    assert_eq!(out[0].enrichment.summary(), "alpha");
    assert_eq!(out[0].relevance(), 70);
    assert_eq!(out[2].relevance(), 40);
    assert_eq!(out[4].relevance(), 100, "relevance is clamped");
}

#[tokio::test]
async fn all_failures_still_yield_every_item() {
    let annotator = ScriptedAnnotator::default();
    let input: Vec<_> = (0..4).map(|i| candidate(&format!("v{i}"), 10)).collect();

    let out = enrich(&annotator, input, "anything", &config()).await;

    assert_eq!(out.len(), 4);
    assert!(out.iter().all(|i| !i.annotated && i.relevance() == 0));
}

#[tokio::test]
async fn empty_batch_makes_no_calls() {
    let annotator = ScriptedAnnotator::default();
    let out = enrich(&annotator, Vec::new(), "q", &config()).await;
    assert!(out.is_empty());
    assert!(annotator.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_payload_becomes_summary() {
    let annotator = ScriptedAnnotator::new([(
        "a",
        Reply::Payload("This is a tutorial about sourdough.".to_string()),
    )]);
    let out = enrich(&annotator, vec![candidate("a", 10)], "bread", &config()).await;
    assert!(out[0].annotated);
    assert_eq!(out[0].enrichment.summary(), "This is a tutorial about sourdough.");
    assert_eq!(out[0].relevance(), 0);
}

#[tokio::test]
async fn long_fields_are_truncated() {
    let annotator =
        ScriptedAnnotator::new([("a", payload(&"s".repeat(300), 55, &"w".repeat(200)))]);
    let out = enrich(&annotator, vec![candidate("a", 10)], "q", &config()).await;
    assert_eq!(out[0].enrichment.summary().chars().count(), 220);
    assert_eq!(out[0].enrichment.why().chars().count(), 120);
}

#[tokio::test]
async fn requests_carry_query_and_truncated_description() {
    let annotator = ScriptedAnnotator::new([("a", payload("s", 1, ""))]);
    let mut c = candidate("a", 10);
    c.description = "x".repeat(2500);

    enrich(&annotator, vec![c], "best RTX 4070 build", &config()).await;

    let requests = annotator.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].context, "best RTX 4070 build");
    assert_eq!(requests[0].title, "title a");
    assert_eq!(requests[0].channel, "channel a");
    assert_eq!(requests[0].description.chars().count(), 1000);
}

#[tokio::test(start_paused = true)]
async fn calls_run_concurrently() {
    let delay = Duration::from_millis(100);
    let ids = ["a", "b", "c", "d", "e", "f"];
    let annotator = ScriptedAnnotator::new(
        ids.iter()
            .map(|id| (*id, Reply::Delayed(delay, r#"{"relevance": 10}"#.to_string()))),
    );
    let input: Vec<_> = ids.iter().map(|id| candidate(id, 10)).collect();

    let started = tokio::time::Instant::now();
    let out = enrich(&annotator, input, "q", &config()).await;
    let elapsed = started.elapsed();

    assert_eq!(out.len(), ids.len());
    assert!(out.iter().all(|i| i.annotated));
    assert!(
        elapsed < delay * 2,
        "batch should take about one call's latency, took {elapsed:?}"
    );
}

#[tokio::test(start_paused = true)]
async fn slow_call_times_out_without_affecting_others() {
    let annotator = ScriptedAnnotator::new([
        ("fast", payload("quick", 80, "")),
        (
            "slow",
            Reply::Delayed(Duration::from_secs(60), r#"{"relevance": 99}"#.to_string()),
        ),
    ]);
    let cfg = EnrichmentConfig {
        timeout: Duration::from_secs(2),
        ..config()
    };

    let started = tokio::time::Instant::now();
    let out = enrich(
        &annotator,
        vec![candidate("fast", 10), candidate("slow", 10)],
        "q",
        &cfg,
    )
    .await;

    assert!(started.elapsed() < Duration::from_secs(3));
    assert!(out[0].annotated);
    assert_eq!(out[0].relevance(), 80);
    assert!(!out[1].annotated);
    assert_eq!(out[1].enrichment.summary(), FALLBACK_SUMMARY);
}

#[tokio::test]
async fn transient_failures_are_retried_when_enabled() {
    let annotator = ScriptedAnnotator::new([(
        "a",
        Reply::FlakyThen(2, r#"{"relevance": 66}"#.to_string()),
    )]);
    let cfg = EnrichmentConfig {
        max_retries: 2,
        ..config()
    };

    let out = enrich(&annotator, vec![candidate("a", 10)], "q", &cfg).await;

    assert!(out[0].annotated);
    assert_eq!(out[0].relevance(), 66);
    assert_eq!(annotator.attempts("a"), 3);
}

#[tokio::test]
async fn no_retries_by_default() {
    let annotator = ScriptedAnnotator::new([(
        "a",
        Reply::FlakyThen(1, r#"{"relevance": 66}"#.to_string()),
    )]);

    let out = enrich(&annotator, vec![candidate("a", 10)], "q", &config()).await;

    assert!(!out[0].annotated);
    assert_eq!(annotator.attempts("a"), 1);
}
