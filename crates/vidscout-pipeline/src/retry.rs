//! Retry with exponential back-off and jitter for annotation calls.
//!
//! Only transient failures are retried (see [`AnnotationError::is_transient`]).
//! Timeouts are applied by the caller around the whole retry loop.

use std::future::Future;
use std::time::Duration;

use crate::error::AnnotationError;

const MAX_DELAY_MS: u64 = 10_000;

/// Runs `operation` with up to `max_retries` additional attempts on transient errors.
///
/// The delay before attempt `n + 1` is `backoff_base_ms × 2^(n-1)` with ±25 %
/// jitter, capped at 10 s.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, AnnotationError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AnnotationError>>,
{
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !err.is_transient() || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let computed = backoff_base_ms.saturating_mul(1u64 << (attempt - 1).min(10));
                let capped = computed.min(MAX_DELAY_MS);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
                tracing::debug!(
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "transient annotation error, retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}
