//! Fixed-delay retry for deals page requests.
//!
//! Every fetch failure is treated as transient: transport errors, non-2xx
//! statuses, and unparseable 2xx bodies all consume one attempt. The caller
//! gets the last error only after the full attempt budget is spent.

use std::future::Future;
use std::time::Duration;

use crate::error::ClientError;

/// Executes `operation` up to `attempts` times total, sleeping `delay`
/// between attempts (never after the last one).
///
/// `attempts` is clamped to at least 1 so a zero config can't skip the
/// request entirely. Each failed attempt short of the last logs a warning;
/// exhaustion logs at error level before the final error is returned.
pub(crate) async fn retry_fixed_delay<T, F, Fut>(
    attempts: u32,
    delay: Duration,
    mut operation: F,
) -> Result<T, ClientError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    let attempts = attempts.max(1);
    let mut attempt = 1u32;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < attempts => {
                tracing::warn!(
                    attempt,
                    attempts,
                    delay_secs = delay.as_secs(),
                    error = %err,
                    "deals request failed, retrying after delay"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => {
                tracing::error!(
                    attempts,
                    error = %err,
                    "deals request failed, attempt budget exhausted"
                );
                return Err(err);
            }
        }
    }
}
