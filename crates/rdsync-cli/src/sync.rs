//! Day-by-day driver loop: fetch, export, paginate, advance.

use anyhow::Context;

use rdsync_client::DealsClient;
use rdsync_core::AppConfig;
use rdsync_export::{ExportOutcome, Exporter};

/// Aggregated counters for one sync run, logged at completion.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SyncTotals {
    /// Days iterated, whether or not they produced data.
    pub days: u32,
    /// Days whose pagination stopped because the fetch failed (after retries)
    /// rather than because the data ran out. Kept separate so operators can
    /// tell a dead endpoint from a quiet day.
    pub failed_days: u32,
    pub files_written: u32,
    pub records: u64,
}

/// Runs the full fetch-and-export loop over the configured date range.
///
/// Iterates the closed `[start_date, end_date]` interval one day at a time,
/// strictly sequentially. Per day, pages are fetched from 1 upward until one
/// of three stops: the fetch fails after its retry budget, the page extracts
/// no records, or the page is shorter than `per_page`. The record count is
/// the pagination authority; the provider's `has_more` flag is advisory and
/// only logged when it disagrees.
///
/// A failed or empty day never aborts the run, it just advances the date.
/// Export errors are fatal and propagate immediately, since continuing after
/// a failed write would silently lose data.
///
/// # Errors
///
/// Returns any [`rdsync_export::ExportError`] raised while writing a page.
pub async fn run_sync(
    config: &AppConfig,
    client: &DealsClient,
    exporter: &Exporter,
) -> anyhow::Result<SyncTotals> {
    let mut totals = SyncTotals::default();
    let mut current = config.start_date;

    while current <= config.end_date {
        let mut page = 1u32;

        loop {
            let deals = match client.fetch_deals(current, page).await {
                Ok(deals) => deals,
                Err(err) => {
                    // Conflated with "no data" by design; the distinct message
                    // and the failed_days counter keep the cases tellable apart.
                    tracing::warn!(
                        date = %current,
                        page,
                        error = %err,
                        "fetch failed after retries, stopping pagination for this day"
                    );
                    totals.failed_days += 1;
                    break;
                }
            };

            let count = deals.record_count();
            match exporter.export(&deals, current, page)? {
                ExportOutcome::SkippedEmpty => {
                    tracing::info!(
                        date = %current,
                        page,
                        "empty page, stopping pagination for this day"
                    );
                    break;
                }
                ExportOutcome::Written(path) => {
                    tracing::info!(
                        date = %current,
                        page,
                        records = count,
                        path = %path.display(),
                        "page exported"
                    );
                    totals.files_written += 1;
                    totals.records += count as u64;
                }
            }

            if count < config.per_page as usize {
                if deals.has_more_hint() == Some(true) {
                    tracing::debug!(
                        date = %current,
                        page,
                        records = count,
                        "provider has_more flag disagrees with short page, trusting the count"
                    );
                }
                tracing::info!(date = %current, pages = page, "last page reached for this day");
                break;
            }

            page += 1;
        }

        totals.days += 1;
        current = current
            .succ_opt()
            .with_context(|| format!("calendar overflow advancing past {current}"))?;
    }

    Ok(totals)
}

#[cfg(test)]
#[path = "sync_test.rs"]
mod tests;
