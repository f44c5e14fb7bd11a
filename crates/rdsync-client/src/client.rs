//! HTTP client for the RD Station CRM deals endpoint.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::{Client, Url};

use crate::error::ClientError;
use crate::retry::retry_fixed_delay;
use crate::types::DealsPage;
use crate::window::RequestWindow;

/// Client for the CRM deals endpoint.
///
/// Issues one GET per (date, page) with the token, day window, and pagination
/// parameters in the query string, and retries each request on a fixed delay
/// up to the configured attempt budget. Transport errors, non-2xx statuses,
/// and 2xx responses with unparseable bodies are all retried identically;
/// the caller sees only the final error once the budget is spent.
pub struct DealsClient {
    client: Client,
    base_url: Url,
    token: String,
    per_page: u32,
    retry_attempts: u32,
    retry_delay: Duration,
}

impl DealsClient {
    /// Creates a `DealsClient` with configured timeout and retry policy.
    ///
    /// `retry_attempts` is the total number of attempts per request (clamped
    /// to at least 1); `retry_delay_secs` is the fixed sleep between attempts.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if `base_url` does not parse,
    /// or [`ClientError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn new(
        base_url: &str,
        token: &str,
        timeout_secs: u64,
        per_page: u32,
        retry_attempts: u32,
        retry_delay_secs: u64,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let base_url = Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            token: token.to_owned(),
            per_page,
            retry_attempts,
            retry_delay: Duration::from_secs(retry_delay_secs),
        })
    }

    /// Fetches one page of deals created on `date`, with automatic retry.
    ///
    /// A success is any 2xx response whose body decodes as JSON; the decoded
    /// body is returned as-is in a [`DealsPage`]. An `Err` after the attempt
    /// budget means "no more data for this (date, page)" to the driver loop,
    /// which cannot distinguish a dead endpoint from a legitimately missing
    /// page. The logs carry that distinction instead.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] — network or timeout failure after all attempts.
    /// - [`ClientError::UnexpectedStatus`] — non-2xx status after all attempts.
    /// - [`ClientError::Deserialize`] — 2xx body that is not valid JSON after
    ///   all attempts.
    pub async fn fetch_deals(&self, date: NaiveDate, page: u32) -> Result<DealsPage, ClientError> {
        let window = RequestWindow::for_day(date);
        let url = self.request_url(&window, page);

        retry_fixed_delay(self.retry_attempts, self.retry_delay, || {
            let url = url.clone();
            async move {
                let response = self
                    .client
                    .get(url)
                    .header(reqwest::header::ACCEPT, "application/json")
                    .send()
                    .await?;

                let status = response.status();
                if !status.is_success() {
                    return Err(ClientError::UnexpectedStatus {
                        status: status.as_u16(),
                        date,
                        page,
                    });
                }

                let body = response.text().await?;
                let decoded =
                    serde_json::from_str::<serde_json::Value>(&body).map_err(|e| {
                        ClientError::Deserialize {
                            date,
                            page,
                            source: e,
                        }
                    })?;

                let deals = DealsPage::new(decoded);
                tracing::info!(
                    date = %date,
                    page,
                    records = deals.record_count(),
                    "deals page fetched"
                );
                Ok(deals)
            }
        })
        .await
    }

    /// Builds the request URL for one (window, page) pair. The token rides in
    /// the query string, so this URL is never logged or embedded in errors.
    fn request_url(&self, window: &RequestWindow, page: u32) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("token", &self.token)
            .append_pair("created_at_period", "true")
            .append_pair("start_date", &window.start_param())
            .append_pair("end_date", &window.end_param())
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &self.per_page.to_string());
        url
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
