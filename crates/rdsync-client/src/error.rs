use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} for deals page {page} of {date}")]
    UnexpectedStatus {
        status: u16,
        date: NaiveDate,
        page: u32,
    },

    #[error("JSON deserialization error for deals page {page} of {date}: {source}")]
    Deserialize {
        date: NaiveDate,
        page: u32,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
