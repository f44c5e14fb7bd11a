use std::path::PathBuf;

use chrono::NaiveDate;

/// Runtime configuration for a sync run, loaded once at startup and shared
/// read-only by the client, the exporter, and the driver loop.
#[derive(Clone)]
pub struct AppConfig {
    pub base_url: String,
    pub api_token: String,
    pub output_dir: PathBuf,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub per_page: u32,
    pub retry_attempts: u32,
    pub retry_delay_secs: u64,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"[redacted]")
            .field("output_dir", &self.output_dir)
            .field("start_date", &self.start_date)
            .field("end_date", &self.end_date)
            .field("per_page", &self.per_page)
            .field("retry_attempts", &self.retry_attempts)
            .field("retry_delay_secs", &self.retry_delay_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("log_level", &self.log_level)
            .field("log_dir", &self.log_dir)
            .finish()
    }
}
