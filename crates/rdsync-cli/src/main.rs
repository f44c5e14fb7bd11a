mod logging;
mod sync;

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;

use rdsync_client::DealsClient;
use rdsync_export::Exporter;

#[derive(Debug, Parser)]
#[command(name = "rdsync-cli")]
#[command(about = "Exports RD Station CRM deals to per-page JSON files")]
struct Cli {
    /// First day of the range (YYYY-MM-DD); overrides RDSYNC_START_DATE
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Last day of the range (YYYY-MM-DD); overrides RDSYNC_END_DATE
    #[arg(long)]
    end_date: Option<NaiveDate>,

    /// Directory receiving the JSON files; overrides RDSYNC_OUTPUT_DIR
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = rdsync_core::load_app_config().context("loading configuration")?;
    if let Some(start) = cli.start_date {
        config.start_date = start;
    }
    if let Some(end) = cli.end_date {
        config.end_date = end;
    }
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    anyhow::ensure!(
        config.start_date <= config.end_date,
        "start date {} is after end date {}",
        config.start_date,
        config.end_date
    );

    let _guard = logging::init(&config.log_level, &config.log_dir);
    tracing::info!(?config, "starting deals sync");

    let client = DealsClient::new(
        &config.base_url,
        &config.api_token,
        config.request_timeout_secs,
        config.per_page,
        config.retry_attempts,
        config.retry_delay_secs,
    )
    .context("building deals client")?;
    let exporter = Exporter::new(&config.output_dir);

    match sync::run_sync(&config, &client, &exporter).await {
        Ok(totals) => {
            tracing::info!(
                days = totals.days,
                failed_days = totals.failed_days,
                files_written = totals.files_written,
                records = totals.records,
                "sync complete"
            );
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = format!("{err:#}"), "sync run failed");
            Err(err)
        }
    }
}
