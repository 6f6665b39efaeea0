//! Fetch command implementation

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use super::CliError;
use crate::export::CsvExporter;
use crate::fetcher::{HistoryClient, HistorySource};
use crate::query::{IntervalSpec, IntervalUnit, PeriodSpec, PeriodUnit};
use crate::render;

/// Market Data Exporter CLI
#[derive(Parser, Debug)]
#[command(name = "market-data-exporter")]
#[command(about = "Fetch historical market data and export it as CSV", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the data provider
    #[arg(long, global = true, default_value = HistoryClient::DEFAULT_BASE_URL)]
    pub base_url: String,
}

/// CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch history for a ticker, preview it, and optionally export CSV
    Fetch(FetchArgs),

    /// List well-known tickers
    Tickers(super::TickersCommand),
}

/// Fetch command arguments
#[derive(Parser, Debug)]
pub struct FetchArgs {
    /// Instrument ticker (e.g. AAPL)
    #[arg(long)]
    pub ticker: String,

    /// Sampling granularity amount (positive integer)
    #[arg(long)]
    pub interval_amount: Option<i64>,

    /// Sampling granularity unit: minutes, hours, or days
    #[arg(long)]
    pub interval_unit: IntervalUnit,

    /// Lookback amount (positive integer; ignored for ytd/max)
    #[arg(long)]
    pub period_amount: Option<i64>,

    /// Lookback unit: days, months, years, ytd, or max
    #[arg(long)]
    pub period_unit: PeriodUnit,

    /// Write the dataset to a CSV file after fetching
    #[arg(long, default_value_t = false)]
    pub export: bool,

    /// Directory for exported files
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Number of rows shown in the preview
    #[arg(long, default_value_t = render::DEFAULT_PREVIEW_ROWS)]
    pub preview_rows: usize,
}

impl FetchArgs {
    /// Execute the fetch command against the configured provider.
    pub async fn execute(&self, cli: &Cli) -> Result<(), CliError> {
        let client = HistoryClient::new(cli.base_url.clone());
        self.run(&client).await
    }

    /// Build the query tokens, fetch, preview, and optionally export.
    ///
    /// Spec construction happens before any network activity so invalid
    /// amounts and units never reach the provider.
    async fn run(&self, source: &dyn HistorySource) -> Result<(), CliError> {
        let interval = IntervalSpec::new(self.interval_amount, self.interval_unit)?;
        let period = PeriodSpec::new(self.period_amount, self.period_unit)?;
        let ticker = self.ticker.trim().to_uppercase();

        let spinner = fetch_spinner(&ticker);
        let result = source
            .fetch(&ticker, &interval.token(), &period.token())
            .await;
        spinner.finish_and_clear();
        let records = result?;

        info!(
            "Fetched {} records: ticker={} interval={} period={}",
            records.len(),
            ticker,
            interval.token(),
            period.token()
        );

        println!("{}", render::preview(&records, self.preview_rows));

        if self.export {
            let exporter = CsvExporter::new(&self.out_dir);
            match exporter.export(&records, &ticker, &interval.token(), &period.token())? {
                Some(path) => println!("Exported: {}", path.display()),
                None => println!("Nothing to export: dataset is empty"),
            }
        }

        Ok(())
    }
}

/// Spinner shown while a fetch is in flight.
fn fetch_spinner(ticker: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(format!("Fetching {ticker}..."));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
