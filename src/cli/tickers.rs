//! CLI command for listing well-known tickers

use clap::Args;

/// Well-known instrument symbols offered as suggestions. The provider
/// accepts any symbol it recognizes; this list is only a convenience.
pub const TICKER_LIST: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "AMZN", "TSLA", "META", "NVDA", "NFLX", "AMD", "BABA", "BTC-USD",
    "ETH-USD", "EURUSD=X", "SPY", "QQQ",
];

/// Tickers subcommand
#[derive(Debug, Args)]
pub struct TickersCommand {}

impl TickersCommand {
    /// Print the built-in ticker list, one per line.
    pub fn execute(&self) {
        for ticker in TICKER_LIST {
            println!("{ticker}");
        }
    }
}
