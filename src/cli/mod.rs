//! CLI command implementations

pub mod error;
pub mod fetch;
pub mod tickers;

pub use error::CliError;
pub use fetch::{Cli, Commands, FetchArgs};
pub use tickers::TickersCommand;
