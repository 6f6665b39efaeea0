//! Remote history retrieval

use crate::Record;
use async_trait::async_trait;

pub mod http;

pub use http::HistoryClient;

/// Fetcher errors
#[derive(Debug, thiserror::Error)]
pub enum FetcherError {
    /// Transport-level failure
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status
    #[error("HTTP error: {0}")]
    Http(String),
}

/// Result type for fetcher operations
pub type FetcherResult<T> = Result<T, FetcherError>;

/// Source of historical records for one instrument.
///
/// The CLI layer talks to this trait so it can be exercised against a stub
/// source in tests; [`HistoryClient`] is the HTTP implementation.
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Fetch all records for `ticker` at the given granularity and lookback.
    ///
    /// # Arguments
    /// * `ticker` - Provider-recognized instrument symbol (e.g. "AAPL")
    /// * `interval` - Sampling granularity token (e.g. "5m")
    /// * `period` - Lookback span token (e.g. "7d", "ytd")
    async fn fetch(
        &self,
        ticker: &str,
        interval: &str,
        period: &str,
    ) -> FetcherResult<Vec<Record>>;
}
