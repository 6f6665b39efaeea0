//! HTTP history client
//!
//! Issues a single `GET {base_url}/fetch` request carrying the `ticker`,
//! `interval`, and `period` query parameters and decodes the
//! `{ "data": [...] }` response body. A body that lacks the expected shape
//! degrades to an empty dataset rather than an error; transport failures and
//! non-success statuses are reported as [`FetcherError`]s.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::fetcher::{FetcherError, FetcherResult, HistorySource};
use crate::Record;

/// Expected response shape from the provider.
#[derive(Debug, Deserialize)]
struct HistoryResponse {
    #[serde(default)]
    data: Option<Vec<Record>>,
}

/// HTTP client for the history provider.
pub struct HistoryClient {
    client: Client,
    base_url: String,
}

impl HistoryClient {
    /// Default provider endpoint.
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8000";

    /// Create a new client against `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl HistorySource for HistoryClient {
    async fn fetch(
        &self,
        ticker: &str,
        interval: &str,
        period: &str,
    ) -> FetcherResult<Vec<Record>> {
        let url = format!("{}/fetch", self.base_url);
        let params = [
            ("ticker", ticker),
            ("interval", interval),
            ("period", period),
        ];

        debug!(
            "Fetching history: url={} ticker={} interval={} period={}",
            url, ticker, interval, period
        );

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| FetcherError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(FetcherError::Http(format!("{status}: {body}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetcherError::Network(e.to_string()))?;

        match serde_json::from_str::<HistoryResponse>(&body) {
            Ok(HistoryResponse {
                data: Some(records),
            }) => {
                debug!("Fetched {} records", records.len());
                Ok(records)
            }
            Ok(HistoryResponse { data: None }) => {
                warn!("Response has no data field, treating as empty dataset");
                Ok(Vec::new())
            }
            Err(e) => {
                warn!("Undecodable response body ({e}), treating as empty dataset");
                Ok(Vec::new())
            }
        }
    }
}
