//! CLI error types and conversions

use crate::export::ExportError;
use crate::fetcher::FetcherError;
use crate::query::QueryError;

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Query parameter error
    #[error("query error: {0}")]
    Query(#[from] QueryError),

    /// Fetcher error
    #[error("fetch error: {0}")]
    Fetcher(#[from] FetcherError),

    /// Export error
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// Invalid argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
