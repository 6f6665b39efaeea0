//! Delimited-text serialization and file artifacts

pub mod csv;

pub use self::csv::{export_filename, serialize, CsvExporter};

/// Export errors
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// IO error
    #[error("IO error: {0}")]
    Io(String),

    /// CSV write error
    #[error("CSV error: {0}")]
    Csv(String),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Declared media type of exported artifacts.
pub const CSV_MEDIA_TYPE: &str = "text/csv; charset=utf-8";
