//! CSV serialization and file export
//!
//! The serialized document puts the first record's column names on the
//! header line and quotes every data field unconditionally, doubling any
//! embedded quote. Always-quoted output keeps values containing delimiters,
//! quotes, or newlines round-trip safe under any RFC-4180 reader.

use csv::{QuoteStyle, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{ExportError, ExportResult};
use crate::Record;

/// Serialize a dataset into delimited text.
///
/// The header row carries the column names of the first record in their
/// insertion order; each data row is serialized from its own iteration
/// order, with every field quoted. Rows are joined with `\n` and there is
/// no trailing newline.
///
/// Returns `Ok(None)` for an empty dataset: no header-only document is
/// produced.
pub fn serialize(records: &[Record]) -> ExportResult<Option<String>> {
    let Some(first) = records.first() else {
        return Ok(None);
    };

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(write_line(first.columns(), QuoteStyle::Necessary)?);
    for record in records {
        let values = record.values().map(ToString::to_string);
        lines.push(write_line(values, QuoteStyle::Always)?);
    }

    Ok(Some(lines.join("\n")))
}

/// Serialize a single row with the given quoting rule.
fn write_line<I, T>(fields: I, quote_style: QuoteStyle) -> ExportResult<String>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let mut writer = WriterBuilder::new()
        .quote_style(quote_style)
        .from_writer(Vec::new());

    writer
        .write_record(fields)
        .map_err(|e| ExportError::Csv(format!("Failed to write record: {e}")))?;

    let mut bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(format!("Failed to get inner writer: {e}")))?;

    // Rows are joined manually; strip the record terminator.
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }

    String::from_utf8(bytes).map_err(|e| ExportError::Csv(format!("Invalid UTF-8: {e}")))
}

/// Build the artifact filename for one export.
///
/// Format: `<ticker>_<interval>_<period>.csv`, falling back to `mock` when
/// the ticker is empty.
pub fn export_filename(ticker: &str, interval_token: &str, period_token: &str) -> String {
    let ticker = if ticker.is_empty() {
        "mock".to_string()
    } else {
        sanitize_ticker(ticker)
    };
    format!("{ticker}_{interval_token}_{period_token}.csv")
}

/// Sanitize a ticker for filesystem safety.
///
/// Replaces directory separators, colons, and parent references with
/// underscores. Preserves case (tickers are case-sensitive symbols).
fn sanitize_ticker(name: &str) -> String {
    name.replace("..", "__").replace(['/', '\\', ':'], "_")
}

/// Writes serialized datasets to CSV files under an output directory.
pub struct CsvExporter {
    out_dir: PathBuf,
}

impl CsvExporter {
    /// Create an exporter targeting `out_dir`.
    pub fn new<P: AsRef<Path>>(out_dir: P) -> Self {
        Self {
            out_dir: out_dir.as_ref().to_path_buf(),
        }
    }

    /// Serialize `records` and write them to a derived filename.
    ///
    /// Returns the written path, or `None` when the dataset is empty and no
    /// file was produced. The serialized buffer is dropped as soon as the
    /// file write completes.
    pub fn export(
        &self,
        records: &[Record],
        ticker: &str,
        interval_token: &str,
        period_token: &str,
    ) -> ExportResult<Option<PathBuf>> {
        let Some(text) = serialize(records)? else {
            debug!("Empty dataset, nothing to export");
            return Ok(None);
        };

        fs::create_dir_all(&self.out_dir)
            .map_err(|e| ExportError::Io(format!("Failed to create directory: {e}")))?;

        let path = self
            .out_dir
            .join(export_filename(ticker, interval_token, period_token));

        fs::write(&path, text)
            .map_err(|e| ExportError::Io(format!("Failed to write {}: {e}", path.display())))?;

        info!(
            "CSV exported: path={} rows={}",
            path.display(),
            records.len()
        );

        Ok(Some(path))
    }
}
