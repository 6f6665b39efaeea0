//! Plain-text dataset previews

use crate::Record;

/// Default number of rows shown by a preview.
pub const DEFAULT_PREVIEW_ROWS: usize = 10;

/// Render the first `limit` records as a column-aligned text table.
///
/// Column headers come from the first record. When the dataset is longer
/// than `limit`, a trailing note says how many rows were shown.
pub fn preview(records: &[Record], limit: usize) -> String {
    let Some(first) = records.first() else {
        return "(no data)".to_string();
    };

    let columns: Vec<&str> = first.columns().collect();
    let shown = &records[..records.len().min(limit)];

    let rows: Vec<Vec<String>> = shown
        .iter()
        .map(|record| record.values().map(ToString::to_string).collect())
        .collect();

    let mut widths: Vec<usize> = columns.iter().map(|c| c.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.len());
            }
        }
    }

    let mut out = String::new();
    push_row(&mut out, &columns, &widths);
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        push_row(&mut out, &cells, &widths);
    }

    if records.len() > shown.len() {
        out.push_str(&format!(
            "(showing first {} of {} rows)\n",
            shown.len(),
            records.len()
        ));
    }

    out
}

fn push_row(out: &mut String, cells: &[&str], widths: &[usize]) {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let width = widths.get(i).copied().unwrap_or(0);
        line.push_str(&format!("{cell:<width$}"));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
