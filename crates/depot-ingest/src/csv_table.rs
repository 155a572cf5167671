use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use depot_model::{CellValue, RawTable};

fn normalize_key(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn decode_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        CellValue::Empty
    } else {
        CellValue::Text(trimmed.to_string())
    }
}

fn is_blank_record(record: &csv::StringRecord) -> bool {
    record
        .iter()
        .all(|value| value.trim().trim_matches('\u{feff}').is_empty())
}

/// Reads a CSV file into a [`RawTable`].
///
/// The first non-blank record becomes the column-key list; every later
/// record becomes a data row padded to the column count. All-blank
/// records are dropped. No semantic interpretation happens here: header
/// detection and role resolution run later, against the decoded table,
/// so a file whose first line is itself data still normalizes via the
/// positional fallback.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let file = File::open(path).with_context(|| format!("open csv: {}", path.display()))?;
    read_csv_table_from_reader(file).with_context(|| format!("read csv: {}", path.display()))
}

/// Reads CSV content from any reader; see [`read_csv_table`].
pub fn read_csv_table_from_reader<R: Read>(reader: R) -> Result<RawTable> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut table = RawTable::default();
    let mut saw_keys = false;
    for record in csv_reader.records() {
        let record = record.context("read record")?;
        if is_blank_record(&record) {
            continue;
        }
        if !saw_keys {
            table.columns = record.iter().map(normalize_key).collect();
            saw_keys = true;
            continue;
        }
        let row: Vec<CellValue> = (0..table.columns.len())
            .map(|index| decode_cell(record.get(index).unwrap_or("")))
            .collect();
        table.rows.push(row);
    }
    debug!(
        columns = table.columns.len(),
        rows = table.rows.len(),
        "decoded csv table"
    );
    Ok(table)
}
