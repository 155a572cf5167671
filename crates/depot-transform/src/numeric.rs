//! Numeric cell parsing.

use depot_model::CellValue;

/// Parses a cell as a non-negative number.
///
/// Uploaded files are untrusted: blank, unparsable, negative, and
/// non-finite values all degrade to 0 rather than failing the batch.
pub fn parse_cell_number(cell: &CellValue) -> f64 {
    let value = match cell {
        CellValue::Number(value) => Some(*value),
        CellValue::Text(value) => parse_f64(value),
        CellValue::Empty => None,
    };
    match value {
        Some(parsed) if parsed.is_finite() && parsed > 0.0 => parsed,
        _ => 0.0,
    }
}

/// Parses a string as f64, returning None for invalid or empty strings.
fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}
