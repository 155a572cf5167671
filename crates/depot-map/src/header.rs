//! Header-row detection.

use depot_model::CellValue;

/// Words that mark a table's first row as a header when they appear as
/// cell values (trimmed, case-insensitive).
pub const HEADER_VOCABULARY: &[&str] = &[
    "name", "category", "price", "quantity", "qty", "unit", "expiry", "pharmacy", "contact",
    "phone", "item", "medicine", "product", "stock", "amount", "type", "group", "date",
];

/// Returns true when `row` looks like a header line rather than data.
///
/// A row qualifies if any cell value equals one of the vocabulary words,
/// or if any cell is numerically typed. This is a documented heuristic,
/// kept exactly as stated: single-row and numeric-only files are
/// inherently ambiguous, and changing the rule would change which row is
/// silently dropped.
pub fn is_header_row(row: &[CellValue]) -> bool {
    row.iter().any(|cell| match cell {
        CellValue::Number(_) => true,
        CellValue::Text(value) => {
            let lowered = value.trim().to_lowercase();
            HEADER_VOCABULARY.iter().any(|word| *word == lowered)
        }
        CellValue::Empty => false,
    })
}
