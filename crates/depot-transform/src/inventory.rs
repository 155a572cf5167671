//! Price-list normalization.

use depot_map::{ColumnRef, InventoryColumns, is_header_row};
use depot_model::{BatchStamp, CellValue, InventoryItem, ItemId, RawTable};
use tracing::debug;

use crate::numeric::parse_cell_number;
use crate::outcome::ImportOutcome;

const DEFAULT_CATEGORY: &str = "General";
const DEFAULT_UNIT: &str = "units";

/// Normalizes an uploaded price list into inventory items.
///
/// Best effort over arbitrary column naming: a detected header row is
/// consumed, roles resolve by synonym with positional fallback, rows
/// with no name, price, or quantity are dropped as padding, and
/// malformed numeric cells degrade to 0. Identifiers are unique within
/// the batch given by `stamp`.
pub fn normalize_inventory(table: &RawTable, stamp: BatchStamp) -> ImportOutcome<InventoryItem> {
    let source_columns = table.columns.clone();
    if table.rows.is_empty() {
        return ImportOutcome::new(Vec::new(), source_columns);
    }
    let data_start = usize::from(is_header_row(&table.rows[0]));
    let plan = InventoryColumns::resolve(&table.columns);

    let mut records = Vec::new();
    for row in table.rows.iter().skip(data_start) {
        let name = text_at(row, plan.name);
        let unit_price = number_at(row, plan.unit_price);
        let quantity = number_at(row, plan.quantity);
        if name.is_none() && unit_price == 0.0 && quantity == 0.0 {
            continue;
        }
        let ordinal = records.len();
        records.push(InventoryItem {
            id: ItemId::imported(stamp, ordinal),
            name: name.unwrap_or_else(|| format!("Product {}", ordinal + 1)),
            category: text_at(row, plan.category)
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            unit_price,
            quantity,
            unit: text_at(row, plan.unit).unwrap_or_else(|| DEFAULT_UNIT.to_string()),
            expiry_date: text_at(row, plan.expiry_date).unwrap_or_default(),
        });
    }
    let skipped_header = data_start == 1;
    debug!(
        rows = table.rows.len(),
        imported = records.len(),
        skipped_header,
        "normalized price list"
    );
    ImportOutcome::new(records, source_columns)
}

pub(crate) fn text_at(row: &[CellValue], column: ColumnRef) -> Option<String> {
    column
        .index()
        .and_then(|index| row.get(index))
        .and_then(CellValue::as_text)
}

pub(crate) fn number_at(row: &[CellValue], column: ColumnRef) -> f64 {
    column
        .index()
        .and_then(|index| row.get(index))
        .map(parse_cell_number)
        .unwrap_or(0.0)
}
