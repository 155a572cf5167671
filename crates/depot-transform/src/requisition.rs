//! Order-sheet normalization.

use depot_map::{RequisitionColumns, is_header_row};
use depot_model::{RawTable, RequisitionDraft, RequisitionItem};
use tracing::debug;

use crate::inventory::{number_at, text_at};
use crate::outcome::ImportOutcome;

const DEFAULT_PHARMACY_NAME: &str = "New Pharmacy";
const DEFAULT_PHARMACY_CONTACT: &str = "+250 7XX XXX XXX";

/// Normalizes an uploaded order sheet into a single requisition draft.
///
/// All item rows in one upload belong to one pharmacy; its name and
/// contact are read once, from the first surviving row. An upload with
/// no surviving items yields no draft at all rather than an empty
/// requisition.
pub fn normalize_requisition(table: &RawTable) -> ImportOutcome<RequisitionDraft> {
    let source_columns = table.columns.clone();
    if table.rows.is_empty() {
        return ImportOutcome::new(Vec::new(), source_columns);
    }
    let data_start = usize::from(is_header_row(&table.rows[0]));
    let plan = RequisitionColumns::resolve(&table.columns);

    let mut pharmacy: Option<(String, String)> = None;
    let mut items = Vec::new();
    for row in table.rows.iter().skip(data_start) {
        let name = text_at(row, plan.item_name);
        let quantity = number_at(row, plan.quantity);
        let unit_price = number_at(row, plan.unit_price);
        if name.is_none() && quantity == 0.0 && unit_price == 0.0 {
            continue;
        }
        if pharmacy.is_none() {
            pharmacy = Some((
                text_at(row, plan.pharmacy_name)
                    .unwrap_or_else(|| DEFAULT_PHARMACY_NAME.to_string()),
                text_at(row, plan.pharmacy_contact)
                    .unwrap_or_else(|| DEFAULT_PHARMACY_CONTACT.to_string()),
            ));
        }
        items.push(RequisitionItem {
            name: name.unwrap_or_else(|| format!("Item {}", items.len() + 1)),
            quantity,
            unit_price,
        });
    }
    let records = match pharmacy {
        Some((pharmacy_name, pharmacy_contact)) => vec![RequisitionDraft {
            pharmacy_name,
            pharmacy_contact,
            items,
        }],
        None => Vec::new(),
    };
    let skipped_header = data_start == 1;
    debug!(
        rows = table.rows.len(),
        drafts = records.len(),
        skipped_header,
        "normalized order sheet"
    );
    ImportOutcome::new(records, source_columns)
}
