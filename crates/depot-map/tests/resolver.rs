use depot_map::{ColumnRef, InventoryColumns, RequisitionColumns, is_header_row, match_synonym};
use depot_model::CellValue;

fn keys(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|key| (*key).to_string()).collect()
}

#[test]
fn synonym_order_beats_column_order() {
    // "unitprice" precedes "price" in the synonym list, so the unitPrice
    // column wins even though Price appears first in the file.
    let columns = keys(&["Price", "unitPrice"]);
    let plan = InventoryColumns::resolve(&columns);
    assert_eq!(plan.unit_price, ColumnRef::Matched(1));

    let flipped = keys(&["unitPrice", "Price"]);
    let plan = InventoryColumns::resolve(&flipped);
    assert_eq!(plan.unit_price, ColumnRef::Matched(0));
}

#[test]
fn same_synonym_ties_go_to_the_leftmost_column() {
    let columns = keys(&["extra", "Price", "PRICE"]);
    assert_eq!(match_synonym(&columns, &["unitprice", "price"]), Some(1));
}

#[test]
fn matching_is_case_insensitive_and_trimmed() {
    let columns = keys(&["  Medicine ", "QTY"]);
    let plan = InventoryColumns::resolve(&columns);
    assert_eq!(plan.name, ColumnRef::Matched(0));
    assert_eq!(plan.quantity, ColumnRef::Matched(1));
}

#[test]
fn unrecognized_columns_fall_back_to_positions() {
    let columns = keys(&["col1", "col2", "col3", "col4"]);
    let plan = InventoryColumns::resolve(&columns);
    assert_eq!(plan.name, ColumnRef::Positional(0));
    assert_eq!(plan.category, ColumnRef::Positional(1));
    assert_eq!(plan.unit_price, ColumnRef::Positional(2));
    assert_eq!(plan.quantity, ColumnRef::Positional(3));
    assert_eq!(plan.unit, ColumnRef::Positional(4));
    assert_eq!(plan.expiry_date, ColumnRef::Positional(5));
}

#[test]
fn fallback_does_not_steal_a_synonym_resolved_column() {
    // Category is unresolved and its fallback position (1) holds the
    // quantity column; the role must read as absent, not as quantity.
    let columns = keys(&["medicine", "qty", "price"]);
    let plan = InventoryColumns::resolve(&columns);
    assert_eq!(plan.name, ColumnRef::Matched(0));
    assert_eq!(plan.quantity, ColumnRef::Matched(1));
    assert_eq!(plan.unit_price, ColumnRef::Matched(2));
    assert_eq!(plan.category, ColumnRef::Absent);
}

#[test]
fn requisition_roles_share_positions_in_headerless_files() {
    let columns = keys(&["a", "b", "c"]);
    let plan = RequisitionColumns::resolve(&columns);
    assert_eq!(plan.pharmacy_name, ColumnRef::Positional(0));
    assert_eq!(plan.pharmacy_contact, ColumnRef::Positional(1));
    assert_eq!(plan.item_name, ColumnRef::Positional(0));
    assert_eq!(plan.quantity, ColumnRef::Positional(1));
    assert_eq!(plan.unit_price, ColumnRef::Positional(2));
}

#[test]
fn labelled_order_sheet_leaves_pharmacy_metadata_absent() {
    let columns = keys(&["item", "qty", "price"]);
    let plan = RequisitionColumns::resolve(&columns);
    assert_eq!(plan.item_name, ColumnRef::Matched(0));
    assert_eq!(plan.quantity, ColumnRef::Matched(1));
    assert_eq!(plan.unit_price, ColumnRef::Matched(2));
    assert_eq!(plan.pharmacy_name, ColumnRef::Absent);
    assert_eq!(plan.pharmacy_contact, ColumnRef::Absent);
}

#[test]
fn item_column_keeps_plain_name_away_from_pharmacy() {
    let columns = keys(&["pharmacy", "contact", "name", "qty", "price"]);
    let plan = RequisitionColumns::resolve(&columns);
    assert_eq!(plan.pharmacy_name, ColumnRef::Matched(0));
    assert_eq!(plan.pharmacy_contact, ColumnRef::Matched(1));
    assert_eq!(plan.item_name, ColumnRef::Matched(2));
}

fn text_row(values: &[&str]) -> Vec<CellValue> {
    values
        .iter()
        .map(|value| CellValue::Text((*value).to_string()))
        .collect()
}

#[test]
fn vocabulary_words_mark_a_header_row() {
    let row = text_row(&["Name", "Category", "Price", "Quantity"]);
    assert!(is_header_row(&row));
}

#[test]
fn data_values_do_not_mark_a_header_row() {
    // "1200" is text, not a typed number, so it stays data.
    let row = text_row(&["Amoxicillin", "Antibiotics", "1200", "5000"]);
    assert!(!is_header_row(&row));
}

#[test]
fn typed_numbers_mark_a_header_row() {
    let row = vec![
        CellValue::Text("Amoxicillin".to_string()),
        CellValue::Number(1200.0),
    ];
    assert!(is_header_row(&row));
}

#[test]
fn blank_cells_never_mark_a_header_row() {
    let row = vec![CellValue::Empty, CellValue::Text("  ".to_string())];
    assert!(!is_header_row(&row));
}
