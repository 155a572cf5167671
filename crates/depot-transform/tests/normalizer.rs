use std::collections::BTreeSet;

use proptest::prelude::{Just, Strategy, prop_assert, prop_assert_eq, proptest};

use depot_model::{BatchStamp, CellValue, RawTable};
use depot_transform::{normalize_inventory, normalize_requisition};

const STAMP: i64 = 1_760_000_000_000;

fn stamp() -> BatchStamp {
    BatchStamp::from_millis(STAMP)
}

fn table(columns: &[&str], rows: &[&[&str]]) -> RawTable {
    let mut table = RawTable::new(columns.iter().map(|key| (*key).to_string()).collect());
    for row in rows {
        table.push_row(
            row.iter()
                .map(|value| {
                    if value.is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::Text((*value).to_string())
                    }
                })
                .collect(),
        );
    }
    table
}

#[test]
fn empty_table_normalizes_to_nothing() {
    let empty = table(&["name", "qty"], &[]);
    assert!(normalize_inventory(&empty, stamp()).is_empty());
    assert!(normalize_requisition(&empty).is_empty());
}

#[test]
fn zero_result_outcome_keeps_source_columns_for_diagnostics() {
    let blank_rows = table(&["foo", "bar"], &[&["", ""], &["  ", ""]]);
    let outcome = normalize_inventory(&blank_rows, stamp());
    assert!(outcome.is_empty());
    assert_eq!(outcome.source_columns, vec!["foo", "bar"]);
}

#[test]
fn header_valued_first_row_is_consumed() {
    let upload = table(
        &["name", "category", "price", "quantity"],
        &[
            &["Name", "Category", "Price", "Quantity"],
            &["Amoxicillin", "Antibiotics", "1200", "5000"],
        ],
    );
    let outcome = normalize_inventory(&upload, stamp());
    assert_eq!(outcome.len(), 1);
    assert_eq!(outcome.records[0].name, "Amoxicillin");
    assert_eq!(outcome.records[0].category, "Antibiotics");
}

#[test]
fn data_valued_first_row_is_kept() {
    let upload = table(
        &["name", "category", "price", "quantity"],
        &[&["Amoxicillin", "Antibiotics", "1200", "5000"]],
    );
    let outcome = normalize_inventory(&upload, stamp());
    assert_eq!(outcome.len(), 1);
    assert_eq!(outcome.records[0].name, "Amoxicillin");
    assert_eq!(outcome.records[0].unit_price, 1200.0);
    assert_eq!(outcome.records[0].quantity, 5000.0);
}

#[test]
fn numerically_typed_first_row_is_treated_as_header() {
    let mut upload = table(&["a", "b"], &[&["Paracetamol", "300"]]);
    upload.rows.insert(
        0,
        vec![CellValue::Text("whatever".to_string()), CellValue::Number(3.0)],
    );
    let outcome = normalize_inventory(&upload, stamp());
    assert_eq!(outcome.len(), 1);
    assert_eq!(outcome.records[0].name, "Paracetamol");
}

#[test]
fn round_trips_a_header_keyed_price_list() {
    let upload = table(&["medicine", "qty", "price"], &[&["Paracetamol", "100", "300"]]);
    let outcome = normalize_inventory(&upload, stamp());
    assert_eq!(outcome.len(), 1);
    let item = &outcome.records[0];
    assert_eq!(item.name, "Paracetamol");
    assert_eq!(item.category, "General");
    assert_eq!(item.unit_price, 300.0);
    assert_eq!(item.quantity, 100.0);
    assert_eq!(item.unit, "units");
    assert_eq!(item.expiry_date, "");
    assert_eq!(item.id.as_str(), format!("imp-{STAMP}-0"));
}

#[test]
fn unrecognized_columns_normalize_positionally() {
    let upload = table(
        &["col1", "col2", "col3", "col4"],
        &[&["Ibuprofen", "Pain", "450", "8000"]],
    );
    let outcome = normalize_inventory(&upload, stamp());
    assert_eq!(outcome.len(), 1);
    let item = &outcome.records[0];
    assert_eq!(item.name, "Ibuprofen");
    assert_eq!(item.category, "Pain");
    assert_eq!(item.unit_price, 450.0);
    assert_eq!(item.quantity, 8000.0);
    assert_eq!(item.unit, "units");
    assert_eq!(item.expiry_date, "");
}

#[test]
fn synonym_preference_picks_unit_price_over_price() {
    let upload = table(
        &["Price", "unitPrice", "name"],
        &[&["111", "222", "Cetirizine"]],
    );
    let outcome = normalize_inventory(&upload, stamp());
    assert_eq!(outcome.records[0].unit_price, 222.0);
}

#[test]
fn blank_rows_leave_no_ghost_records() {
    let upload = table(
        &["col1", "col2", "col3", "col4"],
        &[
            &["", "", "", ""],
            &["", "Pain", "450", "8000"],
            &["", "", "", ""],
        ],
    );
    let outcome = normalize_inventory(&upload, stamp());
    assert_eq!(outcome.len(), 1);
    // Defaults apply to the surviving row using its surviving ordinal.
    assert_eq!(outcome.records[0].name, "Product 1");
    assert_eq!(outcome.records[0].id.as_str(), format!("imp-{STAMP}-0"));
}

#[test]
fn category_only_rows_are_padding() {
    let upload = table(
        &["name", "category", "price", "quantity"],
        &[&["", "Antibiotics", "", ""]],
    );
    assert!(normalize_inventory(&upload, stamp()).is_empty());
}

#[test]
fn malformed_and_negative_numbers_degrade_to_zero() {
    let upload = table(
        &["name", "price", "qty"],
        &[&["Diclofenac", "-500", "lots"]],
    );
    let outcome = normalize_inventory(&upload, stamp());
    assert_eq!(outcome.len(), 1);
    assert_eq!(outcome.records[0].unit_price, 0.0);
    assert_eq!(outcome.records[0].quantity, 0.0);
}

#[test]
fn typed_number_cells_parse_directly() {
    let mut upload = table(&["medicine", "qty", "price"], &[]);
    upload.push_row(vec![
        CellValue::Text("Omeprazole".to_string()),
        CellValue::Number(10.0),
        CellValue::Number(950.5),
    ]);
    // A typed number in the first row marks it as a header, so add a
    // sacrificial header line first.
    upload.rows.insert(
        0,
        vec![
            CellValue::Text("medicine".to_string()),
            CellValue::Text("qty".to_string()),
            CellValue::Text("price".to_string()),
        ],
    );
    let outcome = normalize_inventory(&upload, stamp());
    assert_eq!(outcome.len(), 1);
    assert_eq!(outcome.records[0].quantity, 10.0);
    assert_eq!(outcome.records[0].unit_price, 950.5);
}

#[test]
fn batch_ids_are_unique_and_runs_are_repeatable() {
    let upload = table(
        &["name", "price", "qty"],
        &[
            &["Amoxicillin", "1200", "5000"],
            &["Paracetamol", "300", "15000"],
            &["Metformin", "800", "3000"],
        ],
    );
    let first = normalize_inventory(&upload, stamp());
    let second = normalize_inventory(&upload, stamp());
    assert_eq!(first, second);

    let ids: BTreeSet<_> = first
        .records
        .iter()
        .map(|item| item.id.as_str().to_string())
        .collect();
    assert_eq!(ids.len(), first.len());
}

#[test]
fn requisition_rows_aggregate_under_one_pharmacy() {
    let upload = table(
        &["pharmacy", "contact", "item", "qty", "price"],
        &[
            &[
                "Pharmacie de la Paix",
                "+250 788 123 456",
                "Amoxicillin 500mg",
                "100",
                "1200",
            ],
            &["", "", "Paracetamol 500mg", "120", "300"],
        ],
    );
    let outcome = normalize_requisition(&upload);
    assert_eq!(outcome.len(), 1);
    let draft = &outcome.records[0];
    assert_eq!(draft.pharmacy_name, "Pharmacie de la Paix");
    assert_eq!(draft.pharmacy_contact, "+250 788 123 456");
    assert_eq!(draft.items.len(), 2);
    assert_eq!(draft.items[0].name, "Amoxicillin 500mg");
    assert_eq!(draft.items[1].name, "Paracetamol 500mg");
    assert_eq!(draft.total_amount(), 156_000.0);
}

#[test]
fn requisition_header_row_is_consumed() {
    let upload = table(
        &["item", "qty", "price"],
        &[
            &["Item", "Qty", "Price"],
            &["Azithromycin 250mg", "25", "2500"],
        ],
    );
    let outcome = normalize_requisition(&upload);
    assert_eq!(outcome.len(), 1);
    assert_eq!(outcome.records[0].items.len(), 1);
}

#[test]
fn requisition_without_surviving_items_is_rejected_entirely() {
    let upload = table(&["item", "qty", "price"], &[&["", "", ""], &["", "0", ""]]);
    let outcome = normalize_requisition(&upload);
    assert!(outcome.is_empty());
    assert_eq!(outcome.source_columns, vec!["item", "qty", "price"]);
}

#[test]
fn requisition_pharmacy_defaults_apply_when_metadata_is_missing() {
    let upload = table(&["item", "qty", "price"], &[&["Amoxicillin 500mg", "10", ""]]);
    let outcome = normalize_requisition(&upload);
    let draft = &outcome.records[0];
    assert_eq!(draft.pharmacy_name, "New Pharmacy");
    assert_eq!(draft.pharmacy_contact, "+250 7XX XXX XXX");
}

#[test]
fn requisition_item_names_default_by_surviving_ordinal() {
    let upload = table(
        &["col1", "col2", "col3"],
        &[&["", "5", "200"], &["", "2", "800"]],
    );
    let outcome = normalize_requisition(&upload);
    let draft = &outcome.records[0];
    assert_eq!(draft.items[0].name, "Item 1");
    assert_eq!(draft.items[1].name, "Item 2");
    // Headerless files share column 0 between pharmacy and item names;
    // both were blank here, so the pharmacy default applies.
    assert_eq!(draft.pharmacy_name, "New Pharmacy");
}

fn any_cell() -> impl Strategy<Value = CellValue> {
    proptest::prop_oneof![
        proptest::prop_oneof![
            -1.0e12..1.0e12f64,
            Just(f64::NAN),
            Just(f64::INFINITY),
            Just(f64::NEG_INFINITY),
        ]
        .prop_map(CellValue::Number),
        "[ -~]{0,12}".prop_map(CellValue::Text),
        Just(CellValue::Empty),
    ]
}

proptest! {
    #[test]
    fn inventory_normalization_upholds_record_invariants(
        columns in proptest::collection::vec("[a-zA-Z0-9_ ]{0,10}", 0..6),
        rows in proptest::collection::vec(proptest::collection::vec(any_cell(), 0..7), 0..12),
    ) {
        let mut upload = RawTable::new(columns);
        for row in rows {
            upload.push_row(row);
        }
        let outcome = normalize_inventory(&upload, stamp());
        prop_assert!(outcome.len() <= upload.rows.len());

        let mut ids = BTreeSet::new();
        for item in &outcome.records {
            prop_assert!(!item.name.is_empty());
            prop_assert!(item.unit_price.is_finite() && item.unit_price >= 0.0);
            prop_assert!(item.quantity.is_finite() && item.quantity >= 0.0);
            prop_assert!(ids.insert(item.id.as_str().to_string()));
        }
    }

    #[test]
    fn requisition_normalization_never_emits_empty_drafts(
        columns in proptest::collection::vec("[a-zA-Z0-9_ ]{0,10}", 0..6),
        rows in proptest::collection::vec(proptest::collection::vec(any_cell(), 0..7), 0..12),
    ) {
        let mut upload = RawTable::new(columns);
        for row in rows {
            upload.push_row(row);
        }
        let outcome = normalize_requisition(&upload);
        prop_assert!(outcome.len() <= 1);
        for draft in &outcome.records {
            prop_assert!(!draft.items.is_empty());
            prop_assert!(!draft.pharmacy_name.is_empty());
            for item in &draft.items {
                prop_assert!(!item.name.is_empty());
                prop_assert!(item.quantity.is_finite() && item.quantity >= 0.0);
                prop_assert!(item.unit_price.is_finite() && item.unit_price >= 0.0);
            }
        }
        prop_assert_eq!(normalize_requisition(&upload), outcome);
    }
}
