use std::io::Cursor;
use std::io::Write as _;

use depot_ingest::{read_csv_table, read_csv_table_from_reader};
use depot_model::CellValue;

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

#[test]
fn first_record_becomes_the_column_keys() {
    let input = "name,category,price\nAmoxicillin,Antibiotics,1200\n";
    let table = read_csv_table_from_reader(Cursor::new(input)).unwrap();
    assert_eq!(table.columns, vec!["name", "category", "price"]);
    assert_eq!(
        table.rows,
        vec![vec![text("Amoxicillin"), text("Antibiotics"), text("1200")]]
    );
}

#[test]
fn blank_records_are_dropped() {
    let input = "\n,,\nname,qty\n\nParacetamol,100\n,,\n";
    let table = read_csv_table_from_reader(Cursor::new(input)).unwrap();
    assert_eq!(table.columns, vec!["name", "qty"]);
    assert_eq!(table.rows, vec![vec![text("Paracetamol"), text("100")]]);
}

#[test]
fn bom_and_padding_are_stripped_from_keys_and_cells() {
    let input = "\u{feff}name ,  unit  price \n  Ibuprofen ,450\n";
    let table = read_csv_table_from_reader(Cursor::new(input)).unwrap();
    assert_eq!(table.columns, vec!["name", "unit price"]);
    assert_eq!(table.rows, vec![vec![text("Ibuprofen"), text("450")]]);
}

#[test]
fn short_records_pad_and_long_records_truncate() {
    let input = "name,qty,price\nMetformin\nOmeprazole,10,950,extra\n";
    let table = read_csv_table_from_reader(Cursor::new(input)).unwrap();
    assert_eq!(
        table.rows,
        vec![
            vec![text("Metformin"), CellValue::Empty, CellValue::Empty],
            vec![text("Omeprazole"), text("10"), text("950")],
        ]
    );
}

#[test]
fn whitespace_only_cells_decode_as_empty() {
    let input = "name,qty\nCetirizine,   \n";
    let table = read_csv_table_from_reader(Cursor::new(input)).unwrap();
    assert_eq!(table.rows, vec![vec![text("Cetirizine"), CellValue::Empty]]);
}

#[test]
fn empty_input_yields_an_empty_table() {
    let table = read_csv_table_from_reader(Cursor::new("")).unwrap();
    assert!(table.columns.is_empty());
    assert!(table.is_empty());
}

#[test]
fn reads_from_a_file_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "medicine,qty,price").unwrap();
    writeln!(file, "Paracetamol,100,300").unwrap();
    let table = read_csv_table(file.path()).unwrap();
    assert_eq!(table.columns, vec!["medicine", "qty", "price"]);
    assert_eq!(table.rows.len(), 1);
}

#[test]
fn missing_file_reports_the_path() {
    let error = read_csv_table(std::path::Path::new("does-not-exist.csv")).unwrap_err();
    assert!(error.to_string().contains("does-not-exist.csv"));
}
