//! Decoding of uploaded files into [`depot_model::RawTable`] payloads.
//!
//! Only CSV is decoded here. Typed spreadsheet decoders plug in at the
//! same boundary by producing `CellValue::Number` cells.

pub mod csv_table;

pub use csv_table::{read_csv_table, read_csv_table_from_reader};
