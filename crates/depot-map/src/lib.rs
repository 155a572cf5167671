//! Column semantics for depot imports.
//!
//! Uploaded price lists and order sheets arrive with arbitrary column
//! naming, sometimes without a real header row. This crate locates each
//! semantic role (name, price, quantity, ...) among a table's columns via
//! ordered synonym lists, with a fixed positional convention as the last
//! resort, and recognizes header rows by a small word vocabulary.

pub mod header;
pub mod resolver;
pub mod synonyms;

pub use header::{HEADER_VOCABULARY, is_header_row};
pub use resolver::{ColumnRef, InventoryColumns, RequisitionColumns, match_synonym};
