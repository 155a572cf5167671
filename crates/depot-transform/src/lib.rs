//! Converts decoded upload tables into typed depot records.
//!
//! The normalizer is a pure function of the table and (for inventory)
//! the batch stamp: no I/O, no shared state, and no failures on
//! malformed cells. Callers own the resulting records and decide what a
//! zero-record outcome means.

pub mod inventory;
pub mod numeric;
pub mod outcome;
pub mod requisition;

pub use inventory::normalize_inventory;
pub use numeric::parse_cell_number;
pub use outcome::ImportOutcome;
pub use requisition::normalize_requisition;
