//! Import results.

/// Result of normalizing one uploaded table.
///
/// A zero-record outcome is not an error by itself; the caller decides
/// whether to surface it. `source_columns` carries the table's original
/// column keys so the caller can tell the user what was found versus
/// what was expected.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome<T> {
    /// Normalized records, in input row order.
    pub records: Vec<T>,
    /// Column keys of the source table, for zero-result diagnostics.
    pub source_columns: Vec<String>,
}

impl<T> ImportOutcome<T> {
    pub(crate) fn new(records: Vec<T>, source_columns: Vec<String>) -> Self {
        Self {
            records,
            source_columns,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
