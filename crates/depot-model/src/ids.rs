use std::fmt;

use chrono::Utc;

/// Timestamp context for one import batch.
///
/// Generated identifiers embed the stamp, so uniqueness is scoped to the
/// batch. Two batches started within the same millisecond can collide;
/// hosts that need stronger guarantees supply distinct stamps themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BatchStamp(i64);

impl BatchStamp {
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub fn millis(self) -> i64 {
        self.0
    }
}

/// Identifier of an inventory line.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Identifier for the `ordinal`-th surviving row of an import batch.
    pub fn imported(stamp: BatchStamp, ordinal: usize) -> Self {
        Self(format!("imp-{}-{}", stamp.millis(), ordinal))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a requisition.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct RequisitionId(String);

impl RequisitionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Identifier for a requisition registered from an import batch.
    pub fn imported(stamp: BatchStamp) -> Self {
        Self(format!("req-{}", stamp.millis()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequisitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
