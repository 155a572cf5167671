use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ModelError, RequisitionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequisitionStatus {
    Pending,
    Accepted,
    Rejected,
}

impl RequisitionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for RequisitionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequisitionStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("pending") {
            Ok(Self::Pending)
        } else if trimmed.eq_ignore_ascii_case("accepted") {
            Ok(Self::Accepted)
        } else if trimmed.eq_ignore_ascii_case("rejected") {
            Ok(Self::Rejected)
        } else {
            Err(ModelError::UnknownStatus(s.to_string()))
        }
    }
}

/// One requested line in a pharmacy order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequisitionItem {
    pub name: String,
    pub quantity: f64,
    pub unit_price: f64,
}

impl RequisitionItem {
    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// Normalizer output for a requisition import: one pharmacy and its
/// requested items. The owning store turns a draft into a full
/// [`Requisition`] by assigning an id, date, and status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequisitionDraft {
    pub pharmacy_name: String,
    pub pharmacy_contact: String,
    pub items: Vec<RequisitionItem>,
}

impl RequisitionDraft {
    pub fn total_amount(&self) -> f64 {
        self.items.iter().map(RequisitionItem::line_total).sum()
    }
}

/// An incoming pharmacy order tracked by the depot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requisition {
    pub id: RequisitionId,
    pub pharmacy_name: String,
    pub pharmacy_contact: String,
    pub request_date: String,
    pub items: Vec<RequisitionItem>,
    pub status: RequisitionStatus,
    /// Free-text mobile-money reference recorded on acceptance.
    pub momo_code: Option<String>,
    pub total_amount: f64,
}

impl Requisition {
    /// Builds a pending requisition from an import draft.
    pub fn from_draft(
        id: RequisitionId,
        request_date: impl Into<String>,
        draft: RequisitionDraft,
    ) -> Self {
        let total_amount = draft.total_amount();
        Self {
            id,
            pharmacy_name: draft.pharmacy_name,
            pharmacy_contact: draft.pharmacy_contact,
            request_date: request_date.into(),
            items: draft.items,
            status: RequisitionStatus::Pending,
            momo_code: None,
            total_amount,
        }
    }
}
