use serde::{Deserialize, Serialize};

/// An uploaded verification document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseDoc {
    pub id: String,
    pub name: String,
    pub upload_date: String,
    pub doc_type: String,
}
