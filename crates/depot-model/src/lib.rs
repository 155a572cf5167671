pub mod error;
pub mod ids;
pub mod inventory;
pub mod license;
pub mod requisition;
pub mod table;

pub use error::{ModelError, Result};
pub use ids::{BatchStamp, ItemId, RequisitionId};
pub use inventory::InventoryItem;
pub use license::LicenseDoc;
pub use requisition::{Requisition, RequisitionDraft, RequisitionItem, RequisitionStatus};
pub use table::{CellValue, RawTable};
