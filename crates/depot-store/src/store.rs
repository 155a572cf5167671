use thiserror::Error;
use tracing::info;

use depot_model::{
    BatchStamp, InventoryItem, ItemId, LicenseDoc, Requisition, RequisitionDraft, RequisitionId,
    RequisitionStatus,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unknown inventory item: {0}")]
    UnknownItem(ItemId),
    #[error("unknown requisition: {0}")]
    UnknownRequisition(RequisitionId),
}

/// The depot's mutable state: stock, incoming requisitions, and uploaded
/// verification documents.
///
/// Single-tenant and in-memory. The owner decides lifetime and what (if
/// anything) to persist; normalization never touches this type, it only
/// produces the records appended here.
#[derive(Debug, Clone, Default)]
pub struct DepotStore {
    inventory: Vec<InventoryItem>,
    requisitions: Vec<Requisition>,
    licenses: Vec<LicenseDoc>,
}

impl DepotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_seed(
        inventory: Vec<InventoryItem>,
        requisitions: Vec<Requisition>,
        licenses: Vec<LicenseDoc>,
    ) -> Self {
        Self {
            inventory,
            requisitions,
            licenses,
        }
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn requisitions(&self) -> &[Requisition] {
        &self.requisitions
    }

    pub fn licenses(&self) -> &[LicenseDoc] {
        &self.licenses
    }

    /// Appends an import batch to the stock list.
    pub fn extend_inventory(&mut self, items: Vec<InventoryItem>) {
        info!(count = items.len(), "inventory batch appended");
        self.inventory.extend(items);
    }

    /// Updates one item's price and quantity.
    pub fn update_item(
        &mut self,
        id: &ItemId,
        unit_price: f64,
        quantity: f64,
    ) -> Result<(), StoreError> {
        let item = self
            .inventory
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| StoreError::UnknownItem(id.clone()))?;
        item.unit_price = unit_price;
        item.quantity = quantity;
        Ok(())
    }

    /// Adjusts every unit price by a percentage, rounding to whole
    /// currency units.
    pub fn bulk_update_prices(&mut self, percentage: f64) {
        for item in &mut self.inventory {
            item.unit_price = (item.unit_price * (1.0 + percentage / 100.0)).round();
        }
        info!(
            percentage,
            items = self.inventory.len(),
            "bulk price update applied"
        );
    }

    /// Registers an imported draft as a pending requisition and returns
    /// its assigned id.
    pub fn add_requisition(
        &mut self,
        draft: RequisitionDraft,
        stamp: BatchStamp,
        request_date: impl Into<String>,
    ) -> RequisitionId {
        let id = RequisitionId::imported(stamp);
        let requisition = Requisition::from_draft(id.clone(), request_date, draft);
        info!(id = %requisition.id, items = requisition.items.len(), "requisition registered");
        self.requisitions.push(requisition);
        id
    }

    /// Accepts a requisition, recording the MoMo payment code.
    pub fn accept_requisition(
        &mut self,
        id: &RequisitionId,
        momo_code: impl Into<String>,
    ) -> Result<(), StoreError> {
        let requisition = self.requisition_mut(id)?;
        requisition.status = RequisitionStatus::Accepted;
        requisition.momo_code = Some(momo_code.into());
        info!(id = %id, "requisition accepted");
        Ok(())
    }

    /// Rejects a requisition. Any previously recorded MoMo code is left
    /// in place, matching the dashboard's behavior.
    pub fn reject_requisition(&mut self, id: &RequisitionId) -> Result<(), StoreError> {
        let requisition = self.requisition_mut(id)?;
        requisition.status = RequisitionStatus::Rejected;
        info!(id = %id, "requisition rejected");
        Ok(())
    }

    pub fn add_license(&mut self, doc: LicenseDoc) {
        self.licenses.push(doc);
    }

    /// Requisitions in the given state, in arrival order.
    pub fn requisitions_with_status(&self, status: RequisitionStatus) -> Vec<&Requisition> {
        self.requisitions
            .iter()
            .filter(|requisition| requisition.status == status)
            .collect()
    }

    fn requisition_mut(&mut self, id: &RequisitionId) -> Result<&mut Requisition, StoreError> {
        self.requisitions
            .iter_mut()
            .find(|requisition| &requisition.id == id)
            .ok_or_else(|| StoreError::UnknownRequisition(id.clone()))
    }
}
