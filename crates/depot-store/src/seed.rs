//! Demo seed data for the single-tenant depot.

use depot_model::{
    InventoryItem, ItemId, LicenseDoc, Requisition, RequisitionId, RequisitionItem,
    RequisitionStatus,
};

use crate::store::DepotStore;

fn item(
    id: &str,
    name: &str,
    category: &str,
    unit_price: f64,
    quantity: f64,
    unit: &str,
    expiry_date: &str,
) -> InventoryItem {
    InventoryItem {
        id: ItemId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        unit_price,
        quantity,
        unit: unit.to_string(),
        expiry_date: expiry_date.to_string(),
    }
}

fn line(name: &str, quantity: f64, unit_price: f64) -> RequisitionItem {
    RequisitionItem {
        name: name.to_string(),
        quantity,
        unit_price,
    }
}

fn requisition(
    id: &str,
    pharmacy_name: &str,
    pharmacy_contact: &str,
    request_date: &str,
    items: Vec<RequisitionItem>,
    status: RequisitionStatus,
    momo_code: Option<&str>,
    total_amount: f64,
) -> Requisition {
    Requisition {
        id: RequisitionId::new(id),
        pharmacy_name: pharmacy_name.to_string(),
        pharmacy_contact: pharmacy_contact.to_string(),
        request_date: request_date.to_string(),
        items,
        status,
        momo_code: momo_code.map(str::to_string),
        total_amount,
    }
}

/// Builds the depot with the demo dataset the dashboard ships with.
pub fn demo_store() -> DepotStore {
    let inventory = vec![
        item("inv-1", "Amoxicillin 500mg", "Antibiotics", 1200.0, 5000.0, "capsules", "2027-06-15"),
        item("inv-2", "Paracetamol 500mg", "Analgesics", 300.0, 15000.0, "tablets", "2027-12-01"),
        item("inv-3", "Metformin 850mg", "Antidiabetics", 800.0, 3000.0, "tablets", "2027-03-20"),
        item("inv-4", "Ibuprofen 400mg", "Analgesics", 450.0, 8000.0, "tablets", "2027-09-10"),
        item("inv-5", "Omeprazole 20mg", "Gastrointestinal", 950.0, 2500.0, "capsules", "2026-11-30"),
        item("inv-6", "Azithromycin 250mg", "Antibiotics", 2500.0, 1200.0, "tablets", "2027-08-15"),
        item("inv-7", "Ciprofloxacin 500mg", "Antibiotics", 1800.0, 2000.0, "tablets", "2027-04-22"),
        item("inv-8", "Diclofenac 50mg", "Analgesics", 500.0, 6000.0, "tablets", "2027-07-18"),
        item("inv-9", "Amlodipine 5mg", "Cardiovascular", 700.0, 4000.0, "tablets", "2027-10-05"),
        item("inv-10", "Cetirizine 10mg", "Antihistamines", 350.0, 7000.0, "tablets", "2027-05-12"),
    ];

    let requisitions = vec![
        requisition(
            "req-001",
            "Pharmacie de la Paix",
            "+250 788 123 456",
            "2026-02-15",
            vec![
                line("Amoxicillin 500mg", 100.0, 1200.0),
                line("Paracetamol 500mg", 120.0, 300.0),
            ],
            RequisitionStatus::Pending,
            None,
            156_000.0,
        ),
        requisition(
            "req-002",
            "Green Cross Pharmacy",
            "+250 788 234 567",
            "2026-02-14",
            vec![
                line("Metformin 850mg", 200.0, 800.0),
                line("Amlodipine 5mg", 100.0, 700.0),
                line("Omeprazole 20mg", 10.0, 950.0),
            ],
            RequisitionStatus::Pending,
            None,
            240_000.0,
        ),
        requisition(
            "req-003",
            "Pharmacy Vita",
            "+250 788 345 678",
            "2026-02-13",
            vec![line("Azithromycin 250mg", 25.0, 2500.0)],
            RequisitionStatus::Accepted,
            Some("MP-2026-7821"),
            62_500.0,
        ),
        requisition(
            "req-004",
            "MedPlus Kigali",
            "+250 788 456 789",
            "2026-02-12",
            vec![line("Ciprofloxacin 500mg", 50.0, 1800.0)],
            RequisitionStatus::Rejected,
            None,
            90_000.0,
        ),
        requisition(
            "req-005",
            "Ubuzima Pharmacy",
            "+250 788 567 890",
            "2026-02-16",
            vec![
                line("Paracetamol 500mg", 500.0, 300.0),
                line("Ibuprofen 400mg", 200.0, 450.0),
                line("Diclofenac 50mg", 100.0, 500.0),
            ],
            RequisitionStatus::Pending,
            None,
            315_000.0,
        ),
    ];

    let licenses = vec![
        LicenseDoc {
            id: "lic-1".to_string(),
            name: "Pharmacy Operating License 2026.pdf".to_string(),
            upload_date: "2026-01-05".to_string(),
            doc_type: "Operating License".to_string(),
        },
        LicenseDoc {
            id: "lic-2".to_string(),
            name: "FDA Import Permit.pdf".to_string(),
            upload_date: "2025-11-20".to_string(),
            doc_type: "Import Permit".to_string(),
        },
    ];

    DepotStore::with_seed(inventory, requisitions, licenses)
}
