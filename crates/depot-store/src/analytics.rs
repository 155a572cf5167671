//! Aggregations backing the dashboard's analytics views.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use depot_model::{InventoryItem, Requisition, RequisitionStatus};

/// Stock lines at or below this quantity count as low stock.
pub const LOW_STOCK_THRESHOLD: f64 = 2000.0;

/// Total requested quantity for one medicine across requisitions.
#[derive(Debug, Clone, PartialEq)]
pub struct MedicineDemand {
    pub name: String,
    pub quantity: f64,
}

/// Requested quantity per medicine, highest first.
///
/// All requisitions count, regardless of status, matching the dashboard
/// chart. Ties break by name so the ordering is stable across runs.
pub fn top_medicines(requisitions: &[Requisition], limit: usize) -> Vec<MedicineDemand> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for requisition in requisitions {
        for item in &requisition.items {
            *totals.entry(item.name.as_str()).or_insert(0.0) += item.quantity;
        }
    }
    let mut ranked: Vec<MedicineDemand> = totals
        .into_iter()
        .map(|(name, quantity)| MedicineDemand {
            name: name.to_string(),
            quantity,
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.quantity
            .partial_cmp(&a.quantity)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    ranked.truncate(limit);
    ranked
}

/// One month's accepted-requisition revenue.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRevenue {
    /// Year-month bucket, e.g. "2026-02".
    pub month: String,
    pub revenue: f64,
}

/// Revenue per month over accepted requisitions, chronological.
///
/// Request dates that fail to parse as ISO dates are skipped.
pub fn monthly_revenue(requisitions: &[Requisition]) -> Vec<MonthlyRevenue> {
    let mut buckets: BTreeMap<String, f64> = BTreeMap::new();
    for requisition in requisitions {
        if requisition.status != RequisitionStatus::Accepted {
            continue;
        }
        let Ok(date) = NaiveDate::parse_from_str(&requisition.request_date, "%Y-%m-%d") else {
            continue;
        };
        let key = format!("{:04}-{:02}", date.year(), date.month());
        *buckets.entry(key).or_insert(0.0) += requisition.total_amount;
    }
    buckets
        .into_iter()
        .map(|(month, revenue)| MonthlyRevenue { month, revenue })
        .collect()
}

/// Total stock value across the inventory.
pub fn inventory_value(inventory: &[InventoryItem]) -> f64 {
    inventory.iter().map(InventoryItem::stock_value).sum()
}

/// Number of stock lines below the low-stock threshold.
pub fn low_stock_count(inventory: &[InventoryItem]) -> usize {
    inventory
        .iter()
        .filter(|item| item.quantity < LOW_STOCK_THRESHOLD)
        .count()
}
