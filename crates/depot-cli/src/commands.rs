//! Command implementations.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use depot_ingest::read_csv_table;
use depot_model::{BatchStamp, RequisitionStatus};
use depot_store::seed::demo_store;
use depot_transform::{normalize_inventory, normalize_requisition};

use crate::cli::{ImportArgs, ImportKindArg, RequestsArgs};
use crate::summary::{
    print_analytics, print_inventory, print_requisition_draft, print_requisitions,
};

const EXPECTED_INVENTORY_COLUMNS: &str =
    "name/medicine, category, unitPrice, quantity, unit, expiryDate";
const EXPECTED_REQUISITION_COLUMNS: &str = "pharmacy, contact, item/medicine, quantity, unitPrice";

/// Runs an import and returns the number of records it produced. Zero
/// means nothing usable was found; the caller maps that to a failing
/// exit code.
pub fn run_import(args: &ImportArgs) -> Result<usize> {
    let start = Instant::now();
    let table = read_csv_table(&args.file)?;
    match args.kind {
        ImportKindArg::Inventory => {
            let outcome = normalize_inventory(&table, BatchStamp::now());
            if outcome.is_empty() {
                print_no_records(&outcome.source_columns, EXPECTED_INVENTORY_COLUMNS);
                return Ok(0);
            }
            info!(
                file = %args.file.display(),
                imported = outcome.len(),
                duration_ms = start.elapsed().as_millis(),
                "inventory import complete"
            );
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&outcome.records)
                        .context("serialize imported items")?
                );
            } else {
                print_inventory(&outcome.records);
                println!("Imported {} items from CSV", outcome.len());
            }
            Ok(outcome.len())
        }
        ImportKindArg::Requisition => {
            let outcome = normalize_requisition(&table);
            let Some(draft) = outcome.records.first() else {
                print_no_records(&outcome.source_columns, EXPECTED_REQUISITION_COLUMNS);
                return Ok(0);
            };
            info!(
                file = %args.file.display(),
                items = draft.items.len(),
                duration_ms = start.elapsed().as_millis(),
                "requisition import complete"
            );
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(draft).context("serialize requisition draft")?
                );
            } else {
                print_requisition_draft(draft);
            }
            Ok(draft.items.len())
        }
    }
}

fn print_no_records(columns: &[String], expected: &str) {
    eprintln!(
        "No items imported. Found columns: {}. Expected: {expected}",
        columns.join(", ")
    );
}

pub fn run_requests(args: &RequestsArgs) -> Result<()> {
    let store = demo_store();
    match &args.status {
        Some(raw) => {
            let status: RequisitionStatus = raw.parse().context("parse status filter")?;
            let filtered: Vec<_> = store
                .requisitions_with_status(status)
                .into_iter()
                .cloned()
                .collect();
            print_requisitions(&filtered);
        }
        None => print_requisitions(store.requisitions()),
    }
    Ok(())
}

pub fn run_analytics() -> Result<()> {
    let store = demo_store();
    print_analytics(&store);
    Ok(())
}
