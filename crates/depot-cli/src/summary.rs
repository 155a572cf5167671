//! Terminal rendering of depot records.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use depot_model::{InventoryItem, Requisition, RequisitionDraft, RequisitionStatus};
use depot_store::DepotStore;
use depot_store::analytics::{
    LOW_STOCK_THRESHOLD, inventory_value, low_stock_count, monthly_revenue, top_medicines,
};

pub fn print_inventory(items: &[InventoryItem]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Product"),
        header_cell("Category"),
        header_cell("Unit Price (RWF)"),
        header_cell("Quantity"),
        header_cell("Unit"),
        header_cell("Expiry"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for item in items {
        table.add_row(vec![
            dim_cell(item.id.as_str()),
            Cell::new(&item.name),
            Cell::new(&item.category),
            Cell::new(format_amount(item.unit_price)),
            quantity_cell(item.quantity),
            Cell::new(&item.unit),
            expiry_cell(&item.expiry_date),
        ]);
    }
    println!("{table}");
}

pub fn print_requisitions(requisitions: &[Requisition]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Pharmacy"),
        header_cell("Contact"),
        header_cell("Date"),
        header_cell("Items"),
        header_cell("Total (RWF)"),
        header_cell("Status"),
        header_cell("MoMo"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Center);
    for requisition in requisitions {
        let items: Vec<String> = requisition
            .items
            .iter()
            .map(|item| format!("{} x{}", item.name, item.quantity))
            .collect();
        table.add_row(vec![
            dim_cell(requisition.id.as_str()),
            Cell::new(&requisition.pharmacy_name),
            Cell::new(&requisition.pharmacy_contact),
            Cell::new(&requisition.request_date),
            Cell::new(items.join("\n")),
            Cell::new(format_amount(requisition.total_amount)),
            status_cell(requisition.status),
            match &requisition.momo_code {
                Some(code) => Cell::new(code),
                None => dim_cell("-"),
            },
        ]);
    }
    println!("{table}");
}

pub fn print_requisition_draft(draft: &RequisitionDraft) {
    println!(
        "Requisition from {} ({})",
        draft.pharmacy_name, draft.pharmacy_contact
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Item"),
        header_cell("Qty"),
        header_cell("Price"),
        header_cell("Total"),
    ]);
    apply_table_style(&mut table);
    for index in 1..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for item in &draft.items {
        table.add_row(vec![
            Cell::new(&item.name),
            Cell::new(item.quantity),
            Cell::new(format_amount(item.unit_price)),
            Cell::new(format_amount(item.line_total())),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(format_amount(draft.total_amount())).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_analytics(store: &DepotStore) {
    println!(
        "Inventory: {} products, {} RWF stock value, {} low-stock lines",
        store.inventory().len(),
        format_amount(inventory_value(store.inventory())),
        low_stock_count(store.inventory()),
    );
    println!(
        "Requests: {} pending, {} accepted, {} rejected",
        store
            .requisitions_with_status(RequisitionStatus::Pending)
            .len(),
        store
            .requisitions_with_status(RequisitionStatus::Accepted)
            .len(),
        store
            .requisitions_with_status(RequisitionStatus::Rejected)
            .len(),
    );

    let mut demand = Table::new();
    demand.set_header(vec![header_cell("Medicine"), header_cell("Requested")]);
    apply_table_style(&mut demand);
    align_column(&mut demand, 1, CellAlignment::Right);
    for entry in top_medicines(store.requisitions(), 8) {
        demand.add_row(vec![
            Cell::new(entry.name),
            Cell::new(format_amount(entry.quantity)),
        ]);
    }
    println!();
    println!("Top requested medicines:");
    println!("{demand}");

    let mut revenue = Table::new();
    revenue.set_header(vec![header_cell("Month"), header_cell("Revenue (RWF)")]);
    apply_table_style(&mut revenue);
    align_column(&mut revenue, 1, CellAlignment::Right);
    for bucket in monthly_revenue(store.requisitions()) {
        revenue.add_row(vec![
            Cell::new(bucket.month),
            Cell::new(format_amount(bucket.revenue)),
        ]);
    }
    println!();
    println!("Revenue from accepted requests:");
    println!("{revenue}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn status_cell(status: RequisitionStatus) -> Cell {
    match status {
        RequisitionStatus::Pending => Cell::new("pending").fg(Color::Yellow),
        RequisitionStatus::Accepted => Cell::new("accepted")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        RequisitionStatus::Rejected => Cell::new("rejected").fg(Color::Red),
    }
}

fn quantity_cell(quantity: f64) -> Cell {
    if quantity < LOW_STOCK_THRESHOLD {
        Cell::new(format_amount(quantity))
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(format_amount(quantity))
    }
}

fn expiry_cell(expiry_date: &str) -> Cell {
    if expiry_date.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(expiry_date)
    }
}

/// Renders an amount with thousands separators, rounding to whole units.
fn format_amount(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::new();
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::format_amount;

    #[test]
    fn amounts_group_thousands() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(950.0), "950");
        assert_eq!(format_amount(62_500.0), "62,500");
        assert_eq!(format_amount(2_680_000.0), "2,680,000");
        assert_eq!(format_amount(1399.6), "1,400");
    }
}
