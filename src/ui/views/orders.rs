use std::path::Path;

use chrono::NaiveDate;

use flooring::domain::entities::{ProductCatalog, TaxCatalog};
use flooring::domain::value_objects::format_date;
use flooring::infrastructure::InitReport;
use flooring::Order;

const RULE_WIDTH: usize = 78;

fn status(order: &Order) -> &'static str {
    if order.is_active() {
        "active"
    } else {
        "cancelled"
    }
}

/// Full detail for one order.
pub fn render_order(order: &Order) -> String {
    let costs = order.costs();
    let tax = order.tax_rate();
    let product = order.product();

    let mut out = String::new();
    out.push_str(&format!(
        "Order #{}  {}\n",
        order.order_number(),
        order.customer_name()
    ));
    out.push_str(&format!(
        "  Delivery:  {}   Created: {}   Status: {}\n",
        format_date(order.delivery_date()),
        format_date(order.creation_date()),
        status(order)
    ));
    out.push_str(&format!(
        "  State:     {} ({}) {}%\n",
        tax.state_code, tax.state_name, tax.rate_percent
    ));
    out.push_str(&format!(
        "  Product:   {}  {} sq ft @ {} material / {} labor\n",
        product.product_type,
        order.area(),
        product.cost_per_square_foot,
        product.labor_cost_per_square_foot
    ));
    out.push_str(&format!("  Material:  ${}\n", costs.material));
    out.push_str(&format!("  Labor:     ${}\n", costs.labor));
    out.push_str(&format!("  Tax:       ${}\n", costs.tax));
    out.push_str(&format!("  Total:     ${}\n", costs.total));
    out
}

/// One row per order under a heading.
pub fn render_order_table(title: &str, orders: &[Order]) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&format!(
        "{:>6}  {:<24} {:<5} {:<10} {:>9} {:>11}  {}\n",
        "#", "Customer", "State", "Product", "Area", "Total", "Status"
    ));
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    for order in orders {
        out.push_str(&format!(
            "{:>6}  {:<24} {:<5} {:<10} {:>9} {:>11}  {}\n",
            order.order_number().to_string(),
            truncate(order.customer_name(), 24),
            order.tax_rate().state_code,
            order.product().product_type,
            order.area().to_string(),
            format!("${}", order.costs().total),
            status(order)
        ));
    }
    out
}

pub fn render_day(date: NaiveDate, orders: &[Order]) -> String {
    render_order_table(&format!("Orders for {}", format_date(date)), orders)
}

pub fn render_export(backup: &Path, orders: &[Order]) -> String {
    let mut out = render_order_table(
        &format!("Exported {} active orders to {}", orders.len(), backup.display()),
        orders,
    );
    if orders.is_empty() {
        out.push_str("(no active orders)\n");
    }
    out
}

pub fn render_products(products: &ProductCatalog) -> String {
    let mut out = format!("{:<12} {:>10} {:>10}\n", "Product", "Cost/sqft", "Labor/sqft");
    for product in products.iter() {
        out.push_str(&format!(
            "{:<12} {:>10} {:>10}\n",
            product.product_type,
            product.cost_per_square_foot.to_string(),
            product.labor_cost_per_square_foot.to_string()
        ));
    }
    out
}

pub fn render_taxes(taxes: &TaxCatalog) -> String {
    let mut out = format!("{:<6} {:<16} {:>8}\n", "State", "Name", "Rate %");
    for rate in taxes.iter() {
        out.push_str(&format!(
            "{:<6} {:<16} {:>8}\n",
            rate.state_code,
            rate.state_name,
            rate.rate_percent.to_string()
        ));
    }
    out
}

pub fn render_init(root: &Path, report: &InitReport) -> String {
    let mut out = format!("Data directory {}\n", root.display());
    for path in &report.created {
        out.push_str(&format!("  created  {}\n", path.display()));
    }
    for path in &report.existing {
        out.push_str(&format!("  exists   {}\n", path.display()));
    }
    out
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let mut cut: String = value.chars().take(width.saturating_sub(1)).collect();
        cut.push('~');
        cut
    }
}
