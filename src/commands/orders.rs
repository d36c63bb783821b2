//! Order command handlers
//!
//! Thin wrappers over `OrderService`: each parses nothing itself, calls one
//! or two service operations and renders the result as text or JSON.

use std::path::Path;

use anyhow::{bail, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use flooring::domain::value_objects::format_date;
use flooring::{Order, OrderDraft, OrderEdit, OrderNumber, OrderService};

use crate::ui::json;
use crate::ui::views::orders::{render_day, render_export, render_order};

pub fn cmd_list(service: &OrderService, date: NaiveDate, json_output: bool) -> Result<()> {
    let orders = match service.list_orders(date) {
        Ok(orders) => orders,
        Err(e) if e.is_empty_result() => Vec::new(),
        Err(e) => return Err(e.into()),
    };

    if json_output {
        json::emit(serde_json::json!({
            "type": "orders",
            "date": date,
            "count": orders.len(),
            "orders": orders,
        }))?;
        return Ok(());
    }

    if orders.is_empty() {
        println!("no orders for {}", format_date(date));
        return Ok(());
    }
    print!("{}", render_day(date, &orders));
    Ok(())
}

pub fn cmd_show(
    service: &OrderService,
    date: NaiveDate,
    number: OrderNumber,
    json_output: bool,
) -> Result<()> {
    let order = service.get_order(date, number)?;
    emit_order("order", None, &order, json_output)
}

pub fn cmd_create(
    service: &OrderService,
    draft: OrderDraft,
    dry_run: bool,
    json_output: bool,
) -> Result<()> {
    if dry_run {
        let preview = service.preview_order(&draft)?;
        return emit_order("order_preview", Some("Preview (not saved)"), &preview, json_output);
    }

    let order = service.create_order(&draft)?;
    let heading = format!("Created order #{}", order.order_number());
    emit_order("order_created", Some(&heading), &order, json_output)
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_edit(
    service: &OrderService,
    date: NaiveDate,
    number: OrderNumber,
    customer: Option<String>,
    state: Option<String>,
    product: Option<String>,
    area: Option<Decimal>,
    dry_run: bool,
    json_output: bool,
) -> Result<()> {
    let edit = OrderEdit {
        customer_name: customer,
        state_code: state,
        product_type: product,
        area,
    };
    if edit.is_empty() {
        bail!("nothing to change: pass --customer, --state, --product or --area");
    }

    let current = service.get_current_order(date, number)?;
    let revised = service.revise_order(&current, &edit)?;

    if dry_run {
        return emit_order("order_preview", Some("Preview (not saved)"), &revised, json_output);
    }

    service.edit_order(&revised)?;
    let heading = format!("Updated order #{}", revised.order_number());
    emit_order("order_updated", Some(&heading), &revised, json_output)
}

pub fn cmd_cancel(
    service: &OrderService,
    date: NaiveDate,
    number: OrderNumber,
    json_output: bool,
) -> Result<()> {
    let current = service.get_current_order(date, number)?;
    let cancelled = service.cancel_order(current)?;
    let heading = format!("Cancelled order #{}", cancelled.order_number());
    emit_order("order_cancelled", Some(&heading), &cancelled, json_output)
}

pub fn cmd_export(service: &OrderService, backup: &Path, json_output: bool) -> Result<()> {
    let orders = service.export_orders()?;

    if json_output {
        json::emit(serde_json::json!({
            "type": "export",
            "backup": backup.display().to_string(),
            "count": orders.len(),
            "orders": orders,
        }))?;
        return Ok(());
    }

    print!("{}", render_export(backup, &orders));
    Ok(())
}

fn emit_order(kind: &str, heading: Option<&str>, order: &Order, json_output: bool) -> Result<()> {
    if json_output {
        json::emit(serde_json::json!({
            "type": kind,
            "order": order,
        }))?;
        return Ok(());
    }

    if let Some(heading) = heading {
        println!("{}", heading);
    }
    print!("{}", render_order(order));
    Ok(())
}
