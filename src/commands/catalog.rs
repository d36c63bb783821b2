//! Reference data and counter queries

use anyhow::Result;

use flooring::OrderService;

use crate::ui::json;
use crate::ui::views::orders::{render_products, render_taxes};

pub fn cmd_products(service: &OrderService, json_output: bool) -> Result<()> {
    let products = service.product_catalog();
    if json_output {
        let items: Vec<_> = products.iter().collect();
        json::emit(serde_json::json!({
            "type": "products",
            "count": items.len(),
            "products": items,
        }))?;
        return Ok(());
    }
    print!("{}", render_products(products));
    Ok(())
}

pub fn cmd_taxes(service: &OrderService, json_output: bool) -> Result<()> {
    let taxes = service.tax_catalog();
    if json_output {
        let items: Vec<_> = taxes.iter().collect();
        json::emit(serde_json::json!({
            "type": "taxes",
            "count": items.len(),
            "taxes": items,
        }))?;
        return Ok(());
    }
    print!("{}", render_taxes(taxes));
    Ok(())
}

pub fn cmd_next_number(service: &OrderService, json_output: bool) -> Result<()> {
    let next = service.next_order_number()?;
    if json_output {
        json::emit(serde_json::json!({
            "type": "next_number",
            "next": next,
        }))?;
        return Ok(());
    }
    println!("{}", next);
    Ok(())
}
