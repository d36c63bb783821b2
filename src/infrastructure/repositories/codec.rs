//! Row codecs for bucket and backup files
//!
//! Bucket rows (15 columns):
//! `OrderNumber,OrderCreationDate,OrderDate,CustomerName,State,TaxRate,ProductType,Area,`
//! `CostPerSquareFoot,LaborCostPerSquareFoot,MaterialCost,LaborCost,Tax,Total,isActive`
//!
//! Backup rows drop `isActive` (only active orders are exported) and move
//! `OrderDate` to the end. Dates are `MM-dd-yyyy`, amounts keep two places.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::entities::{Order, Product, TaxCatalog, TaxRate};
use crate::domain::services::OrderCosts;
use crate::domain::value_objects::{format_date, parse_date, OrderNumber, MAX_AMOUNT};

pub const DELIMITER: char = ',';

pub const BUCKET_HEADER: &str = "OrderNumber,OrderCreationDate,OrderDate,CustomerName,State,TaxRate,ProductType,Area,CostPerSquareFoot,LaborCostPerSquareFoot,MaterialCost,LaborCost,Tax,Total,isActive";

pub const EXPORT_HEADER: &str = "OrderNumber,OrderCreationDate,CustomerName,State,TaxRate,ProductType,Area,CostPerSquareFoot,LaborCostPerSquareFoot,MaterialCost,LaborCost,Tax,Total,OrderDate";

const BUCKET_COLUMNS: usize = 15;

/// Outcome of decoding a row whose state code may be missing from the catalog
#[derive(Debug)]
pub struct DecodedRow {
    pub order: Order,
    /// The state code had no catalog entry; its code stands in for the name.
    pub unknown_state: bool,
}

pub fn encode_bucket_row(order: &Order) -> String {
    let costs = order.costs();
    [
        order.order_number().to_string(),
        format_date(order.creation_date()),
        format_date(order.delivery_date()),
        order.customer_name().to_string(),
        order.tax_rate().state_code.clone(),
        order.tax_rate().rate_percent.to_string(),
        order.product().product_type.clone(),
        order.area().to_string(),
        order.product().cost_per_square_foot.to_string(),
        order.product().labor_cost_per_square_foot.to_string(),
        costs.material.to_string(),
        costs.labor.to_string(),
        costs.tax.to_string(),
        costs.total.to_string(),
        order.is_active().to_string(),
    ]
    .join(",")
}

pub fn encode_export_row(order: &Order) -> String {
    let costs = order.costs();
    [
        order.order_number().to_string(),
        format_date(order.creation_date()),
        order.customer_name().to_string(),
        order.tax_rate().state_code.clone(),
        order.tax_rate().rate_percent.to_string(),
        order.product().product_type.clone(),
        order.area().to_string(),
        order.product().cost_per_square_foot.to_string(),
        order.product().labor_cost_per_square_foot.to_string(),
        costs.material.to_string(),
        costs.labor.to_string(),
        costs.tax.to_string(),
        costs.total.to_string(),
        format_date(order.delivery_date()),
    ]
    .join(",")
}

/// Header plus one row per order, newline-terminated.
pub fn encode_bucket<'a>(orders: impl IntoIterator<Item = &'a Order>) -> String {
    encode_file(BUCKET_HEADER, orders, encode_bucket_row)
}

pub fn encode_export<'a>(orders: impl IntoIterator<Item = &'a Order>) -> String {
    encode_file(EXPORT_HEADER, orders, encode_export_row)
}

fn encode_file<'a>(
    header: &str,
    orders: impl IntoIterator<Item = &'a Order>,
    encode_row: fn(&Order) -> String,
) -> String {
    let mut out = String::from(header);
    out.push('\n');
    for order in orders {
        out.push_str(&encode_row(order));
        out.push('\n');
    }
    out
}

/// Decode one bucket row. The state name is not stored, so it comes from
/// `taxes`; every price and rate comes from the row itself.
pub fn decode_bucket_row(line: &str, taxes: &TaxCatalog) -> Result<DecodedRow, String> {
    let fields: Vec<&str> = line.trim_end_matches('\r').split(DELIMITER).collect();
    if fields.len() != BUCKET_COLUMNS {
        return Err(format!(
            "expected {} columns, found {}",
            BUCKET_COLUMNS,
            fields.len()
        ));
    }

    let order_number = fields[0]
        .parse::<OrderNumber>()
        .map_err(|e| format!("OrderNumber '{}': {}", fields[0], e))?;
    let creation_date = date_field("OrderCreationDate", fields[1])?;
    let delivery_date = date_field("OrderDate", fields[2])?;
    let customer_name = fields[3];
    let state_code = fields[4].trim();
    let rate_percent = amount_field("TaxRate", fields[5])?;
    let product_type = fields[6].trim();
    let area = amount_field("Area", fields[7])?;
    let cost_per_square_foot = amount_field("CostPerSquareFoot", fields[8])?;
    let labor_cost_per_square_foot = amount_field("LaborCostPerSquareFoot", fields[9])?;
    let costs = OrderCosts {
        material: decimal_field("MaterialCost", fields[10])?,
        labor: decimal_field("LaborCost", fields[11])?,
        tax: decimal_field("Tax", fields[12])?,
        total: decimal_field("Total", fields[13])?,
    };
    let active = bool_field("isActive", fields[14])?;

    let known_state = taxes.get(state_code);
    let state_name = known_state
        .map(|rate| rate.state_name.clone())
        .unwrap_or_else(|| state_code.to_string());

    let order = Order::new(
        order_number,
        creation_date,
        delivery_date,
        customer_name,
        TaxRate::new(state_code, state_name, rate_percent),
        Product::new(product_type, cost_per_square_foot, labor_cost_per_square_foot),
        area,
    )
    .with_stored_costs(costs)
    .with_active(active);

    Ok(DecodedRow {
        order,
        unknown_state: known_state.is_none(),
    })
}

fn date_field(name: &str, value: &str) -> Result<chrono::NaiveDate, String> {
    parse_date(value).ok_or_else(|| format!("{} '{}' is not MM-dd-yyyy", name, value))
}

fn decimal_field(name: &str, value: &str) -> Result<Decimal, String> {
    Decimal::from_str(value.trim()).map_err(|e| format!("{} '{}': {}", name, value, e))
}

/// A cost input; bounded so recomputing the row's costs cannot overflow.
fn amount_field(name: &str, value: &str) -> Result<Decimal, String> {
    let amount = decimal_field(name, value)?;
    if amount > MAX_AMOUNT {
        return Err(format!("{} '{}' exceeds the maximum of {}", name, value, MAX_AMOUNT));
    }
    Ok(amount)
}

fn bool_field(name: &str, value: &str) -> Result<bool, String> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(format!("{} '{}' is not true/false", name, value))
    }
}
