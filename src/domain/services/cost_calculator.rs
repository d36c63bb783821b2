//! Cost calculation
//!
//! Every intermediate value is rounded half-up to two places before it feeds
//! the next step, and the tax percentage is turned into a two-place fraction
//! *before* multiplying. Stored orders were costed this way, so changing the
//! rounding order would shift the last cent of `tax` and `total`.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::entities::{Product, TaxRate};
use crate::domain::value_objects::{round2, Money};

/// Derived cost fields of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderCosts {
    pub material: Money,
    pub labor: Money,
    pub tax: Money,
    pub total: Money,
}

/// Inputs at or below `MAX_AMOUNT` never overflow; callers bound area, prices
/// and rate before they get here.
pub fn calculate_costs(area: Money, product: &Product, tax_rate: &TaxRate) -> OrderCosts {
    let material = round2(area * product.cost_per_square_foot);
    let labor = round2(area * product.labor_cost_per_square_foot);
    let rate_fraction = round2(tax_rate.rate_percent / Decimal::ONE_HUNDRED);
    let tax = round2((material + labor) * rate_fraction);
    let total = round2(material + labor + tax);

    OrderCosts {
        material,
        labor,
        tax,
        total,
    }
}
