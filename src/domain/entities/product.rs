//! Product entity

use serde::Serialize;

use crate::domain::value_objects::Money;

/// A flooring product and its per-square-foot rates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub product_type: String,
    pub cost_per_square_foot: Money,
    pub labor_cost_per_square_foot: Money,
}

impl Product {
    pub fn new(
        product_type: impl Into<String>,
        cost_per_square_foot: Money,
        labor_cost_per_square_foot: Money,
    ) -> Self {
        Self {
            product_type: product_type.into(),
            cost_per_square_foot,
            labor_cost_per_square_foot,
        }
    }
}
