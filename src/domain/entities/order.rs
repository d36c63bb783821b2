//! Order entity
//!
//! An order owns by-value copies of the product and tax rate it was costed
//! with, so later catalog changes never alter a stored order. Order number and
//! delivery date are fixed at creation; the delivery date also picks the bucket
//! the order is stored in.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::{Product, TaxRate};
use crate::domain::services::{calculate_costs, OrderCosts};
use crate::domain::value_objects::{round2, Money, OrderNumber};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    order_number: OrderNumber,
    creation_date: NaiveDate,
    delivery_date: NaiveDate,
    customer_name: String,
    tax_rate: TaxRate,
    product: Product,
    area: Money,
    costs: OrderCosts,
    active: bool,
}

impl Order {
    /// New active order with costs computed from the snapshot.
    pub fn new(
        order_number: OrderNumber,
        creation_date: NaiveDate,
        delivery_date: NaiveDate,
        customer_name: impl Into<String>,
        tax_rate: TaxRate,
        product: Product,
        area: Money,
    ) -> Self {
        let area = round2(area);
        let costs = calculate_costs(area, &product, &tax_rate);
        Self {
            order_number,
            creation_date,
            delivery_date,
            customer_name: customer_name.into(),
            tax_rate,
            product,
            area,
            costs,
            active: true,
        }
    }

    /// Restore cost fields exactly as they were stored.
    pub(crate) fn with_stored_costs(mut self, costs: OrderCosts) -> Self {
        self.costs = costs;
        self
    }

    pub(crate) fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub(crate) fn with_order_number(mut self, order_number: OrderNumber) -> Self {
        self.order_number = order_number;
        self
    }

    pub fn order_number(&self) -> OrderNumber {
        self.order_number
    }

    pub fn creation_date(&self) -> NaiveDate {
        self.creation_date
    }

    pub fn delivery_date(&self) -> NaiveDate {
        self.delivery_date
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn tax_rate(&self) -> &TaxRate {
        &self.tax_rate
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn area(&self) -> Money {
        self.area
    }

    pub fn costs(&self) -> &OrderCosts {
        &self.costs
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_customer_name(&mut self, customer_name: impl Into<String>) {
        self.customer_name = customer_name.into();
    }

    /// Replace the tax snapshot. Costs are stale until `recalculate`.
    pub fn set_tax_rate(&mut self, tax_rate: TaxRate) {
        self.tax_rate = tax_rate;
    }

    /// Replace the product snapshot. Costs are stale until `recalculate`.
    pub fn set_product(&mut self, product: Product) {
        self.product = product;
    }

    /// Costs are stale until `recalculate`.
    pub fn set_area(&mut self, area: Money) {
        self.area = round2(area);
    }

    pub fn recalculate(&mut self) {
        self.costs = calculate_costs(self.area, &self.product, &self.tax_rate);
    }

    /// True when the stored costs equal a fresh calculation from the snapshot.
    pub fn costs_are_current(&self) -> bool {
        self.costs == calculate_costs(self.area, &self.product, &self.tax_rate)
    }

    /// Mark cancelled. Cancelled orders are kept, never deleted.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}
