//! Order Service
//!
//! Use cases over the order store, the ledger and the cost engine: list,
//! create, edit, cancel and export. A cancelled order is never returned as a
//! "current" order; it is only visible through listing and export (which
//! filters it out).

use std::sync::Arc;

use chrono::{Months, NaiveDate};
use tracing::{info, warn};

use crate::domain::entities::{Catalog, Order, Product, ProductCatalog, TaxCatalog, TaxRate};
use crate::domain::ports::{Clock, OrderLedger, OrderRepository};
use crate::domain::services::{calculate_costs, OrderCosts};
use crate::domain::value_objects::{round2, Money, OrderNumber, MAX_AMOUNT};
use crate::error::{OrderError, OrderResult};

use super::counter::OrderCounter;
use super::draft::{OrderDraft, OrderEdit, OrderPolicy};

pub struct OrderService {
    store: Arc<dyn OrderRepository>,
    ledger: Arc<dyn OrderLedger>,
    catalog: Arc<Catalog>,
    clock: Arc<dyn Clock>,
    counter: OrderCounter,
    policy: OrderPolicy,
}

impl OrderService {
    /// Recovers the order counter from the ledger; fails with
    /// `LedgerUnavailable` when there is no ledger to recover from.
    pub fn new(
        store: Arc<dyn OrderRepository>,
        ledger: Arc<dyn OrderLedger>,
        catalog: Arc<Catalog>,
        clock: Arc<dyn Clock>,
        policy: OrderPolicy,
    ) -> OrderResult<Self> {
        let counter = OrderCounter::recover(ledger.clone())?;
        Ok(Self {
            store,
            ledger,
            catalog,
            clock,
            counter,
            policy,
        })
    }

    pub fn policy(&self) -> OrderPolicy {
        self.policy
    }

    pub fn product_catalog(&self) -> &ProductCatalog {
        &self.catalog.products
    }

    pub fn tax_catalog(&self) -> &TaxCatalog {
        &self.catalog.taxes
    }

    /// Fails with `InvalidOrder` once every order number has been issued.
    pub fn next_order_number(&self) -> OrderResult<OrderNumber> {
        self.counter.peek()
    }

    pub fn calculate_costs(&self, order: &Order) -> OrderCosts {
        calculate_costs(order.area(), order.product(), order.tax_rate())
    }

    /// Every order delivered on `date`, cancelled ones included.
    pub fn list_orders(&self, date: NaiveDate) -> OrderResult<Vec<Order>> {
        self.store.list_by_date(date)
    }

    /// Any stored order, cancelled or not.
    pub fn get_order(&self, date: NaiveDate, order_number: OrderNumber) -> OrderResult<Order> {
        self.store.get(date, order_number)
    }

    /// Fetch an order for editing or cancelling.
    pub fn get_current_order(
        &self,
        date: NaiveDate,
        order_number: OrderNumber,
    ) -> OrderResult<Order> {
        let order = self.get_order(date, order_number)?;
        if !order.is_active() {
            return Err(OrderError::OrderAlreadyCancelled { order_number });
        }
        Ok(order)
    }

    /// The order `create_order` would store, without reserving its number.
    pub fn preview_order(&self, draft: &OrderDraft) -> OrderResult<Order> {
        self.build_order(self.counter.peek()?, draft)
    }

    pub fn create_order(&self, draft: &OrderDraft) -> OrderResult<Order> {
        // Rejected drafts must not consume a number.
        self.build_order(self.counter.peek()?, draft)?;

        let number = self.counter.advance()?;
        let order = self.build_order(number, draft)?;

        let stored = self
            .store
            .insert(&order)
            .and_then(|()| self.ledger.append_created(&order));
        if let Err(e) = stored {
            warn!(order_number = %number, error = %e, "create failed; recording counter so the number is not reused");
            if let Err(persist) = self.counter.persist(number) {
                warn!(order_number = %number, error = %persist, "could not record counter after failed create");
            }
            return Err(e);
        }
        self.counter.persist(number)?;

        info!(
            order_number = %number,
            delivery_date = %order.delivery_date(),
            total = %order.costs().total,
            "order created"
        );
        Ok(order)
    }

    /// Apply `edit` to a copy of `order`: product and tax are re-read from the
    /// catalog and costs recomputed. Nothing is stored until `edit_order`.
    pub fn revise_order(&self, order: &Order, edit: &OrderEdit) -> OrderResult<Order> {
        if !order.is_active() {
            return Err(OrderError::OrderAlreadyCancelled {
                order_number: order.order_number(),
            });
        }

        let mut revised = order.clone();
        if let Some(name) = edit.customer_name.as_deref() {
            if !name.trim().is_empty() {
                revised.set_customer_name(validate_customer_name(name)?);
            }
        }

        let state_code = edit
            .state_code
            .as_deref()
            .unwrap_or(&order.tax_rate().state_code);
        match self.catalog.taxes.find(state_code) {
            Some(rate) => revised.set_tax_rate(rate.clone()),
            None if edit.state_code.is_some() => return Err(unknown_state(state_code)),
            None => {}
        }

        let product_type = edit
            .product_type
            .as_deref()
            .unwrap_or(&order.product().product_type);
        match self.catalog.products.find(product_type) {
            Some(product) => revised.set_product(product.clone()),
            None if edit.product_type.is_some() => return Err(unknown_product(product_type)),
            None => {}
        }

        if let Some(area) = edit.area {
            revised.set_area(self.validate_area(area)?);
        }

        revised.recalculate();
        Ok(revised)
    }

    /// Persist an edited order. Costs must already be recalculated.
    pub fn edit_order(&self, order: &Order) -> OrderResult<()> {
        if order.is_active() && !order.costs_are_current() {
            return Err(OrderError::invalid(format!(
                "order {} has stale costs; recalculate before saving",
                order.order_number()
            )));
        }
        self.save_edit(order)
    }

    /// Cancellation is an edit that clears `active`.
    pub fn cancel_order(&self, mut order: Order) -> OrderResult<Order> {
        order.cancel();
        self.save_edit(&order)?;
        Ok(order)
    }

    /// Write all active orders to the backup file and return them.
    pub fn export_orders(&self) -> OrderResult<Vec<Order>> {
        self.store.export_active()
    }

    fn save_edit(&self, order: &Order) -> OrderResult<()> {
        self.store.update(order)?;
        self.ledger.append_edited(order)?;
        info!(
            order_number = %order.order_number(),
            delivery_date = %order.delivery_date(),
            active = order.is_active(),
            "order updated"
        );
        Ok(())
    }

    fn build_order(&self, number: OrderNumber, draft: &OrderDraft) -> OrderResult<Order> {
        let today = self.clock.today();
        self.validate_delivery_date(today, draft.delivery_date)?;
        let customer_name = validate_customer_name(&draft.customer_name)?;
        let tax_rate = self.find_tax_rate(&draft.state_code)?;
        let product = self.find_product(&draft.product_type)?;
        let area = self.validate_area(draft.area)?;

        Ok(Order::new(
            number,
            today,
            draft.delivery_date,
            customer_name,
            tax_rate,
            product,
            area,
        ))
    }

    fn validate_delivery_date(&self, today: NaiveDate, delivery: NaiveDate) -> OrderResult<()> {
        if delivery <= today {
            return Err(OrderError::invalid(format!(
                "delivery date {} must be after today ({})",
                delivery, today
            )));
        }
        let horizon = today
            .checked_add_months(Months::new(self.policy.max_lead_years.saturating_mul(12)))
            .unwrap_or(NaiveDate::MAX);
        if delivery > horizon {
            return Err(OrderError::invalid(format!(
                "delivery date {} is more than {} years ahead",
                delivery, self.policy.max_lead_years
            )));
        }
        Ok(())
    }

    fn validate_area(&self, area: Money) -> OrderResult<Money> {
        if area > MAX_AMOUNT {
            return Err(OrderError::invalid(format!(
                "area {} exceeds the maximum of {} sq ft",
                area, MAX_AMOUNT
            )));
        }
        let area = round2(area);
        if area < self.policy.min_area {
            return Err(OrderError::invalid(format!(
                "area {} is below the minimum of {} sq ft",
                area, self.policy.min_area
            )));
        }
        Ok(area)
    }

    fn find_tax_rate(&self, state_code: &str) -> OrderResult<TaxRate> {
        self.catalog
            .taxes
            .find(state_code)
            .cloned()
            .ok_or_else(|| unknown_state(state_code))
    }

    fn find_product(&self, product_type: &str) -> OrderResult<Product> {
        self.catalog
            .products
            .find(product_type)
            .cloned()
            .ok_or_else(|| unknown_product(product_type))
    }
}

fn validate_customer_name(name: &str) -> OrderResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(OrderError::invalid("customer name must not be blank"));
    }
    if name.contains(',') || name.contains('\n') || name.contains('\r') {
        return Err(OrderError::invalid(
            "customer name must not contain commas or line breaks",
        ));
    }
    Ok(name.to_string())
}

fn unknown_state(code: &str) -> OrderError {
    OrderError::invalid(format!("we do not sell in state '{}'", code))
}

fn unknown_product(product_type: &str) -> OrderError {
    OrderError::invalid(format!("unknown product '{}'", product_type))
}
