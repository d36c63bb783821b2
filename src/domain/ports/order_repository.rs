//! OrderRepository port - date-bucketed order storage
//!
//! One bucket per delivery date. Inactive (cancelled) orders stay in their
//! bucket; nothing is ever physically deleted.

use chrono::NaiveDate;

use crate::domain::entities::Order;
use crate::domain::value_objects::OrderNumber;
use crate::error::{OrderError, OrderResult};

pub trait OrderRepository {
    /// Every order in the bucket, ascending by order number.
    ///
    /// `BucketNotFound` when nothing was ever stored for `date`.
    fn list_by_date(&self, date: NaiveDate) -> OrderResult<Vec<Order>>;

    /// `BucketNotFound` when the bucket is missing, `OrderNotFound` when the
    /// bucket exists without that number.
    fn get(&self, date: NaiveDate, order_number: OrderNumber) -> OrderResult<Order> {
        self.list_by_date(date)?
            .into_iter()
            .find(|order| order.order_number() == order_number)
            .ok_or(OrderError::OrderNotFound { date, order_number })
    }

    /// Append one row to the order's bucket, creating the bucket if needed.
    /// No duplicate check; callers guarantee number uniqueness.
    fn insert(&self, order: &Order) -> OrderResult<()>;

    /// Replace (or add) the row with this order number and rewrite the whole
    /// bucket. `BucketNotFound` when the bucket does not exist.
    fn update(&self, order: &Order) -> OrderResult<()>;

    /// Write every active order across all buckets to the backup file and
    /// return them ascending by order number.
    fn export_active(&self) -> OrderResult<Vec<Order>>;
}
