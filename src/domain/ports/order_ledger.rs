//! OrderLedger port - audit trail and durable order counter
//!
//! One append-only stream carries both lifecycle lines and counter snapshots.
//! Appends never rewrite earlier content.

use std::fmt;

use crate::domain::entities::Order;
use crate::domain::value_objects::OrderNumber;
use crate::error::OrderResult;

/// Lifecycle events recorded per order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    Created,
    Edited,
    Cancelled,
}

impl LifecycleEvent {
    /// Edited and cancelled share one write path; the verb follows `active`.
    pub fn for_edit(order: &Order) -> Self {
        if order.is_active() {
            LifecycleEvent::Edited
        } else {
            LifecycleEvent::Cancelled
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            LifecycleEvent::Created => "new order recorded today",
            LifecycleEvent::Edited => "order update",
            LifecycleEvent::Cancelled => "order cancelled",
        };
        write!(f, "{}", verb)
    }
}

pub trait OrderLedger {
    /// Last recorded counter plus one (`1` for a ledger with no snapshot).
    ///
    /// `LedgerUnavailable` when the ledger does not exist or its last counter
    /// is `u32::MAX`.
    fn recover_next_order_number(&self) -> OrderResult<OrderNumber>;

    fn append_created(&self, order: &Order) -> OrderResult<()>;

    /// Renders "order update" or "order cancelled" depending on `order.is_active()`.
    fn append_edited(&self, order: &Order) -> OrderResult<()>;

    fn append_cancelled(&self, order: &Order) -> OrderResult<()> {
        self.append_edited(order)
    }

    /// Record `last_issued` as the current counter snapshot.
    fn record_counter(&self, last_issued: OrderNumber) -> OrderResult<()>;
}
