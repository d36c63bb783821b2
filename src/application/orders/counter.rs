//! Order counter
//!
//! The single in-memory copy of the next order number. It is recovered from
//! the ledger once, advanced on every reservation, and persisted explicitly.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::domain::ports::OrderLedger;
use crate::domain::value_objects::OrderNumber;
use crate::error::{OrderError, OrderResult};

pub struct OrderCounter {
    ledger: Arc<dyn OrderLedger>,
    // one past u32::MAX marks the counter as exhausted
    next: AtomicU64,
}

impl OrderCounter {
    pub fn recover(ledger: Arc<dyn OrderLedger>) -> OrderResult<Self> {
        let next = ledger.recover_next_order_number()?;
        Ok(Self {
            ledger,
            next: AtomicU64::new(u64::from(next.get())),
        })
    }

    /// Number the next reservation will get.
    pub fn peek(&self) -> OrderResult<OrderNumber> {
        issuable(self.next.load(Ordering::SeqCst))
    }

    /// Reserve the next number. A reserved number is never handed out again
    /// by this counter, whether or not the order using it is stored.
    pub fn advance(&self) -> OrderResult<OrderNumber> {
        let reserved = self
            .next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                issuable(n).ok().map(|_| n + 1)
            })
            .unwrap_or_else(|n| n);
        issuable(reserved)
    }

    /// Record `last_issued` in the ledger so the next recovery resumes after it.
    pub fn persist(&self, last_issued: OrderNumber) -> OrderResult<()> {
        self.ledger.record_counter(last_issued)
    }
}

fn issuable(next: u64) -> OrderResult<OrderNumber> {
    u32::try_from(next)
        .map(OrderNumber::new)
        .map_err(|_| OrderError::invalid("order numbers exhausted; no number left to issue"))
}
