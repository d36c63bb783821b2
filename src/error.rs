//! Error types for the order book
//!
//! Uses `thiserror` for library errors. Each variant maps to one failure kind
//! callers are expected to match on; `anyhow` is only used by the binary.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::value_objects::OrderNumber;

/// Result type alias for order book operations
pub type OrderResult<T> = Result<T, OrderError>;

/// Main error type for order book operations
#[derive(Error, Debug)]
pub enum OrderError {
    /// Products/Taxes reference file missing or malformed
    #[error("reference data unavailable: {path}: {reason}")]
    ReferenceDataUnavailable { path: PathBuf, reason: String },

    /// Audit log missing, so the order counter cannot be recovered
    #[error("order ledger unavailable: {path}: {reason}")]
    LedgerUnavailable { path: PathBuf, reason: String },

    /// No bucket file exists for the date (normal "no orders that day" signal).
    /// `date` is `None` when an export found no bucket files at all.
    #[error("{}", missing_bucket_message(.date.as_ref(), .path))]
    BucketNotFound {
        date: Option<NaiveDate>,
        path: PathBuf,
    },

    /// Bucket exists but holds no row with this number
    #[error("there is no order number {order_number} recorded on {}", .date.format("%b %-d, %Y"))]
    OrderNotFound {
        date: NaiveDate,
        order_number: OrderNumber,
    },

    /// Cancelled orders cannot be fetched for edit/cancel
    #[error("order number {order_number} has already been cancelled")]
    OrderAlreadyCancelled { order_number: OrderNumber },

    /// A write or rewrite of a data file failed
    #[error("could not persist {path}: {source}")]
    PersistenceFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored row could not be decoded
    #[error("corrupt record in {path}:{line}: {message}")]
    CorruptRecord {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// The same order number was found in two different buckets
    #[error("order number {order_number} appears in both {first} and {second}")]
    DuplicateOrderNumber {
        order_number: OrderNumber,
        first: PathBuf,
        second: PathBuf,
    },

    /// Draft or edit rejected by the booking rules
    #[error("invalid order: {reason}")]
    InvalidOrder { reason: String },
}

impl OrderError {
    pub(crate) fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OrderError::PersistenceFailure {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        OrderError::InvalidOrder {
            reason: reason.into(),
        }
    }

    /// Startup failures (missing catalog or ledger) are fatal; everything
    /// else is reported to the user and the current command aborted.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            OrderError::ReferenceDataUnavailable { .. } | OrderError::LedgerUnavailable { .. }
        )
    }

    /// "Nothing stored yet" conditions that callers usually render as an empty result.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, OrderError::BucketNotFound { .. })
    }
}

fn missing_bucket_message(date: Option<&NaiveDate>, path: &std::path::Path) -> String {
    match date {
        Some(date) => format!("there are no orders on {}", date.format("%b %-d, %Y")),
        None => format!("no order files found in {}", path.display()),
    }
}
