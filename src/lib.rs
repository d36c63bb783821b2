//! Flooring - date-bucketed order book for a flooring business
//!
//! Orders are costed from a product and tax catalog, stored one file per
//! delivery date, and numbered by a counter recovered from an append-only
//! audit log.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{OrderDraft, OrderEdit, OrderPolicy, OrderService};
pub use config::Config;
pub use domain::entities::{Catalog, Order, Product, TaxRate};
pub use domain::services::{calculate_costs, OrderCosts};
pub use domain::value_objects::OrderNumber;
pub use error::{OrderError, OrderResult};
