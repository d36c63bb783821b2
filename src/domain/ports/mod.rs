//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod catalog_source;
pub mod clock;
pub mod order_ledger;
pub mod order_repository;

pub use catalog_source::CatalogSource;
pub use clock::Clock;
pub use order_ledger::{LifecycleEvent, OrderLedger};
pub use order_repository::OrderRepository;
