//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules like costing (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `OrderService` - list, create, edit, cancel and export orders

pub mod orders;

pub use orders::{OrderCounter, OrderDraft, OrderEdit, OrderPolicy, OrderService};
