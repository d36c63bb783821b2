//! Presentation Layer
//!
//! Wiring between configuration, infrastructure and the order use cases.
//!
//! ## Usage
//!
//! ```ignore
//! use flooring::presentation::factory;
//!
//! let service = factory::create_order_service(&config)?;
//! let orders = service.list_orders(date)?;
//! ```

pub mod factory;

pub use factory::{create_order_service, create_order_service_with_clock};
