//! Domain Layer
//!
//! Pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Products, tax rates, catalogs, orders
//! - `value_objects/` - Order numbers, money rounding, date formats
//! - `services/` - The cost calculator
//! - `ports/` - Interfaces implemented by the infrastructure layer

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
