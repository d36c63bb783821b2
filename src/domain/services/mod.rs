//! Domain Services
//!
//! Pure business logic with no I/O.

mod cost_calculator;

pub use cost_calculator::{calculate_costs, OrderCosts};
