//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod money;
mod order_date;
mod order_number;

pub use money::{round2, Money, MAX_AMOUNT};
pub use order_date::{format_date, parse_date, parse_user_date, DATE_FORMAT};
pub use order_number::OrderNumber;
