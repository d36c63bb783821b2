//! Fixed-point currency helpers
//!
//! All money and area values are `rust_decimal::Decimal` kept at exactly two
//! decimal places. Rounding is half-up (away from zero for the non-negative
//! values this crate handles).

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency and area amounts
pub type Money = Decimal;

/// Largest area, price or tax rate accepted. Cost products of values up to
/// this bound stay well inside `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Round half-up to two places and pin the scale at two, so `300` renders as `300.00`.
pub fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}
