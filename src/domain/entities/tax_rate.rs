//! Tax rate entity

use rust_decimal::Decimal;
use serde::Serialize;

/// Sales tax for one state. `rate_percent` is a whole-number percentage,
/// so `9.25` means 9.25%.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxRate {
    pub state_code: String,
    pub state_name: String,
    pub rate_percent: Decimal,
}

impl TaxRate {
    pub fn new(
        state_code: impl Into<String>,
        state_name: impl Into<String>,
        rate_percent: Decimal,
    ) -> Self {
        Self {
            state_code: state_code.into(),
            state_name: state_name.into(),
            rate_percent,
        }
    }
}
