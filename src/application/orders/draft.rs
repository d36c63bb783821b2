//! Order inputs and booking policy

use chrono::NaiveDate;

use crate::domain::value_objects::Money;

/// What a customer asks for; number, creation date and costs are filled in
/// by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub delivery_date: NaiveDate,
    pub customer_name: String,
    pub state_code: String,
    pub product_type: String,
    pub area: Money,
}

/// Changes to an existing order. `None` keeps the current value; so does a
/// blank customer name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderEdit {
    pub customer_name: Option<String>,
    pub state_code: Option<String>,
    pub product_type: Option<String>,
    pub area: Option<Money>,
}

impl OrderEdit {
    pub fn is_empty(&self) -> bool {
        self.customer_name
            .as_deref()
            .map_or(true, |name| name.trim().is_empty())
            && self.state_code.is_none()
            && self.product_type.is_none()
            && self.area.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderPolicy {
    /// Inclusive, square feet
    pub min_area: Money,
    pub max_lead_years: u32,
}

impl Default for OrderPolicy {
    fn default() -> Self {
        Self {
            min_area: Money::from(100),
            max_lead_years: 5,
        }
    }
}
