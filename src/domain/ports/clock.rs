//! Clock port - source of "today" for creation dates and audit lines

use chrono::NaiveDate;

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
