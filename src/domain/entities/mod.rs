//! Domain Entities
//!
//! - `Product` / `TaxRate` - immutable reference rows loaded at startup
//! - `ProductCatalog` / `TaxCatalog` - keyed snapshots of those rows
//! - `Order` - a costed order with a snapshot of its product and tax rate

mod catalog;
mod order;
mod product;
mod tax_rate;

pub use catalog::{Catalog, ProductCatalog, TaxCatalog};
pub use order::Order;
pub use product::Product;
pub use tax_rate::TaxRate;
