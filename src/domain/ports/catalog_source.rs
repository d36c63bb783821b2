//! CatalogSource port - loads the Products and Taxes reference tables
//!
//! Both loads fail with `ReferenceDataUnavailable` when a file is missing or
//! malformed.

use crate::domain::entities::{Catalog, ProductCatalog, TaxCatalog};
use crate::error::OrderResult;

pub trait CatalogSource {
    fn load_products(&self) -> OrderResult<ProductCatalog>;

    fn load_tax_rates(&self) -> OrderResult<TaxCatalog>;

    fn load(&self) -> OrderResult<Catalog> {
        Ok(Catalog::new(self.load_products()?, self.load_tax_rates()?))
    }
}
