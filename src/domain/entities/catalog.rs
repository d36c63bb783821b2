//! Reference catalogs
//!
//! Built once from the reference files and then shared read-only. Lookups of an
//! unknown key return `None`; there is no default product or tax rate.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use super::{Product, TaxRate};

/// Products keyed by product type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCatalog {
    products: BTreeMap<String, Product>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product; returns the rejected product when the key is taken.
    pub fn insert(&mut self, product: Product) -> Result<(), Product> {
        match self.products.entry(product.product_type.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(product);
                Ok(())
            }
            Entry::Occupied(_) => Err(product),
        }
    }

    pub fn get(&self, product_type: &str) -> Option<&Product> {
        self.products.get(product_type)
    }

    /// Exact match first, then ASCII case-insensitive.
    pub fn find(&self, product_type: &str) -> Option<&Product> {
        let wanted = product_type.trim();
        self.get(wanted).or_else(|| {
            self.products
                .values()
                .find(|p| p.product_type.eq_ignore_ascii_case(wanted))
        })
    }

    /// Products sorted by type
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<Product> for ProductCatalog {
    /// Later duplicates are dropped.
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for product in iter {
            let _ = catalog.insert(product);
        }
        catalog
    }
}

/// Tax rates keyed by state code
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxCatalog {
    rates: BTreeMap<String, TaxRate>,
}

impl TaxCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rate; returns the rejected rate when the state code is taken.
    pub fn insert(&mut self, rate: TaxRate) -> Result<(), TaxRate> {
        match self.rates.entry(rate.state_code.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(rate);
                Ok(())
            }
            Entry::Occupied(_) => Err(rate),
        }
    }

    pub fn get(&self, state_code: &str) -> Option<&TaxRate> {
        self.rates.get(state_code)
    }

    /// State codes are matched case-insensitively (`wa` finds `WA`).
    pub fn find(&self, state_code: &str) -> Option<&TaxRate> {
        let wanted = state_code.trim();
        self.get(wanted)
            .or_else(|| self.get(&wanted.to_ascii_uppercase()))
            .or_else(|| {
                self.rates
                    .values()
                    .find(|r| r.state_code.eq_ignore_ascii_case(wanted))
            })
    }

    /// Rates sorted by state code
    pub fn iter(&self) -> impl Iterator<Item = &TaxRate> {
        self.rates.values()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl FromIterator<TaxRate> for TaxCatalog {
    /// Later duplicates are dropped.
    fn from_iter<I: IntoIterator<Item = TaxRate>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for rate in iter {
            let _ = catalog.insert(rate);
        }
        catalog
    }
}

/// Both reference tables, loaded together at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub products: ProductCatalog,
    pub taxes: TaxCatalog,
}

impl Catalog {
    pub fn new(products: ProductCatalog, taxes: TaxCatalog) -> Self {
        Self { products, taxes }
    }
}
