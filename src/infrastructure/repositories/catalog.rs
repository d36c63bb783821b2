//! Delimited Catalog Source
//!
//! Reads `Products.txt` (`ProductType,CostPerSquareFoot,LaborCostPerSquareFoot`)
//! and `Taxes.txt` (`StateCode,StateName,TaxRatePercent`). Each file has one
//! header row; blank lines are ignored.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::entities::{Product, ProductCatalog, TaxCatalog, TaxRate};
use crate::domain::ports::CatalogSource;
use crate::domain::value_objects::{round2, MAX_AMOUNT};
use crate::error::{OrderError, OrderResult};
use crate::infrastructure::fs::LocalFs;

pub const PRODUCTS_HEADER: &str = "ProductType,CostPerSquareFoot,LaborCostPerSquareFoot";
pub const TAXES_HEADER: &str = "State,StateName,TaxRate";

pub struct DelimitedCatalogSource {
    products_path: PathBuf,
    taxes_path: PathBuf,
    fs: LocalFs,
}

impl DelimitedCatalogSource {
    pub fn new(products_path: impl Into<PathBuf>, taxes_path: impl Into<PathBuf>) -> Self {
        Self {
            products_path: products_path.into(),
            taxes_path: taxes_path.into(),
            fs: LocalFs::new(),
        }
    }

    pub fn products_path(&self) -> &Path {
        &self.products_path
    }

    pub fn taxes_path(&self) -> &Path {
        &self.taxes_path
    }

    /// Data rows as (1-based line number, fields), header skipped.
    fn read_rows(&self, path: &Path, columns: usize) -> OrderResult<Vec<(usize, Vec<String>)>> {
        let content = self.fs.read(path).map_err(|e| unavailable(path, e.to_string()))?;

        let mut lines = content.lines().enumerate();
        match lines.next() {
            Some((_, header)) if !header.trim().is_empty() => {}
            _ => return Err(unavailable(path, "missing header row")),
        }

        let mut rows = Vec::new();
        for (index, line) in lines {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<String> = line.split(',').map(|f| f.trim().to_string()).collect();
            if fields.len() != columns {
                return Err(unavailable(
                    path,
                    format!(
                        "line {}: expected {} columns, found {}",
                        index + 1,
                        columns,
                        fields.len()
                    ),
                ));
            }
            rows.push((index + 1, fields));
        }
        Ok(rows)
    }
}

impl CatalogSource for DelimitedCatalogSource {
    fn load_products(&self) -> OrderResult<ProductCatalog> {
        let path = &self.products_path;
        let mut catalog = ProductCatalog::new();

        for (line, fields) in self.read_rows(path, 3)? {
            let product = Product::new(
                fields[0].clone(),
                price(path, line, "CostPerSquareFoot", &fields[1])?,
                price(path, line, "LaborCostPerSquareFoot", &fields[2])?,
            );
            catalog.insert(product).map_err(|dup| {
                unavailable(
                    path,
                    format!("line {}: duplicate product '{}'", line, dup.product_type),
                )
            })?;
        }

        debug!(path = %path.display(), count = catalog.len(), "loaded products");
        Ok(catalog)
    }

    fn load_tax_rates(&self) -> OrderResult<TaxCatalog> {
        let path = &self.taxes_path;
        let mut catalog = TaxCatalog::new();

        for (line, fields) in self.read_rows(path, 3)? {
            let rate = TaxRate::new(
                fields[0].clone(),
                fields[1].clone(),
                price(path, line, "TaxRate", &fields[2])?,
            );
            catalog.insert(rate).map_err(|dup| {
                unavailable(
                    path,
                    format!("line {}: duplicate state '{}'", line, dup.state_code),
                )
            })?;
        }

        debug!(path = %path.display(), count = catalog.len(), "loaded tax rates");
        Ok(catalog)
    }
}

fn price(path: &Path, line: usize, column: &str, value: &str) -> OrderResult<Decimal> {
    let parsed = Decimal::from_str(value).map_err(|_| {
        unavailable(
            path,
            format!("line {}: {} '{}' is not a number", line, column, value),
        )
    })?;
    if parsed.is_sign_negative() {
        return Err(unavailable(
            path,
            format!("line {}: {} '{}' is negative", line, column, value),
        ));
    }
    if parsed > MAX_AMOUNT {
        return Err(unavailable(
            path,
            format!(
                "line {}: {} '{}' exceeds the maximum of {}",
                line, column, value, MAX_AMOUNT
            ),
        ));
    }
    Ok(round2(parsed))
}

fn unavailable(path: &Path, reason: impl Into<String>) -> OrderError {
    OrderError::ReferenceDataUnavailable {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}
