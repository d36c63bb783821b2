//! Repository Implementations
//!
//! File-backed implementations of the domain ports.

mod catalog;
mod codec;
mod ledger;
mod ledger_state;
mod order_store;

pub use catalog::{DelimitedCatalogSource, PRODUCTS_HEADER, TAXES_HEADER};
pub use codec::{BUCKET_HEADER, EXPORT_HEADER};
pub use ledger::AuditLogLedger;
pub use order_store::{bucket_date, bucket_file_name, FileOrderStore};
