//! Service Factory
//!
//! Creates the order service with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use tracing::debug;

use crate::application::OrderService;
use crate::config::Config;
use crate::domain::ports::{CatalogSource, Clock};
use crate::error::OrderResult;
use crate::infrastructure::{AuditLogLedger, DelimitedCatalogSource, FileOrderStore, SystemClock};

/// Order service over the files named in `config`, dated by the system clock.
///
/// Fails with `ReferenceDataUnavailable` or `LedgerUnavailable` when the data
/// directory is not usable.
pub fn create_order_service(config: &Config) -> OrderResult<OrderService> {
    create_order_service_with_clock(config, Arc::new(SystemClock))
}

pub fn create_order_service_with_clock(
    config: &Config,
    clock: Arc<dyn Clock>,
) -> OrderResult<OrderService> {
    let data = &config.data;
    let catalog = DelimitedCatalogSource::new(data.products_path(), data.taxes_path()).load()?;

    let store = FileOrderStore::new(
        data.orders_path(),
        data.backup_path(),
        Arc::new(catalog.taxes.clone()),
    );

    let mut ledger = AuditLogLedger::new(data.audit_log_path(), clock.clone());
    if config.ledger.state_cache {
        ledger = ledger.with_state_file(data.ledger_state_path());
    }

    debug!(
        root = %data.root.display(),
        products = catalog.products.len(),
        states = catalog.taxes.len(),
        state_cache = config.ledger.state_cache,
        "wiring order service"
    );

    OrderService::new(
        Arc::new(store),
        Arc::new(ledger),
        Arc::new(catalog),
        clock,
        config.policy(),
    )
}
