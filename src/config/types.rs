//! Configuration type definitions

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::OrderPolicy;

/// File locations. Relative paths resolve against `root`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub root: PathBuf,
    pub products_file: PathBuf,
    pub taxes_file: PathBuf,
    pub orders_dir: PathBuf,
    pub backup_file: PathBuf,
    pub audit_log: PathBuf,
    pub ledger_state: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            products_file: PathBuf::from("Data/Products.txt"),
            taxes_file: PathBuf::from("Data/Taxes.txt"),
            orders_dir: PathBuf::from("Orders"),
            backup_file: PathBuf::from("Backup/DataExport.txt"),
            audit_log: PathBuf::from("Audit_Log.txt"),
            ledger_state: PathBuf::from("Audit_Log.state.toml"),
        }
    }
}

impl DataConfig {
    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn products_path(&self) -> PathBuf {
        self.resolve(&self.products_file)
    }

    pub fn taxes_path(&self) -> PathBuf {
        self.resolve(&self.taxes_file)
    }

    pub fn orders_path(&self) -> PathBuf {
        self.resolve(&self.orders_dir)
    }

    pub fn backup_path(&self) -> PathBuf {
        self.resolve(&self.backup_file)
    }

    pub fn audit_log_path(&self) -> PathBuf {
        self.resolve(&self.audit_log)
    }

    pub fn ledger_state_path(&self) -> PathBuf {
        self.resolve(&self.ledger_state)
    }
}

/// Booking rules for new and edited orders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrdersConfig {
    /// Square feet, inclusive
    pub min_area: u32,
    pub max_lead_years: u32,
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            min_area: 100,
            max_lead_years: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Keep the counter state record next to the audit log
    pub state_cache: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self { state_cache: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` level or filter directive
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub orders: OrdersConfig,
    pub ledger: LedgerConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn policy(&self) -> OrderPolicy {
        OrderPolicy {
            min_area: Decimal::from(self.orders.min_area),
            max_lead_years: self.orders.max_lead_years,
        }
    }
}
