//! Data directory bootstrap
//!
//! Lays out a fresh data directory: order and backup directories, the audit
//! log seeded with a zero counter, and the standard reference tables. Files
//! that already exist are left untouched.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::config::DataConfig;
use crate::error::{OrderError, OrderResult};
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::fs::LocalFs;
use crate::infrastructure::repositories::{AuditLogLedger, PRODUCTS_HEADER, TAXES_HEADER};

const STANDARD_PRODUCTS: &[&str] = &[
    "Carpet,2.25,2.10",
    "Laminate,1.75,2.10",
    "Tile,3.50,4.15",
    "Wood,5.15,4.75",
];

const STANDARD_TAXES: &[&str] = &[
    "TX,Texas,4.45",
    "WA,Washington,9.25",
    "KY,Kentucky,6.00",
    "CA,California,25.00",
];

/// What `initialize` did, path by path
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
pub struct InitReport {
    pub created: Vec<PathBuf>,
    pub existing: Vec<PathBuf>,
}

impl InitReport {
    fn record(&mut self, path: PathBuf, created: bool) {
        if created {
            self.created.push(path);
        } else {
            self.existing.push(path);
        }
    }
}

pub fn initialize(data: &DataConfig) -> OrderResult<InitReport> {
    let fs = LocalFs::new();
    let mut report = InitReport::default();

    let orders_dir = data.orders_path();
    let backup_dir = data
        .backup_path()
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| data.root.clone());
    for dir in [orders_dir, backup_dir] {
        let created = !fs.exists(&dir);
        fs.create_dir_all(&dir)
            .map_err(|e| OrderError::persistence(&dir, e))?;
        report.record(dir, created);
    }

    let tables = [
        (data.products_path(), PRODUCTS_HEADER, STANDARD_PRODUCTS),
        (data.taxes_path(), TAXES_HEADER, STANDARD_TAXES),
    ];
    for (path, header, rows) in tables {
        let created = !fs.exists(&path);
        if created {
            let mut content = String::from(header);
            content.push('\n');
            for row in rows {
                content.push_str(row);
                content.push('\n');
            }
            fs.write_atomic(&path, &content)
                .map_err(|e| OrderError::persistence(&path, e))?;
        }
        report.record(path, created);
    }

    let audit_log = data.audit_log_path();
    let created = AuditLogLedger::new(&audit_log, Arc::new(SystemClock)).initialize()?;
    report.record(audit_log, created);

    info!(
        root = %data.root.display(),
        created = report.created.len(),
        existing = report.existing.len(),
        "initialized data directory"
    );
    Ok(report)
}
