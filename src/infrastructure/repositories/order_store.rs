//! File Order Store
//!
//! One flat file per delivery date, `Orders_<MMddyyyy>.txt`, holding a header
//! and one row per order, cancelled ones included. Inserts append; updates
//! rewrite the whole bucket through a temp file and rename, rows ascending by
//! order number. Export flattens every bucket into the backup file.
//!
//! There is no file locking: one writer process per data directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::domain::entities::{Order, TaxCatalog};
use crate::domain::ports::OrderRepository;
use crate::domain::value_objects::OrderNumber;
use crate::error::{OrderError, OrderResult};
use crate::infrastructure::fs::LocalFs;

use super::codec::{self, BUCKET_HEADER};

const BUCKET_PREFIX: &str = "Orders_";
const BUCKET_EXTENSION: &str = ".txt";

pub struct FileOrderStore {
    orders_dir: PathBuf,
    backup_file: PathBuf,
    taxes: Arc<TaxCatalog>,
    fs: LocalFs,
}

impl FileOrderStore {
    pub fn new(
        orders_dir: impl Into<PathBuf>,
        backup_file: impl Into<PathBuf>,
        taxes: Arc<TaxCatalog>,
    ) -> Self {
        Self {
            orders_dir: orders_dir.into(),
            backup_file: backup_file.into(),
            taxes,
            fs: LocalFs::new(),
        }
    }

    pub fn orders_dir(&self) -> &Path {
        &self.orders_dir
    }

    pub fn backup_file(&self) -> &Path {
        &self.backup_file
    }

    /// `Orders/Orders_11042020.txt` for 2020-11-04
    pub fn bucket_path(&self, date: NaiveDate) -> PathBuf {
        self.orders_dir.join(bucket_file_name(date))
    }

    fn read_bucket(&self, path: &Path) -> OrderResult<Vec<Order>> {
        let content = self
            .fs
            .read(path)
            .map_err(|e| OrderError::persistence(path, e))?;

        let mut orders = Vec::new();
        let mut lines = content.lines().enumerate();
        if let Some((_, header)) = lines.next() {
            let header = header.trim_start_matches('\u{feff}').trim_end_matches('\r');
            if header != BUCKET_HEADER {
                return Err(OrderError::CorruptRecord {
                    path: path.to_path_buf(),
                    line: 1,
                    message: "unexpected header row".to_string(),
                });
            }
        }

        for (index, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            let row = codec::decode_bucket_row(line, &self.taxes).map_err(|message| {
                OrderError::CorruptRecord {
                    path: path.to_path_buf(),
                    line: index + 1,
                    message,
                }
            })?;
            if row.unknown_state {
                warn!(
                    path = %path.display(),
                    order_number = %row.order.order_number(),
                    state = %row.order.tax_rate().state_code,
                    "state code not in tax catalog; using code as state name"
                );
            }
            orders.push(row.order);
        }

        debug!(path = %path.display(), rows = orders.len(), "read bucket");
        Ok(orders)
    }

    fn load_bucket(&self, date: NaiveDate) -> OrderResult<Vec<Order>> {
        let path = self.bucket_path(date);
        if !self.fs.exists(&path) {
            return Err(OrderError::BucketNotFound {
                date: Some(date),
                path,
            });
        }
        self.read_bucket(&path)
    }
}

impl OrderRepository for FileOrderStore {
    fn list_by_date(&self, date: NaiveDate) -> OrderResult<Vec<Order>> {
        let mut orders = self.load_bucket(date)?;
        orders.sort_by_key(Order::order_number);
        Ok(orders)
    }

    fn insert(&self, order: &Order) -> OrderResult<()> {
        let path = self.bucket_path(order.delivery_date());
        let len = if self.fs.exists(&path) {
            self.fs
                .file_len(&path)
                .map_err(|e| OrderError::persistence(&path, e))?
        } else {
            0
        };
        // shorter than a header means no rows; a blank stub is replaced
        let is_new = len == 0
            || (len < BUCKET_HEADER.len() as u64
                && self
                    .fs
                    .read(&path)
                    .map_err(|e| OrderError::persistence(&path, e))?
                    .trim()
                    .is_empty());

        let mut content = String::new();
        if is_new {
            content.push_str(BUCKET_HEADER);
            content.push('\n');
        } else {
            let last = self
                .fs
                .read_from(&path, len - 1)
                .map_err(|e| OrderError::persistence(&path, e))?;
            if last != b"\n" {
                content.push('\n');
            }
        }
        content.push_str(&codec::encode_bucket_row(order));
        content.push('\n');

        if is_new {
            self.fs
                .write_atomic(&path, &content)
                .map_err(|e| OrderError::persistence(&path, e))?;
        } else {
            self.fs
                .append(&path, &content)
                .map_err(|e| OrderError::persistence(&path, e))?;
        }

        debug!(path = %path.display(), order_number = %order.order_number(), new_bucket = is_new, "inserted order");
        Ok(())
    }

    fn update(&self, order: &Order) -> OrderResult<()> {
        let path = self.bucket_path(order.delivery_date());
        let existing = self.load_bucket(order.delivery_date())?;

        let mut rows: BTreeMap<OrderNumber, Order> = existing
            .into_iter()
            .map(|o| (o.order_number(), o))
            .collect();
        let replaced = rows.insert(order.order_number(), order.clone()).is_some();

        self.fs
            .write_atomic(&path, &codec::encode_bucket(rows.values()))
            .map_err(|e| OrderError::persistence(&path, e))?;

        debug!(
            path = %path.display(),
            order_number = %order.order_number(),
            rows = rows.len(),
            replaced,
            "rewrote bucket"
        );
        Ok(())
    }

    fn export_active(&self) -> OrderResult<Vec<Order>> {
        let files = self
            .fs
            .list_files(&self.orders_dir)
            .map_err(|e| OrderError::persistence(&self.orders_dir, e))?;

        let buckets: Vec<PathBuf> = files.into_iter().filter(|p| is_bucket_file(p)).collect();
        if buckets.is_empty() {
            return Err(OrderError::BucketNotFound {
                date: None,
                path: self.orders_dir.clone(),
            });
        }

        let mut merged: BTreeMap<OrderNumber, (Order, PathBuf)> = BTreeMap::new();
        for bucket in &buckets {
            for order in self.read_bucket(bucket)? {
                let number = order.order_number();
                if let Some((_, first)) = merged.get(&number) {
                    return Err(OrderError::DuplicateOrderNumber {
                        order_number: number,
                        first: first.clone(),
                        second: bucket.clone(),
                    });
                }
                merged.insert(number, (order, bucket.clone()));
            }
        }

        let active: Vec<Order> = merged
            .into_values()
            .map(|(order, _)| order)
            .filter(Order::is_active)
            .collect();

        self.fs
            .write_atomic(&self.backup_file, &codec::encode_export(&active))
            .map_err(|e| OrderError::persistence(&self.backup_file, e))?;

        info!(
            buckets = buckets.len(),
            exported = active.len(),
            backup = %self.backup_file.display(),
            "exported active orders"
        );
        Ok(active)
    }
}

pub fn bucket_file_name(date: NaiveDate) -> String {
    format!(
        "{}{}{}",
        BUCKET_PREFIX,
        date.format("%m%d%Y"),
        BUCKET_EXTENSION
    )
}

/// Delivery date encoded in a bucket file name, if it is one.
pub fn bucket_date(path: &Path) -> Option<NaiveDate> {
    let name = path.file_name()?.to_str()?;
    let digits = name
        .strip_prefix(BUCKET_PREFIX)?
        .strip_suffix(BUCKET_EXTENSION)?;
    if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(digits, "%m%d%Y").ok()
}

fn is_bucket_file(path: &Path) -> bool {
    bucket_date(path).is_some()
}
