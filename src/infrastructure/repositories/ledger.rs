//! Audit Log Ledger
//!
//! `Audit_Log.txt` carries two kinds of lines on one append-only stream:
//!
//! ```text
//! 2020-06-01 --> ORDER NUMBER: 7, new order recorded today.
//! CURRENT TOTAL ORDERS:::7
//! ```
//!
//! The last snapshot line in file order is the current counter. The log is
//! never compacted. With a state record attached, recovery starts from the
//! offset of the last verified snapshot and only scans what came after it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::Order;
use crate::domain::ports::{Clock, LifecycleEvent, OrderLedger};
use crate::domain::value_objects::OrderNumber;
use crate::error::{OrderError, OrderResult};
use crate::infrastructure::fs::LocalFs;

use super::ledger_state::{LedgerState, LedgerStateFile};

pub const SNAPSHOT_PREFIX: &str = "CURRENT TOTAL ORDERS";
const SNAPSHOT_DELIMITER: &str = ":::";

pub struct AuditLogLedger {
    log_path: PathBuf,
    state: Option<LedgerStateFile>,
    clock: Arc<dyn Clock>,
    fs: LocalFs,
}

impl AuditLogLedger {
    pub fn new(log_path: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        Self {
            log_path: log_path.into(),
            state: None,
            clock,
            fs: LocalFs::new(),
        }
    }

    /// Keep a state record at `path` for O(1) recovery.
    pub fn with_state_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.state = Some(LedgerStateFile::new(path));
        self
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Create the log seeded with a zero snapshot. Returns false when it
    /// already existed (never overwritten).
    pub fn initialize(&self) -> OrderResult<bool> {
        if self.fs.exists(&self.log_path) {
            return Ok(false);
        }
        self.fs
            .append(&self.log_path, &snapshot_line(0))
            .map_err(|e| OrderError::persistence(&self.log_path, e))?;
        Ok(true)
    }

    fn append_line(&self, line: &str) -> OrderResult<u64> {
        let len = self
            .fs
            .append(&self.log_path, line)
            .map_err(|e| OrderError::persistence(&self.log_path, e))?;
        debug!(path = %self.log_path.display(), len, line = line.trim_end(), "appended ledger line");
        Ok(len)
    }

    fn append_event(&self, order: &Order, event: LifecycleEvent) -> OrderResult<()> {
        let line = format!(
            "{} --> ORDER NUMBER: {}, {}.\n",
            self.clock.today().format("%Y-%m-%d"),
            order.order_number(),
            event
        );
        self.append_line(&line).map(|_| ())
    }

    /// Counter from the state record plus the log tail after it. Only the
    /// bytes from the recorded snapshot line onward are read.
    fn recover_from_state(&self) -> Option<u32> {
        let state_file = self.state.as_ref()?;
        let state = state_file.load()?;

        let expected = snapshot_line(state.counter);
        let tail = state
            .log_offset
            .checked_sub(expected.len() as u64)
            .and_then(|start| self.fs.read_from(&self.log_path, start).ok())
            .and_then(|bytes| bytes.strip_prefix(expected.as_bytes()).map(<[u8]>::to_vec))
            .and_then(|rest| String::from_utf8(rest).ok());

        let Some(tail) = tail else {
            warn!(
                state = %state_file.path().display(),
                log = %self.log_path.display(),
                "ledger state record does not match the log; scanning full log"
            );
            return None;
        };

        match last_snapshot(&tail) {
            Ok(found) => Some(found.unwrap_or(state.counter)),
            // the full scan reports the absolute line number
            Err(_) => None,
        }
    }

    fn scan_full_log(&self) -> OrderResult<u32> {
        let content = self
            .fs
            .read(&self.log_path)
            .map_err(|e| OrderError::LedgerUnavailable {
                path: self.log_path.clone(),
                reason: e.to_string(),
            })?;

        let last = last_snapshot(&content).map_err(|(index, message)| OrderError::CorruptRecord {
            path: self.log_path.clone(),
            line: index + 1,
            message,
        })?;
        Ok(last.unwrap_or(0))
    }
}

impl OrderLedger for AuditLogLedger {
    fn recover_next_order_number(&self) -> OrderResult<OrderNumber> {
        if !self.fs.exists(&self.log_path) {
            return Err(OrderError::LedgerUnavailable {
                path: self.log_path.clone(),
                reason: "audit log not found".to_string(),
            });
        }
        let (last, from_state) = match self.recover_from_state() {
            Some(counter) => (counter, true),
            None => (self.scan_full_log()?, false),
        };
        debug!(
            path = %self.log_path.display(),
            from_state,
            last_recorded = last,
            "recovered order counter"
        );

        OrderNumber::new(last)
            .next()
            .ok_or_else(|| OrderError::LedgerUnavailable {
                path: self.log_path.clone(),
                reason: format!("order numbers exhausted at {}", last),
            })
    }

    fn append_created(&self, order: &Order) -> OrderResult<()> {
        self.append_event(order, LifecycleEvent::Created)
    }

    fn append_edited(&self, order: &Order) -> OrderResult<()> {
        self.append_event(order, LifecycleEvent::for_edit(order))
    }

    fn record_counter(&self, last_issued: OrderNumber) -> OrderResult<()> {
        let log_offset = self.append_line(&snapshot_line(last_issued.get()))?;

        if let Some(state_file) = &self.state {
            let state = LedgerState {
                counter: last_issued.get(),
                log_offset,
            };
            // The log stays authoritative; a stale record only costs a full scan.
            if let Err(e) = state_file.save(state) {
                warn!(path = %state_file.path().display(), error = %e, "could not write ledger state record");
            }
        }
        Ok(())
    }
}

fn snapshot_line(counter: u32) -> String {
    format!("{}{}{}\n", SNAPSHOT_PREFIX, SNAPSHOT_DELIMITER, counter)
}

/// `None` for lifecycle lines, `Some(Err)` for a malformed snapshot.
fn parse_snapshot(line: &str) -> Option<Result<u32, String>> {
    let rest = line.trim_end_matches('\r').strip_prefix(SNAPSHOT_PREFIX)?;
    let value = rest.strip_prefix(SNAPSHOT_DELIMITER).unwrap_or(rest).trim();
    Some(
        value
            .parse::<u32>()
            .map_err(|_| format!("counter snapshot '{}' is not a number", value)),
    )
}

/// Last snapshot value in `content`, or the zero-based index and message
/// of the first malformed snapshot line.
fn last_snapshot(content: &str) -> Result<Option<u32>, (usize, String)> {
    let mut last = None;
    for (index, line) in content.lines().enumerate() {
        if let Some(value) = parse_snapshot(line) {
            last = Some(value.map_err(|message| (index, message))?);
        }
    }
    Ok(last)
}
