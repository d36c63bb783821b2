//! Ledger state record
//!
//! A small TOML file next to the audit log holding the last recorded counter
//! and the log length right after its snapshot line was appended. It lets
//! recovery skip the already-verified prefix of the log.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::infrastructure::fs::LocalFs;

const STATE_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    pub counter: u32,
    pub log_offset: u64,
}

#[derive(Debug, Serialize, Deserialize)]
struct TomlLedgerState {
    version: u32,
    counter: u32,
    log_offset: u64,
}

pub struct LedgerStateFile {
    path: PathBuf,
    fs: LocalFs,
}

impl LedgerStateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fs: LocalFs::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `None` when the record is missing or unreadable; either way the
    /// caller falls back to scanning the whole log.
    pub fn load(&self) -> Option<LedgerState> {
        if !self.fs.exists(&self.path) {
            debug!(path = %self.path.display(), "no ledger state record");
            return None;
        }

        let content = match self.fs.read(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read ledger state record");
                return None;
            }
        };

        match toml::from_str::<TomlLedgerState>(&content) {
            Ok(state) if state.version == STATE_VERSION => Some(LedgerState {
                counter: state.counter,
                log_offset: state.log_offset,
            }),
            Ok(state) => {
                warn!(
                    path = %self.path.display(),
                    found = state.version,
                    expected = STATE_VERSION,
                    "ledger state record version mismatch"
                );
                None
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot parse ledger state record");
                None
            }
        }
    }

    pub fn save(&self, state: LedgerState) -> std::io::Result<()> {
        let record = TomlLedgerState {
            version: STATE_VERSION,
            counter: state.counter,
            log_offset: state.log_offset,
        };
        let content = toml::to_string_pretty(&record)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        self.fs.write_atomic(&self.path, &content)
    }
}
