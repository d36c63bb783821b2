//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file helpers (atomic replace, append, listing)
//! - `repositories/` - Catalog loader, bucketed order store, audit-log ledger
//! - `clock` - System and fixed clocks
//! - `bootstrap` - Fresh data directory layout

pub mod bootstrap;
pub mod clock;
pub mod fs;
pub mod repositories;

pub use bootstrap::{initialize, InitReport};
pub use clock::{FixedClock, SystemClock};
pub use fs::LocalFs;
pub use repositories::{AuditLogLedger, DelimitedCatalogSource, FileOrderStore};
