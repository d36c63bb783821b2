//! Common test utilities for flooring scenario and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated data directory plus helpers to run the CLI or build
//!   an `OrderService` over it
//! - Fixtures: Reusable reference tables and bucket rows

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
