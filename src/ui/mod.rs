//! Terminal output for the binary
//!
//! Text views render to `String`; `json` writes one document per command.

pub mod json;
pub mod views;
