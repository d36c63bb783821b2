//! Flooring CLI - order book for flooring installations
//!
//! Usage: flooring [--data-dir DIR] <COMMAND>
//!
//! Commands:
//!   init         Create the data directory layout
//!   list         List orders for a delivery date
//!   create       Add an order
//!   edit         Change an order
//!   cancel       Cancel an order
//!   export       Back up all active orders

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use flooring::OrderError;

use crate::cli::Cli;

/// Exit code for a data directory that cannot be used at all.
const EXIT_FATAL: i32 = 2;
const EXIT_FAILURE: i32 = 1;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let err = match commands::run(&cli) {
        Ok(()) => return Ok(()),
        Err(err) => err,
    };

    let fatal = err
        .downcast_ref::<OrderError>()
        .is_some_and(|e| !e.is_recoverable());
    let code = if fatal { EXIT_FATAL } else { EXIT_FAILURE };

    if cli.json {
        let _ = ui::json::emit(serde_json::json!({
            "type": "error",
            "message": format!("{:#}", err),
            "fatal": fatal,
        }));
        std::process::exit(code);
    }

    if fatal {
        eprintln!("Error: {:#}", err);
        eprintln!("hint: run `flooring init` to create a data directory");
        std::process::exit(code);
    }
    Err(err)
}
