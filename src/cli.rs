use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use flooring::domain::value_objects::parse_user_date;
use flooring::OrderNumber;

/// Flooring - order book for flooring installations
#[derive(Parser, Debug)]
#[command(name = "flooring")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Dates accept MM-dd-yyyy or yyyy-MM-dd.")]
pub struct Cli {
    /// Data directory (holds Data/, Orders/, Backup/ and the audit log)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Config file (overrides flooring.toml lookup)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit one JSON document instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the data directory layout and standard reference tables
    Init,

    /// List every order for a delivery date
    List {
        #[arg(long, value_parser = parse_date_arg)]
        date: NaiveDate,
    },

    /// Show one order
    Show {
        #[arg(long, value_parser = parse_date_arg)]
        date: NaiveDate,

        #[arg(long)]
        number: OrderNumber,
    },

    /// Add an order
    Create {
        /// Delivery date
        #[arg(long, value_parser = parse_date_arg)]
        date: NaiveDate,

        #[arg(long)]
        customer: String,

        /// State code, e.g. TX
        #[arg(long)]
        state: String,

        /// Product type, e.g. Tile
        #[arg(long)]
        product: String,

        /// Area in square feet
        #[arg(long, value_parser = parse_area_arg)]
        area: Decimal,

        /// Show the costed order without saving it
        #[arg(long)]
        dry_run: bool,
    },

    /// Change customer, state, product or area of an order
    Edit {
        #[arg(long, value_parser = parse_date_arg)]
        date: NaiveDate,

        #[arg(long)]
        number: OrderNumber,

        /// New customer name (blank keeps the current one)
        #[arg(long)]
        customer: Option<String>,

        #[arg(long)]
        state: Option<String>,

        #[arg(long)]
        product: Option<String>,

        #[arg(long, value_parser = parse_area_arg)]
        area: Option<Decimal>,

        /// Show the revised order without saving it
        #[arg(long)]
        dry_run: bool,
    },

    /// Cancel an order (kept on file as inactive)
    Cancel {
        #[arg(long, value_parser = parse_date_arg)]
        date: NaiveDate,

        #[arg(long)]
        number: OrderNumber,
    },

    /// Write all active orders to the backup file
    Export,

    /// List products and their prices
    Products,

    /// List states and their tax rates
    Taxes,

    /// Show the number the next order will get
    NextNumber,
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_user_date(value).ok_or_else(|| format!("'{}' is not MM-dd-yyyy or yyyy-MM-dd", value))
}

fn parse_area_arg(value: &str) -> Result<Decimal, String> {
    Decimal::from_str(value.trim()).map_err(|_| format!("'{}' is not a number", value))
}
