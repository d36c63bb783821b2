//! Command handlers
//!
//! `run` resolves configuration, installs logging and dispatches to one
//! handler per subcommand.

pub mod catalog;
pub mod init;
pub mod orders;

use anyhow::Result;
use tracing::{debug, warn};

use flooring::config::{self, ConfigOverrides};
use flooring::logging;
use flooring::presentation::factory::create_order_service;
use flooring::OrderDraft;

use crate::cli::{Cli, Commands};

pub fn run(cli: &Cli) -> Result<()> {
    let overrides = ConfigOverrides {
        data_dir: cli.data_dir.clone(),
        config_file: cli.config.clone(),
    };
    let loaded = config::load(&overrides)?;
    logging::init(cli.verbose, &loaded.config.logging.level);

    for warning in &loaded.warnings {
        warn!("{}", warning);
    }
    debug!(
        source = ?loaded.source,
        root = %loaded.config.data.root.display(),
        "configuration loaded"
    );

    let config = &loaded.config;
    let json = cli.json;
    let service = || create_order_service(config);

    match &cli.command {
        Commands::Init => init::cmd_init(config, json),
        Commands::List { date } => orders::cmd_list(&service()?, *date, json),
        Commands::Show { date, number } => orders::cmd_show(&service()?, *date, *number, json),
        Commands::Create {
            date,
            customer,
            state,
            product,
            area,
            dry_run,
        } => {
            let draft = OrderDraft {
                delivery_date: *date,
                customer_name: customer.clone(),
                state_code: state.clone(),
                product_type: product.clone(),
                area: *area,
            };
            orders::cmd_create(&service()?, draft, *dry_run, json)
        }
        Commands::Edit {
            date,
            number,
            customer,
            state,
            product,
            area,
            dry_run,
        } => orders::cmd_edit(
            &service()?,
            *date,
            *number,
            customer.clone(),
            state.clone(),
            product.clone(),
            *area,
            *dry_run,
            json,
        ),
        Commands::Cancel { date, number } => orders::cmd_cancel(&service()?, *date, *number, json),
        Commands::Export => orders::cmd_export(&service()?, &config.data.backup_path(), json),
        Commands::Products => catalog::cmd_products(&service()?, json),
        Commands::Taxes => catalog::cmd_taxes(&service()?, json),
        Commands::NextNumber => catalog::cmd_next_number(&service()?, json),
    }
}
