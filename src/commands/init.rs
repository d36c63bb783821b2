//! Init command - lay out a data directory
//!
//! Creates `Orders/`, `Backup/`, the audit log and the standard product and
//! tax tables. Existing files are reported and left alone.

use anyhow::{Context, Result};

use flooring::config::Config;
use flooring::infrastructure::initialize;

use crate::ui::json;
use crate::ui::views::orders::render_init;

pub fn cmd_init(config: &Config, json_output: bool) -> Result<()> {
    let report = initialize(&config.data)
        .with_context(|| format!("initializing {}", config.data.root.display()))?;

    if json_output {
        json::emit(serde_json::json!({
            "type": "init",
            "root": config.data.root.display().to_string(),
            "created": report.created,
            "existing": report.existing,
        }))?;
        return Ok(());
    }

    print!("{}", render_init(&config.data.root, &report));
    Ok(())
}
