//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FLOORING_*)
//! 3. Project config (<data-dir>/flooring.toml)
//! 4. User config (~/.config/flooring/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

use std::path::PathBuf;

use thiserror::Error;

pub use loader::{
    apply_env_overrides, load, load_with_env, load_with_warnings, user_config_path,
    ConfigOverrides, ConfigWarning, LoadedConfig, ENV_DATA_DIR, ENV_LOG_LEVEL, ENV_MIN_AREA,
    ENV_STATE_CACHE, PROJECT_CONFIG_FILE,
};
pub use types::{Config, DataConfig, LedgerConfig, LoggingConfig, OrdersConfig};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    Parse { path: PathBuf, message: String },
}
