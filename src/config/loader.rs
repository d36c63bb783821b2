//! Configuration loading
//!
//! Layers, highest priority first: CLI flags, `FLOORING_*` environment
//! variables, `<data-dir>/flooring.toml`, `<config_dir>/flooring/config.toml`,
//! built-in defaults. Only the first config file found is read.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;
use super::ConfigError;

pub const PROJECT_CONFIG_FILE: &str = "flooring.toml";

pub const ENV_DATA_DIR: &str = "FLOORING_DATA_DIR";
pub const ENV_MIN_AREA: &str = "FLOORING_MIN_AREA";
pub const ENV_STATE_CACHE: &str = "FLOORING_LEDGER_STATE_CACHE";
pub const ENV_LOG_LEVEL: &str = "FLOORING_LOG_LEVEL";

/// Non-fatal problem found while loading configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    InvalidEnv {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "unknown config key '{}' in {}", key, file.display())?;
                if let Some(line) = line {
                    write!(f, ":{}", line)?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{}'?)", suggestion)?;
                }
                Ok(())
            }
            ConfigWarning::InvalidEnv {
                var,
                value,
                expected,
            } => write!(f, "ignoring {}='{}': expected {}", var, value, expected),
        }
    }
}

/// Configuration with everything that shaped it
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// Config file that was read, if any
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// CLI-level inputs to loading
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub data_dir: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
}

/// Load from a single file, collecting unknown keys as warnings.
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);
    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the full configuration for this process.
pub fn load(overrides: &ConfigOverrides) -> Result<LoadedConfig, ConfigError> {
    load_with_env(overrides, user_config_path(), |var| std::env::var(var).ok())
}

/// `load` with the user config location and environment supplied by the caller.
pub fn load_with_env<F>(
    overrides: &ConfigOverrides,
    user_config: Option<PathBuf>,
    env: F,
) -> Result<LoadedConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let data_dir = overrides
        .data_dir
        .clone()
        .or_else(|| env(ENV_DATA_DIR).map(PathBuf::from));

    let source = match &overrides.config_file {
        Some(explicit) => Some(explicit.clone()),
        None => {
            let project = data_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(PROJECT_CONFIG_FILE);
            std::iter::once(project)
                .chain(user_config)
                .find(|candidate| candidate.is_file())
        }
    };

    let (mut config, mut warnings) = match &source {
        Some(path) => load_with_warnings(path)?,
        None => (Config::default(), Vec::new()),
    };

    warnings.extend(apply_env_overrides(&mut config, &env));
    if let Some(dir) = data_dir {
        config.data.root = dir;
    }

    Ok(LoadedConfig {
        config,
        source,
        warnings,
    })
}

/// Apply `FLOORING_*` overrides other than the data directory.
pub fn apply_env_overrides<F>(config: &mut Config, env: &F) -> Vec<ConfigWarning>
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();

    if let Some(value) = env(ENV_MIN_AREA) {
        match value.trim().parse::<u32>() {
            Ok(min_area) => config.orders.min_area = min_area,
            Err(_) => warnings.push(ConfigWarning::InvalidEnv {
                var: ENV_MIN_AREA,
                value,
                expected: "a whole number of square feet",
            }),
        }
    }

    if let Some(value) = env(ENV_STATE_CACHE) {
        match parse_bool(&value) {
            Some(enabled) => config.ledger.state_cache = enabled,
            None => warnings.push(ConfigWarning::InvalidEnv {
                var: ENV_STATE_CACHE,
                value,
                expected: "true or false",
            }),
        }
    }

    if let Some(value) = env(ENV_LOG_LEVEL) {
        if !value.trim().is_empty() {
            config.logging.level = value.trim().to_string();
        }
    }

    warnings
}

pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("flooring").join("config.toml"))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "data",
        "root",
        "products_file",
        "taxes_file",
        "orders_dir",
        "backup_file",
        "audit_log",
        "ledger_state",
        "orders",
        "min_area",
        "max_lead_years",
        "ledger",
        "state_cache",
        "logging",
        "level",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
