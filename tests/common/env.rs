//! Test environment builder for isolated flooring testing.
//!
//! `TestEnv` owns a temp data directory laid out the way `flooring init`
//! would, and a separate temp HOME so no user config leaks in.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;

use chrono::NaiveDate;
use tempfile::TempDir;

use flooring::config::Config;
use flooring::infrastructure::FixedClock;
use flooring::presentation::create_order_service_with_clock;
use flooring::OrderService;

use super::fixtures::{AUDIT_LOG_SEED, PRODUCTS, TAXES};

/// Result of running a flooring CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim()).unwrap_or_else(|e| {
            panic!("stdout is not JSON ({}): {}\nstderr: {}", e, self.stdout, self.stderr)
        })
    }
}

pub struct TestEnv {
    pub data_dir: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    /// Data directory with reference tables and a seeded audit log.
    pub fn new() -> Self {
        let env = Self::empty();
        env.write("Data/Products.txt", PRODUCTS);
        env.write("Data/Taxes.txt", TAXES);
        env.write("Audit_Log.txt", AUDIT_LOG_SEED);
        fs::create_dir_all(env.path("Orders")).unwrap();
        env
    }

    /// Nothing in the data directory at all.
    pub fn empty() -> Self {
        Self {
            data_dir: TempDir::new().unwrap(),
            home_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.data_dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.data_dir.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("cannot read {}: {}", relative, e))
    }

    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.data.root = self.root().to_path_buf();
        config
    }

    /// Service over this data directory with "today" pinned to `today`.
    pub fn service(&self, today: NaiveDate) -> OrderService {
        self.service_with(&self.config(), today)
    }

    pub fn service_with(&self, config: &Config, today: NaiveDate) -> OrderService {
        create_order_service_with_clock(config, Arc::new(FixedClock(today))).unwrap()
    }

    /// Run the binary against this data directory.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_flooring"));
        cmd.current_dir(self.root())
            .arg("--data-dir")
            .arg(self.root())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env_remove("FLOORING_LOG")
            .env_remove("FLOORING_DATA_DIR")
            .env_remove("FLOORING_MIN_AREA")
            .env_remove("FLOORING_LEDGER_STATE_CACHE")
            .env_remove("FLOORING_LOG_LEVEL");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute flooring");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

pub fn date(month: u32, day: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
