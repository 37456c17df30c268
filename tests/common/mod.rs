//! Common test utilities for qdash integration tests.
//!
//! Provides `TestEnv` for isolated test environments that don't read the
//! user's `~/.config/qdash/config.kdl` or write to their log directory.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
pub use tempfile::TempDir;

/// A test environment with its own config file location and log directory.
///
/// The `qdash()` method returns a `Command` with `QDASH_CONFIG` and
/// `QDASH_LOG_DIR` set per-invocation, making tests parallel-safe.
pub struct TestEnv {
    pub config_dir: TempDir,
    pub log_dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment with no config file.
    pub fn new() -> Self {
        Self {
            config_dir: TempDir::new().unwrap(),
            log_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a new test environment with `contents` as config.kdl.
    pub fn with_config(contents: &str) -> Self {
        let env = Self::new();
        std::fs::write(env.config_path(), contents).unwrap();
        env
    }

    /// Get a Command for the qdash binary with isolated config and logs.
    pub fn qdash(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_qdash"));
        cmd.env("QDASH_CONFIG", self.config_path());
        cmd.env("QDASH_LOG_DIR", self.log_dir.path());
        cmd.env_remove("QDASH_LOG");
        cmd
    }

    /// Path of config.kdl inside the config directory (may not exist).
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.path().join("config.kdl")
    }

    pub fn log_path(&self) -> &Path {
        self.log_dir.path()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse stdout of a successful command as JSON.
pub fn parse_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).unwrap()
}
