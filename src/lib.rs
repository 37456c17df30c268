//! qdash - A terminal dashboard for software quality metrics.
//!
//! This library provides the core functionality for the `qdash` CLI tool:
//! the bundled ISO/IEC 25010 mock catalog, selection state, the derived
//! views rendered by the dashboard, and configuration loading.

pub mod cli;
pub mod commands;
pub mod config;
pub mod format;
pub mod logging;
pub mod models;
pub mod projector;
pub mod state;
pub mod theme;
pub mod tui;

/// Version string shown by `--version`: package version, commit and build time.
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("QDASH_GIT_COMMIT"),
    " ",
    env!("QDASH_BUILD_TIMESTAMP"),
    ")"
);

/// Library-level error type for qdash operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown project: {0} (expected one of: ecommerce-platform, mobile-banking, inventory-system)")]
    UnknownProject(String),

    #[error("Unknown tab: {0} (expected one of: overview, characteristics, sonarqube, trends, tools)")]
    UnknownTab(String),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for qdash operations.
pub type Result<T> = std::result::Result<T, Error>;
