//! Configuration for qdash.
//!
//! ## config.kdl - User preferences
//!
//! Located at `~/.config/qdash/config.kdl` unless `--config` or `QDASH_CONFIG`
//! points elsewhere. A missing file means built-in defaults.
//!
//! Contains:
//! - `default-project` - Project selected at startup
//! - `default-tab` - Tab shown at startup
//! - `top-n` - Bars in the top characteristics chart (1-8)
//! - `aggregate` - "supplied" or "computed" characteristic values
//! - `log-level` - Tracing filter directive
//! - `output-format` - "json" or "human"
//!
//! ## Precedence
//!
//! CLI flag > environment > config.kdl > defaults
//!
//! Use the [`resolver`] module for unified precedence resolution.

pub mod resolver;
pub mod schema;

pub use resolver::{
    CONFIG_PATH_ENV, ConfigOverrides, DEFAULT_LOG_LEVEL, LOG_FILTER_ENV, LoadedConfig, Resolved,
    ResolvedConfig, ValueSource, default_config_path, resolve_config, resolve_config_with_env,
};
pub use schema::{MAX_TOP_N, OutputFormat, QdashConfig};
