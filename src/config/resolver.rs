//! Precedence resolution for configuration.
//!
//! ## Precedence (highest to lowest)
//!
//! 1. CLI flags (passed at runtime)
//! 2. Environment variables (`QDASH_LOG` for the log filter)
//! 3. config.kdl (`--config`, `QDASH_CONFIG`, or `~/.config/qdash/config.kdl`)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::Result;
use crate::config::{OutputFormat, QdashConfig};
use crate::models::{AggregateMode, ProjectId};
use crate::projector::{DEFAULT_TOP_N, ProjectionOptions};
use crate::state::{DashboardState, Tab};

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "QDASH_CONFIG";

/// Environment variable holding a tracing filter directive.
pub const LOG_FILTER_ENV: &str = "QDASH_LOG";

/// Default log filter when nothing else is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Tracks where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "kebab-case")]
pub enum ValueSource {
    /// Value from environment variable
    EnvVar(String),
    /// Value from a config file
    ConfigFile(PathBuf),
    /// Value from CLI flag
    CliFlag,
    /// Built-in default value
    Default,
}

impl std::fmt::Display for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSource::EnvVar(name) => write!(f, "env:{}", name),
            ValueSource::ConfigFile(path) => write!(f, "file:{}", path.display()),
            ValueSource::CliFlag => write!(f, "cli"),
            ValueSource::Default => write!(f, "default"),
        }
    }
}

/// A resolved value with its source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolved<T> {
    /// The resolved value
    pub value: T,
    /// Where the value came from
    pub source: ValueSource,
}

impl<T> Resolved<T> {
    /// Create a new resolved value.
    pub fn new(value: T, source: ValueSource) -> Self {
        Self { value, source }
    }
}

/// A config file and where it was read from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub config: QdashConfig,
}

impl LoadedConfig {
    /// Load the config at `path`; a missing file yields an empty config.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self {
            path: path.to_path_buf(),
            config: QdashConfig::load(path)?,
        })
    }

    fn source(&self) -> ValueSource {
        ValueSource::ConfigFile(self.path.clone())
    }
}

/// Default location of config.kdl.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("qdash")
        .join("config.kdl")
}

/// Fully resolved configuration with source tracking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    pub config_path: PathBuf,
    pub project: Resolved<ProjectId>,
    pub tab: Resolved<Tab>,
    pub top_n: Resolved<usize>,
    pub aggregate: Resolved<AggregateMode>,
    pub log_level: Resolved<String>,
    pub output_format: Resolved<OutputFormat>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            config_path: default_config_path(),
            project: Resolved::new(ProjectId::default(), ValueSource::Default),
            tab: Resolved::new(Tab::default(), ValueSource::Default),
            top_n: Resolved::new(DEFAULT_TOP_N, ValueSource::Default),
            aggregate: Resolved::new(AggregateMode::default(), ValueSource::Default),
            log_level: Resolved::new(DEFAULT_LOG_LEVEL.to_string(), ValueSource::Default),
            output_format: Resolved::new(OutputFormat::default(), ValueSource::Default),
        }
    }
}

impl ResolvedConfig {
    /// Initial dashboard selection.
    pub fn initial_state(&self) -> DashboardState {
        DashboardState::new(self.project.value, self.tab.value)
    }

    /// Options passed to the projector.
    pub fn projection_options(&self) -> ProjectionOptions {
        ProjectionOptions {
            top_n: self.top_n.value,
            aggregate: self.aggregate.value,
        }
    }

    /// Get the output format value.
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.value
    }

    /// The resolved values as a config file, for `qdash config init`.
    ///
    /// Dashboard flags are written. `-H` and `QDASH_LOG` only affect the
    /// current run, so those fields keep `file`'s value or the default.
    pub fn to_config(&self, file: &QdashConfig) -> QdashConfig {
        let log_level = match self.log_level.source {
            ValueSource::EnvVar(_) => file
                .log_level
                .clone()
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            _ => self.log_level.value.clone(),
        };
        let output_format = match self.output_format.source {
            ValueSource::CliFlag => file.output_format.unwrap_or_default(),
            _ => self.output_format.value,
        };
        QdashConfig {
            default_project: Some(self.project.value),
            default_tab: Some(self.tab.value),
            top_n: Some(self.top_n.value),
            aggregate: Some(self.aggregate.value),
            log_level: Some(log_level),
            output_format: Some(output_format),
        }
    }
}

/// CLI overrides for configuration resolution.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub project: Option<ProjectId>,
    pub tab: Option<Tab>,
    pub top_n: Option<usize>,
    pub aggregate: Option<AggregateMode>,
    pub output_format: Option<OutputFormat>,
}

impl ConfigOverrides {
    /// Create empty overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set project override.
    pub fn with_project(mut self, project: ProjectId) -> Self {
        self.project = Some(project);
        self
    }

    /// Set tab override.
    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.tab = Some(tab);
        self
    }

    /// Set top-n override.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = Some(top_n);
        self
    }

    /// Set aggregate mode override.
    pub fn with_aggregate(mut self, mode: AggregateMode) -> Self {
        self.aggregate = Some(mode);
        self
    }

    /// Set output format override.
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }
}

fn pick<T: Clone>(cli: Option<&T>, file: Option<&T>, loaded: &LoadedConfig, default: T) -> Resolved<T> {
    if let Some(v) = cli {
        Resolved::new(v.clone(), ValueSource::CliFlag)
    } else if let Some(v) = file {
        Resolved::new(v.clone(), loaded.source())
    } else {
        Resolved::new(default, ValueSource::Default)
    }
}

/// Resolve configuration with full precedence chain, reading `QDASH_LOG`.
pub fn resolve_config(loaded: &LoadedConfig, overrides: &ConfigOverrides) -> ResolvedConfig {
    let env_log = std::env::var(LOG_FILTER_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty());
    resolve_config_with_env(loaded, overrides, env_log)
}

/// Resolve configuration with an explicit `QDASH_LOG` value.
pub fn resolve_config_with_env(
    loaded: &LoadedConfig,
    overrides: &ConfigOverrides,
    env_log: Option<String>,
) -> ResolvedConfig {
    let file = &loaded.config;

    let log_level = match env_log {
        Some(filter) => Resolved::new(filter, ValueSource::EnvVar(LOG_FILTER_ENV.to_string())),
        None => pick(
            None,
            file.log_level.as_ref(),
            loaded,
            DEFAULT_LOG_LEVEL.to_string(),
        ),
    };

    ResolvedConfig {
        config_path: loaded.path.clone(),
        project: pick(
            overrides.project.as_ref(),
            file.default_project.as_ref(),
            loaded,
            ProjectId::default(),
        ),
        tab: pick(
            overrides.tab.as_ref(),
            file.default_tab.as_ref(),
            loaded,
            Tab::default(),
        ),
        top_n: pick(
            overrides.top_n.as_ref(),
            file.top_n.as_ref(),
            loaded,
            DEFAULT_TOP_N,
        ),
        aggregate: pick(
            overrides.aggregate.as_ref(),
            file.aggregate.as_ref(),
            loaded,
            AggregateMode::default(),
        ),
        log_level,
        output_format: pick(
            overrides.output_format.as_ref(),
            file.output_format.as_ref(),
            loaded,
            OutputFormat::default(),
        ),
    }
}
