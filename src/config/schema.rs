//! KDL schema for config.kdl.
//!
//! This module provides:
//! - The `QdashConfig` struct representing the file
//! - Parsing from and serialization to KDL
//! - Validation and merging
//! - Loading from disk

use std::path::Path;

use kdl::{KdlDocument, KdlEntry, KdlNode, KdlValue};
use serde::{Deserialize, Serialize};

use crate::models::{AggregateMode, ProjectId};
use crate::state::Tab;
use crate::{Error, Result};

/// Largest accepted `top-n` value.
pub const MAX_TOP_N: usize = 8;

/// Output format preference for CLI commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output (default, machine-readable)
    #[default]
    Json,
    /// Human-readable output
    Human,
}

impl OutputFormat {
    /// Parse from string, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "human" => Some(OutputFormat::Human),
            _ => None,
        }
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Human => "human",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User preferences stored in config.kdl.
///
/// # KDL Schema
///
/// ```kdl
/// default-project "inventory-system"
/// default-tab "trends"
/// top-n 5
/// aggregate "supplied"  // or "computed"
/// log-level "info"
/// output-format "human" // or "json"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QdashConfig {
    /// Project selected at startup
    pub default_project: Option<ProjectId>,

    /// Tab shown at startup
    pub default_tab: Option<Tab>,

    /// Number of bars in the top characteristics chart
    pub top_n: Option<usize>,

    /// Whether characteristic values are supplied or computed from sub-characteristics
    pub aggregate: Option<AggregateMode>,

    /// Tracing filter directive (e.g., "info", "qdash=debug")
    pub log_level: Option<String>,

    /// Default output format for CLI commands
    pub output_format: Option<OutputFormat>,
}

fn first_string<'a>(doc: &'a KdlDocument, name: &str) -> Option<&'a str> {
    doc.get(name)
        .and_then(|node| node.entries().first())
        .and_then(|entry| entry.value().as_string())
}

fn string_node(name: &str, value: &str) -> KdlNode {
    let mut node = KdlNode::new(name);
    node.push(KdlEntry::new(KdlValue::String(value.to_string())));
    node
}

impl QdashConfig {
    /// Create an empty config with no values set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the config values.
    ///
    /// Returns an error message if any value is invalid.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if let Some(top_n) = self.top_n {
            if top_n == 0 || top_n > MAX_TOP_N {
                return Err(format!("top-n must be 1-{}, got {}", MAX_TOP_N, top_n));
            }
        }
        if let Some(ref level) = self.log_level {
            if level.trim().is_empty() {
                return Err("log-level must not be empty".to_string());
            }
        }
        Ok(())
    }

    /// Parse config from a KDL document.
    ///
    /// Unknown project ids, tab names and modes are rejected rather than ignored.
    pub fn from_kdl(doc: &KdlDocument) -> Result<Self> {
        let mut config = Self::new();

        if let Some(s) = first_string(doc, "default-project") {
            config.default_project = Some(s.parse::<ProjectId>()?);
        }

        if let Some(s) = first_string(doc, "default-tab") {
            config.default_tab = Some(s.parse::<Tab>()?);
        }

        if let Some(node) = doc.get("top-n") {
            let value = node
                .entries()
                .first()
                .and_then(|entry| entry.value().as_integer())
                .ok_or_else(|| Error::Config("top-n must be an integer".to_string()))?;
            let top_n = usize::try_from(value)
                .map_err(|_| Error::Config(format!("top-n out of range: {}", value)))?;
            config.top_n = Some(top_n);
        }

        if let Some(s) = first_string(doc, "aggregate") {
            config.aggregate = Some(AggregateMode::parse(s).ok_or_else(|| {
                Error::Config(format!(
                    "aggregate must be \"supplied\" or \"computed\", got {:?}",
                    s
                ))
            })?);
        }

        if let Some(s) = first_string(doc, "log-level") {
            config.log_level = Some(s.to_string());
        }

        if let Some(s) = first_string(doc, "output-format") {
            config.output_format = Some(OutputFormat::parse(s).ok_or_else(|| {
                Error::Config(format!(
                    "output-format must be \"json\" or \"human\", got {:?}",
                    s
                ))
            })?);
        }

        config.validate().map_err(Error::Config)?;
        Ok(config)
    }

    /// Convert config to a KDL document.
    pub fn to_kdl(&self) -> KdlDocument {
        let mut doc = KdlDocument::new();

        if let Some(project) = self.default_project {
            doc.nodes_mut()
                .push(string_node("default-project", project.as_str()));
        }

        if let Some(tab) = self.default_tab {
            doc.nodes_mut().push(string_node("default-tab", tab.as_str()));
        }

        if let Some(top_n) = self.top_n {
            let mut node = KdlNode::new("top-n");
            node.push(KdlEntry::new(KdlValue::Integer(top_n as i128)));
            doc.nodes_mut().push(node);
        }

        if let Some(mode) = self.aggregate {
            doc.nodes_mut().push(string_node("aggregate", mode.as_str()));
        }

        if let Some(ref level) = self.log_level {
            doc.nodes_mut().push(string_node("log-level", level));
        }

        if let Some(format) = self.output_format {
            doc.nodes_mut()
                .push(string_node("output-format", format.as_str()));
        }

        doc
    }

    /// Load config from a KDL file.
    ///
    /// Returns an empty config if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;

        let doc: KdlDocument = content.parse().map_err(|e| {
            Error::Config(format!("Failed to parse KDL in {}: {}", path.display(), e))
        })?;

        Self::from_kdl(&doc).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Write config to a KDL file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut doc = self.to_kdl();
        doc.autoformat();
        std::fs::write(path, doc.to_string())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ==================== OutputFormat Tests ====================

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::parse("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("HUMAN"), Some(OutputFormat::Human));
        assert_eq!(OutputFormat::parse("yaml"), None);
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(format!("{}", OutputFormat::Json), "json");
        assert_eq!(format!("{}", OutputFormat::Human), "human");
    }

    // ==================== QdashConfig Tests ====================

    #[test]
    fn test_config_default() {
        let config = QdashConfig::default();
        assert_eq!(config.default_project, None);
        assert_eq!(config.default_tab, None);
        assert_eq!(config.top_n, None);
        assert_eq!(config.aggregate, None);
    }

    #[test]
    fn test_config_validate_top_n() {
        let mut config = QdashConfig {
            top_n: Some(5),
            ..QdashConfig::default()
        };
        assert!(config.validate().is_ok());

        config.top_n = Some(0);
        assert!(config.validate().is_err());

        config.top_n = Some(MAX_TOP_N + 1);
        assert!(config.validate().unwrap_err().contains("top-n"));
    }

    #[test]
    fn test_config_from_kdl_empty() {
        let doc = KdlDocument::new();
        let config = QdashConfig::from_kdl(&doc).unwrap();
        assert_eq!(config, QdashConfig::default());
    }

    #[test]
    fn test_config_from_kdl_full() {
        let kdl = r#"
            default-project "inventory-system"
            default-tab "trends"
            top-n 3
            aggregate "computed"
            log-level "qdash=debug"
            output-format "human"
        "#;
        let doc: KdlDocument = kdl.parse().unwrap();
        let config = QdashConfig::from_kdl(&doc).unwrap();

        assert_eq!(config.default_project, Some(ProjectId::InventorySystem));
        assert_eq!(config.default_tab, Some(Tab::Trends));
        assert_eq!(config.top_n, Some(3));
        assert_eq!(config.aggregate, Some(AggregateMode::Computed));
        assert_eq!(config.log_level, Some("qdash=debug".to_string()));
        assert_eq!(config.output_format, Some(OutputFormat::Human));
    }

    #[test]
    fn test_config_from_kdl_unknown_project() {
        let doc: KdlDocument = r#"default-project "payroll""#.parse().unwrap();
        let err = QdashConfig::from_kdl(&doc).unwrap_err();
        assert!(matches!(err, Error::UnknownProject(_)));
    }

    #[test]
    fn test_config_from_kdl_unknown_tab() {
        let doc: KdlDocument = r#"default-tab "settings""#.parse().unwrap();
        let err = QdashConfig::from_kdl(&doc).unwrap_err();
        assert!(matches!(err, Error::UnknownTab(_)));
    }

    #[test]
    fn test_config_from_kdl_invalid_values() {
        let doc: KdlDocument = r#"aggregate "median""#.parse().unwrap();
        assert!(matches!(
            QdashConfig::from_kdl(&doc).unwrap_err(),
            Error::Config(_)
        ));

        let doc: KdlDocument = r#"top-n "five""#.parse().unwrap();
        assert!(matches!(
            QdashConfig::from_kdl(&doc).unwrap_err(),
            Error::Config(_)
        ));

        let doc: KdlDocument = "top-n 12".parse().unwrap();
        assert!(matches!(
            QdashConfig::from_kdl(&doc).unwrap_err(),
            Error::Config(_)
        ));
    }

    #[test]
    fn test_config_to_kdl_roundtrip() {
        let config = QdashConfig {
            default_project: Some(ProjectId::MobileBanking),
            default_tab: Some(Tab::SonarQube),
            top_n: Some(4),
            aggregate: Some(AggregateMode::Supplied),
            log_level: Some("warn".to_string()),
            output_format: Some(OutputFormat::Json),
        };

        let doc = config.to_kdl();
        let parsed = QdashConfig::from_kdl(&doc).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let config = QdashConfig::load(&dir.path().join("config.kdl")).unwrap();
        assert_eq!(config, QdashConfig::default());
    }

    #[test]
    fn test_load_invalid_kdl() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.kdl");
        std::fs::write(&path, "default-project \"unterminated").unwrap();
        let err = QdashConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.kdl");
        let config = QdashConfig {
            default_project: Some(ProjectId::InventorySystem),
            top_n: Some(2),
            ..QdashConfig::default()
        };
        config.save(&path).unwrap();
        assert_eq!(QdashConfig::load(&path).unwrap(), config);
    }
}
