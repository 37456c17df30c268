//! Data models for the quality dashboard.
//!
//! This module defines the records the dashboard renders:
//! - `Project` - A monitored system with performance, reliability, security and monitoring readings
//! - `QualityCharacteristic` - An ISO/IEC 25010 characteristic with its sub-characteristics
//! - `StaticAnalysisSnapshot` - Counts, percentages and A-E ratings from static analysis
//! - `HistoricalPoint` - One month of score/bugs/coverage history
//! - `ToolIntegration` - A tool feeding metrics into the dashboard
//!
//! Everything here is read-only for the lifetime of the process. The bundled
//! mock data lives in [`fixtures`].

pub mod fixtures;

pub use fixtures::Catalog;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;
use crate::theme;

/// Identifier of a monitored project.
///
/// The set is closed: anything outside it is rejected when parsed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectId {
    #[default]
    EcommercePlatform,
    MobileBanking,
    InventorySystem,
}

impl ProjectId {
    /// All project identifiers in selector order.
    pub const ALL: [ProjectId; 3] = [
        ProjectId::EcommercePlatform,
        ProjectId::MobileBanking,
        ProjectId::InventorySystem,
    ];

    /// Parse from the kebab-case identifier.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "ecommerce-platform" => Some(ProjectId::EcommercePlatform),
            "mobile-banking" => Some(ProjectId::MobileBanking),
            "inventory-system" => Some(ProjectId::InventorySystem),
            _ => None,
        }
    }

    /// Convert to the kebab-case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectId::EcommercePlatform => "ecommerce-platform",
            ProjectId::MobileBanking => "mobile-banking",
            ProjectId::InventorySystem => "inventory-system",
        }
    }

    /// Position in [`ProjectId::ALL`].
    pub fn index(&self) -> usize {
        match self {
            ProjectId::EcommercePlatform => 0,
            ProjectId::MobileBanking => 1,
            ProjectId::InventorySystem => 2,
        }
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProjectId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectId::parse(s).ok_or_else(|| Error::UnknownProject(s.to_string()))
    }
}

/// Direction the overall score is moving in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Arrow glyph shown next to the score.
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
        }
    }
}

/// Request handling and resource readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Average response time in milliseconds
    pub response_time_ms: u32,
    pub requests_per_second: u32,
    /// Percentage of failed requests
    pub error_rate: f64,
    /// CPU usage percentage (0-100)
    pub cpu_usage: u8,
    /// Memory usage percentage (0-100)
    pub memory_usage: u8,
    pub active_users: u32,
}

/// Availability and recovery readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReliabilityMetrics {
    /// Uptime percentage
    pub uptime: f64,
    /// Mean time to recover in minutes
    pub mean_time_to_recover: u32,
    /// Failure rate percentage
    pub failure_rate: f64,
    pub availability_last_24h: f64,
}

/// Vulnerability counts and security scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityMetrics {
    pub vulnerabilities_high: u32,
    pub vulnerabilities_medium: u32,
    pub vulnerabilities_low: u32,
    /// Security score (0-100)
    pub security_score: u8,
    /// Date of the last penetration test
    pub last_pen_test: String,
}

impl SecurityMetrics {
    /// Total number of open vulnerabilities across severities.
    pub fn total_vulnerabilities(&self) -> u32 {
        self.vulnerabilities_high + self.vulnerabilities_medium + self.vulnerabilities_low
    }
}

/// Alerting and incident readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringMetrics {
    pub alerts_last_24h: u32,
    pub incidents_open: u32,
    /// Mean time to resolution in minutes
    pub mttr: u32,
    /// Names of the live monitoring dashboards
    pub dashboards: Vec<String>,
}

/// The four metric groups attached to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetrics {
    pub performance: PerformanceMetrics,
    pub reliability: ReliabilityMetrics,
    pub security: SecurityMetrics,
    pub monitoring: MonitoringMetrics,
}

/// A monitored project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    /// Display name
    pub name: String,
    /// Timestamp label of the last scan (e.g., "2025-11-06 14:30")
    pub last_scan: String,
    /// Overall quality score (0-100)
    pub overall_score: u8,
    pub trend: Trend,
    pub metrics: ProjectMetrics,
}

/// How a characteristic's headline value is obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateMode {
    /// Use the value stored with the characteristic
    #[default]
    Supplied,
    /// Use the rounded mean of the sub-characteristic values
    Computed,
}

impl AggregateMode {
    /// Parse from string, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "supplied" => Some(AggregateMode::Supplied),
            "computed" => Some(AggregateMode::Computed),
            _ => None,
        }
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateMode::Supplied => "supplied",
            AggregateMode::Computed => "computed",
        }
    }
}

impl fmt::Display for AggregateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A measured sub-characteristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCharacteristic {
    pub name: String,
    /// Score (0-100)
    pub value: u8,
    /// Tool or activity the value comes from
    pub source: String,
}

/// An ISO/IEC 25010 quality characteristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityCharacteristic {
    pub name: String,
    /// Aggregate score (0-100) as supplied with the data
    pub value: u8,
    pub subchars: Vec<SubCharacteristic>,
    /// Display colour as a hex string
    pub color: String,
}

impl QualityCharacteristic {
    /// Rounded arithmetic mean of the sub-characteristic values.
    ///
    /// Returns `None` when there are no sub-characteristics.
    pub fn computed_value(&self) -> Option<u8> {
        if self.subchars.is_empty() {
            return None;
        }
        let sum: u32 = self.subchars.iter().map(|s| u32::from(s.value)).sum();
        let mean = f64::from(sum) / self.subchars.len() as f64;
        Some(mean.round().clamp(0.0, 100.0) as u8)
    }

    /// Headline value under the given aggregation mode.
    ///
    /// Falls back to the supplied value when nothing can be computed.
    pub fn effective_value(&self, mode: AggregateMode) -> u8 {
        match mode {
            AggregateMode::Supplied => self.value,
            AggregateMode::Computed => self.computed_value().unwrap_or(self.value),
        }
    }

    /// First word of the name, used as the short chart label.
    pub fn short_label(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}

/// Static-analysis letter grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    A,
    B,
    C,
    D,
    E,
}

impl Rating {
    pub const ALL: [Rating; 5] = [Rating::A, Rating::B, Rating::C, Rating::D, Rating::E];

    /// Parse an upper-case letter grade. No trimming or case folding.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "A" => Some(Rating::A),
            "B" => Some(Rating::B),
            "C" => Some(Rating::C),
            "D" => Some(Rating::D),
            "E" => Some(Rating::E),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::A => "A",
            Rating::B => "B",
            Rating::C => "C",
            Rating::D => "D",
            Rating::E => "E",
        }
    }

    /// Foreground colour token for this grade.
    pub fn color(&self) -> &'static str {
        match self {
            Rating::A => theme::rating::A,
            Rating::B => theme::rating::B,
            Rating::C => theme::rating::C,
            Rating::D => theme::rating::D,
            Rating::E => theme::rating::E,
        }
    }

    /// Background colour token for this grade.
    pub fn background(&self) -> &'static str {
        match self {
            Rating::A => theme::rating::A_BG,
            Rating::B => theme::rating::B_BG,
            Rating::C => theme::rating::C_BG,
            Rating::D => theme::rating::D_BG,
            Rating::E => theme::rating::E_BG,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Results of the latest static-analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticAnalysisSnapshot {
    pub bugs: u32,
    pub vulnerabilities: u32,
    pub code_smells: u32,
    /// Test coverage percentage
    pub coverage: f64,
    /// Duplicated lines percentage
    pub duplications: f64,
    /// Estimated remediation effort (e.g., "15d 4h")
    pub technical_debt: String,
    pub reliability_rating: Rating,
    pub security_rating: Rating,
    pub maintainability_rating: Rating,
    pub lines_of_code: u64,
    /// Cyclomatic complexity summed over the code base
    pub complexity: u64,
}

/// One month of history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    /// Month label (e.g., "May")
    pub month: String,
    pub score: u8,
    pub bugs: u32,
    pub coverage: f64,
}

/// Connectivity status of an integrated tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    #[default]
    Active,
    Inactive,
}

impl ToolStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, ToolStatus::Active)
    }
}

/// A tool that feeds metrics into the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolIntegration {
    pub name: String,
    pub status: ToolStatus,
    /// Relative label of the last sync (e.g., "2 min ago")
    pub last_sync: String,
    /// Metric categories this tool provides
    pub metrics: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn characteristic(name: &str, value: u8, subs: &[u8]) -> QualityCharacteristic {
        QualityCharacteristic {
            name: name.to_string(),
            value,
            subchars: subs
                .iter()
                .enumerate()
                .map(|(i, v)| SubCharacteristic {
                    name: format!("sub {}", i),
                    value: *v,
                    source: "test".to_string(),
                })
                .collect(),
            color: "#000000".to_string(),
        }
    }

    #[test]
    fn test_project_id_parse() {
        assert_eq!(
            ProjectId::parse("inventory-system"),
            Some(ProjectId::InventorySystem)
        );
        assert_eq!(
            ProjectId::parse(" mobile-banking "),
            Some(ProjectId::MobileBanking)
        );
        assert_eq!(ProjectId::parse("Inventory-System"), None);
        assert_eq!(ProjectId::parse(""), None);
    }

    #[test]
    fn test_project_id_from_str_unknown() {
        let err = "payroll".parse::<ProjectId>().unwrap_err();
        assert!(matches!(err, Error::UnknownProject(ref id) if id == "payroll"));
    }

    #[test]
    fn test_project_id_as_str_matches_parse() {
        for id in ProjectId::ALL {
            assert_eq!(ProjectId::parse(id.as_str()), Some(id));
            assert_eq!(ProjectId::ALL[id.index()], id);
        }
    }

    #[test]
    fn test_project_id_serde_kebab_case() {
        let json = serde_json::to_string(&ProjectId::EcommercePlatform).unwrap();
        assert_eq!(json, "\"ecommerce-platform\"");
        let back: ProjectId = serde_json::from_str("\"mobile-banking\"").unwrap();
        assert_eq!(back, ProjectId::MobileBanking);
    }

    #[test]
    fn test_rating_parse() {
        for rating in Rating::ALL {
            assert_eq!(Rating::parse(rating.as_str()), Some(rating));
        }
        assert_eq!(Rating::parse("a"), None);
        assert_eq!(Rating::parse(" B "), None);
        assert_eq!(Rating::parse("F"), None);
        assert_eq!(Rating::parse("AB"), None);
    }

    #[test]
    fn test_computed_value_rounds_mean() {
        let c = characteristic("Usability", 88, &[90, 87, 89, 86, 88, 85]);
        assert_eq!(c.computed_value(), Some(88));

        let c = characteristic("Security", 75, &[78, 80, 72, 75, 73]);
        assert_eq!(c.computed_value(), Some(76));
    }

    #[test]
    fn test_computed_value_empty() {
        let c = characteristic("Empty", 42, &[]);
        assert_eq!(c.computed_value(), None);
        assert_eq!(c.effective_value(AggregateMode::Computed), 42);
    }

    #[test]
    fn test_effective_value_modes() {
        let c = characteristic("Security", 75, &[78, 80, 72, 75, 73]);
        assert_eq!(c.effective_value(AggregateMode::Supplied), 75);
        assert_eq!(c.effective_value(AggregateMode::Computed), 76);
    }

    #[test]
    fn test_short_label() {
        assert_eq!(
            characteristic("Performance Efficiency", 0, &[]).short_label(),
            "Performance"
        );
        assert_eq!(characteristic("Usability", 0, &[]).short_label(), "Usability");
        assert_eq!(characteristic("", 0, &[]).short_label(), "");
    }

    #[test]
    fn test_aggregate_mode_parse() {
        assert_eq!(AggregateMode::parse("COMPUTED"), Some(AggregateMode::Computed));
        assert_eq!(AggregateMode::parse("supplied"), Some(AggregateMode::Supplied));
        assert_eq!(AggregateMode::parse("mean"), None);
        assert_eq!(AggregateMode::default(), AggregateMode::Supplied);
    }
}
