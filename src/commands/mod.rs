//! Command implementations for the qdash CLI.
//!
//! Each command returns a result type implementing [`CommandResult`], which
//! `main` prints as JSON (default) or human-readable text (`-H`):
//! - `snapshot` - The dashboard view for one project and tab
//! - `projects` - Known projects with their headline score
//! - `config show` / `config init` - Resolved configuration

use std::fmt::Write as _;
use std::path::PathBuf;

use chrono::NaiveTime;
use serde::Serialize;

use crate::config::{QdashConfig, ResolvedConfig};
use crate::models::{Catalog, ProjectId, Trend};
use crate::projector::{
    CharacteristicsView, DashboardView, KpiCard, OverviewView, ProjectionOptions, RatingCard,
    SonarQubeView, TabView, ToolsView, TrendsView,
};
use crate::state::DashboardState;
use crate::{Error, Result};

/// Command results that can be serialized to JSON or formatted for humans.
pub trait CommandResult {
    /// Serialize to JSON string.
    fn to_json(&self) -> String;

    /// Format for human-readable output.
    fn to_human(&self) -> String;
}

fn json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|e| format!(r#"{{"error": "serialization failed: {}"}}"#, e))
}

// === Snapshot ===

/// Build the dashboard view for `state`, sampling the clock at `now`.
pub fn snapshot(
    state: &DashboardState,
    catalog: &Catalog,
    options: &ProjectionOptions,
    now: NaiveTime,
) -> Result<DashboardView> {
    tracing::info!(project = %state.project, tab = %state.tab, "building snapshot");
    DashboardView::build(state, catalog, options, now)
}

impl CommandResult for DashboardView {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} [{}]", self.project_name, self.state.tab.title());
        let _ = writeln!(out, "Last scan: {}", self.last_scan);
        out.push('\n');
        match &self.body {
            TabView::Overview(v) => human_overview(&mut out, v),
            TabView::Characteristics(v) => human_characteristics(&mut out, v),
            TabView::SonarQube(v) => human_sonarqube(&mut out, v),
            TabView::Trends(v) => human_trends(&mut out, v),
            TabView::Tools(v) => human_tools(&mut out, v),
        }
        out.trim_end().to_string()
    }
}

fn human_kpi(out: &mut String, card: &KpiCard) {
    let arrow = card.trend.map(|t| format!(" {}", t.arrow())).unwrap_or_default();
    let _ = write!(out, "  {:<14} {}{}", card.title, card.headline, arrow);
    if let Some(caption) = &card.caption {
        let _ = write!(out, " ({})", caption);
    }
    let details: Vec<String> = card
        .details
        .iter()
        .map(|d| format!("{}: {}", d.label, d.value))
        .collect();
    let _ = writeln!(out, "  {}", details.join(", "));
}

fn human_ratings(out: &mut String, ratings: &[RatingCard]) {
    for r in ratings {
        let _ = writeln!(out, "  {:<16} {}  {} {}", r.label, r.rating, r.count, r.issues);
    }
}

fn human_overview(out: &mut String, v: &OverviewView) {
    let _ = writeln!(
        out,
        "Monitoring: {} (last updated {})",
        v.monitoring_dashboards.join(", "),
        v.last_updated
    );
    out.push('\n');
    for card in &v.kpis {
        human_kpi(out, card);
    }
    let _ = writeln!(
        out,
        "\nResources: CPU {}%, RAM {}%, {} active users",
        v.cpu_usage, v.memory_usage, v.active_users
    );
    let vulns: Vec<String> = v
        .vulnerabilities
        .iter()
        .map(|row| format!("{} {}", row.severity, row.count))
        .collect();
    let _ = writeln!(
        out,
        "Security: score {}, {} open ({}), pen test {}",
        v.security_score,
        v.vulnerabilities_total,
        vulns.join(", "),
        v.last_pen_test
    );
    let _ = writeln!(out, "\nISO/IEC 25010:");
    for row in &v.radar {
        let _ = writeln!(out, "  {:<16} {}", row.label, row.value);
    }
    let _ = writeln!(out, "\nTop {}:", v.top_bars.len());
    for (rank, bar) in v.top_bars.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} {}", rank + 1, bar.name, bar.value);
    }
    let _ = writeln!(out, "\nRatings:");
    human_ratings(out, &v.ratings);
}

fn human_characteristics(out: &mut String, v: &CharacteristicsView) {
    let _ = writeln!(out, "Aggregate: {}", v.aggregate);
    for c in &v.characteristics {
        let _ = writeln!(
            out,
            "\n{} {} ({} sub-characteristics)",
            c.name,
            c.value,
            c.subchars.len()
        );
        for sub in &c.subchars {
            let _ = writeln!(out, "  {:<26} {:>3}  {}", sub.name, sub.value, sub.source);
        }
    }
}

fn human_sonarqube(out: &mut String, v: &SonarQubeView) {
    let _ = writeln!(out, "Lines of code:  {}", v.lines_of_code);
    let _ = writeln!(out, "Complexity:     {}", v.complexity);
    let _ = writeln!(out, "Coverage:       {}", v.coverage);
    let _ = writeln!(out, "Duplications:   {}", v.duplications);
    let _ = writeln!(out, "Technical debt: {}", v.technical_debt);
    let _ = writeln!(out, "\nRatings:");
    human_ratings(out, &v.ratings);
}

fn human_trends(out: &mut String, v: &TrendsView) {
    let _ = writeln!(out, "{:<6} {:>6} {:>6} {:>9}", "Month", "Score", "Bugs", "Coverage");
    for ((score, bugs), coverage) in v.score.iter().zip(&v.bugs).zip(&v.coverage) {
        let _ = writeln!(
            out,
            "{:<6} {:>6} {:>6} {:>8}%",
            score.label, score.value, bugs.value, coverage.value
        );
    }
    out.push('\n');
    for s in &v.summaries {
        let _ = writeln!(out, "{}: {}", s.metric.title(), s.display);
    }
}

fn human_tools(out: &mut String, v: &ToolsView) {
    let _ = writeln!(out, "{} of {} tools active", v.active, v.tools.len());
    for tool in &v.tools {
        let dot = if tool.status.is_active() { "●" } else { "○" };
        let _ = writeln!(
            out,
            "  {} {:<22} synced {}  [{}]",
            dot,
            tool.name,
            tool.last_sync,
            tool.metrics.join(", ")
        );
    }
}

// === Projects ===

/// One row of `qdash projects`.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectSummary {
    pub id: ProjectId,
    pub name: String,
    pub overall_score: u8,
    pub trend: Trend,
    pub last_scan: String,
}

/// Result of `qdash projects`.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectList {
    pub projects: Vec<ProjectSummary>,
    pub count: usize,
}

impl CommandResult for ProjectList {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        if self.projects.is_empty() {
            return "No projects.".to_string();
        }
        self.projects
            .iter()
            .map(|p| {
                format!(
                    "{:<20} {:<22} {:>3} {}  (scanned {})",
                    p.id.as_str(),
                    p.name,
                    p.overall_score,
                    p.trend.arrow(),
                    p.last_scan
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// List the catalog's projects.
pub fn projects(catalog: &Catalog) -> ProjectList {
    let projects: Vec<ProjectSummary> = catalog
        .projects
        .iter()
        .map(|p| ProjectSummary {
            id: p.id,
            name: p.name.clone(),
            overall_score: p.overall_score,
            trend: p.trend,
            last_scan: p.last_scan.clone(),
        })
        .collect();
    ProjectList {
        count: projects.len(),
        projects,
    }
}

// === Config ===

impl CommandResult for ResolvedConfig {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        let rows = [
            ("default-project", self.project.value.to_string(), &self.project.source),
            ("default-tab", self.tab.value.to_string(), &self.tab.source),
            ("top-n", self.top_n.value.to_string(), &self.top_n.source),
            ("aggregate", self.aggregate.value.to_string(), &self.aggregate.source),
            ("log-level", self.log_level.value.clone(), &self.log_level.source),
            (
                "output-format",
                self.output_format.value.as_str().to_string(),
                &self.output_format.source,
            ),
        ];
        let mut out = format!("Config file: {}\n", self.config_path.display());
        for (key, value, source) in rows {
            let _ = writeln!(out, "  {:<16} {:<20} ({})", key, value, source);
        }
        out.trim_end().to_string()
    }
}

/// Result of `qdash config init`.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigInit {
    pub path: PathBuf,
    pub overwritten: bool,
}

impl CommandResult for ConfigInit {
    fn to_json(&self) -> String {
        json(self)
    }

    fn to_human(&self) -> String {
        if self.overwritten {
            format!("Overwrote {}", self.path.display())
        } else {
            format!("Wrote {}", self.path.display())
        }
    }
}

/// Write the resolved configuration to its config file. `file` is the
/// config as currently on disk.
pub fn config_init(
    resolved: &ResolvedConfig,
    file: &QdashConfig,
    force: bool,
) -> Result<ConfigInit> {
    let path = resolved.config_path.clone();
    let exists = path.exists();
    if exists && !force {
        return Err(Error::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    resolved.to_config(file).save(&path)?;
    tracing::info!(path = %path.display(), "wrote config");
    Ok(ConfigInit {
        path,
        overwritten: exists,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigOverrides, LoadedConfig, QdashConfig, resolve_config_with_env};
    use crate::state::Tab;
    use tempfile::TempDir;

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 0, 0).unwrap()
    }

    fn view(project: ProjectId, tab: Tab) -> DashboardView {
        snapshot(
            &DashboardState::new(project, tab),
            &Catalog::builtin(),
            &ProjectionOptions::default(),
            noon(),
        )
        .unwrap()
    }

    #[test]
    fn test_snapshot_json_inventory_overview() {
        let out = view(ProjectId::InventorySystem, Tab::Overview).to_json();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["state"]["project"], "inventory-system");
        assert_eq!(value["body"]["tab"], "overview");
        assert_eq!(value["body"]["kpis"][0]["headline"], "88");
        assert_eq!(value["body"]["kpis"][1]["headline"], "120ms");
        assert_eq!(value["body"]["kpis"][2]["headline"], "99.99%");
        assert_eq!(value["body"]["last_updated"], "12:00:00");
    }

    #[test]
    fn test_snapshot_human_overview() {
        let out = view(ProjectId::InventorySystem, Tab::Overview).to_human();
        assert!(out.contains("Overall Score"));
        assert!(out.contains("88"));
        assert!(out.contains("120ms"));
        assert!(out.contains("99.99%"));
        assert!(out.contains("last updated 12:00:00"));
    }

    #[test]
    fn test_snapshot_human_every_tab() {
        for tab in Tab::ALL {
            let out = view(ProjectId::EcommercePlatform, tab).to_human();
            assert!(out.contains(tab.title()), "missing title for {}", tab);
        }
    }

    #[test]
    fn test_snapshot_human_sonarqube() {
        let out = view(ProjectId::MobileBanking, Tab::SonarQube).to_human();
        assert!(out.contains("45,320"));
        assert!(out.contains("15d 4h"));
        assert!(out.contains("Maintainability"));
    }

    #[test]
    fn test_projects_lists_all() {
        let list = projects(&Catalog::builtin());
        assert_eq!(list.count, 3);
        let human = list.to_human();
        assert!(human.contains("ecommerce-platform"));
        assert!(human.contains("inventory-system"));
        let value: serde_json::Value = serde_json::from_str(&list.to_json()).unwrap();
        assert_eq!(value["projects"][2]["id"], "inventory-system");
    }

    #[test]
    fn test_projects_empty_catalog() {
        let catalog = Catalog {
            projects: Vec::new(),
            ..Catalog::builtin()
        };
        assert_eq!(projects(&catalog).to_human(), "No projects.");
    }

    fn resolved_at(path: PathBuf) -> ResolvedConfig {
        let loaded = LoadedConfig {
            path,
            config: QdashConfig::default(),
        };
        resolve_config_with_env(
            &loaded,
            &ConfigOverrides::new().with_tab(Tab::Trends),
            None,
        )
    }

    #[test]
    fn test_config_show_human_has_sources() {
        let resolved = resolved_at(PathBuf::from("/tmp/qdash.kdl"));
        let out = resolved.to_human();
        assert!(out.contains("default-tab"));
        assert!(out.contains("trends"));
        assert!(out.contains("(cli)"));
        assert!(out.contains("(default)"));
    }

    #[test]
    fn test_config_init_writes_and_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.kdl");
        let resolved = resolved_at(path.clone());

        let first = config_init(&resolved, &QdashConfig::default(), false).unwrap();
        assert!(!first.overwritten);
        let written = QdashConfig::load(&path).unwrap();
        assert_eq!(written.default_tab, Some(Tab::Trends));

        let err = config_init(&resolved, &QdashConfig::default(), false).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let second = config_init(&resolved, &QdashConfig::default(), true).unwrap();
        assert!(second.overwritten);
    }
}
