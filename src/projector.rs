//! Derived views of the catalog.
//!
//! Every function here is pure: the same inputs always produce the same
//! output and nothing is cached or mutated. [`DashboardView::build`] assembles
//! the view for one [`DashboardState`]; the TUI renders it and
//! `qdash snapshot` prints it.

use chrono::NaiveTime;
use serde::Serialize;

use crate::format;
use crate::models::{
    AggregateMode, Catalog, HistoricalPoint, Project, QualityCharacteristic, Rating,
    StaticAnalysisSnapshot, SubCharacteristic, ToolIntegration, Trend,
};
use crate::state::{DashboardState, Tab};
use crate::theme;
use crate::{Error, Result};

/// Default number of bars in the top characteristics chart.
pub const DEFAULT_TOP_N: usize = 5;

/// One spoke of the radar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadarRow {
    pub label: String,
    pub value: u8,
}

/// One bar of the top characteristics chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarEntry {
    pub name: String,
    pub value: u8,
    pub color: String,
}

/// Radar rows: first word of each name with its value, in input order.
pub fn radar_rows(characteristics: &[QualityCharacteristic]) -> Vec<RadarRow> {
    characteristics
        .iter()
        .map(|c| RadarRow {
            label: c.short_label().to_string(),
            value: c.value,
        })
        .collect()
}

/// The `n` highest characteristics, descending. Ties keep input order.
pub fn top_n_bars(characteristics: &[QualityCharacteristic], n: usize) -> Vec<BarEntry> {
    let mut sorted: Vec<&QualityCharacteristic> = characteristics.iter().collect();
    // sort_by is stable
    sorted.sort_by(|a, b| b.value.cmp(&a.value));
    sorted
        .into_iter()
        .take(n)
        .map(|c| BarEntry {
            name: c.name.clone(),
            value: c.value,
            color: c.color.clone(),
        })
        .collect()
}

/// Copy of the characteristics with each value resolved under `mode`.
pub fn aggregated(
    characteristics: &[QualityCharacteristic],
    mode: AggregateMode,
) -> Vec<QualityCharacteristic> {
    characteristics
        .iter()
        .map(|c| QualityCharacteristic {
            value: c.effective_value(mode),
            ..c.clone()
        })
        .collect()
}

/// Foreground token for a letter grade; neutral for anything outside A-E.
pub fn rating_color(grade: &str) -> &'static str {
    Rating::parse(grade).map_or(theme::rating::NEUTRAL, |r| r.color())
}

/// Background token for a letter grade; neutral for anything outside A-E.
pub fn rating_background(grade: &str) -> &'static str {
    Rating::parse(grade).map_or(theme::rating::NEUTRAL_BG, |r| r.background())
}

/// Secondary label/value pair on a KPI card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiDetail {
    pub label: String,
    pub value: String,
}

impl KpiDetail {
    fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// A headline metric with its breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiCard {
    pub title: String,
    pub headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub details: Vec<KpiDetail>,
}

/// The four KPI cards of the overview for one project.
pub fn kpi_cards(project: &Project) -> [KpiCard; 4] {
    let perf = &project.metrics.performance;
    let rel = &project.metrics.reliability;
    let mon = &project.metrics.monitoring;

    [
        KpiCard {
            title: "Overall Score".to_string(),
            headline: format::count(project.overall_score),
            trend: Some(project.trend),
            caption: Some("out of 100".to_string()),
            details: vec![
                KpiDetail::new("CPU", format::percent(f64::from(perf.cpu_usage))),
                KpiDetail::new("RAM", format::percent(f64::from(perf.memory_usage))),
            ],
        },
        KpiCard {
            title: "Response Time".to_string(),
            headline: format::ms(perf.response_time_ms),
            trend: None,
            caption: Some("average".to_string()),
            details: vec![
                KpiDetail::new("RPS", format::count(perf.requests_per_second)),
                KpiDetail::new("Error", format::percent(perf.error_rate)),
            ],
        },
        KpiCard {
            title: "Uptime".to_string(),
            headline: format::percent(rel.uptime),
            trend: None,
            caption: Some(format!(
                "{} last 24h",
                format::percent(rel.availability_last_24h)
            )),
            details: vec![
                KpiDetail::new("MTTR", format::minutes(rel.mean_time_to_recover)),
                KpiDetail::new("Failures", format::percent(rel.failure_rate)),
            ],
        },
        KpiCard {
            title: "Alerts (24h)".to_string(),
            headline: format::count(mon.alerts_last_24h),
            trend: None,
            caption: None,
            details: vec![
                KpiDetail::new("Incidents", format::count(mon.incidents_open)),
                KpiDetail::new("MTTR", format::minutes(mon.mttr)),
            ],
        },
    ]
}

/// Vulnerability count for one severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VulnerabilityRow {
    pub severity: String,
    pub count: u32,
    pub color: String,
}

/// High/medium/low vulnerability rows for a project.
pub fn security_breakdown(project: &Project) -> Vec<VulnerabilityRow> {
    let sec = &project.metrics.security;
    [
        ("High", sec.vulnerabilities_high, theme::rating::E),
        ("Medium", sec.vulnerabilities_medium, theme::rating::D),
        ("Low", sec.vulnerabilities_low, theme::rating::C),
    ]
    .into_iter()
    .map(|(severity, count, color)| VulnerabilityRow {
        severity: severity.to_string(),
        count,
        color: color.to_string(),
    })
    .collect()
}

/// A letter grade with the issue count behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingCard {
    pub label: String,
    pub rating: Rating,
    pub color: String,
    pub background: String,
    pub count: u32,
    pub issues: String,
}

/// Reliability, security and maintainability grades.
pub fn rating_cards(snapshot: &StaticAnalysisSnapshot) -> Vec<RatingCard> {
    [
        ("Reliability", snapshot.reliability_rating, snapshot.bugs, "bugs"),
        (
            "Security",
            snapshot.security_rating,
            snapshot.vulnerabilities,
            "vulnerabilities",
        ),
        (
            "Maintainability",
            snapshot.maintainability_rating,
            snapshot.code_smells,
            "code smells",
        ),
    ]
    .into_iter()
    .map(|(label, rating, count, issues)| RatingCard {
        label: label.to_string(),
        rating,
        color: rating.color().to_string(),
        background: rating.background().to_string(),
        count,
        issues: issues.to_string(),
    })
    .collect()
}

/// Series available in the history charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendMetric {
    Score,
    Bugs,
    Coverage,
}

impl TrendMetric {
    pub const ALL: [TrendMetric; 3] = [TrendMetric::Score, TrendMetric::Bugs, TrendMetric::Coverage];

    pub fn title(&self) -> &'static str {
        match self {
            TrendMetric::Score => "ISO 25010 Score",
            TrendMetric::Bugs => "Bugs (SonarQube)",
            TrendMetric::Coverage => "Coverage % (Jest/JUnit)",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            TrendMetric::Score => theme::trend::SCORE,
            TrendMetric::Bugs => theme::trend::BUGS,
            TrendMetric::Coverage => theme::trend::COVERAGE,
        }
    }

    fn value(&self, point: &HistoricalPoint) -> f64 {
        match self {
            TrendMetric::Score => f64::from(point.score),
            TrendMetric::Bugs => f64::from(point.bugs),
            TrendMetric::Coverage => point.coverage,
        }
    }
}

/// A labelled point of a history series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub value: f64,
}

/// One metric over the history, in chronological order.
pub fn trend_series(history: &[HistoricalPoint], metric: TrendMetric) -> Vec<TrendPoint> {
    history
        .iter()
        .map(|p| TrendPoint {
            label: p.month.clone(),
            value: metric.value(p),
        })
        .collect()
}

/// Last value minus first value; `None` for an empty history.
pub fn trend_delta(history: &[HistoricalPoint], metric: TrendMetric) -> Option<f64> {
    let first = history.first()?;
    let last = history.last()?;
    // Rounded to one decimal to keep float noise out of the display
    Some(((metric.value(last) - metric.value(first)) * 10.0).round() / 10.0)
}

/// Knobs that change how views are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectionOptions {
    pub top_n: usize,
    pub aggregate: AggregateMode,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            aggregate: AggregateMode::Supplied,
        }
    }
}

/// Overview tab contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewView {
    pub last_updated: String,
    pub monitoring_dashboards: Vec<String>,
    pub kpis: Vec<KpiCard>,
    pub cpu_usage: u8,
    pub memory_usage: u8,
    pub active_users: String,
    pub vulnerabilities: Vec<VulnerabilityRow>,
    pub vulnerabilities_total: u32,
    pub security_score: u8,
    pub last_pen_test: String,
    pub radar: Vec<RadarRow>,
    pub top_bars: Vec<BarEntry>,
    pub ratings: Vec<RatingCard>,
}

/// A characteristic with both its supplied and computed aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacteristicCard {
    pub name: String,
    /// Value under the active aggregation mode
    pub value: u8,
    pub supplied_value: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed_value: Option<u8>,
    pub color: String,
    pub subchars: Vec<SubCharacteristic>,
}

/// Characteristics tab contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacteristicsView {
    pub aggregate: AggregateMode,
    pub characteristics: Vec<CharacteristicCard>,
}

/// SonarQube tab contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SonarQubeView {
    pub lines_of_code: String,
    pub complexity: String,
    pub coverage: String,
    pub duplications: String,
    pub technical_debt: String,
    pub ratings: Vec<RatingCard>,
}

/// Change of a history metric from the first to the last point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSummary {
    pub metric: TrendMetric,
    pub delta: f64,
    pub display: String,
}

/// Trends tab contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendsView {
    pub score: Vec<TrendPoint>,
    pub bugs: Vec<TrendPoint>,
    pub coverage: Vec<TrendPoint>,
    pub summaries: Vec<TrendSummary>,
}

/// Tools tab contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolsView {
    pub active: usize,
    pub tools: Vec<ToolIntegration>,
}

/// Contents of the active tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tab", rename_all = "lowercase")]
pub enum TabView {
    Overview(OverviewView),
    Characteristics(CharacteristicsView),
    SonarQube(SonarQubeView),
    Trends(TrendsView),
    Tools(ToolsView),
}

/// Everything needed to draw the dashboard for one state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub state: DashboardState,
    pub project_name: String,
    pub last_scan: String,
    pub body: TabView,
}

impl DashboardView {
    /// Derive the view for `state`.
    ///
    /// `now` is only read by the overview's last-updated indicator.
    pub fn build(
        state: &DashboardState,
        catalog: &Catalog,
        options: &ProjectionOptions,
        now: NaiveTime,
    ) -> Result<Self> {
        let project = catalog
            .project(state.project)
            .ok_or_else(|| Error::NotFound(format!("project {}", state.project)))?;

        let body = match state.tab {
            Tab::Overview => TabView::Overview(overview(project, catalog, options, now)),
            Tab::Characteristics => TabView::Characteristics(characteristics(catalog, options)),
            Tab::SonarQube => TabView::SonarQube(sonarqube(&catalog.static_analysis)),
            Tab::Trends => TabView::Trends(trends(&catalog.history)),
            Tab::Tools => TabView::Tools(tools(&catalog.tools)),
        };

        Ok(Self {
            state: *state,
            project_name: project.name.clone(),
            last_scan: project.last_scan.clone(),
            body,
        })
    }
}

fn overview(
    project: &Project,
    catalog: &Catalog,
    options: &ProjectionOptions,
    now: NaiveTime,
) -> OverviewView {
    let chars = aggregated(&catalog.characteristics, options.aggregate);
    let perf = &project.metrics.performance;
    let sec = &project.metrics.security;

    OverviewView {
        last_updated: format::last_updated(now),
        monitoring_dashboards: project.metrics.monitoring.dashboards.clone(),
        kpis: kpi_cards(project).to_vec(),
        cpu_usage: perf.cpu_usage,
        memory_usage: perf.memory_usage,
        active_users: format::thousands(u64::from(perf.active_users)),
        vulnerabilities: security_breakdown(project),
        vulnerabilities_total: sec.total_vulnerabilities(),
        security_score: sec.security_score,
        last_pen_test: sec.last_pen_test.clone(),
        radar: radar_rows(&chars),
        top_bars: top_n_bars(&chars, options.top_n),
        ratings: rating_cards(&catalog.static_analysis),
    }
}

fn characteristics(catalog: &Catalog, options: &ProjectionOptions) -> CharacteristicsView {
    CharacteristicsView {
        aggregate: options.aggregate,
        characteristics: catalog
            .characteristics
            .iter()
            .map(|c| CharacteristicCard {
                name: c.name.clone(),
                value: c.effective_value(options.aggregate),
                supplied_value: c.value,
                computed_value: c.computed_value(),
                color: c.color.clone(),
                subchars: c.subchars.clone(),
            })
            .collect(),
    }
}

fn sonarqube(snapshot: &StaticAnalysisSnapshot) -> SonarQubeView {
    SonarQubeView {
        lines_of_code: format::thousands(snapshot.lines_of_code),
        complexity: format::thousands(snapshot.complexity),
        coverage: format::percent(snapshot.coverage),
        duplications: format::percent(snapshot.duplications),
        technical_debt: snapshot.technical_debt.clone(),
        ratings: rating_cards(snapshot),
    }
}

fn trends(history: &[HistoricalPoint]) -> TrendsView {
    let summaries = TrendMetric::ALL
        .into_iter()
        .filter_map(|metric| {
            trend_delta(history, metric).map(|delta| TrendSummary {
                metric,
                delta,
                display: match metric {
                    TrendMetric::Coverage => format!("{}%", format::signed(delta)),
                    _ => format::signed(delta),
                },
            })
        })
        .collect();

    TrendsView {
        score: trend_series(history, TrendMetric::Score),
        bugs: trend_series(history, TrendMetric::Bugs),
        coverage: trend_series(history, TrendMetric::Coverage),
        summaries,
    }
}

fn tools(tools: &[ToolIntegration]) -> ToolsView {
    ToolsView {
        active: tools.iter().filter(|t| t.status.is_active()).count(),
        tools: tools.to_vec(),
    }
}
