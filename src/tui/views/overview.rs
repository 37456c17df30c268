//! Overview tab: monitoring banner, KPI cards, resources, security, charts
//! and rating tiles.

use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Paragraph},
};

use crate::projector::OverviewView;
use crate::theme;
use crate::tui::widgets::{KpiCardWidget, RatingTile, UsageGauge, bar_line, color, panel};

/// Widest radar label plus padding.
const RADAR_LABEL_WIDTH: usize = 14;

pub struct OverviewPanel<'a> {
    view: &'a OverviewView,
}

impl<'a> OverviewPanel<'a> {
    pub fn new(view: &'a OverviewView) -> Self {
        Self { view }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Monitoring banner
                Constraint::Length(5),  // KPI cards
                Constraint::Length(7),  // Resources and security
                Constraint::Min(10),    // Radar and top-N
                Constraint::Length(4),  // Ratings
            ])
            .split(area);

        self.render_banner(frame, rows[0]);
        self.render_kpis(frame, rows[1]);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);
        self.render_resources(frame, middle[0]);
        self.render_security(frame, middle[1]);

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[3]);
        self.render_radar(frame, charts[0]);
        self.render_top_bars(frame, charts[1]);

        self.render_ratings(frame, rows[4]);
    }

    fn render_banner(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled("● ", Style::default().fg(color(theme::status::SUCCESS))),
            Span::styled(
                "Real-time monitoring active",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "  {}  ",
                self.view.monitoring_dashboards.join(" · ")
            )),
            Span::styled(
                format!("Last updated: {}", self.view.last_updated),
                Style::default().fg(color(theme::text::SECONDARY)),
            ),
        ]);
        frame.render_widget(Paragraph::new(line).block(panel("Monitoring")), area);
    }

    fn render_kpis(&self, frame: &mut Frame, area: Rect) {
        let constraints = vec![Constraint::Ratio(1, 4); self.view.kpis.len().max(1)];
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);
        for (card, col) in self.view.kpis.iter().zip(cols.iter()) {
            KpiCardWidget::new(card).render(frame, *col);
        }
    }

    fn render_resources(&self, frame: &mut Frame, area: Rect) {
        let block = panel("Resources");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);
        UsageGauge::new("CPU", self.view.cpu_usage).render(frame, rows[0]);
        UsageGauge::new("RAM", self.view.memory_usage).render(frame, rows[1]);
        let users = Line::from(vec![
            Span::styled(
                "Active users: ",
                Style::default().fg(color(theme::text::SECONDARY)),
            ),
            Span::styled(
                self.view.active_users.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(users), rows[3]);
    }

    fn render_security(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(vec![
            Span::raw("Score "),
            Span::styled(
                format!("{}/100", self.view.security_score),
                Style::default()
                    .fg(color(theme::brand::ACCENT))
                    .add_modifier(Modifier::BOLD),
            ),
        ])];
        for row in &self.view.vulnerabilities {
            lines.push(Line::from(vec![
                Span::styled("■ ", Style::default().fg(color(&row.color))),
                Span::raw(format!("{:<7}", row.severity)),
                Span::styled(
                    row.count.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        lines.push(Line::from(Span::styled(
            format!("Last pen test: {}", self.view.last_pen_test),
            Style::default().fg(color(theme::text::SECONDARY)),
        )));
        let title = format!("Security ({} open)", self.view.vulnerabilities_total);
        frame.render_widget(Paragraph::new(lines).block(panel(&title)), area);
    }

    fn render_radar(&self, frame: &mut Frame, area: Rect) {
        let block = panel("ISO/IEC 25010 Characteristics");
        let inner = block.inner(area);
        let bar_width = usize::from(inner.width).saturating_sub(RADAR_LABEL_WIDTH + 5);
        let lines: Vec<Line> = self
            .view
            .radar
            .iter()
            .map(|row| {
                bar_line(
                    &row.label,
                    RADAR_LABEL_WIDTH,
                    row.value,
                    100,
                    bar_width,
                    color(theme::brand::ACCENT),
                )
            })
            .collect();
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_top_bars(&self, frame: &mut Frame, area: Rect) {
        let bars: Vec<Bar> = self
            .view
            .top_bars
            .iter()
            .map(|entry| {
                let label = entry.name.split_whitespace().next().unwrap_or("");
                Bar::default()
                    .value(u64::from(entry.value))
                    .label(Line::from(label.to_string()))
                    .style(Style::default().fg(color(&entry.color)))
            })
            .collect();

        let count = bars.len().max(1) as u16;
        let inner_width = area.width.saturating_sub(2);
        let bar_width = (inner_width / count).saturating_sub(1).clamp(1, 14);

        let chart = BarChart::default()
            .block(panel(&format!("Top {} Characteristics", self.view.top_bars.len())))
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(1)
            .max(100);
        frame.render_widget(chart, area);
    }

    fn render_ratings(&self, frame: &mut Frame, area: Rect) {
        let n = self.view.ratings.len().max(1) as u32;
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, n); n as usize])
            .split(area);
        for (card, col) in self.view.ratings.iter().zip(cols.iter()) {
            RatingTile::new(card).render(frame, *col);
        }
    }
}
