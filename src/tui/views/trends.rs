//! Trends tab: one line chart per history metric and the first-to-last deltas.

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph},
};

use crate::projector::{TrendMetric, TrendPoint, TrendsView};
use crate::theme;
use crate::tui::widgets::{color, panel};

pub struct TrendsPanel<'a> {
    view: &'a TrendsView,
}

impl<'a> TrendsPanel<'a> {
    pub fn new(view: &'a TrendsView) -> Self {
        Self { view }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(3)])
            .split(area);

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(rows[0]);

        let series = [
            (TrendMetric::Score, &self.view.score),
            (TrendMetric::Bugs, &self.view.bugs),
            (TrendMetric::Coverage, &self.view.coverage),
        ];
        for ((metric, points), area) in series.into_iter().zip(charts.iter()) {
            render_chart(frame, *area, metric, points);
        }

        self.render_summaries(frame, rows[1]);
    }

    fn render_summaries(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for summary in &self.view.summaries {
            // Fewer bugs is an improvement
            let improving = match summary.metric {
                TrendMetric::Bugs => summary.delta <= 0.0,
                _ => summary.delta >= 0.0,
            };
            let tone = if improving {
                theme::status::SUCCESS
            } else {
                theme::status::DANGER
            };
            spans.push(Span::styled(
                format!("{}: ", summary.metric.title()),
                Style::default().fg(color(theme::text::SECONDARY)),
            ));
            spans.push(Span::styled(
                summary.display.as_str(),
                Style::default()
                    .fg(color(tone))
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw("    "));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).block(panel("Change over period")),
            area,
        );
    }
}

fn bounds(points: &[TrendPoint]) -> [f64; 2] {
    let (lo, hi) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.value), hi.max(p.value))
        });
    if !lo.is_finite() || !hi.is_finite() {
        return [0.0, 1.0];
    }
    let pad = ((hi - lo) * 0.1).max(1.0);
    [(lo - pad).max(0.0).floor(), (hi + pad).ceil()]
}

fn render_chart(frame: &mut Frame, area: Rect, metric: TrendMetric, points: &[TrendPoint]) {
    let data: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.value))
        .collect();
    let [y_min, y_max] = bounds(points);
    let x_max = points.len().saturating_sub(1).max(1) as f64;

    let x_labels: Vec<Span> = match (points.first(), points.last()) {
        (Some(first), Some(last)) => vec![
            Span::from(first.label.clone()),
            Span::from(last.label.clone()),
        ],
        _ => Vec::new(),
    };
    let y_labels = vec![Span::from(y_min.to_string()), Span::from(y_max.to_string())];

    let dataset = Dataset::default()
        .name(metric.title())
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color(metric.color())))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(panel(metric.title()))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(color(theme::text::SECONDARY)))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(color(theme::text::SECONDARY)))
                .bounds([y_min, y_max])
                .labels(y_labels),
        );
    frame.render_widget(chart, area);
}
