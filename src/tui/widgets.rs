//! Reusable widget components for the dashboard.
//!
//! - [`KpiCardWidget`] - Headline metric with caption and breakdown
//! - [`MetricCard`] - Labeled single value
//! - [`UsageGauge`] - Percentage gauge colored by utilization
//! - [`RatingTile`] - Letter grade badge with issue count
//! - [`bar_line`] - One horizontal bar as a styled line

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::projector::{KpiCard, RatingCard};
use crate::theme;

/// Convert a `#rrggbb` token to a terminal color.
pub fn color(hex: &str) -> Color {
    theme::parse_hex(hex).map_or(Color::Reset, |(r, g, b)| Color::Rgb(r, g, b))
}

/// Bordered block with the dashboard's title style.
pub fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(theme::brand::MUTED)))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(color(theme::text::PRIMARY))
                .add_modifier(Modifier::BOLD),
        ))
}

fn secondary() -> Style {
    Style::default().fg(color(theme::text::SECONDARY))
}

// ── KpiCardWidget ───────────────────────────────────────────────────────────

/// Overview KPI card.
pub struct KpiCardWidget<'a> {
    pub card: &'a KpiCard,
}

impl<'a> KpiCardWidget<'a> {
    pub fn new(card: &'a KpiCard) -> Self {
        Self { card }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut headline = vec![Span::styled(
            self.card.headline.as_str(),
            Style::default()
                .fg(color(theme::brand::ACCENT))
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(trend) = self.card.trend {
            let trend_color = match trend {
                crate::models::Trend::Up => theme::status::SUCCESS,
                crate::models::Trend::Down => theme::status::DANGER,
            };
            headline.push(Span::raw(" "));
            headline.push(Span::styled(trend.arrow(), Style::default().fg(color(trend_color))));
        }

        let mut lines = vec![Line::from(headline)];
        if let Some(caption) = &self.card.caption {
            lines.push(Line::from(Span::styled(caption.as_str(), secondary())));
        }
        let mut details = Vec::new();
        for (i, detail) in self.card.details.iter().enumerate() {
            if i > 0 {
                details.push(Span::raw("  "));
            }
            details.push(Span::styled(format!("{}: ", detail.label), secondary()));
            details.push(Span::raw(detail.value.as_str()));
        }
        lines.push(Line::from(details));
        lines
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.lines()).block(panel(&self.card.title));
        f.render_widget(paragraph, area);
    }
}

// ── MetricCard ──────────────────────────────────────────────────────────────

/// A stat card showing a labeled value.
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub subtitle: Option<String>,
    pub color: Color,
}

impl MetricCard {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            subtitle: None,
            color: color(theme::brand::ACCENT),
        }
    }

    /// Set a subtitle shown below the value.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(Span::styled(
            self.value.as_str(),
            Style::default()
                .fg(self.color)
                .add_modifier(Modifier::BOLD),
        ))];
        if let Some(sub) = &self.subtitle {
            lines.push(Line::from(Span::styled(sub.as_str(), secondary())));
        }
        f.render_widget(Paragraph::new(lines).block(panel(&self.label)), area);
    }
}

// ── UsageGauge ──────────────────────────────────────────────────────────────

/// Single-line gauge for a 0-100 percentage.
pub struct UsageGauge<'a> {
    pub label: &'a str,
    pub percent: u8,
}

impl<'a> UsageGauge<'a> {
    pub fn new(label: &'a str, percent: u8) -> Self {
        Self { label, percent }
    }

    fn ratio(&self) -> f64 {
        f64::from(self.percent.min(100)) / 100.0
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color(theme::usage_color(self.percent))))
            .ratio(self.ratio())
            .label(format!("{} {}%", self.label, self.percent));
        f.render_widget(gauge, area);
    }
}

// ── RatingTile ──────────────────────────────────────────────────────────────

/// A letter-grade badge above the issue count it summarizes.
pub struct RatingTile<'a> {
    pub card: &'a RatingCard,
}

impl<'a> RatingTile<'a> {
    pub fn new(card: &'a RatingCard) -> Self {
        Self { card }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let badge = Style::default()
            .fg(color(&self.card.background))
            .bg(color(&self.card.color))
            .add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(Span::styled(format!(" {} ", self.card.rating), badge)),
            Line::from(vec![
                Span::styled(
                    self.card.count.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {}", self.card.issues), secondary()),
            ]),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(panel(&self.card.label));
        f.render_widget(paragraph, area);
    }
}

// ── Bars ────────────────────────────────────────────────────────────────────

/// One horizontal bar: padded label, a bar scaled to `max`, then the value.
pub fn bar_line<'a>(
    label: &str,
    label_width: usize,
    value: u8,
    max: u8,
    bar_width: usize,
    bar_color: Color,
) -> Line<'a> {
    let filled = if max == 0 {
        0
    } else {
        usize::from(value.min(max)) * bar_width / usize::from(max)
    };
    Line::from(vec![
        Span::raw(format!("{:<width$} ", label, width = label_width)),
        Span::styled("█".repeat(filled), Style::default().fg(bar_color)),
        Span::styled("░".repeat(bar_width - filled), secondary()),
        Span::styled(
            format!(" {:>3}", value),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])
}

#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let width = usize::from(buffer.area.width.max(1));
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
