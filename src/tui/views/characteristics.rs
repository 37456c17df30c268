//! Characteristics tab: one panel per characteristic with a bar per
//! sub-characteristic and its data source.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::projector::{CharacteristicCard, CharacteristicsView};
use crate::theme;
use crate::tui::widgets::{bar_line, color, panel};

const SUB_LABEL_WIDTH: usize = 24;
const SOURCE_WIDTH: usize = 22;

pub struct CharacteristicsPanel<'a> {
    view: &'a CharacteristicsView,
}

impl<'a> CharacteristicsPanel<'a> {
    pub fn new(view: &'a CharacteristicsView) -> Self {
        Self { view }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if self.view.characteristics.is_empty() {
            let empty = Paragraph::new("No characteristics")
                .style(Style::default().fg(color(theme::text::SECONDARY)))
                .block(panel("Characteristics"));
            frame.render_widget(empty, area);
            return;
        }

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let half = self.view.characteristics.len().div_ceil(2);
        let (left, right) = self.view.characteristics.split_at(half);
        render_column(frame, cols[0], left);
        render_column(frame, cols[1], right);
    }
}

fn render_column(frame: &mut Frame, area: Rect, cards: &[CharacteristicCard]) {
    let mut constraints: Vec<Constraint> = cards
        .iter()
        .map(|c| Constraint::Length(c.subchars.len() as u16 + 2))
        .collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (card, row) in cards.iter().zip(rows.iter()) {
        render_card(frame, *row, card);
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &CharacteristicCard) {
    let title = format!(
        "{}  {} ({} sub-characteristics)",
        card.name,
        card.value,
        card.subchars.len()
    );
    let block = panel(&title).border_style(Style::default().fg(color(&card.color)));
    let inner = block.inner(area);
    let bar_width = usize::from(inner.width).saturating_sub(SUB_LABEL_WIDTH + SOURCE_WIDTH + 7);

    let lines: Vec<Line> = card
        .subchars
        .iter()
        .map(|sub| {
            let mut line = bar_line(
                &sub.name,
                SUB_LABEL_WIDTH,
                sub.value,
                100,
                bar_width,
                color(&card.color),
            );
            line.spans.push(Span::styled(
                format!("  {:<width$}", sub.source, width = SOURCE_WIDTH),
                Style::default().fg(color(theme::text::SECONDARY)),
            ));
            line
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
