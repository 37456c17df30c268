//! SonarQube tab: size and duplication figures, issue ratings and debt.

use ratatui::prelude::*;

use crate::projector::SonarQubeView;
use crate::theme;
use crate::tui::widgets::{MetricCard, RatingTile, color};

pub struct SonarQubePanel<'a> {
    view: &'a SonarQubeView,
}

impl<'a> SonarQubePanel<'a> {
    pub fn new(view: &'a SonarQubeView) -> Self {
        Self { view }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Min(0),
            ])
            .split(area);

        let figures = [
            MetricCard::new("Lines of Code", self.view.lines_of_code.as_str()),
            MetricCard::new("Complexity", self.view.complexity.as_str())
                .with_subtitle("cyclomatic"),
            MetricCard::new("Coverage", self.view.coverage.as_str())
                .with_color(color(theme::status::SUCCESS)),
            MetricCard::new("Duplications", self.view.duplications.as_str())
                .with_color(color(theme::status::WARNING)),
        ];
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(rows[0]);
        for (card, col) in figures.iter().zip(cols.iter()) {
            card.render(frame, *col);
        }

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(rows[1]);
        for (rating, col) in self.view.ratings.iter().zip(cols.iter()) {
            RatingTile::new(rating).render(frame, *col);
        }
        MetricCard::new("Technical Debt", self.view.technical_debt.as_str())
            .with_color(color(theme::brand::ACCENT_DARK))
            .with_subtitle("estimated remediation")
            .render(frame, cols[3]);
    }
}
