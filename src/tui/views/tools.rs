//! Tools tab: integrated tools with status, last sync and fed metrics.

use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
};

use crate::projector::ToolsView;
use crate::theme;
use crate::tui::widgets::{color, panel};

pub struct ToolsPanel<'a> {
    view: &'a ToolsView,
}

impl<'a> ToolsPanel<'a> {
    pub fn new(view: &'a ToolsView) -> Self {
        Self { view }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .view
            .tools
            .iter()
            .map(|tool| {
                let active = tool.status.is_active();
                let status = if active { "active" } else { "inactive" };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        " ● ",
                        Style::default().fg(color(theme::tool_status_color(active))),
                    ),
                    Span::styled(
                        format!("{:<22}", tool.name),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("{:<10}", status)),
                    Span::styled(
                        format!("synced {:<12}", tool.last_sync),
                        Style::default().fg(color(theme::text::SECONDARY)),
                    ),
                    Span::raw(tool.metrics.join(", ")),
                ]))
            })
            .collect();

        let title = format!(
            "Integrated Tools ({} of {} active)",
            self.view.active,
            self.view.tools.len()
        );
        frame.render_widget(List::new(items).block(panel(&title)), area);
    }
}
