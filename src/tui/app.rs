//! TUI Application - main event loop and terminal management
//!
//! This module contains the core TUI application logic including:
//! - Terminal setup and restoration
//! - Keyboard handling for tab and project selection
//! - Rendering the header, tab bar, active tab and status bar

use std::io::{self, stdout};

use chrono::NaiveTime;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs},
};

use super::views::{CharacteristicsPanel, OverviewPanel, SonarQubePanel, ToolsPanel, TrendsPanel};
use super::widgets::{color, panel};
use crate::models::{Catalog, ProjectId};
use crate::projector::{DashboardView, ProjectionOptions, TabView};
use crate::state::{DashboardState, Tab};
use crate::{Result, format, theme};

/// TUI Application state
pub struct DashboardApp {
    /// Current project and tab
    state: DashboardState,
    catalog: Catalog,
    options: ProjectionOptions,
    /// Whether to quit the application
    should_quit: bool,
}

impl DashboardApp {
    /// Create a new TUI application
    pub fn new(state: DashboardState, catalog: Catalog, options: ProjectionOptions) -> Self {
        Self {
            state,
            catalog,
            options,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle keyboard events
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            // Tabs
            KeyCode::Tab | KeyCode::Right => self.state.next_tab(),
            KeyCode::BackTab | KeyCode::Left => self.state.previous_tab(),
            KeyCode::Char(c @ '1'..='5') => {
                let index = usize::from(c as u8 - b'1');
                if let Some(tab) = Tab::ALL.get(index) {
                    self.state.select_tab(*tab);
                }
            }
            // Projects
            KeyCode::Char('p') | KeyCode::Char(']') => self.state.next_project(),
            KeyCode::Char('P') | KeyCode::Char('[') => self.state.previous_project(),
            _ => {}
        }
    }

    /// Render the UI with the clock sampled once at `now`
    pub fn render(&self, frame: &mut Frame, now: NaiveTime) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title bar
                Constraint::Length(3), // Tab bar
                Constraint::Min(5),    // Main content
                Constraint::Length(3), // Status bar
            ])
            .split(area);

        match DashboardView::build(&self.state, &self.catalog, &self.options, now) {
            Ok(view) => {
                self.render_title_bar(frame, chunks[0], &view);
                self.render_tab_bar(frame, chunks[1]);
                render_body(frame, chunks[2], &view.body);
            }
            Err(e) => {
                tracing::warn!(error = %e, "cannot build dashboard view");
                self.render_tab_bar(frame, chunks[1]);
                let message = Paragraph::new(e.to_string())
                    .style(Style::default().fg(color(theme::status::DANGER)))
                    .block(panel("Error"));
                frame.render_widget(message, chunks[2]);
            }
        }

        self.render_status_bar(frame, chunks[3]);
    }

    /// Render the title bar with the project selector
    fn render_title_bar(&self, frame: &mut Frame, area: Rect, view: &DashboardView) {
        let mut spans = vec![
            Span::styled(
                " Quality Dashboard ",
                Style::default()
                    .fg(color(theme::brand::ACCENT))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("| "),
        ];
        for id in ProjectId::ALL {
            let style = if id == self.state.project {
                Style::default()
                    .fg(color(theme::text::PRIMARY))
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(color(theme::text::SECONDARY))
            };
            let name = self
                .catalog
                .project(id)
                .map_or(id.as_str(), |p| p.name.as_str());
            spans.push(Span::styled(name, style));
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("Last scan: {}", view.last_scan),
            Style::default().fg(color(theme::text::SECONDARY)),
        ));

        let title = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color(theme::brand::ACCENT_DARK))),
        );
        frame.render_widget(title, area);
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = Tab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title())))
            .collect();
        let tabs = Tabs::new(titles)
            .select(self.state.tab.index())
            .style(Style::default().fg(color(theme::text::SECONDARY)))
            .highlight_style(
                Style::default()
                    .fg(color(theme::brand::ACCENT))
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(tabs, area);
    }

    /// Render the status bar with keybindings
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let status =
            Paragraph::new(" Tab/Shift-Tab/1-5:Switch Tab  p/P:Switch Project  q:Quit")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, area);
    }
}

fn render_body(frame: &mut Frame, area: Rect, body: &TabView) {
    match body {
        TabView::Overview(v) => OverviewPanel::new(v).render(frame, area),
        TabView::Characteristics(v) => CharacteristicsPanel::new(v).render(frame, area),
        TabView::SonarQube(v) => SonarQubePanel::new(v).render(frame, area),
        TabView::Trends(v) => TrendsPanel::new(v).render(frame, area),
        TabView::Tools(v) => ToolsPanel::new(v).render(frame, area),
    }
}

/// Setup the terminal for TUI mode
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    Terminal::new(backend)
}

/// Restore the terminal to normal mode
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut DashboardApp,
) -> Result<()> {
    loop {
        let now = format::clock();
        terminal.draw(|f| app.render(f, now))?;

        // Redraw only after input; resize events fall through to a redraw
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
                tracing::debug!(project = %app.state.project, tab = %app.state.tab, "key {:?}", key.code);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Run the TUI application until the user quits.
///
/// # Errors
/// Returns an error if the terminal cannot be set up or drawn to.
pub fn run_tui(
    state: DashboardState,
    catalog: Catalog,
    options: ProjectionOptions,
) -> Result<()> {
    let mut app = DashboardApp::new(state, catalog, options);
    tracing::info!(project = %state.project, tab = %state.tab, "starting dashboard");

    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut app);
    restore_terminal()?;

    tracing::info!("dashboard closed");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::buffer_text;
    use ratatui::{backend::TestBackend, buffer::Buffer};

    fn app() -> DashboardApp {
        DashboardApp::new(
            DashboardState::default(),
            Catalog::builtin(),
            ProjectionOptions::default(),
        )
    }

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 0, 0).unwrap()
    }

    fn draw(terminal: &mut Terminal<TestBackend>, app: &DashboardApp, now: NaiveTime) -> Buffer {
        terminal.draw(|f| app.render(f, now)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(160, 50)).unwrap()
    }

    #[test]
    fn test_tab_keys() {
        let mut app = app();
        app.handle_key(KeyCode::Char('3'));
        assert_eq!(app.state().tab, Tab::SonarQube);
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.state().tab, Tab::Trends);
        app.handle_key(KeyCode::BackTab);
        app.handle_key(KeyCode::BackTab);
        assert_eq!(app.state().tab, Tab::Characteristics);
        app.handle_key(KeyCode::Char('9'));
        assert_eq!(app.state().tab, Tab::Characteristics);
    }

    #[test]
    fn test_project_keys() {
        let mut app = app();
        app.handle_key(KeyCode::Char('p'));
        assert_eq!(app.state().project, ProjectId::MobileBanking);
        app.handle_key(KeyCode::Char(']'));
        assert_eq!(app.state().project, ProjectId::InventorySystem);
        app.handle_key(KeyCode::Char('P'));
        assert_eq!(app.state().project, ProjectId::MobileBanking);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('x'));
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn test_inventory_overview_shows_kpis() {
        let mut app = app();
        app.handle_key(KeyCode::Char('['));
        assert_eq!(app.state().project, ProjectId::InventorySystem);

        let mut terminal = terminal();
        let text = buffer_text(&draw(&mut terminal, &app, noon()));
        assert!(text.contains("88"));
        assert!(text.contains("99.99%"));
        assert!(text.contains("120ms"));
        assert!(text.contains("Last updated: 12:00:00"));
        assert!(text.contains("Security (18 open)"));
    }

    #[test]
    fn test_tab_round_trip_renders_identically() {
        let mut app = DashboardApp::new(
            DashboardState::new(ProjectId::EcommercePlatform, Tab::SonarQube),
            Catalog::builtin(),
            ProjectionOptions::default(),
        );
        let mut terminal = terminal();

        let first = draw(&mut terminal, &app, noon());
        app.handle_key(KeyCode::Char('1'));
        let overview = draw(&mut terminal, &app, noon());
        app.handle_key(KeyCode::Char('3'));
        let again = draw(&mut terminal, &app, noon());

        assert_ne!(first, overview);
        assert_eq!(first, again);
    }

    #[test]
    fn test_every_tab_renders() {
        let mut app = app();
        let mut terminal = terminal();
        for (i, tab) in Tab::ALL.iter().enumerate() {
            app.handle_key(KeyCode::Char((b'1' + i as u8) as char));
            let text = buffer_text(&draw(&mut terminal, &app, noon()));
            assert!(text.contains(tab.title()), "tab bar missing {}", tab);
        }
    }

    #[test]
    fn test_tools_tab_lists_integrations() {
        let mut app = app();
        app.handle_key(KeyCode::Char('5'));
        let mut terminal = terminal();
        let text = buffer_text(&draw(&mut terminal, &app, noon()));
        assert!(text.contains("8 of 8 active"));
        assert!(text.contains("SonarQube"));
    }

    #[test]
    fn test_missing_project_renders_error() {
        let catalog = Catalog {
            projects: Vec::new(),
            ..Catalog::builtin()
        };
        let app = DashboardApp::new(
            DashboardState::default(),
            catalog,
            ProjectionOptions::default(),
        );
        let mut terminal = terminal();
        let text = buffer_text(&draw(&mut terminal, &app, noon()));
        assert!(text.contains("Entity not found"));
    }
}
