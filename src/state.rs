//! Selection state of the dashboard.
//!
//! The only mutable state is which project is selected and which tab is
//! active. Views read it by reference and derive everything else from the
//! catalog on each render.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;
use crate::models::ProjectId;

/// Dashboard tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Overview,
    Characteristics,
    SonarQube,
    Trends,
    Tools,
}

impl Tab {
    /// All tabs in tab-bar order.
    pub const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::Characteristics,
        Tab::SonarQube,
        Tab::Trends,
        Tab::Tools,
    ];

    /// Parse from string, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "overview" => Some(Tab::Overview),
            "characteristics" => Some(Tab::Characteristics),
            "sonarqube" => Some(Tab::SonarQube),
            "trends" => Some(Tab::Trends),
            "tools" => Some(Tab::Tools),
            _ => None,
        }
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Characteristics => "characteristics",
            Tab::SonarQube => "sonarqube",
            Tab::Trends => "trends",
            Tab::Tools => "tools",
        }
    }

    /// Label shown in the tab bar.
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Characteristics => "ISO 25010 Characteristics",
            Tab::SonarQube => "SonarQube Analysis",
            Tab::Trends => "Historical Trends",
            Tab::Tools => "Integrated Tools",
        }
    }

    /// Position in [`Tab::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Tab::Overview => 0,
            Tab::Characteristics => 1,
            Tab::SonarQube => 2,
            Tab::Trends => 3,
            Tab::Tools => 4,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::parse(s).ok_or_else(|| Error::UnknownTab(s.to_string()))
    }
}

/// Active project and tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardState {
    pub project: ProjectId,
    pub tab: Tab,
}

impl DashboardState {
    pub fn new(project: ProjectId, tab: Tab) -> Self {
        Self { project, tab }
    }

    /// Select a project by identifier.
    ///
    /// Unknown identifiers leave the selection untouched and return `false`.
    pub fn select_project(&mut self, id: &str) -> bool {
        match ProjectId::parse(id) {
            Some(project) => {
                self.select_project_id(project);
                true
            }
            None => {
                tracing::debug!(id, "ignoring unknown project id");
                false
            }
        }
    }

    pub fn select_project_id(&mut self, project: ProjectId) {
        if self.project != project {
            tracing::debug!(from = %self.project, to = %project, "project selected");
        }
        self.project = project;
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Select a tab by name. Unknown names are ignored and return `false`.
    pub fn select_tab_name(&mut self, name: &str) -> bool {
        match Tab::parse(name) {
            Some(tab) => {
                self.select_tab(tab);
                true
            }
            None => {
                tracing::debug!(name, "ignoring unknown tab");
                false
            }
        }
    }

    pub fn next_tab(&mut self) {
        let i = (self.tab.index() + 1) % Tab::ALL.len();
        self.tab = Tab::ALL[i];
    }

    pub fn previous_tab(&mut self) {
        let len = Tab::ALL.len();
        let i = (self.tab.index() + len - 1) % len;
        self.tab = Tab::ALL[i];
    }

    pub fn next_project(&mut self) {
        let i = (self.project.index() + 1) % ProjectId::ALL.len();
        self.select_project_id(ProjectId::ALL[i]);
    }

    pub fn previous_project(&mut self) {
        let len = ProjectId::ALL.len();
        let i = (self.project.index() + len - 1) % len;
        self.select_project_id(ProjectId::ALL[i]);
    }
}
