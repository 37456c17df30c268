//! TUI Views module
//!
//! One panel per dashboard tab. Panels borrow a projected view and draw it;
//! they hold no state of their own.

mod characteristics;
mod overview;
mod sonarqube;
mod tools;
mod trends;

pub use characteristics::CharacteristicsPanel;
pub use overview::OverviewPanel;
pub use sonarqube::SonarQubePanel;
pub use tools::ToolsPanel;
pub use trends::TrendsPanel;
