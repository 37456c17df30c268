//! Terminal User Interface module for qdash
//!
//! A keyboard-driven dashboard over the bundled quality catalog. The app owns
//! a [`DashboardState`](crate::state::DashboardState), derives a fresh
//! [`DashboardView`](crate::projector::DashboardView) on every redraw and
//! hands it to the panel for the active tab.

#[cfg(feature = "tui")]
mod app;
#[cfg(feature = "tui")]
mod views;
#[cfg(feature = "tui")]
pub mod widgets;

#[cfg(feature = "tui")]
pub use app::{DashboardApp, run_tui};
