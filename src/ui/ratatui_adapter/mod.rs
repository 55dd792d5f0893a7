//! Ratatui dashboard
//!
//! The interactive view over a loaded report: greeting header, filter badge
//! and search bar, the creatives table, an optional preview pane, and the
//! status and help bars. The tag filter dropdown opens as an overlay.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 Dashboard                   │
//! │       (terminal setup, draw/poll loop)      │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  AppState  │ │  Widgets  │ │  Events   │
//! │ (TableView,│ │ (ratatui) │ │(crossterm)│
//! │  Dropdown) │ │           │ │           │
//! └────────────┘ └───────────┘ └───────────┘
//! ```

mod dashboard;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use dashboard::Dashboard;
pub use events::{EventResult, handle_key};
pub use state::{AppState, Mode, StatusMessage};
pub use theme::Theme;
