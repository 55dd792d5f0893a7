//! Ratatui widgets for the dashboard

mod data_table;
mod filter_menu;
mod header;
mod help_bar;
mod help_overlay;
mod preview_pane;
mod search_bar;
mod status_bar;

pub use data_table::{CHROME_HEIGHT, DataTable};
pub use filter_menu::FilterMenu;
pub use header::Header;
pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use preview_pane::PreviewPane;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;

use ratatui::layout::{Constraint, Layout, Rect};

/// Area of `percent_x` by `percent_y` centered in `area`
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);
    center
}
