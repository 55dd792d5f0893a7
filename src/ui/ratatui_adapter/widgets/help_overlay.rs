//! Help overlay widget for displaying the full keybind reference

use super::centered_rect;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Table",
        &[
            ("↑/↓", "Move cursor"),
            ("PgUp/PgDn", "Page up/down"),
            ("Home/End", "Jump to first/last row"),
            ("Enter", "Preview row"),
            ("Ctrl+E", "Expand/collapse preview"),
            ("Ctrl+P/N", "Scroll preview"),
            ("Esc", "Close preview / quit"),
        ],
    ),
    (
        "Search & sort",
        &[
            ("Type", "Search every column but Tags"),
            ("Ctrl+U", "Clear search"),
            ("Tab/S-Tab", "Focus next/previous column"),
            ("Ctrl+S", "Cycle sort on focused column"),
            ("Ctrl+R", "Reverse sort"),
        ],
    ),
    (
        "Tag filter",
        &[
            ("Ctrl+F", "Open or close filter"),
            ("Enter", "Open category / apply"),
            ("Space", "Toggle value"),
            ("Ctrl+A", "Toggle select all"),
            ("Backspace", "Edit search / back to categories"),
            ("Ctrl+X", "Clear tag filters"),
        ],
    ),
];

/// Centered help screen
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (title, binds) in SECTIONS {
            lines.push(Line::default());
            lines.push(Line::styled(
                format!("  {title}"),
                self.theme.accent_style().add_modifier(Modifier::UNDERLINED),
            ));
            lines.push(Line::default());
            lines.extend(binds.iter().map(|&(key, desc)| self.help_line(key, desc)));
        }

        lines.push(Line::default());
        lines.push(Line::styled("  Press any key to close", self.theme.dimmed_style()));
        lines
    }

    fn help_line(&self, key: &str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), self.theme.info_style()),
            Span::raw(desc),
        ])
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect(60, 80, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.accent_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}
