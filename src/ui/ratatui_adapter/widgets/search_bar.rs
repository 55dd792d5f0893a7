//! Filter badge and global search input

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    query: &'a str,
    /// Byte offset of the cursor in `query`
    cursor: usize,
    /// Number of committed tag filter tokens
    filter_count: usize,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> SearchBar<'a> {
    #[must_use]
    pub const fn new(query: &'a str, cursor: usize, filter_count: usize, theme: &'a Theme) -> Self {
        Self {
            query,
            cursor,
            filter_count,
            theme,
            focused: true,
        }
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn badge(&self) -> Span<'static> {
        if self.filter_count == 0 {
            Span::styled("[Filter] ", self.theme.dimmed_style())
        } else {
            Span::styled(
                format!("[Filter: {}] ", self.filter_count),
                self.theme.tag_style().add_modifier(Modifier::BOLD),
            )
        }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.accent_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search ");

        let inner = block.inner(area);
        block.render(area, buf);

        let caret = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
        let mut spans = vec![self.badge(), Span::styled("🔍 ", self.theme.dimmed_style())];

        if self.query.is_empty() {
            spans.push(caret);
            spans.push(Span::styled("Search creatives...", self.theme.dimmed_style()));
        } else {
            let split = self.cursor.min(self.query.len());
            let (before, after) = self.query.split_at(split);
            spans.push(Span::raw(before));
            spans.push(caret);
            spans.push(Span::raw(after));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
