//! Greeting line above the table

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    greeting: &'a str,
    shown: usize,
    total: usize,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    #[must_use]
    pub const fn new(greeting: &'a str, shown: usize, total: usize, theme: &'a Theme) -> Self {
        Self {
            greeting,
            shown,
            total,
            theme,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let count = format!("{} of {} creatives", self.shown, self.total);
        let count_width = u16::try_from(count.len()).unwrap_or(u16::MAX);
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(count_width)]).areas(area);

        Paragraph::new(Line::from(Span::styled(self.greeting, self.theme.header_style())))
            .render(left, buf);
        Paragraph::new(Line::styled(count, self.theme.dimmed_style()))
            .alignment(Alignment::Right)
            .render(right, buf);
    }
}
