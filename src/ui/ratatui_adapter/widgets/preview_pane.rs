//! Preview pane widget for the highlighted creative

use crate::preview::Preview;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct PreviewPane<'a> {
    preview: &'a Preview,
    theme: &'a Theme,
    scroll: u16,
}

impl<'a> PreviewPane<'a> {
    #[must_use]
    pub const fn new(preview: &'a Preview, theme: &'a Theme) -> Self {
        Self {
            preview,
            theme,
            scroll: 0,
        }
    }

    #[must_use]
    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = u16::try_from(scroll).unwrap_or(u16::MAX);
        self
    }
}

impl Widget for PreviewPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let fields = self.preview.fields();
        let width = fields.iter().map(|f| f.label.len()).max().unwrap_or(0);

        let mut lines: Vec<Line> = fields
            .into_iter()
            .map(|field| {
                Line::from(vec![
                    Span::styled(format!("{:<width$}  ", field.label), self.theme.dimmed_style()),
                    Span::raw(field.value),
                ])
            })
            .collect();

        lines.push(Line::default());
        let hint = if self.preview.expanded {
            "Ctrl+E collapse"
        } else {
            "Ctrl+E show all fields"
        };
        lines.push(Line::styled(hint, self.theme.dimmed_style()));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Preview ");

        Paragraph::new(lines)
            .block(block)
            .scroll((self.scroll, 0))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
