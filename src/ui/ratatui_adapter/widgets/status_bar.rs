//! Status bar widget for the latest message or the table summary

use crate::table::SortState;
use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::state::StatusMessage;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct StatusBar<'a> {
    message: Option<&'a StatusMessage>,
    sort: Option<SortState>,
    tags: &'a [String],
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub const fn new(
        message: Option<&'a StatusMessage>,
        sort: Option<SortState>,
        tags: &'a [String],
        theme: &'a Theme,
    ) -> Self {
        Self {
            message,
            sort,
            tags,
            theme,
        }
    }

    fn style_for_level(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Success => self.theme.success_style(),
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Warning => self.theme.warning_style(),
            MessageLevel::Info => self.theme.info_style(),
            MessageLevel::Normal => self.theme.normal_style(),
        }
    }

    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal => "",
        }
    }

    fn summary(&self) -> Line<'static> {
        let sort = self.sort.map_or_else(
            || "unsorted".to_string(),
            |s| format!("sorted by {} {}", s.column, s.direction.arrow()),
        );
        let tags = if self.tags.is_empty() {
            "no tag filter".to_string()
        } else {
            format!("tags: {}", self.tags.join(", "))
        };
        Line::from(vec![
            Span::styled(sort, self.theme.dimmed_style()),
            Span::styled(" · ", self.theme.dimmed_style()),
            Span::styled(tags, self.theme.tag_style()),
        ])
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match self.message {
            Some(message) => Line::styled(
                format!("{}{}", Self::prefix_for_level(message.level), message.text),
                self.style_for_level(message.level),
            ),
            None => self.summary(),
        };
        Paragraph::new(line).render(area, buf);
    }
}
