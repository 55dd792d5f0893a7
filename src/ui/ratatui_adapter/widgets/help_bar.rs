//! Help bar widget for displaying keybind hints

use crate::ui::ratatui_adapter::state::Mode;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// Key combination (e.g., "Ctrl+F")
    pub key: String,
    /// Action description (e.g., "filter")
    pub action: String,
}

impl KeyHint {
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Hints for the given mode
    #[must_use]
    pub fn hints_for(mode: Mode) -> Vec<KeyHint> {
        match mode {
            Mode::Normal => vec![
                KeyHint::new("Ctrl+F", "filter"),
                KeyHint::new("Ctrl+X", "clear tags"),
                KeyHint::new("Tab", "column"),
                KeyHint::new("Ctrl+S", "sort"),
                KeyHint::new("Enter", "preview"),
                KeyHint::new("F1", "help"),
                KeyHint::new("Esc", "quit"),
            ],
            Mode::Filter => vec![
                KeyHint::new("Enter", "open/apply"),
                KeyHint::new("Space", "toggle"),
                KeyHint::new("Ctrl+A", "select all"),
                KeyHint::new("Backspace", "back"),
                KeyHint::new("Esc", "close"),
            ],
            Mode::Help => vec![KeyHint::new("any key", "close")],
        }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.accent_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action.as_str()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
