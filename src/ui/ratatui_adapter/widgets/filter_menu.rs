//! Filter dropdown overlay

use crate::filters::{DropdownState, FilterDropdown};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

/// Dropdown listing categories, or the values of one category with
/// checkboxes and a "Select all" line
pub struct FilterMenu<'a> {
    dropdown: &'a FilterDropdown,
    cursor: usize,
    theme: &'a Theme,
}

impl<'a> FilterMenu<'a> {
    #[must_use]
    pub const fn new(dropdown: &'a FilterDropdown, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            dropdown,
            cursor,
            theme,
        }
    }

    /// Where the dropdown sits: under the search bar, on the left
    #[must_use]
    pub fn area(screen: Rect) -> Rect {
        let width = screen.width.min(56);
        let height = screen.height.saturating_sub(5).min(20);
        Rect::new(screen.x + 1, screen.y + 3, width, height).intersection(screen)
    }

    fn checkbox(&self, checked: bool) -> Span<'static> {
        if checked {
            Span::styled("[x] ", self.theme.checked_style())
        } else {
            Span::styled("[ ] ", self.theme.dimmed_style())
        }
    }

    fn items(&self) -> Vec<ListItem<'static>> {
        let options = self.dropdown.visible_options();
        match self.dropdown.state() {
            DropdownState::ValueList(_) => {
                let mut items = vec![ListItem::new(Line::from(vec![
                    self.checkbox(self.dropdown.all_selected()),
                    Span::styled("Select all", self.theme.accent_style()),
                ]))];
                items.extend(options.iter().map(|o| {
                    ListItem::new(Line::from(vec![
                        self.checkbox(self.dropdown.is_pending(&o.value)),
                        Span::raw(o.label.clone()),
                    ]))
                }));
                items
            }
            _ => options
                .iter()
                .map(|o| {
                    let committed = self
                        .dropdown
                        .committed()
                        .iter()
                        .filter(|t| crate::tags::category_of(t) == o.value)
                        .count();
                    let mut spans = vec![Span::raw(o.label.clone())];
                    if committed > 0 {
                        spans.push(Span::styled(format!(" ({committed})"), self.theme.tag_style()));
                    }
                    spans.push(Span::styled(" ›", self.theme.dimmed_style()));
                    ListItem::new(Line::from(spans))
                })
                .collect(),
        }
    }
}

impl Widget for FilterMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let title = match self.dropdown.state() {
            DropdownState::ValueList(category) => format!(" Filter › {category} "),
            _ => format!(" Filter ({} categories) ", self.dropdown.categories().len()),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.accent_style())
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        let [search_area, list_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(inner);

        let search = self.dropdown.search();
        let search_line = if search.is_empty() {
            Line::styled("🔍 Search...", self.theme.dimmed_style())
        } else {
            Line::from(vec![
                Span::styled("🔍 ", self.theme.dimmed_style()),
                Span::raw(search.to_string()),
            ])
        };
        Paragraph::new(search_line).render(search_area, buf);

        let items = self.items();
        if items.is_empty() {
            Paragraph::new(Line::styled("No matches", self.theme.dimmed_style()))
                .render(list_area, buf);
            return;
        }

        let list = List::new(items)
            .highlight_style(self.theme.selected_style())
            .style(Style::default());
        let mut state = ListState::default().with_selected(Some(self.cursor));
        StatefulWidget::render(list, list_area, buf, &mut state);
    }
}
