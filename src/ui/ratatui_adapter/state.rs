//! Application state for the dashboard
//!
//! Owns the table view, the filter dropdown and everything the event loop
//! mutates between frames: cursor, search text, preview and status line.

use crate::data::Creative;
use crate::filters::{DropdownState, FilterDropdown};
use crate::preview::Preview;
use crate::table::{Column, TableView};
use crate::tags::FilterOption;
use crate::ui::output::MessageLevel;
use std::time::{Duration, Instant};

/// Current mode of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Table navigation and search editing
    #[default]
    Normal,
    /// Filter dropdown overlay is open
    Filter,
    /// Help overlay is visible
    Help,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub level: MessageLevel,
    pub text: String,
    pub created_at: Instant,
}

impl StatusMessage {
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Dashboard state
#[derive(Debug)]
pub struct AppState {
    /// Rows, active filters and sort
    pub view: TableView,
    /// Tag filter dropdown model
    pub dropdown: FilterDropdown,
    pub mode: Mode,
    /// Display index of the highlighted row
    pub cursor: usize,
    /// First display index drawn in the table
    pub scroll_offset: usize,
    /// Number of table rows that fit on screen (set during render)
    pub visible_height: usize,
    /// Global search text
    pub query: String,
    /// Byte offset of the cursor within `query`
    pub query_cursor: usize,
    /// Highlighted line in the dropdown list
    ///
    /// In the value list line 0 is "Select all" and values start at 1.
    pub menu_cursor: usize,
    /// Column targeted by sort keys
    pub focused_column: Column,
    /// Open row preview, if any
    pub preview: Option<Preview>,
    pub preview_scroll: usize,
    pub messages: Vec<StatusMessage>,
    pub message_ttl: Duration,
    /// Header greeting line
    pub greeting: String,
    pub should_exit: bool,
}

impl AppState {
    #[must_use]
    pub fn new(rows: Vec<Creative>, options: Vec<FilterOption>, greeting: impl Into<String>) -> Self {
        Self {
            view: TableView::new(rows),
            dropdown: FilterDropdown::new(options),
            mode: Mode::Normal,
            cursor: 0,
            scroll_offset: 0,
            visible_height: 20,
            query: String::new(),
            query_cursor: 0,
            menu_cursor: 0,
            focused_column: Column::CreativeId,
            preview: None,
            preview_scroll: 0,
            messages: Vec::new(),
            message_ttl: Duration::from_secs(5),
            greeting: greeting.into(),
            should_exit: false,
        }
    }

    pub const fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.view.len() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    pub const fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.visible_height);
        self.adjust_scroll();
    }

    pub fn page_down(&mut self) {
        let max_cursor = self.view.len().saturating_sub(1);
        self.cursor = (self.cursor + self.visible_height).min(max_cursor);
        self.adjust_scroll();
    }

    pub const fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    pub fn jump_to_end(&mut self) {
        self.cursor = self.view.len().saturating_sub(1);
        self.adjust_scroll();
    }

    /// Keep the cursor inside the viewport
    const fn adjust_scroll(&mut self) {
        let height = if self.visible_height == 0 {
            1
        } else {
            self.visible_height
        };
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }

    /// Clamp cursor and scroll after the visible row set changed
    fn rows_changed(&mut self) {
        let len = self.view.len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
        self.scroll_offset = self.scroll_offset.min(self.cursor);
        self.adjust_scroll();
    }

    /// Row under the cursor
    #[must_use]
    pub fn current_row(&self) -> Option<&Creative> {
        self.view.get(self.cursor)
    }

    pub fn query_push(&mut self, c: char) {
        self.query.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
        self.apply_query();
    }

    pub fn query_backspace(&mut self) {
        if self.query_cursor > 0 {
            let prev_char_boundary = self.query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.query.remove(prev_char_boundary);
            self.query_cursor = prev_char_boundary;
            self.apply_query();
        }
    }

    pub fn query_cursor_left(&mut self) {
        if self.query_cursor > 0 {
            self.query_cursor = self.query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    pub fn query_cursor_right(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query_cursor = self.query[self.query_cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.query.len(), |(i, _)| self.query_cursor + i);
        }
    }

    pub fn query_clear(&mut self) {
        self.query.clear();
        self.query_cursor = 0;
        self.apply_query();
    }

    fn apply_query(&mut self) {
        self.view.set_query(self.query.clone());
        self.rows_changed();
    }

    /// Open the filter dropdown on its category list
    pub fn open_filter(&mut self) {
        self.dropdown.open();
        self.menu_cursor = 0;
        self.mode = Mode::Filter;
    }

    /// Open the dropdown when closed, close it when open
    pub fn toggle_filter(&mut self) {
        self.dropdown.toggle_open();
        self.menu_cursor = 0;
        self.mode = if self.dropdown.is_open() {
            Mode::Filter
        } else {
            Mode::Normal
        };
    }

    /// Close the dropdown without changing the committed filter
    pub fn close_filter(&mut self) {
        self.dropdown.close();
        self.mode = Mode::Normal;
    }

    /// Number of lines in the dropdown list, "Select all" included
    #[must_use]
    pub fn menu_len(&self) -> usize {
        let options = self.dropdown.visible_options().len();
        match self.dropdown.state() {
            DropdownState::ValueList(_) => options + 1,
            _ => options,
        }
    }

    pub const fn menu_up(&mut self) {
        self.menu_cursor = self.menu_cursor.saturating_sub(1);
    }

    pub fn menu_down(&mut self) {
        if self.menu_cursor + 1 < self.menu_len() {
            self.menu_cursor += 1;
        }
    }

    /// Edit the dropdown search text
    pub fn menu_search_push(&mut self, c: char) {
        let mut search = self.dropdown.search().to_string();
        search.push(c);
        self.dropdown.set_search(search);
        self.menu_cursor = 0;
    }

    /// Delete from the dropdown search; on an empty search leave the value list
    pub fn menu_search_backspace(&mut self) {
        let mut search = self.dropdown.search().to_string();
        if search.pop().is_some() {
            self.dropdown.set_search(search);
        } else {
            self.dropdown.back_to_categories();
        }
        self.menu_cursor = 0;
    }

    /// Enter on the dropdown: open the highlighted category, or apply values
    pub fn menu_enter(&mut self) {
        match self.dropdown.state().clone() {
            DropdownState::CategoryList => {
                let category = self
                    .dropdown
                    .visible_options()
                    .get(self.menu_cursor)
                    .map(|o| o.value.clone());
                if let Some(category) = category {
                    match self.dropdown.select_category(&category) {
                        Ok(()) => self.menu_cursor = 0,
                        Err(e) => self.add_message(MessageLevel::Error, e.to_string()),
                    }
                }
            }
            DropdownState::ValueList(_) => self.apply_filter(),
            DropdownState::Closed => {}
        }
    }

    /// Space on the dropdown: toggle the highlighted value or "Select all"
    pub fn menu_toggle(&mut self) {
        if self.dropdown.current_category().is_none() {
            return;
        }
        if self.menu_cursor == 0 {
            self.toggle_select_all();
            return;
        }
        let token = self
            .dropdown
            .visible_options()
            .get(self.menu_cursor - 1)
            .map(|o| o.value.clone());
        if let Some(token) = token {
            self.dropdown.toggle_value(&token);
        }
    }

    pub fn toggle_select_all(&mut self) {
        let all = self.dropdown.all_selected();
        self.dropdown.select_all(!all);
    }

    /// Commit the pending selection to the table
    pub fn apply_filter(&mut self) {
        match self.dropdown.apply() {
            Some(tokens) => {
                let count = tokens.len();
                self.view.set_tag_filter(tokens);
                self.rows_changed();
                self.mode = Mode::Normal;
                self.add_message(
                    MessageLevel::Success,
                    format!("{count} tag filter(s) applied, {} row(s) shown", self.view.len()),
                );
            }
            None => self.add_message(MessageLevel::Warning, "Select at least one value".to_string()),
        }
    }

    /// Drop every tag filter and show all rows again
    pub fn clear_filter(&mut self) {
        let tokens = self.dropdown.clear();
        self.view.set_tag_filter(tokens);
        self.rows_changed();
        self.mode = Mode::Normal;
        self.add_message(MessageLevel::Info, "Tag filters cleared".to_string());
    }

    pub fn focus_next_column(&mut self) {
        self.focused_column = self.focused_column.next();
    }

    pub fn focus_prev_column(&mut self) {
        let all = Column::ALL;
        let idx = all.iter().position(|c| *c == self.focused_column).unwrap_or(0);
        self.focused_column = all[(idx + all.len() - 1) % all.len()];
    }

    /// Advance the sort cycle of the focused column
    pub fn cycle_sort(&mut self) {
        self.view.toggle_sort(self.focused_column);
        self.rows_changed();
    }

    pub fn reverse_sort(&mut self) {
        self.view.reverse_sort();
        self.rows_changed();
    }

    /// Open the preview of the highlighted row
    pub fn open_preview(&mut self) {
        if let Some(row) = self.current_row() {
            self.preview = Some(Preview::new(row.clone()));
            self.preview_scroll = 0;
        }
    }

    pub fn toggle_preview_expanded(&mut self) {
        if let Some(preview) = &mut self.preview {
            preview.toggle_expanded();
        }
    }

    pub fn close_preview(&mut self) {
        self.preview = None;
        self.preview_scroll = 0;
    }

    pub fn add_message(&mut self, level: MessageLevel, text: String) {
        self.messages.push(StatusMessage::new(level, text));
    }

    /// Latest message that hasn't expired
    #[must_use]
    pub fn latest_message(&self) -> Option<&StatusMessage> {
        self.messages
            .iter()
            .rev()
            .find(|m| !m.is_expired(self.message_ttl))
    }

    /// Drop expired messages
    pub fn cleanup_messages(&mut self) {
        let ttl = self.message_ttl;
        self.messages.retain(|m| !m.is_expired(ttl));
    }
}
