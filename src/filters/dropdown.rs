//! Filter dropdown model
//!
//! Selection bookkeeping behind the "Filter" dropdown: which category is
//! open, which values are ticked, and which tokens were last committed.
//! The model owns no I/O; committed tokens leave it only through the return
//! values of [`FilterDropdown::apply`] and [`FilterDropdown::clear`], which
//! the owning table feeds into its row predicate.

use super::error::FilterError;
use crate::tags::FilterOption;

/// Where the dropdown currently is
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DropdownState {
    /// Dropdown hidden
    #[default]
    Closed,
    /// Showing the list of categories
    CategoryList,
    /// Showing the values of one category
    ValueList(String),
}

/// Filter dropdown state machine
///
/// ```text
/// Closed ─open─► CategoryList ─select_category─► ValueList(c)
///   ▲                 ▲                              │
///   │                 └──── back_to_categories ──────┤
///   └────── close / apply (non-empty) / clear ◄──────┘
/// ```
///
/// The committed token list survives open/close cycles; the pending selection
/// is reset whenever the dropdown is opened or a category is picked.
#[derive(Debug, Clone, Default)]
pub struct FilterDropdown {
    options: Vec<FilterOption>,
    state: DropdownState,
    search: String,
    pending: Vec<String>,
    committed: Vec<String>,
}

impl FilterDropdown {
    /// Create a closed dropdown over a parsed option tree
    #[must_use]
    pub fn new(options: Vec<FilterOption>) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Every category of the option tree, ignoring the search text
    #[must_use]
    pub fn categories(&self) -> &[FilterOption] {
        &self.options
    }

    #[must_use]
    pub const fn state(&self) -> &DropdownState {
        &self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state != DropdownState::Closed
    }

    /// Category whose values are shown, if any
    #[must_use]
    pub fn current_category(&self) -> Option<&str> {
        match &self.state {
            DropdownState::ValueList(category) => Some(category.as_str()),
            _ => None,
        }
    }

    /// Current search text
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Tokens ticked in the open dropdown, in the order they were ticked
    #[must_use]
    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    /// Tokens last confirmed with [`apply`](Self::apply)
    #[must_use]
    pub fn committed(&self) -> &[String] {
        &self.committed
    }

    /// Open the dropdown on the category list with a fresh selection
    pub fn open(&mut self) {
        self.state = DropdownState::CategoryList;
        self.search.clear();
        self.pending.clear();
    }

    /// Hide the dropdown without touching the committed filter
    pub fn close(&mut self) {
        self.state = DropdownState::Closed;
        self.search.clear();
    }

    /// Open when closed, close when open
    pub fn toggle_open(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Show the values of `category` and reset the pending selection
    ///
    /// # Errors
    ///
    /// * `FilterError::Closed` if the dropdown is not open
    /// * `FilterError::UnknownCategory` if the category is not in the tree
    pub fn select_category(&mut self, category: &str) -> Result<(), FilterError> {
        if !self.is_open() {
            return Err(FilterError::Closed);
        }
        if !self.options.iter().any(|c| c.value == category) {
            return Err(FilterError::UnknownCategory(category.to_string()));
        }
        self.state = DropdownState::ValueList(category.to_string());
        self.search.clear();
        self.pending.clear();
        Ok(())
    }

    /// Leave the value list and drop the pending selection
    pub fn back_to_categories(&mut self) {
        if matches!(self.state, DropdownState::ValueList(_)) {
            self.state = DropdownState::CategoryList;
            self.search.clear();
            self.pending.clear();
        }
    }

    /// Update the search text narrowing the visible list
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Options currently listed: categories or the open category's values,
    /// narrowed by the search text (case-insensitive label match)
    #[must_use]
    pub fn visible_options(&self) -> Vec<&FilterOption> {
        let needle = self.search.to_lowercase();
        let matches = |o: &&FilterOption| o.label.to_lowercase().contains(&needle);

        match &self.state {
            DropdownState::Closed => Vec::new(),
            DropdownState::CategoryList => self.options.iter().filter(matches).collect(),
            DropdownState::ValueList(category) => self
                .options
                .iter()
                .find(|c| &c.value == category)
                .map(|c| c.options.iter().filter(matches).collect())
                .unwrap_or_default(),
        }
    }

    /// Whether `token` is ticked
    #[must_use]
    pub fn is_pending(&self, token: &str) -> bool {
        self.pending.iter().any(|t| t == token)
    }

    /// Tick or untick a token
    pub fn toggle_value(&mut self, token: &str) {
        if self.is_pending(token) {
            self.pending.retain(|t| t != token);
        } else {
            self.pending.push(token.to_string());
        }
    }

    /// Tick every visible value (`true`) or untick everything (`false`)
    ///
    /// Only the value list has selectable tokens; on the category list this
    /// only ever clears.
    pub fn select_all(&mut self, selected: bool) {
        if selected && self.current_category().is_some() {
            self.pending = self
                .visible_options()
                .into_iter()
                .map(|o| o.value.clone())
                .collect();
        } else {
            self.pending.clear();
        }
    }

    /// State of the "Select all" checkbox
    #[must_use]
    pub fn all_selected(&self) -> bool {
        if self.current_category().is_none() {
            return false;
        }
        let visible = self.visible_options();
        !visible.is_empty() && visible.iter().all(|o| self.is_pending(&o.value))
    }

    /// Commit the pending selection
    ///
    /// Returns `None` and leaves the dropdown untouched when nothing is
    /// ticked. Otherwise the pending tokens become the committed filter, the
    /// dropdown closes and the committed list is returned for the table.
    pub fn apply(&mut self) -> Option<Vec<String>> {
        if self.pending.is_empty() {
            return None;
        }
        self.committed = self.pending.clone();
        self.close();
        tracing::debug!(tokens = ?self.committed, "tag filter applied");
        Some(self.committed.clone())
    }

    /// Drop every selection and close; the returned empty list shows all rows
    pub fn clear(&mut self) -> Vec<String> {
        self.pending.clear();
        self.committed.clear();
        self.close();
        tracing::debug!("tag filter cleared");
        Vec::new()
    }
}
