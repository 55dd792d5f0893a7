//! Row visibility predicates
//!
//! A row is visible when it passes both the tag dimension (committed filter
//! tokens) and the free-text dimension (global search over every other
//! column). Tag matching is exact: row segments and filter tokens are
//! normalized the same way and compared by equality.

use crate::data::Creative;
use crate::table::Column;
use crate::tags::{normalize_token, segments};
use std::collections::HashSet;

/// Tag dimension for a single row tag field
///
/// An empty token list filters nothing. Otherwise the row passes when any of
/// its `;`-separated segments equals any active token. Blank or absent tag
/// fields match no token.
///
/// # Examples
///
/// ```
/// use adlens::filters::tag_matches;
///
/// let active = vec!["Concept:UGC".to_string()];
/// assert!(tag_matches(Some("Concept:UGC;Audio - Type:voiceover"), &active));
/// assert!(!tag_matches(Some("Audio - Type:voiceover"), &active));
/// assert!(tag_matches(Some("anything"), &[]));
/// ```
#[must_use]
pub fn tag_matches(tag_field: Option<&str>, active: &[String]) -> bool {
    if active.is_empty() {
        return true;
    }
    let wanted: HashSet<String> = active.iter().map(|t| normalize_token(t)).collect();
    field_has_any(tag_field, &wanted)
}

fn field_has_any(tag_field: Option<&str>, wanted: &HashSet<String>) -> bool {
    tag_field.is_some_and(|field| segments(field).any(|s| wanted.contains(&normalize_token(s))))
}

/// Free-text dimension for a single column value
///
/// Case-insensitive substring match. An absent value always passes.
///
/// # Examples
///
/// ```
/// use adlens::filters::text_matches;
///
/// assert!(text_matches(Some("US"), "us"));
/// assert!(!text_matches(Some("DE"), "us"));
/// assert!(text_matches(None, "us"));
/// ```
#[must_use]
pub fn text_matches(value: Option<&str>, query: &str) -> bool {
    value.is_none_or(|v| v.to_lowercase().contains(&query.to_lowercase()))
}

/// Combined filter applied to every row of the table
#[derive(Debug, Clone, Default)]
pub struct RowFilter {
    query: String,
    query_lower: String,
    tokens: Vec<String>,
    wanted: HashSet<String>,
}

impl RowFilter {
    #[must_use]
    pub fn new(query: impl Into<String>, tokens: Vec<String>) -> Self {
        let mut filter = Self::default();
        filter.set_query(query);
        filter.set_tokens(tokens);
        filter
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.query_lower = self.query.to_lowercase();
    }

    pub fn set_tokens(&mut self, tokens: Vec<String>) {
        self.wanted = tokens.iter().map(|t| normalize_token(t)).collect();
        self.tokens = tokens;
    }

    /// Whether neither dimension restricts anything
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.tokens.is_empty()
    }

    /// Tag dimension for `row`
    #[must_use]
    pub fn matches_tags(&self, row: &Creative) -> bool {
        self.wanted.is_empty() || field_has_any(row.tags.as_deref(), &self.wanted)
    }

    /// Free-text dimension for `row`
    ///
    /// Applies [`text_matches`] to the raw value of every searchable column;
    /// the row passes if any column passes, so a row with an absent
    /// searchable cell is never excluded by the search.
    #[must_use]
    pub fn matches_text(&self, row: &Creative) -> bool {
        if self.query_lower.is_empty() {
            return true;
        }
        Column::searchable().any(|column| {
            column
                .value(row)
                .to_search_string()
                .is_none_or(|v| v.to_lowercase().contains(&self.query_lower))
        })
    }

    /// Both dimensions must pass
    #[must_use]
    pub fn matches(&self, row: &Creative) -> bool {
        self.matches_tags(row) && self.matches_text(row)
    }
}
