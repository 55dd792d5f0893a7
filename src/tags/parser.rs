//! Tag definition parser
//!
//! Turns a flat definition string such as
//! `"Concept:UGC;Audio - Type:voiceover"` into a two-level option tree:
//! one [`FilterOption`] per category, each holding its selectable values.

use super::error::{EntryPart, TagError};
use super::token::{ENTRY_SEPARATOR, TOKEN_SEPARATOR, token};
use serde::{Deserialize, Serialize};

/// A node of the filter option tree
///
/// Top-level nodes are categories (`value == label`). Their children are the
/// selectable options, whose `value` is the fully-qualified token
/// `"<category>:<value>"`. Leaf options have no children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FilterOption>,
}

impl FilterOption {
    /// Create a category node with no options yet
    #[must_use]
    pub fn category(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            value: name,
            options: Vec::new(),
        }
    }

    /// Create a selectable leaf option for `value` inside `category`
    #[must_use]
    pub fn leaf(category: &str, value: &str) -> Self {
        Self {
            label: value.to_string(),
            value: token(category, value),
            options: Vec::new(),
        }
    }

    /// Tokens of all children in display order
    #[must_use]
    pub fn tokens(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.value.as_str()).collect()
    }
}

/// A single parsed `category:value` entry
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry<'a> {
    category: &'a str,
    value: &'a str,
}

/// Parse one non-empty, trimmed entry
fn parse_entry(index: usize, raw: &str) -> Result<Entry<'_>, TagError> {
    let Some((category, value)) = raw.split_once(TOKEN_SEPARATOR) else {
        return Err(TagError::MalformedEntry {
            index,
            entry: raw.to_string(),
        });
    };

    let (category, value) = (category.trim(), value.trim());
    if category.is_empty() {
        return Err(TagError::EmptyPart {
            index,
            entry: raw.to_string(),
            part: EntryPart::Category,
        });
    }
    if value.is_empty() {
        return Err(TagError::EmptyPart {
            index,
            entry: raw.to_string(),
            part: EntryPart::Value,
        });
    }

    Ok(Entry { category, value })
}

/// Iterate `(index, trimmed entry)` pairs, skipping blank entries
///
/// The index counts every `;`-separated slot, blank or not, so error messages
/// point at the position a user sees in the raw string.
fn raw_entries(definition: &str) -> impl Iterator<Item = (usize, &str)> {
    definition
        .split(ENTRY_SEPARATOR)
        .map(str::trim)
        .enumerate()
        .filter(|(_, entry)| !entry.is_empty())
}

/// Append an entry to the tree, creating its category on first sight
fn push_entry(tree: &mut Vec<FilterOption>, entry: &Entry<'_>) {
    let position = tree.iter().position(|c| c.value == entry.category);
    let category = match position {
        Some(pos) => &mut tree[pos],
        None => {
            tree.push(FilterOption::category(entry.category));
            let last = tree.len() - 1;
            &mut tree[last]
        }
    };
    category
        .options
        .push(FilterOption::leaf(entry.category, entry.value));
}

/// Parse a definition string into the category/value option tree
///
/// Categories keep first-seen order and values keep encounter order.
/// Duplicate `(category, value)` pairs are kept as separate options with the
/// same token.
///
/// # Errors
///
/// Returns the first [`TagError`] for an entry without a `:` or with a blank
/// category or value.
///
/// # Examples
///
/// ```
/// use adlens::tags::parse;
///
/// let tree = parse("A:1;A:2;B:3").unwrap();
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree[0].tokens(), vec!["A:1", "A:2"]);
/// assert_eq!(tree[1].tokens(), vec!["B:3"]);
/// ```
pub fn parse(definition: &str) -> Result<Vec<FilterOption>, TagError> {
    let mut tree = Vec::new();
    for (index, raw) in raw_entries(definition) {
        let entry = parse_entry(index, raw)?;
        push_entry(&mut tree, &entry);
    }
    Ok(tree)
}

/// Parse everything that can be parsed, returning rejected entries separately
///
/// Used where a bad entry in a user-supplied definition should be reported
/// but must not hide the rest of the options.
#[must_use]
pub fn parse_lenient(definition: &str) -> (Vec<FilterOption>, Vec<TagError>) {
    let mut tree = Vec::new();
    let mut rejected = Vec::new();
    for (index, raw) in raw_entries(definition) {
        match parse_entry(index, raw) {
            Ok(entry) => push_entry(&mut tree, &entry),
            Err(e) => rejected.push(e),
        }
    }
    (tree, rejected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::DEFAULT_TAG_DEFINITIONS;

    #[test]
    fn test_parse_groups_by_category_in_order() {
        let tree = parse("A:1;A:2;B:3").unwrap();
        let labels: Vec<&str> = tree.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B"]);
        assert_eq!(tree[0].value, "A");
        assert_eq!(tree[0].tokens(), vec!["A:1", "A:2"]);
        assert_eq!(tree[1].tokens(), vec!["B:3"]);
        assert_eq!(tree[0].options[1].label, "2");
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("  ;  ; ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let tree = parse(" Concept :  UGC ;Audio - Type: voiceover").unwrap();
        assert_eq!(tree[0].label, "Concept");
        assert_eq!(tree[0].options[0].value, "Concept:UGC");
        assert_eq!(tree[1].options[0].value, "Audio - Type:voiceover");
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let tree = parse("A:1;A:1").unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].tokens(), vec!["A:1", "A:1"]);
    }

    #[test]
    fn test_parse_interleaved_categories() {
        let tree = parse("B:1;A:1;B:2").unwrap();
        assert_eq!(tree[0].label, "B");
        assert_eq!(tree[0].tokens(), vec!["B:1", "B:2"]);
        assert_eq!(tree[1].tokens(), vec!["A:1"]);
    }

    #[test]
    fn test_parse_rejects_missing_colon() {
        let err = parse("A:1;bad").unwrap_err();
        assert_eq!(
            err,
            TagError::MalformedEntry {
                index: 1,
                entry: "bad".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_blank_parts() {
        let err = parse(":value").unwrap_err();
        assert!(matches!(err, TagError::EmptyPart { part: EntryPart::Category, .. }));

        let err = parse("A:1;Cat: ").unwrap_err();
        assert!(matches!(err, TagError::EmptyPart { index: 1, part: EntryPart::Value, .. }));
    }

    #[test]
    fn test_parse_value_keeps_extra_colons() {
        let tree = parse("CTA:tap: now").unwrap();
        assert_eq!(tree[0].options[0].label, "tap: now");
        assert_eq!(tree[0].options[0].value, "CTA:tap: now");
    }

    #[test]
    fn test_parse_lenient_collects_rejections() {
        let (tree, rejected) = parse_lenient("A:1;oops;B:2;:x");
        assert_eq!(tree.len(), 2);
        assert_eq!(rejected.len(), 2);
        assert_eq!(rejected[0].index(), 1);
        assert_eq!(rejected[0].entry(), "oops");
        assert_eq!(rejected[1].index(), 3);
    }

    #[test]
    fn test_default_definitions_parse() {
        let tree = parse(DEFAULT_TAG_DEFINITIONS).unwrap();
        assert_eq!(tree.len(), 10);
        assert_eq!(tree[0].label, "Concept");
        let objects = tree
            .iter()
            .find(|c| c.label == "End card elements - Objects")
            .unwrap();
        assert_eq!(objects.options.len(), 4);
        assert_eq!(objects.options[1].value, "End card elements - Objects:wand");
    }
}
