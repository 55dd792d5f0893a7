//! Tag filter model and row predicates
//!
//! This module holds the two halves of the dashboard's filtering:
//!
//! - **Dropdown**: the [`FilterDropdown`] state machine that turns category
//!   and value picks into a committed list of `category:value` tokens
//! - **Predicate**: [`RowFilter`], which decides per row whether it passes the
//!   committed tokens AND the global free-text search
//!
//! # Examples
//!
//! ```
//! use adlens::filters::{FilterDropdown, RowFilter};
//! use adlens::tags::parse;
//!
//! let mut dropdown = FilterDropdown::new(parse("Concept:UGC;Concept:Gameplay").unwrap());
//! dropdown.open();
//! dropdown.select_category("Concept").unwrap();
//! dropdown.toggle_value("Concept:UGC");
//!
//! let tokens = dropdown.apply().unwrap();
//! let filter = RowFilter::new("", tokens);
//! assert_eq!(filter.tokens(), ["Concept:UGC"]);
//! ```

pub mod dropdown;
pub mod error;
pub mod predicate;

pub use dropdown::{DropdownState, FilterDropdown};
pub use error::FilterError;
pub use predicate::{RowFilter, tag_matches, text_matches};
