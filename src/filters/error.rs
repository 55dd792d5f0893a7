//! Error types for filter operations

use thiserror::Error;

/// Errors that can occur while driving the filter dropdown
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// Category not present in the option tree
    #[error("Unknown tag category '{0}'")]
    UnknownCategory(String),

    /// Operation requires the dropdown to be open
    #[error("Filter dropdown is closed")]
    Closed,
}
