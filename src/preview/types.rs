//! Preview content types

use serde::Serialize;

/// One labelled line of a row preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewField {
    /// Human-readable label ("Cost Per Click")
    pub label: String,
    /// Formatted value, `-` when the cell was blank
    pub value: String,
}

impl PreviewField {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}
