use thiserror::Error;

/// Which half of a `category:value` entry was missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPart {
    Category,
    Value,
}

/// Errors produced while parsing a tag definition string
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TagError {
    /// Entry has no `:` separator
    #[error("Malformed tag entry #{index} '{entry}': expected 'category:value'")]
    MalformedEntry { index: usize, entry: String },
    /// Entry has a separator but one side is blank
    #[error("Malformed tag entry #{index} '{entry}': empty {part:?}")]
    EmptyPart {
        index: usize,
        entry: String,
        part: EntryPart,
    },
}

impl TagError {
    /// Zero-based position of the offending entry in the definition string
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::MalformedEntry { index, .. } | Self::EmptyPart { index, .. } => *index,
        }
    }

    #[must_use]
    pub fn entry(&self) -> &str {
        match self {
            Self::MalformedEntry { entry, .. } | Self::EmptyPart { entry, .. } => entry,
        }
    }
}
