//! Adlens - search, filter and sort ad-creative performance reports
//!
//! This library loads a creative performance CSV into typed rows and provides
//! the pieces of an interactive dashboard over it: a tag definition parser, a
//! filter dropdown model, a combined tag/text row predicate, sortable table
//! views and a row preview.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod data;
pub mod filters;
pub mod logging;
pub mod output;
pub mod preview;
pub mod table;
pub mod tags;
pub mod ui;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum AdlensError {
    /// Tag definition error
    #[error("Tag definition error: {0}")]
    TagError(#[from] tags::TagError),
    /// Filter dropdown error
    #[error("Filter error: {0}")]
    FilterError(#[from] filters::FilterError),
    /// Report loading error
    #[error("Report error: {0}")]
    DataError(#[from] data::DataError),
    /// Terminal or prompt error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Logging setup error
    #[error("Logging error: {0}")]
    LogError(#[from] logging::LogError),
    /// Unknown column name
    #[error(transparent)]
    UnknownColumn(#[from] table::UnknownColumn),
    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<ui::InputError> for AdlensError {
    fn from(e: ui::InputError) -> Self {
        Self::UiError(e.into())
    }
}
