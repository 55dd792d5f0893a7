//! UI error types

use super::input::InputError;
use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal setup, drawing or event polling failed
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Interactive prompt failed
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
