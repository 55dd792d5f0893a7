//! User interface layer
//!
//! - [`ratatui_adapter`]: the interactive dashboard
//! - [`picker`]: prompt-driven tag filter picker for the CLI
//! - [`input`]: prompt abstraction ([`UserInput`]) with a dialoguer backend
//! - [`output`]: colored status lines for CLI commands
//!
//! The dashboard and the picker both drive the same
//! [`FilterDropdown`](crate::filters::FilterDropdown) model, so tag
//! selection behaves the same whichever front end is used.

mod error;

pub mod input;
pub mod output;
pub mod picker;
pub mod ratatui_adapter;

#[cfg(test)]
pub mod mock;

pub use error::{Result, UiError};
pub use input::{DialoguerInput, InputError, UserInput};
pub use output::{MessageLevel, OutputWriter, StdoutWriter};
pub use picker::pick_tag_filter;
