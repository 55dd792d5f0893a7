//! Row preview
//!
//! Builds the labelled field list shown in the dashboard's side pane and by
//! `adlens show`.

mod generator;
mod types;

pub use generator::{MISSING, Preview};
pub use types::PreviewField;
