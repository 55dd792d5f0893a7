//! Report ingestion
//!
//! Loads the creative performance CSV into strongly typed rows.

pub mod error;
pub mod loader;
pub mod record;

pub use error::DataError;
pub use loader::{LoadOptions, REQUIRED_COLUMNS, Report, find_by_id, load_report, read_report};
pub use record::{Creative, FieldValue};
