//! Creatives table model
//!
//! Column definitions, cell formatting, sorting and the filtered view the
//! dashboard renders.

pub mod column;
pub mod format;
pub mod sort;
pub mod view;

pub use column::{Column, UnknownColumn};
pub use sort::{SortDirection, SortState};
pub use view::TableView;
