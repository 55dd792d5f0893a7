//! Show command - preview a single creative

use super::{Result, load_rows};
use crate::config::DashboardConfig;
use crate::data::find_by_id;
use crate::output;
use crate::preview::Preview;
use crate::ui::OutputWriter;
use std::path::Path;

/// Print the preview of the creative matching `id`
///
/// # Errors
/// Returns an error if the report cannot be loaded or `id` matches no single row.
pub fn execute(
    path: &Path,
    id: &str,
    expand: bool,
    config: &DashboardConfig,
    writer: &dyn OutputWriter,
) -> Result<()> {
    let rows = load_rows(path, config, writer)?;
    let row = find_by_id(&rows, id)?.clone();

    let preview = if expand {
        Preview::expanded(row)
    } else {
        Preview::new(row)
    };
    print!("{}", output::preview_lines(&preview));
    Ok(())
}
