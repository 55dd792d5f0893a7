//! Dashboard command - interactive table over the report

use super::{Result, load_rows, tag_options};
use crate::config::DashboardConfig;
use crate::ui::OutputWriter;
use crate::ui::ratatui_adapter::{AppState, Dashboard};
use std::path::Path;

/// Open the dashboard on the report at `path`
///
/// # Errors
/// Returns an error if the report cannot be loaded or the terminal fails.
pub fn execute(path: &Path, config: &DashboardConfig, output: &dyn OutputWriter) -> Result<()> {
    let rows = load_rows(path, config, output)?;
    let options = tag_options(config, output);
    tracing::info!(rows = rows.len(), categories = options.len(), "starting dashboard");

    let mut state = AppState::new(rows, options, config.greeting());
    Dashboard::new().run(&mut state)?;
    Ok(())
}
