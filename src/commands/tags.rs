//! Tags command - print the tag filter options

use super::{Result, tag_options};
use crate::config::DashboardConfig;
use crate::output;
use crate::ui::OutputWriter;

/// Print the configured filter options as a tree, or JSON
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn execute(config: &DashboardConfig, json: bool, quiet: bool, writer: &dyn OutputWriter) -> Result<()> {
    let options = tag_options(config, writer);

    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    if options.is_empty() {
        writer.info("No tag definitions configured.");
        return Ok(());
    }
    print!("{}", output::tag_tree(&options, quiet));
    Ok(())
}
