//! Config command - read and write configuration values

use super::Result;
use crate::AdlensError;
use crate::cli::{ConfigCommands, split_setting};
use crate::config::{DashboardConfig, KEYS};
use crate::ui::OutputWriter;
use std::path::Path;

/// Execute a config subcommand against the file at `path`
///
/// # Errors
/// Returns an error for a malformed setting, an unknown key, an invalid value
/// or a failed save.
pub fn execute(
    config: &mut DashboardConfig,
    path: &Path,
    command: &ConfigCommands,
    output: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = split_setting(setting).ok_or_else(|| {
                AdlensError::InvalidInput(format!(
                    "Invalid format. Use: adlens config set KEY=VALUE (keys: {})",
                    KEYS.join(", ")
                ))
            })?;
            config.set(key, value)?;
            config.save_to(path)?;
            if value.is_empty() {
                output.success(&format!("Reset {key}"));
            } else {
                output.success(&format!("Set {key} = {value}"));
            }
        }
        ConfigCommands::Get { key } => {
            println!("{}", config.get(key)?);
        }
        ConfigCommands::Path => {
            println!("{}", path.display());
        }
    }
    Ok(())
}
