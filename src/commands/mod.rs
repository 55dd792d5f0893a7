//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against the loaded report.

pub mod completions;
pub mod config;
pub mod dashboard;
pub mod list;
pub mod show;
pub mod tags;

pub use completions::execute as completions;
pub use config::execute as config;
pub use dashboard::execute as dashboard;
pub use list::execute as list;
pub use show::execute as show;
pub use tags::execute as tags;

use crate::config::DashboardConfig;
use crate::data::{Creative, LoadOptions, load_report};
use crate::tags::{FilterOption, parse_lenient};
use crate::ui::OutputWriter;
use crate::AdlensError;
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, AdlensError>;

/// Report path from the command line, else from the configuration
///
/// # Errors
///
/// Returns `AdlensError::InvalidInput` if neither names a report.
pub fn resolve_report(flag: Option<PathBuf>, config: &DashboardConfig) -> Result<PathBuf> {
    flag.or_else(|| config.report_path.clone()).ok_or_else(|| {
        AdlensError::InvalidInput(
            "No report given. Pass --report <PATH> or run 'adlens config set report_path=<PATH>'"
                .into(),
        )
    })
}

/// Load report rows, warning about skipped rows
///
/// # Errors
///
/// Returns `AdlensError::DataError` if the report cannot be read.
pub fn load_rows(
    path: &Path,
    config: &DashboardConfig,
    output: &dyn OutputWriter,
) -> Result<Vec<Creative>> {
    let options = LoadOptions {
        skip_invalid_rows: config.skip_invalid_rows,
    };
    let report = load_report(path, options)?;
    if report.skipped > 0 {
        output.warning(&format!(
            "Skipped {} invalid row(s) in {}",
            report.skipped,
            path.display()
        ));
    }
    Ok(report.rows)
}

/// Filter options from the configured tag definitions
///
/// Malformed entries are dropped with a warning so one bad entry doesn't
/// take the whole filter down.
#[must_use]
pub fn tag_options(config: &DashboardConfig, output: &dyn OutputWriter) -> Vec<FilterOption> {
    let (options, errors) = parse_lenient(config.tag_definitions());
    for e in &errors {
        tracing::warn!(error = %e, "ignoring tag definition entry");
        output.warning(&e.to_string());
    }
    options
}
