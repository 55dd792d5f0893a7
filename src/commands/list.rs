//! List command - print the rows passing a tag filter and text search

use super::{Result, load_rows, tag_options};
use crate::cli::OutputFormat;
use crate::config::DashboardConfig;
use crate::data::Creative;
use crate::filters::FilterDropdown;
use crate::output;
use crate::table::{Column, SortDirection, TableView};
use crate::tags::normalize_token;
use crate::ui::{DialoguerInput, OutputWriter, UserInput, pick_tag_filter};
use std::path::Path;

/// Parameters of a listing, taken from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Raw `category:value` tokens; normalized before matching
    pub tags: Vec<String>,
    pub search: Option<String>,
    pub sort: Option<Column>,
    pub descending: bool,
    /// Replace `tags` with an interactive pick
    pub pick: bool,
    pub format: OutputFormat,
}

/// Execute the list command
///
/// # Errors
/// Returns an error if the report cannot be loaded, a prompt fails, or JSON
/// serialization fails.
pub fn execute(
    path: &Path,
    params: &ListParams,
    config: &DashboardConfig,
    quiet: bool,
    writer: &dyn OutputWriter,
) -> Result<()> {
    let rows = load_rows(path, config, writer)?;
    let input = DialoguerInput::new();
    let options = if params.pick {
        tag_options(config, writer)
    } else {
        Vec::new()
    };

    let Some(view) = build_view(rows, params, &input, options)? else {
        writer.info("Filter cancelled.");
        return Ok(());
    };

    let visible: Vec<&Creative> = view.visible_rows().collect();
    match params.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&visible)?),
        OutputFormat::Table => {
            if visible.is_empty() {
                writer.info("No creatives match the current filters.");
                return Ok(());
            }
            writer.info(&output::summary(
                visible.len(),
                view.total(),
                view.filter().tokens(),
                view.filter().query(),
            ));
            print!("{}", output::render_table(&visible, &Column::ALL, quiet));
        }
    }
    Ok(())
}

/// Filtered and sorted view for `params`; `None` when an interactive pick was cancelled
///
/// # Errors
/// Returns an error if a prompt fails.
pub fn build_view(
    rows: Vec<Creative>,
    params: &ListParams,
    input: &dyn UserInput,
    options: Vec<crate::tags::FilterOption>,
) -> Result<Option<TableView>> {
    let tokens = if params.pick {
        let mut dropdown = FilterDropdown::new(options);
        match pick_tag_filter(input, &mut dropdown)? {
            Some(tokens) => tokens,
            None => return Ok(None),
        }
    } else {
        params
            .tags
            .iter()
            .map(|t| normalize_token(t))
            .filter(|t| !t.is_empty())
            .collect()
    };

    let mut view = TableView::new(rows);
    view.set_query(params.search.clone().unwrap_or_default());
    view.set_tag_filter(tokens);
    if let Some(column) = params.sort {
        let direction = if params.descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        view.sort_by(column, direction);
    }
    tracing::debug!(shown = view.len(), total = view.total(), "listing built");
    Ok(Some(view))
}
