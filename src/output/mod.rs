//! Output formatting for CLI display
//!
//! This module renders results for the scripting commands: aligned text
//! tables of creatives, the tag option tree, and row previews.

use crate::data::Creative;
use crate::preview::Preview;
use crate::table::Column;
use crate::tags::FilterOption;
use colored::Colorize;
use std::fmt::Write;

const GAP: &str = "  ";

fn width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, w: usize, right: bool) -> String {
    if right {
        format!("{text:>w$}")
    } else {
        format!("{text:<w$}")
    }
}

/// Render rows as an aligned text table
///
/// Numeric columns are right-aligned. In quiet mode the header is omitted
/// and cells are tab-separated for piping.
#[must_use]
pub fn render_table(rows: &[&Creative], columns: &[Column], quiet: bool) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| columns.iter().map(|c| c.format(row)).collect())
        .collect();

    let mut out = String::new();
    if quiet {
        for line in &cells {
            let _ = writeln!(out, "{}", line.join("\t"));
        }
        return out;
    }

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            cells
                .iter()
                .map(|line| width(&line[i]))
                .chain(std::iter::once(width(column.header())))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(column, &w)| pad(column.header(), w, column.is_numeric()).bold().to_string())
        .collect();
    let _ = writeln!(out, "{}", header.join(GAP).trim_end());

    for line in &cells {
        let padded: Vec<String> = line
            .iter()
            .zip(columns.iter().zip(&widths))
            .map(|(cell, (column, &w))| pad(cell, w, column.is_numeric()))
            .collect();
        let _ = writeln!(out, "{}", padded.join(GAP).trim_end());
    }
    out
}

/// Format a category with its values, one per line
#[must_use]
pub fn tag_tree(options: &[FilterOption], quiet: bool) -> String {
    let mut out = String::new();
    for category in options {
        if quiet {
            for token in category.tokens() {
                let _ = writeln!(out, "{token}");
            }
            continue;
        }
        let _ = writeln!(
            out,
            "{} ({})",
            category.label.cyan().bold(),
            category.options.len()
        );
        let last = category.options.len().saturating_sub(1);
        for (i, leaf) in category.options.iter().enumerate() {
            let branch = if i == last { "└──" } else { "├──" };
            let _ = writeln!(out, "  {} {}", branch.dimmed(), leaf.label);
        }
    }
    out
}

/// Format a preview as `label: value` lines with aligned labels
#[must_use]
pub fn preview_lines(preview: &Preview) -> String {
    let fields = preview.fields();
    let label_width = fields.iter().map(|f| width(&f.label)).max().unwrap_or(0);

    let mut out = String::new();
    for field in fields {
        let label = pad(&format!("{}:", field.label), label_width + 1, false);
        let _ = writeln!(out, "{} {}", label.bold(), field.value);
    }
    out
}

/// One-line summary of a listing
#[must_use]
pub fn summary(shown: usize, total: usize, tokens: &[String], query: &str) -> String {
    let mut line = format!("{shown} of {total} creatives");
    if !tokens.is_empty() {
        let _ = write!(line, " matching [{}]", tokens.join(", "));
    }
    if !query.is_empty() {
        let _ = write!(line, " containing '{query}'");
    }
    line
}
