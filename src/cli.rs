//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for adlens using the `clap` crate.
//!
//! # Commands
//!
//! - **dashboard**: Interactive table with search, tag filter and sorting (default)
//! - **list**: Print the rows passing a filter, as a table or JSON
//! - **tags**: Print the tag filter options
//! - **show**: Print the preview of one creative
//! - **config**: Read and write configuration values
//! - **completions**: Generate shell completion scripts
//!
//! # Examples
//!
//! ```
//! use adlens::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["adlens", "list", "-t", "Concept:UGC", "--sort", "spend"]);
//! assert!(matches!(cli.get_command(), Commands::List { .. }));
//! ```

use crate::table::Column;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Output format for `list`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// JSON array of rows
    Json,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., display_name=Ada)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., report_path)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the configuration file location
    Path,
}

/// Main CLI structure
#[derive(Parser, Debug)]
#[command(name = "adlens")]
#[command(about = "Search, filter and sort ad-creative performance reports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Report CSV to open (overrides config)
    #[arg(short = 'r', long = "report", value_name = "PATH", global = true)]
    pub report: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Write logs to this file instead of the default location
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error (overrides config)
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive dashboard (default)
    #[command(visible_alias = "d")]
    Dashboard,

    /// Print rows passing the given filters
    #[command(visible_alias = "ls")]
    List {
        /// Tag filter token, `category:value` (repeatable; rows matching any pass)
        #[arg(short = 't', long = "tag", value_name = "TOKEN")]
        tags: Vec<String>,

        /// Free-text search over every column except tags
        #[arg(short = 's', long = "search", value_name = "TEXT")]
        search: Option<String>,

        /// Column to sort by (e.g. spend, "Ad Network")
        #[arg(long = "sort", value_name = "COLUMN", value_parser = clap::value_parser!(Column))]
        sort: Option<Column>,

        /// Sort descending
        #[arg(long = "desc", requires = "sort")]
        desc: bool,

        /// Pick the tag filter interactively
        #[arg(long = "pick", conflicts_with = "tags")]
        pick: bool,

        /// Output format
        #[arg(long = "format", value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print the tag filter options
    Tags {
        /// Print as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Show the preview of one creative
    Show {
        /// Full creative id or a unique suffix (e.g. `..1234`)
        #[arg(value_name = "ID")]
        id: String,

        /// Show every field
        #[arg(short = 'e', long = "expand")]
        expand: bool,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Dashboard if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Dashboard)
    }
}

/// Split a `key=value` setting at the first `=`
#[must_use]
pub fn split_setting(setting: &str) -> Option<(&str, &str)> {
    setting
        .split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty())
}
