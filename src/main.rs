//! Adlens CLI application entry point
//!
//! This is the main executable for adlens. It opens an ad-creative
//! performance report in an interactive dashboard, or answers one-off
//! queries against it from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Open the dashboard (default command)
//! adlens --report creatives.csv
//! adlens dashboard
//!
//! # Rows tagged Concept:UGC whose text mentions "US", by spend
//! adlens ls -t Concept:UGC -s US --sort spend --desc
//!
//! # Pick the tag filter interactively, output JSON
//! adlens list --pick --format json
//!
//! # Preview one creative by id suffix
//! adlens show ..1234 --expand
//!
//! # Remember the report location
//! adlens config set report_path=/data/creatives.csv
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/adlens/config.toml` on Linux) and created with defaults on
//! first run.

use adlens::{
    AdlensError,
    cli::{Cli, Commands},
    commands::{self, list::ListParams},
    config::DashboardConfig,
    logging,
    ui::{OutputWriter, StdoutWriter},
};
use colored::Colorize;

type Result<T> = std::result::Result<T, AdlensError>;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let command = cli.get_command();

    if let Commands::Completions { shell } = command {
        commands::completions(shell);
        return Ok(());
    }

    let config_path = DashboardConfig::config_path()?;
    let mut config = DashboardConfig::load_from(&config_path)?;
    let quiet = cli.quiet || config.quiet;
    let output = StdoutWriter::new(quiet);

    init_logging(&cli, &config, &output);
    tracing::info!(?command, "adlens starting");

    match command {
        Commands::Dashboard => {
            let path = commands::resolve_report(cli.report, &config)?;
            commands::dashboard(&path, &config, &output)
        }
        Commands::List {
            tags,
            search,
            sort,
            desc,
            pick,
            format,
        } => {
            let path = commands::resolve_report(cli.report, &config)?;
            let params = ListParams {
                tags,
                search,
                sort,
                descending: desc,
                pick,
                format,
            };
            commands::list(&path, &params, &config, quiet, &output)
        }
        Commands::Tags { json } => commands::tags(&config, json, quiet, &output),
        Commands::Show { id, expand } => {
            let path = commands::resolve_report(cli.report, &config)?;
            commands::show(&path, &id, expand, &config, &output)
        }
        Commands::Config { command } => {
            commands::config(&mut config, &config_path, &command, &output)
        }
        Commands::Completions { .. } => Ok(()),
    }
}

/// Start file logging; failures are reported as warnings
fn init_logging(cli: &Cli, config: &DashboardConfig, output: &dyn OutputWriter) {
    let level = match cli.log_level.as_deref().or(config.log_level.as_deref()) {
        Some(name) => match logging::parse_level(name) {
            Ok(level) => Some(level),
            Err(e) => {
                output.warning(&e.to_string());
                None
            }
        },
        None => None,
    };

    if let Err(e) = logging::init(cli.log_file.clone(), level) {
        output.warning(&format!("Logging disabled: {e}"));
    }
}
