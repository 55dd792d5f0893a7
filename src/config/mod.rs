//! Configuration module for adlens
//!
//! Manages dashboard settings: which report to open, the tag definition
//! string behind the filter dropdown, and defaults for logging and output.
//! Configuration is stored in the user's config directory.

use crate::tags::DEFAULT_TAG_DEFINITIONS;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys accepted by [`DashboardConfig::get`] and [`DashboardConfig::set`]
pub const KEYS: [&str; 6] = [
    "report_path",
    "tag_definitions",
    "display_name",
    "quiet",
    "skip_invalid_rows",
    "log_level",
];

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Report CSV opened when `--report` is not given
    #[serde(default)]
    pub report_path: Option<PathBuf>,

    /// `category:value;...` string defining the filter dropdown
    #[serde(default)]
    pub tag_definitions: Option<String>,

    /// Name used in the dashboard greeting
    #[serde(default)]
    pub display_name: Option<String>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Skip report rows that fail to parse instead of aborting the load
    #[serde(default)]
    pub skip_invalid_rows: bool,

    /// Log level used when `ADLENS_LOG` is unset
    #[serde(default)]
    pub log_level: Option<String>,
}

impl DashboardConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("adlens").join("config.toml"))
    }

    /// Load configuration from `path`, writing defaults there if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        tracing::debug!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Tag definition string, falling back to the built-in set
    #[must_use]
    pub fn tag_definitions(&self) -> &str {
        self.tag_definitions
            .as_deref()
            .unwrap_or(DEFAULT_TAG_DEFINITIONS)
    }

    /// Dashboard greeting line
    #[must_use]
    pub fn greeting(&self) -> String {
        match self.display_name.as_deref() {
            Some(name) => format!("Welcome back, {name}"),
            None => "Welcome back".to_string(),
        }
    }

    /// Current value of `key` as text; unset optional values render empty
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for an unknown key.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "report_path" => self
                .report_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            "tag_definitions" => self.tag_definitions().to_string(),
            "display_name" => self.display_name.clone().unwrap_or_default(),
            "quiet" => self.quiet.to_string(),
            "skip_invalid_rows" => self.skip_invalid_rows.to_string(),
            "log_level" => self.log_level.clone().unwrap_or_default(),
            _ => return Err(ConfigError::NotFound(key.to_string())),
        };
        Ok(value)
    }

    /// Set `key` from its text form; an empty value resets optional keys
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for an unknown key and
    /// `ConfigError::Message` for a value that doesn't parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let optional = |v: &str| (!v.is_empty()).then(|| v.to_string());

        match key {
            "report_path" => self.report_path = optional(value).map(PathBuf::from),
            "tag_definitions" => {
                if !value.is_empty() {
                    crate::tags::parse(value)
                        .map_err(|e| ConfigError::Message(format!("Invalid tag definitions: {e}")))?;
                }
                self.tag_definitions = optional(value);
            }
            "display_name" => self.display_name = optional(value),
            "quiet" => self.quiet = parse_bool(key, value)?,
            "skip_invalid_rows" => self.skip_invalid_rows = parse_bool(key, value)?,
            "log_level" => self.log_level = optional(value),
            _ => return Err(ConfigError::NotFound(key.to_string())),
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ConfigError::Message(format!(
            "Invalid value for {key}: '{value}' (expected true or false)"
        ))),
    }
}
