//! # CLI Configuration
//!
//! Configuration management for the `toolrent` command.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority, applied by main)             │
//! │     --format json, --show-days                                         │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     TOOLRENT_FORMAT=json                                               │
//! │     TOOLRENT_SHOW_DAYS=true                                            │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <PATH>, else TOOLRENT_CONFIG, else                        │
//! │     ~/.config/toolrent/toolrent.toml (Linux)                           │
//! │     ~/Library/Application Support/com.toolrent.toolrent/... (macOS)    │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     text output, standard tool catalog                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [output]
//! format = "text"
//! show_chargeable_days = false
//!
//! [[tools]]
//! code = "CHNS"
//! type = "Chainsaw"
//! brand = "Stihl"
//! daily_charge = "1.49"
//! weekday_charge = true
//! weekend_charge = false
//! holiday_charge = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use toolrent_core::{ToolCatalog, ToolPolicy, ValidationError};
use tracing::{debug, info, warn};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "TOOLRENT_CONFIG";

/// Environment variable overriding `output.format`.
pub const FORMAT_ENV: &str = "TOOLRENT_FORMAT";

/// Environment variable overriding `output.show_chargeable_days`.
pub const SHOW_DAYS_ENV: &str = "TOOLRENT_SHOW_DAYS";

// =============================================================================
// Output Settings
// =============================================================================

/// How an agreement is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The labeled agreement lines.
    #[default]
    Text,
    /// The full billing record as JSON.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                key: "format".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Output section of `toolrent.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,

    /// Also list each billed date after the agreement.
    #[serde(default)]
    pub show_chargeable_days: bool,
}

// =============================================================================
// App Configuration
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub output: OutputSettings,

    /// Replacement catalog. Empty means the standard tools.
    #[serde(default)]
    pub tools: Vec<ToolPolicy>,
}

impl AppConfig {
    /// Loads configuration from file and environment.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (a missing file is not an error)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => {
                info!(?path, "Loading config from file");
                Self::from_file(&path)?
            }
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parses a config file without applying environment overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Builds the tool catalog this configuration describes.
    pub fn catalog(&self) -> Result<ToolCatalog, ConfigError> {
        if self.tools.is_empty() {
            return Ok(ToolCatalog::standard());
        }

        let catalog = ToolCatalog::from_policies(self.tools.iter().cloned())?;
        info!(tools = catalog.len(), "Using configured tool catalog");
        Ok(catalog)
    }

    /// Applies overrides read through `lookup` (the process environment
    /// when called from [`AppConfig::load`]).
    ///
    /// An invalid format is an error; an unrecognized show-days value is
    /// logged and ignored.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(format) = lookup(FORMAT_ENV) {
            debug!(format = %format, "Overriding output format from environment");
            self.output.format = format.parse()?;
        }

        if let Some(show) = lookup(SHOW_DAYS_ENV) {
            match show.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => self.output.show_chargeable_days = true,
                "0" | "false" | "no" => self.output.show_chargeable_days = false,
                _ => warn!(value = %show, "Ignoring unrecognized {}", SHOW_DAYS_ENV),
            }
        }

        Ok(())
    }

    /// Returns the config file path from the environment or the platform
    /// config directory.
    fn default_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }

        directories::ProjectDirs::from("com", "toolrent", "toolrent")
            .map(|dirs| dirs.config_dir().join("toolrent.toml"))
    }
}

// =============================================================================
// Config Error
// =============================================================================

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid tool in catalog: {0}")]
    InvalidTool(#[from] ValidationError),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.output.show_chargeable_days);
        assert_eq!(config.catalog().unwrap(), ToolCatalog::standard());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_parse_output_section() {
        let config = AppConfig::from_toml(
            r#"
            [output]
            format = "json"
            show_chargeable_days = true
            "#,
        )
        .unwrap();

        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.show_chargeable_days);
    }

    #[test]
    fn test_parse_tool_catalog() {
        let config = AppConfig::from_toml(
            r#"
            [[tools]]
            code = "DRLL"
            type = "Drill"
            brand = "Makita"
            daily_charge = "3.50"
            weekday_charge = true
            weekend_charge = true
            holiday_charge = false
            "#,
        )
        .unwrap();

        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        let drill = catalog.find("drll").unwrap();
        assert_eq!(drill.tool_type(), "Drill");
        assert_eq!(drill.daily_charge().to_string(), "$3.50");
        assert!(catalog.find("LADW").is_none());
    }

    #[test]
    fn test_sub_cent_daily_charge_is_rejected() {
        let result = AppConfig::from_toml(
            r#"
            [[tools]]
            code = "DRLL"
            type = "Drill"
            brand = "Makita"
            daily_charge = "3.505"
            weekday_charge = true
            weekend_charge = true
            holiday_charge = false
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_oversized_daily_charge_is_rejected() {
        let result = AppConfig::from_toml(
            r#"
            [[tools]]
            code = "BIG"
            type = "Crane"
            brand = "Liebherr"
            daily_charge = "7922816251426433759354395033"
            weekday_charge = true
            weekend_charge = true
            holiday_charge = true
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        let config = AppConfig::from_toml(
            r#"
            [[tools]]
            code = "BIG"
            type = "Crane"
            brand = "Liebherr"
            daily_charge = "1000000000.01"
            weekday_charge = true
            weekend_charge = true
            holiday_charge = true
            "#,
        )
        .unwrap();
        assert!(matches!(config.catalog(), Err(ConfigError::InvalidTool(_))));
    }

    #[test]
    fn test_duplicate_codes_are_rejected() {
        let config = AppConfig::from_toml(
            r#"
            [[tools]]
            code = "DRLL"
            type = "Drill"
            brand = "Makita"
            daily_charge = "3.50"
            weekday_charge = true
            weekend_charge = false
            holiday_charge = false

            [[tools]]
            code = "drll"
            type = "Drill"
            brand = "Bosch"
            daily_charge = "3.00"
            weekday_charge = true
            weekend_charge = false
            holiday_charge = false
            "#,
        )
        .unwrap();

        assert!(matches!(config.catalog(), Err(ConfigError::InvalidTool(_))));
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_env_overrides_file_settings() {
        let mut config = AppConfig::from_toml(
            r#"
            [output]
            format = "text"
            show_chargeable_days = false
            "#,
        )
        .unwrap();

        config
            .apply_overrides(env(&[(FORMAT_ENV, "JSON"), (SHOW_DAYS_ENV, "yes")]))
            .unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.show_chargeable_days);

        config.apply_overrides(env(&[(SHOW_DAYS_ENV, "0")])).unwrap();
        assert!(!config.output.show_chargeable_days);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_no_env_leaves_config_unchanged() {
        let mut config = AppConfig::default();
        config.apply_overrides(env(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_env_format_is_an_error() {
        let mut config = AppConfig::default();
        let err = config
            .apply_overrides(env(&[(FORMAT_ENV, "xml")]))
            .unwrap_err();

        assert!(matches!(
            &err,
            ConfigError::InvalidValue { key, value } if key == "format" && value == "xml"
        ));
        assert_eq!(err.to_string(), "Invalid value for format: xml");
    }

    #[test]
    fn test_unrecognized_show_days_is_ignored() {
        let mut config = AppConfig::default();
        config.output.show_chargeable_days = true;

        config
            .apply_overrides(env(&[(SHOW_DAYS_ENV, "maybe")]))
            .unwrap();
        assert!(config.output.show_chargeable_days);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("toolrent-does-not-exist.toml");
        let config = AppConfig::load(Some(path)).unwrap();
        assert_eq!(config.tools.len(), 0);
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("toolrent-test-{}.toml", std::process::id()));
        std::fs::write(&path, "[output]\nshow_chargeable_days = true\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert!(config.output.show_chargeable_days);

        std::fs::remove_file(&path).unwrap();
    }
}
