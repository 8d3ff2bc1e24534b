//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables
//! (optionally seeded from a `.env` file). Command-line flags are applied on top of it
//! by the binary.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::constants::{
    self, DEFAULT_COMPETITORS_PATH, DEFAULT_LOG_LEVEL, DEFAULT_RESULTS_PATH, headers,
};
use crate::models::ElapsedPolicy;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub race: RaceConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

/// Input files and ranking rules
#[derive(Debug, Clone)]
pub struct RaceConfig {
    pub results_path: PathBuf,
    pub competitors_path: PathBuf,
    pub elapsed_policy: ElapsedPolicy,
}

/// Report rendering configuration
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub locale: Locale,
    pub format: OutputFormat,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub rust_log: String,
    pub format: LogFormat,
}

/// Language of the report column headers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    /// Column headers for this locale
    pub fn headers(&self) -> [&'static str; 5] {
        match self {
            Locale::En => headers::EN,
            Locale::Ru => headers::RU,
        }
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            constants::locales::EN => Ok(Locale::En),
            constants::locales::RU => Ok(Locale::Ru),
            _ => Err(ConfigError::InvalidValue("RACE_LOCALE".to_string())),
        }
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            constants::output_formats::TABLE => Ok(OutputFormat::Table),
            constants::output_formats::JSON => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("RACE_OUTPUT_FORMAT".to_string())),
        }
    }
}

/// Diagnostic log format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            constants::log_formats::PRETTY => Ok(LogFormat::Pretty),
            constants::log_formats::JSON => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidValue("LOG_FORMAT".to_string())),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            race: RaceConfig::from_vars(&var)?,
            report: ReportConfig::from_vars(&var)?,
            logging: LoggingConfig::from_vars(&var)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            race: RaceConfig {
                results_path: PathBuf::from(DEFAULT_RESULTS_PATH),
                competitors_path: PathBuf::from(DEFAULT_COMPETITORS_PATH),
                elapsed_policy: ElapsedPolicy::default(),
            },
            report: ReportConfig {
                locale: Locale::default(),
                format: OutputFormat::default(),
            },
            logging: LoggingConfig {
                rust_log: DEFAULT_LOG_LEVEL.to_string(),
                format: LogFormat::default(),
            },
        }
    }
}

impl RaceConfig {
    fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let reject_negative = match var("RACE_REJECT_NEGATIVE") {
            Some(value) => parse_bool(&value)
                .ok_or_else(|| ConfigError::InvalidValue("RACE_REJECT_NEGATIVE".to_string()))?,
            None => false,
        };

        Ok(Self {
            results_path: PathBuf::from(
                var("RACE_RESULTS_PATH").unwrap_or_else(|| DEFAULT_RESULTS_PATH.to_string()),
            ),
            competitors_path: PathBuf::from(
                var("RACE_COMPETITORS_PATH").unwrap_or_else(|| DEFAULT_COMPETITORS_PATH.to_string()),
            ),
            elapsed_policy: if reject_negative {
                ElapsedPolicy::Reject
            } else {
                ElapsedPolicy::Permit
            },
        })
    }
}

impl ReportConfig {
    fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            locale: var("RACE_LOCALE")
                .map(|v| v.parse::<Locale>())
                .transpose()?
                .unwrap_or_default(),
            format: var("RACE_OUTPUT_FORMAT")
                .map(|v| v.parse::<OutputFormat>())
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

impl LoggingConfig {
    fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            rust_log: var("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            format: var("LOG_FORMAT")
                .map(|v| v.parse::<LogFormat>())
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = load(&[]).unwrap();
        assert_eq!(config.race.results_path, PathBuf::from("results_RUN.txt"));
        assert_eq!(config.race.competitors_path, PathBuf::from("competitors2.json"));
        assert_eq!(config.race.elapsed_policy, ElapsedPolicy::Permit);
        assert_eq!(config.report.locale, Locale::En);
        assert_eq!(config.report.format, OutputFormat::Table);
        assert_eq!(config.logging.rust_log, "warn");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_env_overrides() {
        let config = load(&[
            ("RACE_RESULTS_PATH", "/tmp/run.txt"),
            ("RACE_COMPETITORS_PATH", "/tmp/people.json"),
            ("RACE_REJECT_NEGATIVE", "true"),
            ("RACE_LOCALE", "RU"),
            ("RACE_OUTPUT_FORMAT", "json"),
            ("LOG_FORMAT", "json"),
            ("RUST_LOG", "debug"),
        ])
        .unwrap();

        assert_eq!(config.race.results_path, PathBuf::from("/tmp/run.txt"));
        assert_eq!(config.race.competitors_path, PathBuf::from("/tmp/people.json"));
        assert_eq!(config.race.elapsed_policy, ElapsedPolicy::Reject);
        assert_eq!(config.report.locale, Locale::Ru);
        assert_eq!(config.report.format, OutputFormat::Json);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.rust_log, "debug");
    }

    #[test]
    fn test_invalid_values() {
        let err = load(&[("RACE_LOCALE", "fr")]).unwrap_err();
        assert!(err.to_string().contains("RACE_LOCALE"));

        let err = load(&[("RACE_REJECT_NEGATIVE", "maybe")]).unwrap_err();
        assert!(err.to_string().contains("RACE_REJECT_NEGATIVE"));

        assert!(load(&[("RACE_OUTPUT_FORMAT", "csv")]).is_err());
        assert!(load(&[("LOG_FORMAT", "xml")]).is_err());
    }

    #[test]
    fn test_locale_headers() {
        assert_eq!(Locale::En.headers()[0], "Place");
        assert_eq!(Locale::Ru.headers()[4], "Результат");
    }

    #[test]
    fn test_default_matches_empty_env() {
        let from_env = load(&[]).unwrap();
        let default = Config::default();
        assert_eq!(from_env.race.results_path, default.race.results_path);
        assert_eq!(from_env.report.locale, default.report.locale);
        assert_eq!(from_env.logging.rust_log, default.logging.rust_log);
    }
}
