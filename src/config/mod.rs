//! Configuration management for mqcli
//!
//! This module handles loading, parsing and validating configuration:
//! - Configuration file (TOML format, `~/.mqcli/config.toml` by default)
//! - Command-line overrides applied by the CLI layer
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line arguments
//! 2. Configuration file
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::formatter::OutputMode;
use crate::message::LogMsgs;
use crate::translator::{BrokerList, ClientKind};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Output configuration
    #[serde(default)]
    pub display: DisplayConfig,

    /// Connection defaults
    #[serde(default)]
    pub connection: ConnectionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Value output mode for `format` (python, json)
    #[serde(default)]
    pub format: OutputMode,

    /// Message layout (none, body, dict, interop, json)
    #[serde(default = "default_log_msgs")]
    pub log_msgs: LogMsgs,

    /// Replace message content with its SHA-1 digest
    #[serde(default)]
    pub msg_content_hashed: bool,
}

/// Connection defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Client used when `--client` is not given
    #[serde(default = "default_client")]
    pub default_client: ClientKind,

    /// Broker used when `--broker` is not given
    ///
    /// Falls back to the client's usual local address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_broker: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Enable timestamps in logs
    #[serde(default = "default_log_timestamps")]
    pub timestamps: bool,
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

// Default value functions
fn default_log_msgs() -> LogMsgs {
    LogMsgs::Dict
}

fn default_client() -> ClientKind {
    ClientKind::QpidJms
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_log_timestamps() -> bool {
    false
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: OutputMode::default(),
            log_msgs: default_log_msgs(),
            msg_content_hashed: false,
        }
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            default_client: default_client(),
            default_broker: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            timestamps: default_log_timestamps(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    ///
    /// A missing file at the default location yields the defaults; a missing
    /// file that was asked for explicitly is an error.
    ///
    /// # Arguments
    /// * `path` - Explicit configuration file, or `None` for the default path
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    pub fn load_from_file(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_config_path(), false),
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigError::FileNotFound(path.display().to_string()).into());
            }
            tracing::debug!(path = %path.display(), "No configuration file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ConfigError::InvalidFormat(e.to_string()).into())
    }

    /// Get the default configuration file path
    ///
    /// # Returns
    /// * `PathBuf` - `~/.mqcli/config.toml`
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".mqcli")
            .join("config.toml")
    }

    /// Validate the configuration
    ///
    /// # Returns
    /// * `Result<()>` - Ok if valid, error otherwise
    pub fn validate(&self) -> Result<()> {
        if let Some(broker) = &self.connection.default_broker {
            BrokerList::parse(broker, self.connection.default_client.default_scheme()).map_err(
                |_| ConfigError::InvalidValue {
                    field: "connection.default_broker".to_string(),
                    value: broker.clone(),
                },
            )?;
        }
        Ok(())
    }

    /// Broker address to use when none is given on the command line
    pub fn broker_for(&self, client: ClientKind) -> String {
        self.connection
            .default_broker
            .clone()
            .unwrap_or_else(|| client.default_broker().to_string())
    }

    /// Serialize the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Generic(e.to_string()).into())
    }
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.display.log_msgs, LogMsgs::Dict);
        assert_eq!(config.display.format, OutputMode::Python);
        assert_eq!(config.connection.default_client, ClientKind::QpidJms);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = Config::from_toml_str(
            r#"
            [connection]
            default_client = "openwire"

            [display]
            log_msgs = "interop"
            "#,
        )
        .unwrap();
        assert_eq!(config.connection.default_client, ClientKind::OpenWire);
        assert_eq!(config.display.log_msgs, LogMsgs::Interop);
        assert!(!config.display.msg_content_hashed);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml_str("[display\nlog_msgs = 1").unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let err = Config::from_toml_str("[display]\nlog_msgs = \"loud\"").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error: Invalid config format"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"\ntimestamps = true").unwrap();

        let config = Config::load_from_file(Some(file.path())).unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert!(config.logging.timestamps);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load_from_file(Some(&missing)).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_broker() {
        let mut config = Config::default();
        config.connection.default_broker = Some("a:1,,b:2".to_string());
        assert!(config.validate().is_err());

        config.connection.default_broker = Some("broker.example.com:5672".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_broker_fallback() {
        let config = Config::default();
        assert_eq!(config.broker_for(ClientKind::ArtemisCore), "tcp://127.0.0.1:61616");
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let config = Config::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }
}
