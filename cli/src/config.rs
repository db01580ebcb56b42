//! Validator configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use nem_utils::LogFormat;

use crate::CliError;

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(CliError::Config(format!(
                "unknown output format: {other} (expected \"text\" or \"json\")"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Configuration for `nem-validate`.
///
/// Can be loaded from a TOML file via [`CliConfig::from_toml_file`]; command
/// line flags and `NEM_*` environment variables override file values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Report format: "text" or "json".
    #[serde(default)]
    pub output: OutputFormat,

    /// Requests larger than this are refused unread.
    #[serde(default = "default_max_request_bytes")]
    pub max_request_bytes: usize,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_max_request_bytes() -> usize {
    64 * 1024
}

// ── Impl ───────────────────────────────────────────────────────────────

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, CliError> {
        toml::from_str(s).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, CliError> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Apply the values given on the command line, keeping file values for the rest.
    pub fn with_overrides(
        self,
        log_level: Option<String>,
        log_format: Option<LogFormat>,
        output: Option<OutputFormat>,
    ) -> Self {
        Self {
            log_level: log_level.unwrap_or(self.log_level),
            log_format: log_format.unwrap_or(self.log_format),
            output: output.unwrap_or(self.output),
            ..self
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            output: OutputFormat::default(),
            max_request_bytes: default_max_request_bytes(),
        }
    }
}
