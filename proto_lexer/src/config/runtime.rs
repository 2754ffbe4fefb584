// RUNTIME PREFERENCES (User Experience)

use super::compile_time::logging::ENV_PREFIX;
use crate::lexical::ScanStrategy;
use crate::logging::{codes, LogLevel};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration document: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to read configuration file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value '{value}' for '{key}'")]
    InvalidValue { key: String, value: String },
}

impl ConfigError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            ConfigError::Parse(_) => codes::config::CONFIG_PARSE_ERROR,
            ConfigError::Io { .. } => codes::config::CONFIG_IO_ERROR,
            ConfigError::InvalidValue { .. } => codes::config::INVALID_CONFIG_VALUE,
        }
    }
}

fn env_value(name: &str) -> Option<String> {
    env::var(format!("{}{}", ENV_PREFIX, name)).ok()
}

fn env_flag(name: &str, default: bool) -> bool {
    env_value(name)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalPreferences {
    /// Which scanning strategy `create_scanner` builds
    pub strategy: ScanStrategy,

    /// Whether to tally per-kind token metrics during a scan
    pub collect_detailed_metrics: bool,

    /// Whether to count individual operator usage
    pub track_operator_patterns: bool,

    /// Whether to log a debug event for every unknown token
    pub log_unknown_tokens: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            strategy: env_value(env_vars::LEXICAL_STRATEGY)
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            collect_detailed_metrics: env_flag(env_vars::LEXICAL_DETAILED_METRICS, true),
            track_operator_patterns: env_flag(env_vars::LEXICAL_TRACK_OPERATORS, false),
            log_unknown_tokens: env_flag(env_vars::LEXICAL_LOG_UNKNOWN, false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Most verbose level that reaches the logger
    pub min_log_level: LogLevel,

    /// Emit JSON lines instead of plain text
    pub use_structured_logging: bool,

    /// Include category, severity and context in console output
    pub detailed_console_output: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            min_log_level: env_value(env_vars::LOGGING_MIN_LEVEL)
                .and_then(|v| LogLevel::parse(&v))
                .unwrap_or(LogLevel::Info),
            use_structured_logging: env_flag(env_vars::LOGGING_USE_STRUCTURED, false),
            detailed_console_output: env_flag(env_vars::LOGGING_DETAILED, false),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub lexical: LexicalPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Parse a TOML document; missing keys fall back to environment-aware defaults
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        let config: RuntimeConfig = toml::from_str(document)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let document = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&document)?;

        crate::log_success!(codes::success::CONFIG_LOADED, "Runtime configuration loaded",
            "path" => path.display(),
            "strategy" => config.lexical.strategy
        );

        Ok(config)
    }
}

/// Environment variable names (without the `PROTO_LEXER_` prefix)
pub mod env_vars {
    // Lexical
    pub const LEXICAL_STRATEGY: &str = "LEXICAL_STRATEGY";
    pub const LEXICAL_DETAILED_METRICS: &str = "LEXICAL_DETAILED_METRICS";
    pub const LEXICAL_TRACK_OPERATORS: &str = "LEXICAL_TRACK_OPERATORS";
    pub const LEXICAL_LOG_UNKNOWN: &str = "LEXICAL_LOG_UNKNOWN";

    // Logging
    pub const LOGGING_MIN_LEVEL: &str = "LOGGING_MIN_LEVEL";
    pub const LOGGING_USE_STRUCTURED: &str = "LOGGING_USE_STRUCTURED";
    pub const LOGGING_DETAILED: &str = "LOGGING_DETAILED";
}
