//! Lexical analysis for schema source text
//!
//! Two scanning strategies share one token vocabulary:
//!
//! - [`LexicalAnalyzer`] (the builder) classifies by character class and
//!   greedy operator runs. Numbers are parsed, comments are single tokens.
//! - [`ContextualScanner`] decides what an accumulated word is from the
//!   scanner state: a declared name, a quoted or assigned literal, a keyword.
//!
//! Neither strategy fails. Text outside the vocabulary is surfaced as
//! `unknown` tokens. Scanners are immutable after construction and can be
//! shared across threads.

pub mod analyzer;
pub mod classifier;
pub mod contextual;
pub mod metrics;
mod sink;

use crate::config::runtime::{ConfigError, LexicalPreferences};
use crate::logging::codes;
use crate::tokens::Token;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use analyzer::LexicalAnalyzer;
pub use contextual::{ContextualScanner, LexState};
pub use metrics::{token_counts, LexicalMetrics, TokenCounts};

/// Common interface of both scanning strategies
pub trait Scanner: Send + Sync {
    fn scan(&self, source: &str) -> Vec<Token>;

    fn scan_with_metrics(&self, source: &str) -> (Vec<Token>, LexicalMetrics);

    fn strategy(&self) -> ScanStrategy;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStrategy {
    #[default]
    Builder,
    Contextual,
}

impl ScanStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanStrategy::Builder => "builder",
            ScanStrategy::Contextual => "contextual",
        }
    }
}

impl fmt::Display for ScanStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScanStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "builder" => Ok(ScanStrategy::Builder),
            "contextual" => Ok(ScanStrategy::Contextual),
            _ => Err(ConfigError::InvalidValue {
                key: "strategy".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// MODULE API
// ============================================================================

/// Scan with the builder strategy and default preferences
pub fn scan(source: &str) -> Vec<Token> {
    LexicalAnalyzer::new().scan(source)
}

/// Scan with the contextual strategy and default preferences
pub fn scan_contextual(source: &str) -> Vec<Token> {
    ContextualScanner::new().scan(source)
}

pub fn scan_with(strategy: ScanStrategy, source: &str) -> Vec<Token> {
    match strategy {
        ScanStrategy::Builder => scan(source),
        ScanStrategy::Contextual => scan_contextual(source),
    }
}

/// Build the scanner selected by `preferences.strategy`
pub fn create_scanner(preferences: &LexicalPreferences) -> Box<dyn Scanner> {
    match preferences.strategy {
        ScanStrategy::Builder => Box::new(LexicalAnalyzer::with_preferences(preferences.clone())),
        ScanStrategy::Contextual => {
            Box::new(ContextualScanner::with_preferences(preferences.clone()))
        }
    }
}

/// Check that every lexical code has registry metadata (for system startup)
pub fn validate_lexical_codes() -> Result<(), String> {
    let lexical_codes = [
        codes::lexical::UNKNOWN_TOKEN,
        codes::lexical::UNTERMINATED_COMMENT,
        codes::lexical::MALFORMED_NUMBER,
    ];

    for code in &lexical_codes {
        if codes::get_code_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Lexical code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    Ok(())
}
