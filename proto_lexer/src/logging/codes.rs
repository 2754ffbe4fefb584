//! Consolidated event codes and classification system
//!
//! Single source of truth for all codes emitted by the scanner, their metadata,
//! and classification functions.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for error, warning and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// CLASSIFICATION TYPES
// ============================================================================

/// Severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct CodeMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl CodeMetadata {
    pub const fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

/// System codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Configuration codes
pub mod config {
    use super::Code;

    pub const CONFIG_PARSE_ERROR: Code = Code::new("E010");
    pub const CONFIG_IO_ERROR: Code = Code::new("E011");
    pub const INVALID_CONFIG_VALUE: Code = Code::new("E012");
}

/// Lexical codes. Scanning never fails, so these are reported as warnings.
pub mod lexical {
    use super::Code;

    pub const UNKNOWN_TOKEN: Code = Code::new("W020");
    pub const UNTERMINATED_COMMENT: Code = Code::new("W021");
    pub const MALFORMED_NUMBER: Code = Code::new("W022");
}

/// Token stream codes
pub mod tokens {
    use super::Code;

    pub const UNEXPECTED_TOKEN: Code = Code::new("E040");
    pub const UNEXPECTED_END: Code = Code::new("E041");
    pub const VALUE_TYPE_MISMATCH: Code = Code::new("E042");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const CONFIG_LOADED: Code = Code::new("I010");
    pub const SCAN_COMPLETE: Code = Code::new("I020");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

static CODE_REGISTRY: OnceLock<HashMap<&'static str, CodeMetadata>> = OnceLock::new();

fn get_code_registry() -> &'static HashMap<&'static str, CodeMetadata> {
    CODE_REGISTRY.get_or_init(|| {
        let entries = [
            CodeMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                "Critical internal error",
                "File a bug report with the offending input",
            ),
            CodeMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                "Logging system initialization failure",
                "Initialize logging exactly once per process",
            ),
            CodeMetadata::new(
                "E010",
                "Configuration",
                Severity::Medium,
                true,
                "Configuration document is not valid TOML for this schema",
                "Fix the reported key or remove it to use the default",
            ),
            CodeMetadata::new(
                "E011",
                "Configuration",
                Severity::Medium,
                true,
                "Configuration file could not be read",
                "Check the path and file permissions",
            ),
            CodeMetadata::new(
                "E012",
                "Configuration",
                Severity::Low,
                true,
                "Configuration value is outside the accepted set",
                "Use one of the documented values",
            ),
            CodeMetadata::new(
                "W020",
                "Lexical",
                Severity::Low,
                true,
                "Source fragment matched no token in the vocabulary",
                "Check for unsupported syntax or stray characters",
            ),
            CodeMetadata::new(
                "W021",
                "Lexical",
                Severity::Medium,
                true,
                "Block comment was not closed before end of input",
                "Add the missing */ terminator",
            ),
            CodeMetadata::new(
                "W022",
                "Lexical",
                Severity::Low,
                true,
                "Numeric literal could not be converted to a value",
                "Check for repeated decimal points, empty hex prefixes or overflow",
            ),
            CodeMetadata::new(
                "E040",
                "TokenStream",
                Severity::Medium,
                true,
                "Token stream yielded a different token than expected",
                "Check the source around the reported token",
            ),
            CodeMetadata::new(
                "E041",
                "TokenStream",
                Severity::Medium,
                true,
                "Token stream ended while a token was still expected",
                "Check the source for a truncated declaration",
            ),
            CodeMetadata::new(
                "E042",
                "TokenStream",
                Severity::Low,
                true,
                "Token value accessed as the wrong variant",
                "Match on the token kind before reading its value",
            ),
        ];

        entries
            .into_iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get metadata for a specific code
pub fn get_code_metadata(code: &str) -> Option<&'static CodeMetadata> {
    get_code_registry().get(code)
}

/// Get severity from code
pub fn get_severity(code: &str) -> Severity {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if the condition is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Get human-readable description for code
pub fn get_description(code: &str) -> &'static str {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for code
pub fn get_action(code: &str) -> &'static str {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get category from code
pub fn get_category(code: &str) -> &'static str {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
