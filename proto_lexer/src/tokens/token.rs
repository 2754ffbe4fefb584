//! Token values emitted by the scanners

use super::kind::TokenKind;
use crate::logging::codes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Typed accessor errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TokenValueError {
    #[error("Token '{kind}' carries {found}, not {expected}")]
    Mismatch {
        kind: TokenKind,
        expected: &'static str,
        found: &'static str,
    },
}

impl TokenValueError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            TokenValueError::Mismatch { .. } => codes::tokens::VALUE_TYPE_MISMATCH,
        }
    }
}

/// Payload of a token
///
/// Serialized untagged so a token reads as `{"kind": "...", "value": ...}`
/// with either a string or a number in `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl TokenValue {
    fn variant_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "an integer",
            Self::Float(_) => "a float",
            Self::Text(_) => "text",
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
}

impl Token {
    pub fn new(kind: TokenKind, value: TokenValue) -> Self {
        Self { kind, value }
    }

    /// Token carrying its source text
    pub fn text(kind: TokenKind, text: impl Into<String>) -> Self {
        Self::new(kind, TokenValue::Text(text.into()))
    }

    pub fn integer(value: i64) -> Self {
        Self::new(TokenKind::IntegerNumber, TokenValue::Integer(value))
    }

    pub fn float(value: f64) -> Self {
        Self::new(TokenKind::FloatNumber, TokenValue::Float(value))
    }

    pub fn unknown(text: impl Into<String>) -> Self {
        Self::text(TokenKind::Unknown, text)
    }

    /// Text payload, if any
    pub fn text_value(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Result<&str, TokenValueError> {
        self.text_value().ok_or_else(|| self.mismatch("text"))
    }

    pub fn as_integer(&self) -> Result<i64, TokenValueError> {
        match self.value {
            TokenValue::Integer(n) => Ok(n),
            _ => Err(self.mismatch("an integer")),
        }
    }

    pub fn as_float(&self) -> Result<f64, TokenValueError> {
        match self.value {
            TokenValue::Float(n) => Ok(n),
            _ => Err(self.mismatch("a float")),
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    fn mismatch(&self, expected: &'static str) -> TokenValueError {
        TokenValueError::Mismatch {
            kind: self.kind,
            expected,
            found: self.value.variant_name(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            TokenValue::Text(s) => write!(f, "{}({:?})", self.kind, s),
            other => write!(f, "{}({})", self.kind, other),
        }
    }
}
