//! Lexical scanner for protocol schema source text
//!
//! ```
//! use proto_lexer::{lexical, TokenKind};
//!
//! let tokens = lexical::scan("syntax = \"proto3\";");
//! assert_eq!(tokens[0].kind, TokenKind::Syntax);
//! assert_eq!(tokens.len(), 6);
//! ```

pub mod config;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod tokens;

// Re-export key types for library consumers
pub use config::{ConfigError, LexicalPreferences, LoggingPreferences, RuntimeConfig};
pub use lexical::{
    create_scanner, scan, scan_contextual, scan_with, ContextualScanner, LexicalAnalyzer,
    LexicalMetrics, ScanStrategy, Scanner,
};
pub use tokens::{Token, TokenKind, TokenStream, TokenValue};
