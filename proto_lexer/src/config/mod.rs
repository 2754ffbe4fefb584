//! Configuration module for the scanner
//!
//! Compile-time limits live in [`constants`]; user preferences that may be
//! changed per process live in [`runtime`] and are read from environment
//! variables or a TOML document.

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
pub use runtime::{ConfigError, LexicalPreferences, LoggingPreferences, RuntimeConfig};
