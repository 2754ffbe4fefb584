//! Global logging module for the scanner
//!
//! Provides a process-wide, thread-safe logging service with code-tagged
//! events and a clean macro interface. Until a service is installed every
//! logging macro is a no-op.

pub mod codes;
pub mod events;
pub mod macros;
pub mod service;

use crate::config::runtime::LoggingPreferences;
use std::sync::OnceLock;

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<LoggingService> = OnceLock::new();

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging from preferences
pub fn init_global_logging(preferences: &LoggingPreferences) -> Result<(), String> {
    let service = LoggingService::with_preferences(preferences);
    init_global_logging_with_service(service)?;

    crate::log_success!(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
        "min_level" => preferences.min_log_level.as_str(),
        "structured" => preferences.use_structured_logging
    );

    Ok(())
}

/// Initialize with a custom service (embedding applications and tests)
pub fn init_global_logging_with_service(service: LoggingService) -> Result<(), String> {
    GLOBAL_LOGGER.set(service).map_err(|_| {
        format!(
            "[{}] Global logger already initialized",
            codes::system::INITIALIZATION_FAILURE
        )
    })
}

/// Check if global logging is initialized
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get()
}

/// Whether an event at `level` would reach a logger
pub fn enabled(level: LogLevel) -> bool {
    try_get_global_logger().is_some_and(|service| service.should_log(level))
}

// ============================================================================
// MACRO SUPPORT
// ============================================================================

/// Build and dispatch an event if `level` passes the global gate (used by macros)
pub fn emit<F>(level: LogLevel, build: F)
where
    F: FnOnce() -> LogEvent,
{
    if let Some(service) = try_get_global_logger() {
        if service.should_log(level) {
            service.log_event(build());
        }
    }
}

/// Install (once per process) a debug-level memory logger shared by tests
#[cfg(test)]
pub(crate) fn test_memory_logger() -> std::sync::Arc<MemoryLogger> {
    use std::sync::Arc;

    static TEST_LOGGER: OnceLock<Arc<MemoryLogger>> = OnceLock::new();

    TEST_LOGGER
        .get_or_init(|| {
            let memory = Arc::new(MemoryLogger::new());
            let service = LoggingService::new(memory.clone(), LogLevel::Debug);
            // Only this helper installs a global logger in unit tests
            let _ = init_global_logging_with_service(service);
            memory
        })
        .clone()
}

/// Safe error logging (falls back to stderr if uninitialized)
pub fn safe_log_error(code: Code, message: &str) {
    match try_get_global_logger() {
        Some(logger) => logger.log_error(code, message),
        None => eprintln!("[ERROR] FALLBACK: [{}] {}", code.as_str(), message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_memory_logger_is_installed_once() {
        let first = test_memory_logger();
        let second = test_memory_logger();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(is_initialized());
        assert!(enabled(LogLevel::Debug));
    }

    #[test]
    fn test_second_initialization_is_rejected() {
        let _ = test_memory_logger();
        let result = init_global_logging(&LoggingPreferences::default());
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("ERR002"));
    }

    #[test]
    fn test_emit_reaches_memory_logger() {
        let memory = test_memory_logger();
        crate::log_warning!(codes::lexical::UNKNOWN_TOKEN, "emit test",
            "marker" => "test_emit_reaches_memory_logger");

        let found = memory.find_events(
            codes::lexical::UNKNOWN_TOKEN,
            "marker",
            "test_emit_reaches_memory_logger",
        );
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_safe_logging() {
        safe_log_error(codes::system::INTERNAL_ERROR, "Test error");
    }
}
