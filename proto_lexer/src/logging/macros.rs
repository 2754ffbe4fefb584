//! Type-safe logging macros using Code types with Display support
//!
//! Context values accept any `Display` type. Every macro is a no-op when no
//! global logger is installed or the level is filtered out, and context
//! values are only formatted once the level check has passed.

/// Log error with Code type
#[macro_export]
macro_rules! log_error {
    ($code:expr, $message:expr) => {
        $crate::logging::emit($crate::logging::LogLevel::Error, || {
            $crate::logging::LogEvent::error($code, $message)
        })
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        $crate::logging::emit($crate::logging::LogLevel::Error, || {
            let mut event = $crate::logging::LogEvent::error($code, $message);
            $(
                event = event.with_context($key, &format!("{}", $value));
            )+
            event
        })
    };
}

/// Log warning with Code type
#[macro_export]
macro_rules! log_warning {
    ($code:expr, $message:expr) => {
        $crate::logging::emit($crate::logging::LogLevel::Warning, || {
            $crate::logging::LogEvent::warning_with_code($code, $message)
        })
    };

    ($code:expr, $message:expr, offset = $offset:expr, $($key:expr => $value:expr),+) => {
        $crate::logging::emit($crate::logging::LogLevel::Warning, || {
            let mut event = $crate::logging::LogEvent::warning_with_code($code, $message)
                .with_offset($offset);
            $(
                event = event.with_context($key, &format!("{}", $value));
            )+
            event
        })
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        $crate::logging::emit($crate::logging::LogLevel::Warning, || {
            let mut event = $crate::logging::LogEvent::warning_with_code($code, $message);
            $(
                event = event.with_context($key, &format!("{}", $value));
            )+
            event
        })
    };
}

/// Log success with Code type
#[macro_export]
macro_rules! log_success {
    ($code:expr, $message:expr) => {
        $crate::logging::emit($crate::logging::LogLevel::Info, || {
            $crate::logging::LogEvent::success($code, $message)
        })
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        $crate::logging::emit($crate::logging::LogLevel::Info, || {
            let mut event = $crate::logging::LogEvent::success($code, $message);
            $(
                event = event.with_context($key, &format!("{}", $value));
            )+
            event
        })
    };
}

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($message:expr) => {
        $crate::logging::emit($crate::logging::LogLevel::Info, || {
            $crate::logging::LogEvent::info($message)
        })
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        $crate::logging::emit($crate::logging::LogLevel::Info, || {
            let mut event = $crate::logging::LogEvent::info($message);
            $(
                event = event.with_context($key, &format!("{}", $value));
            )+
            event
        })
    };
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($message:expr) => {
        $crate::logging::emit($crate::logging::LogLevel::Debug, || {
            $crate::logging::LogEvent::debug($message)
        })
    };

    ($message:expr, offset = $offset:expr, $($key:expr => $value:expr),+) => {
        $crate::logging::emit($crate::logging::LogLevel::Debug, || {
            let mut event = $crate::logging::LogEvent::debug($message).with_offset($offset);
            $(
                event = event.with_context($key, &format!("{}", $value));
            )+
            event
        })
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        $crate::logging::emit($crate::logging::LogLevel::Debug, || {
            let mut event = $crate::logging::LogEvent::debug($message);
            $(
                event = event.with_context($key, &format!("{}", $value));
            )+
            event
        })
    };
}
