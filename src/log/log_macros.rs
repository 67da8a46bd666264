//! Leveled, `format!`-style logging macros for any logger, handle or sink,
//! and for the process-wide instance.
//!
//! # Feature Flags
//! Levels are controlled by cargo features:
//! `log-debug`, `log-info`, `log-warn`, `log-error` (each implies the next).
//!
//! If a feature is disabled, the corresponding macros expand to `()`, removing
//! all formatting and allocation overhead at compile time.

// ============================================================================
// 1. GENERIC MACROS
// ============================================================================

/// Logs to `$logger`, which may be a `ProcessLogger`, a `LoggerHandle` or any
/// `LogSink` (including `Arc<dyn LogSink>`).
#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr, $($arg:tt)*) => {{
        let __msg = format!($($arg)*);
        $logger.log($lvl, &__msg);
    }};
}

/// Logs to the process-wide logger returned by `log::instance()`.
#[macro_export]
macro_rules! global_log {
    ($lvl:expr, $($arg:tt)*) => {
        $crate::logger_log!($crate::log::instance(), $lvl, $($arg)*)
    };
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS (Feature Gated)
// ============================================================================

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! logger_debug { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::LogLevel::Debug, $($arg)*) } }
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! log_debug    { ($($arg:tt)*) => { $crate::global_log!($crate::log::LogLevel::Debug, $($arg)*) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! logger_debug {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! logger_info { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::LogLevel::Info, $($arg)*) } }
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! log_info    { ($($arg:tt)*) => { $crate::global_log!($crate::log::LogLevel::Info, $($arg)*) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! logger_info {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- WARNING ----------------------
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! logger_warning { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::LogLevel::Warning, $($arg)*) } }
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! log_warning    { ($($arg:tt)*) => { $crate::global_log!($crate::log::LogLevel::Warning, $($arg)*) } }

#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! logger_warning {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- ERROR ----------------------
// Generally always enabled, but consistent structure allows user to disable if really needed.
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! logger_error { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::LogLevel::Error, $($arg)*) } }
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! log_error    { ($($arg:tt)*) => { $crate::global_log!($crate::log::LogLevel::Error, $($arg)*) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! logger_error {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        ()
    };
}
