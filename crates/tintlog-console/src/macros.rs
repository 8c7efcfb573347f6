//! Emission macros.
//!
//! [`emit!`](crate::emit!) targets an explicit logger; the per-level macros
//! target the process-wide logger from [`crate::logger()`]. All of them
//! record `module_path!()` and `line!()` of the call site.

/// Emits through a logger by level alias.
///
/// ```ignore
/// tintlog_console::emit!(logger, "verbose", "loaded {} entries", count);
/// ```
#[macro_export]
macro_rules! emit {
    ($logger:expr, $alias:expr, $($arg:tt)+) => {
        $logger.emit_at($alias, module_path!(), line!(), format_args!($($arg)+))
    };
}

/// Emits through the process-wide logger by level alias.
#[macro_export]
macro_rules! log_as {
    ($alias:expr, $($arg:tt)+) => {
        $crate::logger().emit_at($alias, module_path!(), line!(), format_args!($($arg)+))
    };
}

/// Logs at TRACE through the process-wide logger.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => { $crate::log_as!("trace", $($arg)+) };
}

/// Logs at VERBOSE through the process-wide logger.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)+) => { $crate::log_as!("verbose", $($arg)+) };
}

/// Logs at DEBUG through the process-wide logger.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::log_as!("debug", $($arg)+) };
}

/// Logs at INFO through the process-wide logger.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::log_as!("info", $($arg)+) };
}

/// Logs at WARNING through the process-wide logger.
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => { $crate::log_as!("warning", $($arg)+) };
}

/// Logs at ERROR through the process-wide logger.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::log_as!("error", $($arg)+) };
}

/// Logs at CRITICAL through the process-wide logger.
#[macro_export]
macro_rules! critical {
    ($($arg:tt)+) => { $crate::log_as!("critical", $($arg)+) };
}

/// Logs at FATAL through the process-wide logger.
///
/// With the extended level set this ends the process when admitted.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => { $crate::log_as!("fatal", $($arg)+) };
}
