//! Colorized console logging with custom severity levels.
//!
//! - [`Logger`] filters records by global and per-module thresholds and
//!   writes them through a [`LineSink`]
//! - [`Formatter`] renders a record as one colored, timestamped line
//! - [`LoggerConfig`] reads thresholds, colors and extra levels from TOML and
//!   the environment
//! - [`TintLayer`] routes `tracing` events through a logger
//!
//! Levels come from [`tintlog_core`]; the default set adds TRACE, VERBOSE and
//! a terminating FATAL on top of DEBUG..CRITICAL.
//!
//! # Example
//!
//! ```ignore
//! use tintlog_console::{Logger, priority};
//!
//! let logger = Logger::builder().level(priority::TRACE).build();
//! logger.trace("hello");
//!
//! // Or through the process-wide logger:
//! tintlog_console::init()?;
//! tintlog_console::info!("Testing {}", 1);
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod detection;
pub mod error;
pub mod formatter;
pub mod logger;
pub mod macros;
pub mod sink;
pub mod subscriber;
pub mod template;
pub mod testing;

pub use config::{ColorChoice, CustomLevel, LevelValue, LoggerConfig};
pub use detection::{DisplayContext, should_enable_color};
pub use error::{ConfigError, InstallError};
pub use formatter::Formatter;
pub use logger::{
    Logger, LoggerBuilder, emit, init, logger, set_level, try_logger, warning_line,
};
pub use sink::{ExitHandler, LineSink, ProcessExit, StderrSink, StdoutSink};
pub use subscriber::{TintLayer, TintSubscriberBuilder};
pub use template::{Template, TemplateTable, palette};
pub use tintlog_core::{LevelRegistry, LevelSpec, LogRecord, Registration, Severity, priority};
