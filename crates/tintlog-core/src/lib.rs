//! Core types for tintlog.
//!
//! This crate holds the pieces with no output concerns:
//! - [`Severity`] and the static level tables
//! - [`LevelRegistry`], where named levels are registered with collision checks
//! - [`LogRecord`], the per-call value handed to formatters
//!
//! ```
//! use tintlog_core::{LevelRegistry, LevelSpec, Registration};
//!
//! let mut registry = LevelRegistry::standard();
//! assert_eq!(registry.register(LevelSpec::new("TRACE", 9)), Registration::Added);
//! assert!(!registry.register(LevelSpec::new("TRACE", 1)).is_applied());
//! assert_eq!(registry.priority_of("trace"), Some(9));
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod level;
pub mod record;
pub mod registry;

pub use error::LevelError;
pub use level::{
    EXTENDED_LEVELS, LevelDef, LevelSpec, STANDARD_LEVELS, Severity, name_for_log_level, priority,
};
pub use record::{LogRecord, current_thread_name, module_from_file};
pub use registry::{Collision, LevelRegistry, RESERVED_ALIASES, Registration};
