//! Severity levels.
//!
//! A [`Severity`] is a named priority. Lower priorities are more verbose: a
//! record is admitted when its priority is at or above the active threshold.
//!
//! The built-in levels are declared in two static tables instead of being
//! created ad hoc:
//!
//! - [`STANDARD_LEVELS`]: the conventional set (DEBUG through CRITICAL, with
//!   FATAL as a non-terminating synonym of CRITICAL)
//! - [`EXTENDED_LEVELS`]: VERBOSE, a terminating FATAL and TRACE, registered
//!   on top of the standard set
//!
//! # Priorities
//!
//! | Level    | Priority |
//! |----------|----------|
//! | TRACE    | 9        |
//! | DEBUG    | 10       |
//! | VERBOSE  | 15       |
//! | INFO     | 20       |
//! | WARNING  | 30       |
//! | ERROR    | 40       |
//! | CRITICAL | 50       |

use std::fmt;

/// Well-known priorities.
pub mod priority {
    /// Admits everything.
    pub const NOTSET: u32 = 0;
    pub const TRACE: u32 = 9;
    pub const DEBUG: u32 = 10;
    pub const VERBOSE: u32 = 15;
    pub const INFO: u32 = 20;
    pub const WARNING: u32 = 30;
    pub const ERROR: u32 = 40;
    pub const CRITICAL: u32 = 50;
    /// Terminating FATAL in the extended set.
    pub const FATAL: u32 = 15;
}

/// A registered severity level.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Severity {
    name: String,
    alias: String,
    priority: u32,
    terminates: bool,
}

impl Severity {
    /// Create a non-terminating level whose alias is the lower-cased name.
    #[must_use]
    pub fn new(name: impl AsRef<str>, priority: u32) -> Self {
        let name = name.as_ref().trim().to_uppercase();
        let alias = name.to_lowercase();
        Self {
            name,
            alias,
            priority,
            terminates: false,
        }
    }

    #[must_use]
    pub fn with_alias(mut self, alias: impl AsRef<str>) -> Self {
        self.alias = alias.as_ref().trim().to_lowercase();
        self
    }

    /// Mark the level as terminating the process after emission.
    #[must_use]
    pub fn terminating(mut self, terminates: bool) -> Self {
        self.terminates = terminates;
        self
    }

    /// Upper-cased level name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short method identifier. Empty once a forced registration took the
    /// alias over.
    #[must_use]
    pub fn alias(&self) -> &str {
        &self.alias
    }

    #[must_use]
    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// Whether emitting at this level ends the process.
    #[must_use]
    pub fn terminates(&self) -> bool {
        self.terminates
    }

    /// Whether a threshold admits records at this level.
    #[must_use]
    pub fn admitted_by(&self, threshold: u32) -> bool {
        self.priority >= threshold
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A request to register a level.
///
/// ```
/// use tintlog_core::LevelSpec;
///
/// let spec = LevelSpec::new("fatal", 15).terminates(true).force(true);
/// assert_eq!(spec.name(), "FATAL");
/// assert_eq!(spec.alias(), "fatal");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSpec {
    name: String,
    priority: u32,
    alias: Option<String>,
    terminates: bool,
    force: bool,
}

impl LevelSpec {
    #[must_use]
    pub fn new(name: impl AsRef<str>, priority: u32) -> Self {
        Self {
            name: name.as_ref().trim().to_uppercase(),
            priority,
            alias: None,
            terminates: false,
            force: false,
        }
    }

    /// Override the derived alias.
    #[must_use]
    pub fn alias_as(mut self, alias: impl AsRef<str>) -> Self {
        let alias = alias.as_ref().trim().to_lowercase();
        self.alias = if alias.is_empty() { None } else { Some(alias) };
        self
    }

    #[must_use]
    pub fn terminates(mut self, terminates: bool) -> Self {
        self.terminates = terminates;
        self
    }

    /// Replace whatever currently holds the name or alias.
    #[must_use]
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Explicit alias, or the lower-cased name.
    #[must_use]
    pub fn alias(&self) -> String {
        self.alias
            .clone()
            .unwrap_or_else(|| self.name.to_lowercase())
    }

    #[must_use]
    pub fn priority(&self) -> u32 {
        self.priority
    }

    #[must_use]
    pub fn is_forced(&self) -> bool {
        self.force
    }

    #[must_use]
    pub fn is_terminating(&self) -> bool {
        self.terminates
    }

    /// Build the severity this request describes.
    #[must_use]
    pub fn to_severity(&self) -> Severity {
        Severity::new(&self.name, self.priority)
            .with_alias(self.alias())
            .terminating(self.terminates)
    }
}

/// Static level table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelDef {
    pub name: &'static str,
    pub priority: u32,
    pub alias: &'static str,
    pub terminates: bool,
    pub force: bool,
}

impl From<&LevelDef> for LevelSpec {
    fn from(def: &LevelDef) -> Self {
        LevelSpec::new(def.name, def.priority)
            .alias_as(def.alias)
            .terminates(def.terminates)
            .force(def.force)
    }
}

/// Conventional levels.
pub const STANDARD_LEVELS: &[LevelDef] = &[
    LevelDef {
        name: "DEBUG",
        priority: priority::DEBUG,
        alias: "debug",
        terminates: false,
        force: false,
    },
    LevelDef {
        name: "INFO",
        priority: priority::INFO,
        alias: "info",
        terminates: false,
        force: false,
    },
    LevelDef {
        name: "WARNING",
        priority: priority::WARNING,
        alias: "warning",
        terminates: false,
        force: false,
    },
    LevelDef {
        name: "ERROR",
        priority: priority::ERROR,
        alias: "error",
        terminates: false,
        force: false,
    },
    LevelDef {
        name: "CRITICAL",
        priority: priority::CRITICAL,
        alias: "critical",
        terminates: false,
        force: false,
    },
    LevelDef {
        name: "FATAL",
        priority: priority::CRITICAL,
        alias: "fatal",
        terminates: false,
        force: false,
    },
];

/// Levels layered over [`STANDARD_LEVELS`], in registration order.
///
/// FATAL is forced because the standard set already defines it.
pub const EXTENDED_LEVELS: &[LevelDef] = &[
    LevelDef {
        name: "VERBOSE",
        priority: priority::VERBOSE,
        alias: "verbose",
        terminates: false,
        force: false,
    },
    LevelDef {
        name: "FATAL",
        priority: priority::FATAL,
        alias: "fatal",
        terminates: true,
        force: true,
    },
    LevelDef {
        name: "TRACE",
        priority: priority::TRACE,
        alias: "trace",
        terminates: false,
        force: false,
    },
];

/// Level name that a `log` crate level maps onto.
#[must_use]
pub fn name_for_log_level(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERROR",
        log::Level::Warn => "WARNING",
        log::Level::Info => "INFO",
        log::Level::Debug => "DEBUG",
        log::Level::Trace => "TRACE",
    }
}
