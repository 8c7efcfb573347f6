//! Error types for configuration and logger installation.

use std::fmt;
use std::io;
use std::path::PathBuf;

use tintlog_core::LevelError;

/// Configuration error types.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// Config file is not valid TOML for [`crate::LoggerConfig`].
    Parse(toml::de::Error),
    /// A level reference did not resolve.
    Level(LevelError),
    /// A `module=level` entry without the `=`.
    InvalidModuleSpec(String),
    /// Color choice other than auto/always/never.
    InvalidColor(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "Failed to read config {}: {source}", path.display())
            }
            ConfigError::Parse(e) => write!(f, "Failed to parse TOML: {e}"),
            ConfigError::Level(e) => write!(f, "{e}"),
            ConfigError::InvalidModuleSpec(entry) => {
                write!(f, "Invalid module level '{entry}', expected module=level")
            }
            ConfigError::InvalidColor(value) => {
                write!(f, "Invalid color choice '{value}', expected auto, always or never")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Level(e) => Some(e),
            ConfigError::InvalidModuleSpec(_) | ConfigError::InvalidColor(_) => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<LevelError> for ConfigError {
    fn from(err: LevelError) -> Self {
        ConfigError::Level(err)
    }
}

/// Errors from installing the process-wide logger.
#[derive(Debug)]
pub enum InstallError {
    /// The process-wide logger was already created.
    AlreadyInitialized,
    /// Another `log` backend is already set.
    Facade(log::SetLoggerError),
}

impl fmt::Display for InstallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallError::AlreadyInitialized => f.write_str("Logger already initialized"),
            InstallError::Facade(e) => write!(f, "Failed to set log backend: {e}"),
        }
    }
}

impl std::error::Error for InstallError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InstallError::AlreadyInitialized => None,
            InstallError::Facade(e) => Some(e),
        }
    }
}

impl From<log::SetLoggerError> for InstallError {
    fn from(err: log::SetLoggerError) -> Self {
        InstallError::Facade(err)
    }
}
