//! Error types for level lookups.

use std::fmt;

/// Errors raised when a level identifier cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// Neither a number nor a registered name or alias.
    Unknown(String),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Unknown(ident) => write!(f, "Unknown level: '{ident}'"),
        }
    }
}

impl std::error::Error for LevelError {}
