//! Color/plain context detection
//!
//! Determines whether rendered lines should carry ANSI color escapes.

/// Display context representing the output environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayContext {
    /// Plain text, no escape codes
    Plain,
    /// Colored output
    #[default]
    Color,
}

impl DisplayContext {
    /// Create a plain-text context
    #[must_use]
    pub fn new_plain() -> Self {
        Self::Plain
    }

    /// Create a colored context
    #[must_use]
    pub fn new_color() -> Self {
        Self::Color
    }

    /// Auto-detect the display context from environment and stderr
    #[must_use]
    pub fn detect() -> Self {
        Self::from_flag(should_enable_color())
    }

    #[must_use]
    pub fn from_flag(color: bool) -> Self {
        if color { Self::Color } else { Self::Plain }
    }

    /// Check if escape codes should be emitted
    #[must_use]
    pub fn is_color(&self) -> bool {
        matches!(self, Self::Color)
    }

    #[must_use]
    pub fn is_plain(&self) -> bool {
        matches!(self, Self::Plain)
    }
}

/// Explicit color preference from environment variables, if any.
///
/// `TINTLOG_FORCE_COLOR` wins over `NO_COLOR` / `TINTLOG_PLAIN`.
#[must_use]
pub fn color_override<F>(lookup: F) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    if lookup("TINTLOG_FORCE_COLOR").is_some() {
        return Some(true);
    }
    if lookup("NO_COLOR").is_some() || lookup("TINTLOG_PLAIN").is_some() {
        return Some(false);
    }
    None
}

/// Determine if colored output should be enabled
#[must_use]
pub fn should_enable_color() -> bool {
    color_override(|key| std::env::var(key).ok())
        .unwrap_or_else(console::colors_enabled_stderr)
}
