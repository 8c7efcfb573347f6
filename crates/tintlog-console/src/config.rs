//! Logger configuration.
//!
//! `LoggerConfig` can be read from a TOML file and from environment
//! variables, then applied to a [`LoggerBuilder`].
//!
//! ```toml
//! level = "info"          # name, alias, or number
//! color = "auto"          # auto | always | never
//!
//! [modules]
//! worker = "debug"
//! "app::net" = 40
//!
//! [[levels]]
//! name = "NOTICE"
//! priority = 25
//! ```

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tintlog_core::{LevelError, LevelRegistry, LevelSpec};

use crate::detection::{DisplayContext, color_override};
use crate::error::ConfigError;
use crate::logger::LoggerBuilder;

/// A threshold given as a number or a level name/alias.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LevelValue {
    Priority(u32),
    Name(String),
}

impl LevelValue {
    /// Parse an environment value.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        match value.parse::<u32>() {
            Ok(priority) => LevelValue::Priority(priority),
            Err(_) => LevelValue::Name(value.to_string()),
        }
    }

    /// Resolve against registered levels.
    pub fn resolve(&self, registry: &LevelRegistry) -> Result<u32, LevelError> {
        match self {
            LevelValue::Priority(priority) => Ok(*priority),
            LevelValue::Name(name) => registry.parse_threshold(name),
        }
    }
}

/// Color preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Detect from the terminal and environment
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" | "1" | "true" => Ok(ColorChoice::Always),
            "never" | "0" | "false" => Ok(ColorChoice::Never),
            _ => Err(ConfigError::InvalidColor(value.to_string())),
        }
    }

    /// Explicit context, or `None` to auto-detect.
    #[must_use]
    pub fn context(self) -> Option<DisplayContext> {
        match self {
            ColorChoice::Auto => None,
            ColorChoice::Always => Some(DisplayContext::Color),
            ColorChoice::Never => Some(DisplayContext::Plain),
        }
    }
}

/// A level defined in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomLevel {
    pub name: String,
    pub priority: u32,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub terminates: bool,
    #[serde(default)]
    pub force: bool,
}

impl CustomLevel {
    #[must_use]
    pub fn to_spec(&self) -> LevelSpec {
        let spec = LevelSpec::new(&self.name, self.priority)
            .terminates(self.terminates)
            .force(self.force);
        match &self.alias {
            Some(alias) => spec.alias_as(alias),
            None => spec,
        }
    }
}

/// Configuration for a [`crate::Logger`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Global threshold (None = builder default, WARNING)
    pub level: Option<LevelValue>,
    pub color: ColorChoice,
    /// Per-module thresholds
    pub modules: BTreeMap<String, LevelValue>,
    /// Extra levels, registered in order
    pub levels: Vec<CustomLevel>,
}

impl LoggerConfig {
    /// Create config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// `<config dir>/tintlog/tintlog.toml`
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tintlog").join("tintlog.toml"))
    }

    /// Create config from environment variables
    ///
    /// When `TINTLOG_CONFIG` is unset, the file at [`Self::default_path`] is
    /// used if it exists.
    ///
    /// # Environment Variables
    ///
    /// | Variable | Values | Description |
    /// |----------|--------|-------------|
    /// | `TINTLOG_CONFIG` | path | TOML config file |
    /// | `TINTLOG_LEVEL` | name/alias/number | Global threshold |
    /// | `TINTLOG_MODULES` | `mod=level,...` | Module thresholds |
    /// | `TINTLOG_COLOR` | auto/always/never | Color choice |
    /// | `TINTLOG_FORCE_COLOR` | (set) | Force color |
    /// | `NO_COLOR` | (set) | Disable color (standard) |
    pub fn from_env() -> Result<Self, ConfigError> {
        let lookup = |key: &str| env::var(key).ok();
        if lookup("TINTLOG_CONFIG").is_some() {
            return Self::from_env_with(lookup);
        }
        let base = match Self::default_path().filter(|path| path.is_file()) {
            Some(path) => Self::load(&path)?,
            None => Self::default(),
        };
        base.overlay_env(lookup)
    }

    /// Like [`Self::from_env`] with a custom variable lookup and no default
    /// file.
    pub fn from_env_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match lookup("TINTLOG_CONFIG") {
            Some(path) => Self::load(Path::new(&path))?,
            None => Self::default(),
        };
        base.overlay_env(lookup)
    }

    /// Apply environment variables on top of this config.
    pub fn overlay_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("TINTLOG_LEVEL") {
            self.level = Some(LevelValue::parse(&level));
        }

        if let Some(modules) = lookup("TINTLOG_MODULES") {
            for entry in modules.split(',').map(str::trim).filter(|e| !e.is_empty()) {
                let (module, level) = entry
                    .split_once('=')
                    .ok_or_else(|| ConfigError::InvalidModuleSpec(entry.to_string()))?;
                let module = module.trim();
                if module.is_empty() {
                    return Err(ConfigError::InvalidModuleSpec(entry.to_string()));
                }
                self.modules
                    .insert(module.to_string(), LevelValue::parse(level));
            }
        }

        if let Some(color) = lookup("TINTLOG_COLOR") {
            self.color = ColorChoice::parse(&color)?;
        }
        if let Some(force) = color_override(&lookup) {
            self.color = if force {
                ColorChoice::Always
            } else {
                ColorChoice::Never
            };
        }

        Ok(self)
    }

    /// Configure a builder: color first so registration warnings honor it,
    /// then custom levels, then thresholds.
    pub fn apply(&self, mut builder: LoggerBuilder) -> Result<LoggerBuilder, ConfigError> {
        if let Some(context) = self.color.context() {
            builder = builder.context(context);
        }

        for level in &self.levels {
            builder.try_register_level(level.to_spec());
        }

        if let Some(level) = &self.level {
            let priority = level.resolve(builder.levels())?;
            builder = builder.level(priority);
        }

        for (module, level) in &self.modules {
            let priority = level.resolve(builder.levels())?;
            builder = builder.module_level(module.clone(), priority);
        }

        Ok(builder)
    }
}
