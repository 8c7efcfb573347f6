//! Level registry.
//!
//! The registry maps level names and aliases to [`Severity`] entries. It is
//! populated once at startup and then handed to a logger, which only reads
//! it. There is no removal path.
//!
//! Registration never fails loudly: a collision without `force` leaves the
//! registry untouched and is reported through [`Registration::Skipped`].
//! Writing the warning is up to the caller, which knows where diagnostics go
//! and whether they may carry color.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::LevelError;
use crate::level::{EXTENDED_LEVELS, LevelSpec, STANDARD_LEVELS, Severity};

/// Identifiers used by the logger's own API; a level alias may not shadow them.
pub const RESERVED_ALIASES: &[&str] = &[
    "log",
    "emit",
    "emit_at",
    "log_at",
    "enabled",
    "flush",
    "level",
    "set_level",
    "module_level",
    "set_module_level",
    "effective_level",
    "trace_enabled",
    "registry",
    "formatter",
    "install",
];

/// Why a registration was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collision {
    /// The level name is already registered.
    Name(String),
    /// The alias is bound to another level.
    Alias(String),
    /// The alias would shadow a logger method.
    Reserved(String),
    /// Empty name; rejected even when forced.
    EmptyName,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collision::Name(name) => write!(f, "'{name}' already defined as a level"),
            Collision::Alias(alias) => write!(f, "'{alias}' already bound to a level"),
            Collision::Reserved(alias) => write!(f, "{alias} already defined on the logger"),
            Collision::EmptyName => f.write_str("level name must not be empty"),
        }
    }
}

/// Outcome of [`LevelRegistry::register`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// A new level was installed.
    Added,
    /// A forced registration replaced an existing level of the same name.
    Replaced,
    /// Nothing changed.
    Skipped(Collision),
}

impl Registration {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        !matches!(self, Registration::Skipped(_))
    }
}

/// Table of registered levels.
#[derive(Debug, Clone, Default)]
pub struct LevelRegistry {
    levels: Vec<Arc<Severity>>,
    names: HashMap<String, usize>,
    aliases: HashMap<String, usize>,
}

impl LevelRegistry {
    /// A registry with no levels at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The conventional DEBUG..CRITICAL set.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        for def in STANDARD_LEVELS {
            registry.register(def.into());
        }
        registry
    }

    /// The standard set plus VERBOSE, a terminating FATAL and TRACE.
    #[must_use]
    pub fn extended() -> Self {
        let mut registry = Self::standard();
        for def in EXTENDED_LEVELS {
            registry.register(def.into());
        }
        registry
    }

    /// Register a level.
    ///
    /// Without `force`, any clash on the name, the alias, or a reserved
    /// logger identifier returns [`Registration::Skipped`] with the registry
    /// unchanged.
    pub fn register(&mut self, spec: LevelSpec) -> Registration {
        let outcome = self.try_register(&spec);
        if outcome.is_applied() {
            log::debug!(
                "registered level {} at priority {}",
                spec.name(),
                spec.priority()
            );
        }
        outcome
    }

    fn try_register(&mut self, spec: &LevelSpec) -> Registration {
        if spec.name().is_empty() {
            return Registration::Skipped(Collision::EmptyName);
        }

        let name = spec.name().to_string();
        let alias = spec.alias();

        if !spec.is_forced() {
            if self.names.contains_key(&name) {
                return Registration::Skipped(Collision::Name(name));
            }
            if self.aliases.contains_key(&alias) {
                return Registration::Skipped(Collision::Alias(alias));
            }
            if RESERVED_ALIASES.contains(&alias.as_str()) {
                return Registration::Skipped(Collision::Reserved(alias));
            }
        }

        let level = Arc::new(spec.to_severity());
        let (index, outcome) = match self.names.get(&name).copied() {
            Some(index) => {
                let old_alias = self.levels[index].alias().to_string();
                if self.aliases.get(&old_alias) == Some(&index) {
                    self.aliases.remove(&old_alias);
                }
                self.levels[index] = level;
                (index, Registration::Replaced)
            }
            None => {
                let index = self.levels.len();
                self.levels.push(level);
                self.names.insert(name, index);
                (index, Registration::Added)
            }
        };
        if let Some(displaced) = self.aliases.insert(alias, index) {
            if displaced != index {
                self.unbind_alias(displaced);
            }
        }
        outcome
    }

    /// Strip the alias from a level whose alias was taken by another.
    fn unbind_alias(&mut self, index: usize) {
        let unbound = Severity::clone(&self.levels[index]).with_alias("");
        self.levels[index] = Arc::new(unbound);
    }

    /// Look up a level by name, case-insensitively.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<Severity>> {
        self.names
            .get(&name.trim().to_uppercase())
            .map(|&index| &self.levels[index])
    }

    /// Look up the level an alias is bound to.
    #[must_use]
    pub fn by_alias(&self, alias: &str) -> Option<&Arc<Severity>> {
        self.aliases
            .get(&alias.trim().to_lowercase())
            .map(|&index| &self.levels[index])
    }

    /// Look up by alias first, then by name.
    #[must_use]
    pub fn resolve(&self, ident: &str) -> Option<&Arc<Severity>> {
        self.by_alias(ident).or_else(|| self.get(ident))
    }

    /// Priority registered under `name`.
    #[must_use]
    pub fn priority_of(&self, name: &str) -> Option<u32> {
        self.get(name).map(|level| level.priority())
    }

    /// Parse a threshold given as a number, a level name, or an alias.
    pub fn parse_threshold(&self, value: &str) -> Result<u32, LevelError> {
        let value = value.trim();
        if let Ok(priority) = value.parse::<u32>() {
            return Ok(priority);
        }
        self.resolve(value)
            .map(|level| level.priority())
            .ok_or_else(|| LevelError::Unknown(value.to_string()))
    }

    /// Levels in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Severity>> {
        self.levels.iter()
    }

    /// Levels ordered by ascending priority, ties in registration order.
    #[must_use]
    pub fn sorted(&self) -> Vec<Arc<Severity>> {
        let mut levels = self.levels.clone();
        levels.sort_by_key(|level| level.priority());
        levels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::priority;

    #[test]
    fn standard_registry_has_conventional_levels() {
        let registry = LevelRegistry::standard();
        assert_eq!(registry.priority_of("debug"), Some(priority::DEBUG));
        assert_eq!(registry.priority_of("WARNING"), Some(priority::WARNING));
        assert_eq!(registry.priority_of("fatal"), Some(priority::CRITICAL));
        assert!(registry.get("TRACE").is_none());
        assert!(!registry.get("FATAL").unwrap().terminates());
    }

    #[test]
    fn extended_registry_layers_custom_levels() {
        let registry = LevelRegistry::extended();
        assert_eq!(registry.priority_of("TRACE"), Some(9));
        assert_eq!(registry.priority_of("VERBOSE"), Some(15));

        let fatal = registry.get("FATAL").unwrap();
        assert_eq!(fatal.priority(), 15);
        assert!(fatal.terminates());
        assert_eq!(registry.by_alias("fatal").unwrap().priority(), 15);
        // FATAL replaced in place; nothing duplicated.
        assert_eq!(registry.len(), STANDARD_LEVELS.len() + 2);
    }

    #[test]
    fn duplicate_name_without_force_is_skipped() {
        let mut registry = LevelRegistry::extended();
        let before = registry.priority_of("TRACE");

        let outcome = registry.register(LevelSpec::new("TRACE", 1));
        assert_eq!(outcome, Registration::Skipped(Collision::Name("TRACE".into())));
        assert_eq!(registry.priority_of("TRACE"), before);
    }

    #[test]
    fn duplicate_alias_without_force_is_skipped() {
        let mut registry = LevelRegistry::standard();
        let outcome = registry.register(LevelSpec::new("NOTICE", 25).alias_as("info"));
        assert_eq!(outcome, Registration::Skipped(Collision::Alias("info".into())));
        assert!(registry.get("NOTICE").is_none());
        assert_eq!(registry.by_alias("info").unwrap().name(), "INFO");
    }

    #[test]
    fn reserved_alias_is_skipped() {
        let mut registry = LevelRegistry::standard();
        let outcome = registry.register(LevelSpec::new("EMIT", 25));
        assert_eq!(outcome, Registration::Skipped(Collision::Reserved("emit".into())));
        assert!(registry.get("EMIT").is_none());
    }

    #[test]
    fn forced_registration_overwrites() {
        let mut registry = LevelRegistry::extended();
        let outcome = registry.register(LevelSpec::new("TRACE", 5).force(true));
        assert_eq!(outcome, Registration::Replaced);
        assert_eq!(registry.priority_of("TRACE"), Some(5));

        let outcome = registry.register(LevelSpec::new("TRACE", 7).force(true));
        assert_eq!(outcome, Registration::Replaced);
        assert_eq!(registry.priority_of("TRACE"), Some(7));
    }

    #[test]
    fn forced_alias_steals_binding() {
        let mut registry = LevelRegistry::standard();
        let outcome = registry.register(LevelSpec::new("NOTICE", 25).alias_as("info").force(true));
        assert_eq!(outcome, Registration::Added);
        assert_eq!(registry.by_alias("info").unwrap().name(), "NOTICE");

        let info = registry.get("INFO").unwrap();
        assert_eq!(info.priority(), priority::INFO);
        assert_eq!(info.alias(), "");
        let bound: Vec<_> = registry
            .iter()
            .filter(|level| level.alias() == "info")
            .map(|level| level.name().to_string())
            .collect();
        assert_eq!(bound, vec!["NOTICE".to_string()]);
    }

    #[test]
    fn forced_rename_of_alias_drops_old_binding() {
        let mut registry = LevelRegistry::standard();
        registry.register(LevelSpec::new("INFO", 20).alias_as("note").force(true));
        assert!(registry.by_alias("info").is_none());
        assert_eq!(registry.by_alias("note").unwrap().name(), "INFO");
    }

    #[test]
    fn empty_name_is_rejected_even_when_forced() {
        let mut registry = LevelRegistry::empty();
        let outcome = registry.register(LevelSpec::new("  ", 1).force(true));
        assert_eq!(outcome, Registration::Skipped(Collision::EmptyName));
        assert!(registry.is_empty());
    }

    #[test]
    fn parse_threshold_accepts_numbers_names_and_aliases() {
        let registry = LevelRegistry::extended();
        assert_eq!(registry.parse_threshold("1"), Ok(1));
        assert_eq!(registry.parse_threshold("warning"), Ok(30));
        assert_eq!(registry.parse_threshold(" Verbose "), Ok(15));
        assert_eq!(
            registry.parse_threshold("loud"),
            Err(LevelError::Unknown("loud".into()))
        );
    }

    #[test]
    fn sorted_orders_by_priority() {
        let registry = LevelRegistry::extended();
        let names: Vec<_> = registry.sorted().iter().map(|l| l.name().to_string()).collect();
        assert_eq!(names.first().map(String::as_str), Some("TRACE"));
        assert_eq!(names.last().map(String::as_str), Some("CRITICAL"));
    }
}
