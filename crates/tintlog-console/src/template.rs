//! Severity-keyed color templates.

use std::collections::HashMap;

/// ANSI escape sequences used by the built-in templates.
pub mod palette {
    pub const GREY: &str = "\x1b[38;21m";
    pub const YELLOW: &str = "\x1b[33;21m";
    pub const RED: &str = "\x1b[31;21m";
    pub const BOLD_RED: &str = "\x1b[31;1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Escape codes wrapped around a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    start: &'static str,
    reset: &'static str,
}

impl Template {
    #[must_use]
    pub const fn new(start: &'static str, reset: &'static str) -> Self {
        Self { start, reset }
    }

    /// Template that adds no escapes.
    #[must_use]
    pub const fn plain() -> Self {
        Self::new("", "")
    }

    #[must_use]
    pub const fn colored(start: &'static str) -> Self {
        Self::new(start, palette::RESET)
    }

    #[must_use]
    pub fn start(&self) -> &'static str {
        self.start
    }

    #[must_use]
    pub fn reset(&self) -> &'static str {
        self.reset
    }

    /// Wrap a rendered line.
    #[must_use]
    pub fn wrap(&self, line: &str) -> String {
        let mut out = String::with_capacity(self.start.len() + line.len() + self.reset.len());
        out.push_str(self.start);
        out.push_str(line);
        out.push_str(self.reset);
        out
    }
}

/// Built-in level name to template assignments.
pub const STANDARD_TEMPLATES: &[(&str, Template)] = &[
    ("TRACE", Template::colored(palette::GREY)),
    ("VERBOSE", Template::colored(palette::GREY)),
    ("DEBUG", Template::colored(palette::GREY)),
    ("INFO", Template::colored(palette::GREY)),
    ("WARNING", Template::colored(palette::YELLOW)),
    ("ERROR", Template::colored(palette::RED)),
    ("CRITICAL", Template::colored(palette::BOLD_RED)),
    ("FATAL", Template::colored(palette::BOLD_RED)),
];

/// Level name to [`Template`] lookup with a default for unmapped levels.
#[derive(Debug, Clone)]
pub struct TemplateTable {
    entries: HashMap<String, Template>,
    fallback: Template,
}

impl Default for TemplateTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TemplateTable {
    /// Table with the built-in colors and an uncolored default.
    #[must_use]
    pub fn standard() -> Self {
        let entries = STANDARD_TEMPLATES
            .iter()
            .map(|(name, template)| ((*name).to_string(), *template))
            .collect();
        Self {
            entries,
            fallback: Template::plain(),
        }
    }

    /// Table with no entries; everything renders with `fallback`.
    #[must_use]
    pub fn uniform(fallback: Template) -> Self {
        Self {
            entries: HashMap::new(),
            fallback,
        }
    }

    /// Assign a template to a level name.
    #[must_use]
    pub fn with(mut self, name: &str, template: Template) -> Self {
        self.insert(name, template);
        self
    }

    pub fn insert(&mut self, name: &str, template: Template) {
        self.entries.insert(name.trim().to_uppercase(), template);
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: Template) -> Self {
        self.fallback = fallback;
        self
    }

    /// Template for a level name, or the default entry.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Template {
        self.entries
            .get(name)
            .or_else(|| self.entries.get(&name.to_uppercase()))
            .copied()
            .unwrap_or(self.fallback)
    }

    #[must_use]
    pub fn fallback(&self) -> Template {
        self.fallback
    }
}
