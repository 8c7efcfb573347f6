//! Line formatter.
//!
//! Renders a [`LogRecord`] as one line:
//!
//! ```text
//! 2024-05-01 12:00:00.042 0017:worker     main       [WARNING ] disk almost full
//! ```
//!
//! Fields, in order: local time to the second, milliseconds, zero-padded
//! line number, module (10 columns), thread (10 columns), bracketed level
//! name (8 columns), message. In a color context the line is wrapped in the
//! level's template from the [`TemplateTable`].

use std::fmt::Write as _;

use tintlog_core::LogRecord;

use crate::detection::DisplayContext;
use crate::template::{Template, TemplateTable};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Severity-aware line formatter.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    templates: TemplateTable,
    context: DisplayContext,
}

impl Formatter {
    #[must_use]
    pub fn new(templates: TemplateTable, context: DisplayContext) -> Self {
        Self { templates, context }
    }

    /// Standard templates, color decided from the environment.
    #[must_use]
    pub fn detect() -> Self {
        Self::new(TemplateTable::standard(), DisplayContext::detect())
    }

    #[must_use]
    pub fn with_templates(mut self, templates: TemplateTable) -> Self {
        self.templates = templates;
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: DisplayContext) -> Self {
        self.context = context;
        self
    }

    #[must_use]
    pub fn context(&self) -> DisplayContext {
        self.context
    }

    #[must_use]
    pub fn templates(&self) -> &TemplateTable {
        &self.templates
    }

    /// Template applied to a record in the current context.
    #[must_use]
    pub fn template_for(&self, record: &LogRecord) -> Template {
        if self.context.is_color() {
            self.templates.lookup(record.level().name())
        } else {
            Template::plain()
        }
    }

    /// Render a record as a single line, without a trailing newline.
    #[must_use]
    pub fn format(&self, record: &LogRecord) -> String {
        self.template_for(record).wrap(&render_fields(record))
    }
}

/// Render the uncolored field layout.
#[must_use]
pub fn render_fields(record: &LogRecord) -> String {
    let timestamp = record.timestamp();
    let mut line = String::with_capacity(64 + record.message().len());
    let _ = write!(
        line,
        "{}.{:03} {:04}:{:<10.10} {:<10.10} [{:<8}] {}",
        timestamp.format(DATE_FORMAT),
        timestamp.timestamp_subsec_millis().min(999),
        record.line(),
        record.module_name(),
        record.thread(),
        record.level().name(),
        record.message(),
    );
    line
}
