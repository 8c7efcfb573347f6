//! Log records.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::level::Severity;

/// A single emitted log call.
///
/// Records are built once per call, handed to a formatter, and dropped.
#[derive(Debug, Clone)]
pub struct LogRecord {
    timestamp: DateTime<Local>,
    level: Arc<Severity>,
    message: String,
    module: String,
    line: u32,
    thread: String,
}

impl LogRecord {
    /// Create a record stamped with the current local time and thread.
    #[must_use]
    pub fn new(level: Arc<Severity>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            message: message.into(),
            module: String::new(),
            line: 0,
            thread: current_thread_name(),
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Set the originating module path (`crate::module`) or file stem.
    #[must_use]
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    #[must_use]
    pub fn with_thread(mut self, thread: impl Into<String>) -> Self {
        self.thread = thread.into();
        self
    }

    #[must_use]
    pub fn timestamp(&self) -> &DateTime<Local> {
        &self.timestamp
    }

    #[must_use]
    pub fn level(&self) -> &Severity {
        &self.level
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Full module path as recorded.
    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Last segment of the module path.
    #[must_use]
    pub fn module_name(&self) -> &str {
        self.module.rsplit("::").next().unwrap_or_default()
    }

    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[must_use]
    pub fn thread(&self) -> &str {
        &self.thread
    }
}

/// Name of the calling thread, or its id when unnamed.
#[must_use]
pub fn current_thread_name() -> String {
    let thread = std::thread::current();
    match thread.name() {
        Some(name) => name.to_string(),
        None => format!("{:?}", thread.id()),
    }
}

/// Module name derived from a source path: `src/worker.rs` becomes `worker`.
///
/// A `mod.rs` file is named after its directory, so `src/pool/mod.rs` is
/// `pool`. Crate roots (`lib.rs`, `main.rs`) keep their stem.
#[must_use]
pub fn module_from_file(file: &str) -> String {
    let path = Path::new(file);
    let stem = path.file_stem().and_then(|stem| stem.to_str());
    let name = match stem {
        Some("mod") => path
            .parent()
            .and_then(Path::file_name)
            .and_then(|dir| dir.to_str())
            .or(stem),
        _ => stem,
    };
    name.unwrap_or(file).to_string()
}
