//! Colorized logger with custom severity levels.
//!
//! A [`Logger`] owns a frozen [`LevelRegistry`], a [`Formatter`] and a
//! [`LineSink`]. Records below the threshold are dropped before they reach
//! the formatter.
//!
//! # Usage
//!
//! ```ignore
//! use tintlog_console::{Logger, priority};
//! use tintlog_core::LevelSpec;
//!
//! let logger = Logger::builder()
//!     .register_level(LevelSpec::new("NOTICE", 25))
//!     .level(priority::INFO)
//!     .build();
//!
//! logger.info("server started");
//! logger.emit("notice", format_args!("{} clients", 3));
//! ```
//!
//! # Terminating levels
//!
//! A level registered with `terminates(true)` ends the process with status 0
//! right after its line is written. This only happens when the threshold
//! admits the record; a suppressed terminating call is a no-op.
//!
//! # Warnings
//!
//! Level collisions and unknown aliases are reported as `Warning: ...` lines
//! on a separate warning sink (stderr by default). They are yellow only when
//! the logger's display context allows color.

use std::fmt;
use std::panic::Location;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, OnceLock, RwLock};

use log::{LevelFilter, Log, Metadata, Record};
use tintlog_core::{
    LevelRegistry, LevelSpec, LogRecord, Registration, Severity, module_from_file,
    name_for_log_level, priority,
};

use crate::config::LoggerConfig;
use crate::detection::DisplayContext;
use crate::error::InstallError;
use crate::formatter::Formatter;
use crate::sink::{ExitHandler, LineSink, ProcessExit, StderrSink};
use crate::template::{Template, TemplateTable, palette};

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// `log` backend that forwards to the process-wide logger.
struct Facade;

static FACADE: Facade = Facade;

impl Log for Facade {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        LOGGER.get().is_some_and(|logger| logger.enabled(metadata))
    }

    fn log(&self, record: &Record<'_>) {
        if let Some(logger) = LOGGER.get() {
            Log::log(logger, record);
        }
    }

    fn flush(&self) {
        if let Some(logger) = LOGGER.get() {
            Log::flush(logger);
        }
    }
}

/// The process-wide logger, created from the environment on first use.
pub fn logger() -> &'static Logger {
    LOGGER.get_or_init(Logger::from_env)
}

/// The process-wide logger if one was installed or already created.
#[must_use]
pub fn try_logger() -> Option<&'static Logger> {
    LOGGER.get()
}

/// Build a logger from the environment and install it process-wide.
pub fn init() -> Result<&'static Logger, InstallError> {
    Logger::from_env().install()
}

/// Emit through the process-wide logger by level alias.
#[track_caller]
pub fn emit(alias: &str, message: impl fmt::Display) {
    let caller = Location::caller();
    logger().emit_at(
        alias,
        &module_from_file(caller.file()),
        caller.line(),
        format_args!("{message}"),
    );
}

/// Set the threshold of the process-wide logger.
pub fn set_level(priority: u32) {
    logger().set_level(priority);
}

/// Severity-aware console logger.
pub struct Logger {
    registry: LevelRegistry,
    formatter: Formatter,
    sink: Box<dyn LineSink>,
    exit: Box<dyn ExitHandler>,
    warnings: Box<dyn LineSink>,
    threshold: AtomicU32,
    modules: RwLock<Vec<(String, u32)>>,
}

/// Render a warning, yellow when `context` allows color.
#[must_use]
pub fn warning_line(context: DisplayContext, message: impl fmt::Display) -> String {
    let line = format!("Warning: {message}");
    if context.is_color() {
        Template::colored(palette::YELLOW).wrap(&line)
    } else {
        line
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("levels", &self.registry.len())
            .field("threshold", &self.level())
            .field("context", &self.formatter.context())
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Logger over `registry` with default formatter, stderr sink and a
    /// WARNING threshold.
    #[must_use]
    pub fn new(registry: LevelRegistry) -> Self {
        Self::builder().registry(registry).build()
    }

    /// Create a logger using the builder pattern.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Build from [`LoggerConfig::from_env`].
    ///
    /// Configuration problems are reported on stderr and the defaults are
    /// used instead; this never fails.
    #[must_use]
    pub fn from_env() -> Self {
        let report = |err: &dyn fmt::Display| {
            StderrSink.write_line(&warning_line(DisplayContext::detect(), err));
        };
        let config = LoggerConfig::from_env().unwrap_or_else(|err| {
            report(&err);
            LoggerConfig::default()
        });
        match config.apply(Self::builder()) {
            Ok(builder) => builder.build(),
            Err(err) => {
                report(&err);
                Self::builder().build()
            }
        }
    }

    /// Install as the process-wide logger and as the `log` backend.
    ///
    /// Fails if [`logger`] or `install` already ran, or if another `log`
    /// backend is set. In both cases nothing is installed.
    pub fn install(self) -> Result<&'static Logger, InstallError> {
        if LOGGER.get().is_some() {
            return Err(InstallError::AlreadyInitialized);
        }
        log::set_logger(&FACADE)?;
        log::set_max_level(LevelFilter::Trace);
        LOGGER
            .set(self)
            .map_err(|_| InstallError::AlreadyInitialized)?;
        LOGGER.get().ok_or(InstallError::AlreadyInitialized)
    }

    #[must_use]
    pub fn registry(&self) -> &LevelRegistry {
        &self.registry
    }

    #[must_use]
    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Global threshold.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.threshold.load(Ordering::Relaxed)
    }

    /// Set the global threshold; records below it are suppressed.
    pub fn set_level(&self, priority: u32) {
        self.threshold.store(priority, Ordering::Relaxed);
    }

    /// Give a module its own threshold.
    ///
    /// `module` matches a record whose module path equals it, starts with
    /// `module::`, or ends with `::module`. The longest matching entry wins.
    pub fn set_module_level(&self, module: &str, priority: u32) {
        let module = module.trim().to_string();
        if let Ok(mut modules) = self.modules.write() {
            match modules.iter_mut().find(|(name, _)| *name == module) {
                Some(entry) => entry.1 = priority,
                None => modules.push((module, priority)),
            }
        }
    }

    /// Remove a module threshold.
    pub fn clear_module_level(&self, module: &str) {
        if let Ok(mut modules) = self.modules.write() {
            modules.retain(|(name, _)| name != module.trim());
        }
    }

    /// Threshold set for exactly this module name.
    #[must_use]
    pub fn module_level(&self, module: &str) -> Option<u32> {
        self.modules.read().ok().and_then(|modules| {
            modules
                .iter()
                .find(|(name, _)| name == module)
                .map(|(_, priority)| *priority)
        })
    }

    /// Threshold that applies to records from `module`.
    #[must_use]
    pub fn effective_level(&self, module: &str) -> u32 {
        let Ok(modules) = self.modules.read() else {
            return self.level();
        };
        modules
            .iter()
            .filter(|(name, _)| module_matches(name, module))
            .max_by_key(|(name, _)| name.len())
            .map_or_else(|| self.level(), |(_, priority)| *priority)
    }

    /// Whether a record at `level` from `module` would be written.
    #[must_use]
    pub fn is_enabled_for(&self, level: &Severity, module: &str) -> bool {
        level.admitted_by(self.effective_level(module))
    }

    /// Whether TRACE output passes the global threshold.
    #[must_use]
    pub fn trace_enabled(&self) -> bool {
        let trace = self
            .registry
            .priority_of("TRACE")
            .unwrap_or(priority::TRACE);
        trace >= self.level()
    }

    /// Filter, render and write a record.
    ///
    /// For a terminating level this does not return once the record is
    /// written (unless a non-exiting [`ExitHandler`] is configured).
    pub fn log_record(&self, record: &LogRecord) {
        if !self.is_enabled_for(record.level(), record.module()) {
            return;
        }

        let line = self.formatter.format(record);
        self.sink.write_line(&line);

        if record.level().terminates() {
            self.sink.flush();
            self.exit.exit(0);
        }
    }

    /// Emit at a specific level.
    pub fn log_at(
        &self,
        level: &Arc<Severity>,
        module: &str,
        line: u32,
        message: impl fmt::Display,
    ) {
        if !self.is_enabled_for(level, module) {
            return;
        }
        let record = LogRecord::new(Arc::clone(level), message.to_string())
            .with_module(module)
            .with_line(line);
        self.log_record(&record);
    }

    /// Emit by level alias (or name) with an explicit source location.
    ///
    /// An alias that resolves to no level prints a warning and writes
    /// nothing.
    pub fn emit_at(&self, alias: &str, module: &str, line: u32, args: fmt::Arguments<'_>) {
        match self.registry.resolve(alias) {
            Some(level) => self.log_at(level, module, line, args),
            None => self.warn(format_args!("no level bound to '{alias}'")),
        }
    }

    /// Write a warning line to the warning sink.
    pub fn warn(&self, message: impl fmt::Display) {
        self.warnings
            .write_line(&warning_line(self.formatter.context(), message));
    }

    /// Emit by level alias from the caller's location.
    #[track_caller]
    pub fn emit(&self, alias: &str, message: impl fmt::Display) {
        let caller = Location::caller();
        self.emit_at(
            alias,
            &module_from_file(caller.file()),
            caller.line(),
            format_args!("{message}"),
        );
    }

    #[track_caller]
    pub fn trace(&self, message: impl fmt::Display) {
        self.emit("trace", message);
    }

    #[track_caller]
    pub fn verbose(&self, message: impl fmt::Display) {
        self.emit("verbose", message);
    }

    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.emit("debug", message);
    }

    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.emit("info", message);
    }

    #[track_caller]
    pub fn warning(&self, message: impl fmt::Display) {
        self.emit("warning", message);
    }

    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.emit("error", message);
    }

    #[track_caller]
    pub fn critical(&self, message: impl fmt::Display) {
        self.emit("critical", message);
    }

    /// Emit at FATAL. With the extended level set this ends the process.
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) {
        self.emit("fatal", message);
    }

    /// Convert a `log::Record` to a [`LogRecord`], if its level is registered.
    ///
    /// The target is the module key, as in [`Log::enabled`]; it defaults to
    /// the module path.
    fn record_from_log(&self, record: &Record<'_>) -> Option<LogRecord> {
        let level = self.registry.get(name_for_log_level(record.level()))?;
        Some(
            LogRecord::new(Arc::clone(level), record.args().to_string())
                .with_module(record.target())
                .with_line(record.line().unwrap_or(0)),
        )
    }
}

fn module_matches(pattern: &str, module: &str) -> bool {
    module == pattern
        || module
            .strip_prefix(pattern)
            .is_some_and(|rest| rest.starts_with("::"))
        || module
            .strip_suffix(pattern)
            .is_some_and(|rest| rest.ends_with("::"))
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.registry
            .get(name_for_log_level(metadata.level()))
            .is_some_and(|level| self.is_enabled_for(level, metadata.target()))
    }

    fn log(&self, record: &Record<'_>) {
        if let Some(record) = self.record_from_log(record) {
            self.log_record(&record);
        }
    }

    fn flush(&self) {
        self.sink.flush();
    }
}

/// Builder for configuring a [`Logger`].
///
/// # Example
///
/// ```ignore
/// use tintlog_console::LoggerBuilder;
/// use tintlog_core::{LevelSpec, priority};
///
/// LoggerBuilder::new()
///     .register_level(LevelSpec::new("NOTICE", 25))
///     .level(priority::INFO)
///     .module_level("worker", priority::WARNING)
///     .init()
///     .expect("Failed to initialize logger");
/// ```
pub struct LoggerBuilder {
    registry: LevelRegistry,
    templates: TemplateTable,
    context: Option<DisplayContext>,
    level: u32,
    modules: Vec<(String, u32)>,
    sink: Box<dyn LineSink>,
    exit: Box<dyn ExitHandler>,
    warnings: Box<dyn LineSink>,
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("levels", &self.registry.len())
            .field("context", &self.context)
            .field("level", &self.level)
            .field("modules", &self.modules)
            .finish_non_exhaustive()
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Extended level set, WARNING threshold, standard templates, stderr.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: LevelRegistry::extended(),
            templates: TemplateTable::standard(),
            context: None,
            level: priority::WARNING,
            modules: Vec::new(),
            sink: Box::new(StderrSink),
            exit: Box::new(ProcessExit),
            warnings: Box::new(StderrSink),
        }
    }

    /// Replace the level registry.
    #[must_use]
    pub fn registry(mut self, registry: LevelRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Register an additional level. Collisions are warned and skipped.
    #[must_use]
    pub fn register_level(mut self, spec: LevelSpec) -> Self {
        self.try_register_level(spec);
        self
    }

    /// Register a level and report the outcome.
    ///
    /// A skipped registration also writes a warning to the warning sink.
    pub fn try_register_level(&mut self, spec: LevelSpec) -> Registration {
        let outcome = self.registry.register(spec);
        if let Registration::Skipped(collision) = &outcome {
            let context = self.context.unwrap_or_else(DisplayContext::detect);
            self.warnings.write_line(&warning_line(context, collision));
        }
        outcome
    }

    /// Levels registered so far.
    #[must_use]
    pub fn levels(&self) -> &LevelRegistry {
        &self.registry
    }

    /// Set the global threshold.
    #[must_use]
    pub fn level(mut self, priority: u32) -> Self {
        self.level = priority;
        self
    }

    /// Set a module threshold.
    #[must_use]
    pub fn module_level(mut self, module: impl Into<String>, priority: u32) -> Self {
        self.modules.push((module.into(), priority));
        self
    }

    #[must_use]
    pub fn templates(mut self, templates: TemplateTable) -> Self {
        self.templates = templates;
        self
    }

    /// Override color detection.
    #[must_use]
    pub fn context(mut self, context: DisplayContext) -> Self {
        self.context = Some(context);
        self
    }

    #[must_use]
    pub fn color(self, enabled: bool) -> Self {
        self.context(DisplayContext::from_flag(enabled))
    }

    /// Set the output destination.
    #[must_use]
    pub fn sink(mut self, sink: impl LineSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Set what a terminating level does after writing.
    #[must_use]
    pub fn exit_handler(mut self, exit: impl ExitHandler + 'static) -> Self {
        self.exit = Box::new(exit);
        self
    }

    /// Set where warnings go.
    #[must_use]
    pub fn warning_sink(mut self, sink: impl LineSink + 'static) -> Self {
        self.warnings = Box::new(sink);
        self
    }

    /// Build the logger without installing it.
    #[must_use]
    pub fn build(self) -> Logger {
        let context = self.context.unwrap_or_else(DisplayContext::detect);
        let logger = Logger {
            registry: self.registry,
            formatter: Formatter::new(self.templates, context),
            sink: self.sink,
            exit: self.exit,
            warnings: self.warnings,
            threshold: AtomicU32::new(self.level),
            modules: RwLock::new(Vec::new()),
        };
        for (module, priority) in &self.modules {
            logger.set_module_level(module, *priority);
        }
        logger
    }

    /// Build and install as the process-wide logger.
    pub fn init(self) -> Result<&'static Logger, InstallError> {
        self.build().install()
    }

    /// Build and install, ignoring errors if already set.
    pub fn try_init(self) {
        let _ = self.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CaptureSink, RecordingExit};

    fn capture_logger(level: u32) -> (Logger, CaptureSink, RecordingExit) {
        let sink = CaptureSink::new();
        let exit = RecordingExit::new();
        let logger = Logger::builder()
            .level(level)
            .color(false)
            .sink(sink.clone())
            .exit_handler(exit.clone())
            .build();
        (logger, sink, exit)
    }

    #[test]
    fn test_builder_defaults() {
        let builder = LoggerBuilder::default();
        assert_eq!(builder.level, priority::WARNING);
        assert!(builder.context.is_none());
        assert!(builder.modules.is_empty());
        assert!(builder.levels().get("TRACE").is_some());
    }

    #[test]
    fn test_builder_level_and_modules() {
        let logger = Logger::builder()
            .level(priority::INFO)
            .module_level("worker", priority::ERROR)
            .color(false)
            .build();
        assert_eq!(logger.level(), priority::INFO);
        assert_eq!(logger.module_level("worker"), Some(priority::ERROR));
        assert!(logger.formatter().context().is_plain());
    }

    #[test]
    fn test_threshold_suppresses_below() {
        let (logger, sink, _) = capture_logger(priority::WARNING);
        logger.info("hidden");
        logger.warning("shown");
        logger.error("also shown");

        assert_eq!(sink.len(), 2);
        sink.assert_not_contains("hidden");
        sink.assert_contains("[WARNING ] shown");
        sink.assert_contains("[ERROR   ] also shown");
    }

    #[test]
    fn test_set_level_changes_admission() {
        let (logger, sink, _) = capture_logger(priority::WARNING);
        logger.trace("before");
        assert!(sink.is_empty());

        logger.set_level(9);
        logger.trace("hello");
        assert_eq!(sink.len(), 1);
        sink.assert_contains("TRACE");
        sink.assert_contains("hello");
    }

    #[test]
    fn test_terminating_level_exits_after_writing() {
        let (logger, sink, exit) = capture_logger(priority::FATAL);
        logger.fatal("bye");
        assert_eq!(sink.len(), 1);
        sink.assert_contains("[FATAL   ] bye");
        assert_eq!(exit.codes(), vec![0]);
        assert!(sink.flushes() >= 1);
    }

    #[test]
    fn test_suppressed_terminating_level_does_not_exit() {
        let (logger, sink, exit) = capture_logger(priority::FATAL + 1);
        logger.fatal("bye");
        assert!(sink.is_empty());
        assert!(!exit.exited());
    }

    #[test]
    fn test_standard_fatal_does_not_exit() {
        let sink = CaptureSink::new();
        let exit = RecordingExit::new();
        let logger = Logger::builder()
            .registry(LevelRegistry::standard())
            .color(false)
            .sink(sink.clone())
            .exit_handler(exit.clone())
            .build();
        logger.fatal("still here");
        sink.assert_contains("still here");
        assert!(!exit.exited());
    }

    #[test]
    fn test_emit_custom_level_by_alias() {
        let sink = CaptureSink::new();
        let logger = Logger::builder()
            .register_level(LevelSpec::new("NOTICE", 25).alias_as("note"))
            .level(priority::INFO)
            .color(false)
            .sink(sink.clone())
            .build();
        logger.emit("note", format_args!("{} clients", 3));
        sink.assert_contains("[NOTICE  ] 3 clients");
    }

    #[test]
    fn test_emit_unknown_alias_warns_and_writes_nothing() {
        let sink = CaptureSink::new();
        let warnings = CaptureSink::new();
        let logger = Logger::builder()
            .level(priority::NOTSET)
            .color(false)
            .sink(sink.clone())
            .warning_sink(warnings.clone())
            .build();

        logger.emit("nope", "x");
        assert!(sink.is_empty());
        assert_eq!(warnings.len(), 1);
        warnings.assert_contains("Warning: no level bound to 'nope'");
    }

    #[test]
    fn test_duplicate_registration_warns() {
        let warnings = CaptureSink::new();
        let mut builder = Logger::builder()
            .color(false)
            .warning_sink(warnings.clone());

        let outcome = builder.try_register_level(LevelSpec::new("TRACE", 1));
        assert!(!outcome.is_applied());
        let builder = builder.register_level(LevelSpec::new("NOTICE", 25).alias_as("info"));

        assert_eq!(warnings.len(), 2);
        warnings.assert_contains("Warning: 'TRACE' already defined as a level");
        warnings.assert_contains("Warning: 'info' already bound to a level");
        assert!(warnings.raw_output().iter().all(|line| !line.contains('\x1b')));
        assert_eq!(builder.levels().priority_of("TRACE"), Some(priority::TRACE));
    }

    #[test]
    fn test_forced_registration_does_not_warn() {
        let warnings = CaptureSink::new();
        let builder = Logger::builder()
            .warning_sink(warnings.clone())
            .register_level(LevelSpec::new("TRACE", 5).force(true));
        assert!(warnings.is_empty());
        assert_eq!(builder.levels().priority_of("TRACE"), Some(5));
    }

    #[test]
    fn test_warning_color_follows_context() {
        let warnings = CaptureSink::new();
        let logger = Logger::builder()
            .color(true)
            .sink(CaptureSink::new())
            .warning_sink(warnings.clone())
            .build();
        logger.warn("heads up");
        assert_eq!(
            warnings.raw_output()[0],
            format!("{}Warning: heads up{}", palette::YELLOW, palette::RESET)
        );

        assert_eq!(
            warning_line(DisplayContext::Plain, "heads up"),
            "Warning: heads up"
        );
    }

    #[test]
    fn test_caller_location_is_recorded() {
        let (logger, sink, _) = capture_logger(priority::NOTSET);
        logger.error("located");
        // Module comes from this file's stem.
        sink.assert_contains(":logger ");
        assert!(sink.matches(r"\d{4}:logger +\S+ +\[ERROR   \] located"));
    }

    #[test]
    fn test_module_level_overrides_global() {
        let (logger, sink, _) = capture_logger(priority::WARNING);
        logger.set_module_level("app::worker", priority::INFO);

        let info = logger.registry().get("INFO").unwrap().clone();
        logger.log_at(&info, "app::worker", 1, "from worker");
        logger.log_at(&info, "app::worker::pool", 2, "from pool");
        logger.log_at(&info, "app::other", 3, "from other");

        sink.assert_contains("from worker");
        sink.assert_contains("from pool");
        sink.assert_not_contains("from other");
    }

    #[test]
    fn test_module_level_matches_last_segment() {
        let (logger, _, _) = capture_logger(priority::WARNING);
        logger.set_module_level("worker", priority::DEBUG);
        assert_eq!(logger.effective_level("demo::worker"), priority::DEBUG);
        assert_eq!(logger.effective_level("worker"), priority::DEBUG);
        assert_eq!(logger.effective_level("demo::networker"), priority::WARNING);
    }

    #[test]
    fn test_most_specific_module_wins() {
        let (logger, _, _) = capture_logger(priority::WARNING);
        logger.set_module_level("app", priority::ERROR);
        logger.set_module_level("app::worker", priority::TRACE);
        assert_eq!(logger.effective_level("app::worker::pool"), priority::TRACE);
        assert_eq!(logger.effective_level("app::main"), priority::ERROR);

        logger.clear_module_level("app::worker");
        assert_eq!(logger.effective_level("app::worker::pool"), priority::ERROR);
    }

    #[test]
    fn test_trace_enabled_follows_threshold() {
        let (logger, _, _) = capture_logger(priority::WARNING);
        assert!(!logger.trace_enabled());
        logger.set_level(1);
        assert!(logger.trace_enabled());
    }

    #[test]
    fn test_log_facade_records_are_mapped() {
        let (logger, sink, _) = capture_logger(priority::INFO);
        let record = Record::builder()
            .level(log::Level::Warn)
            .target("app::net")
            .module_path(Some("app::net"))
            .line(Some(12))
            .args(format_args!("retrying"))
            .build();
        logger.log(&record);

        let debug = Record::builder()
            .level(log::Level::Debug)
            .args(format_args!("noise"))
            .build();
        logger.log(&debug);

        assert_eq!(sink.len(), 1);
        sink.assert_contains("0012:net");
        sink.assert_contains("[WARNING ] retrying");
    }

    #[test]
    fn test_log_facade_target_is_module_key() {
        let (logger, sink, _) = capture_logger(priority::ERROR);
        logger.set_module_level("audit", priority::INFO);

        let meta = Metadata::builder()
            .level(log::Level::Warn)
            .target("audit")
            .build();
        assert!(logger.enabled(&meta));

        let record = Record::builder()
            .level(log::Level::Warn)
            .target("audit")
            .module_path(Some("app::net"))
            .line(Some(3))
            .args(format_args!("login failed"))
            .build();
        logger.log(&record);

        assert_eq!(sink.len(), 1);
        sink.assert_contains("0003:audit");
        sink.assert_contains("[WARNING ] login failed");
    }

    #[test]
    fn test_log_facade_enabled() {
        let (logger, _, _) = capture_logger(priority::INFO);
        let meta = |level| Metadata::builder().level(level).target("test").build();
        assert!(logger.enabled(&meta(log::Level::Error)));
        assert!(logger.enabled(&meta(log::Level::Info)));
        assert!(!logger.enabled(&meta(log::Level::Debug)));
    }

    #[test]
    fn test_log_facade_unregistered_level_is_disabled() {
        let logger = Logger::builder()
            .registry(LevelRegistry::standard())
            .level(priority::NOTSET)
            .color(false)
            .sink(CaptureSink::new())
            .build();
        let meta = Metadata::builder().level(log::Level::Trace).target("t").build();
        assert!(!logger.enabled(&meta));
    }

    #[test]
    fn test_colored_output_keeps_escapes() {
        let sink = CaptureSink::new();
        let logger = Logger::builder()
            .color(true)
            .sink(sink.clone())
            .build();
        logger.error("red");
        let raw = sink.raw_output();
        assert!(raw[0].starts_with("\x1b[31;21m"));
        assert!(raw[0].ends_with("\x1b[0m"));
        assert!(!sink.output()[0].contains('\x1b'));
    }

    #[test]
    fn test_logger_is_shareable_across_threads() {
        let (logger, sink, _) = capture_logger(priority::NOTSET);
        let logger = Arc::new(logger);
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let logger = Arc::clone(&logger);
                std::thread::Builder::new()
                    .name(format!("worker-{i}"))
                    .spawn(move || logger.info(format_args!("from {i}")))
                    .unwrap()
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(sink.len(), 4);
        sink.assert_contains("worker-2");
    }
}
