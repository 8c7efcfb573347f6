//! Tracing subscriber integration.
//!
//! Provides a tracing `Layer` and builder that route events through a
//! [`Logger`], so `tracing` events get the same thresholds and line format as
//! direct calls.

use std::fmt;
use std::sync::Arc;

use tintlog_core::LogRecord;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

use crate::logger::Logger;

/// A tracing layer that renders events through a [`Logger`].
pub struct TintLayer {
    logger: Arc<Logger>,
}

impl TintLayer {
    #[must_use]
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    #[must_use]
    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}

/// Level name a tracing level maps onto.
#[must_use]
pub fn name_for_tracing_level(level: Level) -> &'static str {
    match level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARNING",
        Level::INFO => "INFO",
        Level::DEBUG => "DEBUG",
        _ => "TRACE",
    }
}

#[derive(Default)]
struct FieldCollector {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl FieldCollector {
    fn record_value(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            if self.message.is_none() {
                self.message = Some(value);
            }
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }

    /// Message followed by `key=value` pairs.
    fn into_message(self, fallback: &str) -> String {
        let mut message = self.message.unwrap_or_else(|| fallback.to_string());
        for (key, value) in self.fields {
            message.push(' ');
            message.push_str(&key);
            message.push('=');
            message.push_str(&value);
        }
        message
    }
}

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record_value(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_value(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.record_value(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_value(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.record_value(field, value.to_string());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.record_value(field, value.to_string());
    }
}

impl<S> Layer<S> for TintLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let Some(level) = self
            .logger
            .registry()
            .get(name_for_tracing_level(*metadata.level()))
        else {
            return;
        };

        let module = metadata.module_path().unwrap_or_else(|| metadata.target());
        if !self.logger.is_enabled_for(level, module) {
            return;
        }

        let mut collector = FieldCollector::default();
        event.record(&mut collector);

        if let Some(scope) = ctx.event_scope(event) {
            let spans: Vec<String> = scope
                .from_root()
                .map(|span| span.name().to_string())
                .collect();
            if !spans.is_empty() {
                collector.fields.push(("span".to_string(), spans.join("::")));
            }
        }

        let record = LogRecord::new(Arc::clone(level), collector.into_message(metadata.name()))
            .with_module(module)
            .with_line(metadata.line().unwrap_or(0));
        self.logger.log_record(&record);
    }
}

/// Builder for configuring a tracing subscriber backed by a [`Logger`].
#[derive(Debug)]
pub struct TintSubscriberBuilder {
    logger: Option<Arc<Logger>>,
    level_filter: LevelFilter,
}

impl Default for TintSubscriberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TintSubscriberBuilder {
    /// Create a new builder with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            logger: None,
            level_filter: LevelFilter::TRACE,
        }
    }

    /// Use a specific logger instead of one built from the environment.
    #[must_use]
    pub fn with_logger(mut self, logger: Arc<Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Coarse pre-filter applied before the logger's own thresholds.
    #[must_use]
    pub fn with_level_filter(mut self, filter: LevelFilter) -> Self {
        self.level_filter = filter;
        self
    }

    /// Build the subscriber without installing it.
    #[must_use]
    pub fn build(self) -> impl Subscriber {
        let logger = self
            .logger
            .unwrap_or_else(|| Arc::new(Logger::from_env()));

        tracing_subscriber::registry()
            .with(self.level_filter)
            .with(TintLayer::new(logger))
    }

    /// Build and install as the global subscriber.
    pub fn init(self) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
        let subscriber = self.build();
        tracing::subscriber::set_global_default(subscriber)
    }
}
