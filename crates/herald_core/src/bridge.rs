//! `tracing` bridge
//!
//! Routes `tracing` events (from this workspace or any dependency) through a
//! herald `Logger`, so they share its level, format, stream and base context.

use crate::caller::CallSite;
use crate::logger::Logger;
use herald_common::{HeraldError, LogLevel, Result};
use serde_json::{Map, Value};
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Metadata, Subscriber};
use tracing_subscriber::layer::{Context as LayerContext, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

pub struct HeraldLayer {
    logger: Logger,
}

impl HeraldLayer {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

impl<S: Subscriber> Layer<S> for HeraldLayer {
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: LayerContext<'_, S>) -> bool {
        self.logger.enabled(LogLevel::from(*metadata.level()))
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: LayerContext<'_, S>) {
        let metadata = event.metadata();
        let level = LogLevel::from(*metadata.level());
        if !self.logger.enabled(level) {
            return;
        }

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let site = metadata
            .file()
            .zip(metadata.line())
            .map(|(file, line)| CallSite::new(file, line));
        self.logger
            .write(level, &visitor.fields, site, visitor.message.as_deref());
    }
}

#[derive(Default)]
struct FieldVisitor {
    fields: Map<String, Value>,
    message: Option<String>,
}

impl FieldVisitor {
    fn insert(&mut self, field: &Field, value: Value) {
        if field.name() == "message" {
            self.message = Some(match value {
                Value::String(s) => s,
                other => other.to_string(),
            });
        } else {
            self.fields.insert(field.name().to_string(), value);
        }
    }
}

impl Visit for FieldVisitor {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, Value::from(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, Value::Bool(value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, Value::from(value));
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.insert(field, Value::String(value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.insert(field, Value::String(format!("{:?}", value)));
    }
}

/// Install a `HeraldLayer` over `logger` as the global `tracing` subscriber
pub fn install(logger: Logger) -> Result<()> {
    tracing_subscriber::registry()
        .with(HeraldLayer::new(logger))
        .try_init()
        .map_err(|e| HeraldError::Subscriber(e.to_string()))
}
