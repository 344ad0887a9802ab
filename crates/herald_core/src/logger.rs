//! The configured logger
//!
//! A `Logger` is cheap to clone: clones share the output sink and the base
//! context, so `update_context` on one clone is seen by all of them.
//! [`Logger::child`] gives an independent copy of the context instead.

use crate::caller::{CallSite, CallerFormatter};
use crate::context::Context;
use crate::event::Event;
use crate::format::{Format, Record};
use herald_common::LogLevel;
use serde_json::{Map, Value};
use std::fmt;
use std::io::Write;
use std::net::IpAddr;
use std::sync::{Arc, PoisonError, RwLock};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;

/// Output side of a logger, fixed at build time
pub(crate) struct Sink {
    pub(crate) level: LogLevel,
    pub(crate) format: Format,
    pub(crate) ansi: bool,
    pub(crate) writer: BoxMakeWriter,
    pub(crate) caller: CallerFormatter,
    pub(crate) host_ip: IpAddr,
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("level", &self.level)
            .field("format", &self.format)
            .field("ansi", &self.ansi)
            .field("caller", &self.caller)
            .field("host_ip", &self.host_ip)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct Logger {
    sink: Arc<Sink>,
    context: Arc<RwLock<Context>>,
}

impl Logger {
    pub(crate) fn from_parts(sink: Sink, context: Context) -> Self {
        Self {
            sink: Arc::new(sink),
            context: Arc::new(RwLock::new(context)),
        }
    }

    /// Minimum severity that gets written
    pub fn level(&self) -> LogLevel {
        self.sink.level
    }

    pub fn format(&self) -> Format {
        self.sink.format
    }

    /// Host IP resolved when the logger was built
    pub fn host_ip(&self) -> IpAddr {
        self.sink.host_ip
    }

    pub fn caller_formatter(&self) -> &CallerFormatter {
        &self.sink.caller
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.sink.level
    }

    /// Snapshot of the current base context
    pub fn context(&self) -> Context {
        self.context
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the base context with `update(current)`
    ///
    /// Records started after this returns carry the new context; records
    /// already written are unaffected. If `update` panics the current
    /// context is kept.
    pub fn update_context(&self, update: impl FnOnce(Context) -> Context) {
        let mut guard = self.context.write().unwrap_or_else(PoisonError::into_inner);
        let next = update(guard.clone());
        *guard = next;
    }

    /// A logger sharing this sink with an independent copy of the context
    pub fn child(&self, update: impl FnOnce(Context) -> Context) -> Logger {
        Logger {
            sink: Arc::clone(&self.sink),
            context: Arc::new(RwLock::new(update(self.context()))),
        }
    }

    /// Start a record at `level`
    #[track_caller]
    pub fn with_level(&self, level: LogLevel) -> Event<'_> {
        Event::new(self, level, CallSite::here())
    }

    #[track_caller]
    pub fn trace(&self) -> Event<'_> {
        self.with_level(LogLevel::Trace)
    }

    #[track_caller]
    pub fn debug(&self) -> Event<'_> {
        self.with_level(LogLevel::Debug)
    }

    #[track_caller]
    pub fn info(&self) -> Event<'_> {
        self.with_level(LogLevel::Info)
    }

    #[track_caller]
    pub fn warn(&self) -> Event<'_> {
        self.with_level(LogLevel::Warn)
    }

    #[track_caller]
    pub fn error(&self) -> Event<'_> {
        self.with_level(LogLevel::Error)
    }

    /// Start a fatal record; finalizing it exits the process with status 1
    #[track_caller]
    pub fn fatal(&self) -> Event<'_> {
        self.with_level(LogLevel::Fatal)
    }

    /// Start a panic record; finalizing it panics with the message
    #[track_caller]
    pub fn panic(&self) -> Event<'_> {
        self.with_level(LogLevel::Panic)
    }

    /// Render and write one record. Level filtering is the caller's job.
    pub(crate) fn write(
        &self,
        level: LogLevel,
        fields: &Map<String, Value>,
        site: Option<CallSite>,
        message: Option<&str>,
    ) {
        let rendered = {
            let context = self.context.read().unwrap_or_else(PoisonError::into_inner);
            let record = Record {
                level,
                time: context.has_timestamp().then(chrono::Local::now),
                context: context.fields(),
                fields,
                caller: site
                    .filter(|_| context.has_caller())
                    .map(|site| self.sink.caller.format(&site)),
                message,
            };
            self.sink.format.render(&record, self.sink.ansi)
        };

        let result = rendered
            .map_err(std::io::Error::from)
            .and_then(|line| self.sink.writer.make_writer().write_all(&line));
        if let Err(e) = result {
            eprintln!("herald: could not write record: {}", e);
        }
    }
}
