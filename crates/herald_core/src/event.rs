//! In-progress records
//!
//! An `Event` is produced by a level-scoped entry point and written only when
//! it is finalized with [`Event::msg`] or [`Event::send`]. Dropping it writes
//! nothing. Finalizing consumes the event, so a record can be emitted at most
//! once.

use crate::caller::CallSite;
use crate::fields::field_adders;
use crate::logger::Logger;
use herald_common::{LogLevel, EXIT_FATAL};
use serde_json::{Map, Value};

#[must_use = "a record is only written once `msg` or `send` is called"]
#[derive(Debug)]
pub struct Event<'a> {
    logger: Option<&'a Logger>,
    level: LogLevel,
    enabled: bool,
    fields: Map<String, Value>,
    site: CallSite,
}

impl<'a> Event<'a> {
    pub(crate) fn new(logger: &'a Logger, level: LogLevel, site: CallSite) -> Self {
        Self {
            logger: Some(logger),
            level,
            enabled: logger.enabled(level),
            fields: Map::new(),
            site,
        }
    }

    /// An event that never writes; fatal and panic still terminate on finalization
    #[track_caller]
    pub fn disabled(level: LogLevel) -> Self {
        Self {
            logger: None,
            level,
            enabled: false,
            fields: Map::new(),
            site: CallSite::here(),
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether finalizing this event will write a record
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn call_site(&self) -> CallSite {
        self.site
    }

    field_adders!();

    fn put_with(&mut self, key: &str, value: impl FnOnce() -> Value) {
        if self.enabled {
            self.fields.insert(key.to_string(), value());
        }
    }

    /// Finalize with a message
    pub fn msg(self, message: impl AsRef<str>) {
        self.finish(Some(message.as_ref()));
    }

    /// Finalize without a message
    pub fn send(self) {
        self.finish(None);
    }

    fn finish(self, message: Option<&str>) {
        if self.enabled {
            if let Some(logger) = self.logger {
                logger.write(self.level, &self.fields, Some(self.site), message);
            }
        }

        match self.level {
            LogLevel::Fatal => std::process::exit(EXIT_FATAL),
            LogLevel::Panic => panic!("{}", message.unwrap_or_default()),
            _ => {}
        }
    }
}
