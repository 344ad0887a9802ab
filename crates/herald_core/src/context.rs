//! Base context: the fields attached to every record of a logger

use crate::fields::field_adders;
use serde_json::{Map, Value};

/// Persistent fields plus the automatic `time` and `caller` switches
///
/// Fields keep insertion order, which is also their order in JSON output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    fields: Map<String, Value>,
    timestamp: bool,
    caller: bool,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    field_adders!();

    /// Stamp every record with its creation time
    pub fn timestamp(mut self) -> Self {
        self.timestamp = true;
        self
    }

    /// Record the emitting call site on every record
    pub fn caller(mut self) -> Self {
        self.caller = true;
        self
    }

    pub fn has_timestamp(&self) -> bool {
        self.timestamp
    }

    pub fn has_caller(&self) -> bool {
        self.caller
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    fn put_with(&mut self, key: &str, value: impl FnOnce() -> Value) {
        self.fields.insert(key.to_string(), value());
    }
}
