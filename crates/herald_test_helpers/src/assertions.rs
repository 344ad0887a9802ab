//! Predicates over rendered log lines
//!
//! They work on a single line (`&str`) so they can be fed either captured
//! lines or the stdout/stderr of a `herald` process via `assert_cmd`.

use predicates::prelude::*;
use regex::Regex;
use std::net::IpAddr;

/// Assert that output does NOT contain any of the given strings
pub fn output_not_contains(values: &[&str]) -> impl Predicate<str> {
    let owned_values: Vec<String> = values.iter().map(|&s| s.to_string()).collect();
    predicate::function(move |s: &str| !owned_values.iter().any(|v| s.contains(v.as_str())))
}

/// The line is a JSON object whose `key` is the string `value`
///
/// # Example
/// ```rust
/// use herald_test_helpers::assertions::json_field_eq;
/// use predicates::prelude::*;
///
/// let line = r#"{"level":"info","message":"ready"}"#;
/// assert!(json_field_eq("level", "info").eval(line));
/// ```
pub fn json_field_eq(key: &str, value: &str) -> impl Predicate<str> {
    let key = key.to_string();
    let value = value.to_string();
    predicate::function(move |s: &str| {
        serde_json::from_str::<serde_json::Value>(s.trim())
            .ok()
            .and_then(|v| v.get(&key).and_then(|f| f.as_str()).map(|f| f == value))
            .unwrap_or(false)
    })
}

/// The string parses as an IPv4 or IPv6 literal
pub fn is_ip_literal() -> impl Predicate<str> {
    predicate::function(|s: &str| s.parse::<IpAddr>().is_ok())
}

/// A caller field: `file:line` with a positive line number and no `root` prefix
///
/// # Example
/// ```rust
/// use herald_test_helpers::assertions::caller_relative_to;
/// use predicates::prelude::*;
///
/// assert!(caller_relative_to("/work").eval("src/main.rs:12"));
/// assert!(!caller_relative_to("/work").eval("/work/src/main.rs:12"));
/// assert!(!caller_relative_to("/work").eval("src/main.rs:0"));
/// ```
pub fn caller_relative_to(root: &str) -> impl Predicate<str> {
    let root = root.to_string();
    let pattern = Regex::new(r"^.+:([1-9][0-9]*)$").expect("valid caller regex");
    predicate::function(move |s: &str| pattern.is_match(s) && !s.contains(root.as_str()))
}
