//! Level-scoped entry points on the process-wide logger

use herald_core::{Environment, LogLevel, LoggerBuilder};
use herald_test_helpers::prelude::*;
use predicates::prelude::*;
use std::sync::OnceLock;

static CAPTURE: OnceLock<CaptureWriter> = OnceLock::new();

/// Tests in this binary run in parallel and share one process-wide logger
fn setup() -> &'static CaptureWriter {
    let capture = CAPTURE.get_or_init(CaptureWriter::new);
    herald_core::init_from(
        LoggerBuilder::new(LogLevel::Info, Environment::Prod)
            .probe_addr("127.0.0.1:9")
            .writer(capture.clone()),
    );
    capture
}

#[test]
fn test_info_scenario() {
    let capture = setup();

    herald_core::info().msg("ready");

    let records = capture.records_with_message("ready");
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record["level"], "info");
    assert!(is_ip_literal().eval(record["host_ip"].as_str().unwrap()));
    assert!(record["time"].is_string());
}

#[test]
fn test_caller_points_at_call_site() {
    let capture = setup();
    let cwd = std::env::current_dir().unwrap();

    herald_core::warn().msg("where am i");

    let record = &capture.records_with_message("where am i")[0];
    let caller = record["caller"].as_str().unwrap();
    assert!(caller.contains("global_emit.rs:"), "caller was {}", caller);
    assert!(caller_relative_to(&cwd.display().to_string()).eval(caller));
}

#[test]
fn test_below_threshold_and_unfinalized_produce_nothing() {
    let capture = setup();

    herald_core::debug().msg("debug-suppressed");
    herald_core::trace().msg("trace-suppressed");
    let _ = herald_core::error().str("marker", "never-sent");

    let contents = capture.contents();
    assert!(output_not_contains(&["debug-suppressed", "trace-suppressed", "never-sent"]).eval(&contents));
}

#[test]
fn test_update_context_reaches_later_records() {
    let capture = setup();

    herald_core::error().msg("ctx-before");
    herald_core::update_context(|c| c.str("deployment", "blue"));
    herald_core::error().msg("ctx-after");

    let before = &capture.records_with_message("ctx-before")[0];
    let after = &capture.records_with_message("ctx-after")[0];
    assert!(before.get("deployment").is_none());
    assert_eq!(after["deployment"], "blue");
}

#[test]
fn test_with_level_and_fields() {
    let capture = setup();

    herald_core::with_level(LogLevel::Warn)
        .int("retries", 3)
        .bool("final", false)
        .msg("retrying");

    let record = &capture.records_with_message("retrying")[0];
    assert_eq!(record["level"], "warn");
    assert_eq!(record["retries"], 3);
    assert_eq!(record["final"], false);
}
