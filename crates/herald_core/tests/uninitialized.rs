//! Behavior of the entry points before the process-wide logger exists

use herald_core::LogLevel;

#[test]
fn test_entry_points_are_disabled_before_init() {
    assert!(herald_core::logger().is_none());

    let event = herald_core::info().str("k", "v");
    assert!(!event.enabled());
    assert_eq!(event.level(), LogLevel::Info);
    event.msg("goes nowhere");

    herald_core::update_context(|c| c.str("ignored", "yes"));
    assert!(herald_core::logger().is_none());
}
