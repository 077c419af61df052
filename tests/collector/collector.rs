//! Integration tests for Collector behavior

use std::sync::Arc;

use breadcrumbs_buffer::{DequeBuffer, RingBuffer};
use breadcrumbs_collector::{BufferStrategy, Collector, CollectorConfig};
use breadcrumbs_foundation::{Breadcrumb, Config, keys};

// =============================================================================
// Helper Functions
// =============================================================================

fn messages(crumbs: &[Breadcrumb]) -> Vec<&str> {
    crumbs.iter().map(Breadcrumb::message).collect()
}

fn crumb(message: &str, category: &str) -> Breadcrumb {
    Breadcrumb::builder(message).category(category).build()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn capacity_two_evicts_login() {
    let collector = Collector::with_buffer(Config::default(), RingBuffer::new(2).unwrap());
    collector
        .add(crumb("login", "auth"))
        .add(crumb("click", "ui"))
        .add(crumb("submit", "ui"));

    assert_eq!(messages(&collector.to_vec()), vec!["click", "submit"]);
}

#[test]
fn trail_skips_inactive_middle() {
    let collector = Collector::new(Config::default());
    collector.add(crumb("A", "x")).add(crumb("B", "x")).add(crumb("C", "x"));
    collector.ignore_where(|c| c.message() == "B");

    assert_eq!(messages(&collector.trail()), vec!["A", "C"]);
}

#[test]
fn disabled_throughout_stays_empty() {
    let collector = Collector::new(Config::default().with_enabled(false));
    for i in 0..100 {
        collector.add(crumb(&i.to_string(), "noise"));
        assert!(collector.to_vec().is_empty());
    }
}

#[test]
fn missing_flag_records_nothing() {
    let collector = Collector::new(Config::empty());
    collector.add(crumb("a", "x"));
    assert!(collector.is_empty());
    assert!(!collector.to_summary().enabled);
}

// =============================================================================
// Live Toggling
// =============================================================================

#[test]
fn toggle_without_rebuilding() {
    let config = Arc::new(Config::default());
    let collector = Collector::new(Arc::clone(&config));

    collector.add(crumb("one", "x"));
    config.set(keys::BREADCRUMBS_ENABLED, false);
    collector.add(crumb("two", "x"));
    config.set(keys::BREADCRUMBS_ENABLED, true);
    collector.add(crumb("three", "x"));

    assert_eq!(messages(&collector.to_vec()), vec!["one", "three"]);
}

#[test]
fn clearing_while_disabled_purges_stale_data() {
    let config = Arc::new(Config::default());
    let collector = Collector::new(Arc::clone(&config));
    collector.add(crumb("stale", "x"));

    config.set_enabled(false);
    collector.clear();
    config.set_enabled(true);

    assert!(collector.trail().is_empty());
}

// =============================================================================
// Enumeration
// =============================================================================

#[test]
fn for_loop_over_collector() {
    let collector = Collector::new(Config::default());
    collector.add(crumb("a", "x")).add(crumb("b", "y"));

    let mut seen = Vec::new();
    for breadcrumb in &collector {
        seen.push(breadcrumb.category().to_string());
    }
    assert_eq!(seen, vec!["x", "y"]);
}

#[test]
fn each_sees_ignored_breadcrumbs() {
    let collector = Collector::new(Config::default());
    collector.add(crumb("a", "x"));
    collector.ignore_where(|_| true);

    assert_eq!(collector.each().count(), 1);
    assert!(collector.trail().is_empty());
}

// =============================================================================
// Strategies
// =============================================================================

#[test]
fn deque_strategy_from_options() {
    let options = CollectorConfig::new()
        .with_capacity(2)
        .with_strategy(BufferStrategy::Deque);
    let collector = Collector::from_config(Config::default(), &options).unwrap();

    collector.add(crumb("a", "x")).add(crumb("b", "x")).add(crumb("c", "x"));
    assert_eq!(messages(&collector.to_vec()), vec!["b", "c"]);
}

#[test]
fn zero_capacity_options_rejected() {
    let options = CollectorConfig::new().with_capacity(0);
    assert!(Collector::from_config(Config::default(), &options).is_err());
}

#[test]
fn oversized_ring_options_rejected_without_panicking() {
    let options = CollectorConfig::new().with_capacity(usize::MAX / 2);
    assert!(Collector::from_config(Config::default(), &options).is_err());
}

#[test]
fn explicit_deque_buffer() {
    let collector = Collector::with_buffer(Config::default(), DequeBuffer::new(5).unwrap());
    assert_eq!(collector.capacity(), 5);
}

// =============================================================================
// De-duplication
// =============================================================================

#[test]
fn collapse_repeated_events() {
    let collector = Collector::new(Config::default());
    let events = ["render", "render", "render", "click", "render"];

    for event in events {
        collector.drop_previous_if(|prev| prev.message() == event);
        collector.add(crumb(event, "ui"));
    }

    assert_eq!(messages(&collector.to_vec()), vec!["render", "click", "render"]);
}
