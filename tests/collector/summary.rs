//! Integration tests for summaries and their encodings

use std::sync::Arc;

use breadcrumbs_collector::{Collector, Summary, encode};
use breadcrumbs_foundation::{Breadcrumb, Config, ErrorKind};
use serde_json::{Value, json};

fn populated() -> (Arc<Config>, Collector<Arc<Config>>) {
    let config = Arc::new(Config::default());
    let collector = Collector::new(Arc::clone(&config));
    collector
        .add(
            Breadcrumb::builder("GET /checkout")
                .category("request")
                .with_entry("status", 200)
                .build(),
        )
        .add(Breadcrumb::builder("debug noise").category("log").build())
        .add(
            Breadcrumb::builder("ZeroDivisionError")
                .category("error")
                .with_entry("line", 42)
                .build(),
        );
    collector.ignore_where(|c| c.category() == "log");
    (config, collector)
}

#[test]
fn summary_wire_shape() {
    let (_, collector) = populated();
    let value: Value = serde_json::from_str(&encode::to_json(&collector.to_summary()).unwrap()).unwrap();

    assert_eq!(value["enabled"], json!(true));
    let trail = value["trail"].as_array().unwrap();
    assert_eq!(trail.len(), 2);
    assert_eq!(trail[0]["message"], "GET /checkout");
    assert_eq!(trail[0]["metadata"]["status"], 200);
    assert_eq!(trail[1]["category"], "error");
    assert_eq!(trail[1]["active"], true);

    let mut keys: Vec<_> = trail[0].as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, vec!["active", "category", "message", "metadata", "timestamp"]);
}

#[test]
fn metadata_keeps_insertion_order_on_the_wire() {
    let collector = Collector::new(Config::default());
    collector.add(
        Breadcrumb::builder("checkout")
            .with_entry("zeta", 1)
            .with_entry("alpha", 2)
            .build(),
    );

    let json = encode::to_json(&collector.to_summary()).unwrap();
    assert!(json.contains(r#""metadata":{"zeta":1,"alpha":2}"#), "{json}");

    let decoded = encode::from_json(&json).unwrap();
    let keys: Vec<_> = decoded.trail[0].metadata().keys().cloned().collect();
    assert_eq!(keys, vec!["zeta", "alpha"]);
}

#[test]
fn summary_json_round_trip_matches_trail() {
    let (_, collector) = populated();
    let trail = collector.trail();
    let summary = collector.to_summary();

    let decoded = encode::from_json(&encode::to_json(&summary).unwrap()).unwrap();
    assert!(decoded.enabled);
    assert_eq!(decoded.trail, trail);
}

#[test]
fn summary_msgpack_round_trip() {
    let (_, collector) = populated();
    let summary = collector.to_summary();

    let bytes = encode::to_msgpack(&summary).unwrap();
    assert_eq!(encode::from_msgpack(&bytes).unwrap(), summary);
}

#[test]
fn summary_reflects_disabled_flag() {
    let (config, collector) = populated();
    config.set_enabled(false);

    let summary = collector.to_summary();
    assert!(!summary.enabled);
    assert_eq!(summary.len(), 2);
}

#[test]
fn empty_summary() {
    let collector = Collector::new(Config::default());
    let summary = collector.to_summary();
    assert_eq!(summary, Summary::new(true, Vec::new()));
    assert_eq!(encode::to_json(&summary).unwrap(), r#"{"enabled":true,"trail":[]}"#);
}

#[test]
fn truncated_msgpack_fails_cleanly() {
    let (_, collector) = populated();
    let bytes = encode::to_msgpack(&collector.to_summary()).unwrap();

    let err = encode::from_msgpack(&bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DeserializationError(_)));
}
