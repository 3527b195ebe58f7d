// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end pass over a realistic query payload: decode, normalize,
//! aggregate. Exercises the same path the dashboard's reload takes.

use runlog::config::SchemaConfig;
use runlog::models::{records_from_query_value, RunStats};
use runlog::services::Normalizer;
use serde_json::json;

fn query_payload() -> serde_json::Value {
    json!({
        "object": "list",
        "has_more": false,
        "results": [
            {
                "id": "page-1",
                "properties": {
                    "Date": {"type": "date", "date": {"start": "2024-04-28"}},
                    "Distance (km)": {"type": "number", "number": 5.0},
                    "Duration": {"type": "rich_text", "rich_text": [{"plain_text": "0:30:00"}]},
                    "Avg Pace": {"type": "rich_text", "rich_text": [{"plain_text": "6'00\""}]},
                    "Heart Rate": {"type": "number", "number": 148.0},
                    "Status": {"type": "select", "select": {"name": "done"}},
                    "Weather": {"type": "select", "select": {"name": "sunny"}}
                }
            },
            {
                "id": "page-2",
                "properties": {
                    "Date": {"type": "date", "date": {"start": "2024-05-02T06:40:00+09:00"}},
                    "Distance (km)": {"type": "number", "number": 10.0},
                    "Duration": {"type": "rich_text", "rich_text": [{"plain_text": "1:00:00"}]},
                    "Status": {"type": "select", "select": {"name": "done"}},
                    "Weather": {"type": "select", "select": {"name": "rain"}}
                }
            },
            {
                // Treadmill entry someone saved half-filled
                "id": "page-3",
                "properties": {
                    "Date": {"type": "date", "date": {"start": "2024-05-03"}},
                    "Duration": {"type": "rich_text", "rich_text": [{"plain_text": "0:10:00"}]}
                }
            }
        ]
    })
}

#[test]
fn test_reload_pipeline() {
    let records = records_from_query_value(&query_payload()).expect("payload should decode");
    let entries = Normalizer::new(SchemaConfig::default()).normalize(&records);

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].pace_min_per_km, 6.0);
    assert_eq!(entries[1].pace_min_per_km, 6.0);
    // Half-filled entry: duration parsed, pace undefined
    assert_eq!(entries[2].elapsed_seconds, 600);
    assert!(entries[2].pace_min_per_km.is_nan());
    assert_eq!(entries[2].status, "other");

    let stats = RunStats::from_entries(&entries);

    assert_eq!(stats.total_runs, 3);
    assert_eq!(stats.total_distance_km, 15.0);
    assert_eq!(stats.total_elapsed_seconds, 1800 + 3600 + 600);
    assert_eq!(stats.runs_by_status.get("done"), Some(&2));
    assert_eq!(stats.runs_by_status.get("other"), Some(&1));
    assert_eq!(stats.runs_by_weather.get("sunny"), Some(&1));
    assert_eq!(stats.runs_by_weather.get("rain"), Some(&1));
    assert_eq!(stats.runs_by_month.get("2024-04"), Some(&1));
    assert_eq!(stats.runs_by_month.get("2024-05"), Some(&2));
    assert_eq!(stats.distance_by_month.get("2024-05"), Some(&10.0));

    // 6000 s over 15 km = 6.666... min/km
    assert!((stats.average_pace_min_per_km() - 6.0 / 0.9).abs() < 1e-9);
}

#[test]
fn test_reload_pipeline_is_stable_across_passes() {
    let records = records_from_query_value(&query_payload()).expect("payload should decode");
    let normalizer = Normalizer::new(SchemaConfig::default());

    let first = serde_json::to_value(normalizer.normalize(&records)).unwrap();
    let second = serde_json::to_value(normalizer.normalize(&records)).unwrap();

    assert_eq!(first, second);
}
