// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity normalization service.
//!
//! Handles the core workflow:
//! 1. Extract each record's typed fields by configured property name
//! 2. Derive elapsed seconds from the "H:M:S" duration text
//! 3. Derive pace (min/km) from elapsed time and distance
//!
//! Upstream data is typed in by hand, so every extraction fails soft to
//! a documented default; nothing in this module returns an error.

use crate::config::SchemaConfig;
use crate::models::{ActivityEntry, RawRecord};

/// Status assigned when a record has no status property.
const DEFAULT_STATUS: &str = "other";

/// Duration text used when a record has no duration property.
const DEFAULT_DURATION: &str = "0:00:00";

/// Normalizes raw database records into activity entries.
pub struct Normalizer {
    schema: SchemaConfig,
}

impl Normalizer {
    pub fn new(schema: SchemaConfig) -> Self {
        Self { schema }
    }

    /// Normalize a batch of records.
    ///
    /// One entry per record, input order preserved, nothing filtered.
    /// Pure: the same input always yields the same output.
    pub fn normalize(&self, records: &[RawRecord]) -> Vec<ActivityEntry> {
        records
            .iter()
            .map(|record| self.normalize_record(record))
            .collect()
    }

    /// Normalize a single record.
    pub fn normalize_record(&self, record: &RawRecord) -> ActivityEntry {
        let schema = &self.schema;

        let date = record.date(&schema.date);
        let distance_km = record.number(&schema.distance);
        let duration = match record.plain_text(&schema.duration) {
            "" => DEFAULT_DURATION.to_string(),
            text => text.to_string(),
        };
        let avg_pace_label = record.plain_text(&schema.avg_pace).to_string();
        let heart_rate = record.number(&schema.heart_rate);
        let status = record
            .select(&schema.status)
            .unwrap_or(DEFAULT_STATUS)
            .to_string();
        let weather = record
            .select(&schema.weather)
            .unwrap_or_default()
            .to_string();

        let elapsed_seconds = parse_duration(&duration);
        let pace_min_per_km = compute_pace(elapsed_seconds, distance_km);

        ActivityEntry {
            date,
            distance_km,
            duration,
            avg_pace_label,
            heart_rate,
            status,
            weather,
            elapsed_seconds,
            pace_min_per_km,
        }
    }
}

/// Convert an "H:M:S" duration to whole seconds.
///
/// Fails soft: empty text, a wrong component count, or a non-numeric
/// component all yield 0. A mistyped duration must not take the
/// dashboard down.
pub fn parse_duration(text: &str) -> u32 {
    let text = text.trim();
    if text.is_empty() {
        return 0;
    }

    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() != 3 {
        tracing::debug!(text, "Duration is not H:M:S shaped, using 0");
        return 0;
    }

    match (
        parts[0].trim().parse::<u32>(),
        parts[1].trim().parse::<u32>(),
        parts[2].trim().parse::<u32>(),
    ) {
        (Ok(hours), Ok(minutes), Ok(seconds)) => hours * 3600 + minutes * 60 + seconds,
        _ => {
            tracing::debug!(text, "Non-numeric duration component, using 0");
            0
        }
    }
}

/// Pace in minutes per kilometer.
///
/// Zero distance has no defined pace; the result is `f64::NAN` rather
/// than a division fault. Callers check `is_finite()` before using the
/// value in further arithmetic or display.
pub fn compute_pace(elapsed_seconds: u32, distance_km: f64) -> f64 {
    if distance_km == 0.0 {
        return f64::NAN;
    }
    f64::from(elapsed_seconds) / (distance_km * 60.0)
}
