// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Normalized activity model for display and aggregation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One normalized running activity.
///
/// Built from a raw record by the normalizer and never mutated
/// afterwards; the whole collection is rebuilt from scratch on every
/// data refresh. Missing source fields carry the documented defaults
/// rather than being dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Activity date; `None` when the record carries no usable date
    pub date: Option<NaiveDate>,
    /// Distance in kilometers (0 when absent)
    pub distance_km: f64,
    /// Duration exactly as entered, "H:M:S"
    pub duration: String,
    /// Free-text pace label for display; not used in computation
    pub avg_pace_label: String,
    /// Average heart rate in bpm (0 when absent)
    pub heart_rate: f64,
    /// Completion status ("other" when absent)
    pub status: String,
    /// Weather label ("" when absent)
    pub weather: String,
    /// Elapsed time in seconds, derived from `duration`
    pub elapsed_seconds: u32,
    /// Minutes per kilometer; NaN when `distance_km` is 0
    ///
    /// NaN serializes as JSON null, so downstream consumers see an
    /// explicit "no pace" rather than a bogus number.
    pub pace_min_per_km: f64,
}

impl ActivityEntry {
    /// Whether the derived pace is meaningful (finite; requires a
    /// nonzero distance).
    pub fn has_pace(&self) -> bool {
        self.pace_min_per_km.is_finite()
    }
}
