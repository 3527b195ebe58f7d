//! Run statistics aggregates for dashboard charts.
//!
//! Computed over the normalized entries of one reload. Unlike the
//! entries themselves these are derived data, so they are rebuilt
//! whenever the snapshot refreshes and never stored.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::ActivityEntry;

/// Aggregated statistics over one collection of activity entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    // ─── Totals ──────────────────────────────────────────────────
    /// Total runs counted
    #[serde(default)]
    pub total_runs: u32,
    /// Total distance across all runs (km)
    #[serde(default)]
    pub total_distance_km: f64,
    /// Total elapsed time across all runs (seconds)
    #[serde(default)]
    pub total_elapsed_seconds: u64,

    // ─── By Category ─────────────────────────────────────────────
    /// Run count per status (for pie charts)
    #[serde(default)]
    pub runs_by_status: HashMap<String, u32>,
    /// Run count per weather label; unlabeled runs are not counted
    #[serde(default)]
    pub runs_by_weather: HashMap<String, u32>,

    // ─── Time Series ─────────────────────────────────────────────
    /// Run count per month ("YYYY-MM" format)
    #[serde(default)]
    pub runs_by_month: HashMap<String, u32>,
    /// Distance per month ("YYYY-MM" format, km)
    #[serde(default)]
    pub distance_by_month: HashMap<String, f64>,
}

impl Default for RunStats {
    fn default() -> Self {
        Self {
            total_runs: 0,
            total_distance_km: 0.0,
            total_elapsed_seconds: 0,
            runs_by_status: HashMap::new(),
            runs_by_weather: HashMap::new(),
            runs_by_month: HashMap::new(),
            distance_by_month: HashMap::new(),
        }
    }
}

impl RunStats {
    /// Aggregate a whole collection of entries.
    pub fn from_entries(entries: &[ActivityEntry]) -> Self {
        let mut stats = Self::default();
        for entry in entries {
            stats.update_from_entry(entry);
        }
        stats
    }

    /// Fold one entry into the aggregates.
    pub fn update_from_entry(&mut self, entry: &ActivityEntry) {
        self.total_runs += 1;
        self.total_distance_km += entry.distance_km;
        self.total_elapsed_seconds += u64::from(entry.elapsed_seconds);

        *self
            .runs_by_status
            .entry(entry.status.clone())
            .or_insert(0) += 1;

        if !entry.weather.is_empty() {
            *self
                .runs_by_weather
                .entry(entry.weather.clone())
                .or_insert(0) += 1;
        }

        // Dateless entries count in the totals but not the time series
        if let Some(month) = entry.date.map(month_key) {
            *self.runs_by_month.entry(month.clone()).or_insert(0) += 1;
            *self.distance_by_month.entry(month).or_insert(0.0) += entry.distance_km;
        }
    }

    /// Overall pace across all runs in minutes per kilometer.
    ///
    /// Same sentinel policy as the per-entry pace: NaN when no distance
    /// was covered.
    pub fn average_pace_min_per_km(&self) -> f64 {
        if self.total_distance_km == 0.0 {
            return f64::NAN;
        }
        self.total_elapsed_seconds as f64 / (self.total_distance_km * 60.0)
    }
}

/// Format a date as a "YYYY-MM" month bucket key.
fn month_key(date: chrono::NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}
