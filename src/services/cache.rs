// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Snapshot cache for the dashboard's full-reload data.
//!
//! The dashboard rebuilds its entire entry collection on every refresh,
//! so the cache holds exactly one snapshot for a bounded time and the
//! orchestration layer skips redundant reloads while it is fresh. The
//! caller passes `now` explicitly; the cache never reads the clock, which
//! keeps expiry deterministic under test.

use chrono::{DateTime, Duration, Utc};

/// A single cached snapshot with a fixed time-to-live.
#[derive(Debug, Clone)]
pub struct SnapshotCache<T> {
    ttl: Duration,
    snapshot: Option<T>,
    last_refreshed: Option<DateTime<Utc>>,
}

impl<T> SnapshotCache<T> {
    /// Create an empty cache with the given TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            snapshot: None,
            last_refreshed: None,
        }
    }

    /// The cached snapshot, or `None` when empty or past its TTL.
    pub fn get(&self, now: DateTime<Utc>) -> Option<&T> {
        if self.is_stale(now) {
            return None;
        }
        self.snapshot.as_ref()
    }

    /// Whether a reload is due. A snapshot exactly at its TTL counts
    /// as stale.
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        match self.last_refreshed {
            Some(refreshed) => now - refreshed >= self.ttl,
            None => true,
        }
    }

    /// Replace the snapshot and stamp the refresh time.
    pub fn store(&mut self, snapshot: T, now: DateTime<Utc>) {
        tracing::info!(at = %now, "Snapshot cache refreshed");
        self.snapshot = Some(snapshot);
        self.last_refreshed = Some(now);
    }

    /// Drop the snapshot so the next `get` forces a reload.
    pub fn invalidate(&mut self) {
        self.snapshot = None;
        self.last_refreshed = None;
    }

    /// When the snapshot was last stored.
    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed
    }
}
