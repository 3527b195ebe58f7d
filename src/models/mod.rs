// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod entry;
pub mod record;
pub mod stats;

pub use entry::ActivityEntry;
pub use record::{records_from_query_value, PropertyValue, RawRecord};
pub use stats::RunStats;
