// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod cache;
pub mod normalizer;

pub use cache::SnapshotCache;
pub use normalizer::{compute_pace, parse_duration, Normalizer};
