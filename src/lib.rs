// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Runlog: normalization core for a document-database-backed running log
//!
//! This crate turns the raw query results of a hosted document database
//! into typed activity entries with derived metrics (elapsed time, pace
//! in minutes per kilometer), and aggregates them for dashboard display.
//! Fetching the records, rendering the dashboard, and the weather lookup
//! live outside this crate.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::SchemaConfig;
pub use error::{Error, Result};
