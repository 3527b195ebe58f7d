// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.
//!
//! Normalization itself has no error paths: a missing or malformed field
//! resolves to its documented default, and undefined arithmetic yields a
//! NaN sentinel. Errors only arise at the crate boundary, while decoding
//! a query payload or loading configuration.

use crate::config::ConfigError;

/// Errors surfaced at the crate boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Query payload decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for boundary operations
pub type Result<T> = std::result::Result<T, Error>;
