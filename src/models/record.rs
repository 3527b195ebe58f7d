// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Raw query-result records and their typed property wrappers.
//!
//! Mirrors the generic document-database property schema: each record is
//! a mapping from a human-chosen property name to a `{type, payload}`
//! wrapper. Only the property types the dashboard consumes are modeled;
//! anything else decodes as `Unsupported` and is ignored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::Result;

/// One raw record from a database query, keyed by property name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    /// Document ID assigned by the database
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Property name -> typed property wrapper
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

/// A typed property wrapper as delivered by the database.
///
/// Every payload is independently optional: a property can exist in the
/// schema but carry no value for a given record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Date {
        #[serde(default)]
        date: Option<DatePayload>,
    },
    Number {
        #[serde(default)]
        number: Option<f64>,
    },
    RichText {
        #[serde(default)]
        rich_text: Vec<RichTextFragment>,
    },
    Select {
        #[serde(default)]
        select: Option<SelectOption>,
    },
    /// Property types the dashboard does not consume (title, formula, ...)
    #[serde(other)]
    Unsupported,
}

/// Start/end payload of a date property. Only the start is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatePayload {
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// One fragment of a rich-text property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RichTextFragment {
    pub plain_text: String,
}

/// The chosen option of a select property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

impl RawRecord {
    /// Date of a date-typed property; `None` when the property is
    /// absent, empty, of another type, or unparseable.
    pub fn date(&self, key: &str) -> Option<NaiveDate> {
        match self.properties.get(key)? {
            PropertyValue::Date { date: Some(payload) } => parse_iso_date(&payload.start),
            _ => None,
        }
    }

    /// Value of a number-typed property; 0 when absent or null.
    pub fn number(&self, key: &str) -> f64 {
        match self.properties.get(key) {
            Some(PropertyValue::Number { number: Some(n) }) => *n,
            _ => 0.0,
        }
    }

    /// Plain content of the first rich-text fragment; "" when the
    /// property is absent, empty, or of another type.
    pub fn plain_text(&self, key: &str) -> &str {
        match self.properties.get(key) {
            Some(PropertyValue::RichText { rich_text }) => rich_text
                .first()
                .map(|fragment| fragment.plain_text.as_str())
                .unwrap_or(""),
            _ => "",
        }
    }

    /// Display name of a select property's chosen option.
    pub fn select(&self, key: &str) -> Option<&str> {
        match self.properties.get(key)? {
            PropertyValue::Select {
                select: Some(option),
            } => Some(option.name.as_str()),
            _ => None,
        }
    }
}

/// Decode the `results` array of a query-response payload.
///
/// The surrounding envelope (cursor, `has_more`, ...) belongs to the
/// database client layer and is ignored here.
pub fn records_from_query_value(payload: &serde_json::Value) -> Result<Vec<RawRecord>> {
    let results = payload
        .get("results")
        .ok_or_else(|| anyhow::anyhow!("query payload has no `results` array"))?;

    let records: Vec<RawRecord> = serde_json::from_value(results.clone())?;
    tracing::debug!(count = records.len(), "Decoded query results");
    Ok(records)
}

/// Parse an ISO 8601 date string, accepting a trailing time component.
fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    // "2024-05-04T07:30:00+09:00" -> "2024-05-04"
    let date_part = text.get(..10).unwrap_or(text);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
