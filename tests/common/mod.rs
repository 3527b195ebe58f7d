// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use runlog::models::record::{
    DatePayload, PropertyValue, RawRecord, RichTextFragment, SelectOption,
};

/// Build a record from (property name, property value) pairs.
#[allow(dead_code)]
pub fn record_with(props: Vec<(&str, PropertyValue)>) -> RawRecord {
    let mut record = RawRecord::default();
    for (name, value) in props {
        record.properties.insert(name.to_string(), value);
    }
    record
}

#[allow(dead_code)]
pub fn date_prop(start: &str) -> PropertyValue {
    PropertyValue::Date {
        date: Some(DatePayload {
            start: start.to_string(),
            end: None,
        }),
    }
}

#[allow(dead_code)]
pub fn number_prop(value: f64) -> PropertyValue {
    PropertyValue::Number {
        number: Some(value),
    }
}

#[allow(dead_code)]
pub fn text_prop(text: &str) -> PropertyValue {
    PropertyValue::RichText {
        rich_text: vec![RichTextFragment {
            plain_text: text.to_string(),
        }],
    }
}

#[allow(dead_code)]
pub fn select_prop(name: &str) -> PropertyValue {
    PropertyValue::Select {
        select: Some(SelectOption {
            name: name.to_string(),
        }),
    }
}
