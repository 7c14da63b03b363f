//! Submission-calendar parsing
//!
//! The upstream platform delivers the calendar as a stringified JSON object
//! mapping epoch-second keys to daily submission counts. Depending on how the
//! export was produced, the field may instead already be a parsed object.
//! Both forms are accepted here.
//!
//! Malformed input never fails aggregation: an unparseable calendar yields an
//! empty map, and individual entries with non-numeric keys or negative or
//! fractional counts are skipped.

use serde_json::Value;
use std::collections::BTreeMap;

/// Validated calendar: epoch seconds → non-negative submission count.
pub type SubmissionCalendar = BTreeMap<i64, u64>;

/// Parse a raw submission-calendar value into a validated map.
///
/// Accepts a JSON object, a string containing a JSON object, or anything
/// else (including `null`), which degrades to an empty calendar.
pub fn parse_submission_calendar(raw: &Value) -> SubmissionCalendar {
    match raw {
        Value::Object(_) => collect_entries(raw),
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(parsed) => collect_entries(&parsed),
            Err(error) => {
                tracing::warn!(%error, "submission calendar is not valid JSON, treating as empty");
                SubmissionCalendar::new()
            }
        },
        Value::Null => SubmissionCalendar::new(),
        other => {
            tracing::warn!(kind = %value_kind(other), "unexpected submission calendar shape, treating as empty");
            SubmissionCalendar::new()
        }
    }
}

fn collect_entries(value: &Value) -> SubmissionCalendar {
    let Value::Object(map) = value else {
        return SubmissionCalendar::new();
    };

    let mut calendar = SubmissionCalendar::new();
    for (key, raw_count) in map {
        let Ok(timestamp) = key.parse::<i64>() else {
            tracing::debug!(%key, "skipping calendar entry with non-numeric key");
            continue;
        };
        // as_u64 rejects negative and fractional counts
        let Some(count) = raw_count.as_u64() else {
            tracing::debug!(%key, "skipping calendar entry with invalid count");
            continue;
        };
        *calendar.entry(timestamp).or_insert(0) += count;
    }
    calendar
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
