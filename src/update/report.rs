//! Outdated report parsing
//!
//! Normalizes the JSON emitted by `npm outdated --json` into dependency
//! records. The report is an object keyed by package name, each value
//! carrying at least `current` and `latest`. Object order is preserved.
//! When npm itself fails it prints `{"error": {"code", "summary"}}`
//! instead, which is surfaced as an unavailable report.

use crate::domain::DependencyRecord;
use crate::error::ReportError;
use serde::Deserialize;
use serde_json::{Map, Value};

const OUTDATED_COMMAND: &str = "npm outdated --json";

/// One entry of the outdated report
#[derive(Debug, Deserialize)]
struct OutdatedEntry {
    current: String,
    latest: String,
}

/// Parse a raw report into dependency records
///
/// Empty input and `null` mean everything is up to date. Any malformed
/// entry fails the whole parse.
pub fn parse_report(raw: &str) -> Result<Vec<DependencyRecord>, ReportError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(raw).map_err(|e| ReportError::parse(e.to_string()))?;
    parse_report_value(value)
}

fn parse_report_value(value: Value) -> Result<Vec<DependencyRecord>, ReportError> {
    let entries = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => {
            if let Some(message) = npm_error_message(&map) {
                return Err(ReportError::unavailable(OUTDATED_COMMAND, message));
            }
            map
        }
        other => {
            return Err(ReportError::parse(format!(
                "expected an object keyed by package name, found {}",
                json_type_name(&other)
            )))
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    for (name, entry) in entries {
        if name.is_empty() {
            return Err(ReportError::malformed_entry(name, "empty package name"));
        }

        let entry: OutdatedEntry = serde_json::from_value(entry)
            .map_err(|e| ReportError::malformed_entry(&name, e.to_string()))?;

        if entry.current.is_empty() {
            return Err(ReportError::malformed_entry(&name, "empty `current` version"));
        }
        if entry.latest.is_empty() {
            return Err(ReportError::malformed_entry(&name, "empty `latest` version"));
        }

        records.push(DependencyRecord::new(name, entry.current, entry.latest));
    }

    Ok(records)
}

/// Extract the message from npm's own error object, if that is what we got
fn npm_error_message(map: &Map<String, Value>) -> Option<String> {
    let error = map.get("error")?.as_object()?;
    if error.contains_key("current") || error.contains_key("latest") {
        return None;
    }

    let text = |key: &str| {
        error
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    };
    let message = match (text("code"), text("summary")) {
        (Some(code), Some(summary)) => format!("{code}: {summary}"),
        (None, Some(summary)) => summary.to_string(),
        (Some(code), None) => code.to_string(),
        (None, None) => "npm reported an error".to_string(),
    };
    Some(message)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
