//! Shared field-coercion primitives for the schema adapters.
//!
//! All functions are total: a miss or a malformed value yields the caller's
//! default, never an error. Probing conventions match the store gateways —
//! everything goes through `serde_json::Value` accessors.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use vitrine_core::CatalogDefaults;

/// Epoch values at or above this are interpreted as milliseconds.
const EPOCH_MILLIS_CUTOFF: i64 = 100_000_000_000;

/// Coerces a JSON value to a finite number: native numbers pass through,
/// numeric strings are parsed, everything else misses.
pub(crate) fn number_or_string(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse::<f64>().ok()))
        .filter(|n| n.is_finite())
}

/// Coerces a JSON value to an identifier string. Numbers are stringified to
/// avoid losing numeric ids; blank strings miss.
pub(crate) fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Non-blank trimmed string field, or miss.
pub(crate) fn text(record: &Map<String, Value>, field: &str) -> Option<String> {
    record
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
}

/// Lower-cased, trimmed classification string; empty when absent.
pub(crate) fn classification(record: &Map<String, Value>, field: &str) -> String {
    text(record, field).map(|s| s.to_lowercase()).unwrap_or_default()
}

/// Display title from the first non-blank candidate, else the placeholder.
pub(crate) fn title(
    record: &Map<String, Value>,
    candidates: &[&str],
    defaults: &CatalogDefaults,
) -> String {
    candidates
        .iter()
        .find_map(|field| text(record, field))
        .unwrap_or_else(|| defaults.placeholder_title.clone())
}

/// The first present, coercible-to-number, non-negative value among the
/// candidate fields; 0 when none qualifies.
pub(crate) fn first_price(record: &Map<String, Value>, candidates: &[&str]) -> f64 {
    optional_price(record, candidates).unwrap_or(0.0)
}

/// Like [`first_price`] but distinguishing "no candidate qualified".
pub(crate) fn optional_price(record: &Map<String, Value>, candidates: &[&str]) -> Option<f64> {
    candidates
        .iter()
        .filter_map(|field| record.get(*field).and_then(number_or_string))
        .find(|n| *n >= 0.0)
}

/// Discount percentage: coerced, clamped to [0, 100], fraction truncated.
/// Non-numeric input yields 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn percent(record: &Map<String, Value>, field: &str) -> u8 {
    record
        .get(field)
        .and_then(number_or_string)
        .map_or(0, |n| n.clamp(0.0, 100.0) as u8)
}

/// Final price precedence: an explicit final/sale price wins; otherwise the
/// discount computation `max(0, mrp - mrp * discount / 100)` when a discount
/// applies; otherwise `mrp`.
pub(crate) fn final_price(
    record: &Map<String, Value>,
    explicit_candidates: &[&str],
    mrp: f64,
    discount_percent: u8,
) -> f64 {
    if let Some(explicit) = optional_price(record, explicit_candidates) {
        return explicit;
    }
    if discount_percent > 0 {
        return (mrp - mrp * f64::from(discount_percent) / 100.0).max(0.0);
    }
    mrp
}

/// Size labels from either an array of strings or a comma-separated string.
/// Trimmed, blanks dropped, deduplicated in first-seen order.
pub(crate) fn sizes(record: &Map<String, Value>, field: &str) -> Vec<String> {
    let raw: Vec<String> = match record.get(field) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned)
            .collect(),
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned)
            .collect(),
        _ => Vec::new(),
    };

    let mut seen = Vec::with_capacity(raw.len());
    for label in raw {
        if !seen.contains(&label) {
            seen.push(label);
        }
    }
    seen
}

/// Creation timestamp from an RFC 3339 string or an epoch number
/// (seconds or milliseconds, disambiguated by magnitude). Records without a
/// usable timestamp get epoch-zero so they sort last under the default
/// descending recency order.
pub(crate) fn timestamp(record: &Map<String, Value>, field: &str) -> DateTime<Utc> {
    record
        .get(field)
        .and_then(coerce_timestamp)
        .unwrap_or(DateTime::UNIX_EPOCH)
}

fn coerce_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    if let Some(s) = value.as_str() {
        return DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc));
    }
    let epoch = value.as_i64()?;
    if epoch <= 0 {
        return None;
    }
    if epoch >= EPOCH_MILLIS_CUTOFF {
        DateTime::from_timestamp_millis(epoch)
    } else {
        DateTime::from_timestamp(epoch, 0)
    }
}
