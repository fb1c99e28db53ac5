//! Image extraction shared by all schema adapters.
//!
//! One precedence, per-variant field names: an ordered array of URLs wins,
//! then a keyed slot map sorted by the numeric suffix embedded in its keys
//! (slot "img2" before "img10"), then a single thumbnail field wrapped in a
//! one-element list, then nothing. The output is always a list of non-blank
//! absolute URLs, whatever the origin encoding was.

use regex::Regex;
use serde_json::{Map, Value};

/// Which fields one schema variant stores its images under, per encoding.
pub(crate) struct ImageFields {
    /// Fields that may hold an ordered array of URL strings.
    pub array: &'static [&'static str],
    /// Fields that may hold a slot map keyed `img1`, `img2`, ….
    pub map: &'static [&'static str],
    /// Single-URL fallback fields.
    pub single: &'static [&'static str],
}

pub(crate) fn extract_images(record: &Map<String, Value>, fields: &ImageFields) -> Vec<String> {
    for field in fields.array {
        if let Some(items) = record.get(*field).and_then(Value::as_array) {
            let urls = collect_urls(items.iter());
            if !urls.is_empty() {
                return urls;
            }
        }
    }

    for field in fields.map {
        if let Some(slots) = record.get(*field).and_then(Value::as_object) {
            let urls = collect_slot_map(slots);
            if !urls.is_empty() {
                return urls;
            }
        }
    }

    fields
        .single
        .iter()
        .find_map(|field| {
            record
                .get(*field)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| vec![s.to_string()])
        })
        .unwrap_or_default()
}

fn collect_urls<'a>(values: impl Iterator<Item = &'a Value>) -> Vec<String> {
    values
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Orders slot keys by their embedded numeric suffix ascending, so "img2"
/// sorts before "img10". Keys with no suffix sort after numbered ones,
/// lexically, to keep the output deterministic.
fn collect_slot_map(slots: &Map<String, Value>) -> Vec<String> {
    let suffix = Regex::new(r"(\d+)\s*$").expect("valid regex");

    let mut keyed: Vec<(u64, &String, &str)> = slots
        .iter()
        .filter_map(|(key, value)| {
            let url = value.as_str()?.trim();
            if url.is_empty() {
                return None;
            }
            let slot = suffix
                .captures(key)
                .and_then(|cap| cap.get(1))
                .and_then(|m| m.as_str().parse::<u64>().ok())
                .unwrap_or(u64::MAX);
            Some((slot, key, url))
        })
        .collect();

    keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    keyed.into_iter().map(|(_, _, url)| url.to_string()).collect()
}
