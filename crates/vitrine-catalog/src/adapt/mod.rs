//! Normalization from raw store records to [`CanonicalProduct`].
//!
//! One adapter per schema variant, dispatched over the closed
//! [`SchemaVariant`] set. Adapters share one algorithm — image precedence,
//! price precedence, classification lower-casing — and differ only in which
//! source fields they read. Field probing follows the same
//! `serde_json::Value` conventions as the rest of the codebase: every
//! extraction is total, every miss has a safe default.

mod footwear;
mod helpers;
mod images;
mod legacy;
mod market;

pub(crate) use helpers::id_string;

use serde_json::Value;
use vitrine_core::{CanonicalProduct, CatalogDefaults, SchemaVariant};

/// Normalizes one raw store record into a [`CanonicalProduct`].
///
/// Never fails. The single top-level guard here handles irrecoverable
/// malformation — a record that is not a JSON object, or one with no
/// extractable id — by returning the minimal stub (id carried over when
/// extractable, all else defaulted). Everything below the guard is total:
/// individual field extraction falls back per-field instead of failing the
/// record.
#[must_use]
pub fn normalize(
    variant: SchemaVariant,
    raw: &Value,
    defaults: &CatalogDefaults,
) -> CanonicalProduct {
    let Some(record) = raw.as_object() else {
        tracing::debug!(store = %variant, "raw record is not an object; degrading to stub");
        return CanonicalProduct::stub(variant, None, defaults);
    };

    let Some(id) = extract_id(variant, record) else {
        tracing::debug!(store = %variant, "raw record has no usable id; degrading to stub");
        return CanonicalProduct::stub(variant, None, defaults);
    };

    match variant {
        SchemaVariant::Legacy => legacy::normalize_record(id, record, defaults),
        SchemaVariant::Market => market::normalize_record(id, record, defaults),
        SchemaVariant::Footwear => footwear::normalize_record(id, record, defaults),
    }
}

/// Pulls the record id out of the variant's id field chain.
fn extract_id(variant: SchemaVariant, record: &serde_json::Map<String, Value>) -> Option<String> {
    let candidates: &[&str] = match variant {
        SchemaVariant::Legacy => &["_id", "id"],
        SchemaVariant::Market => &["id", "_id"],
        SchemaVariant::Footwear => &["pid", "id"],
    };
    candidates
        .iter()
        .find_map(|field| record.get(*field).and_then(id_string))
}
