use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::defaults::CatalogDefaults;

/// One backing-store schema family. The set is closed and known at compile
/// time; adapters, translators, and gateways all dispatch over this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVariant {
    /// The original catalog service: image-slot maps, `mrp` + `discount`.
    Legacy,
    /// The current general schema: ordered galleries, explicit sale prices.
    Market,
    /// Category-scoped store that only ever holds footwear.
    Footwear,
}

impl SchemaVariant {
    /// All variants in resolver priority order: newest schemas first,
    /// legacy last. This order also fixes the pre-sort concatenation order
    /// in the orchestrator, so it must stay stable.
    pub const ALL: [SchemaVariant; 3] = [
        SchemaVariant::Market,
        SchemaVariant::Footwear,
        SchemaVariant::Legacy,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SchemaVariant::Legacy => "legacy",
            SchemaVariant::Market => "market",
            SchemaVariant::Footwear => "footwear",
        }
    }
}

impl std::fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The unified, schema-independent product shape every adapter produces.
///
/// Constructed fresh per request from one raw store record and discarded
/// after the response is serialized. Never persisted by this layer, never
/// mutated after construction.
///
/// Every field has a safe default so the listing path can always serialize
/// whatever an adapter hands back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalProduct {
    /// Opaque identifier, unique within its origin store and stable across
    /// requests.
    pub id: String,
    /// Display name; the fixed placeholder when the source record lacks one.
    pub title: String,
    /// Ordered absolute image URLs. Always an array, never a bare string or
    /// map, and never containing blank entries.
    pub images: Vec<String>,
    /// Maximum retail price. Non-negative.
    pub mrp: f64,
    /// Price the customer pays. `final_price <= mrp` is the expected common
    /// case but is not enforced.
    pub final_price: f64,
    /// Pre-discount reference price; falls back to `mrp`.
    pub original_price: f64,
    /// Discount percentage, clamped to [0, 100].
    pub discount_percent: u8,
    /// Lower-cased, trimmed classification. May be empty.
    pub category: String,
    /// Lower-cased, trimmed sub-classification. May be empty.
    pub sub_category: String,
    /// Deduplicated size labels in first-seen order. May be empty.
    pub sizes: Vec<String>,
    /// Which adapter produced this record. Used for tie-breaking and
    /// debugging; storefront UIs never surface it.
    pub origin_schema: SchemaVariant,
    /// Recency sort key; epoch-zero when the source record lacks one, so
    /// undated records sort last under the default descending order.
    pub created_at: DateTime<Utc>,
    /// True when normalization could not fully process the raw record and
    /// produced a minimal stub instead.
    #[serde(default)]
    pub degraded: bool,
}

impl CanonicalProduct {
    /// Builds the minimal stub an adapter returns on irrecoverable
    /// malformation: id carried over when extractable, all else defaulted.
    #[must_use]
    pub fn stub(origin: SchemaVariant, id: Option<String>, defaults: &CatalogDefaults) -> Self {
        Self {
            id: id.unwrap_or_default(),
            title: defaults.placeholder_title.clone(),
            images: Vec::new(),
            mrp: 0.0,
            final_price: 0.0,
            original_price: 0.0,
            discount_percent: 0,
            category: String::new(),
            sub_category: String::new(),
            sizes: Vec::new(),
            origin_schema: origin,
            created_at: DateTime::UNIX_EPOCH,
            degraded: true,
        }
    }

    /// The value price-based sorting compares on: `max(mrp, final_price, 0)`.
    #[must_use]
    pub fn effective_price(&self) -> f64 {
        self.mrp.max(self.final_price).max(0.0)
    }

    /// Returns `true` when the record carries a non-blank identifier.
    ///
    /// Stubs without a usable id are dropped by the orchestrator; stubs
    /// with one are kept, degraded.
    #[must_use]
    pub fn has_usable_id(&self) -> bool {
        !self.id.trim().is_empty()
    }
}
