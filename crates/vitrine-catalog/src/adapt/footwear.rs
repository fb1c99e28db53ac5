//! Adapter for the footwear store.
//!
//! A category-scoped service: every record is footwear, so `category`
//! defaults to the store's domain when the record omits it. Images are
//! usually a single `thumbnail`, prices are `mrp` + `offerPercent` (with an
//! occasional explicit `offerPrice`), and `listedAt` is an epoch number.

use serde_json::{Map, Value};
use vitrine_core::{CanonicalProduct, CatalogDefaults, SchemaVariant};

use super::helpers;
use super::images::{extract_images, ImageFields};

/// Canonical category applied when a record carries none.
const DOMAIN_CATEGORY: &str = "footwear";

const TITLE_FIELDS: &[&str] = &["model", "name", "title"];
const MRP_FIELDS: &[&str] = &["mrp", "amount", "price"];
const FINAL_FIELDS: &[&str] = &["offerPrice"];
const IMAGE_FIELDS: ImageFields = ImageFields {
    array: &["images"],
    map: &[],
    single: &["thumbnail", "image"],
};

pub(super) fn normalize_record(
    id: String,
    record: &Map<String, Value>,
    defaults: &CatalogDefaults,
) -> CanonicalProduct {
    let mrp = helpers::first_price(record, MRP_FIELDS);
    let discount_percent = helpers::percent(record, "offerPercent");

    let category = match helpers::classification(record, "category") {
        c if c.is_empty() => DOMAIN_CATEGORY.to_string(),
        c => c,
    };

    CanonicalProduct {
        id,
        title: helpers::title(record, TITLE_FIELDS, defaults),
        images: extract_images(record, &IMAGE_FIELDS),
        mrp,
        final_price: helpers::final_price(record, FINAL_FIELDS, mrp, discount_percent),
        original_price: mrp,
        discount_percent,
        category,
        sub_category: helpers::classification(record, "kind"),
        sizes: helpers::sizes(record, "sizes"),
        origin_schema: SchemaVariant::Footwear,
        created_at: helpers::timestamp(record, "listedAt"),
        degraded: false,
    }
}
