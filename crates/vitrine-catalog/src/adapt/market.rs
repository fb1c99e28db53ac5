//! Adapter for the current general schema ("market").
//!
//! Market records carry an ordered `gallery` array, explicit `salePrice`
//! alongside `listPrice`/`originalPrice`, a `discountPercent`, `sizes` as a
//! proper array, and RFC 3339 `createdAt` values. The explicit sale price
//! wins over the discount computation when both are present.

use serde_json::{Map, Value};
use vitrine_core::{CanonicalProduct, CatalogDefaults, SchemaVariant};

use super::helpers;
use super::images::{extract_images, ImageFields};

const TITLE_FIELDS: &[&str] = &["title", "name"];
const MRP_FIELDS: &[&str] = &["mrp", "listPrice", "price"];
const FINAL_FIELDS: &[&str] = &["salePrice", "finalPrice"];
const ORIGINAL_FIELDS: &[&str] = &["originalPrice", "listPrice"];
const IMAGE_FIELDS: ImageFields = ImageFields {
    array: &["gallery", "images"],
    map: &[],
    single: &["image", "thumbnail"],
};

pub(super) fn normalize_record(
    id: String,
    record: &Map<String, Value>,
    defaults: &CatalogDefaults,
) -> CanonicalProduct {
    let mrp = helpers::first_price(record, MRP_FIELDS);
    let discount_percent = helpers::percent(record, "discountPercent");

    CanonicalProduct {
        id,
        title: helpers::title(record, TITLE_FIELDS, defaults),
        images: extract_images(record, &IMAGE_FIELDS),
        mrp,
        final_price: helpers::final_price(record, FINAL_FIELDS, mrp, discount_percent),
        original_price: helpers::optional_price(record, ORIGINAL_FIELDS).unwrap_or(mrp),
        discount_percent,
        category: helpers::classification(record, "category"),
        sub_category: helpers::classification(record, "subcategory"),
        sizes: helpers::sizes(record, "sizes"),
        origin_schema: SchemaVariant::Market,
        created_at: helpers::timestamp(record, "createdAt"),
        degraded: false,
    }
}
