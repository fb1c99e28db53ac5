//! Adapter for the original catalog service.
//!
//! ## Observed shape
//!
//! The legacy store predates the gallery array: most records carry an
//! `images` slot map keyed `img1`, `img2`, … (some very old rows have only a
//! `thumbnail`), prices as `mrp` plus a `discount` percentage with no
//! explicit sale price, `sizes` as a comma-separated string, and `addedOn`
//! as either an RFC 3339 string or an epoch number depending on which era
//! wrote the row.

use serde_json::{Map, Value};
use vitrine_core::{CanonicalProduct, CatalogDefaults, SchemaVariant};

use super::helpers;
use super::images::{extract_images, ImageFields};

const TITLE_FIELDS: &[&str] = &["name", "title"];
const MRP_FIELDS: &[&str] = &["mrp", "price"];
const IMAGE_FIELDS: ImageFields = ImageFields {
    array: &["images"],
    map: &["images"],
    single: &["thumbnail", "image"],
};

pub(super) fn normalize_record(
    id: String,
    record: &Map<String, Value>,
    defaults: &CatalogDefaults,
) -> CanonicalProduct {
    let mrp = helpers::first_price(record, MRP_FIELDS);
    let discount_percent = helpers::percent(record, "discount");
    // The legacy schema has no explicit sale-price field; the discount
    // computation is the only final-price path.
    let final_price = helpers::final_price(record, &[], mrp, discount_percent);

    CanonicalProduct {
        id,
        title: helpers::title(record, TITLE_FIELDS, defaults),
        images: extract_images(record, &IMAGE_FIELDS),
        mrp,
        final_price,
        original_price: mrp,
        discount_percent,
        category: helpers::classification(record, "category"),
        sub_category: helpers::classification(record, "subCategory"),
        sizes: helpers::sizes(record, "sizes"),
        origin_schema: SchemaVariant::Legacy,
        created_at: helpers::timestamp(record, "addedOn"),
        degraded: false,
    }
}
