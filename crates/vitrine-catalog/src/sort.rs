//! Merge-step ordering.
//!
//! The comparator is total: float comparisons that cannot be ordered are
//! treated as equal, and every tie is broken by `id` ascending so repeated
//! calls over unchanged data always produce identical output ordering.

use std::cmp::Ordering;

use vitrine_core::{CanonicalProduct, SortField, SortKey, SortOrder};

pub(crate) fn sort_products(products: &mut [CanonicalProduct], key: SortKey) {
    products.sort_by(|a, b| {
        let primary = compare_field(a, b, key.field);
        let directed = match key.order {
            SortOrder::Asc => primary,
            SortOrder::Desc => primary.reverse(),
        };
        directed.then_with(|| a.id.cmp(&b.id))
    });
}

fn compare_field(a: &CanonicalProduct, b: &CanonicalProduct, field: SortField) -> Ordering {
    match field {
        SortField::Price | SortField::Mrp => a
            .effective_price()
            .partial_cmp(&b.effective_price())
            .unwrap_or(Ordering::Equal),
        SortField::DiscountPercent => a.discount_percent.cmp(&b.discount_percent),
        SortField::Title => a
            .title
            .to_lowercase()
            .cmp(&b.title.to_lowercase()),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}
