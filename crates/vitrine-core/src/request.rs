//! Catalog request shapes and their string-coercion rules.
//!
//! The HTTP layer hands query parameters through as raw strings; everything
//! here parses defensively and clamps to the nearest valid value. A bad
//! parameter can degrade a browse request, never reject it.

use serde::Deserialize;

/// Default page size when the caller supplies none.
pub const DEFAULT_PAGE_LIMIT: usize = 20;
/// Upper bound on page size.
pub const MAX_PAGE_LIMIT: usize = 100;
/// Upper bound on page number.
pub const MAX_PAGE: usize = 1000;

/// Raw catalog query exactly as received from the request layer: every value
/// is an unparsed string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub is_new_arrival: Option<String>,
    pub on_sale: Option<String>,
    pub search: Option<String>,
    pub category_id: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_field: Option<String>,
    pub sort_order: Option<String>,
}

/// Normalized filter portion of a [`ListQuery`].
///
/// String filters are trimmed and lower-cased; empty values are treated as
/// absent. Rendering a filter into a specific store's category convention
/// (hyphen collapsing etc.) is the query translators' job, not this one's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterRequest {
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub is_new_arrival: bool,
    pub on_sale: bool,
    pub search: Option<String>,
    pub category_id: Option<String>,
}

impl FilterRequest {
    #[must_use]
    pub fn from_query(query: &ListQuery) -> Self {
        Self {
            category: clean_lower(query.category.as_deref()),
            sub_category: clean_lower(query.sub_category.as_deref()),
            // Booleans apply only when the raw value is explicitly "true";
            // "1", "yes", "TRUE" and garbage are all ignored.
            is_new_arrival: is_explicit_true(query.is_new_arrival.as_deref()),
            on_sale: is_explicit_true(query.on_sale.as_deref()),
            search: clean(query.search.as_deref()),
            category_id: clean(query.category_id.as_deref()),
        }
    }
}

/// Pagination portion of a [`ListQuery`], parsed and clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number in [1, [`MAX_PAGE`]].
    pub page: usize,
    /// Page size in [1, [`MAX_PAGE_LIMIT`]].
    pub limit: usize,
}

impl PageRequest {
    #[must_use]
    pub fn from_query(query: &ListQuery) -> Self {
        Self {
            page: parse_clamped(query.page.as_deref(), 1, 1, MAX_PAGE),
            limit: parse_clamped(
                query.limit.as_deref(),
                DEFAULT_PAGE_LIMIT,
                1,
                MAX_PAGE_LIMIT,
            ),
        }
    }

    /// Index of the first item on this page within the merged list.
    #[must_use]
    pub fn offset(self) -> usize {
        (self.page - 1) * self.limit
    }
}

/// Sortable fields, a fixed allow-list. Anything unrecognized falls back to
/// `CreatedAt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    Price,
    Mrp,
    DiscountPercent,
    Title,
}

impl SortField {
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("price") => SortField::Price,
            Some("mrp") => SortField::Mrp,
            Some("discountPercent") => SortField::DiscountPercent,
            Some("title" | "name") => SortField::Title,
            _ => SortField::CreatedAt,
        }
    }
}

/// Sort direction; anything other than `asc` falls back to `desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }
}

/// Combined sort instruction for the merge step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortKey {
    #[must_use]
    pub fn from_query(query: &ListQuery) -> Self {
        Self {
            field: SortField::parse(query.sort_field.as_deref()),
            order: SortOrder::parse(query.sort_order.as_deref()),
        }
    }
}

fn clean(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
}

fn clean_lower(raw: Option<&str>) -> Option<String> {
    clean(raw).map(|s| s.to_lowercase())
}

fn is_explicit_true(raw: Option<&str>) -> bool {
    raw.map(str::trim) == Some("true")
}

fn parse_clamped(raw: Option<&str>, default: usize, min: usize, max: usize) -> usize {
    let Some(value) = raw.and_then(|s| s.trim().parse::<i64>().ok()) else {
        return default;
    };
    usize::try_from(value.clamp(min as i64, max as i64)).unwrap_or(default)
}
