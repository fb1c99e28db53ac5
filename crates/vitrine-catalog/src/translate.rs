//! Per-variant query translation.
//!
//! Each backing store speaks its own filter dialect; a translator renders
//! the normalized [`FilterRequest`] into one store's native predicate.
//! Unknown or malformed filter values are dropped, never rejected — the
//! listing path always runs a best-effort query.

use vitrine_core::{FilterRequest, SchemaVariant};

/// Native predicate for one backing store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreQuery {
    /// Impossible-but-valid predicate: provably matches zero records.
    ///
    /// Produced when a filter excludes a store's fixed domain outright
    /// (asking the footwear store for t-shirts). Deliberately the opposite
    /// of a match-all: a misrouted filter must never leak a store's whole
    /// inventory into an unrelated category page.
    MatchNone,
    /// Query-string pairs in the store's own parameter convention.
    Params(Vec<(String, String)>),
}

impl StoreQuery {
    #[must_use]
    pub fn is_match_none(&self) -> bool {
        matches!(self, StoreQuery::MatchNone)
    }
}

/// Collapsed category tokens the footwear store's inventory answers to.
const FOOTWEAR_DOMAIN: &[&str] = &["footwear", "shoes", "shoe"];

/// Renders a normalized filter into `variant`'s native predicate.
#[must_use]
pub fn translate(variant: SchemaVariant, filter: &FilterRequest) -> StoreQuery {
    match variant {
        SchemaVariant::Legacy => translate_legacy(filter),
        SchemaVariant::Market => translate_market(filter),
        SchemaVariant::Footwear => translate_footwear(filter),
    }
}

fn translate_legacy(filter: &FilterRequest) -> StoreQuery {
    let mut params = Vec::new();
    if let Some(category) = &filter.category {
        params.push(("category".to_string(), category_token(category)));
    }
    if let Some(sub) = &filter.sub_category {
        params.push(("subcategory".to_string(), category_token(sub)));
    }
    if filter.is_new_arrival {
        params.push(("newArrival".to_string(), "1".to_string()));
    }
    if filter.on_sale {
        params.push(("sale".to_string(), "1".to_string()));
    }
    if let Some(category_id) = &filter.category_id {
        params.push(("categoryId".to_string(), category_id.clone()));
    }
    // The legacy service has no text-search facility; `search` is omitted
    // rather than erroring.
    StoreQuery::Params(params)
}

fn translate_market(filter: &FilterRequest) -> StoreQuery {
    let mut params = Vec::new();
    if let Some(category) = &filter.category {
        params.push(("category".to_string(), category_token(category)));
    }
    if let Some(sub) = &filter.sub_category {
        params.push(("subcategory".to_string(), category_token(sub)));
    }
    if filter.is_new_arrival {
        params.push(("newarrivals".to_string(), "true".to_string()));
    }
    if filter.on_sale {
        params.push(("onsale".to_string(), "true".to_string()));
    }
    if let Some(search) = &filter.search {
        params.push(("q".to_string(), search.clone()));
    }
    if let Some(category_id) = &filter.category_id {
        params.push(("categoryId".to_string(), category_id.clone()));
    }
    StoreQuery::Params(params)
}

fn translate_footwear(filter: &FilterRequest) -> StoreQuery {
    // Inclusion/exclusion safety: this store is scoped to one super-category.
    // A category filter outside that domain matches zero records, not all.
    if let Some(category) = &filter.category {
        let token = category_token(category);
        if !FOOTWEAR_DOMAIN.contains(&token.as_str()) {
            return StoreQuery::MatchNone;
        }
    }

    let mut params = Vec::new();
    if let Some(sub) = &filter.sub_category {
        params.push(("kind".to_string(), category_token(sub)));
    }
    if filter.is_new_arrival {
        params.push(("isNew".to_string(), "true".to_string()));
    }
    if filter.on_sale {
        params.push(("onSale".to_string(), "true".to_string()));
    }
    if let Some(category_id) = &filter.category_id {
        params.push(("categoryId".to_string(), category_id.clone()));
    }
    // No text search on the footwear service; `search` is omitted.
    StoreQuery::Params(params)
}

/// Collapses a classification string to its comparison token: lower-case,
/// alphanumeric only. `"T-Shirt"`, `"t shirt"` and `"tshirt"` all map to
/// `"tshirt"`, which is what the stores match on.
fn category_token(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase()
}
