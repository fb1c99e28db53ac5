use serde::{Deserialize, Serialize};
use vitrine_core::{CanonicalProduct, PageRequest};

/// Pagination envelope returned alongside every product page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    /// Length of the full merged list, before slicing.
    pub total: usize,
    /// `ceil(total / limit)`.
    pub pages: usize,
}

/// One canonical catalog page: the slice plus its pagination envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<CanonicalProduct>,
    pub pagination: Pagination,
}

impl ProductPage {
    /// A structurally valid empty page — the listing path's worst case.
    #[must_use]
    pub fn empty(request: PageRequest) -> Self {
        Self {
            products: Vec::new(),
            pagination: Pagination {
                page: request.page,
                limit: request.limit,
                total: 0,
                pages: 0,
            },
        }
    }
}

/// Slices the sorted merged list into the requested page.
pub(crate) fn paginate(sorted: Vec<CanonicalProduct>, request: PageRequest) -> ProductPage {
    let total = sorted.len();
    let start = request.offset().min(total);
    let end = (start + request.limit).min(total);

    ProductPage {
        products: sorted[start..end].to_vec(),
        pagination: Pagination {
            page: request.page,
            limit: request.limit,
            total,
            pages: total.div_ceil(request.limit),
        },
    }
}

#[cfg(test)]
mod tests {
    use vitrine_core::{CatalogDefaults, SchemaVariant};

    use super::*;

    fn products(count: usize) -> Vec<CanonicalProduct> {
        (0..count)
            .map(|i| {
                CanonicalProduct::stub(
                    SchemaVariant::Legacy,
                    Some(format!("p-{i:03}")),
                    &CatalogDefaults::default(),
                )
            })
            .collect()
    }

    #[test]
    fn last_partial_page_of_45_items_has_5() {
        let page = paginate(products(45), PageRequest { page: 3, limit: 20 });
        assert_eq!(page.products.len(), 5);
        assert_eq!(page.pagination.total, 45);
        assert_eq!(page.pagination.pages, 3);
        assert_eq!(page.products[0].id, "p-040");
    }

    #[test]
    fn page_beyond_the_end_is_empty_but_valid() {
        let page = paginate(products(10), PageRequest { page: 9, limit: 20 });
        assert!(page.products.is_empty());
        assert_eq!(page.pagination.total, 10);
        assert_eq!(page.pagination.pages, 1);
    }

    #[test]
    fn exact_multiple_has_no_ragged_page() {
        let page = paginate(products(40), PageRequest { page: 2, limit: 20 });
        assert_eq!(page.products.len(), 20);
        assert_eq!(page.pagination.pages, 2);
    }

    #[test]
    fn empty_list_yields_zero_total_and_zero_pages() {
        let page = paginate(products(0), PageRequest { page: 1, limit: 20 });
        assert!(page.products.is_empty());
        assert_eq!(page.pagination.total, 0);
        assert_eq!(page.pagination.pages, 0);
    }
}
