use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Extension, Json,
};
use vitrine_catalog::ProductPage;
use vitrine_core::{CanonicalProduct, ListQuery};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

/// Catalog listing. Always succeeds from the caller's perspective: bad
/// query parameters degrade to defaults (including an outright extractor
/// rejection), and store failures degrade to fewer products.
pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Json<ApiResponse<ProductPage>> {
    let query = query.map(|Query(q)| q).unwrap_or_else(|rejection| {
        tracing::debug!(error = %rejection, "unreadable query string; listing with defaults");
        ListQuery::default()
    });

    let page = state.catalog.list_products(&query).await;

    Json(ApiResponse {
        data: page,
        meta: ResponseMeta::new(req_id.0),
    })
}

/// Detail lookup. A miss — or any internal fault on the way to one — is a
/// 404, never a 5xx.
pub(super) async fn get_product(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<CanonicalProduct>>, ApiError> {
    match state.catalog.find_by_id(&id).await {
        Some(product) => Ok(Json(ApiResponse {
            data: product,
            meta: ResponseMeta::new(req_id.0),
        })),
        None => Err(ApiError::new(req_id.0, "not_found", "product not found")),
    }
}
