//! Integration tests for [`Catalog`] against wiremock backing stores.
//!
//! Each test stands up a local HTTP server per store so no real network
//! traffic is made. Scenarios cover the merge happy path, every degradation
//! the orchestrator must absorb (erroring store, malformed body, store out
//! of rotation), pagination over the merged list, and by-id resolution
//! priority.

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vitrine_catalog::{Catalog, StoreGateway};
use vitrine_core::{CatalogDefaults, ListQuery, SchemaVariant, StoreConfig};

fn gateway(variant: SchemaVariant, base_url: &str, enabled: bool) -> StoreGateway {
    StoreGateway::new(
        variant,
        &StoreConfig {
            base_url: base_url.to_string(),
            enabled,
        },
        reqwest::Client::new(),
        Duration::from_secs(5),
    )
}

/// Catalog wired to three mock stores in the production priority order:
/// market, footwear, legacy.
fn catalog(market: &MockServer, footwear: &MockServer, legacy: &MockServer) -> Catalog {
    Catalog::new(
        vec![
            gateway(SchemaVariant::Market, &market.uri(), true),
            gateway(SchemaVariant::Footwear, &footwear.uri(), true),
            gateway(SchemaVariant::Legacy, &legacy.uri(), true),
        ],
        CatalogDefaults::default(),
    )
}

async fn three_servers() -> (MockServer, MockServer, MockServer) {
    (
        MockServer::start().await,
        MockServer::start().await,
        MockServer::start().await,
    )
}

fn market_list(items: Value) -> Mock {
    Mock::given(method("GET"))
        .and(path("/v2/catalog/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"items": items})))
}

fn footwear_list(products: Value) -> Mock {
    Mock::given(method("GET"))
        .and(path("/catalog/footwear"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"products": products})))
}

fn legacy_list(records: Value) -> Mock {
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&records))
}

// ---------------------------------------------------------------------------
// Merge happy path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn merges_all_three_stores_into_one_canonical_page() {
    let (market, footwear, legacy) = three_servers().await;

    market_list(json!([{"id": "m-1", "title": "Market Shirt", "createdAt": "2025-03-01T00:00:00Z"}]))
        .mount(&market)
        .await;
    footwear_list(json!([{"pid": "f-1", "model": "Runner", "listedAt": 1_735_689_600}]))
        .mount(&footwear)
        .await;
    legacy_list(json!([{"_id": "l-1", "name": "Old Tee", "addedOn": "2022-01-01T00:00:00Z"}]))
        .mount(&legacy)
        .await;

    let page = catalog(&market, &footwear, &legacy)
        .list_products(&ListQuery::default())
        .await;

    assert_eq!(page.pagination.total, 3);
    assert_eq!(page.pagination.pages, 1);
    // Default sort: createdAt descending.
    let ids: Vec<&str> = page.products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["m-1", "f-1", "l-1"]);
    assert_eq!(page.products[0].origin_schema, SchemaVariant::Market);
}

#[tokio::test]
async fn repeated_identical_calls_return_identical_pages() {
    let (market, footwear, legacy) = three_servers().await;

    market_list(json!([
        {"id": "m-2", "title": "B", "mrp": 100},
        {"id": "m-1", "title": "A", "mrp": 100}
    ]))
    .mount(&market)
    .await;
    footwear_list(json!([])).mount(&footwear).await;
    legacy_list(json!([{"_id": "l-1", "name": "C", "mrp": 100}]))
        .mount(&legacy)
        .await;

    let catalog = catalog(&market, &footwear, &legacy);
    let mut query = ListQuery::default();
    query.sort_field = Some("price".to_string());
    query.sort_order = Some("asc".to_string());

    let first = catalog.list_products(&query).await;
    let second = catalog.list_products(&query).await;

    let ids = |page: &vitrine_catalog::ProductPage| -> Vec<String> {
        page.products.iter().map(|p| p.id.clone()).collect()
    };
    assert_eq!(ids(&first), ids(&second));
    assert_eq!(first.pagination, second.pagination);
    // Equal prices: ties resolved by id ascending, not arrival order.
    assert_eq!(ids(&first), vec!["l-1", "m-1", "m-2"]);
}

// ---------------------------------------------------------------------------
// Degradation boundaries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn erroring_store_does_not_break_the_listing() {
    let (market, footwear, legacy) = three_servers().await;

    market_list(json!([{"id": "m-1", "title": "Fine"}]))
        .mount(&market)
        .await;
    footwear_list(json!([{"pid": "f-1", "model": "Also fine"}]))
        .mount(&footwear)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&legacy)
        .await;

    let page = catalog(&market, &footwear, &legacy)
        .list_products(&ListQuery::default())
        .await;

    assert_eq!(page.pagination.total, 2, "total reflects only healthy stores");
    assert!(page.products.iter().all(|p| p.id != "l-1"));
}

#[tokio::test]
async fn malformed_store_body_contributes_nothing() {
    let (market, footwear, legacy) = three_servers().await;

    market_list(json!([{"id": "m-1"}])).mount(&market).await;
    Mock::given(method("GET"))
        .and(path("/catalog/footwear"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&footwear)
        .await;
    // Wrong envelope: legacy must be a bare array.
    legacy_list(json!({"records": []})).mount(&legacy).await;

    let page = catalog(&market, &footwear, &legacy)
        .list_products(&ListQuery::default())
        .await;

    assert_eq!(page.pagination.total, 1);
    assert_eq!(page.products[0].id, "m-1");
}

#[tokio::test]
async fn every_store_down_yields_a_valid_empty_page() {
    let (market, footwear, legacy) = three_servers().await;
    for server in [&market, &footwear, &legacy] {
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(server)
            .await;
    }

    let page = catalog(&market, &footwear, &legacy)
        .list_products(&ListQuery::default())
        .await;

    assert!(page.products.is_empty());
    assert_eq!(page.pagination.total, 0);
    assert_eq!(page.pagination.pages, 0);
    assert_eq!(page.pagination.page, 1);
}

#[tokio::test]
async fn out_of_rotation_store_is_never_queried() {
    let (market, footwear, legacy) = three_servers().await;

    market_list(json!([{"id": "m-1"}])).mount(&market).await;
    legacy_list(json!([])).mount(&legacy).await;
    // Mount with an expectation of zero calls; verified on drop.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"products": []})))
        .expect(0)
        .mount(&footwear)
        .await;

    let catalog = Catalog::new(
        vec![
            gateway(SchemaVariant::Market, &market.uri(), true),
            gateway(SchemaVariant::Footwear, &footwear.uri(), false),
            gateway(SchemaVariant::Legacy, &legacy.uri(), true),
        ],
        CatalogDefaults::default(),
    );

    let page = catalog.list_products(&ListQuery::default()).await;
    assert_eq!(page.pagination.total, 1);
}

#[tokio::test]
async fn stub_without_id_is_dropped_stub_with_id_is_kept() {
    let (market, footwear, legacy) = three_servers().await;

    market_list(json!([])).mount(&market).await;
    footwear_list(json!([])).mount(&footwear).await;
    // First record has no id at all; second is a bare id. Only the second
    // survives, fully defaulted.
    legacy_list(json!([{"name": "no id here"}, {"_id": "l-keep"}]))
        .mount(&legacy)
        .await;

    let page = catalog(&market, &footwear, &legacy)
        .list_products(&ListQuery::default())
        .await;

    assert_eq!(page.pagination.total, 1);
    assert_eq!(page.products[0].id, "l-keep");
    assert_eq!(page.products[0].title, "Untitled Product");
}

// ---------------------------------------------------------------------------
// Filter translation on the wire
// ---------------------------------------------------------------------------

#[tokio::test]
async fn excluded_category_sends_no_request_to_the_scoped_store() {
    let (market, footwear, legacy) = three_servers().await;

    market_list(json!([])).mount(&market).await;
    legacy_list(json!([])).mount(&legacy).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"products": [
            {"pid": "f-leak", "model": "Must not appear"}
        ]})))
        .expect(0)
        .mount(&footwear)
        .await;

    let mut query = ListQuery::default();
    query.category = Some("tshirt".to_string());

    let page = catalog(&market, &footwear, &legacy)
        .list_products(&query)
        .await;

    assert_eq!(page.pagination.total, 0);
}

#[tokio::test]
async fn search_is_translated_for_market_and_omitted_elsewhere() {
    let (market, footwear, legacy) = three_servers().await;

    Mock::given(method("GET"))
        .and(path("/v2/catalog/items"))
        .and(query_param("q", "linen"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"items": [
            {"id": "m-hit", "title": "Linen Shirt"}
        ]})))
        .mount(&market)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param_is_missing("q"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([])))
        .mount(&legacy)
        .await;
    Mock::given(method("GET"))
        .and(path("/catalog/footwear"))
        .and(query_param_is_missing("q"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"products": []})))
        .mount(&footwear)
        .await;

    let mut query = ListQuery::default();
    query.search = Some("linen".to_string());

    let page = catalog(&market, &footwear, &legacy)
        .list_products(&query)
        .await;

    assert_eq!(page.pagination.total, 1);
    assert_eq!(page.products[0].id, "m-hit");
}

// ---------------------------------------------------------------------------
// Sorting and pagination over the merged list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn price_ascending_orders_across_store_boundaries() {
    let (market, footwear, legacy) = three_servers().await;

    market_list(json!([{"id": "m-300", "mrp": 300}]))
        .mount(&market)
        .await;
    footwear_list(json!([{"pid": "f-050", "mrp": 50}]))
        .mount(&footwear)
        .await;
    legacy_list(json!([{"_id": "l-150", "mrp": 150}]))
        .mount(&legacy)
        .await;

    let mut query = ListQuery::default();
    query.sort_field = Some("price".to_string());
    query.sort_order = Some("asc".to_string());

    let page = catalog(&market, &footwear, &legacy)
        .list_products(&query)
        .await;

    let prices: Vec<f64> = page.products.iter().map(|p| p.mrp).collect();
    assert_eq!(prices, vec![50.0, 150.0, 300.0]);
}

#[tokio::test]
async fn third_page_of_forty_five_merged_records_has_five() {
    let (market, footwear, legacy) = three_servers().await;

    let items: Vec<Value> = (0..45)
        .map(|i| json!({"id": format!("m-{i:02}"), "mrp": i}))
        .collect();
    market_list(json!(items)).mount(&market).await;
    footwear_list(json!([])).mount(&footwear).await;
    legacy_list(json!([])).mount(&legacy).await;

    let mut query = ListQuery::default();
    query.page = Some("3".to_string());
    query.limit = Some("20".to_string());
    query.sort_field = Some("price".to_string());
    query.sort_order = Some("asc".to_string());

    let page = catalog(&market, &footwear, &legacy)
        .list_products(&query)
        .await;

    assert_eq!(page.products.len(), 5);
    assert_eq!(page.pagination.total, 45);
    assert_eq!(page.pagination.pages, 3);
    assert_eq!(page.products[0].id, "m-40");
}

#[tokio::test]
async fn junk_pagination_and_sort_parameters_degrade_to_defaults() {
    let (market, footwear, legacy) = three_servers().await;

    market_list(json!([{"id": "m-1"}])).mount(&market).await;
    footwear_list(json!([])).mount(&footwear).await;
    legacy_list(json!([])).mount(&legacy).await;

    let mut query = ListQuery::default();
    query.page = Some("minus one".to_string());
    query.limit = Some("-3".to_string());
    query.sort_field = Some("dropTables".to_string());
    query.sort_order = Some("sideways".to_string());

    let page = catalog(&market, &footwear, &legacy)
        .list_products(&query)
        .await;

    assert_eq!(page.pagination.page, 1);
    assert_eq!(page.pagination.limit, 1, "limit -3 clamps to 1");
    assert_eq!(page.pagination.total, 1);
}

// ---------------------------------------------------------------------------
// Item resolution
// ---------------------------------------------------------------------------

#[tokio::test]
async fn find_by_id_prefers_the_highest_priority_match() {
    let (market, footwear, legacy) = three_servers().await;

    Mock::given(method("GET"))
        .and(path("/v2/catalog/items/shared-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"item": {
            "id": "shared-1", "title": "Market copy"
        }})))
        .mount(&market)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/products/shared-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "_id": "shared-1", "name": "Legacy copy"
        })))
        .mount(&legacy)
        .await;

    let found = catalog(&market, &footwear, &legacy)
        .find_by_id("shared-1")
        .await
        .expect("expected a match");

    assert_eq!(found.origin_schema, SchemaVariant::Market);
    assert_eq!(found.title, "Market copy");
}

#[tokio::test]
async fn find_by_id_reaches_the_lowest_priority_store() {
    let (market, footwear, legacy) = three_servers().await;

    // market and footwear have no mock for this path; wiremock answers 404.
    Mock::given(method("GET"))
        .and(path("/api/products/leg-only"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "_id": "leg-only", "name": "Legacy exclusive", "mrp": 75
        })))
        .mount(&legacy)
        .await;

    let found = catalog(&market, &footwear, &legacy)
        .find_by_id("leg-only")
        .await
        .expect("expected the legacy match");

    assert_eq!(found.origin_schema, SchemaVariant::Legacy);
    assert_eq!(found.mrp, 75.0);
}

#[tokio::test]
async fn find_by_id_survives_a_broken_higher_priority_store() {
    let (market, footwear, legacy) = three_servers().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&market)
        .await;
    Mock::given(method("GET"))
        .and(path("/catalog/footwear/fw-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "pid": "fw-9", "model": "Boot"
        })))
        .mount(&footwear)
        .await;

    let found = catalog(&market, &footwear, &legacy)
        .find_by_id("fw-9")
        .await
        .expect("footwear match despite market 500");

    assert_eq!(found.origin_schema, SchemaVariant::Footwear);
}

#[tokio::test]
async fn find_by_id_misses_everywhere_as_none() {
    let (market, footwear, legacy) = three_servers().await;

    let found = catalog(&market, &footwear, &legacy)
        .find_by_id("ghost-404")
        .await;

    assert!(found.is_none());
}
