//! Aggregation orchestrator and single-item resolver.

use std::time::Duration;

use futures::future::join_all;
use vitrine_core::{
    AppConfig, CanonicalProduct, CatalogDefaults, FilterRequest, ListQuery, PageRequest,
    SchemaVariant, SortKey,
};

use crate::adapt::normalize;
use crate::error::GatewayError;
use crate::gateway::StoreGateway;
use crate::page::{paginate, ProductPage};
use crate::sort::sort_products;
use crate::translate::translate;

/// The unified catalog: every configured store gateway plus the defaults
/// table handed to adapters.
///
/// Store order is fixed at construction and carries two meanings: it is the
/// resolver's priority order and the pre-sort concatenation order of the
/// merge step. [`SchemaVariant::ALL`] puts the newest schemas first and
/// legacy last.
///
/// Holds no cross-request state: every listing is computed fresh from the
/// backing stores and discarded after serialization.
pub struct Catalog {
    stores: Vec<StoreGateway>,
    defaults: CatalogDefaults,
}

impl Catalog {
    #[must_use]
    pub fn new(stores: Vec<StoreGateway>, defaults: CatalogDefaults) -> Self {
        Self { stores, defaults }
    }

    /// Builds gateways for all variants over one shared connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .user_agent(config.store_user_agent.clone())
            .build()?;
        let timeout = Duration::from_secs(config.store_timeout_secs);

        let stores = SchemaVariant::ALL
            .iter()
            .map(|variant| {
                let store_config = match variant {
                    SchemaVariant::Legacy => &config.legacy_store,
                    SchemaVariant::Market => &config.market_store,
                    SchemaVariant::Footwear => &config.footwear_store,
                };
                StoreGateway::new(*variant, store_config, client.clone(), timeout)
            })
            .collect();

        Ok(Self::new(stores, CatalogDefaults::default()))
    }

    /// The configured gateways in priority order.
    #[must_use]
    pub fn stores(&self) -> &[StoreGateway] {
        &self.stores
    }

    /// Lists products across every backing store as one canonical page.
    ///
    /// Never fails: parsing coerces bad parameters to valid defaults, each
    /// store query runs inside its own failure boundary, and the worst case
    /// is a structurally valid empty page.
    pub async fn list_products(&self, query: &ListQuery) -> ProductPage {
        let filter = FilterRequest::from_query(query);
        let page = PageRequest::from_query(query);
        let sort = SortKey::from_query(query);

        // Fan out one independent task per variant; the merge below runs
        // only after every task has settled.
        let fetches = self.stores.iter().map(|store| {
            let filter = &filter;
            async move {
                let native = translate(store.variant(), filter);
                let raw = store.find_many(&native).await;
                raw.iter()
                    .map(|record| normalize(store.variant(), record, &self.defaults))
                    .collect::<Vec<_>>()
            }
        });

        let mut merged: Vec<CanonicalProduct> = join_all(fetches)
            .await
            .into_iter()
            .flatten()
            // A stub with a usable id is still shown, degraded; a stub
            // without one cannot be addressed and is dropped.
            .filter(|product| !product.degraded || product.has_usable_id())
            .collect();

        sort_products(&mut merged, sort);
        paginate(merged, page)
    }

    /// Resolves one product by id for detail pages.
    ///
    /// All stores are probed concurrently; the winner is the first match in
    /// priority order, so the outcome is deterministic even when an id
    /// exists in several stores. `None` is the expected negative result,
    /// and any internal fault also surfaces as `None`.
    pub async fn find_by_id(&self, id: &str) -> Option<CanonicalProduct> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }

        let probes = self.stores.iter().map(|store| async move {
            store
                .find_by_id(id)
                .await
                .map(|record| normalize(store.variant(), &record, &self.defaults))
        });

        join_all(probes).await.into_iter().flatten().next()
    }
}
