//! Thin capability wrappers over the backing-store HTTP services.
//!
//! One gateway per schema variant. Both operations are idempotent reads
//! with a local failure boundary: a disabled store, a transport error, an
//! unexpected status, or an undecodable body all degrade to an empty/absent
//! result plus a diagnostic log entry. Nothing here ever propagates an
//! error to the orchestrator.

use std::time::Duration;

use serde_json::Value;
use vitrine_core::{SchemaVariant, StoreConfig};

use crate::error::GatewayError;
use crate::translate::StoreQuery;

/// Capability wrapper for one backing store.
#[derive(Debug, Clone)]
pub struct StoreGateway {
    variant: SchemaVariant,
    base_url: String,
    enabled: bool,
    client: reqwest::Client,
    timeout: Duration,
}

impl StoreGateway {
    #[must_use]
    pub fn new(
        variant: SchemaVariant,
        config: &StoreConfig,
        client: reqwest::Client,
        timeout: Duration,
    ) -> Self {
        Self {
            variant,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            enabled: config.enabled,
            client,
            timeout,
        }
    }

    #[must_use]
    pub fn variant(&self) -> SchemaVariant {
        self.variant
    }

    /// Whether this store is in rotation.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Runs the store's list query. Returns raw records; empty on any
    /// failure, on an out-of-rotation store, or for the impossible
    /// predicate.
    pub async fn find_many(&self, query: &StoreQuery) -> Vec<Value> {
        if !self.enabled {
            tracing::debug!(store = %self.variant, "store out of rotation; skipping query");
            return Vec::new();
        }
        let StoreQuery::Params(params) = query else {
            tracing::debug!(store = %self.variant, "impossible predicate; zero records by construction");
            return Vec::new();
        };

        match self.fetch_many(params).await {
            Ok(records) => records,
            Err(error) => {
                tracing::warn!(store = %self.variant, error = %error, "store query failed; returning empty result");
                Vec::new()
            }
        }
    }

    /// Looks up one record by id. Absent on 404, on any failure, or when
    /// the store is out of rotation.
    pub async fn find_by_id(&self, id: &str) -> Option<Value> {
        if !self.enabled {
            tracing::debug!(store = %self.variant, "store out of rotation; skipping lookup");
            return None;
        }

        match self.fetch_by_id(id).await {
            Ok(found) => found,
            Err(error) => {
                tracing::warn!(store = %self.variant, id, error = %error, "store lookup failed; treating as absent");
                None
            }
        }
    }

    async fn fetch_many(&self, params: &[(String, String)]) -> Result<Vec<Value>, GatewayError> {
        let url = format!("{}{}", self.base_url, list_path(self.variant));
        let response = self
            .client
            .get(&url)
            .query(params)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body: Value = response.json().await?;
        unwrap_list(self.variant, body).ok_or_else(|| GatewayError::UnexpectedShape {
            url,
            reason: "list envelope missing or not an array".to_string(),
        })
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Value>, GatewayError> {
        let url = format!("{}{}/{}", self.base_url, list_path(self.variant), id);
        let response = self.client.get(&url).timeout(self.timeout).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(GatewayError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body: Value = response.json().await?;
        unwrap_item(self.variant, body).map(Some).ok_or_else(|| {
            GatewayError::UnexpectedShape {
                url,
                reason: "item envelope missing or not an object".to_string(),
            }
        })
    }
}

/// Collection endpoint per variant; the by-id endpoint appends `/{id}`.
fn list_path(variant: SchemaVariant) -> &'static str {
    match variant {
        SchemaVariant::Legacy => "/api/products",
        SchemaVariant::Market => "/v2/catalog/items",
        SchemaVariant::Footwear => "/catalog/footwear",
    }
}

/// Each service wraps its list differently: legacy returns a bare array,
/// market an `items` envelope, footwear a `products` envelope.
fn unwrap_list(variant: SchemaVariant, body: Value) -> Option<Vec<Value>> {
    match variant {
        SchemaVariant::Legacy => match body {
            Value::Array(records) => Some(records),
            _ => None,
        },
        SchemaVariant::Market => match body {
            Value::Object(mut envelope) => match envelope.remove("items") {
                Some(Value::Array(records)) => Some(records),
                _ => None,
            },
            _ => None,
        },
        SchemaVariant::Footwear => match body {
            Value::Object(mut envelope) => match envelope.remove("products") {
                Some(Value::Array(records)) => Some(records),
                _ => None,
            },
            _ => None,
        },
    }
}

/// By-id responses: market wraps the record in `item`, the others return it
/// bare.
fn unwrap_item(variant: SchemaVariant, body: Value) -> Option<Value> {
    match variant {
        SchemaVariant::Market => match body {
            Value::Object(mut envelope) => envelope.remove("item").filter(Value::is_object),
            _ => None,
        },
        SchemaVariant::Legacy | SchemaVariant::Footwear => {
            body.is_object().then_some(body)
        }
    }
}
