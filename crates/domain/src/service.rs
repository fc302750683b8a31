//! Order service providing the collection operations.

use common::{Order, OrderId};
use order_store::OrderStore;
use serde_json::Value;

use crate::error::DomainError;
use crate::schema::{Violation, validate_order};

/// Service for managing orders.
///
/// Owns the order store and applies validation before writes. Create and
/// replace require a payload with the full order shape; merge accepts any
/// JSON object and applies it as a shallow update.
pub struct OrderService<S: OrderStore> {
    store: S,
}

impl<S: OrderStore> OrderService<S> {
    /// Creates a new order service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns every order in insertion order.
    #[tracing::instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.store.list().await?)
    }

    /// Validates the payload and stores it as a new order.
    ///
    /// Returns the generated order ID.
    #[tracing::instrument(skip(self, payload))]
    pub async fn create_order(&self, payload: &Value) -> Result<OrderId, DomainError> {
        let valid = validate_order(payload).map_err(|violations| reject("create", violations))?;

        let order_id = OrderId::generate();
        self.store
            .insert(Order::new(order_id.clone(), valid.into_fields()))
            .await?;

        metrics::counter!("orders_created_total").increment(1);
        self.record_size().await;
        tracing::info!(%order_id, "order created");

        Ok(order_id)
    }

    /// Loads an order by ID.
    #[tracing::instrument(skip(self))]
    pub async fn get_order(&self, order_id: &OrderId) -> Result<Order, DomainError> {
        self.store
            .get(order_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(order_id.clone()))
    }

    /// Replaces every field of an existing order with the payload.
    ///
    /// The payload is validated before the lookup, so an invalid payload is
    /// rejected even when the ID is unknown.
    #[tracing::instrument(skip(self, payload))]
    pub async fn replace_order(
        &self,
        order_id: &OrderId,
        payload: &Value,
    ) -> Result<Order, DomainError> {
        let valid = validate_order(payload).map_err(|violations| reject("replace", violations))?;

        let order = self.store.replace(order_id, valid.into_fields()).await?;

        metrics::counter!("orders_replaced_total").increment(1);
        tracing::info!(%order_id, "order replaced");

        Ok(order)
    }

    /// Shallow-merges the payload's top-level fields into an existing order.
    ///
    /// The payload must be a JSON object but is not checked against the
    /// order shape. An `id` key in the payload is ignored.
    #[tracing::instrument(skip(self, payload))]
    pub async fn merge_order(
        &self,
        order_id: &OrderId,
        payload: &Value,
    ) -> Result<Order, DomainError> {
        let Value::Object(patch) = payload else {
            metrics::counter!("orders_rejected_total", "reason" => "empty_patch").increment(1);
            return Err(DomainError::EmptyPatch);
        };

        let order = self.store.merge(order_id, patch.clone()).await?;

        metrics::counter!("orders_merged_total").increment(1);
        tracing::info!(%order_id, fields = patch.len(), "order merged");

        Ok(order)
    }

    /// Deletes an order, returning the removed record.
    #[tracing::instrument(skip(self))]
    pub async fn delete_order(&self, order_id: &OrderId) -> Result<Order, DomainError> {
        let order = self.store.remove(order_id).await?;

        metrics::counter!("orders_deleted_total").increment(1);
        self.record_size().await;
        tracing::info!(%order_id, "order deleted");

        Ok(order)
    }

    /// Returns the number of stored orders.
    pub async fn order_count(&self) -> Result<usize, DomainError> {
        Ok(self.store.len().await?)
    }

    async fn record_size(&self) {
        if let Ok(size) = self.store.len().await {
            metrics::gauge!("orders_stored").set(size as f64);
        }
    }
}

fn reject(operation: &'static str, violations: Vec<Violation>) -> DomainError {
    let err = DomainError::InvalidOrder(violations);
    metrics::counter!("orders_rejected_total", "reason" => "invalid_order").increment(1);
    tracing::debug!(operation, error = %err, "order payload rejected");
    err
}
