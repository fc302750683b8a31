use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{Order, OrderFields, OrderId, Result, StoreError, store::OrderStore};

/// In-memory order store.
///
/// Orders live in a single vector behind an async read-write lock. Lookups
/// are linear scans over the vector, which keeps insertion order for listing
/// without a secondary index.
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl InMemoryOrderStore {
    /// Creates a new empty in-memory order store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every order.
    pub async fn clear(&self) {
        self.orders.write().await.clear();
    }
}

fn position(orders: &[Order], id: &OrderId) -> Result<usize> {
    orders
        .iter()
        .position(|order| order.id() == id)
        .ok_or_else(|| StoreError::NotFound(id.clone()))
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn list(&self) -> Result<Vec<Order>> {
        Ok(self.orders.read().await.clone())
    }

    async fn insert(&self, order: Order) -> Result<()> {
        self.orders.write().await.push(order);
        Ok(())
    }

    async fn get(&self, id: &OrderId) -> Result<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.iter().find(|order| order.id() == id).cloned())
    }

    async fn replace(&self, id: &OrderId, fields: OrderFields) -> Result<Order> {
        let mut orders = self.orders.write().await;
        let index = position(&orders, id)?;
        orders[index].replace(fields);
        Ok(orders[index].clone())
    }

    async fn merge(&self, id: &OrderId, patch: OrderFields) -> Result<Order> {
        let mut orders = self.orders.write().await;
        let index = position(&orders, id)?;
        orders[index].merge(patch);
        Ok(orders[index].clone())
    }

    async fn remove(&self, id: &OrderId) -> Result<Order> {
        let mut orders = self.orders.write().await;
        let index = position(&orders, id)?;
        tracing::debug!(%id, index, "removing order");
        Ok(orders.remove(index))
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.orders.read().await.len())
    }
}
