use async_trait::async_trait;

use crate::{Order, OrderFields, OrderId, Result};

/// Core trait for order store implementations.
///
/// A store holds an ordered sequence of orders. Listing returns orders in
/// insertion order, and replacing or merging an order keeps its position.
/// All implementations must be thread-safe (Send + Sync) and apply each
/// operation atomically.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Returns every order, oldest first.
    async fn list(&self) -> Result<Vec<Order>>;

    /// Appends an order to the end of the collection.
    ///
    /// IDs are not checked for uniqueness.
    async fn insert(&self, order: Order) -> Result<()>;

    /// Finds the first order with the given ID.
    async fn get(&self, id: &OrderId) -> Result<Option<Order>>;

    /// Overwrites every field of an order, keeping its ID and position.
    ///
    /// Returns `NotFound` if no order has the given ID.
    async fn replace(&self, id: &OrderId, fields: OrderFields) -> Result<Order>;

    /// Shallow-merges `patch` into an order's top-level fields.
    ///
    /// Returns `NotFound` if no order has the given ID.
    async fn merge(&self, id: &OrderId, patch: OrderFields) -> Result<Order>;

    /// Removes an order, preserving the relative order of the rest.
    ///
    /// Returns the removed order, or `NotFound` if no order has the given ID.
    async fn remove(&self, id: &OrderId) -> Result<Order>;

    /// Returns the number of stored orders.
    async fn len(&self) -> Result<usize>;

    /// Returns true if the store holds no orders.
    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}
