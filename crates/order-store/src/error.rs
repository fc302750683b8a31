use thiserror::Error;

use crate::OrderId;

/// Errors that can occur when interacting with the order store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No order with the given ID exists in the store.
    #[error("Order not found: {0}")]
    NotFound(OrderId),
}

/// Result type for order store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
