//! Domain error types.

use common::OrderId;
use order_store::StoreError;
use thiserror::Error;

use crate::schema::Violation;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The payload does not have the shape of an order.
    #[error("Invalid order: {}", join(.0))]
    InvalidOrder(Vec<Violation>),

    /// A partial update carried no fields to apply.
    #[error("No data provided for update")]
    EmptyPatch,

    /// No order with the given ID exists.
    #[error("Order not found: {0}")]
    NotFound(OrderId),
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<StoreError> for DomainError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => DomainError::NotFound(id),
        }
    }
}
