//! Domain layer for the order service.
//!
//! This crate provides:
//! - Shape validation for order payloads
//! - `OrderService`, the list/create/get/replace/merge/delete operations over
//!   an [`OrderStore`](order_store::OrderStore)

pub mod error;
pub mod schema;
pub mod service;

pub use common::{Order, OrderFields, OrderId};
pub use error::DomainError;
pub use schema::{ValidOrder, Violation, ViolationKind, is_valid_order, validate_order};
pub use service::OrderService;
