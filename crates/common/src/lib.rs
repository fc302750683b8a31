//! Shared types for the order service.
//!
//! - [`OrderId`]: short, URL-safe, randomly generated order identifier
//! - [`Order`]: a stored order record with its free-form fields

pub mod order;
pub mod types;

pub use order::{Order, OrderFields};
pub use types::OrderId;
