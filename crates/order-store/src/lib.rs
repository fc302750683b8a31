//! Storage for the order collection.
//!
//! The [`OrderStore`] trait is the seam between the order service and the
//! backing collection; [`InMemoryOrderStore`] keeps orders in process memory
//! and loses them on exit.

pub mod error;
pub mod memory;
pub mod store;

pub use common::{Order, OrderFields, OrderId};
pub use error::{Result, StoreError};
pub use memory::InMemoryOrderStore;
pub use store::OrderStore;
