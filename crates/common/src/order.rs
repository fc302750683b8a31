//! The stored order record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::OrderId;

/// Top-level fields of an order, keyed by field name.
pub type OrderFields = Map<String, Value>;

/// Name of the identifier field in the serialized record.
const ID_FIELD: &str = "id";

/// An order as held by the store.
///
/// The record keeps whatever top-level fields were accepted on write, so
/// unknown fields survive a round trip. It serializes flat, with the
/// server-assigned `id` alongside the payload fields:
///
/// ```json
/// {"id": "V1StGXR8", "user_id": "u1", "products": {"p1": 2}, "payment_info": "card"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    #[serde(flatten)]
    fields: OrderFields,
}

impl Order {
    /// Creates an order from an ID and payload fields.
    ///
    /// An `id` key in `fields` is discarded; the given ID always wins.
    pub fn new(id: OrderId, mut fields: OrderFields) -> Self {
        fields.remove(ID_FIELD);
        Self { id, fields }
    }

    /// Returns the order ID.
    pub fn id(&self) -> &OrderId {
        &self.id
    }

    /// Returns the payload fields, excluding the ID.
    pub fn fields(&self) -> &OrderFields {
        &self.fields
    }

    /// Returns a single field by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Replaces every field, keeping the ID.
    pub fn replace(&mut self, mut fields: OrderFields) {
        fields.remove(ID_FIELD);
        self.fields = fields;
    }

    /// Shallow merge: each top-level key in `patch` overwrites the existing
    /// value, keys not mentioned are left untouched. The ID cannot be changed.
    pub fn merge(&mut self, patch: OrderFields) {
        for (key, value) in patch {
            if key == ID_FIELD {
                continue;
            }
            self.fields.insert(key, value);
        }
    }
}
