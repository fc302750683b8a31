use rand::Rng;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

/// URL-safe alphabet used for generated order IDs.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Number of characters in a generated order ID.
pub const ORDER_ID_LEN: usize = 8;

/// Unique identifier for an order.
///
/// Generated IDs are 8 characters drawn from a URL-safe alphabet using the
/// operating system's CSPRNG. Collisions are not checked; at 48 bits of
/// entropy they are not a concern at the expected collection sizes.
///
/// Any string can be turned into an `OrderId` for lookups, since path
/// parameters are matched against stored IDs verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Generates a new random order ID.
    pub fn generate() -> Self {
        let mut rng = OsRng;
        let id = (0..ORDER_ID_LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        Self(id)
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
