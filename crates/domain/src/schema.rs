//! Shape validation for order payloads.
//!
//! An order payload must be a JSON object with:
//! - `user_id`: string
//! - `products`: object mapping product IDs to strictly positive numbers
//!   (an empty object is accepted)
//! - `payment_info`: string
//!
//! Extra fields are allowed and kept as-is.

use std::fmt;

use common::OrderFields;
use serde_json::Value;

const USER_ID: &str = "user_id";
const PRODUCTS: &str = "products";
const PAYMENT_INFO: &str = "payment_info";

/// What is wrong with a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// The payload itself is not a JSON object.
    NotAnObject,
    /// A required field is absent.
    Missing,
    /// The field must be a string.
    ExpectedString,
    /// The field must be an object.
    ExpectedObject,
    /// A product quantity is not a number greater than zero.
    NonPositiveQuantity { product: String },
}

/// A single reason a payload failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Offending field, or `""` for the payload as a whole.
    pub field: &'static str,
    pub kind: ViolationKind,
}

impl Violation {
    fn new(field: &'static str, kind: ViolationKind) -> Self {
        Self { field, kind }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::NotAnObject => write!(f, "payload must be an object"),
            ViolationKind::Missing => write!(f, "{} is required", self.field),
            ViolationKind::ExpectedString => write!(f, "{} must be a string", self.field),
            ViolationKind::ExpectedObject => write!(f, "{} must be an object", self.field),
            ViolationKind::NonPositiveQuantity { product } => {
                write!(f, "{}.{product} must be a positive number", self.field)
            }
        }
    }
}

/// A payload that passed validation, holding its top-level fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidOrder(OrderFields);

impl ValidOrder {
    /// Returns the validated fields.
    pub fn fields(&self) -> &OrderFields {
        &self.0
    }

    /// Consumes the wrapper, returning the validated fields.
    pub fn into_fields(self) -> OrderFields {
        self.0
    }
}

/// Validates an order payload, collecting every violation found.
pub fn validate_order(value: &Value) -> Result<ValidOrder, Vec<Violation>> {
    let Some(fields) = value.as_object() else {
        return Err(vec![Violation::new("", ViolationKind::NotAnObject)]);
    };

    let mut violations = Vec::new();

    check_string(fields, USER_ID, &mut violations);
    check_products(fields, &mut violations);
    check_string(fields, PAYMENT_INFO, &mut violations);

    if violations.is_empty() {
        Ok(ValidOrder(fields.clone()))
    } else {
        Err(violations)
    }
}

/// Returns true if `value` has the shape of an order.
pub fn is_valid_order(value: &Value) -> bool {
    validate_order(value).is_ok()
}

fn check_string(fields: &OrderFields, field: &'static str, violations: &mut Vec<Violation>) {
    match fields.get(field) {
        None => violations.push(Violation::new(field, ViolationKind::Missing)),
        Some(Value::String(_)) => {}
        Some(_) => violations.push(Violation::new(field, ViolationKind::ExpectedString)),
    }
}

fn check_products(fields: &OrderFields, violations: &mut Vec<Violation>) {
    let products = match fields.get(PRODUCTS) {
        None => {
            violations.push(Violation::new(PRODUCTS, ViolationKind::Missing));
            return;
        }
        Some(Value::Object(products)) => products,
        Some(_) => {
            violations.push(Violation::new(PRODUCTS, ViolationKind::ExpectedObject));
            return;
        }
    };

    for (product, quantity) in products {
        let positive = quantity.as_f64().is_some_and(|q| q > 0.0);
        if !positive {
            violations.push(Violation::new(
                PRODUCTS,
                ViolationKind::NonPositiveQuantity {
                    product: product.clone(),
                },
            ));
        }
    }
}
