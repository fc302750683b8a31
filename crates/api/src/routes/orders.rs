//! Order CRUD endpoints.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use domain::{Order, OrderId, OrderService};
use metrics_exporter_prometheus::PrometheusHandle;
use order_store::OrderStore;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: OrderStore> {
    pub order_service: OrderService<S>,
    pub metrics_handle: PrometheusHandle,
}

// -- Response types --

#[derive(Serialize)]
pub struct OrderCreatedResponse {
    pub message: &'static str,
    #[serde(rename = "orderId")]
    pub order_id: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// -- Handlers --

/// GET /orders: list every order in insertion order.
#[tracing::instrument(skip(state))]
pub async fn list<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<Order>>, ApiError> {
    let orders = state.order_service.list_orders().await?;
    Ok(Json(orders))
}

/// POST /orders: validate the payload and store a new order.
#[tracing::instrument(skip(state, body))]
pub async fn create<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    body: Bytes,
) -> Result<(StatusCode, Json<OrderCreatedResponse>), ApiError> {
    let payload = parse_payload(&body)?;
    let order_id = state.order_service.create_order(&payload).await?;

    let response = OrderCreatedResponse {
        message: "Order created successfully",
        order_id: order_id.into(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /orders/{id}: fetch a single order.
#[tracing::instrument(skip(state))]
pub async fn get<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    let order = state.order_service.get_order(&OrderId::from(id)).await?;
    Ok(Json(order))
}

/// PUT /orders/{id}: replace every field of an order.
#[tracing::instrument(skip(state, body))]
pub async fn replace<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let payload = parse_payload(&body)?;
    state
        .order_service
        .replace_order(&OrderId::from(id), &payload)
        .await?;

    Ok(Json(MessageResponse {
        message: "Order updated successfully",
    }))
}

/// PATCH /orders/{id}: shallow-merge fields into an order.
#[tracing::instrument(skip(state, body))]
pub async fn merge<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let payload = parse_payload(&body)?;
    state
        .order_service
        .merge_order(&OrderId::from(id), &payload)
        .await?;

    Ok(Json(MessageResponse {
        message: "Order partially updated successfully",
    }))
}

/// DELETE /orders/{id}: remove an order.
#[tracing::instrument(skip(state))]
pub async fn delete<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.order_service.delete_order(&OrderId::from(id)).await?;

    Ok(Json(MessageResponse {
        message: "Order deleted successfully",
    }))
}

/// Parses a request body as JSON regardless of its content type.
///
/// An empty body yields `Value::Null`, which the service rejects as a
/// missing payload. Malformed JSON is an internal error.
fn parse_payload(body: &Bytes) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body)
        .map_err(|e| ApiError::Internal(format!("failed to parse request body: {e}")))
}
