//! HTTP API server for the in-memory order service.
//!
//! Exposes order CRUD endpoints over an [`OrderService`](domain::OrderService),
//! with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use domain::OrderService;
use metrics_exporter_prometheus::PrometheusHandle;
use order_store::OrderStore;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::orders::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: OrderStore + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health::<S>))
        .route("/metrics", get(routes::system::metrics::<S>))
        .route(
            "/orders",
            get(routes::orders::list::<S>).post(routes::orders::create::<S>),
        )
        .route(
            "/orders/{id}",
            get(routes::orders::get::<S>)
                .put(routes::orders::replace::<S>)
                .patch(routes::orders::merge::<S>)
                .delete(routes::orders::delete::<S>),
        )
        .with_state(state)
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state around an order store.
pub fn create_state<S: OrderStore + 'static>(
    store: S,
    metrics_handle: PrometheusHandle,
) -> Arc<AppState<S>> {
    Arc::new(AppState {
        order_service: OrderService::new(store),
        metrics_handle,
    })
}
