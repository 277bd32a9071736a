//! HTTP API server for the guestlist system.
//!
//! Translates JSON requests into guestlist service calls, validates field
//! formats at the boundary and maps domain errors to HTTP responses.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post, put};
use domain::GuestlistService;
use guest_store::GuestlistStore;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: GuestlistStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check::<S>))
        .route("/guest_list", get(routes::guest_list::list::<S>))
        .route("/guest_list/{name}", post(routes::guest_list::add::<S>))
        .route("/guests", get(routes::guests::list::<S>))
        .route(
            "/guests/{name}",
            put(routes::guests::check_in::<S>).delete(routes::guests::check_out::<S>),
        )
        .route("/seats_empty", get(routes::seats::empty::<S>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the shared application state around a store.
pub fn create_default_state<S: GuestlistStore>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState {
        service: GuestlistService::new(store),
    })
}
