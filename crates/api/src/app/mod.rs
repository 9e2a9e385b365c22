//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: storage selection and `SupplierService` wiring
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: JSON bodies exchanged with clients
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_id_middleware))
                .layer(TraceLayer::new_for_http()),
        )
}
