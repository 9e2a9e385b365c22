use axum::Router;

pub mod suppliers;
pub mod system;

/// Router for all supplier endpoints.
pub fn router() -> Router {
    Router::new().nest("/suppliers", suppliers::router())
}
