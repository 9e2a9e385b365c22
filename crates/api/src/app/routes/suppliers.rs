use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use supplierbook_core::SupplierId;

use crate::app::dto::SupplierRequest;
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_supplier).get(list_suppliers))
        .route("/:id", get(get_supplier).put(update_supplier))
}

pub async fn create_supplier(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<SupplierRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(v) => v,
        Err(rejection) => return errors::json_rejection(rejection),
    };

    match services.suppliers().create(body).await {
        Ok(created) => {
            let location = format!("/suppliers/{}", created.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(created),
            )
                .into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn update_supplier(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<SupplierRequest>, JsonRejection>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Json(body) = match body {
        Ok(v) => v,
        Err(rejection) => return errors::json_rejection(rejection),
    };

    match services.suppliers().update(id, body).await {
        Ok(Some(updated)) => (StatusCode::OK, Json(updated)).into_response(),
        Ok(None) => errors::not_found(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn list_suppliers(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.suppliers().list().await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn get_supplier(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.suppliers().get_by_id(id).await {
        Ok(Some(found)) => (StatusCode::OK, Json(found)).into_response(),
        Ok(None) => errors::not_found(),
        Err(e) => errors::service_error_to_response(e),
    }
}

fn parse_id(raw: &str) -> Result<SupplierId, axum::response::Response> {
    raw.parse::<SupplierId>().map_err(|e| {
        tracing::debug!(error = %e, "rejected supplier id");
        errors::json_error(errors::domain_error_status(&e), "invalid_id", "invalid supplier id")
    })
}
