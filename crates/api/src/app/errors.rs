use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use supplierbook_core::DomainError;
use supplierbook_infra::ServiceError;

use crate::app::dto::ErrorBody;

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err.as_domain_error() {
        Some(domain) => json_error(domain_error_status(&domain), err.code(), err.to_string()),
        None => {
            tracing::error!(error = %err, "supplier storage failed");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                err.code(),
                "supplier storage failed",
            )
        }
    }
}

/// Every domain failure is the caller's fault.
pub fn domain_error_status(err: &DomainError) -> StatusCode {
    match err {
        DomainError::Validation(_)
        | DomainError::InvariantViolation(_)
        | DomainError::InvalidId(_) => StatusCode::BAD_REQUEST,
    }
}

/// Body that is not JSON or does not fit `SupplierRequest`.
pub fn json_rejection(rejection: JsonRejection) -> axum::response::Response {
    tracing::debug!(error = %rejection, "rejected request body");
    json_error(StatusCode::BAD_REQUEST, "invalid_body", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(ErrorBody {
            error: code.to_string(),
            message: message.into(),
        }),
    )
        .into_response()
}

pub fn not_found() -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "not_found", "supplier not found")
}
