use crate::errors::ApiError;
use axum::http::{Method, StatusCode};
use ferrous_doh_domain::DomainError;

pub async fn unsupported_method(method: Method) -> ApiError {
    ApiError(DomainError::UnsupportedRequest(format!(
        "method {} not supported",
        method
    )))
}

pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
