use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ferrous_doh_domain::DomainError;
use serde_json::json;
use tracing::{debug, error};

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::MalformedQuery(_)
            | DomainError::InvalidAddress(_)
            | DomainError::UnsupportedRequest(_) => {
                debug!(error = %self.0, "Rejected request");
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }

            DomainError::AllUpstreamsFailed { .. } => {
                error!(error = %self.0, attempts = %self.0.attempts_summary(), "Upstream resolution failed");
                (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string())
            }

            _ => {
                error!(error = %self.0, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
