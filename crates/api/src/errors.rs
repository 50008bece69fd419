use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dnsmasq_manager_domain::DomainError;
use serde_json::json;
use tracing::error;

pub enum ApiError {
    Domain(DomainError),
    BadRequest(String),
    NotFound(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),

            ApiError::Domain(err @ DomainError::DuplicateEntry { .. }) => {
                (StatusCode::CONFLICT, err.to_string())
            }

            ApiError::Domain(DomainError::InvalidHost(errors)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, errors.to_string())
            }

            ApiError::Domain(err) => {
                error!(error = %err, "Static hosts request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
