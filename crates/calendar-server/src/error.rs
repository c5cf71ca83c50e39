use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use calendar_core::ValidationError;
use calendar_store::StoreError;

pub const NOT_FOUND_MESSAGE: &str = "The event doesn't exist!";

/// Errors surfaced to HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("malformed request: {0}")]
    BadRequest(String),

    #[error("The event doesn't exist!")]
    NotFound,

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => ApiError::NotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            // 400 bodies name the offending field, e.g. {"message": {"date": "..."}}
            ApiError::Validation(e) => {
                tracing::warn!(field = e.field(), "rejected request: {e}");
                json!({ "message": { e.field(): e.message() } })
            }
            ApiError::BadRequest(detail) => {
                tracing::warn!("rejected request: {detail}");
                json!({ "message": detail })
            }
            ApiError::NotFound => json!({ "message": NOT_FOUND_MESSAGE }),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "request failed");
                json!({ "message": "Internal server error" })
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_not_found_maps_to_404() {
        let err = ApiError::from(StoreError::NotFound("event 1".into()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), NOT_FOUND_MESSAGE);
    }

    #[test]
    fn store_failure_maps_to_500() {
        let err = ApiError::from(StoreError::Database("disk I/O error".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_maps_to_400() {
        let err = ApiError::from(ValidationError::MissingField {
            field: "event",
            message: "The event name is required!".into(),
        });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
