//! HTTP mapping for domain errors

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::domain::DomainError;

impl DomainError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DomainError::RateUnavailable(_) => StatusCode::BAD_GATEWAY,
            DomainError::Database(_) | DomainError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!("Request failed: {}", self);

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
