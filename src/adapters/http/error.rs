//! HTTP error mapping.
//!
//! Domain error codes are mapped to HTTP statuses exactly once, here.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// JSON error body returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// API error wrapper converting domain errors to HTTP responses.
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(DomainError::from(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.0.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat
            | ErrorCode::UnknownPeriod
            | ErrorCode::DomainUnavailable => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::OrderNotFound
            | ErrorCode::DomainRecordNotFound
            | ErrorCode::PaymentNotFound => StatusCode::NOT_FOUND,
            ErrorCode::InvalidStateTransition | ErrorCode::ReconciliationAnomaly => {
                StatusCode::CONFLICT
            }
            ErrorCode::ExternalServiceError => StatusCode::BAD_GATEWAY,
            ErrorCode::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::ProvisioningFailed
            | ErrorCode::DatabaseError
            | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorResponse::new(self.0.code.to_string(), self.0.message.clone());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_for(code: ErrorCode) -> StatusCode {
        ApiError(DomainError::new(code, "test"))
            .into_response()
            .status()
    }

    #[test]
    fn validation_errors_map_to_400() {
        assert_eq!(status_for(ErrorCode::ValidationFailed), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::UnknownPeriod), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::DomainUnavailable), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn ownership_errors_map_to_401_and_403() {
        assert_eq!(status_for(ErrorCode::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(ErrorCode::Forbidden), StatusCode::FORBIDDEN);
    }

    #[test]
    fn missing_resources_map_to_404() {
        assert_eq!(status_for(ErrorCode::OrderNotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(ErrorCode::DomainRecordNotFound),
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_for(ErrorCode::PaymentNotFound), StatusCode::NOT_FOUND);
    }

    #[test]
    fn degraded_dependencies_map_to_502_and_503() {
        assert_eq!(
            status_for(ErrorCode::ExternalServiceError),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for(ErrorCode::NotConfigured),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn internal_errors_map_to_500() {
        assert_eq!(
            status_for(ErrorCode::DatabaseError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(ErrorCode::InternalError),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
