//! Application error type mapping to HTTP status codes and envelope format.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use hireboard_core::fetch::orchestrator::ERROR_NOTIFICATION_PREFIX;
use hireboard_types::error::{ListingError, RepositoryError};

use crate::http::response::ApiMeta;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Listing query failures.
    Listing(ListingError),
    /// Provider storage failures.
    Repository(RepositoryError),
    /// Validation error.
    Validation(String),
}

impl From<ListingError> for AppError {
    fn from(e: ListingError) -> Self {
        AppError::Listing(e)
    }
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        AppError::Repository(e)
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Listing(ListingError::Timeout) => (
                StatusCode::GATEWAY_TIMEOUT,
                "LISTING_TIMEOUT",
                self.listing_message(),
            ),
            AppError::Listing(ListingError::InvalidRecord(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INVALID_LISTING_RECORD",
                self.listing_message(),
            ),
            AppError::Listing(ListingError::Backend(_)) => {
                (StatusCode::BAD_GATEWAY, "LISTING_ERROR", self.listing_message())
            }
            AppError::Repository(RepositoryError::NotFound) => (
                StatusCode::NOT_FOUND,
                "PROVIDER_NOT_FOUND",
                "Provider not found".to_string(),
            ),
            AppError::Repository(RepositoryError::Invalid(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Repository(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "REPOSITORY_ERROR",
                e.to_string(),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        }
    }

    fn listing_message(&self) -> String {
        match self {
            AppError::Listing(e) => format!("{ERROR_NOTIFICATION_PREFIX}: {e}"),
            _ => String::new(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        if status.is_server_error() {
            tracing::error!(code, message = %message, "request failed");
        }

        let body = json!({
            "data": null,
            "meta": ApiMeta::new(uuid::Uuid::now_v7().to_string(), 0),
            "errors": [{
                "code": code,
                "message": message,
            }]
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_errors_map_to_gateway_statuses() {
        let (status, code, message) = AppError::from(ListingError::Timeout).parts();
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(code, "LISTING_TIMEOUT");
        assert_eq!(message, "Error fetching developers: timeout");

        let (status, _, message) =
            AppError::from(ListingError::Backend("connection reset".to_string())).parts();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(message, "Error fetching developers: connection reset");
    }

    #[test]
    fn repository_errors_map_to_client_statuses() {
        let (status, code, _) = AppError::from(RepositoryError::NotFound).parts();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, "PROVIDER_NOT_FOUND");

        let (status, _, message) =
            AppError::from(RepositoryError::Invalid("name cannot be empty".to_string())).parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "name cannot be empty");
    }

    #[test]
    fn into_response_sets_status() {
        let response = AppError::Validation("bad price".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
