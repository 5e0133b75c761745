//! Application error type mapping to HTTP status codes.
//!
//! Every error body has the shape `{"error": "<message>"}`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use actrack_types::error::{PresenceError, ResourceError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Presence session errors.
    Presence(PresenceError),
    /// CRUD resource errors.
    Resource(ResourceError),
    /// Malformed request body or missing field.
    Validation(String),
}

impl From<PresenceError> for AppError {
    fn from(e: PresenceError) -> Self {
        AppError::Presence(e)
    }
}

impl From<ResourceError> for AppError {
    fn from(e: ResourceError) -> Self {
        AppError::Resource(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Presence(
                PresenceError::Configuration(_)
                | PresenceError::Conflict(_)
                | PresenceError::NotFound(_),
            ) => StatusCode::BAD_REQUEST,
            AppError::Presence(PresenceError::ExternalService(_) | PresenceError::Storage(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Resource(ResourceError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Resource(ResourceError::Validation(_)) => StatusCode::BAD_REQUEST,
            AppError::Resource(ResourceError::Conflict(_)) => StatusCode::CONFLICT,
            AppError::Resource(ResourceError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::Presence(e) => e.to_string(),
            AppError::Resource(e) => e.to_string(),
            AppError::Validation(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %message, "request rejected");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_errors_map_to_client_or_server_status() {
        assert_eq!(
            AppError::from(PresenceError::no_credential("study")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(PresenceError::session_active()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(PresenceError::no_manager()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(PresenceError::ExternalService("pipe closed".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn resource_errors_map_to_rest_status() {
        assert_eq!(
            AppError::from(ResourceError::NotFound("Tag")).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(ResourceError::Conflict("dup".into())).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(ResourceError::Validation("bad".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(ResourceError::Storage("disk".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn message_is_surfaced_verbatim() {
        let err = AppError::from(PresenceError::no_active_session());
        assert_eq!(err.message(), "No active Discord session");
        let err = AppError::from(ResourceError::NotFound("Record"));
        assert_eq!(err.message(), "Record not found");
    }
}
