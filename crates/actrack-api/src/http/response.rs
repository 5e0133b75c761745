//! Success response bodies.
//!
//! Lists are returned as bare JSON arrays; mutations answer with a short
//! message, plus the new id on create:
//! ```json
//! { "message": "Tag created", "id": 7 }
//! ```

use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

/// Acknowledgement for a mutation.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: None,
        }
    }
}

/// 201 `{message: "<Kind> created", id}`.
pub fn created(kind: &str, id: i64) -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("{kind} created"),
            id: Some(id),
        }),
    )
}

/// 200 `{message: "<Kind> updated"}`.
pub fn updated(kind: &str) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!("{kind} updated")))
}

/// 200 `{message: "<Kind> deleted"}`.
pub fn deleted(kind: &str) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!("{kind} deleted")))
}
