//! JSON body extractor whose rejections use the API error shape.

use axum::extract::FromRequest;

use crate::http::error::AppError;

/// Like [`axum::Json`], but a missing or malformed body becomes a 400
/// `{"error": ...}` instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
