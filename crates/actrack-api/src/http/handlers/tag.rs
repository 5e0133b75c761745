//! Tag handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use actrack_types::tag::{CreateTagRequest, Tag, UpdateTagRequest};

use crate::http::error::AppError;
use crate::http::extractors::json::ApiJson;
use crate::http::response::{self, MessageResponse};
use crate::state::AppState;

const KIND: &str = "Tag";

pub async fn list_tags(State(state): State<AppState>) -> Result<Json<Vec<Tag>>, AppError> {
    Ok(Json(state.tag_service.list_tags().await?))
}

pub async fn create_tag(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateTagRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let tag = state.tag_service.create_tag(body).await?;
    Ok(response::created(KIND, tag.id))
}

pub async fn update_tag(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(body): ApiJson<UpdateTagRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state.tag_service.update_tag(id, body).await?;
    Ok(response::updated(KIND))
}

/// DELETE /api/tags/{id} - Also drops the tag from every activity.
pub async fn delete_tag(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.tag_service.delete_tag(id).await?;
    Ok(response::deleted(KIND))
}
