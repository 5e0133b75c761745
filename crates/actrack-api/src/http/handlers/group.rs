//! Activity group handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use actrack_types::group::{ActivityGroup, CreateGroupRequest, UpdateGroupRequest};

use crate::http::error::AppError;
use crate::http::extractors::json::ApiJson;
use crate::http::response::{self, MessageResponse};
use crate::state::AppState;

const KIND: &str = "Group";

/// GET /api/activity_groups - All groups ordered by position.
pub async fn list_groups(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActivityGroup>>, AppError> {
    Ok(Json(state.group_service.list_groups().await?))
}

/// POST /api/activity_groups - Create a group at the end of the list.
pub async fn create_group(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateGroupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let group = state.group_service.create_group(body).await?;
    Ok(response::created(KIND, group.id))
}

/// PUT /api/activity_groups/{id}
pub async fn update_group(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(body): ApiJson<UpdateGroupRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state.group_service.update_group(id, body).await?;
    Ok(response::updated(KIND))
}

/// DELETE /api/activity_groups/{id}
pub async fn delete_group(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.group_service.delete_group(id).await?;
    Ok(response::deleted(KIND))
}
