//! Activity handlers, including tag assignment.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use actrack_types::activity::{
    ActivityView, CreateActivityRequest, SetActivityTagsRequest, UpdateActivityRequest,
};

use crate::http::error::AppError;
use crate::http::extractors::json::ApiJson;
use crate::http::response::{self, MessageResponse};
use crate::state::AppState;

const KIND: &str = "Activity";

/// GET /api/activities - Activities with category, group and tags.
pub async fn list_activities(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActivityView>>, AppError> {
    Ok(Json(state.activity_service.list_activities().await?))
}

/// POST /api/activities - `group_id` is taken from the category.
pub async fn create_activity(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateActivityRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let activity = state.activity_service.create_activity(body).await?;
    Ok(response::created(KIND, activity.id))
}

/// PUT /api/activities/{id}
pub async fn update_activity(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(body): ApiJson<UpdateActivityRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state.activity_service.update_activity(id, body).await?;
    Ok(response::updated(KIND))
}

/// DELETE /api/activities/{id}
pub async fn delete_activity(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.activity_service.delete_activity(id).await?;
    Ok(response::deleted(KIND))
}

/// PUT /api/activities/{id}/tags - Replace the tag set.
pub async fn set_activity_tags(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(body): ApiJson<SetActivityTagsRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state.activity_service.set_tags(id, &body.tag_ids).await?;
    Ok(Json(MessageResponse::new("Activity tags updated")))
}
