//! Category handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use actrack_types::category::{Category, CreateCategoryRequest, UpdateCategoryRequest};

use crate::http::error::AppError;
use crate::http::extractors::json::ApiJson;
use crate::http::response::{self, MessageResponse};
use crate::state::AppState;

const KIND: &str = "Category";

/// GET /api/categories - All categories with their group name.
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, AppError> {
    Ok(Json(state.category_service.list_categories().await?))
}

/// POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let category = state.category_service.create_category(body).await?;
    Ok(response::created(KIND, category.id))
}

/// PUT /api/categories/{id} - Moving a category moves its activities too.
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(body): ApiJson<UpdateCategoryRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state.category_service.update_category(id, body).await?;
    Ok(response::updated(KIND))
}

/// DELETE /api/categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.category_service.delete_category(id).await?;
    Ok(response::deleted(KIND))
}
