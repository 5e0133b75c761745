//! Record handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use actrack_types::record::{CreateRecordRequest, RecordView, UpdateRecordRequest};

use crate::http::error::AppError;
use crate::http::extractors::json::ApiJson;
use crate::http::response::{self, MessageResponse};
use crate::state::AppState;

const KIND: &str = "Record";

/// GET /api/records - Newest first.
pub async fn list_records(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecordView>>, AppError> {
    Ok(Json(state.record_service.list_records().await?))
}

/// POST /api/records
pub async fn create_record(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateRecordRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let record = state.record_service.create_record(body).await?;
    tracing::info!(id = record.id, activity_id = record.activity_id, value = record.value, "record created");
    Ok(response::created(KIND, record.id))
}

/// PUT /api/records/{id}
pub async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(body): ApiJson<UpdateRecordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state.record_service.update_record(id, body).await?;
    Ok(response::updated(KIND))
}

/// DELETE /api/records/{id}
pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.record_service.delete_record(id).await?;
    Ok(response::deleted(KIND))
}
