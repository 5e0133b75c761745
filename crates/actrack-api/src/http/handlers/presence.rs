//! Presence handlers: start, update and stop a group's Rich Presence
//! session, and report whether any session is connected.

use axum::Json;
use axum::extract::State;

use actrack_types::presence::{PresenceDetails, PresenceRequest, PresenceStatus, StopPresenceRequest};

use crate::http::error::AppError;
use crate::http::extractors::json::ApiJson;
use crate::http::response::MessageResponse;
use crate::state::AppState;

fn required_group(group: Option<String>) -> Result<String, AppError> {
    group
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty())
        .ok_or_else(|| AppError::Validation("Group is required".to_string()))
}

fn split_request(body: PresenceRequest) -> Result<(String, PresenceDetails), AppError> {
    let group = required_group(body.group)?;
    let activity_name = body
        .activity_name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| AppError::Validation("activity_name is required".to_string()))?;

    Ok((
        group,
        PresenceDetails {
            activity_name,
            details: body.details.unwrap_or_default(),
            asset_key: body.asset_key,
        },
    ))
}

/// POST /api/presence/start
pub async fn start_presence(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<PresenceRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let (group, details) = split_request(body)?;
    state.presence_service.start(&group, details).await?;
    Ok(Json(MessageResponse::new("Discord presence started")))
}

/// POST /api/presence/update - Keeps the session's start time.
pub async fn update_presence(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<PresenceRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let (group, details) = split_request(body)?;
    state.presence_service.update(&group, details).await?;
    Ok(Json(MessageResponse::new("Discord presence updated")))
}

/// POST /api/presence/stop
pub async fn stop_presence(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<StopPresenceRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let group = required_group(body.group)?;
    state.presence_service.stop(&group).await?;
    Ok(Json(MessageResponse::new("Discord presence stopped")))
}

/// GET /api/presence/status
pub async fn presence_status(State(state): State<AppState>) -> Json<PresenceStatus> {
    Json(PresenceStatus {
        connected: state.presence_service.status().await,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_request_trims_group_and_keeps_asset() {
        let (group, details) = split_request(PresenceRequest {
            group: Some(" study ".to_string()),
            activity_name: Some("Reading".to_string()),
            details: Some("Chapter 3".to_string()),
            asset_key: Some("book".to_string()),
        })
        .unwrap();
        assert_eq!(group, "study");
        assert_eq!(details.activity_name, "Reading");
        assert_eq!(details.asset_key.as_deref(), Some("book"));
    }

    #[test]
    fn split_request_requires_group_and_name() {
        let missing_group = split_request(PresenceRequest {
            activity_name: Some("Reading".to_string()),
            ..Default::default()
        });
        assert!(matches!(missing_group, Err(AppError::Validation(ref m)) if m == "Group is required"));

        let missing_name = split_request(PresenceRequest {
            group: Some("study".to_string()),
            ..Default::default()
        });
        assert!(matches!(missing_name, Err(AppError::Validation(_))));
    }

    #[test]
    fn split_request_defaults_details() {
        let (_, details) = split_request(PresenceRequest {
            group: Some("game".to_string()),
            activity_name: Some("Splatoon 3".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(details.details, "");
        assert_eq!(details.asset_key, None);
    }
}
