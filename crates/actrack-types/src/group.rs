use serde::{Deserialize, Serialize};

/// A top-level activity group ("study", "game", "workout").
///
/// Groups organize categories and double as the identity of a presence
/// session: the presence credential (`client_id`) is stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityGroup {
    pub id: i64,
    /// Unique display name. Presence requests address groups by this name.
    pub name: String,
    /// Presence application id used when broadcasting activities of this group.
    pub client_id: Option<String>,
    /// Icon identifier understood by the frontend.
    pub icon_name: Option<String>,
    pub icon_color: Option<String>,
    /// Ordering position (ascending) in group listings.
    pub position: i64,
}

impl ActivityGroup {
    /// The stored presence credential, ignoring blank values.
    pub fn credential(&self) -> Option<&str> {
        self.client_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

/// Request body for creating a group. `name` is required; the service
/// rejects a missing or blank name with a validation error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateGroupRequest {
    pub name: Option<String>,
    pub client_id: Option<String>,
    pub icon_name: Option<String>,
    pub icon_color: Option<String>,
}

/// Partial update for a group. Absent fields are left untouched; empty
/// strings clear the optional text fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateGroupRequest {
    pub name: Option<String>,
    pub client_id: Option<String>,
    pub icon_name: Option<String>,
    pub icon_color: Option<String>,
    pub position: Option<i64>,
}
