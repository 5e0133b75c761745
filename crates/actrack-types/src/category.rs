use serde::{Deserialize, Serialize};

/// A category of activities inside a group ("Language", "Math").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub group_id: i64,
    /// Display name of the owning group, filled in by list queries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub position: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
    pub group_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub group_id: Option<i64>,
    pub position: Option<i64>,
}
