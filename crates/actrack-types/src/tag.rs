use serde::{Deserialize, Serialize};

/// Color assigned to tags created without one.
pub const DEFAULT_TAG_COLOR: &str = "#ffffff";

/// A free-form label attached to activities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub color: String,
}

/// Tag as embedded in activity listings.
pub type TagSummary = Tag;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTagRequest {
    pub name: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTagRequest {
    pub name: Option<String>,
    pub color: Option<String>,
}
