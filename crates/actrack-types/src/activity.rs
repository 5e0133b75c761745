use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::tag::TagSummary;

/// How records of an activity are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityUnit {
    /// Discrete repetitions (push-ups, problems solved).
    Count,
    /// Elapsed time, tracked with the stopwatch.
    Minutes,
}

impl fmt::Display for ActivityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityUnit::Count => write!(f, "count"),
            ActivityUnit::Minutes => write!(f, "minutes"),
        }
    }
}

impl FromStr for ActivityUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "count" => Ok(ActivityUnit::Count),
            "minutes" => Ok(ActivityUnit::Minutes),
            other => Err(format!("invalid unit: '{other}'")),
        }
    }
}

/// A trackable activity.
///
/// `group_id` is denormalized from the category so activities can be listed
/// per group without a join; it is rewritten whenever `category_id` changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub group_id: i64,
    pub unit: Option<ActivityUnit>,
    /// Image key registered with the presence application.
    pub asset_key: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Activity row as returned by the list endpoint, joined with its category,
/// group and tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityView {
    pub id: i64,
    pub name: String,
    pub unit: Option<ActivityUnit>,
    pub category_id: i64,
    pub category_name: Option<String>,
    pub group_id: i64,
    /// Group name; the frontend passes it back as the presence `group`.
    pub category_group: Option<String>,
    pub asset_key: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
    pub tags: Vec<TagSummary>,
}

/// Request body for creating an activity. `unit` arrives as a string so an
/// unknown value can be reported as a validation error instead of a
/// deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateActivityRequest {
    pub name: Option<String>,
    pub category_id: Option<i64>,
    pub unit: Option<String>,
    pub asset_key: Option<String>,
    pub tag_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateActivityRequest {
    pub name: Option<String>,
    pub category_id: Option<i64>,
    pub unit: Option<String>,
    pub asset_key: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetActivityTagsRequest {
    #[serde(default)]
    pub tag_ids: Vec<i64>,
}
