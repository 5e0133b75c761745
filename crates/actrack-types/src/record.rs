use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::activity::ActivityUnit;

/// One logged measurement for an activity (minutes spent or count done).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub activity_id: i64,
    pub value: f64,
    pub created_at: DateTime<Utc>,
}

/// Record row joined with its activity, category and group for listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordView {
    pub id: i64,
    pub activity_id: i64,
    pub value: f64,
    pub created_at: DateTime<Utc>,
    pub unit: Option<ActivityUnit>,
    pub activity_name: Option<String>,
    pub activity_category: Option<String>,
    pub activity_category_id: Option<i64>,
    pub activity_group: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRecordRequest {
    pub activity_id: Option<i64>,
    pub value: Option<f64>,
    /// Defaults to the current time.
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRecordRequest {
    pub value: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
}
