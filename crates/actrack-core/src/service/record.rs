//! Record logging service.

use actrack_types::error::ResourceError;
use actrack_types::record::{CreateRecordRequest, Record, RecordView, UpdateRecordRequest};

use crate::repository::activity::ActivityRepository;
use crate::repository::record::RecordRepository;
use crate::service::repo_err;

const KIND: &str = "Record";

pub struct RecordService<R: RecordRepository, A: ActivityRepository> {
    repo: R,
    activities: A,
}

impl<R: RecordRepository, A: ActivityRepository> RecordService<R, A> {
    pub fn new(repo: R, activities: A) -> Self {
        Self { repo, activities }
    }

    /// All records, newest first, with activity context attached.
    pub async fn list_records(&self) -> Result<Vec<RecordView>, ResourceError> {
        self.repo.list_views().await.map_err(repo_err(KIND))
    }

    pub async fn get_record(&self, id: i64) -> Result<Record, ResourceError> {
        self.repo
            .get_by_id(id)
            .await
            .map_err(repo_err(KIND))?
            .ok_or(ResourceError::NotFound(KIND))
    }

    /// Log a value against an activity. `created_at` defaults to now.
    pub async fn create_record(
        &self,
        request: CreateRecordRequest,
    ) -> Result<Record, ResourceError> {
        let (Some(activity_id), Some(value)) = (request.activity_id, request.value) else {
            return Err(ResourceError::Validation(
                "activity_id and value are required".to_string(),
            ));
        };
        validate_value(value)?;

        let exists = self
            .activities
            .get_by_id(activity_id)
            .await
            .map_err(repo_err("Activity"))?
            .is_some();
        if !exists {
            return Err(ResourceError::Validation(format!(
                "activity {activity_id} does not exist"
            )));
        }

        let record = Record {
            id: 0,
            activity_id,
            value,
            created_at: request.created_at.unwrap_or_else(chrono::Utc::now),
        };

        let record = self.repo.create(&record).await.map_err(repo_err(KIND))?;
        tracing::debug!(id = record.id, activity_id, value, "record created");
        Ok(record)
    }

    /// Update the value and/or timestamp of a record.
    pub async fn update_record(
        &self,
        id: i64,
        request: UpdateRecordRequest,
    ) -> Result<Record, ResourceError> {
        let mut record = self.get_record(id).await?;

        if let Some(value) = request.value {
            validate_value(value)?;
            record.value = value;
        }
        if let Some(created_at) = request.created_at {
            record.created_at = created_at;
        }

        self.repo.update(&record).await.map_err(repo_err(KIND))
    }

    pub async fn delete_record(&self, id: i64) -> Result<(), ResourceError> {
        self.repo.delete(id).await.map_err(repo_err(KIND))
    }
}

fn validate_value(value: f64) -> Result<(), ResourceError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ResourceError::Validation("value must be a finite number".to_string()))
    }
}
