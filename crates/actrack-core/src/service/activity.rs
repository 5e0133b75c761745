//! Activity management service.

use actrack_types::activity::{
    Activity, ActivityUnit, ActivityView, CreateActivityRequest, UpdateActivityRequest,
};
use actrack_types::error::{RepositoryError, ResourceError};

use crate::repository::activity::ActivityRepository;
use crate::repository::category::CategoryRepository;
use crate::service::{optional_text, repo_err, required_text};

const KIND: &str = "Activity";

pub struct ActivityService<A: ActivityRepository, C: CategoryRepository> {
    repo: A,
    categories: C,
}

impl<A: ActivityRepository, C: CategoryRepository> ActivityService<A, C> {
    pub fn new(repo: A, categories: C) -> Self {
        Self { repo, categories }
    }

    /// All activities with category, group and tags attached.
    pub async fn list_activities(&self) -> Result<Vec<ActivityView>, ResourceError> {
        self.repo.list_views().await.map_err(repo_err(KIND))
    }

    pub async fn get_activity(&self, id: i64) -> Result<Activity, ResourceError> {
        self.repo
            .get_by_id(id)
            .await
            .map_err(repo_err(KIND))?
            .ok_or(ResourceError::NotFound(KIND))
    }

    /// Create an activity. Its `group_id` is copied from the category.
    pub async fn create_activity(
        &self,
        request: CreateActivityRequest,
    ) -> Result<Activity, ResourceError> {
        let name = required_text(request.name, "name")?;
        let category_id = request
            .category_id
            .ok_or_else(|| ResourceError::Validation("category_id is required".to_string()))?;
        let unit = parse_unit(request.unit)?;
        let group_id = self.category_group(category_id).await?;

        let activity = Activity {
            id: 0,
            name,
            category_id,
            group_id,
            unit,
            asset_key: optional_text(request.asset_key),
            is_active: true,
            created_at: chrono::Utc::now(),
        };

        let activity = self.repo.create(&activity).await.map_err(repo_err(KIND))?;

        if let Some(tag_ids) = request.tag_ids {
            self.set_tags(activity.id, &tag_ids).await?;
        }

        tracing::info!(id = activity.id, name = %activity.name, "activity created");
        Ok(activity)
    }

    /// Apply a partial update. Moving to another category re-derives `group_id`.
    pub async fn update_activity(
        &self,
        id: i64,
        request: UpdateActivityRequest,
    ) -> Result<Activity, ResourceError> {
        let mut activity = self.get_activity(id).await?;

        if request.name.is_some() {
            activity.name = required_text(request.name, "name")?;
        }
        if let Some(category_id) = request.category_id {
            activity.group_id = self.category_group(category_id).await?;
            activity.category_id = category_id;
        }
        if request.unit.is_some() {
            activity.unit = parse_unit(request.unit)?;
        }
        if request.asset_key.is_some() {
            activity.asset_key = optional_text(request.asset_key);
        }
        if let Some(is_active) = request.is_active {
            activity.is_active = is_active;
        }

        self.repo.update(&activity).await.map_err(repo_err(KIND))
    }

    /// Delete an activity that has no records.
    pub async fn delete_activity(&self, id: i64) -> Result<(), ResourceError> {
        match self.repo.delete(id).await {
            Ok(()) => Ok(()),
            Err(RepositoryError::ForeignKey(_)) => Err(ResourceError::Conflict(
                "Activity still has records".to_string(),
            )),
            Err(e) => Err(repo_err(KIND)(e)),
        }
    }

    /// Replace the tag set of an activity.
    pub async fn set_tags(&self, id: i64, tag_ids: &[i64]) -> Result<(), ResourceError> {
        let mut tag_ids = tag_ids.to_vec();
        tag_ids.sort_unstable();
        tag_ids.dedup();

        match self.repo.set_tags(id, &tag_ids).await {
            Ok(()) => Ok(()),
            Err(RepositoryError::ForeignKey(_)) => Err(ResourceError::Validation(
                "tag_ids contains an unknown tag".to_string(),
            )),
            Err(e) => Err(repo_err(KIND)(e)),
        }
    }

    async fn category_group(&self, category_id: i64) -> Result<i64, ResourceError> {
        self.categories
            .get_by_id(category_id)
            .await
            .map_err(repo_err("Category"))?
            .map(|c| c.group_id)
            .ok_or_else(|| {
                ResourceError::Validation(format!("category {category_id} does not exist"))
            })
    }
}

/// Parse an optional unit string; blank means "no unit".
fn parse_unit(unit: Option<String>) -> Result<Option<ActivityUnit>, ResourceError> {
    match unit.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(u) => u.parse().map(Some).map_err(ResourceError::Validation),
    }
}
