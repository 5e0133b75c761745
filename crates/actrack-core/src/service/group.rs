//! Activity group management service.

use actrack_types::error::{RepositoryError, ResourceError};
use actrack_types::group::{ActivityGroup, CreateGroupRequest, UpdateGroupRequest};

use crate::repository::group::GroupRepository;
use crate::service::{optional_text, repo_err, required_text};

const KIND: &str = "Group";

pub struct GroupService<G: GroupRepository> {
    repo: G,
}

impl<G: GroupRepository> GroupService<G> {
    pub fn new(repo: G) -> Self {
        Self { repo }
    }

    /// All groups in display order.
    pub async fn list_groups(&self) -> Result<Vec<ActivityGroup>, ResourceError> {
        self.repo.list().await.map_err(repo_err(KIND))
    }

    pub async fn get_group(&self, id: i64) -> Result<ActivityGroup, ResourceError> {
        self.repo
            .get_by_id(id)
            .await
            .map_err(repo_err(KIND))?
            .ok_or(ResourceError::NotFound(KIND))
    }

    /// Create a group, appending it after the last position.
    pub async fn create_group(
        &self,
        request: CreateGroupRequest,
    ) -> Result<ActivityGroup, ResourceError> {
        let name = required_text(request.name, "name")?;
        let position = self
            .repo
            .max_position()
            .await
            .map_err(repo_err(KIND))?
            .map_or(0, |p| p + 1);

        let group = ActivityGroup {
            id: 0,
            name,
            client_id: optional_text(request.client_id),
            icon_name: optional_text(request.icon_name),
            icon_color: optional_text(request.icon_color),
            position,
        };

        let group = self.repo.create(&group).await.map_err(repo_err(KIND))?;
        tracing::info!(id = group.id, name = %group.name, "group created");
        Ok(group)
    }

    /// Apply a partial update. Changing `client_id` does not affect a
    /// presence session that is already connected.
    pub async fn update_group(
        &self,
        id: i64,
        request: UpdateGroupRequest,
    ) -> Result<ActivityGroup, ResourceError> {
        let mut group = self.get_group(id).await?;

        if request.name.is_some() {
            group.name = required_text(request.name, "name")?;
        }
        if request.client_id.is_some() {
            group.client_id = optional_text(request.client_id);
        }
        if request.icon_name.is_some() {
            group.icon_name = optional_text(request.icon_name);
        }
        if request.icon_color.is_some() {
            group.icon_color = optional_text(request.icon_color);
        }
        if let Some(position) = request.position {
            group.position = position;
        }

        self.repo.update(&group).await.map_err(repo_err(KIND))
    }

    /// Delete a group that no longer has categories or activities.
    pub async fn delete_group(&self, id: i64) -> Result<(), ResourceError> {
        match self.repo.delete(id).await {
            Ok(()) => {
                tracing::info!(id, "group deleted");
                Ok(())
            }
            Err(RepositoryError::ForeignKey(_)) => Err(ResourceError::Conflict(
                "Group still has categories or activities".to_string(),
            )),
            Err(e) => Err(repo_err(KIND)(e)),
        }
    }
}
