//! Category management service.

use actrack_types::category::{Category, CreateCategoryRequest, UpdateCategoryRequest};
use actrack_types::error::{RepositoryError, ResourceError};

use crate::repository::category::CategoryRepository;
use crate::repository::group::GroupRepository;
use crate::service::{repo_err, required_text};

const KIND: &str = "Category";

pub struct CategoryService<C: CategoryRepository, G: GroupRepository> {
    repo: C,
    groups: G,
}

impl<C: CategoryRepository, G: GroupRepository> CategoryService<C, G> {
    pub fn new(repo: C, groups: G) -> Self {
        Self { repo, groups }
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, ResourceError> {
        self.repo.list().await.map_err(repo_err(KIND))
    }

    pub async fn get_category(&self, id: i64) -> Result<Category, ResourceError> {
        self.repo
            .get_by_id(id)
            .await
            .map_err(repo_err(KIND))?
            .ok_or(ResourceError::NotFound(KIND))
    }

    pub async fn create_category(
        &self,
        request: CreateCategoryRequest,
    ) -> Result<Category, ResourceError> {
        let name = required_text(request.name, "name")?;
        let group_id = request
            .group_id
            .ok_or_else(|| ResourceError::Validation("group_id is required".to_string()))?;
        let group = self.require_group(group_id).await?;

        let position = self
            .repo
            .max_position()
            .await
            .map_err(repo_err(KIND))?
            .map_or(0, |p| p + 1);

        let category = Category {
            id: 0,
            name,
            group_id,
            group: Some(group),
            position,
        };

        let category = self.repo.create(&category).await.map_err(repo_err(KIND))?;
        tracing::info!(id = category.id, name = %category.name, "category created");
        Ok(category)
    }

    pub async fn update_category(
        &self,
        id: i64,
        request: UpdateCategoryRequest,
    ) -> Result<Category, ResourceError> {
        let mut category = self.get_category(id).await?;

        if request.name.is_some() {
            category.name = required_text(request.name, "name")?;
        }
        if let Some(group_id) = request.group_id {
            category.group = Some(self.require_group(group_id).await?);
            category.group_id = group_id;
        }
        if let Some(position) = request.position {
            category.position = position;
        }

        self.repo.update(&category).await.map_err(repo_err(KIND))
    }

    /// Delete a category that no longer has activities.
    pub async fn delete_category(&self, id: i64) -> Result<(), ResourceError> {
        match self.repo.delete(id).await {
            Ok(()) => Ok(()),
            Err(RepositoryError::ForeignKey(_)) => Err(ResourceError::Conflict(
                "Category still has activities".to_string(),
            )),
            Err(e) => Err(repo_err(KIND)(e)),
        }
    }

    /// Resolve a referenced group, returning its name.
    async fn require_group(&self, group_id: i64) -> Result<String, ResourceError> {
        self.groups
            .get_by_id(group_id)
            .await
            .map_err(repo_err("Group"))?
            .map(|g| g.name)
            .ok_or_else(|| ResourceError::Validation(format!("group {group_id} does not exist")))
    }
}
