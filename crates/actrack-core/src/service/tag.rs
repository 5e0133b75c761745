//! Tag management service.

use actrack_types::error::ResourceError;
use actrack_types::tag::{CreateTagRequest, DEFAULT_TAG_COLOR, Tag, UpdateTagRequest};

use crate::repository::tag::TagRepository;
use crate::service::{optional_text, repo_err, required_text};

const KIND: &str = "Tag";

pub struct TagService<T: TagRepository> {
    repo: T,
}

impl<T: TagRepository> TagService<T> {
    pub fn new(repo: T) -> Self {
        Self { repo }
    }

    pub async fn list_tags(&self) -> Result<Vec<Tag>, ResourceError> {
        self.repo.list().await.map_err(repo_err(KIND))
    }

    pub async fn get_tag(&self, id: i64) -> Result<Tag, ResourceError> {
        self.repo
            .get_by_id(id)
            .await
            .map_err(repo_err(KIND))?
            .ok_or(ResourceError::NotFound(KIND))
    }

    /// Create a tag; a missing color becomes white.
    pub async fn create_tag(&self, request: CreateTagRequest) -> Result<Tag, ResourceError> {
        let name = required_text(request.name, "Tag name")?;
        let color = optional_text(request.color).unwrap_or_else(|| DEFAULT_TAG_COLOR.to_string());

        let tag = Tag { id: 0, name, color };
        self.repo.create(&tag).await.map_err(repo_err(KIND))
    }

    pub async fn update_tag(&self, id: i64, request: UpdateTagRequest) -> Result<Tag, ResourceError> {
        let mut tag = self.get_tag(id).await?;

        if request.name.is_some() {
            tag.name = required_text(request.name, "Tag name")?;
        }
        if request.color.is_some() {
            tag.color =
                optional_text(request.color).unwrap_or_else(|| DEFAULT_TAG_COLOR.to_string());
        }

        self.repo.update(&tag).await.map_err(repo_err(KIND))
    }

    /// Delete a tag; activities lose the tag.
    pub async fn delete_tag(&self, id: i64) -> Result<(), ResourceError> {
        self.repo.delete(id).await.map_err(repo_err(KIND))
    }
}
