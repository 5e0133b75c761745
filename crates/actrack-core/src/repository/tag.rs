//! Tag repository trait definition.

use actrack_types::error::RepositoryError;
use actrack_types::tag::Tag;

pub trait TagRepository: Send + Sync {
    /// Insert a tag; returns it with the assigned id.
    fn create(
        &self,
        tag: &Tag,
    ) -> impl std::future::Future<Output = Result<Tag, RepositoryError>> + Send;

    fn get_by_id(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<Tag>, RepositoryError>> + Send;

    /// All tags ordered by name.
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<Tag>, RepositoryError>> + Send;

    fn update(
        &self,
        tag: &Tag,
    ) -> impl std::future::Future<Output = Result<Tag, RepositoryError>> + Send;

    /// Delete a tag together with its activity links.
    fn delete(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
