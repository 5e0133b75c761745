//! Category repository trait definition.

use actrack_types::category::Category;
use actrack_types::error::RepositoryError;

pub trait CategoryRepository: Send + Sync {
    /// Insert a category; returns it with the assigned id.
    fn create(
        &self,
        category: &Category,
    ) -> impl std::future::Future<Output = Result<Category, RepositoryError>> + Send;

    fn get_by_id(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<Category>, RepositoryError>> + Send;

    /// All categories ordered by position, with the group name filled in.
    fn list(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Category>, RepositoryError>> + Send;

    /// Update a category. Activities under it follow a `group_id` change.
    fn update(
        &self,
        category: &Category,
    ) -> impl std::future::Future<Output = Result<Category, RepositoryError>> + Send;

    /// Delete a category. Fails with `ForeignKey` while activities reference it.
    fn delete(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    fn max_position(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<i64>, RepositoryError>> + Send;
}
