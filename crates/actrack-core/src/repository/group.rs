//! Group repository trait definition.

use actrack_types::error::RepositoryError;
use actrack_types::group::ActivityGroup;

/// Repository trait for activity group persistence.
///
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait GroupRepository: Send + Sync {
    /// Insert a group. The `id` of the argument is ignored; the returned
    /// group carries the assigned id.
    fn create(
        &self,
        group: &ActivityGroup,
    ) -> impl std::future::Future<Output = Result<ActivityGroup, RepositoryError>> + Send;

    fn get_by_id(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<ActivityGroup>, RepositoryError>> + Send;

    /// Look a group up by its unique name.
    fn get_by_name(
        &self,
        name: &str,
    ) -> impl std::future::Future<Output = Result<Option<ActivityGroup>, RepositoryError>> + Send;

    /// All groups ordered by position, then id.
    fn list(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ActivityGroup>, RepositoryError>> + Send;

    fn update(
        &self,
        group: &ActivityGroup,
    ) -> impl std::future::Future<Output = Result<ActivityGroup, RepositoryError>> + Send;

    /// Delete a group. Fails with `ForeignKey` while categories or
    /// activities still reference it.
    fn delete(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Highest position in use, or `None` when there are no groups.
    fn max_position(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<i64>, RepositoryError>> + Send;
}
