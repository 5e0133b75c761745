//! Activity repository trait definition.

use actrack_types::activity::{Activity, ActivityView};
use actrack_types::error::RepositoryError;

pub trait ActivityRepository: Send + Sync {
    /// Insert an activity; returns it with the assigned id.
    fn create(
        &self,
        activity: &Activity,
    ) -> impl std::future::Future<Output = Result<Activity, RepositoryError>> + Send;

    fn get_by_id(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<Activity>, RepositoryError>> + Send;

    /// All activities joined with category, group and tags, ordered by id.
    fn list_views(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ActivityView>, RepositoryError>> + Send;

    fn update(
        &self,
        activity: &Activity,
    ) -> impl std::future::Future<Output = Result<Activity, RepositoryError>> + Send;

    /// Delete an activity and its tag links. Fails with `ForeignKey` while
    /// records reference it.
    fn delete(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Replace the activity's tag set. Fails with `ForeignKey` when a tag id
    /// does not exist; the previous set is kept in that case.
    fn set_tags(
        &self,
        id: i64,
        tag_ids: &[i64],
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
