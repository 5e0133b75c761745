//! Record repository trait definition.

use actrack_types::error::RepositoryError;
use actrack_types::record::{Record, RecordView};

pub trait RecordRepository: Send + Sync {
    /// Insert a record; returns it with the assigned id.
    fn create(
        &self,
        record: &Record,
    ) -> impl std::future::Future<Output = Result<Record, RepositoryError>> + Send;

    fn get_by_id(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<Record>, RepositoryError>> + Send;

    /// All records joined with activity, category and group, newest first.
    fn list_views(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<RecordView>, RepositoryError>> + Send;

    fn update(
        &self,
        record: &Record,
    ) -> impl std::future::Future<Output = Result<Record, RepositoryError>> + Send;

    fn delete(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
