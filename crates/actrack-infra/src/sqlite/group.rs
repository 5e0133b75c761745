//! SQLite activity group repository implementation.
//!
//! Implements `GroupRepository` from `actrack-core` using sqlx with split read/write pools.

use actrack_core::repository::group::GroupRepository;
use actrack_types::error::RepositoryError;
use actrack_types::group::ActivityGroup;
use sqlx::Row;

use super::pool::DatabasePool;
use super::{query_error, write_error};

const GROUP_COLUMNS: &str = "id, name, client_id, icon_name, icon_color, position";

/// SQLite-backed implementation of `GroupRepository`.
pub struct SqliteGroupRepository {
    pool: DatabasePool,
}

impl SqliteGroupRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn group_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<ActivityGroup, sqlx::Error> {
    Ok(ActivityGroup {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        client_id: row.try_get("client_id")?,
        icon_name: row.try_get("icon_name")?,
        icon_color: row.try_get("icon_color")?,
        position: row.try_get("position")?,
    })
}

fn conflict_message(group: &ActivityGroup) -> String {
    format!(
        "group name '{}' or its client id is already in use",
        group.name
    )
}

impl GroupRepository for SqliteGroupRepository {
    async fn create(&self, group: &ActivityGroup) -> Result<ActivityGroup, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO activity_group (name, client_id, icon_name, icon_color, position)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&group.name)
        .bind(&group.client_id)
        .bind(&group.icon_name)
        .bind(&group.icon_color)
        .bind(group.position)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| write_error(e, || conflict_message(group)))?;

        Ok(ActivityGroup {
            id: result.last_insert_rowid(),
            ..group.clone()
        })
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<ActivityGroup>, RepositoryError> {
        let row = sqlx::query(&format!(
            "SELECT {GROUP_COLUMNS} FROM activity_group WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool.reader)
        .await
        .map_err(query_error)?;

        row.as_ref()
            .map(group_from_row)
            .transpose()
            .map_err(query_error)
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<ActivityGroup>, RepositoryError> {
        let row = sqlx::query(&format!(
            "SELECT {GROUP_COLUMNS} FROM activity_group WHERE name = ?"
        ))
        .bind(name)
        .fetch_optional(&self.pool.reader)
        .await
        .map_err(query_error)?;

        row.as_ref()
            .map(group_from_row)
            .transpose()
            .map_err(query_error)
    }

    async fn list(&self) -> Result<Vec<ActivityGroup>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {GROUP_COLUMNS} FROM activity_group ORDER BY position, id"
        ))
        .fetch_all(&self.pool.reader)
        .await
        .map_err(query_error)?;

        rows.iter()
            .map(group_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(query_error)
    }

    async fn update(&self, group: &ActivityGroup) -> Result<ActivityGroup, RepositoryError> {
        let result = sqlx::query(
            "UPDATE activity_group SET name = ?, client_id = ?, icon_name = ?, icon_color = ?, position = ?
             WHERE id = ?",
        )
        .bind(&group.name)
        .bind(&group.client_id)
        .bind(&group.icon_name)
        .bind(&group.icon_color)
        .bind(group.position)
        .bind(group.id)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| write_error(e, || conflict_message(group)))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(group.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM activity_group WHERE id = ?")
            .bind(id)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| write_error(e, String::new))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn max_position(&self) -> Result<Option<i64>, RepositoryError> {
        let row: (Option<i64>,) = sqlx::query_as("SELECT MAX(position) FROM activity_group")
            .fetch_one(&self.pool.reader)
            .await
            .map_err(query_error)?;

        Ok(row.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::test_support::test_pool;

    fn make_group(name: &str, client_id: Option<&str>, position: i64) -> ActivityGroup {
        ActivityGroup {
            id: 0,
            name: name.to_string(),
            client_id: client_id.map(str::to_string),
            icon_name: Some("BookOpen".to_string()),
            icon_color: None,
            position,
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = SqliteGroupRepository::new(test_pool().await);
        let created = repo
            .create(&make_group("study", Some("1234"), 0))
            .await
            .unwrap();
        assert!(created.id > 0);

        let by_id = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(by_id, created);

        let by_name = repo.get_by_name("study").await.unwrap().unwrap();
        assert_eq!(by_name.client_id.as_deref(), Some("1234"));

        assert!(repo.get_by_name("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_name_conflicts() {
        let repo = SqliteGroupRepository::new(test_pool().await);
        repo.create(&make_group("study", None, 0)).await.unwrap();
        let err = repo.create(&make_group("study", None, 1)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_duplicate_client_id_conflicts() {
        let repo = SqliteGroupRepository::new(test_pool().await);
        repo.create(&make_group("study", Some("42"), 0)).await.unwrap();
        let err = repo
            .create(&make_group("game", Some("42"), 1))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));

        // Several groups without a credential are fine.
        repo.create(&make_group("workout", None, 2)).await.unwrap();
        repo.create(&make_group("music", None, 3)).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_orders_by_position() {
        let repo = SqliteGroupRepository::new(test_pool().await);
        repo.create(&make_group("b", None, 2)).await.unwrap();
        repo.create(&make_group("a", None, 1)).await.unwrap();
        repo.create(&make_group("c", None, 0)).await.unwrap();

        let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
        assert_eq!(repo.max_position().await.unwrap(), Some(2));
    }

    #[tokio::test]
    async fn test_max_position_empty() {
        let repo = SqliteGroupRepository::new(test_pool().await);
        assert_eq!(repo.max_position().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let repo = SqliteGroupRepository::new(test_pool().await);
        let mut group = repo.create(&make_group("study", None, 0)).await.unwrap();

        group.client_id = Some("999".to_string());
        repo.update(&group).await.unwrap();
        let fetched = repo.get_by_id(group.id).await.unwrap().unwrap();
        assert_eq!(fetched.client_id.as_deref(), Some("999"));

        repo.delete(group.id).await.unwrap();
        assert!(repo.get_by_id(group.id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(group.id).await.unwrap_err(),
            RepositoryError::NotFound
        ));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = SqliteGroupRepository::new(test_pool().await);
        let mut group = make_group("ghost", None, 0);
        group.id = 77;
        assert!(matches!(
            repo.update(&group).await.unwrap_err(),
            RepositoryError::NotFound
        ));
    }

    #[tokio::test]
    async fn test_delete_referenced_group_is_foreign_key() {
        let pool = test_pool().await;
        let repo = SqliteGroupRepository::new(pool.clone());
        let group = repo.create(&make_group("study", None, 0)).await.unwrap();
        sqlx::query("INSERT INTO category (name, group_id, position) VALUES ('Language', ?, 0)")
            .bind(group.id)
            .execute(&pool.writer)
            .await
            .unwrap();

        let err = repo.delete(group.id).await.unwrap_err();
        assert!(matches!(err, RepositoryError::ForeignKey(_)));
        assert!(repo.get_by_id(group.id).await.unwrap().is_some());
    }
}
