//! SQLite tag repository implementation.

use actrack_core::repository::tag::TagRepository;
use actrack_types::error::RepositoryError;
use actrack_types::tag::Tag;
use sqlx::Row;

use super::pool::DatabasePool;
use super::{query_error, write_error};

/// SQLite-backed implementation of `TagRepository`.
pub struct SqliteTagRepository {
    pool: DatabasePool,
}

impl SqliteTagRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn tag_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Tag, sqlx::Error> {
    Ok(Tag {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        color: row.try_get("color")?,
    })
}

impl TagRepository for SqliteTagRepository {
    async fn create(&self, tag: &Tag) -> Result<Tag, RepositoryError> {
        let result = sqlx::query("INSERT INTO tag (name, color) VALUES (?, ?)")
            .bind(&tag.name)
            .bind(&tag.color)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| write_error(e, || format!("tag '{}' already exists", tag.name)))?;

        Ok(Tag {
            id: result.last_insert_rowid(),
            ..tag.clone()
        })
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Tag>, RepositoryError> {
        let row = sqlx::query("SELECT id, name, color FROM tag WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;

        row.as_ref().map(tag_from_row).transpose().map_err(query_error)
    }

    async fn list(&self) -> Result<Vec<Tag>, RepositoryError> {
        let rows = sqlx::query("SELECT id, name, color FROM tag ORDER BY name")
            .fetch_all(&self.pool.reader)
            .await
            .map_err(query_error)?;

        rows.iter()
            .map(tag_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(query_error)
    }

    async fn update(&self, tag: &Tag) -> Result<Tag, RepositoryError> {
        let result = sqlx::query("UPDATE tag SET name = ?, color = ? WHERE id = ?")
            .bind(&tag.name)
            .bind(&tag.color)
            .bind(tag.id)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| write_error(e, || format!("tag '{}' already exists", tag.name)))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(tag.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM tag WHERE id = ?")
            .bind(id)
            .execute(&self.pool.writer)
            .await
            .map_err(query_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::test_support::test_pool;

    fn make_tag(name: &str) -> Tag {
        Tag {
            id: 0,
            name: name.to_string(),
            color: "#ffcc00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_list_sorted_by_name() {
        let repo = SqliteTagRepository::new(test_pool().await);
        repo.create(&make_tag("morning")).await.unwrap();
        repo.create(&make_tag("focus")).await.unwrap();

        let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["focus", "morning"]);
    }

    #[tokio::test]
    async fn test_duplicate_name_conflicts() {
        let repo = SqliteTagRepository::new(test_pool().await);
        repo.create(&make_tag("focus")).await.unwrap();
        let err = repo.create(&make_tag("focus")).await.unwrap_err();
        match err {
            RepositoryError::Conflict(msg) => assert!(msg.contains("focus")),
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_and_get() {
        let repo = SqliteTagRepository::new(test_pool().await);
        let mut tag = repo.create(&make_tag("focus")).await.unwrap();
        tag.color = "#000000".to_string();
        repo.update(&tag).await.unwrap();
        assert_eq!(repo.get_by_id(tag.id).await.unwrap().unwrap().color, "#000000");
    }

    #[tokio::test]
    async fn test_delete_cascades_links() {
        let pool = test_pool().await;
        let repo = SqliteTagRepository::new(pool.clone());
        let tag = repo.create(&make_tag("focus")).await.unwrap();

        let group_id = sqlx::query("INSERT INTO activity_group (name, position) VALUES ('study', 0)")
            .execute(&pool.writer)
            .await
            .unwrap()
            .last_insert_rowid();
        let category_id =
            sqlx::query("INSERT INTO category (name, group_id, position) VALUES ('Math', ?, 0)")
                .bind(group_id)
                .execute(&pool.writer)
                .await
                .unwrap()
                .last_insert_rowid();
        let activity_id = sqlx::query(
            "INSERT INTO activity (name, category_id, group_id, created_at) VALUES ('Stats', ?, ?, '2024-01-01T00:00:00.000000Z')",
        )
        .bind(category_id)
        .bind(group_id)
        .execute(&pool.writer)
        .await
        .unwrap()
        .last_insert_rowid();
        sqlx::query("INSERT INTO activity_tags (activity_id, tag_id) VALUES (?, ?)")
            .bind(activity_id)
            .bind(tag.id)
            .execute(&pool.writer)
            .await
            .unwrap();

        repo.delete(tag.id).await.unwrap();

        let (links,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM activity_tags")
            .fetch_one(&pool.reader)
            .await
            .unwrap();
        assert_eq!(links, 0);
        assert!(repo.get_by_id(tag.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_tag() {
        let repo = SqliteTagRepository::new(test_pool().await);
        assert!(repo.get_by_id(5).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(5).await.unwrap_err(),
            RepositoryError::NotFound
        ));
    }
}
