//! SQLite category repository implementation.

use actrack_core::repository::category::CategoryRepository;
use actrack_types::category::Category;
use actrack_types::error::RepositoryError;
use sqlx::Row;

use super::pool::DatabasePool;
use super::{query_error, write_error};

const CATEGORY_SELECT: &str = "SELECT c.id, c.name, c.group_id, c.position, g.name AS group_name
     FROM category c
     LEFT JOIN activity_group g ON g.id = c.group_id";

/// SQLite-backed implementation of `CategoryRepository`.
pub struct SqliteCategoryRepository {
    pool: DatabasePool,
}

impl SqliteCategoryRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn category_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Category, sqlx::Error> {
    Ok(Category {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        group_id: row.try_get("group_id")?,
        group: row.try_get("group_name")?,
        position: row.try_get("position")?,
    })
}

impl CategoryRepository for SqliteCategoryRepository {
    async fn create(&self, category: &Category) -> Result<Category, RepositoryError> {
        let result = sqlx::query("INSERT INTO category (name, group_id, position) VALUES (?, ?, ?)")
            .bind(&category.name)
            .bind(category.group_id)
            .bind(category.position)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| write_error(e, String::new))?;

        self.get_by_id(result.last_insert_rowid())
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Category>, RepositoryError> {
        let row = sqlx::query(&format!("{CATEGORY_SELECT} WHERE c.id = ?"))
            .bind(id)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;

        row.as_ref()
            .map(category_from_row)
            .transpose()
            .map_err(query_error)
    }

    async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        let rows = sqlx::query(&format!("{CATEGORY_SELECT} ORDER BY c.position, c.id"))
            .fetch_all(&self.pool.reader)
            .await
            .map_err(query_error)?;

        rows.iter()
            .map(category_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(query_error)
    }

    async fn update(&self, category: &Category) -> Result<Category, RepositoryError> {
        let mut tx = self.pool.writer.begin().await.map_err(query_error)?;

        let result = sqlx::query("UPDATE category SET name = ?, group_id = ?, position = ? WHERE id = ?")
            .bind(&category.name)
            .bind(category.group_id)
            .bind(category.position)
            .bind(category.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| write_error(e, String::new))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        // Activities carry a denormalized group id.
        sqlx::query("UPDATE activity SET group_id = ? WHERE category_id = ?")
            .bind(category.group_id)
            .bind(category.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| write_error(e, String::new))?;

        tx.commit().await.map_err(query_error)?;

        self.get_by_id(category.id)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM category WHERE id = ?")
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
        let row: (Option<i64>,) = sqlx::query_as("SELECT MAX(position) FROM category")
            .fetch_one(&self.pool.reader)
            .await
            .map_err(query_error)?;

        Ok(row.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::DatabasePool;
    use crate::sqlite::test_support::test_pool;

    async fn insert_group(pool: &DatabasePool, name: &str) -> i64 {
        sqlx::query("INSERT INTO activity_group (name, position) VALUES (?, 0)")
            .bind(name)
            .execute(&pool.writer)
            .await
            .unwrap()
            .last_insert_rowid()
    }

    fn make_category(name: &str, group_id: i64, position: i64) -> Category {
        Category {
            id: 0,
            name: name.to_string(),
            group_id,
            group: None,
            position,
        }
    }

    #[tokio::test]
    async fn test_create_fills_group_name() {
        let pool = test_pool().await;
        let study = insert_group(&pool, "study").await;
        let repo = SqliteCategoryRepository::new(pool);

        let created = repo.create(&make_category("Language", study, 0)).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.group.as_deref(), Some("study"));
    }

    #[tokio::test]
    async fn test_create_with_unknown_group_is_foreign_key() {
        let repo = SqliteCategoryRepository::new(test_pool().await);
        let err = repo.create(&make_category("Orphan", 404, 0)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::ForeignKey(_)));
    }

    #[tokio::test]
    async fn test_list_ordered_by_position() {
        let pool = test_pool().await;
        let study = insert_group(&pool, "study").await;
        let repo = SqliteCategoryRepository::new(pool);

        repo.create(&make_category("Math", study, 1)).await.unwrap();
        repo.create(&make_category("Language", study, 0)).await.unwrap();

        let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Language", "Math"]);
        assert_eq!(repo.max_position().await.unwrap(), Some(1));
    }

    #[tokio::test]
    async fn test_update_moves_activities_to_new_group() {
        let pool = test_pool().await;
        let study = insert_group(&pool, "study").await;
        let game = insert_group(&pool, "game").await;
        let repo = SqliteCategoryRepository::new(pool.clone());

        let mut category = repo.create(&make_category("Puzzle", study, 0)).await.unwrap();
        sqlx::query(
            "INSERT INTO activity (name, category_id, group_id, created_at) VALUES ('Sudoku', ?, ?, '2024-01-01T00:00:00.000000Z')",
        )
        .bind(category.id)
        .bind(study)
        .execute(&pool.writer)
        .await
        .unwrap();

        category.group_id = game;
        let updated = repo.update(&category).await.unwrap();
        assert_eq!(updated.group.as_deref(), Some("game"));

        let (group_id,): (i64,) = sqlx::query_as("SELECT group_id FROM activity WHERE category_id = ?")
            .bind(category.id)
            .fetch_one(&pool.reader)
            .await
            .unwrap();
        assert_eq!(group_id, game);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let pool = test_pool().await;
        let study = insert_group(&pool, "study").await;
        let repo = SqliteCategoryRepository::new(pool);

        let mut ghost = make_category("Ghost", study, 0);
        ghost.id = 99;
        assert!(matches!(
            repo.update(&ghost).await.unwrap_err(),
            RepositoryError::NotFound
        ));
    }

    #[tokio::test]
    async fn test_delete_with_activities_is_foreign_key() {
        let pool = test_pool().await;
        let study = insert_group(&pool, "study").await;
        let repo = SqliteCategoryRepository::new(pool.clone());
        let category = repo.create(&make_category("Language", study, 0)).await.unwrap();
        sqlx::query(
            "INSERT INTO activity (name, category_id, group_id, created_at) VALUES ('Duolingo', ?, ?, '2024-01-01T00:00:00.000000Z')",
        )
        .bind(category.id)
        .bind(study)
        .execute(&pool.writer)
        .await
        .unwrap();

        let err = repo.delete(category.id).await.unwrap_err();
        assert!(matches!(err, RepositoryError::ForeignKey(_)));
        assert!(repo.get_by_id(category.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_empty_category() {
        let pool = test_pool().await;
        let study = insert_group(&pool, "study").await;
        let repo = SqliteCategoryRepository::new(pool);
        let category = repo.create(&make_category("Language", study, 0)).await.unwrap();

        repo.delete(category.id).await.unwrap();
        assert!(repo.get_by_id(category.id).await.unwrap().is_none());
    }
}
