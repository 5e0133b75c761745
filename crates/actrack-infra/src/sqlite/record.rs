//! SQLite record repository implementation.

use actrack_core::repository::record::RecordRepository;
use actrack_types::error::RepositoryError;
use actrack_types::record::{Record, RecordView};
use sqlx::Row;

use super::activity::parse_unit;
use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime, query_error, write_error};

/// SQLite-backed implementation of `RecordRepository`.
pub struct SqliteRecordRepository {
    pool: DatabasePool,
}

impl SqliteRecordRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn record_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Record, RepositoryError> {
    let created_at: String = row.try_get("created_at").map_err(query_error)?;
    Ok(Record {
        id: row.try_get("id").map_err(query_error)?,
        activity_id: row.try_get("activity_id").map_err(query_error)?,
        value: row.try_get("value").map_err(query_error)?,
        created_at: parse_datetime(&created_at)?,
    })
}

impl RecordRepository for SqliteRecordRepository {
    async fn create(&self, record: &Record) -> Result<Record, RepositoryError> {
        let result =
            sqlx::query("INSERT INTO record (activity_id, value, created_at) VALUES (?, ?, ?)")
                .bind(record.activity_id)
                .bind(record.value)
                .bind(format_datetime(&record.created_at))
                .execute(&self.pool.writer)
                .await
                .map_err(|e| write_error(e, String::new))?;

        Ok(Record {
            id: result.last_insert_rowid(),
            ..record.clone()
        })
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Record>, RepositoryError> {
        let row = sqlx::query("SELECT id, activity_id, value, created_at FROM record WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;

        row.as_ref().map(record_from_row).transpose()
    }

    async fn list_views(&self) -> Result<Vec<RecordView>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT r.id, r.activity_id, r.value, r.created_at,
                    a.unit, a.name AS activity_name,
                    c.name AS activity_category, c.id AS activity_category_id,
                    g.name AS activity_group
             FROM record r
             LEFT JOIN activity a ON a.id = r.activity_id
             LEFT JOIN category c ON c.id = a.category_id
             LEFT JOIN activity_group g ON g.id = c.group_id
             ORDER BY r.created_at DESC, r.id DESC",
        )
        .fetch_all(&self.pool.reader)
        .await
        .map_err(query_error)?;

        let mut views = Vec::with_capacity(rows.len());
        for row in &rows {
            let record = record_from_row(row)?;
            let unit: Option<String> = row.try_get("unit").map_err(query_error)?;
            views.push(RecordView {
                id: record.id,
                activity_id: record.activity_id,
                value: record.value,
                created_at: record.created_at,
                unit: parse_unit(unit.as_deref())?,
                activity_name: row.try_get("activity_name").map_err(query_error)?,
                activity_category: row.try_get("activity_category").map_err(query_error)?,
                activity_category_id: row.try_get("activity_category_id").map_err(query_error)?,
                activity_group: row.try_get("activity_group").map_err(query_error)?,
            });
        }

        Ok(views)
    }

    async fn update(&self, record: &Record) -> Result<Record, RepositoryError> {
        let result = sqlx::query("UPDATE record SET value = ?, created_at = ? WHERE id = ?")
            .bind(record.value)
            .bind(format_datetime(&record.created_at))
            .bind(record.id)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| write_error(e, String::new))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(record.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM record WHERE id = ?")
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
    use crate::sqlite::pool::DatabasePool;
    use crate::sqlite::test_support::test_pool;
    use actrack_types::activity::ActivityUnit;
    use chrono::{Duration, TimeZone, Utc};

    async fn insert_activity(pool: &DatabasePool) -> i64 {
        let group_id = sqlx::query("INSERT INTO activity_group (name, position) VALUES ('game', 0)")
            .execute(&pool.writer)
            .await
            .unwrap()
            .last_insert_rowid();
        let category_id =
            sqlx::query("INSERT INTO category (name, group_id, position) VALUES ('Console', ?, 0)")
                .bind(group_id)
                .execute(&pool.writer)
                .await
                .unwrap()
                .last_insert_rowid();
        sqlx::query(
            "INSERT INTO activity (name, category_id, group_id, unit, created_at)
             VALUES ('Splatoon 3', ?, ?, 'minutes', '2024-01-01T00:00:00.000000Z')",
        )
        .bind(category_id)
        .bind(group_id)
        .execute(&pool.writer)
        .await
        .unwrap()
        .last_insert_rowid()
    }

    fn make_record(activity_id: i64, value: f64, days_ago: i64) -> Record {
        Record {
            id: 0,
            activity_id,
            value,
            created_at: Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap()
                - Duration::days(days_ago),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let pool = test_pool().await;
        let activity_id = insert_activity(&pool).await;
        let repo = SqliteRecordRepository::new(pool);

        let created = repo.create(&make_record(activity_id, 45.5, 0)).await.unwrap();
        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_for_missing_activity_is_foreign_key() {
        let repo = SqliteRecordRepository::new(test_pool().await);
        let err = repo.create(&make_record(404, 1.0, 0)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::ForeignKey(_)));
    }

    #[tokio::test]
    async fn test_list_views_newest_first_with_joins() {
        let pool = test_pool().await;
        let activity_id = insert_activity(&pool).await;
        let repo = SqliteRecordRepository::new(pool);

        repo.create(&make_record(activity_id, 10.0, 3)).await.unwrap();
        repo.create(&make_record(activity_id, 30.0, 0)).await.unwrap();
        repo.create(&make_record(activity_id, 20.0, 1)).await.unwrap();

        let views = repo.list_views().await.unwrap();
        let values: Vec<f64> = views.iter().map(|v| v.value).collect();
        assert_eq!(values, vec![30.0, 20.0, 10.0]);

        let newest = &views[0];
        assert_eq!(newest.activity_name.as_deref(), Some("Splatoon 3"));
        assert_eq!(newest.activity_category.as_deref(), Some("Console"));
        assert!(newest.activity_category_id.is_some());
        assert_eq!(newest.activity_group.as_deref(), Some("game"));
        assert_eq!(newest.unit, Some(ActivityUnit::Minutes));
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let pool = test_pool().await;
        let activity_id = insert_activity(&pool).await;
        let repo = SqliteRecordRepository::new(pool);

        let mut record = repo.create(&make_record(activity_id, 5.0, 0)).await.unwrap();
        record.value = 8.0;
        record.created_at -= Duration::hours(2);
        repo.update(&record).await.unwrap();
        assert_eq!(repo.get_by_id(record.id).await.unwrap().unwrap(), record);

        repo.delete(record.id).await.unwrap();
        assert!(repo.get_by_id(record.id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(record.id).await.unwrap_err(),
            RepositoryError::NotFound
        ));
    }
}
