//! SQLite activity repository implementation.
//!
//! Activities join their category, the category's group and their tags for
//! listing. Tag links live in `activity_tags`.

use std::collections::HashMap;

use actrack_core::repository::activity::ActivityRepository;
use actrack_types::activity::{Activity, ActivityUnit, ActivityView};
use actrack_types::error::RepositoryError;
use actrack_types::tag::TagSummary;
use sqlx::Row;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime, query_error, write_error};

const ACTIVITY_COLUMNS: &str =
    "id, name, category_id, group_id, unit, asset_key, is_active, created_at";

/// SQLite-backed implementation of `ActivityRepository`.
pub struct SqliteActivityRepository {
    pool: DatabasePool,
}

impl SqliteActivityRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain Activity.
struct ActivityRow {
    id: i64,
    name: String,
    category_id: i64,
    group_id: i64,
    unit: Option<String>,
    asset_key: Option<String>,
    is_active: bool,
    created_at: String,
}

impl ActivityRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            category_id: row.try_get("category_id")?,
            group_id: row.try_get("group_id")?,
            unit: row.try_get("unit")?,
            asset_key: row.try_get("asset_key")?,
            is_active: row.try_get("is_active")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_activity(self) -> Result<Activity, RepositoryError> {
        Ok(Activity {
            id: self.id,
            name: self.name,
            category_id: self.category_id,
            group_id: self.group_id,
            unit: parse_unit(self.unit.as_deref())?,
            asset_key: self.asset_key,
            is_active: self.is_active,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

pub(crate) fn parse_unit(unit: Option<&str>) -> Result<Option<ActivityUnit>, RepositoryError> {
    unit.map(str::parse::<ActivityUnit>)
        .transpose()
        .map_err(RepositoryError::Query)
}

impl SqliteActivityRepository {
    async fn tags_by_activity(&self) -> Result<HashMap<i64, Vec<TagSummary>>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT at.activity_id, t.id, t.name, t.color
             FROM activity_tags at
             JOIN tag t ON t.id = at.tag_id
             ORDER BY t.name",
        )
        .fetch_all(&self.pool.reader)
        .await
        .map_err(query_error)?;

        let mut tags: HashMap<i64, Vec<TagSummary>> = HashMap::new();
        for row in &rows {
            let activity_id: i64 = row.try_get("activity_id").map_err(query_error)?;
            tags.entry(activity_id).or_default().push(TagSummary {
                id: row.try_get("id").map_err(query_error)?,
                name: row.try_get("name").map_err(query_error)?,
                color: row.try_get("color").map_err(query_error)?,
            });
        }
        Ok(tags)
    }
}

impl ActivityRepository for SqliteActivityRepository {
    async fn create(&self, activity: &Activity) -> Result<Activity, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO activity (name, category_id, group_id, unit, asset_key, is_active, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&activity.name)
        .bind(activity.category_id)
        .bind(activity.group_id)
        .bind(activity.unit.map(|u| u.to_string()))
        .bind(&activity.asset_key)
        .bind(activity.is_active)
        .bind(format_datetime(&activity.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| write_error(e, String::new))?;

        Ok(Activity {
            id: result.last_insert_rowid(),
            ..activity.clone()
        })
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Activity>, RepositoryError> {
        let row = sqlx::query(&format!("SELECT {ACTIVITY_COLUMNS} FROM activity WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;

        match row {
            Some(row) => {
                let activity_row = ActivityRow::from_row(&row).map_err(query_error)?;
                Ok(Some(activity_row.into_activity()?))
            }
            None => Ok(None),
        }
    }

    async fn list_views(&self) -> Result<Vec<ActivityView>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT a.id, a.name, a.category_id, a.group_id, a.unit, a.asset_key, a.is_active, a.created_at,
                    c.name AS category_name, g.name AS category_group
             FROM activity a
             LEFT JOIN category c ON c.id = a.category_id
             LEFT JOIN activity_group g ON g.id = c.group_id
             ORDER BY a.id",
        )
        .fetch_all(&self.pool.reader)
        .await
        .map_err(query_error)?;

        let mut tags = self.tags_by_activity().await?;

        let mut views = Vec::with_capacity(rows.len());
        for row in &rows {
            let category_name: Option<String> = row.try_get("category_name").map_err(query_error)?;
            let category_group: Option<String> =
                row.try_get("category_group").map_err(query_error)?;
            let activity = ActivityRow::from_row(row)
                .map_err(query_error)?
                .into_activity()?;

            views.push(ActivityView {
                id: activity.id,
                name: activity.name,
                unit: activity.unit,
                category_id: activity.category_id,
                category_name,
                group_id: activity.group_id,
                category_group,
                asset_key: activity.asset_key,
                created_at: activity.created_at,
                is_active: activity.is_active,
                tags: tags.remove(&activity.id).unwrap_or_default(),
            });
        }

        Ok(views)
    }

    async fn update(&self, activity: &Activity) -> Result<Activity, RepositoryError> {
        let result = sqlx::query(
            "UPDATE activity SET name = ?, category_id = ?, group_id = ?, unit = ?, asset_key = ?, is_active = ?
             WHERE id = ?",
        )
        .bind(&activity.name)
        .bind(activity.category_id)
        .bind(activity.group_id)
        .bind(activity.unit.map(|u| u.to_string()))
        .bind(&activity.asset_key)
        .bind(activity.is_active)
        .bind(activity.id)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| write_error(e, String::new))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(activity.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        // Tag links cascade; records block the delete.
        let result = sqlx::query("DELETE FROM activity WHERE id = ?")
            .bind(id)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| write_error(e, String::new))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn set_tags(&self, id: i64, tag_ids: &[i64]) -> Result<(), RepositoryError> {
        let mut tx = self.pool.writer.begin().await.map_err(query_error)?;

        let exists = sqlx::query("SELECT 1 FROM activity WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(query_error)?;
        if exists.is_none() {
            return Err(RepositoryError::NotFound);
        }

        sqlx::query("DELETE FROM activity_tags WHERE activity_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(query_error)?;

        for tag_id in tag_ids {
            sqlx::query("INSERT OR IGNORE INTO activity_tags (activity_id, tag_id) VALUES (?, ?)")
                .bind(id)
                .bind(*tag_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| write_error(e, String::new))?;
        }

        tx.commit().await.map_err(query_error)?;

        tracing::debug!(activity_id = id, count = tag_ids.len(), "replaced activity tags");
        Ok(())
    }
}
