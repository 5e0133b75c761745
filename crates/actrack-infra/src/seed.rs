//! Sample data for a fresh database.
//!
//! Seeding only happens while there are no groups, so running it twice is
//! harmless.

use actrack_core::repository::activity::ActivityRepository;
use actrack_core::repository::category::CategoryRepository;
use actrack_core::repository::group::GroupRepository;
use actrack_core::repository::record::RecordRepository;
use actrack_types::activity::{Activity, ActivityUnit};
use actrack_types::category::Category;
use actrack_types::error::RepositoryError;
use actrack_types::group::ActivityGroup;
use actrack_types::record::Record;
use chrono::{Duration, Utc};

use crate::sqlite::activity::SqliteActivityRepository;
use crate::sqlite::category::SqliteCategoryRepository;
use crate::sqlite::group::SqliteGroupRepository;
use crate::sqlite::pool::DatabasePool;
use crate::sqlite::record::SqliteRecordRepository;

/// What a seed run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub groups: usize,
    pub categories: usize,
    pub activities: usize,
    pub records: usize,
}

impl SeedSummary {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

const GROUPS: &[(&str, &str, &str)] = &[
    ("study", "BookOpen", "#3b82f6"),
    ("game", "Gamepad2", "#22c55e"),
    ("workout", "Dumbbell", "#ef4444"),
];

const CATEGORIES: &[(&str, &str)] = &[
    ("Language", "study"),
    ("Math", "study"),
    ("Console", "game"),
    ("Strength", "workout"),
];

struct SampleActivity {
    name: &'static str,
    category: &'static str,
    unit: ActivityUnit,
    asset_key: Option<&'static str>,
    value: f64,
    days_ago: i64,
}

const ACTIVITIES: &[SampleActivity] = &[
    SampleActivity {
        name: "Duolingo",
        category: "Language",
        unit: ActivityUnit::Minutes,
        asset_key: Some("duolingo"),
        value: 15.0,
        days_ago: 0,
    },
    SampleActivity {
        name: "Mathematical Statistics",
        category: "Math",
        unit: ActivityUnit::Minutes,
        asset_key: Some("mmtakemura"),
        value: 45.0,
        days_ago: 1,
    },
    SampleActivity {
        name: "Splatoon 3",
        category: "Console",
        unit: ActivityUnit::Minutes,
        asset_key: Some("splatoon3"),
        value: 60.0,
        days_ago: 2,
    },
    SampleActivity {
        name: "Push-ups",
        category: "Strength",
        unit: ActivityUnit::Count,
        asset_key: None,
        value: 30.0,
        days_ago: 3,
    },
];

/// Insert the sample groups, categories, activities and records unless the
/// database already has groups.
pub async fn seed_sample_data(pool: &DatabasePool) -> Result<SeedSummary, RepositoryError> {
    let groups = SqliteGroupRepository::new(pool.clone());
    if !groups.list().await?.is_empty() {
        tracing::info!("database already has groups, skipping seed");
        return Ok(SeedSummary::default());
    }

    let categories = SqliteCategoryRepository::new(pool.clone());
    let activities = SqliteActivityRepository::new(pool.clone());
    let records = SqliteRecordRepository::new(pool.clone());
    let mut summary = SeedSummary::default();

    let mut group_ids = Vec::with_capacity(GROUPS.len());
    for (position, (name, icon, color)) in GROUPS.iter().enumerate() {
        let group = groups
            .create(&ActivityGroup {
                id: 0,
                name: name.to_string(),
                client_id: None,
                icon_name: Some(icon.to_string()),
                icon_color: Some(color.to_string()),
                position: position as i64,
            })
            .await?;
        group_ids.push((*name, group.id));
        summary.groups += 1;
    }

    let mut category_ids = Vec::with_capacity(CATEGORIES.len());
    for (position, (name, group_name)) in CATEGORIES.iter().enumerate() {
        let group_id = lookup(&group_ids, group_name)?;
        let category = categories
            .create(&Category {
                id: 0,
                name: name.to_string(),
                group_id,
                group: None,
                position: position as i64,
            })
            .await?;
        category_ids.push((*name, (category.id, group_id)));
        summary.categories += 1;
    }

    let now = Utc::now();
    for sample in ACTIVITIES {
        let (category_id, group_id) = lookup(&category_ids, sample.category)?;
        let activity = activities
            .create(&Activity {
                id: 0,
                name: sample.name.to_string(),
                category_id,
                group_id,
                unit: Some(sample.unit),
                asset_key: sample.asset_key.map(str::to_string),
                is_active: true,
                created_at: now,
            })
            .await?;
        summary.activities += 1;

        records
            .create(&Record {
                id: 0,
                activity_id: activity.id,
                value: sample.value,
                created_at: now - Duration::days(sample.days_ago),
            })
            .await?;
        summary.records += 1;
    }

    tracing::info!(?summary, "seeded sample data");
    Ok(summary)
}

fn lookup<T: Copy>(ids: &[(&str, T)], name: &str) -> Result<T, RepositoryError> {
    ids.iter()
        .find(|(n, _)| *n == name)
        .map(|(_, id)| *id)
        .ok_or_else(|| RepositoryError::Query(format!("seed references unknown '{name}'")))
}
