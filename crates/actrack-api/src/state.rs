//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI and REST API.
//! Services are generic over repository and presence-client traits, but
//! AppState pins them to the concrete infra implementations. The presence
//! client is boxed so callers of `from_parts` choose it.

use std::path::PathBuf;
use std::sync::Arc;

use actrack_core::presence::boxed::BoxPresenceConnector;
use actrack_core::presence::service::PresenceService;
use actrack_core::service::activity::ActivityService;
use actrack_core::service::category::CategoryService;
use actrack_core::service::group::GroupService;
use actrack_core::service::record::RecordService;
use actrack_core::service::tag::TagService;
use actrack_infra::config::{handshake_timeout, load_global_config};
use actrack_infra::filesystem::{ensure_data_dir, resolve_data_dir};
use actrack_infra::presence::discord::DiscordConnector;
use actrack_infra::sqlite::activity::SqliteActivityRepository;
use actrack_infra::sqlite::category::SqliteCategoryRepository;
use actrack_infra::sqlite::group::SqliteGroupRepository;
use actrack_infra::sqlite::pool::{DatabasePool, resolve_database_path};
use actrack_infra::sqlite::record::SqliteRecordRepository;
use actrack_infra::sqlite::tag::SqliteTagRepository;
use actrack_types::config::GlobalConfig;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteGroupService = GroupService<SqliteGroupRepository>;

pub type ConcreteCategoryService = CategoryService<SqliteCategoryRepository, SqliteGroupRepository>;

pub type ConcreteActivityService =
    ActivityService<SqliteActivityRepository, SqliteCategoryRepository>;

pub type ConcreteRecordService = RecordService<SqliteRecordRepository, SqliteActivityRepository>;

pub type ConcreteTagService = TagService<SqliteTagRepository>;

pub type ConcretePresenceService = PresenceService<SqliteGroupRepository, BoxPresenceConnector>;

/// Shared application state holding all services.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub group_service: Arc<ConcreteGroupService>,
    pub category_service: Arc<ConcreteCategoryService>,
    pub activity_service: Arc<ConcreteActivityService>,
    pub record_service: Arc<ConcreteRecordService>,
    pub tag_service: Arc<ConcreteTagService>,
    pub presence_service: Arc<ConcretePresenceService>,
    pub config: Arc<GlobalConfig>,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: load config, connect to DB, wire services.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        // Ensure data directory exists
        ensure_data_dir(&data_dir).await?;

        let config = load_global_config(&data_dir).await;

        let db_path = resolve_database_path(&data_dir);
        let db_pool = DatabasePool::open(&db_path).await?;
        tracing::debug!(path = %db_path.display(), "database opened");

        let connector = BoxPresenceConnector::new(DiscordConnector::new(handshake_timeout(&config)));

        Ok(Self::from_parts(data_dir, config, db_pool, connector))
    }

    /// Wire services over an already opened pool and presence client.
    pub fn from_parts(
        data_dir: PathBuf,
        config: GlobalConfig,
        db_pool: DatabasePool,
        connector: BoxPresenceConnector,
    ) -> Self {
        let group_service = GroupService::new(SqliteGroupRepository::new(db_pool.clone()));

        let category_service = CategoryService::new(
            SqliteCategoryRepository::new(db_pool.clone()),
            SqliteGroupRepository::new(db_pool.clone()),
        );

        let activity_service = ActivityService::new(
            SqliteActivityRepository::new(db_pool.clone()),
            SqliteCategoryRepository::new(db_pool.clone()),
        );

        let record_service = RecordService::new(
            SqliteRecordRepository::new(db_pool.clone()),
            SqliteActivityRepository::new(db_pool.clone()),
        );

        let tag_service = TagService::new(SqliteTagRepository::new(db_pool.clone()));

        // The presence manager only reads group credentials.
        let presence_service = PresenceService::new(
            SqliteGroupRepository::new(db_pool.clone()),
            connector,
            config.presence.default_image.clone(),
        );

        Self {
            group_service: Arc::new(group_service),
            category_service: Arc::new(category_service),
            activity_service: Arc::new(activity_service),
            record_service: Arc::new(record_service),
            tag_service: Arc::new(tag_service),
            presence_service: Arc::new(presence_service),
            config: Arc::new(config),
            data_dir,
            db_pool,
        }
    }
}
