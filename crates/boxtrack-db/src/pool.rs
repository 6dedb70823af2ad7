//! # Database Pool Management
//!
//! Connection pool creation and configuration for SQLite.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Database Connection Pool                           │
//! │                                                                         │
//! │  Process Startup                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreConfig::from_env() ← BOXTRACK_DATA_DIR                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::open(&store) ← mkdir -p, pool + migrations                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │            SqlitePool                    │                           │
//! │  │  ┌─────┐ ┌─────┐ ┌─────┐ ┌─────┐       │                           │
//! │  │  │Conn1│ │Conn2│ │Conn3│ │Conn4│ ...   │  (max_connections)        │
//! │  │  └─────┘ └─────┘ └─────┘ └─────┘       │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       │ Handle passed to every component that needs it                 │
//! │       ▼                                                                 │
//! │  db.zones() / db.units() / db.items() / db.users()                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## SQLite Configuration
//! - **WAL mode**: readers are not blocked by an in-flight write
//! - **foreign_keys = ON**: required for cascade deletes, set per connection
//! - **synchronous = NORMAL**: durable across application crashes
//!
//! There is no global handle: construct one `Database` at startup and clone
//! it (cheap, the pool is reference counted) into whatever needs it.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use boxtrack_core::schema::{ITEMS, UNITS, ZONES};
use boxtrack_core::{InventorySnapshot, Item, Unit, Zone};

use crate::config::StoreConfig;
use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::in_insertion_order;
use crate::repository::item::ItemRepository;
use crate::repository::unit::UnitRepository;
use crate::repository::user::UserRepository;
use crate::repository::zone::ZoneRepository;

const IN_MEMORY: &str = ":memory:";

// =============================================================================
// Configuration
// =============================================================================

/// Database pool configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("/data/boxtrack.db")
///     .max_connections(5)
///     .min_connections(1);
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Maximum number of connections in the pool.
    /// Default: 5
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    /// Default: 1
    pub min_connections: u32,

    /// Connection timeout duration.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Idle timeout before closing a connection.
    /// Default: 10 minutes
    pub idle_timeout: Duration,

    /// Whether to run migrations on connect.
    /// Default: true
    pub run_migrations: bool,
}

impl DbConfig {
    /// Creates a new database configuration with the given path.
    ///
    /// The file is created if it doesn't exist; its directory must.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            run_migrations: true,
        }
    }

    /// Pool configuration for the file named by a store configuration.
    pub fn from_store(store: &StoreConfig) -> Self {
        DbConfig::new(store.database_path())
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the minimum number of connections.
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether to run migrations on connect.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    /// Creates an in-memory database configuration (for testing).
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(IN_MEMORY),
            max_connections: 1, // In-memory requires single connection
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(60),
            run_migrations: true,
        }
    }

    fn is_in_memory(&self) -> bool {
        self.database_path.as_os_str() == IN_MEMORY
    }

    fn connect_options(&self) -> DbResult<SqliteConnectOptions> {
        let options = if self.is_in_memory() {
            SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
        } else {
            SqliteConnectOptions::new()
                .filename(&self.database_path)
                .create_if_missing(true)
        };

        Ok(options
            // Writers don't block readers
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            // SQLite has them disabled by default for backwards compatibility
            .foreign_keys(true))
    }
}

// =============================================================================
// Database
// =============================================================================

/// Main database handle providing repository access.
///
/// ## Usage at the Boundary
/// ```rust,ignore
/// async fn get_room(db: &Database, id: &str) -> Result<Zone, DbError> {
///     db.zones()
///         .get_by_id(id)
///         .await?
///         .ok_or_else(|| DbError::not_found("Zone", id))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Database {
    /// The SQLite connection pool.
    pool: SqlitePool,
}

impl Database {
    /// Opens the store described by `store`, creating its directory first.
    pub async fn open(store: &StoreConfig) -> DbResult<Self> {
        store.ensure_data_dir()?;
        Database::new(DbConfig::from_store(store)).await
    }

    /// Creates a new database connection pool.
    ///
    /// ## What This Does
    /// 1. Creates the database file if it doesn't exist
    /// 2. Configures WAL, NORMAL synchronous and foreign keys
    /// 3. Creates the connection pool
    /// 4. Runs migrations (if enabled)
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Initializing database connection"
        );

        let connect_options = config.connect_options()?;

        debug!("Connection options configured");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(Some(config.idle_timeout))
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        info!(
            max_connections = config.max_connections,
            "Database pool created"
        );

        let db = Database { pool };

        if config.run_migrations {
            db.run_migrations().await?;
        }

        Ok(db)
    }

    /// Runs embedded migrations, then additive column migrations.
    ///
    /// Idempotent: safe to run on every startup.
    pub async fn run_migrations(&self) -> DbResult<()> {
        info!("Running database migrations");
        migrations::run_migrations(&self.pool).await?;
        info!("Migrations complete");
        Ok(())
    }

    /// Returns a reference to the connection pool.
    ///
    /// Prefer repository methods when available.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn zones(&self) -> ZoneRepository {
        ZoneRepository::new(self.pool.clone())
    }

    pub fn units(&self) -> UnitRepository {
        UnitRepository::new(self.pool.clone())
    }

    pub fn items(&self) -> ItemRepository {
        ItemRepository::new(self.pool.clone())
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.pool.clone())
    }

    /// Loads all three inventory collections from one consistent read.
    ///
    /// Feed the result to the aggregation engine
    /// (`snapshot.totals()`, `snapshot.zone_summary(id)`, ...).
    pub async fn snapshot(&self) -> DbResult<InventorySnapshot> {
        let mut tx = self.pool.begin().await?;

        let zones = sqlx::query_as::<_, Zone>(&in_insertion_order(ZONES.select_sql()))
            .fetch_all(&mut *tx)
            .await?;
        let units = sqlx::query_as::<_, Unit>(&in_insertion_order(UNITS.select_sql()))
            .fetch_all(&mut *tx)
            .await?;
        let items = sqlx::query_as::<_, Item>(&in_insertion_order(ITEMS.select_sql()))
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(
            zones = zones.len(),
            units = units.len(),
            items = items.len(),
            "Loaded inventory snapshot"
        );

        Ok(InventorySnapshot {
            zones,
            units,
            items,
        })
    }

    /// Closes the database connection pool.
    ///
    /// After calling close, all repository operations will fail.
    pub async fn close(&self) {
        info!("Closing database connection pool");
        self.pool.close().await;
    }

    /// Checks if the database is healthy (can execute queries).
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{ChildRepository, Repository};
    use boxtrack_core::validation::{NewItem, NewUnit, NewZone};

    #[tokio::test]
    async fn test_in_memory_database() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        assert!(db.health_check().await);
    }

    #[tokio::test]
    async fn test_config_builder() {
        let config = DbConfig::new("/tmp/test.db")
            .max_connections(10)
            .min_connections(2)
            .run_migrations(false);

        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 2);
        assert!(!config.run_migrations);
        assert!(!config.is_in_memory());
        assert!(DbConfig::in_memory().is_in_memory());
    }

    #[tokio::test]
    async fn test_foreign_keys_enabled() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let enabled: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[tokio::test]
    async fn test_open_creates_data_dir_and_file() {
        let root = std::env::temp_dir().join(format!("boxtrack-open-{}", std::process::id()));
        let store = StoreConfig::new(root.join("data"));

        let db = Database::open(&store).await.unwrap();
        let zone = db.zones().create(NewZone::new("Garage")).await.unwrap();
        db.close().await;

        assert!(store.database_path().is_file());

        // Reopening the same file keeps the data and re-running migrations is harmless.
        let db = Database::open(&store).await.unwrap();
        let found = db.zones().get_by_id(&zone.id).await.unwrap();
        assert_eq!(found, Some(zone));
        db.close().await;

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[tokio::test]
    async fn test_garage_scenario() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let garage = db.zones().create(NewZone::new("Garage")).await.unwrap();
        let shelf = db
            .units()
            .create(NewUnit::new("Shelf1", &garage.id))
            .await
            .unwrap();
        let hammer = db
            .items()
            .create(NewItem::new("Hammer", &shelf.id).quantity(2).value(10.0))
            .await
            .unwrap();
        let nails = db
            .items()
            .create(NewItem::new("Nails", &shelf.id).quantity(100).value(0.05))
            .await
            .unwrap();

        let snapshot = db.snapshot().await.unwrap();
        let summary = snapshot.unit_summary(&shelf.id);
        assert_eq!(summary.item_count, 2);
        assert!((summary.total_value - 25.0).abs() < 1e-9);
        assert!((snapshot.zone_summary(&garage.id).total_value - 25.0).abs() < 1e-9);

        db.zones().delete(&garage.id).await.unwrap();

        assert_eq!(db.units().get_by_id(&shelf.id).await.unwrap(), None);
        assert_eq!(db.items().get_by_id(&hammer.id).await.unwrap(), None);
        assert_eq!(db.items().get_by_id(&nails.id).await.unwrap(), None);
        assert!(db.items().list_by_parent(&shelf.id).await.unwrap().is_empty());
        assert!(db.items().list_all().await.unwrap().is_empty());
        assert_eq!(db.snapshot().await.unwrap(), InventorySnapshot::default());
    }
}
