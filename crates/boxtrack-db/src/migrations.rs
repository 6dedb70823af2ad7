//! # Database Migrations
//!
//! Embedded SQL migrations plus additive column migrations.
//!
//! ## How Migrations Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Migration Process                                  │
//! │                                                                         │
//! │  App Startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Stage 1: embedded migrations (_sqlx_migrations)                       │
//! │       ├── 001_initial_schema.sql  CREATE TABLE IF NOT EXISTS ...       │
//! │       └── 002_parent_indexes.sql  CREATE INDEX IF NOT EXISTS ...       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Stage 2: COLUMN_ADDITIONS                                             │
//! │       └── rooms.color  ALTER TABLE ... ADD COLUMN                      │
//! │             ├── added            → existing rows get the DEFAULT       │
//! │             └── duplicate column → no-op                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  App continues startup                                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stage 2 exists because SQLite has no `ADD COLUMN IF NOT EXISTS`, and
//! stores created before a column existed already have the table, so the
//! `CREATE TABLE IF NOT EXISTS` in stage 1 leaves them untouched.
//!
//! ## Adding New Migrations
//!
//! 1. New tables or indexes: add `NNN_description.sql` to `migrations/sqlite/`
//! 2. New non-breaking columns: add to `COLUMN_ADDITIONS` **and** to the
//!    table's `CREATE TABLE` in a new migration
//! 3. **NEVER** modify existing migrations - always add new ones

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};

/// Embedded migrations from the `migrations/sqlite` directory.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// A column added to an existing table after its creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnAddition {
    pub table: &'static str,
    pub column: &'static str,
    /// Type and constraints, e.g. `TEXT NOT NULL DEFAULT ''`.
    pub definition: &'static str,
}

impl ColumnAddition {
    fn sql(&self) -> String {
        format!(
            "ALTER TABLE {} ADD COLUMN {} {}",
            self.table, self.column, self.definition
        )
    }
}

/// Additive columns, applied in order after the embedded migrations.
pub const COLUMN_ADDITIONS: &[ColumnAddition] = &[ColumnAddition {
    table: "rooms",
    column: "color",
    definition: "TEXT NOT NULL DEFAULT '#FF6600'",
}];

/// Runs all pending database migrations.
///
/// ## Safety
/// - Idempotent: safe to run multiple times
/// - Transactional: each embedded migration runs in a transaction
/// - Ordered: migrations run in filename order (001, 002, ...)
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    info!("Checking for pending migrations");

    MIGRATOR.run(pool).await?;

    for addition in COLUMN_ADDITIONS {
        add_column(pool, addition).await?;
    }

    info!("All migrations applied successfully");
    Ok(())
}

/// Adds a column, treating an already-present column as success.
///
/// ## Returns
/// * `Ok(true)` - Column was added
/// * `Ok(false)` - Column already existed
pub async fn add_column(pool: &SqlitePool, addition: &ColumnAddition) -> DbResult<bool> {
    match sqlx::query(&addition.sql()).execute(pool).await {
        Ok(_) => {
            info!(
                table = addition.table,
                column = addition.column,
                "Added column"
            );
            Ok(true)
        }
        Err(sqlx::Error::Database(db_err)) if db_err.message().contains("duplicate column name") => {
            debug!(
                table = addition.table,
                column = addition.column,
                "Column already present"
            );
            Ok(false)
        }
        Err(e) => Err(DbError::MigrationFailed(format!(
            "adding {}.{}: {}",
            addition.table, addition.column, e
        ))),
    }
}

/// Returns information about migrations.
///
/// ## Returns
/// Tuple of (total_migrations, applied_migrations). A store that has never
/// been migrated reports zero applied; any other failure is returned.
///
/// ## Usage
/// For diagnostics and health checks.
pub async fn migration_status(pool: &SqlitePool) -> DbResult<(usize, usize)> {
    let total = MIGRATOR.migrations.len();

    let applied: i64 = match sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await
    {
        Ok(count) => count,
        Err(sqlx::Error::Database(db_err)) if db_err.message().contains("no such table") => 0,
        Err(e) => return Err(e.into()),
    };

    Ok((total, applied as usize))
}
