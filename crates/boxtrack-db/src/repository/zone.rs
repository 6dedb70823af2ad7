//! # Zone Repository
//!
//! Database operations for zones (the `rooms` table).
//!
//! ## Cascade on Delete
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DELETE FROM rooms WHERE id = 'garage'                                  │
//! │       │                                                                 │
//! │       ├──► bins  WHERE room_id = 'garage'       (ON DELETE CASCADE)     │
//! │       │       │                                                         │
//! │       │       └──► items WHERE bin_id IN (...)  (ON DELETE CASCADE)     │
//! │       │                                                                 │
//! │  One statement: all rows go, or none do.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use boxtrack_core::schema::ZONES;
use boxtrack_core::validation::{NewZone, ZonePatch};
use boxtrack_core::{new_id, Zone};

use super::{in_insertion_order, Repository};
use crate::error::DbResult;

/// Repository for zone database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.zones();
///
/// let garage = repo.create(NewZone::new("Garage")).await?;
/// let found = repo.get_by_id(&garage.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ZoneRepository {
    pool: SqlitePool,
}

impl ZoneRepository {
    /// Creates a new ZoneRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ZoneRepository { pool }
    }

    /// Writes every data column of an existing zone.
    ///
    /// Returns whether a row was updated.
    async fn write(&self, zone: &Zone) -> DbResult<bool> {
        let result = sqlx::query(&ZONES.update_sql())
            .bind(&zone.id)
            .bind(&zone.name)
            .bind(&zone.description)
            .bind(&zone.color)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts zones (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar(&ZONES.count_sql())
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl Repository for ZoneRepository {
    type Entity = Zone;
    type New = NewZone;
    type Patch = ZonePatch;

    const ENTITY: &'static str = "Zone";

    async fn list_all(&self) -> DbResult<Vec<Zone>> {
        let zones = sqlx::query_as::<_, Zone>(&in_insertion_order(ZONES.select_sql()))
            .fetch_all(&self.pool)
            .await?;

        Ok(zones)
    }

    async fn get_by_id(&self, id: &str) -> DbResult<Option<Zone>> {
        let zone = sqlx::query_as::<_, Zone>(&ZONES.select_where_sql("id"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(zone)
    }

    async fn create(&self, new: NewZone) -> DbResult<Zone> {
        new.validate()?;

        let zone = new.into_record(new_id());
        debug!(id = %zone.id, name = %zone.name, "Creating zone");

        sqlx::query(&ZONES.insert_sql())
            .bind(&zone.id)
            .bind(&zone.name)
            .bind(&zone.description)
            .bind(&zone.color)
            .execute(&self.pool)
            .await?;

        Ok(zone)
    }

    async fn update(&self, id: &str, patch: ZonePatch) -> DbResult<Option<Zone>> {
        debug!(id = %id, "Updating zone");

        let Some(mut zone) = self.get_by_id(id).await? else {
            return Ok(None);
        };
        if patch.is_empty() {
            return Ok(Some(zone));
        }

        patch.apply_to(&mut zone);

        // Deleted between read and write: report as missing.
        if !self.write(&zone).await? {
            return Ok(None);
        }

        Ok(Some(zone))
    }

    async fn delete(&self, id: &str) -> DbResult<()> {
        let result = sqlx::query(&ZONES.delete_sql())
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(id = %id, deleted = result.rows_affected(), "Deleted zone");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
