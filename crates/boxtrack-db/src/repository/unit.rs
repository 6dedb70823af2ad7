//! # Unit Repository
//!
//! Database operations for units (the `bins` table).
//!
//! Every unit names its zone in `room_id`. A unit pointing at a zone that
//! does not exist is rejected by the foreign key and reported as
//! [`DbError::MissingParent`]; nothing is written.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use boxtrack_core::schema::UNITS;
use boxtrack_core::validation::{NewUnit, UnitPatch};
use boxtrack_core::{new_id, Unit};

use super::{in_insertion_order, ChildRepository, Repository};
use crate::error::{DbError, DbResult};

#[derive(Debug, Clone)]
pub struct UnitRepository {
    pool: SqlitePool,
}

impl UnitRepository {
    /// Creates a new UnitRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UnitRepository { pool }
    }

    async fn write(&self, unit: &Unit) -> DbResult<bool> {
        let result = sqlx::query(&UNITS.update_sql())
            .bind(&unit.id)
            .bind(&unit.name)
            .bind(&unit.description)
            .bind(&unit.room_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DbError::from(e).with_parent("Unit", "Zone", &unit.room_id))?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl Repository for UnitRepository {
    type Entity = Unit;
    type New = NewUnit;
    type Patch = UnitPatch;

    const ENTITY: &'static str = "Unit";

    async fn list_all(&self) -> DbResult<Vec<Unit>> {
        let units = sqlx::query_as::<_, Unit>(&in_insertion_order(UNITS.select_sql()))
            .fetch_all(&self.pool)
            .await?;

        Ok(units)
    }

    async fn get_by_id(&self, id: &str) -> DbResult<Option<Unit>> {
        let unit = sqlx::query_as::<_, Unit>(&UNITS.select_where_sql("id"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(unit)
    }

    async fn create(&self, new: NewUnit) -> DbResult<Unit> {
        new.validate()?;

        let unit = new.into_record(new_id());
        debug!(id = %unit.id, room_id = %unit.room_id, "Creating unit");

        sqlx::query(&UNITS.insert_sql())
            .bind(&unit.id)
            .bind(&unit.name)
            .bind(&unit.description)
            .bind(&unit.room_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DbError::from(e).with_parent("Unit", "Zone", &unit.room_id))?;

        Ok(unit)
    }

    async fn update(&self, id: &str, patch: UnitPatch) -> DbResult<Option<Unit>> {
        debug!(id = %id, "Updating unit");

        let Some(mut unit) = self.get_by_id(id).await? else {
            return Ok(None);
        };
        if patch.is_empty() {
            return Ok(Some(unit));
        }

        patch.apply_to(&mut unit);

        if !self.write(&unit).await? {
            return Ok(None);
        }

        Ok(Some(unit))
    }

    async fn delete(&self, id: &str) -> DbResult<()> {
        let result = sqlx::query(&UNITS.delete_sql())
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(id = %id, deleted = result.rows_affected(), "Deleted unit");
        Ok(())
    }
}

#[async_trait]
impl ChildRepository for UnitRepository {
    async fn list_by_parent(&self, room_id: &str) -> DbResult<Vec<Unit>> {
        let units = sqlx::query_as::<_, Unit>(&in_insertion_order(UNITS.select_where_sql("room_id")))
            .bind(room_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(units)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use boxtrack_core::validation::{NewItem, NewZone};
    use boxtrack_core::ErrorKind;

    async fn db_with_zone() -> (Database, String) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let zone = db.zones().create(NewZone::new("Garage")).await.unwrap();
        (db, zone.id)
    }

    #[tokio::test]
    async fn test_create_with_missing_zone_fails() {
        let (db, _) = db_with_zone().await;

        let err = db
            .units()
            .create(NewUnit::new("Shelf1", "no-such-zone"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ReferentialIntegrity);
        assert!(matches!(
            err,
            DbError::MissingParent { ref parent_id, .. } if parent_id == "no-such-zone"
        ));
        assert!(db.units().list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_round_trip() {
        let (db, zone_id) = db_with_zone().await;

        let unit = db
            .units()
            .create(NewUnit::new("Shelf1", &zone_id))
            .await
            .unwrap();
        assert_eq!(unit.description, "");
        assert_eq!(unit.room_id, zone_id);

        assert_eq!(db.units().get_by_id(&unit.id).await.unwrap(), Some(unit));
    }

    #[tokio::test]
    async fn test_list_by_parent() {
        let (db, garage) = db_with_zone().await;
        let attic = db.zones().create(NewZone::new("Attic")).await.unwrap().id;

        let s1 = db.units().create(NewUnit::new("Shelf1", &garage)).await.unwrap();
        let s2 = db.units().create(NewUnit::new("Shelf2", &garage)).await.unwrap();
        let b1 = db.units().create(NewUnit::new("Box", &attic)).await.unwrap();

        assert_eq!(db.units().list_by_parent(&garage).await.unwrap(), vec![s1, s2]);
        assert_eq!(db.units().list_by_parent(&attic).await.unwrap(), vec![b1]);
        assert!(db.units().list_by_parent("empty").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_move_to_missing_zone_fails_and_keeps_row() {
        let (db, zone_id) = db_with_zone().await;
        let unit = db.units().create(NewUnit::new("Shelf1", &zone_id)).await.unwrap();

        let patch = UnitPatch {
            room_id: Some("no-such-zone".to_string()),
            ..Default::default()
        };
        let err = db.units().update(&unit.id, patch).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ReferentialIntegrity);

        assert_eq!(db.units().get_by_id(&unit.id).await.unwrap(), Some(unit));
    }

    #[tokio::test]
    async fn test_move_between_zones() {
        let (db, garage) = db_with_zone().await;
        let attic = db.zones().create(NewZone::new("Attic")).await.unwrap().id;
        let unit = db.units().create(NewUnit::new("Shelf1", &garage)).await.unwrap();

        let patch = UnitPatch {
            room_id: Some(attic.clone()),
            ..Default::default()
        };
        let moved = db.units().update(&unit.id, patch).await.unwrap().unwrap();

        assert_eq!(moved.room_id, attic);
        assert_eq!(moved.name, "Shelf1");
        assert!(db.units().list_by_parent(&garage).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_cascades_to_items() {
        let (db, zone_id) = db_with_zone().await;
        let keep = db.units().create(NewUnit::new("Keep", &zone_id)).await.unwrap();
        let gone = db.units().create(NewUnit::new("Gone", &zone_id)).await.unwrap();

        let kept_item = db.items().create(NewItem::new("Tape", &keep.id)).await.unwrap();
        let gone_item = db.items().create(NewItem::new("Glue", &gone.id)).await.unwrap();

        db.units().delete(&gone.id).await.unwrap();

        assert_eq!(db.units().get_by_id(&gone.id).await.unwrap(), None);
        assert_eq!(db.items().get_by_id(&gone_item.id).await.unwrap(), None);
        assert_eq!(db.items().list_all().await.unwrap(), vec![kept_item]);
        assert!(db.zones().get_by_id(&zone_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_zone_delete_cascades_through_units() {
        let (db, zone_id) = db_with_zone().await;
        let other = db.zones().create(NewZone::new("Attic")).await.unwrap().id;

        let mut unit_ids = Vec::new();
        for n in 0..3 {
            let unit = db
                .units()
                .create(NewUnit::new(format!("Shelf{}", n), &zone_id))
                .await
                .unwrap();
            for m in 0..4 {
                db.items()
                    .create(NewItem::new(format!("Item{}", m), &unit.id))
                    .await
                    .unwrap();
            }
            unit_ids.push(unit.id);
        }
        let survivor = db.units().create(NewUnit::new("Box", &other)).await.unwrap();
        let survivor_item = db.items().create(NewItem::new("Lamp", &survivor.id)).await.unwrap();

        db.zones().delete(&zone_id).await.unwrap();

        for unit_id in &unit_ids {
            assert_eq!(db.units().get_by_id(unit_id).await.unwrap(), None);
            assert!(db.items().list_by_parent(unit_id).await.unwrap().is_empty());
        }
        assert_eq!(db.units().list_all().await.unwrap(), vec![survivor]);
        assert_eq!(db.items().list_all().await.unwrap(), vec![survivor_item]);
    }
}
