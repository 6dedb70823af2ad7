//! # Item Repository
//!
//! Database operations for items.
//!
//! ## Photos
//! `photo_url` is stored as-is: either an external URL or a complete
//! `data:image/...;base64,` payload encoded by the client. There is no size
//! cap, so a store full of inline photos grows accordingly.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use boxtrack_core::schema::ITEMS;
use boxtrack_core::validation::{ItemPatch, NewItem};
use boxtrack_core::{new_id, Item};

use super::{in_insertion_order, ChildRepository, Repository};
use crate::error::{DbError, DbResult};

#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    async fn write(&self, item: &Item) -> DbResult<bool> {
        let result = sqlx::query(&ITEMS.update_sql())
            .bind(&item.id)
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.quantity)
            .bind(item.value)
            .bind(&item.photo_url)
            .bind(&item.bin_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DbError::from(e).with_parent("Item", "Unit", &item.bin_id))?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl Repository for ItemRepository {
    type Entity = Item;
    type New = NewItem;
    type Patch = ItemPatch;

    const ENTITY: &'static str = "Item";

    async fn list_all(&self) -> DbResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(&in_insertion_order(ITEMS.select_sql()))
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }

    async fn get_by_id(&self, id: &str) -> DbResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(&ITEMS.select_where_sql("id"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    async fn create(&self, new: NewItem) -> DbResult<Item> {
        new.validate()?;

        let item = new.into_record(new_id());
        debug!(
            id = %item.id,
            bin_id = %item.bin_id,
            quantity = item.quantity,
            "Creating item"
        );

        sqlx::query(&ITEMS.insert_sql())
            .bind(&item.id)
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.quantity)
            .bind(item.value)
            .bind(&item.photo_url)
            .bind(&item.bin_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DbError::from(e).with_parent("Item", "Unit", &item.bin_id))?;

        Ok(item)
    }

    async fn update(&self, id: &str, patch: ItemPatch) -> DbResult<Option<Item>> {
        debug!(id = %id, "Updating item");

        let Some(mut item) = self.get_by_id(id).await? else {
            return Ok(None);
        };
        if patch.is_empty() {
            return Ok(Some(item));
        }

        patch.apply_to(&mut item);

        if !self.write(&item).await? {
            return Ok(None);
        }

        Ok(Some(item))
    }

    async fn delete(&self, id: &str) -> DbResult<()> {
        let result = sqlx::query(&ITEMS.delete_sql())
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(id = %id, deleted = result.rows_affected(), "Deleted item");
        Ok(())
    }
}

#[async_trait]
impl ChildRepository for ItemRepository {
    async fn list_by_parent(&self, bin_id: &str) -> DbResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(&in_insertion_order(ITEMS.select_where_sql("bin_id")))
            .bind(bin_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(items)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use boxtrack_core::aggregate::unit_value;
    use boxtrack_core::validation::{parse_payload, ItemInput, NewUnit, NewZone};
    use boxtrack_core::ErrorKind;

    async fn db_with_unit() -> (Database, String) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let zone = db.zones().create(NewZone::new("Garage")).await.unwrap();
        let unit = db.units().create(NewUnit::new("Shelf1", &zone.id)).await.unwrap();
        (db, unit.id)
    }

    #[tokio::test]
    async fn test_create_from_payload_round_trip() {
        let (db, unit_id) = db_with_unit().await;
        let body = format!(
            r#"{{"name": "Hammer", "quantity": "2", "value": 10, "binId": "{}"}}"#,
            unit_id
        );
        let new = parse_payload::<ItemInput>(&body).unwrap().into_new().unwrap();

        let created = db.items().create(new).await.unwrap();
        assert_eq!(created.quantity, 2);
        assert_eq!(created.value, 10.0);
        assert_eq!(created.description, "");
        assert_eq!(created.photo_url, None);

        assert_eq!(db.items().get_by_id(&created.id).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn test_defaults_applied() {
        let (db, unit_id) = db_with_unit().await;
        let item = db.items().create(NewItem::new("Tape", &unit_id)).await.unwrap();

        let stored = db.items().fetch(&item.id).await.unwrap();
        assert_eq!(stored.quantity, 1);
        assert_eq!(stored.value, 0.0);
    }

    #[tokio::test]
    async fn test_create_with_missing_unit_fails() {
        let (db, _) = db_with_unit().await;

        let err = db
            .items()
            .create(NewItem::new("Hammer", "no-such-unit"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ReferentialIntegrity);
        assert!(db.items().list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_quantity_only_update() {
        let (db, unit_id) = db_with_unit().await;
        let item = db
            .items()
            .create(
                NewItem::new("Hammer", &unit_id)
                    .description("claw")
                    .quantity(2)
                    .value(10.0)
                    .photo_url("https://example.com/hammer.jpg"),
            )
            .await
            .unwrap();

        let patch = parse_payload::<ItemInput>(r#"{"quantity": 5}"#)
            .unwrap()
            .into_patch()
            .unwrap();
        let updated = db.items().update(&item.id, patch).await.unwrap().unwrap();

        assert_eq!(updated, Item { quantity: 5, ..item });
        assert_eq!(db.items().get_by_id(&updated.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_clear_photo() {
        let (db, unit_id) = db_with_unit().await;
        let item = db
            .items()
            .create(NewItem::new("Saw", &unit_id).photo_url("data:image/png;base64,AAAA"))
            .await
            .unwrap();

        let patch = ItemPatch {
            photo_url: Some(None),
            ..Default::default()
        };
        let updated = db.items().update(&item.id, patch).await.unwrap().unwrap();
        assert_eq!(updated.photo_url, None);
        assert_eq!(db.items().fetch(&item.id).await.unwrap().photo_url, None);
    }

    #[tokio::test]
    async fn test_update_missing_is_none() {
        let (db, _) = db_with_unit().await;
        let patch = ItemPatch {
            quantity: Some(3),
            ..Default::default()
        };

        assert_eq!(db.items().update("nope", patch).await.unwrap(), None);
        assert!(db.items().list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unit_value_tracks_adds_and_removes() {
        let (db, unit_id) = db_with_unit().await;
        db.items()
            .create(NewItem::new("Hammer", &unit_id).quantity(2).value(10.0))
            .await
            .unwrap();

        let before = unit_value(&db.items().list_all().await.unwrap(), &unit_id);

        let nails = db
            .items()
            .create(NewItem::new("Nails", &unit_id).quantity(100).value(0.05))
            .await
            .unwrap();
        let with_nails = unit_value(&db.items().list_all().await.unwrap(), &unit_id);
        assert!((with_nails - (before + nails.line_value())).abs() < 1e-9);

        db.items().delete(&nails.id).await.unwrap();
        let after = unit_value(&db.items().list_all().await.unwrap(), &unit_id);
        assert!((after - before).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_negative_quantity_is_stored() {
        let (db, unit_id) = db_with_unit().await;
        let item = db
            .items()
            .create(NewItem::new("Loaned out", &unit_id).quantity(-1))
            .await
            .unwrap();

        assert_eq!(db.items().fetch(&item.id).await.unwrap().quantity, -1);
    }
}
