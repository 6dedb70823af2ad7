//! # Repository Module
//!
//! Database repository implementations for BoxTrack.
//!
//! ## Repository Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Contract, Three Entities                         │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  db.units().list_by_parent(room_id)                            │
//! │       ▼                                                                 │
//! │  Repository                          ChildRepository                   │
//! │  ├── list_all()                      └── list_by_parent(parent_id)     │
//! │  ├── get_by_id(id)      → Option         (Unit: room_id,               │
//! │  ├── create(new)        → Entity          Item: bin_id)                │
//! │  ├── update(id, patch)  → Option                                       │
//! │  └── delete(id)         → ()   idempotent, cascades via FK             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite (rooms / bins / items)                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Absence is a value (`Ok(None)`), failure is an error (`Err(DbError)`).
//!
//! ## Available Repositories
//!
//! - [`ZoneRepository`](zone::ZoneRepository) - zones (`rooms`)
//! - [`UnitRepository`](unit::UnitRepository) - units (`bins`)
//! - [`ItemRepository`](item::ItemRepository) - items
//! - [`UserRepository`](user::UserRepository) - the single user table

use async_trait::async_trait;

use crate::error::{DbError, DbResult};

pub mod item;
pub mod unit;
pub mod user;
pub mod zone;

/// CRUD contract shared by zones, units and items.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Stored record returned to callers.
    type Entity: Send;
    /// Validated creation payload.
    type New: Send;
    /// Validated partial update.
    type Patch: Send;

    /// Entity name used in error messages.
    const ENTITY: &'static str;

    /// All rows, in insertion order.
    async fn list_all(&self) -> DbResult<Vec<Self::Entity>>;

    /// The row with this id, or `None`.
    async fn get_by_id(&self, id: &str) -> DbResult<Option<Self::Entity>>;

    /// Assigns a fresh id, persists and returns the full record.
    async fn create(&self, new: Self::New) -> DbResult<Self::Entity>;

    /// Merges the provided fields into an existing row.
    ///
    /// Returns `None` when the id does not exist; never inserts.
    async fn update(&self, id: &str, patch: Self::Patch) -> DbResult<Option<Self::Entity>>;

    /// Removes the row and, through foreign keys, everything it owns.
    ///
    /// Deleting a missing id succeeds.
    async fn delete(&self, id: &str) -> DbResult<()>;

    /// Like [`Repository::get_by_id`] but absence is a `NotFound` error.
    async fn fetch(&self, id: &str) -> DbResult<Self::Entity> {
        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found(Self::ENTITY, id))
    }
}

/// Repositories whose rows belong to a parent row.
#[async_trait]
pub trait ChildRepository: Repository {
    /// Rows owned by `parent_id`; empty when there are none.
    async fn list_by_parent(&self, parent_id: &str) -> DbResult<Vec<Self::Entity>>;
}

/// Appends the insertion-order clause used by every listing.
pub(crate) fn in_insertion_order(sql: String) -> String {
    format!("{} ORDER BY rowid", sql)
}
