//! # Domain Types
//!
//! Stored records used throughout BoxTrack.
//!
//! ## Containment Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Zone       │   │      Unit       │   │      Item       │       │
//! │  │   (rooms)       │   │    (bins)       │   │    (items)      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  room_id (FK)   │◄──│  bin_id (FK)    │       │
//! │  │  name           │   │  id             │   │  id             │       │
//! │  │  description    │   │  name           │   │  name           │       │
//! │  │  color          │   │  description    │   │  quantity       │       │
//! │  └─────────────────┘   └─────────────────┘   │  value          │       │
//! │                                               │  photo_url      │       │
//! │        ON DELETE CASCADE ───────────────────► └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! These are the storage record shapes. The accepted input shapes live in
//! [`crate::validation`]; both are tied to [`crate::schema`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Zone
// =============================================================================

/// Top-level storage location, e.g. a room or a garage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Zone {
    /// Opaque unique identifier.
    pub id: String,

    pub name: String,

    /// Free text, empty when not given.
    pub description: String,

    /// Display color for grouping in the client. Not validated.
    pub color: String,
}

// =============================================================================
// Unit
// =============================================================================

/// A container (bin, shelf, box) inside exactly one zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Unit {
    pub id: String,
    pub name: String,
    pub description: String,

    /// Owning zone. Never dangling: enforced by foreign key.
    pub room_id: String,
}

// =============================================================================
// Item
// =============================================================================

/// A tracked physical object inside exactly one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,

    /// How many of this item are stored. Negative values are accepted.
    #[ts(type = "number")]
    pub quantity: i64,

    /// Price of a single unit of quantity.
    pub value: f64,

    /// External URL or inline base64 data URL. Not validated.
    pub photo_url: Option<String>,

    /// Owning unit. Never dangling: enforced by foreign key.
    pub bin_id: String,
}

impl Item {
    /// Monetary value of the whole line: `quantity × value`.
    #[inline]
    pub fn line_value(&self) -> f64 {
        self.quantity as f64 * self.value
    }

    /// Whether a non-empty photo is attached.
    #[inline]
    pub fn has_photo(&self) -> bool {
        self.photo_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

// =============================================================================
// User
// =============================================================================

/// The single user record.
///
/// Not used by the inventory hierarchy. `password` holds an argon2 PHC hash
/// and is never serialized out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

// =============================================================================
// Snapshot
// =============================================================================

/// The three inventory collections as loaded at one point in time.
///
/// Aggregations run over this (see [`crate::aggregate`]); nothing here is
/// cached or persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub zones: Vec<Zone>,
    pub units: Vec<Unit>,
    pub items: Vec<Item>,
}

// =============================================================================
// Unit Tests
// =============================================================================
