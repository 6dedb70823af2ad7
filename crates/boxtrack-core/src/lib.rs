//! # boxtrack-core: Pure Domain Logic for BoxTrack
//!
//! This crate holds the inventory model and every rule that can be expressed
//! without touching the disk: record shapes, payload validation, identifier
//! generation and the aggregation engine.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        BoxTrack Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 HTTP layer / web client                         │   │
//! │  │    /api/rooms ──► /api/bins ──► /api/items                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON payloads                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ boxtrack-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌──────────┐  │   │
//! │  │   │   types   │  │ validation │  │ aggregate │  │    id    │  │   │
//! │  │   │   Zone    │  │ ZoneInput  │  │  counts   │  │  UUID v4 │  │   │
//! │  │   │   Unit    │  │ UnitInput  │  │  values   │  │          │  │   │
//! │  │   │   Item    │  │ ItemInput  │  │  totals   │  │          │  │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 boxtrack-db (Entity Store)                      │   │
//! │  │          SQLite tables, migrations, repositories                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Stored records (Zone, Unit, Item, User) and snapshots
//! - [`schema`] - Table and column lists shared by store and validation
//! - [`validation`] - Input shapes, creation and partial-update validation
//! - [`aggregate`] - Counts and valuations over loaded collections
//! - [`id`] - Opaque identifier generation
//! - [`error`] - Validation errors and error classification
//!
//! ## Example Usage
//!
//! ```rust
//! use boxtrack_core::validation::{parse_payload, ZoneInput};
//!
//! let input: ZoneInput = parse_payload(r#"{"name": "Garage"}"#).unwrap();
//! let zone = input.into_new().unwrap();
//!
//! assert_eq!(zone.description, "");
//! assert_eq!(zone.color, boxtrack_core::DEFAULT_ZONE_COLOR);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod aggregate;
pub mod error;
pub mod id;
pub mod schema;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ErrorKind, ValidationError};
pub use id::new_id;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Color given to a zone created without one.
///
/// Only used by the client for display grouping; never validated as a color.
pub const DEFAULT_ZONE_COLOR: &str = "#FF6600";

/// Quantity given to an item created without one.
pub const DEFAULT_ITEM_QUANTITY: i64 = 1;

/// Unit value given to an item created without one.
pub const DEFAULT_ITEM_VALUE: f64 = 0.0;
