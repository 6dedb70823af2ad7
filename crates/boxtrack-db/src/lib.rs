//! # boxtrack-db: Entity Store for BoxTrack
//!
//! Persistence for zones, units and items in a single SQLite file, using
//! sqlx for async access.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        BoxTrack Data Flow                               │
//! │                                                                         │
//! │  HTTP handler (GET /api/rooms/:id/bins)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   boxtrack-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │   (zone.rs)   │    │  (embedded   │  │   │
//! │  │   │               │    │               │    │  + additive) │  │   │
//! │  │   │ StoreConfig   │    │ ZoneRepo      │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ UnitRepo      │    │ 001_init.sql │  │   │
//! │  │   │ snapshot()    │    │ ItemRepo      │    │ rooms.color  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   $BOXTRACK_DATA_DIR/boxtrack.db  (WAL, foreign keys ON)        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Data directory resolution
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded and additive migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (zone, unit, item, user)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use boxtrack_db::{ChildRepository, Database, Repository, StoreConfig};
//! use boxtrack_core::validation::NewZone;
//!
//! let db = Database::open(&StoreConfig::from_env()).await?;
//!
//! let garage = db.zones().create(NewZone::new("Garage")).await?;
//! let units = db.units().list_by_parent(&garage.id).await?;
//!
//! let totals = db.snapshot().await?.totals();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::StoreConfig;
pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::{ChildRepository, Repository};

// Repository re-exports for convenience
pub use repository::item::ItemRepository;
pub use repository::unit::UnitRepository;
pub use repository::user::UserRepository;
pub use repository::zone::ZoneRepository;
