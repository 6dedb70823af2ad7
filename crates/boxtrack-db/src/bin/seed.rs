//! # Seed Data Generator
//!
//! Populates a store with a demo household for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./boxtrack.db (or $BOXTRACK_DATA_DIR/boxtrack.db)
//! cargo run -p boxtrack-db --bin seed
//!
//! # Seed another directory, only the first two zones
//! cargo run -p boxtrack-db --bin seed -- --data-dir ./data --zones 2
//! ```
//!
//! ## Generated Data
//! Each zone gets its units, and each unit gets the same small set of items
//! with quantities and values varied by position, so the totals printed at
//! the end are non-trivial.
//!
//! Log output follows `RUST_LOG` (default `info`).

use std::env;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use boxtrack_core::validation::{NewItem, NewUnit, NewZone};
use boxtrack_db::{Database, Repository, StoreConfig};

/// Zones with their color and units.
const ZONES: &[(&str, &str, &[&str])] = &[
    ("Garage", "#FF6600", &["Shelf 1", "Shelf 2", "Workbench"]),
    ("Attic", "#3B82F6", &["Box A", "Box B"]),
    ("Basement", "#10B981", &["Storage Rack", "Tool Chest"]),
    ("Kitchen", "#F59E0B", &["Pantry", "Drawer"]),
    ("Closet", "#8B5CF6", &["Top Shelf"]),
];

/// Item names with their base unit value.
const ITEMS: &[(&str, f64)] = &[
    ("Hammer", 10.0),
    ("Box of Nails", 0.05),
    ("Extension Cord", 12.5),
    ("Flashlight", 8.0),
    ("Tape", 2.25),
];

/// Parsed command line.
#[derive(Debug, PartialEq)]
struct SeedArgs {
    store: StoreConfig,
    zone_count: usize,
    help: bool,
}

/// Parses the arguments after the program name.
fn parse_args(args: &[String]) -> Result<SeedArgs, String> {
    let mut parsed = SeedArgs {
        store: StoreConfig::from_env(),
        zone_count: ZONES.len(),
        help: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--data-dir" | "-d" => {
                let dir = args.get(i + 1).ok_or("--data-dir needs a value")?;
                parsed.store = StoreConfig::new(dir);
                i += 1;
            }
            "--zones" | "-z" => {
                let raw = args.get(i + 1).ok_or("--zones needs a value")?;
                parsed.zone_count = raw
                    .parse()
                    .map_err(|_| format!("--zones expects a number, got '{}'", raw))?;
                i += 1;
            }
            "--help" | "-h" => parsed.help = true,
            other => warn!(arg = other, "Ignoring unknown argument"),
        }
        i += 1;
    }

    Ok(parsed)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let SeedArgs {
        store,
        zone_count,
        help,
    } = parse_args(&args)?;

    if help {
        println!("BoxTrack Seed Data Generator");
        println!();
        println!("Usage: seed [OPTIONS]");
        println!();
        println!("Options:");
        println!("  -d, --data-dir <DIR>  Data directory (default: $BOXTRACK_DATA_DIR or .)");
        println!("  -z, --zones <N>       Number of zones to create (max {})", ZONES.len());
        println!("  -h, --help            Show this help message");
        return Ok(());
    }

    info!(path = %store.database_path().display(), "Seeding store");

    let db = Database::open(&store).await?;

    let existing = db.zones().count().await?;
    if existing > 0 {
        warn!(zones = existing, "Store already has zones, skipping seed");
        return Ok(());
    }

    for (zone_idx, (zone_name, color, units)) in ZONES.iter().take(zone_count).enumerate() {
        let zone = db
            .zones()
            .create(NewZone::new(*zone_name).color(*color))
            .await?;

        for (unit_idx, unit_name) in units.iter().enumerate() {
            let new_unit =
                NewUnit::new(*unit_name, &zone.id).description(format!("{} in {}", unit_name, zone_name));
            let unit = db.units().create(new_unit).await?;

            for (item_idx, (item_name, base_value)) in ITEMS.iter().enumerate() {
                let seed = zone_idx * 100 + unit_idx * 10 + item_idx;
                let item = NewItem::new(*item_name, &unit.id)
                    .quantity(1 + (seed % 7) as i64)
                    .value(*base_value);

                db.items().create(item).await?;
            }
        }

        info!(zone = zone_name, units = units.len(), "Seeded zone");
    }

    let totals = db.snapshot().await?.totals();
    info!(
        zones = totals.zone_count,
        units = totals.unit_count,
        items = totals.item_count,
        quantity = totals.total_quantity,
        value = totals.total_value,
        "Seed complete"
    );

    db.close().await;
    Ok(())
}
