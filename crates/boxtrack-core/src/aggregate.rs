//! # Aggregation Engine
//!
//! Counts and valuations derived from the loaded collections.
//!
//! ## Joins
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Zone Value = Two-Level Join                          │
//! │                                                                         │
//! │  units.filter(room_id == zone)  ──►  {unit ids}                        │
//! │                                          │                              │
//! │  items.filter(bin_id ∈ {unit ids}) ◄─────┘                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Σ quantity × value                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is recomputed on demand. Input order does not matter and
//! empty collections yield zero.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{InventorySnapshot, Item, Unit};

// =============================================================================
// Per-Unit
// =============================================================================

/// Number of items stored in a unit.
pub fn unit_item_count(items: &[Item], unit_id: &str) -> usize {
    items.iter().filter(|i| i.bin_id == unit_id).count()
}

/// Σ `quantity × value` over the items stored in a unit.
pub fn unit_value(items: &[Item], unit_id: &str) -> f64 {
    items
        .iter()
        .filter(|i| i.bin_id == unit_id)
        .map(Item::line_value)
        .sum()
}

/// Σ `quantity` over the items stored in a unit.
///
/// Saturates at the `i64` bounds instead of overflowing.
pub fn unit_quantity(items: &[Item], unit_id: &str) -> i64 {
    items
        .iter()
        .filter(|i| i.bin_id == unit_id)
        .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
}

// =============================================================================
// Per-Zone
// =============================================================================

fn unit_ids_in_zone<'a>(units: &'a [Unit], zone_id: &str) -> HashSet<&'a str> {
    units
        .iter()
        .filter(|u| u.room_id == zone_id)
        .map(|u| u.id.as_str())
        .collect()
}

fn items_in_zone<'a>(
    units: &'a [Unit],
    items: &'a [Item],
    zone_id: &str,
) -> impl Iterator<Item = &'a Item> {
    let unit_ids = unit_ids_in_zone(units, zone_id);
    items
        .iter()
        .filter(move |i| unit_ids.contains(i.bin_id.as_str()))
}

/// Number of units in a zone.
pub fn zone_unit_count(units: &[Unit], zone_id: &str) -> usize {
    units.iter().filter(|u| u.room_id == zone_id).count()
}

/// Number of items in any unit of a zone.
pub fn zone_item_count(units: &[Unit], items: &[Item], zone_id: &str) -> usize {
    items_in_zone(units, items, zone_id).count()
}

/// Σ `quantity × value` over every item in every unit of a zone.
pub fn zone_value(units: &[Unit], items: &[Item], zone_id: &str) -> f64 {
    items_in_zone(units, items, zone_id)
        .map(Item::line_value)
        .sum()
}

// =============================================================================
// System-Wide
// =============================================================================

/// Dashboard figures over the whole inventory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InventoryTotals {
    pub zone_count: usize,
    pub unit_count: usize,
    /// Number of item rows.
    pub item_count: usize,
    /// Σ quantity over all items, saturating at the `i64` bounds.
    #[ts(type = "number")]
    pub total_quantity: i64,
    /// Σ quantity × value over all items.
    pub total_value: f64,
    pub items_with_photo: usize,
}

/// Item-only totals: counts, quantity sum, value sum, photo count.
///
/// `zone_count` and `unit_count` stay zero; see [`InventorySnapshot::totals`].
pub fn item_totals(items: &[Item]) -> InventoryTotals {
    items.iter().fold(InventoryTotals::default(), |mut acc, item| {
        acc.item_count += 1;
        acc.total_quantity = acc.total_quantity.saturating_add(item.quantity);
        acc.total_value += item.line_value();
        if item.has_photo() {
            acc.items_with_photo += 1;
        }
        acc
    })
}

// =============================================================================
// Summaries
// =============================================================================

/// Figures shown next to a unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UnitSummary {
    pub item_count: usize,
    #[ts(type = "number")]
    pub total_quantity: i64,
    pub total_value: f64,
}

/// Figures shown next to a zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ZoneSummary {
    pub unit_count: usize,
    pub item_count: usize,
    pub total_value: f64,
}

impl InventorySnapshot {
    pub fn unit_summary(&self, unit_id: &str) -> UnitSummary {
        UnitSummary {
            item_count: unit_item_count(&self.items, unit_id),
            total_quantity: unit_quantity(&self.items, unit_id),
            total_value: unit_value(&self.items, unit_id),
        }
    }

    pub fn zone_summary(&self, zone_id: &str) -> ZoneSummary {
        ZoneSummary {
            unit_count: zone_unit_count(&self.units, zone_id),
            item_count: zone_item_count(&self.units, &self.items, zone_id),
            total_value: zone_value(&self.units, &self.items, zone_id),
        }
    }

    pub fn totals(&self) -> InventoryTotals {
        InventoryTotals {
            zone_count: self.zones.len(),
            unit_count: self.units.len(),
            ..item_totals(&self.items)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
