//! # Schema Field Lists
//!
//! The single source of truth for table and column names.
//!
//! ## Who Uses This
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Field List, Two Shapes                           │
//! │                                                                         │
//! │                    ZONES.columns                                        │
//! │                 ["id","name","description","color"]                     │
//! │                    │                     │                              │
//! │                    ▼                     ▼                              │
//! │   boxtrack-db: SELECT / INSERT      validation: ZoneInput::FIELDS      │
//! │   / UPDATE statements               must equal columns minus "id"      │
//! │                                     (checked by unit test)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Column order is also bind order: repositories bind values in exactly the
//! order listed here.

/// A persisted table and its ordered column list.
///
/// The first column is always the primary key `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

/// Zones are stored in the `rooms` table.
pub const ZONES: Table = Table {
    name: "rooms",
    columns: &["id", "name", "description", "color"],
};

/// Units are stored in the `bins` table.
pub const UNITS: Table = Table {
    name: "bins",
    columns: &["id", "name", "description", "room_id"],
};

pub const ITEMS: Table = Table {
    name: "items",
    columns: &[
        "id",
        "name",
        "description",
        "quantity",
        "value",
        "photo_url",
        "bin_id",
    ],
};

pub const USERS: Table = Table {
    name: "users",
    columns: &["id", "username", "password"],
};

impl Table {
    /// Columns other than the primary key.
    pub fn data_columns(&self) -> &'static [&'static str] {
        &self.columns[1..]
    }

    /// `SELECT <all columns> FROM <table>`
    pub fn select_sql(&self) -> String {
        format!("SELECT {} FROM {}", self.columns.join(", "), self.name)
    }

    /// `SELECT ... FROM <table> WHERE <column> = ?1`
    pub fn select_where_sql(&self, column: &str) -> String {
        format!("{} WHERE {} = ?1", self.select_sql(), column)
    }

    /// `INSERT INTO <table> (<all columns>) VALUES (?1, ?2, ...)`
    pub fn insert_sql(&self) -> String {
        let placeholders: Vec<String> =
            (1..=self.columns.len()).map(|i| format!("?{}", i)).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.name,
            self.columns.join(", "),
            placeholders.join(", ")
        )
    }

    /// `UPDATE <table> SET c2 = ?2, c3 = ?3, ... WHERE id = ?1`
    pub fn update_sql(&self) -> String {
        let assignments: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, column)| format!("{} = ?{}", column, i + 1))
            .collect();
        format!(
            "UPDATE {} SET {} WHERE id = ?1",
            self.name,
            assignments.join(", ")
        )
    }

    /// `DELETE FROM <table> WHERE id = ?1`
    pub fn delete_sql(&self) -> String {
        format!("DELETE FROM {} WHERE id = ?1", self.name)
    }

    /// `SELECT COUNT(*) FROM <table>`
    pub fn count_sql(&self) -> String {
        format!("SELECT COUNT(*) FROM {}", self.name)
    }
}

/// Converts a camelCase payload field name to its snake_case column name.
pub fn column_for_field(field: &str) -> String {
    let mut column = String::with_capacity(field.len() + 4);
    for c in field.chars() {
        if c.is_ascii_uppercase() {
            column.push('_');
            column.push(c.to_ascii_lowercase());
        } else {
            column.push(c);
        }
    }
    column
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_sql() {
        assert_eq!(
            ZONES.select_sql(),
            "SELECT id, name, description, color FROM rooms"
        );
        assert_eq!(
            UNITS.select_where_sql("room_id"),
            "SELECT id, name, description, room_id FROM bins WHERE room_id = ?1"
        );
    }

    #[test]
    fn test_insert_sql() {
        assert_eq!(
            USERS.insert_sql(),
            "INSERT INTO users (id, username, password) VALUES (?1, ?2, ?3)"
        );
    }

    #[test]
    fn test_update_sql_skips_id() {
        assert_eq!(
            ZONES.update_sql(),
            "UPDATE rooms SET name = ?2, description = ?3, color = ?4 WHERE id = ?1"
        );
    }

    #[test]
    fn test_count_sql() {
        assert_eq!(ZONES.count_sql(), "SELECT COUNT(*) FROM rooms");
        assert_eq!(ITEMS.count_sql(), "SELECT COUNT(*) FROM items");
    }

    #[test]
    fn test_column_for_field() {
        assert_eq!(column_for_field("photoUrl"), "photo_url");
        assert_eq!(column_for_field("roomId"), "room_id");
        assert_eq!(column_for_field("name"), "name");
    }
}
