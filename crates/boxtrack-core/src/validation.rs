//! # Validation Module
//!
//! Accepted input shapes for zones, units and items.
//!
//! ## Two Shapes Per Entity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      From Payload to Record                             │
//! │                                                                         │
//! │  JSON body                                                             │
//! │       │  parse_payload::<ItemInput>()   (every field optional)         │
//! │       ▼                                                                 │
//! │  ItemInput                                                             │
//! │       ├── into_new()   ──► NewItem    required fields checked,         │
//! │       │                               defaults applied                 │
//! │       │                                                                 │
//! │       └── into_patch() ──► ItemPatch  same per-field rules,            │
//! │                                       omitted fields stay None         │
//! │                                                                         │
//! │  NewItem::into_record(id)   ──► Item                                   │
//! │  ItemPatch::apply_to(&mut Item)                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rules
//! - `name` is required on creation and must not be blank after trimming.
//! - `description` defaults to `""`.
//! - `quantity` accepts numbers or numeric strings, must be integral, defaults to 1.
//! - `value` accepts numbers or numeric strings, must be finite, defaults to 0.
//! - `photoUrl` is not validated. In a patch, `null` clears it.
//! - Parent ids must not be blank. Whether they exist is checked by the store.
//!
//! Negative quantities and values are accepted.
//!
//! ## Usage
//! ```rust
//! use boxtrack_core::validation::{parse_payload, ItemInput};
//!
//! let input: ItemInput =
//!     parse_payload(r#"{"name": "Nails", "quantity": "100", "binId": "b1"}"#).unwrap();
//! let item = input.into_new().unwrap();
//! assert_eq!(item.quantity, 100);
//! assert_eq!(item.value, 0.0);
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::error::{ValidationError, ValidationResult};
use crate::types::{Item, Unit, Zone};
use crate::{DEFAULT_ITEM_QUANTITY, DEFAULT_ITEM_VALUE, DEFAULT_ZONE_COLOR};

// =============================================================================
// Payload Parsing
// =============================================================================

/// Parses a JSON body into an input shape.
///
/// Unknown fields (including a client-sent `id`) are ignored. Syntax errors
/// and wrongly typed fields become [`ValidationError::MalformedPayload`].
pub fn parse_payload<T: DeserializeOwned>(json: &str) -> ValidationResult<T> {
    serde_json::from_str(json).map_err(|e| ValidationError::MalformedPayload(e.to_string()))
}

/// Same as [`parse_payload`] for an already decoded JSON value.
pub fn from_value<T: DeserializeOwned>(value: serde_json::Value) -> ValidationResult<T> {
    serde_json::from_value(value).map_err(|e| ValidationError::MalformedPayload(e.to_string()))
}

/// A numeric field as it may arrive: a JSON number or a numeric string.
///
/// Form posts send everything as text, so `"3"` has to be accepted where
/// `3` is.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Numeric {
    /// Coerces to an integer. Integral floats (`3.0`) are accepted.
    pub fn to_integer(&self, field: &str) -> ValidationResult<i64> {
        let invalid = |got: String| ValidationError::InvalidNumber {
            field: field.to_string(),
            expected: "an integer".to_string(),
            got,
        };

        match self {
            Numeric::Int(n) => Ok(*n),
            Numeric::Float(f) => float_to_integer(*f).ok_or_else(|| invalid(f.to_string())),
            Numeric::Text(s) => {
                let trimmed = s.trim();
                if let Ok(n) = trimmed.parse::<i64>() {
                    return Ok(n);
                }
                trimmed
                    .parse::<f64>()
                    .ok()
                    .and_then(float_to_integer)
                    .ok_or_else(|| invalid(s.clone()))
            }
        }
    }

    /// Coerces to a finite float.
    pub fn to_float(&self, field: &str) -> ValidationResult<f64> {
        let value = match self {
            Numeric::Int(n) => Some(*n as f64),
            Numeric::Float(f) => Some(*f),
            Numeric::Text(s) => s.trim().parse::<f64>().ok(),
        };

        match value {
            Some(v) if v.is_finite() => Ok(v),
            _ => Err(ValidationError::InvalidNumber {
                field: field.to_string(),
                expected: "a finite number".to_string(),
                got: match self {
                    Numeric::Int(n) => n.to_string(),
                    Numeric::Float(f) => f.to_string(),
                    Numeric::Text(s) => s.clone(),
                },
            }),
        }
    }
}

fn float_to_integer(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Distinguishes an absent field from an explicit `null`.
///
/// Used with `#[serde(default)]`: absent → `None`, `null` → `Some(None)`.
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a display name (zone, unit or item).
///
/// The name is kept as submitted; trimming is only used for the check.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::required("name"));
    }
    Ok(())
}

/// Validates a parent reference. Existence is checked by the store.
pub fn validate_parent_id(field: &str, id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

fn require<T>(field: &str, value: Option<T>) -> ValidationResult<T> {
    value.ok_or_else(|| ValidationError::required(field))
}

// =============================================================================
// Zone
// =============================================================================

/// Raw zone payload. Every field optional; see [`ZoneInput::into_new`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl ZoneInput {
    /// Payload field names, in `schema::ZONES` column order.
    pub const FIELDS: &'static [&'static str] = &["name", "description", "color"];

    /// Validates the creation shape and applies defaults.
    pub fn into_new(self) -> ValidationResult<NewZone> {
        let new = NewZone {
            name: require("name", self.name)?,
            description: self.description.unwrap_or_default(),
            color: self.color.unwrap_or_else(|| DEFAULT_ZONE_COLOR.to_string()),
        };
        new.validate()?;
        Ok(new)
    }

    /// Validates the partial-update shape.
    pub fn into_patch(self) -> ValidationResult<ZonePatch> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        Ok(ZonePatch {
            name: self.name,
            description: self.description,
            color: self.color,
        })
    }
}

/// A validated zone creation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewZone {
    pub name: String,
    pub description: String,
    pub color: String,
}

impl NewZone {
    /// A zone with the given name and default description and color.
    pub fn new(name: impl Into<String>) -> Self {
        NewZone {
            name: name.into(),
            description: String::new(),
            color: DEFAULT_ZONE_COLOR.to_string(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn validate(&self) -> ValidationResult<()> {
        validate_name(&self.name)
    }

    pub fn into_record(self, id: String) -> Zone {
        Zone {
            id,
            name: self.name,
            description: self.description,
            color: self.color,
        }
    }
}

/// A validated zone update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZonePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl ZonePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.color.is_none()
    }

    pub fn apply_to(self, zone: &mut Zone) {
        if let Some(name) = self.name {
            zone.name = name;
        }
        if let Some(description) = self.description {
            zone.description = description;
        }
        if let Some(color) = self.color {
            zone.color = color;
        }
    }
}

// =============================================================================
// Unit
// =============================================================================

/// Raw unit payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub room_id: Option<String>,
}

impl UnitInput {
    /// Payload field names, in `schema::UNITS` column order.
    pub const FIELDS: &'static [&'static str] = &["name", "description", "roomId"];

    pub fn into_new(self) -> ValidationResult<NewUnit> {
        let new = NewUnit {
            name: require("name", self.name)?,
            description: self.description.unwrap_or_default(),
            room_id: require("roomId", self.room_id)?,
        };
        new.validate()?;
        Ok(new)
    }

    pub fn into_patch(self) -> ValidationResult<UnitPatch> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(room_id) = &self.room_id {
            validate_parent_id("roomId", room_id)?;
        }
        Ok(UnitPatch {
            name: self.name,
            description: self.description,
            room_id: self.room_id,
        })
    }
}

/// A validated unit creation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUnit {
    pub name: String,
    pub description: String,
    pub room_id: String,
}

impl NewUnit {
    pub fn new(name: impl Into<String>, room_id: impl Into<String>) -> Self {
        NewUnit {
            name: name.into(),
            description: String::new(),
            room_id: room_id.into(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn validate(&self) -> ValidationResult<()> {
        validate_name(&self.name)?;
        validate_parent_id("roomId", &self.room_id)
    }

    pub fn into_record(self, id: String) -> Unit {
        Unit {
            id,
            name: self.name,
            description: self.description,
            room_id: self.room_id,
        }
    }
}

/// A validated unit update. Setting `room_id` moves the unit to another zone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub room_id: Option<String>,
}

impl UnitPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.room_id.is_none()
    }

    pub fn apply_to(self, unit: &mut Unit) {
        if let Some(name) = self.name {
            unit.name = name;
        }
        if let Some(description) = self.description {
            unit.description = description;
        }
        if let Some(room_id) = self.room_id {
            unit.room_id = room_id;
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// Raw item payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<Numeric>,
    pub value: Option<Numeric>,
    #[serde(default, deserialize_with = "double_option")]
    pub photo_url: Option<Option<String>>,
    pub bin_id: Option<String>,
}

impl ItemInput {
    /// Payload field names, in `schema::ITEMS` column order.
    pub const FIELDS: &'static [&'static str] = &[
        "name",
        "description",
        "quantity",
        "value",
        "photoUrl",
        "binId",
    ];

    pub fn into_new(self) -> ValidationResult<NewItem> {
        let quantity = match &self.quantity {
            Some(q) => q.to_integer("quantity")?,
            None => DEFAULT_ITEM_QUANTITY,
        };
        let value = match &self.value {
            Some(v) => v.to_float("value")?,
            None => DEFAULT_ITEM_VALUE,
        };

        let new = NewItem {
            name: require("name", self.name)?,
            description: self.description.unwrap_or_default(),
            quantity,
            value,
            photo_url: self.photo_url.flatten(),
            bin_id: require("binId", self.bin_id)?,
        };
        new.validate()?;
        Ok(new)
    }

    pub fn into_patch(self) -> ValidationResult<ItemPatch> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(bin_id) = &self.bin_id {
            validate_parent_id("binId", bin_id)?;
        }

        Ok(ItemPatch {
            quantity: self
                .quantity
                .map(|q| q.to_integer("quantity"))
                .transpose()?,
            value: self.value.map(|v| v.to_float("value")).transpose()?,
            name: self.name,
            description: self.description,
            photo_url: self.photo_url,
            bin_id: self.bin_id,
        })
    }
}

/// A validated item creation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub quantity: i64,
    pub value: f64,
    pub photo_url: Option<String>,
    pub bin_id: String,
}

impl NewItem {
    /// An item with quantity 1, value 0 and no photo.
    pub fn new(name: impl Into<String>, bin_id: impl Into<String>) -> Self {
        NewItem {
            name: name.into(),
            description: String::new(),
            quantity: DEFAULT_ITEM_QUANTITY,
            value: DEFAULT_ITEM_VALUE,
            photo_url: None,
            bin_id: bin_id.into(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn photo_url(mut self, photo_url: impl Into<String>) -> Self {
        self.photo_url = Some(photo_url.into());
        self
    }

    pub fn validate(&self) -> ValidationResult<()> {
        validate_name(&self.name)?;
        validate_parent_id("binId", &self.bin_id)?;
        if !self.value.is_finite() {
            return Err(ValidationError::InvalidNumber {
                field: "value".to_string(),
                expected: "a finite number".to_string(),
                got: self.value.to_string(),
            });
        }
        Ok(())
    }

    pub fn into_record(self, id: String) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
            quantity: self.quantity,
            value: self.value,
            photo_url: self.photo_url,
            bin_id: self.bin_id,
        }
    }
}

/// A validated item update.
///
/// `photo_url`: `None` leaves it, `Some(None)` clears it, `Some(Some(url))`
/// replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i64>,
    pub value: Option<f64>,
    pub photo_url: Option<Option<String>>,
    pub bin_id: Option<String>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.quantity.is_none()
            && self.value.is_none()
            && self.photo_url.is_none()
            && self.bin_id.is_none()
    }

    pub fn apply_to(self, item: &mut Item) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(value) = self.value {
            item.value = value;
        }
        if let Some(photo_url) = self.photo_url {
            item.photo_url = photo_url;
        }
        if let Some(bin_id) = self.bin_id {
            item.bin_id = bin_id;
        }
    }
}

// =============================================================================
// User
// =============================================================================

/// A user registration. `password` is plaintext until the store hashes it.
#[derive(Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        NewUser {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> ValidationResult<()> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::required("username"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::required("password"));
        }
        if self.username.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidFormat {
                field: "username".to_string(),
                reason: "must not contain whitespace".to_string(),
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{self, column_for_field};

    fn item_record() -> Item {
        NewItem::new("Hammer", "bin-1")
            .quantity(2)
            .value(10.0)
            .photo_url("https://example.com/hammer.jpg")
            .description("claw")
            .into_record("item-1".to_string())
    }

    #[test]
    fn test_input_fields_match_table_columns() {
        let check = |fields: &[&str], table: schema::Table| {
            let columns: Vec<String> = fields.iter().map(|f| column_for_field(f)).collect();
            assert_eq!(columns, table.data_columns(), "table {}", table.name);
        };

        check(ZoneInput::FIELDS, schema::ZONES);
        check(UnitInput::FIELDS, schema::UNITS);
        check(ItemInput::FIELDS, schema::ITEMS);
    }

    #[test]
    fn test_zone_defaults() {
        let input: ZoneInput = parse_payload(r#"{"name": "Garage"}"#).unwrap();
        let zone = input.into_new().unwrap();

        assert_eq!(zone.name, "Garage");
        assert_eq!(zone.description, "");
        assert_eq!(zone.color, DEFAULT_ZONE_COLOR);
    }

    #[test]
    fn test_name_required() {
        let input: ZoneInput = parse_payload(r#"{"description": "x"}"#).unwrap();
        assert_eq!(input.into_new(), Err(ValidationError::required("name")));

        let input: ZoneInput = parse_payload(r#"{"name": "   "}"#).unwrap();
        assert_eq!(input.into_new(), Err(ValidationError::required("name")));
    }

    #[test]
    fn test_client_id_is_ignored() {
        let input: ZoneInput = parse_payload(r#"{"id": "mine", "name": "Attic"}"#).unwrap();
        assert_eq!(input.into_new().unwrap().name, "Attic");
    }

    #[test]
    fn test_wrong_type_is_malformed() {
        let result: ValidationResult<ZoneInput> = parse_payload(r#"{"name": 42}"#);
        assert!(matches!(result, Err(ValidationError::MalformedPayload(_))));

        let result: ValidationResult<ZoneInput> = parse_payload("not json");
        assert!(matches!(result, Err(ValidationError::MalformedPayload(_))));
    }

    #[test]
    fn test_unit_requires_room() {
        let input: UnitInput = parse_payload(r#"{"name": "Shelf1"}"#).unwrap();
        assert_eq!(input.into_new(), Err(ValidationError::required("roomId")));

        let input: UnitInput = parse_payload(r#"{"name": "Shelf1", "roomId": " "}"#).unwrap();
        assert_eq!(input.into_new(), Err(ValidationError::required("roomId")));
    }

    #[test]
    fn test_item_defaults() {
        let input: ItemInput = parse_payload(r#"{"name": "Hammer", "binId": "b"}"#).unwrap();
        let item = input.into_new().unwrap();

        assert_eq!(item.quantity, 1);
        assert_eq!(item.value, 0.0);
        assert_eq!(item.photo_url, None);
        assert_eq!(item.description, "");
    }

    #[test]
    fn test_item_numeric_coercion() {
        let input: ItemInput = parse_payload(
            r#"{"name": "Nails", "binId": "b", "quantity": "100", "value": "0.05"}"#,
        )
        .unwrap();
        let item = input.into_new().unwrap();
        assert_eq!(item.quantity, 100);
        assert_eq!(item.value, 0.05);

        let input: ItemInput =
            parse_payload(r#"{"name": "Nails", "binId": "b", "quantity": 3.0, "value": 2}"#)
                .unwrap();
        let item = input.into_new().unwrap();
        assert_eq!(item.quantity, 3);
        assert_eq!(item.value, 2.0);
    }

    #[test]
    fn test_item_rejects_non_numeric() {
        let input: ItemInput =
            parse_payload(r#"{"name": "Nails", "binId": "b", "quantity": "lots"}"#).unwrap();
        assert!(matches!(
            input.into_new(),
            Err(ValidationError::InvalidNumber { ref field, .. }) if field == "quantity"
        ));

        let input: ItemInput =
            parse_payload(r#"{"name": "Nails", "binId": "b", "quantity": 2.5}"#).unwrap();
        assert!(input.into_new().is_err());

        let input: ItemInput =
            parse_payload(r#"{"name": "Nails", "binId": "b", "value": "inf"}"#).unwrap();
        assert!(input.into_new().is_err());
    }

    #[test]
    fn test_negative_quantity_is_accepted() {
        let input: ItemInput =
            parse_payload(r#"{"name": "Loan", "binId": "b", "quantity": -2, "value": -1.5}"#)
                .unwrap();
        let item = input.into_new().unwrap();
        assert_eq!(item.quantity, -2);
        assert_eq!(item.value, -1.5);
    }

    #[test]
    fn test_patch_fields_optional() {
        let patch = parse_payload::<ItemInput>("{}")
            .unwrap()
            .into_patch()
            .unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_patch_rejects_blank_name() {
        let input: ZoneInput = parse_payload(r#"{"name": ""}"#).unwrap();
        assert_eq!(input.into_patch(), Err(ValidationError::required("name")));
    }

    #[test]
    fn test_quantity_only_patch_leaves_other_fields() {
        let mut item = item_record();
        let before = item.clone();

        let patch = parse_payload::<ItemInput>(r#"{"quantity": "7"}"#)
            .unwrap()
            .into_patch()
            .unwrap();
        patch.apply_to(&mut item);

        assert_eq!(item.quantity, 7);
        assert_eq!(item.name, before.name);
        assert_eq!(item.description, before.description);
        assert_eq!(item.value, before.value);
        assert_eq!(item.photo_url, before.photo_url);
        assert_eq!(item.bin_id, before.bin_id);
    }

    #[test]
    fn test_patch_photo_tri_state() {
        let mut item = item_record();

        let absent = parse_payload::<ItemInput>(r#"{"name": "Mallet"}"#)
            .unwrap()
            .into_patch()
            .unwrap();
        assert_eq!(absent.photo_url, None);
        absent.apply_to(&mut item);
        assert!(item.photo_url.is_some());

        let cleared = parse_payload::<ItemInput>(r#"{"photoUrl": null}"#)
            .unwrap()
            .into_patch()
            .unwrap();
        assert_eq!(cleared.photo_url, Some(None));
        cleared.apply_to(&mut item);
        assert_eq!(item.photo_url, None);

        let replaced = parse_payload::<ItemInput>(r#"{"photoUrl": "data:image/png;base64,AAAA"}"#)
            .unwrap()
            .into_patch()
            .unwrap();
        replaced.apply_to(&mut item);
        assert_eq!(item.photo_url.as_deref(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_unit_patch_moves_zone() {
        let mut unit = NewUnit::new("Shelf1", "zone-a").into_record("u".to_string());
        let patch = parse_payload::<UnitInput>(r#"{"roomId": "zone-b"}"#)
            .unwrap()
            .into_patch()
            .unwrap();
        patch.apply_to(&mut unit);
        assert_eq!(unit.room_id, "zone-b");
        assert_eq!(unit.name, "Shelf1");
    }

    #[test]
    fn test_new_user_validation() {
        assert!(NewUser::new("admin", "hunter2").validate().is_ok());
        assert_eq!(
            NewUser::new(" ", "hunter2").validate(),
            Err(ValidationError::required("username"))
        );
        assert_eq!(
            NewUser::new("admin", "").validate(),
            Err(ValidationError::required("password"))
        );
        assert!(matches!(
            NewUser::new("ad min", "x").validate(),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_new_user_debug_hides_password() {
        let debug = format!("{:?}", NewUser::new("admin", "hunter2"));
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
    }
}
