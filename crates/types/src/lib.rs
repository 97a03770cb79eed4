//! Shared type definitions for the related-records list.
//!
//! These types cross crate boundaries: the lookup adapters produce
//! [`RawRecord`]s, the engine turns them into [`ViewRow`]s and
//! [`ColumnSpec`]s, and front ends consume the result together with a
//! [`NavigationIntent`].

use std::{error::Error, fmt, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod config;
pub mod navigation;

pub use config::{DEFAULT_IMAGE_FIELD, DEFAULT_NAVIGATION_NAMESPACE, DEFAULT_RECORD_LIMIT, ListConfig, NavigationConfig};
pub use navigation::NavigationIntent;

/// Upper bound on the number of records requested from the lookup service.
///
/// The display limit never influences the fetch; expanding the list is a
/// projection over rows that were already retrieved.
pub const FETCH_LIMIT: u32 = 200;

/// Name of the unique identifier field every fetched record carries.
pub const RECORD_ID_FIELD: &str = "Id";

/// A record as returned by the lookup service.
///
/// Field access is schema-on-read: the set of keys depends on the
/// configured field specification, so values are resolved by name at
/// runtime. Insertion order is preserved.
pub type RawRecord = IndexMap<String, Value>;

/// Returns the record identifier rendered as a string.
///
/// Strings are returned verbatim, numbers are formatted, and a missing or
/// null identifier yields an empty string.
pub fn record_id(record: &RawRecord) -> String {
    record.get(RECORD_ID_FIELD).map(display_value).unwrap_or_default()
}

/// Relative URL of a record detail page (`/` followed by the identifier).
pub fn record_url(record: &RawRecord) -> String {
    format!("/{}", record_id(record))
}

/// Render a scalar JSON value as display text.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Loose truthiness used when deciding whether an optional field carries a value.
///
/// Null, `false`, zero, and the empty string are falsy; everything else,
/// including empty arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Selects how fetched records are shaped for rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderShape {
    /// Column/row table: records keep all fields plus a synthesized link field.
    #[default]
    Table,
    /// Card list: title, link, and a labeled list of the remaining fields.
    Card,
}

impl fmt::Display for RenderShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => f.write_str("table"),
            Self::Card => f.write_str("card"),
        }
    }
}

impl FromStr for RenderShape {
    type Err = ParseRenderShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "card" | "cards" => Ok(Self::Card),
            _ => Err(ParseRenderShapeError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRenderShapeError(String);

impl fmt::Display for ParseRenderShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid render shape '{}'; expected 'table' or 'card'", self.0)
    }
}

impl Error for ParseRenderShapeError {}

/// Column type understood by table renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Url,
    Text,
}

/// Reference to another field of the same row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRef {
    pub field_name: String,
}

/// Extra rendering attributes for link columns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAttributes {
    /// The field whose value is shown as the link text.
    pub label: FieldRef,
}

/// Column description for the table shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    pub label: String,
    pub field_name: String,
    #[serde(rename = "type")]
    pub kind: ColumnKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_attributes: Option<TypeAttributes>,
    #[serde(default)]
    pub sortable: bool,
}

/// One labeled entry of a card.
///
/// `api_name` and `is_image` are only populated by image-aware lists; plain
/// card lists serialize `{label, value}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardField {
    pub label: String,
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_image: Option<bool>,
}

impl CardField {
    /// A `{label, value}` entry without image metadata.
    pub fn plain(label: impl Into<String>, value: Value) -> Self {
        Self {
            label: label.into(),
            value,
            api_name: None,
            is_image: None,
        }
    }
}

/// Card-shaped row: the primary field becomes the title.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardRow {
    pub id: String,
    pub title: Value,
    pub url: String,
    pub fields: Vec<CardField>,
}

/// A render-ready row in either supported shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ViewRow {
    Card(CardRow),
    Table(RawRecord),
}

impl ViewRow {
    pub fn as_table(&self) -> Option<&RawRecord> {
        match self {
            Self::Table(record) => Some(record),
            Self::Card(_) => None,
        }
    }

    pub fn as_card(&self) -> Option<&CardRow> {
        match self {
            Self::Card(card) => Some(card),
            Self::Table(_) => None,
        }
    }
}

/// Parameters sent to the lookup service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    pub parent_id: String,
    pub child_object_api_name: String,
    pub lookup_field_api_name: String,
    pub fields_string: String,
    pub limit_size: u32,
}

/// A failed lookup.
///
/// `body` is the structured error payload when the service provided one;
/// `raw` is the complete rejection used as a last-resort message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LookupRejection {
    #[serde(default)]
    pub body: Option<Value>,
    pub raw: Value,
}

impl LookupRejection {
    /// Rejection carrying a structured `{message}` body.
    pub fn with_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let body = serde_json::json!({ "message": message });
        Self {
            raw: serde_json::json!({ "body": body.clone() }),
            body: Some(body),
        }
    }

    /// Rejection without a structured body.
    pub fn from_raw(raw: Value) -> Self {
        Self { body: None, raw }
    }
}
