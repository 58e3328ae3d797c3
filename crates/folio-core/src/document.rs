//! Untyped documents as they arrive from the document store.
//!
//! A [`Document`] is a string-keyed map of [`FieldValue`]s with no enforced
//! schema. Values mirror the store's native value types, so a timestamp
//! written by the store is distinguishable from a date the editor typed as
//! text. The serialized form is externally tagged (`{"stringValue": "..."}`,
//! `{"timestampValue": "2024-01-01T00:00:00Z"}`), the same shape the store's
//! REST encoding uses.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Field map of one stored document.
pub type Document = BTreeMap<String, FieldValue>;

/// Key under which the document id is exposed to the normalizer.
pub const ID_FIELD: &str = "id";

/// Creation timestamp written by the admin forms; authoritative for ordering.
pub const CREATED_AT_FIELD: &str = "createdAt";

/// Update timestamp written by the admin forms on edit.
pub const UPDATED_AT_FIELD: &str = "updatedAt";

/// One value inside a stored document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldValue {
    NullValue,
    BooleanValue(bool),
    IntegerValue(i64),
    DoubleValue(f64),
    StringValue(String),
    TimestampValue(DateTime<Utc>),
    ArrayValue(Vec<FieldValue>),
    MapValue(Document),
}

impl FieldValue {
    /// Borrow the string payload, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::StringValue(s) => Some(s),
            _ => None,
        }
    }

    /// The timestamp payload, if this is a native timestamp.
    #[must_use]
    pub const fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::TimestampValue(ts) => Some(*ts),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::ArrayValue(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_map(&self) -> Option<&Document> {
        match self {
            Self::MapValue(map) => Some(map),
            _ => None,
        }
    }

    /// Short name of the value type, for log messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::NullValue => "null",
            Self::BooleanValue(_) => "boolean",
            Self::IntegerValue(_) => "integer",
            Self::DoubleValue(_) => "double",
            Self::StringValue(_) => "string",
            Self::TimestampValue(_) => "timestamp",
            Self::ArrayValue(_) => "array",
            Self::MapValue(_) => "map",
        }
    }

    /// Convert plain JSON into a field value.
    ///
    /// JSON has no timestamp type, so dates in plain JSON always become
    /// strings. Use [`FieldValue::TimestampValue`] directly for native
    /// timestamps.
    #[must_use]
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::NullValue,
            serde_json::Value::Bool(b) => Self::BooleanValue(b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map_or_else(|| Self::DoubleValue(n.as_f64().unwrap_or(f64::NAN)), Self::IntegerValue),
            serde_json::Value::String(s) => Self::StringValue(s),
            serde_json::Value::Array(items) => {
                Self::ArrayValue(items.into_iter().map(Self::from_json).collect())
            }
            serde_json::Value::Object(map) => Self::MapValue(document_from_json(map)),
        }
    }

    /// Rank of the value type in the store's cross-type ordering.
    const fn type_rank(&self) -> u8 {
        match self {
            Self::NullValue => 0,
            Self::BooleanValue(_) => 1,
            Self::IntegerValue(_) | Self::DoubleValue(_) => 2,
            Self::TimestampValue(_) => 3,
            Self::StringValue(_) => 4,
            Self::ArrayValue(_) => 5,
            Self::MapValue(_) => 6,
        }
    }

    /// Total order used for `orderBy` reads.
    ///
    /// Values of different types order by type rank
    /// (null < boolean < number < timestamp < string < array < map).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn store_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::BooleanValue(a), Self::BooleanValue(b)) => a.cmp(b),
            (Self::IntegerValue(a), Self::IntegerValue(b)) => a.cmp(b),
            (Self::IntegerValue(a), Self::DoubleValue(b)) => (*a as f64).total_cmp(b),
            (Self::DoubleValue(a), Self::IntegerValue(b)) => a.total_cmp(&(*b as f64)),
            (Self::DoubleValue(a), Self::DoubleValue(b)) => a.total_cmp(b),
            (Self::TimestampValue(a), Self::TimestampValue(b)) => a.cmp(b),
            (Self::StringValue(a), Self::StringValue(b)) => a.cmp(b),
            (Self::ArrayValue(a), Self::ArrayValue(b)) => a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| x.store_cmp(y))
                .find(|ord| ord.is_ne())
                .unwrap_or_else(|| a.len().cmp(&b.len())),
            (Self::MapValue(a), Self::MapValue(b)) => a.len().cmp(&b.len()),
            _ => self.type_rank().cmp(&other.type_rank()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::StringValue(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::StringValue(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::TimestampValue(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::BooleanValue(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::IntegerValue(value)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        Self::ArrayValue(values.into_iter().map(Into::into).collect())
    }
}

/// Convert a JSON object into a document (see [`FieldValue::from_json`]).
#[must_use]
pub fn document_from_json(map: serde_json::Map<String, serde_json::Value>) -> Document {
    map.into_iter()
        .map(|(key, value)| (key, FieldValue::from_json(value)))
        .collect()
}

/// A document together with its store-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub id: String,
    pub fields: Document,
}

impl StoredDocument {
    #[must_use]
    pub fn new(id: impl Into<String>, fields: Document) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Look up a field by name.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Field map with the document id exposed under [`ID_FIELD`].
    ///
    /// The store id wins over any `id` key stored inside the document.
    #[must_use]
    pub fn with_id_field(&self) -> Document {
        let mut fields = self.fields.clone();
        fields.insert(ID_FIELD.to_string(), FieldValue::StringValue(self.id.clone()));
        fields
    }
}
