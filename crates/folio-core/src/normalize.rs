//! The document normalizer.
//!
//! One generic function turns a raw, possibly partial document into a
//! canonical record by walking the kind's field-spec table. Fallback is per
//! field: a document missing only `portraitImageHint` still surfaces its
//! stored `greetingName`. Nothing here fails; malformed fields degrade to the
//! default and the condition is logged.

use serde_json::{Map, Value};

use crate::coerce::{coerce_to_list, derive_excerpt, format_display_date, parse_timestamp};
use crate::defaults;
use crate::document::{Document, FieldValue, ID_FIELD, StoredDocument};
use crate::entities::ContentRecord;
use crate::enums::ContentKind;
use crate::fields::{FieldShape, FieldSpec, spec_for};

/// Normalize `raw` into a JSON object following `specs`.
///
/// Every field in `specs` is present in the output. Required fields fall back
/// to `defaults`; optional fields (`OptionalText`, `Timestamp`) are `null`
/// when neither the document nor the default has a value.
#[must_use]
pub fn normalize_fields(
    specs: &[FieldSpec],
    raw: Option<&Document>,
    defaults: &Map<String, Value>,
) -> Map<String, Value> {
    let get = |name: &str| lookup(raw, name);
    let fallback = |name: &str| defaults.get(name).cloned().unwrap_or(Value::Null);

    let mut out = Map::with_capacity(specs.len());
    for spec in specs {
        let stored = get(spec.name);
        let value = match spec.shape {
            FieldShape::Text | FieldShape::OptionalText | FieldShape::DocumentId => {
                non_blank(stored).map_or_else(|| fallback(spec.name), |s| Value::String(s.to_string()))
            }
            FieldShape::Choice(allowed) => match stored.and_then(FieldValue::as_str).map(str::trim) {
                Some(s) if allowed.contains(&s) => Value::String(s.to_string()),
                other => {
                    if let Some(s) = other {
                        tracing::warn!("Field '{}' has unsupported value {s:?}; using default", spec.name);
                    }
                    fallback(spec.name)
                }
            },
            FieldShape::List(delimiter) => match stored {
                Some(FieldValue::StringValue(_) | FieldValue::ArrayValue(_)) => Value::Array(
                    coerce_to_list(stored, delimiter)
                        .into_iter()
                        .map(Value::String)
                        .collect(),
                ),
                _ => {
                    log_malformed(spec.name, stored, "list");
                    fallback(spec.name)
                }
            },
            FieldShape::CoreValues => match stored {
                Some(FieldValue::ArrayValue(items)) => core_values(spec.name, items),
                _ => {
                    log_malformed(spec.name, stored, "array");
                    fallback(spec.name)
                }
            },
            FieldShape::Date { secondary } => {
                let created_at = parse_timestamp(get(secondary));
                if has_date(stored) || created_at.is_some() {
                    Value::String(format_display_date(stored, created_at))
                } else {
                    let default_date = fallback(spec.name)
                        .as_str()
                        .map(|s| FieldValue::StringValue(s.to_string()));
                    Value::String(format_display_date(default_date.as_ref(), None))
                }
            }
            FieldShape::Timestamp => parse_timestamp(stored)
                .map_or_else(|| fallback(spec.name), |ts| Value::String(ts.to_rfc3339())),
            FieldShape::Slug => non_blank(stored)
                .or_else(|| non_blank(get(ID_FIELD)))
                .map_or_else(|| fallback(spec.name), |s| Value::String(s.trim().to_string())),
            FieldShape::Excerpt { source, max_chars } => non_blank(stored)
                .map(str::to_string)
                .or_else(|| {
                    get(source)
                        .and_then(FieldValue::as_str)
                        .and_then(|content| derive_excerpt(content, max_chars))
                })
                .map_or_else(|| fallback(spec.name), Value::String),
        };
        out.insert(spec.name.to_string(), value);
    }
    out
}

/// Normalize a raw document of `kind` against an explicit defaults object.
#[must_use]
pub fn normalize_kind(
    kind: ContentKind,
    raw: Option<&Document>,
    defaults: &Map<String, Value>,
) -> Map<String, Value> {
    normalize_fields(spec_for(kind), raw, defaults)
}

/// Normalize a raw document into the canonical record type `T`.
///
/// `raw = None` (no document) and `raw = Some(&empty)` produce the same
/// record.
#[must_use]
pub fn normalize<T: ContentRecord>(raw: Option<&Document>, defaults: &T) -> T {
    let Value::Object(default_map) = defaults::to_json(defaults) else {
        return defaults.clone();
    };
    let normalized = normalize_kind(T::KIND, raw, &default_map);
    serde_json::from_value(Value::Object(normalized)).unwrap_or_else(|e| {
        tracing::error!(
            "Normalized {} does not match its record type ({e}); using defaults",
            T::KIND
        );
        defaults.clone()
    })
}

/// Normalize a stored document, exposing its store id as the `id` field.
#[must_use]
pub fn normalize_stored<T: ContentRecord>(doc: &StoredDocument, defaults: &T) -> T {
    normalize(Some(&doc.with_id_field()), defaults)
}

fn lookup<'a>(raw: Option<&'a Document>, name: &str) -> Option<&'a FieldValue> {
    raw.and_then(|doc| doc.get(name))
}

fn non_blank(value: Option<&FieldValue>) -> Option<&str> {
    value
        .and_then(FieldValue::as_str)
        .filter(|s| !s.trim().is_empty())
}

fn has_date(value: Option<&FieldValue>) -> bool {
    match value {
        Some(FieldValue::TimestampValue(_)) => true,
        Some(FieldValue::StringValue(s)) => !s.trim().is_empty(),
        _ => false,
    }
}

fn log_malformed(field: &str, value: Option<&FieldValue>, expected: &str) {
    if let Some(value) = value {
        tracing::warn!(
            "Field '{field}' is a {} where a {expected} was expected; using default",
            value.type_name()
        );
    }
}

/// Keep the well-formed `{title, description}` entries of a stored array.
fn core_values(field: &str, items: &[FieldValue]) -> Value {
    let mut values = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let pair = item.as_map().and_then(|map| {
            let title = map.get("title").and_then(FieldValue::as_str)?;
            let description = map.get("description").and_then(FieldValue::as_str)?;
            Some((title, description))
        });
        match pair {
            Some((title, description)) => values.push(serde_json::json!({
                "title": title,
                "description": description,
            })),
            None => tracing::warn!("Dropping malformed entry {index} of '{field}'"),
        }
    }
    Value::Array(values)
}
