//! Normalized records validate against their published JSON Schema.
//!
//! Each case feeds a deliberately messy document (wrong types, blank strings,
//! legacy encodings) through the normalizer and checks the result against the
//! `schemars` schema the CLI publishes.

use chrono::{TimeZone, Utc};
use schemars::schema_for;
use serde_json::json;
use folio_core::document::{Document, FieldValue, StoredDocument, document_from_json};
use folio_core::entities::*;
use folio_core::normalize::{normalize, normalize_stored};

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn doc(value: serde_json::Value) -> Document {
    match value {
        serde_json::Value::Object(map) => document_from_json(map),
        other => panic!("expected object, got {other}"),
    }
}

/// Every string the record serializes is non-blank.
fn assert_no_blank_strings(value: &serde_json::Value, path: &str) {
    match value {
        serde_json::Value::String(s) => assert!(!s.trim().is_empty(), "{path} is blank"),
        serde_json::Value::Null => panic!("{path} is null"),
        serde_json::Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                assert_no_blank_strings(item, &format!("{path}[{i}]"));
            }
        }
        serde_json::Value::Object(map) => {
            for (key, item) in map {
                assert_no_blank_strings(item, &format!("{path}.{key}"));
            }
        }
        _ => {}
    }
}

macro_rules! normalize_and_validate {
    ($name:ident, $ty:ty, $raw:expr) => {
        #[test]
        fn $name() {
            let stored: StoredDocument = $raw;
            let record: $ty = normalize_stored(&stored, &<$ty>::fallback());

            let instance = serde_json::to_value(&record).unwrap();
            assert_no_blank_strings(&instance, stringify!($ty));

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );

            let recovered: $ty = serde_json::from_value(instance).unwrap();
            assert_eq!(recovered, record, "serde roundtrip failed for {}", stringify!($ty));
        }
    };
}

normalize_and_validate!(
    home_from_partial_document,
    HomeContent,
    StoredDocument::new(
        "main",
        doc(json!({
            "heroTitle": "Hi, I'm Sam",
            "heroSubtitle": "",
            "ctaButtonLink": 12,
            "unknownField": "ignored"
        }))
    )
);

normalize_and_validate!(
    about_from_malformed_core_values,
    AboutContent,
    StoredDocument::new(
        "main",
        doc(json!({
            "greetingName": "Sam",
            "coreValues": [{"title": "Focus", "description": "One thing at a time."}, {"title": 3}]
        }))
    )
);

normalize_and_validate!(
    project_from_comma_tags,
    Project,
    StoredDocument::new(
        "prj-1",
        doc(json!({
            "title": "Folio",
            "tags": "Rust, , libSQL ",
            "repoUrl": "https://example.com/folio",
            "createdAt": "2024-05-01T08:00:00Z"
        }))
    )
);

normalize_and_validate!(
    blog_post_with_native_timestamps,
    BlogPost,
    {
        let mut fields = doc(json!({
            "title": "Shipping",
            "slug": "shipping",
            "content": "Body text",
            "tags": ["Rust", "  "]
        }));
        let ts = Utc.with_ymd_and_hms(2024, 7, 4, 12, 0, 0).unwrap();
        fields.insert("createdAt".into(), FieldValue::TimestampValue(ts));
        fields.insert("updatedAt".into(), FieldValue::TimestampValue(ts));
        StoredDocument::new("post-9", fields)
    }
);

normalize_and_validate!(
    experience_from_newline_string,
    ExperienceItem,
    StoredDocument::new(
        "exp-1",
        doc(json!({"role": "Engineer", "responsibilities": "Wrote code\nReviewed code"}))
    )
);

normalize_and_validate!(
    education_from_string_details,
    EducationItem,
    StoredDocument::new("edu-1", doc(json!({"degree": "BSc", "details": "Thesis on compilers"})))
);

normalize_and_validate!(
    skill_with_unknown_type,
    SkillExperience,
    StoredDocument::new(
        "skl-1",
        doc(json!({"name": "SQL", "type": "talent", "details": ["Indexes", "Query plans"]}))
    )
);

#[test]
fn singleton_default_validates() {
    let home: HomeContent = normalize(None, &HomeContent::fallback());
    let schema = serde_json::to_value(schema_for!(HomeContent)).unwrap();
    let instance = serde_json::to_value(&home).unwrap();
    assert!(validate_against_schema(&schema, &instance).is_empty());
    assert_no_blank_strings(&instance, "home");
}
