use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ContentRecord, ListedRecord};
use crate::defaults;
use crate::enums::ContentKind;

/// A position on the resume timeline.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub id: String,
    pub role: String,
    pub company: String,
    /// Free text such as `Jan 2022 - Present`; never parsed.
    pub date_range: String,
    pub responsibilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A degree or course on the resume timeline.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub date_range: String,
    pub details: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ContentRecord for ExperienceItem {
    const KIND: ContentKind = ContentKind::Experience;

    fn fallback() -> Self {
        defaults::experience()
    }
}

impl ListedRecord for ExperienceItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn samples() -> Vec<Self> {
        defaults::sample_experiences()
    }
}

impl ContentRecord for EducationItem {
    const KIND: ContentKind = ContentKind::Education;

    fn fallback() -> Self {
        defaults::education()
    }
}

impl ListedRecord for EducationItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn samples() -> Vec<Self> {
        defaults::sample_education()
    }
}
