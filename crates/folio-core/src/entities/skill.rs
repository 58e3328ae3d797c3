use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ContentRecord, ListedRecord};
use crate::defaults;
use crate::enums::{ContentKind, SkillExperienceType};

/// An entry of the combined skills/experience collection.
///
/// `category` and `level` only apply to skills; `company`, `role`, and
/// `date_range` only to experiences. The admin form strips the fields that do
/// not apply to the chosen type.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SkillExperience {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub entry_type: SkillExperienceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
    pub description: String,
    pub details: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ContentRecord for SkillExperience {
    const KIND: ContentKind = ContentKind::SkillExperience;

    fn fallback() -> Self {
        defaults::skill_experience()
    }
}

impl ListedRecord for SkillExperience {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn samples() -> Vec<Self> {
        defaults::sample_skills_experience()
    }
}
