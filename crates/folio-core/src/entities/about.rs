use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ContentRecord, SingletonRecord};
use crate::defaults;
use crate::enums::ContentKind;

/// One entry of the "core values" grid on the about page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CoreValue {
    pub title: String,
    pub description: String,
}

impl CoreValue {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Biography, portrait, and core values.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub page_title: String,
    pub page_description: String,
    pub portrait_image_url: String,
    pub portrait_image_hint: String,
    pub greeting_name: String,
    pub profession: String,
    pub key_skill1: String,
    pub key_skill2: String,
    pub key_skill3: String,
    pub bio_intro: String,
    pub bio_collaboration: String,
    pub bio_personal: String,
    pub core_values_title: String,
    pub core_values: Vec<CoreValue>,
}

impl ContentRecord for AboutContent {
    const KIND: ContentKind = ContentKind::About;

    fn fallback() -> Self {
        defaults::about()
    }
}

impl SingletonRecord for AboutContent {}
