use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ContentRecord, SingletonRecord};
use crate::defaults;
use crate::enums::ContentKind;

/// Copy and links of the landing page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HomeContent {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_cta_button_text: String,
    pub hero_cta_link: String,
    pub hero_secondary_button_text: String,
    pub hero_secondary_link: String,
    pub explore_title: String,
    pub explore_about_title: String,
    pub explore_about_description: String,
    pub explore_projects_title: String,
    pub explore_projects_description: String,
    pub explore_blog_title: String,
    pub explore_blog_description: String,
    pub cta_title: String,
    pub cta_subtitle: String,
    pub cta_button_text: String,
    pub cta_button_link: String,
}

impl ContentRecord for HomeContent {
    const KIND: ContentKind = ContentKind::Home;

    fn fallback() -> Self {
        defaults::home()
    }
}

impl SingletonRecord for HomeContent {}
