use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ContentRecord, ListedRecord};
use crate::defaults;
use crate::enums::ContentKind;

/// A blog post, addressable by `slug` independently of its document id.
///
/// `publication_date` is already formatted for display; the raw value may
/// have been a store timestamp, an ISO string, or free text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub publication_date: String,
    pub author: String,
    pub tags: Vec<String>,
    pub image_url: String,
    pub image_hint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ContentRecord for BlogPost {
    const KIND: ContentKind = ContentKind::BlogPost;

    fn fallback() -> Self {
        defaults::blog_post()
    }
}

impl ListedRecord for BlogPost {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn samples() -> Vec<Self> {
        defaults::sample_blog_posts()
    }
}
