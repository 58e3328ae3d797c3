//! Content kinds, sort directions, and the skill/experience discriminator.
//!
//! All enums serialize in `snake_case`, matching the values the admin forms
//! write into the document store.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ContentKind
// ---------------------------------------------------------------------------

/// Every kind of content the portfolio stores.
///
/// Each kind maps to exactly one collection in the document store. Singleton
/// kinds hold one document under [`SINGLETON_ID`]; listed kinds hold many
/// documents with store-assigned ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Home,
    About,
    Experience,
    Education,
    SkillExperience,
    BlogPost,
    Project,
}

/// Well-known document id of every singleton kind.
pub const SINGLETON_ID: &str = "main";

impl ContentKind {
    /// All kinds, singletons first.
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::About,
        Self::Experience,
        Self::Education,
        Self::SkillExperience,
        Self::BlogPost,
        Self::Project,
    ];

    /// Name of the document-store collection holding this kind.
    ///
    /// Exhaustive match: adding a kind forces a collection name here.
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Home => "homeContent",
            Self::About => "aboutContent",
            Self::Experience => "experiences",
            Self::Education => "educationItems",
            Self::SkillExperience => "skillsExperience",
            Self::BlogPost => "blogPosts",
            Self::Project => "projects",
        }
    }

    /// Whether the kind is stored as one well-known document.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Home | Self::About)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::SkillExperience => "skill_experience",
            Self::BlogPost => "blog_post",
            Self::Project => "project",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = CoreError;

    /// Accepts the kind name (`blog_post`, `blog-post`) or its collection
    /// name (`blogPosts`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted || kind.collection() == s.trim())
            .ok_or_else(|| CoreError::UnknownKind(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// SortDirection
// ---------------------------------------------------------------------------

/// Ordering direction for list reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SkillExperienceType
// ---------------------------------------------------------------------------

/// Discriminator of a `skillsExperience` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SkillExperienceType {
    #[default]
    Skill,
    Experience,
}

impl SkillExperienceType {
    /// Stored values accepted for the `type` field.
    pub const STORED_VALUES: &'static [&'static str] = &["skill", "experience"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Skill => "skill",
            Self::Experience => "experience",
        }
    }
}

impl fmt::Display for SkillExperienceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
