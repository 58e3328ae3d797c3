//! Canonical, render-ready records for every content kind.
//!
//! Field names serialize in `camelCase`, identical to the field names the
//! admin forms write into the store, so a normalized record can be read back
//! by the same field-spec table that produced it. All structs derive
//! `JsonSchema` so the CLI can publish the shape consumers render from.

mod about;
mod blog;
mod home;
mod project;
mod resume;
mod skill;

pub use about::{AboutContent, CoreValue};
pub use blog::BlogPost;
pub use home::HomeContent;
pub use project::Project;
pub use resume::{EducationItem, ExperienceItem};
pub use skill::SkillExperience;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::enums::ContentKind;

/// A canonical record of one content kind.
pub trait ContentRecord: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// The kind this record type represents.
    const KIND: ContentKind;

    /// The registry default: fully populated, used as the bottom of every
    /// fallback chain.
    fn fallback() -> Self;
}

/// Content stored as exactly one well-known document.
pub trait SingletonRecord: ContentRecord {}

/// Content stored as many independently created documents.
pub trait ListedRecord: ContentRecord {
    /// Store-assigned document id.
    fn id(&self) -> &str;

    /// Creation timestamp, when the document carried one.
    fn created_at(&self) -> Option<DateTime<Utc>>;

    /// Placeholder rows a page may show when nothing could be loaded.
    ///
    /// Every sample id starts with [`crate::defaults::SAMPLE_ID_PREFIX`].
    fn samples() -> Vec<Self>;
}
