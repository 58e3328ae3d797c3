//! Declarative field-spec tables, one per content kind.
//!
//! Each entry names a stored field and the shape the normalizer expects it
//! in. The names are the storage field names, which are also the serialized
//! names of the canonical records. Adding a field to a record means adding a
//! row here; `normalize::tests` checks the tables and records stay in step.

use crate::coerce::{EXCERPT_CHARS, ListDelimiter};
use crate::document::{CREATED_AT_FIELD, ID_FIELD, UPDATED_AT_FIELD};
use crate::enums::{ContentKind, SkillExperienceType};

/// How a stored field is validated and coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// Non-blank string, else the default.
    Text,
    /// Non-blank string, else absent.
    OptionalText,
    /// String from a fixed set, else the default.
    Choice(&'static [&'static str]),
    /// String or array of strings, coerced into a list.
    List(ListDelimiter),
    /// Array of `{title, description}` maps; a non-array falls back to the
    /// default sequence as a whole.
    CoreValues,
    /// Display date with a secondary timestamp field.
    Date { secondary: &'static str },
    /// Native or string-encoded timestamp, else absent.
    Timestamp,
    /// The store's document id.
    DocumentId,
    /// Stored slug, else the document id.
    Slug,
    /// Stored excerpt, else derived from the `source` field.
    Excerpt { source: &'static str, max_chars: usize },
}

/// One row of a field-spec table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub shape: FieldShape,
}

const fn field(name: &'static str, shape: FieldShape) -> FieldSpec {
    FieldSpec { name, shape }
}

const fn text(name: &'static str) -> FieldSpec {
    field(name, FieldShape::Text)
}

const ID: FieldSpec = field(ID_FIELD, FieldShape::DocumentId);
const CREATED_AT: FieldSpec = field(CREATED_AT_FIELD, FieldShape::Timestamp);
const UPDATED_AT: FieldSpec = field(UPDATED_AT_FIELD, FieldShape::Timestamp);
const TAGS: FieldSpec = field("tags", FieldShape::List(ListDelimiter::Comma));

pub const HOME_FIELDS: &[FieldSpec] = &[
    text("heroTitle"),
    text("heroSubtitle"),
    text("heroCtaButtonText"),
    text("heroCtaLink"),
    text("heroSecondaryButtonText"),
    text("heroSecondaryLink"),
    text("exploreTitle"),
    text("exploreAboutTitle"),
    text("exploreAboutDescription"),
    text("exploreProjectsTitle"),
    text("exploreProjectsDescription"),
    text("exploreBlogTitle"),
    text("exploreBlogDescription"),
    text("ctaTitle"),
    text("ctaSubtitle"),
    text("ctaButtonText"),
    text("ctaButtonLink"),
];

pub const ABOUT_FIELDS: &[FieldSpec] = &[
    text("pageTitle"),
    text("pageDescription"),
    text("portraitImageUrl"),
    text("portraitImageHint"),
    text("greetingName"),
    text("profession"),
    text("keySkill1"),
    text("keySkill2"),
    text("keySkill3"),
    text("bioIntro"),
    text("bioCollaboration"),
    text("bioPersonal"),
    text("coreValuesTitle"),
    field("coreValues", FieldShape::CoreValues),
];

pub const PROJECT_FIELDS: &[FieldSpec] = &[
    ID,
    text("title"),
    text("description"),
    text("imageUrl"),
    text("imageHint"),
    TAGS,
    field("liveDemoUrl", FieldShape::OptionalText),
    field("repoUrl", FieldShape::OptionalText),
    CREATED_AT,
    UPDATED_AT,
];

pub const BLOG_POST_FIELDS: &[FieldSpec] = &[
    ID,
    field("slug", FieldShape::Slug),
    text("title"),
    field(
        "excerpt",
        FieldShape::Excerpt {
            source: "content",
            max_chars: EXCERPT_CHARS,
        },
    ),
    text("content"),
    field(
        "publicationDate",
        FieldShape::Date {
            secondary: CREATED_AT_FIELD,
        },
    ),
    text("author"),
    TAGS,
    text("imageUrl"),
    text("imageHint"),
    CREATED_AT,
    UPDATED_AT,
];

pub const EXPERIENCE_FIELDS: &[FieldSpec] = &[
    ID,
    text("role"),
    text("company"),
    text("dateRange"),
    field("responsibilities", FieldShape::List(ListDelimiter::Newline)),
    CREATED_AT,
    UPDATED_AT,
];

pub const EDUCATION_FIELDS: &[FieldSpec] = &[
    ID,
    text("degree"),
    text("institution"),
    text("dateRange"),
    field("details", FieldShape::List(ListDelimiter::Newline)),
    CREATED_AT,
    UPDATED_AT,
];

pub const SKILL_EXPERIENCE_FIELDS: &[FieldSpec] = &[
    ID,
    text("name"),
    field("type", FieldShape::Choice(SkillExperienceType::STORED_VALUES)),
    field("category", FieldShape::OptionalText),
    field("level", FieldShape::OptionalText),
    field("company", FieldShape::OptionalText),
    field("role", FieldShape::OptionalText),
    field("dateRange", FieldShape::OptionalText),
    text("description"),
    field("details", FieldShape::List(ListDelimiter::Newline)),
    CREATED_AT,
    UPDATED_AT,
];

/// Field-spec table of `kind`.
#[must_use]
pub const fn spec_for(kind: ContentKind) -> &'static [FieldSpec] {
    match kind {
        ContentKind::Home => HOME_FIELDS,
        ContentKind::About => ABOUT_FIELDS,
        ContentKind::Experience => EXPERIENCE_FIELDS,
        ContentKind::Education => EDUCATION_FIELDS,
        ContentKind::SkillExperience => SKILL_EXPERIENCE_FIELDS,
        ContentKind::BlogPost => BLOG_POST_FIELDS,
        ContentKind::Project => PROJECT_FIELDS,
    }
}
