use serde::Serialize;

use folio_core::enums::ContentKind;
use folio_core::fields::{FieldShape, spec_for};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

#[derive(Debug, Serialize)]
struct FieldInfo {
    name: &'static str,
    shape: &'static str,
}

#[derive(Debug, Serialize)]
struct KindInfo {
    kind: ContentKind,
    collection: &'static str,
    singleton: bool,
    fields: Vec<FieldInfo>,
}

const fn shape_name(shape: FieldShape) -> &'static str {
    match shape {
        FieldShape::Text => "text",
        FieldShape::OptionalText => "optional_text",
        FieldShape::Choice(_) => "choice",
        FieldShape::List(_) => "list",
        FieldShape::CoreValues => "core_values",
        FieldShape::Date { .. } => "date",
        FieldShape::Timestamp => "timestamp",
        FieldShape::DocumentId => "document_id",
        FieldShape::Slug => "slug",
        FieldShape::Excerpt { .. } => "excerpt",
    }
}

fn describe(kind: ContentKind) -> KindInfo {
    KindInfo {
        kind,
        collection: kind.collection(),
        singleton: kind.is_singleton(),
        fields: spec_for(kind)
            .iter()
            .map(|spec| FieldInfo {
                name: spec.name,
                shape: shape_name(spec.shape),
            })
            .collect(),
    }
}

/// Handle `folio kinds`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let kinds: Vec<KindInfo> = ContentKind::ALL.into_iter().map(describe).collect();
    output(&kinds, flags.format.unwrap_or(OutputFormat::Pretty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_blog_posts() {
        let info = describe(ContentKind::BlogPost);
        assert_eq!(info.collection, "blogPosts");
        assert!(!info.singleton);
        let slug = info.fields.iter().find(|f| f.name == "slug").unwrap();
        assert_eq!(slug.shape, "slug");
        let tags = info.fields.iter().find(|f| f.name == "tags").unwrap();
        assert_eq!(tags.shape, "list");
    }

    #[test]
    fn home_is_singleton() {
        assert!(describe(ContentKind::Home).singleton);
    }
}
