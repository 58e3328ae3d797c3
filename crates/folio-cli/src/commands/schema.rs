use schemars::{Schema, schema_for};

use folio_core::entities::{
    AboutContent, BlogPost, EducationItem, ExperienceItem, HomeContent, Project, SkillExperience,
};
use folio_core::enums::ContentKind;

use crate::cli::root_commands::SchemaArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// JSON Schema of the canonical record for `kind`.
pub fn schema_of(kind: ContentKind) -> Schema {
    match kind {
        ContentKind::Home => schema_for!(HomeContent),
        ContentKind::About => schema_for!(AboutContent),
        ContentKind::Experience => schema_for!(ExperienceItem),
        ContentKind::Education => schema_for!(EducationItem),
        ContentKind::SkillExperience => schema_for!(SkillExperience),
        ContentKind::BlogPost => schema_for!(BlogPost),
        ContentKind::Project => schema_for!(Project),
    }
}

/// Handle `folio schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_of(args.kind), flags.format.unwrap_or(OutputFormat::Pretty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_schema_lists_record_fields() {
        let schema = serde_json::to_value(schema_of(ContentKind::BlogPost)).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for field in ["slug", "title", "publicationDate", "tags", "imageHint"] {
            assert!(properties.contains_key(field), "missing {field}");
        }
    }

    #[test]
    fn every_kind_has_a_titled_schema() {
        for kind in ContentKind::ALL {
            let schema = serde_json::to_value(schema_of(kind)).unwrap();
            assert!(schema["title"].is_string(), "{kind}");
        }
    }
}
