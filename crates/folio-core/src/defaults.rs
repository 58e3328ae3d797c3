//! Default content registry.
//!
//! One fully-populated record per content kind: no empty strings, no missing
//! list fields. These are the bottom of every fallback chain. A stored
//! document missing a field gets the value from here; a missing singleton
//! document gets the whole record.
//!
//! The sample listings at the bottom are a separate table. They are never
//! used for field-level fallback and never mixed into loaded data; a page only
//! sees them when it asks for them after a list read came back empty or
//! failed.

use crate::coerce::DATE_NOT_SET;
use crate::entities::{
    AboutContent, BlogPost, ContentRecord, CoreValue, EducationItem, ExperienceItem, HomeContent,
    Project, SkillExperience,
};
use crate::enums::{ContentKind, SkillExperienceType};

/// Prefix of every sample row id.
pub const SAMPLE_ID_PREFIX: &str = "fallback-";

const PLACEHOLDER_PORTRAIT: &str = "https://placehold.co/600x600.png";
const PLACEHOLDER_PROJECT_IMAGE: &str = "https://placehold.co/600x400.png";
const PLACEHOLDER_BLOG_IMAGE: &str = "https://placehold.co/1200x600.png";

#[must_use]
pub fn home() -> HomeContent {
    HomeContent {
        hero_title: "Welcome to Aperture Portfolio".into(),
        hero_subtitle: "Discover my journey, projects, and skills. Let's build something amazing together."
            .into(),
        hero_cta_button_text: "View My Work".into(),
        hero_cta_link: "#projects".into(),
        hero_secondary_button_text: "Learn More About Me".into(),
        hero_secondary_link: "#about".into(),
        explore_title: "Explore My World".into(),
        explore_about_title: "About Me".into(),
        explore_about_description: "Dive into my background, passions, and the story behind my work."
            .into(),
        explore_projects_title: "Projects".into(),
        explore_projects_description:
            "Explore a curated selection of projects I've built and contributed to.".into(),
        explore_blog_title: "Blog".into(),
        explore_blog_description: "Read my thoughts on technology, design, and creative endeavors."
            .into(),
        cta_title: "Ready to Collaborate?".into(),
        cta_subtitle: "I'm always excited to discuss new projects and opportunities. Let's connect!"
            .into(),
        cta_button_text: "Get In Touch".into(),
        cta_button_link: "mailto:your-email@example.com".into(),
    }
}

/// Core values shown when none were saved.
#[must_use]
pub fn core_values() -> Vec<CoreValue> {
    vec![
        CoreValue::new(
            "Excellence",
            "Striving for the highest quality and paying attention to detail.",
        ),
        CoreValue::new(
            "Innovation",
            "Seeking new ideas and creative solutions to complex problems.",
        ),
        CoreValue::new(
            "Collaboration",
            "Believing in teamwork and fostering open communication.",
        ),
    ]
}

#[must_use]
pub fn about() -> AboutContent {
    AboutContent {
        page_title: "About Me".into(),
        page_description: "A glimpse into my journey, aspirations, and what drives me.".into(),
        portrait_image_url: PLACEHOLDER_PORTRAIT.into(),
        portrait_image_hint: "professional portrait".into(),
        greeting_name: "[Your Name Here]".into(),
        profession: "[Your Profession/Title]".into(),
        key_skill1: "[Skill 1]".into(),
        key_skill2: "[Skill 2]".into(),
        key_skill3: "[Skill 3]".into(),
        bio_intro: "My journey into [Your Field] began with a fascination for [Initial Spark/Interest]. I'm dedicated to crafting innovative solutions."
            .into(),
        bio_collaboration: "I thrive in collaborative environments, believing diverse perspectives lead to the best work. My approach is rooted in continuous learning."
            .into(),
        bio_personal: "Beyond professional pursuits, I enjoy [Hobby 1] and [Hobby 2], always seeking growth."
            .into(),
        core_values_title: "My Core Values".into(),
        core_values: core_values(),
    }
}

#[must_use]
pub fn project() -> Project {
    Project {
        id: "default-project".into(),
        title: "Untitled Project".into(),
        description: "No description provided.".into(),
        image_url: PLACEHOLDER_PROJECT_IMAGE.into(),
        image_hint: "project screenshot".into(),
        tags: Vec::new(),
        live_demo_url: None,
        repo_url: None,
        created_at: None,
        updated_at: None,
    }
}

#[must_use]
pub fn blog_post() -> BlogPost {
    BlogPost {
        id: "default-post".into(),
        slug: "untitled-post".into(),
        title: "Untitled Post".into(),
        excerpt: "No excerpt available.".into(),
        content: "No content available.".into(),
        publication_date: DATE_NOT_SET.into(),
        author: "Unknown Author".into(),
        tags: Vec::new(),
        image_url: PLACEHOLDER_BLOG_IMAGE.into(),
        image_hint: "blog header".into(),
        created_at: None,
        updated_at: None,
    }
}

#[must_use]
pub fn experience() -> ExperienceItem {
    ExperienceItem {
        id: "default-experience".into(),
        role: "Role not specified".into(),
        company: "Company not specified".into(),
        date_range: "Dates not specified".into(),
        responsibilities: Vec::new(),
        created_at: None,
        updated_at: None,
    }
}

#[must_use]
pub fn education() -> EducationItem {
    EducationItem {
        id: "default-education".into(),
        degree: "Degree not specified".into(),
        institution: "Institution not specified".into(),
        date_range: "Dates not specified".into(),
        details: Vec::new(),
        created_at: None,
        updated_at: None,
    }
}

#[must_use]
pub fn skill_experience() -> SkillExperience {
    SkillExperience {
        id: "default-skill".into(),
        name: "Unnamed entry".into(),
        entry_type: SkillExperienceType::Skill,
        category: None,
        level: None,
        company: None,
        role: None,
        date_range: None,
        description: "No description provided.".into(),
        details: Vec::new(),
        created_at: None,
        updated_at: None,
    }
}

/// Default record of `kind` as a JSON object, for kind-generic callers.
#[must_use]
pub fn for_kind(kind: ContentKind) -> serde_json::Map<String, serde_json::Value> {
    let value = match kind {
        ContentKind::Home => to_json(&HomeContent::fallback()),
        ContentKind::About => to_json(&AboutContent::fallback()),
        ContentKind::Experience => to_json(&ExperienceItem::fallback()),
        ContentKind::Education => to_json(&EducationItem::fallback()),
        ContentKind::SkillExperience => to_json(&SkillExperience::fallback()),
        ContentKind::BlogPost => to_json(&BlogPost::fallback()),
        ContentKind::Project => to_json(&Project::fallback()),
    };
    match value {
        serde_json::Value::Object(map) => map,
        _ => serde_json::Map::new(),
    }
}

/// Serialize a record into JSON. Records are plain data, so this only fails
/// on a broken `Serialize` impl, which is logged.
pub(crate) fn to_json<T: serde::Serialize>(record: &T) -> serde_json::Value {
    serde_json::to_value(record).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize content record: {e}");
        serde_json::Value::Null
    })
}

// ---------------------------------------------------------------------------
// Sample listings
// ---------------------------------------------------------------------------

#[must_use]
pub fn sample_projects() -> Vec<Project> {
    vec![Project {
        id: format!("{SAMPLE_ID_PREFIX}project-1"),
        title: "E-commerce Platform (Sample)".into(),
        description: "A full-featured e-commerce platform. Shown because no projects could be loaded."
            .into(),
        image_url: PLACEHOLDER_PROJECT_IMAGE.into(),
        image_hint: "online store".into(),
        tags: vec!["Next.js".into(), "React".into()],
        ..project()
    }]
}

#[must_use]
pub fn sample_blog_posts() -> Vec<BlogPost> {
    vec![BlogPost {
        id: format!("{SAMPLE_ID_PREFIX}post-1"),
        slug: "fallback-post".into(),
        title: "Sample Blog Post (Fallback)".into(),
        excerpt: "Failed to load blog posts from the database. This is a sample post.".into(),
        content: "This is the default content for the fallback blog post.".into(),
        publication_date: "January 01, 2024".into(),
        author: "Default Author".into(),
        tags: vec!["Sample".into()],
        ..blog_post()
    }]
}

#[must_use]
pub fn sample_experiences() -> Vec<ExperienceItem> {
    vec![ExperienceItem {
        id: format!("{SAMPLE_ID_PREFIX}experience-1"),
        role: "Senior Developer (Sample)".into(),
        company: "Tech Solutions (Sample)".into(),
        date_range: "Jan 2022 - Present".into(),
        responsibilities: vec![
            "Led development of web apps.".into(),
            "Mentored junior developers.".into(),
        ],
        ..experience()
    }]
}

#[must_use]
pub fn sample_education() -> Vec<EducationItem> {
    vec![EducationItem {
        id: format!("{SAMPLE_ID_PREFIX}education-1"),
        degree: "MSc Computer Science (Sample)".into(),
        institution: "University of Technology (Sample)".into(),
        date_range: "2020 - 2022".into(),
        details: vec!["Specialized in AI.".into()],
        ..education()
    }]
}

#[must_use]
pub fn sample_skills_experience() -> Vec<SkillExperience> {
    vec![SkillExperience {
        id: format!("{SAMPLE_ID_PREFIX}skill-1"),
        name: "TypeScript (Sample)".into(),
        category: Some("Frontend".into()),
        level: Some("Advanced".into()),
        description: "Typed JavaScript for large front-end codebases.".into(),
        details: vec!["Strict mode across all packages.".into()],
        ..skill_experience()
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ListedRecord;

    /// Every string in a JSON tree is non-blank and every array field exists.
    fn assert_fully_populated(kind: ContentKind) {
        fn walk(path: &str, value: &serde_json::Value) {
            match value {
                serde_json::Value::String(s) => {
                    assert!(!s.trim().is_empty(), "{path} is blank");
                }
                serde_json::Value::Null => panic!("{path} is null"),
                serde_json::Value::Array(items) => {
                    for (i, item) in items.iter().enumerate() {
                        walk(&format!("{path}[{i}]"), item);
                    }
                }
                serde_json::Value::Object(map) => {
                    for (key, item) in map {
                        walk(&format!("{path}.{key}"), item);
                    }
                }
                _ => {}
            }
        }
        let map = for_kind(kind);
        assert!(!map.is_empty(), "{kind} default is empty");
        walk(kind.as_str(), &serde_json::Value::Object(map));
    }

    #[test]
    fn every_default_is_fully_populated() {
        for kind in ContentKind::ALL {
            assert_fully_populated(kind);
        }
    }

    #[test]
    fn about_default_has_core_values() {
        assert_eq!(about().core_values.len(), 3);
        assert_eq!(about().core_values[0].title, "Excellence");
    }

    #[test]
    fn sample_ids_are_marked() {
        let ids: Vec<String> = Project::samples()
            .into_iter()
            .map(|p| p.id)
            .chain(BlogPost::samples().into_iter().map(|p| p.id))
            .chain(ExperienceItem::samples().into_iter().map(|p| p.id))
            .chain(EducationItem::samples().into_iter().map(|p| p.id))
            .chain(SkillExperience::samples().into_iter().map(|p| p.id))
            .collect();
        assert_eq!(ids.len(), 5);
        for id in ids {
            assert!(id.starts_with(SAMPLE_ID_PREFIX), "{id}");
        }
    }

    #[test]
    fn defaults_are_not_samples() {
        for kind in ContentKind::ALL {
            if let Some(serde_json::Value::String(id)) = for_kind(kind).get("id") {
                assert!(!id.starts_with(SAMPLE_ID_PREFIX), "{kind} default id {id}");
            }
        }
    }
}
