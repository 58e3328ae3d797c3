//! End-to-end content reads against both store backends.
//!
//! Each scenario is written once against `ContentRepository<S>` and run over
//! the in-memory store and an on-disk libSQL database.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

use folio_core::coerce::DATE_NOT_SET;
use folio_core::defaults::SAMPLE_ID_PREFIX;
use folio_core::document::{Document, FieldValue, document_from_json};
use folio_core::entities::{
    AboutContent, BlogPost, ContentRecord, HomeContent, Project, SkillExperience,
};
use folio_core::enums::{SkillExperienceType, SortDirection};
use folio_store::{ContentRepository, DocumentStore, LibsqlStore, MemoryStore};

fn fields(value: serde_json::Value) -> Document {
    let serde_json::Value::Object(map) = value else {
        panic!("expected a JSON object");
    };
    document_from_json(map)
}

fn at(year: i32, month: u32, day: u32) -> FieldValue {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap().into()
}

async fn libsql_repo(dir: &tempfile::TempDir) -> ContentRepository<LibsqlStore> {
    let path = dir.path().join("content.db");
    let store = LibsqlStore::open_local(&path.to_string_lossy()).await.unwrap();
    ContentRepository::new(store)
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

async fn empty_home_is_exact_default<S: DocumentStore>(repo: &ContentRepository<S>) {
    repo.store()
        .put_document("homeContent", "main", Document::new())
        .await
        .unwrap();
    let home: HomeContent = repo.fetch_singleton().await;
    assert_eq!(home, HomeContent::fallback());

    let value = serde_json::to_value(&home).unwrap();
    for (key, field) in value.as_object().unwrap() {
        assert!(!field.as_str().unwrap().is_empty(), "{key} is empty");
    }
}

async fn about_with_bad_core_values<S: DocumentStore>(repo: &ContentRepository<S>) {
    repo.store()
        .put_document(
            "aboutContent",
            "main",
            fields(json!({
                "greetingName": "Ada Lovelace",
                "coreValues": "Curiosity"
            })),
        )
        .await
        .unwrap();
    let about: AboutContent = repo.fetch_singleton().await;
    assert_eq!(about.greeting_name, "Ada Lovelace");
    assert_eq!(about.core_values, AboutContent::fallback().core_values);
}

async fn blog_listing_normalizes_legacy_encodings<S: DocumentStore>(
    repo: &ContentRepository<S>,
) {
    let mut older = fields(json!({
        "title": "Older",
        "slug": "older",
        "tags": "React, Next.js,  TypeScript ",
        "publicationDate": "2023-11-15",
        "content": "Short body"
    }));
    older.insert("createdAt".into(), at(2023, 11, 15));
    let mut newer = fields(json!({
        "title": "Newer",
        "slug": "newer",
        "tags": ["Rust"],
        "publicationDate": "not-a-date"
    }));
    newer.insert("createdAt".into(), at(2024, 2, 1));
    let undated = fields(json!({"title": "Undated", "slug": "undated"}));

    let store = repo.store();
    store.put_document("blogPosts", "a", older).await.unwrap();
    store.put_document("blogPosts", "b", newer).await.unwrap();
    store.put_document("blogPosts", "c", undated).await.unwrap();

    let posts = repo.fetch_latest::<BlogPost>().await.into_records();
    let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Newer", "Older"], "undated post is not listed");

    assert_eq!(posts[1].tags, vec!["React", "Next.js", "TypeScript"]);
    assert_eq!(posts[1].publication_date, "November 15, 2023");
    assert_eq!(posts[1].excerpt, "Short body");
    assert_eq!(posts[0].publication_date, "not-a-date");
    assert_eq!(posts[0].author, BlogPost::fallback().author);

    let undated = repo.fetch_by_slug("undated").await.unwrap();
    assert_eq!(undated.publication_date, DATE_NOT_SET);
}

async fn ascending_projects<S: DocumentStore>(repo: &ContentRepository<S>) {
    for (id, year) in [("p2", 2022), ("p1", 2021), ("p3", 2023)] {
        let mut doc = fields(json!({"title": id}));
        doc.insert("createdAt".into(), at(year, 1, 1));
        repo.store().put_document("projects", id, doc).await.unwrap();
    }
    let outcome = repo
        .fetch_list::<Project>("createdAt", SortDirection::Ascending)
        .await;
    let ids: Vec<_> = outcome.records().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2", "p3"]);
}

async fn duplicate_slugs_resolve_to_newest<S: DocumentStore>(repo: &ContentRepository<S>) {
    for (id, day) in [("x-old", 1), ("x-new", 20), ("x-mid", 10)] {
        let mut doc = fields(json!({"slug": "shared", "title": id}));
        doc.insert("createdAt".into(), at(2024, 5, day));
        repo.store().put_document("blogPosts", id, doc).await.unwrap();
    }
    let post = repo.fetch_by_slug("shared").await.unwrap();
    assert_eq!(post.id, "x-new");
    assert!(repo.fetch_by_slug("missing-slug").await.is_none());
    assert!(!repo.slug_is_available("shared", Some("x-new")).await.unwrap());
}

async fn skill_entries_keep_variant_fields<S: DocumentStore>(repo: &ContentRepository<S>) {
    let mut doc = fields(json!({
        "name": "Platform Team",
        "type": "experience",
        "company": "Acme",
        "role": "Lead",
        "details": "Built CI\nRan on-call"
    }));
    doc.insert("createdAt".into(), at(2024, 1, 1));
    let id = repo.store().add_document("skillsExperience", doc).await.unwrap();

    let entries = repo.fetch_latest::<SkillExperience>().await.into_records();
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.id, id);
    assert_eq!(entry.entry_type, SkillExperienceType::Experience);
    assert_eq!(entry.company.as_deref(), Some("Acme"));
    assert_eq!(entry.level, None);
    assert_eq!(entry.details, vec!["Built CI", "Ran on-call"]);
}

// ---------------------------------------------------------------------------
// Memory backend
// ---------------------------------------------------------------------------

#[tokio::test]
async fn memory_empty_home() {
    empty_home_is_exact_default(&ContentRepository::new(MemoryStore::new())).await;
}

#[tokio::test]
async fn memory_about_core_values() {
    about_with_bad_core_values(&ContentRepository::new(MemoryStore::new())).await;
}

#[tokio::test]
async fn memory_blog_listing() {
    blog_listing_normalizes_legacy_encodings(&ContentRepository::new(MemoryStore::new())).await;
}

#[tokio::test]
async fn memory_ascending_projects() {
    ascending_projects(&ContentRepository::new(MemoryStore::new())).await;
}

#[tokio::test]
async fn memory_duplicate_slugs() {
    duplicate_slugs_resolve_to_newest(&ContentRepository::new(MemoryStore::new())).await;
}

#[tokio::test]
async fn memory_skill_entries() {
    skill_entries_keep_variant_fields(&ContentRepository::new(MemoryStore::new())).await;
}

#[tokio::test]
async fn memory_failed_reads_never_fabricate_rows() {
    let repo = ContentRepository::new(MemoryStore::new());
    repo.store().set_unavailable(true);

    let outcome = repo.fetch_latest::<Project>().await;
    assert!(outcome.is_failed());
    assert!(outcome.records().is_empty());

    let samples = outcome.or_samples();
    assert!(samples.iter().all(|p| p.id.starts_with(SAMPLE_ID_PREFIX)));

    let resume = repo.fetch_resume().await;
    assert!(resume.experience.is_failed());
    assert!(resume.education.is_failed());
    assert!(repo.fetch_by_slug("anything").await.is_none());
}

// ---------------------------------------------------------------------------
// libSQL backend
// ---------------------------------------------------------------------------

#[tokio::test]
async fn libsql_empty_home() {
    let dir = tempfile::tempdir().unwrap();
    empty_home_is_exact_default(&libsql_repo(&dir).await).await;
}

#[tokio::test]
async fn libsql_about_core_values() {
    let dir = tempfile::tempdir().unwrap();
    about_with_bad_core_values(&libsql_repo(&dir).await).await;
}

#[tokio::test]
async fn libsql_blog_listing() {
    let dir = tempfile::tempdir().unwrap();
    blog_listing_normalizes_legacy_encodings(&libsql_repo(&dir).await).await;
}

#[tokio::test]
async fn libsql_ascending_projects() {
    let dir = tempfile::tempdir().unwrap();
    ascending_projects(&libsql_repo(&dir).await).await;
}

#[tokio::test]
async fn libsql_duplicate_slugs() {
    let dir = tempfile::tempdir().unwrap();
    duplicate_slugs_resolve_to_newest(&libsql_repo(&dir).await).await;
}

#[tokio::test]
async fn libsql_skill_entries() {
    let dir = tempfile::tempdir().unwrap();
    skill_entries_keep_variant_fields(&libsql_repo(&dir).await).await;
}

#[tokio::test]
async fn libsql_resume_reads_both_collections() {
    let dir = tempfile::tempdir().unwrap();
    let repo = libsql_repo(&dir).await;
    let mut job = fields(json!({"role": "Engineer", "responsibilities": ["Ship"]}));
    job.insert("createdAt".into(), at(2024, 1, 1));
    repo.store().put_document("experiences", "e1", job).await.unwrap();

    let resume = repo.fetch_resume().await;
    assert_eq!(resume.experience.records().len(), 1);
    assert_eq!(resume.experience.records()[0].responsibilities, vec!["Ship"]);
    assert!(resume.education.is_empty());
}

#[tokio::test]
async fn libsql_reopen_keeps_documents() {
    let dir = tempfile::tempdir().unwrap();
    {
        let repo = libsql_repo(&dir).await;
        repo.store()
            .put_document("homeContent", "main", fields(json!({"heroTitle": "Persisted"})))
            .await
            .unwrap();
    }
    let repo = libsql_repo(&dir).await;
    let home: HomeContent = repo.fetch_singleton().await;
    assert_eq!(home.hero_title, "Persisted");
}
