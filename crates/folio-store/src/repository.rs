//! Content repository: the read API the site's pages call.
//!
//! Every read resolves to something renderable. A missing or unreadable
//! singleton becomes the registry default, a list read reports its outcome
//! through [`ListOutcome`], and a slug lookup that cannot be answered is
//! `None`. Transport failures are logged here and nowhere else.

use std::cmp::Reverse;

use folio_core::document::{FieldValue, ID_FIELD, StoredDocument};
use folio_core::entities::{
    BlogPost, ContentRecord, EducationItem, ExperienceItem, ListedRecord, SingletonRecord,
};
use folio_core::enums::{ContentKind, SINGLETON_ID, SortDirection};
use folio_core::normalize::{normalize, normalize_stored};
use folio_core::slug::validate_slug;

use crate::error::StoreError;
use crate::outcome::{ListOutcome, Resume};
use crate::store::DocumentStore;

const SLUG_FIELD: &str = "slug";

/// Read access to portfolio content over an injected [`DocumentStore`].
pub struct ContentRepository<S> {
    store: S,
}

impl<S: DocumentStore> ContentRepository<S> {
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The store this repository reads from.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Read the singleton document of `T`'s kind.
    ///
    /// Never fails: absence and read errors both yield the normalized
    /// default record.
    pub async fn fetch_singleton<T: SingletonRecord>(&self) -> T {
        let collection = T::KIND.collection();
        let defaults = T::fallback();
        match self.store.get_document(collection, SINGLETON_ID).await {
            Ok(Some(doc)) => normalize(Some(&doc.fields), &defaults),
            Ok(None) => {
                tracing::info!("No {collection}/{SINGLETON_ID} document found; using defaults");
                normalize(None, &defaults)
            }
            Err(e) => {
                tracing::warn!("Failed to read {collection}/{SINGLETON_ID}: {e}; using defaults");
                normalize(None, &defaults)
            }
        }
    }

    /// Read every document of `T`'s kind, ordered by `order_by`.
    pub async fn fetch_list<T: ListedRecord>(
        &self,
        order_by: &str,
        direction: SortDirection,
    ) -> ListOutcome<T> {
        let collection = T::KIND.collection();
        match self.store.list_documents(collection, order_by, direction).await {
            Ok(docs) => {
                tracing::debug!(
                    "Read {} {collection} documents ordered by {order_by} {direction}",
                    docs.len()
                );
                let defaults = T::fallback();
                let outcome = ListOutcome::from_records(
                    docs.iter().map(|doc| normalize_stored(doc, &defaults)).collect(),
                );
                if outcome.is_empty() {
                    tracing::info!("Collection {collection} is empty");
                }
                outcome
            }
            Err(e) => {
                tracing::warn!("Failed to list {collection}: {e}");
                ListOutcome::Failed(e)
            }
        }
    }

    /// Newest first, the ordering every listing page uses.
    pub async fn fetch_latest<T: ListedRecord>(&self) -> ListOutcome<T> {
        self.fetch_list(folio_core::document::CREATED_AT_FIELD, SortDirection::Descending)
            .await
    }

    /// Experience and education, read concurrently.
    pub async fn fetch_resume(&self) -> Resume {
        let (experience, education) = tokio::join!(
            self.fetch_latest::<ExperienceItem>(),
            self.fetch_latest::<EducationItem>()
        );
        Resume {
            experience,
            education,
        }
    }

    /// Find the blog post addressed by `slug`.
    ///
    /// Posts saved without a slug are addressed by their document id. When
    /// several posts share a slug the newest by `createdAt` wins, then the
    /// lowest id. Read errors are logged and reported as `None`.
    pub async fn fetch_by_slug(&self, slug: &str) -> Option<BlogPost> {
        let slug = slug.trim();
        if slug.is_empty() {
            return None;
        }
        match self.find_by_slug(slug).await {
            Ok(post) => post,
            Err(e) => {
                tracing::warn!("Failed to look up blog post '{slug}': {e}");
                None
            }
        }
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, StoreError> {
        let collection = ContentKind::BlogPost.collection();
        let docs = self.posts_with_slug(slug).await?;

        if docs.is_empty() {
            let by_id = self.store.get_document(collection, slug).await?;
            return Ok(by_id
                .filter(|doc| !has_stored_slug(doc))
                .map(|doc| normalize_stored(&doc, &BlogPost::fallback())));
        }

        let defaults = BlogPost::fallback();
        let mut posts: Vec<BlogPost> = docs
            .iter()
            .map(|doc| normalize_stored(doc, &defaults))
            .collect();
        if posts.len() > 1 {
            posts.sort_by(|a, b| {
                Reverse(a.created_at)
                    .cmp(&Reverse(b.created_at))
                    .then_with(|| a.id.cmp(&b.id))
            });
            let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
            tracing::warn!(
                "Slug '{slug}' is shared by {} posts ({}); serving {}",
                posts.len(),
                ids.join(", "),
                posts[0].id
            );
        }
        Ok(posts.into_iter().next())
    }

    /// Whether `slug` can be saved on a post without colliding with another.
    ///
    /// `except_id` names the post being edited, which may keep its own slug.
    /// Writers derive `slug` with [`folio_core::slug::slugify`], the same form
    /// [`Self::fetch_by_slug`] is later called with.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` for a malformed slug, or the store's
    /// error when the lookup fails.
    pub async fn slug_is_available(
        &self,
        slug: &str,
        except_id: Option<&str>,
    ) -> Result<bool, StoreError> {
        validate_slug(slug)?;
        let docs = self.posts_with_slug(slug).await?;
        Ok(docs.iter().all(|doc| Some(doc.id.as_str()) == except_id))
    }

    /// Posts whose stored slug, once trimmed, equals `slug`.
    ///
    /// The exact-match query covers slugs saved clean. Slugs saved with
    /// surrounding whitespace render trimmed, so when the query finds nothing
    /// the collection is scanned for them.
    async fn posts_with_slug(&self, slug: &str) -> Result<Vec<StoredDocument>, StoreError> {
        let collection = ContentKind::BlogPost.collection();
        let exact = self
            .store
            .query_documents(collection, SLUG_FIELD, &FieldValue::StringValue(slug.to_string()))
            .await?;
        if !exact.is_empty() {
            return Ok(exact);
        }
        let all = self
            .store
            .list_documents(collection, ID_FIELD, SortDirection::Ascending)
            .await?;
        Ok(all
            .into_iter()
            .filter(|doc| stored_slug(doc) == Some(slug))
            .collect())
    }
}

/// The trimmed, non-blank slug saved on `doc`.
fn stored_slug(doc: &StoredDocument) -> Option<&str> {
    doc.get(SLUG_FIELD)
        .and_then(FieldValue::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn has_stored_slug(doc: &StoredDocument) -> bool {
    stored_slug(doc).is_some()
}
