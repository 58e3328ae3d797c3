//! In-process document store.
//!
//! Backs tests and local previews. [`MemoryStore::set_unavailable`] makes
//! every operation fail with [`StoreError::Unavailable`], which is how the
//! repository's transport-failure paths are exercised.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tokio::sync::RwLock;

use folio_core::document::{Document, FieldValue, StoredDocument};
use folio_core::enums::SortDirection;

use crate::error::StoreError;
use crate::store::{DocumentStore, field_equals, order_documents};

type Collection = BTreeMap<String, Document>;

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Collection>>,
    unavailable: AtomicBool,
    next_id: AtomicU64,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a lost connection (`true`) or restore it (`false`).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "memory store is switched off".into(),
            ));
        }
        Ok(())
    }

    fn generate_id(&self) -> String {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        format!("doc-{n:08x}")
    }

    async fn snapshot(&self, collection: &str) -> Vec<StoredDocument> {
        let collections = self.collections.read().await;
        collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, fields)| StoredDocument::new(id.clone(), fields.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl DocumentStore for MemoryStore {
    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<StoredDocument>, StoreError> {
        self.check_available()?;
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .map(|fields| StoredDocument::new(id, fields.clone())))
    }

    async fn list_documents(
        &self,
        collection: &str,
        order_by: &str,
        direction: SortDirection,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        self.check_available()?;
        let docs = self.snapshot(collection).await;
        Ok(order_documents(docs, order_by, direction))
    }

    async fn query_documents(
        &self,
        collection: &str,
        field: &str,
        value: &FieldValue,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        self.check_available()?;
        // BTreeMap iteration is already in id order.
        Ok(self
            .snapshot(collection)
            .await
            .into_iter()
            .filter(|doc| field_equals(doc, field, value))
            .collect())
    }

    async fn put_document(
        &self,
        collection: &str,
        id: &str,
        fields: Document,
    ) -> Result<(), StoreError> {
        self.check_available()?;
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), fields);
        Ok(())
    }

    async fn add_document(&self, collection: &str, fields: Document) -> Result<String, StoreError> {
        self.check_available()?;
        let id = self.generate_id();
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), fields);
        Ok(id)
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        self.check_available()?;
        let mut collections = self.collections.write().await;
        if let Some(docs) = collections.get_mut(collection) {
            docs.remove(id);
        }
        Ok(())
    }
}
