//! The document store seam.
//!
//! The repository only ever talks to a [`DocumentStore`]; which backend sits
//! behind it is decided by whoever constructs the repository. Backends share
//! the ordering rules in [`order_documents`] so that a list read returns the
//! same sequence regardless of where the documents live.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::future::Future;

use folio_core::document::{Document, FieldValue, ID_FIELD, StoredDocument};
use folio_core::enums::SortDirection;

use crate::error::StoreError;

/// Read and write access to collections of schemaless documents.
pub trait DocumentStore: Send + Sync {
    /// Fetch one document, or `None` when it does not exist.
    fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> impl Future<Output = Result<Option<StoredDocument>, StoreError>> + Send;

    /// Every document of `collection` carrying `order_by`, sorted by it.
    ///
    /// Documents without the order field are left out.
    fn list_documents(
        &self,
        collection: &str,
        order_by: &str,
        direction: SortDirection,
    ) -> impl Future<Output = Result<Vec<StoredDocument>, StoreError>> + Send;

    /// Documents whose `field` equals `value`, ordered by document id.
    fn query_documents(
        &self,
        collection: &str,
        field: &str,
        value: &FieldValue,
    ) -> impl Future<Output = Result<Vec<StoredDocument>, StoreError>> + Send;

    /// Create or overwrite the document `collection/id`.
    fn put_document(
        &self,
        collection: &str,
        id: &str,
        fields: Document,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Create a document under a store-assigned id and return the id.
    fn add_document(
        &self,
        collection: &str,
        fields: Document,
    ) -> impl Future<Output = Result<String, StoreError>> + Send;

    /// Delete `collection/id`. Deleting a missing document is not an error.
    fn delete_document(
        &self,
        collection: &str,
        id: &str,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// The value `doc` is ordered by. `id` addresses the document id itself.
fn sort_key<'a>(doc: &'a StoredDocument, order_by: &str) -> Option<Cow<'a, FieldValue>> {
    if order_by == ID_FIELD {
        return Some(Cow::Owned(FieldValue::StringValue(doc.id.clone())));
    }
    doc.get(order_by).map(Cow::Borrowed)
}

/// Drop documents lacking `order_by` and sort the rest.
///
/// Values of different types order by type rank (see
/// [`FieldValue::store_cmp`]). Equal values fall back to ascending document
/// id so that the result is deterministic.
#[must_use]
pub fn order_documents(
    docs: Vec<StoredDocument>,
    order_by: &str,
    direction: SortDirection,
) -> Vec<StoredDocument> {
    let mut keyed: Vec<_> = docs
        .into_iter()
        .filter_map(|doc| {
            let key = sort_key(&doc, order_by)?.into_owned();
            Some((key, doc))
        })
        .collect();

    keyed.sort_by(|(a_key, a), (b_key, b)| {
        let by_value = match direction {
            SortDirection::Ascending => a_key.store_cmp(b_key),
            SortDirection::Descending => b_key.store_cmp(a_key),
        };
        match by_value {
            Ordering::Equal => a.id.cmp(&b.id),
            other => other,
        }
    });

    keyed.into_iter().map(|(_, doc)| doc).collect()
}

/// Whether `doc` has `field` equal to `value`.
pub(crate) fn field_equals(doc: &StoredDocument, field: &str, value: &FieldValue) -> bool {
    if field == ID_FIELD {
        return value.as_str() == Some(doc.id.as_str());
    }
    doc.get(field) == Some(value)
}
