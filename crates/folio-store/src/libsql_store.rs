//! libSQL-backed document store.
//!
//! Every document is one row of the `documents` table with its fields
//! encoded as tagged JSON (see [`FieldValue`]). The table carries no
//! per-field columns, so filtering and ordering happen after the rows are
//! decoded, using the same rules as [`crate::memory::MemoryStore`].

use chrono::Utc;
use libsql::Builder;

use folio_config::StoreConfig;
use folio_core::document::{Document, FieldValue, StoredDocument};
use folio_core::enums::SortDirection;

use crate::error::StoreError;
use crate::store::{DocumentStore, field_equals, order_documents};

/// Document store handle over a libSQL database.
pub struct LibsqlStore {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl LibsqlStore {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or migrations
    /// fail.
    pub async fn open_local(path: &str) -> Result<Self, StoreError> {
        let db = Builder::new_local(path).build().await?;
        Self::from_database(db).await
    }

    /// Connect to a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the connection cannot be built or migrations
    /// fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, StoreError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        Self::from_database(db).await
    }

    /// Open whichever database the configuration points at.
    ///
    /// A local path's parent directory is created when missing.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the directory, connection, or migrations fail.
    pub async fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        if config.is_remote() {
            tracing::debug!("Opening remote store at {}", config.url);
            return Self::open_remote(&config.url, &config.auth_token).await;
        }
        if !config.is_in_memory() {
            if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
        }
        let path = config.path.to_string_lossy();
        tracing::debug!("Opening local store at {path}");
        Self::open_local(&path).await
    }

    async fn from_database(db: libsql::Database) -> Result<Self, StoreError> {
        let conn = db.connect()?;
        let store = Self { db, conn };
        store.run_migrations().await?;
        Ok(store)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a random 20-character hex document id via libSQL.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails or returns no rows.
    pub async fn generate_id(&self) -> Result<String, StoreError> {
        let mut rows = self
            .conn
            .query("SELECT lower(hex(randomblob(10)))", ())
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }

    async fn fetch_rows(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError> {
        let mut rows = self
            .conn
            .query(
                "SELECT id, body FROM documents WHERE collection = ?1 ORDER BY id",
                [collection],
            )
            .await?;

        let mut docs = Vec::new();
        while let Some(row) = rows.next().await? {
            let id = row.get::<String>(0)?;
            let body = row.get::<String>(1)?;
            match decode_body(collection, &id, &body) {
                Ok(fields) => docs.push(StoredDocument::new(id, fields)),
                Err(e) => tracing::warn!("Skipping unreadable document: {e}"),
            }
        }
        Ok(docs)
    }

    async fn upsert(&self, collection: &str, id: &str, fields: &Document) -> Result<(), StoreError> {
        let body = serde_json::to_string(fields)?;
        self.conn
            .execute(
                "INSERT INTO documents (collection, id, body, updated_at)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT (collection, id)
                 DO UPDATE SET body = excluded.body, updated_at = excluded.updated_at",
                libsql::params![collection, id, body, Utc::now().to_rfc3339()],
            )
            .await?;
        Ok(())
    }
}

fn decode_body(collection: &str, id: &str, body: &str) -> Result<Document, StoreError> {
    serde_json::from_str(body).map_err(|e| StoreError::Corrupt {
        collection: collection.to_string(),
        id: id.to_string(),
        reason: e.to_string(),
    })
}

impl DocumentStore for LibsqlStore {
    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<StoredDocument>, StoreError> {
        let mut rows = self
            .conn
            .query(
                "SELECT body FROM documents WHERE collection = ?1 AND id = ?2",
                [collection, id],
            )
            .await?;
        let Some(row) = rows.next().await? else {
            return Ok(None);
        };
        let body = row.get::<String>(0)?;
        let fields = decode_body(collection, id, &body)?;
        Ok(Some(StoredDocument::new(id, fields)))
    }

    async fn list_documents(
        &self,
        collection: &str,
        order_by: &str,
        direction: SortDirection,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        let docs = self.fetch_rows(collection).await?;
        Ok(order_documents(docs, order_by, direction))
    }

    async fn query_documents(
        &self,
        collection: &str,
        field: &str,
        value: &FieldValue,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        let docs = self.fetch_rows(collection).await?;
        Ok(docs
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
        self.upsert(collection, id, &fields).await
    }

    async fn add_document(&self, collection: &str, fields: Document) -> Result<String, StoreError> {
        let id = self.generate_id().await?;
        self.upsert(collection, &id, &fields).await?;
        Ok(id)
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        self.conn
            .execute(
                "DELETE FROM documents WHERE collection = ?1 AND id = ?2",
                [collection, id],
            )
            .await?;
        Ok(())
    }
}
