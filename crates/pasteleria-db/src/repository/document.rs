//! # Document Repository
//!
//! Generic store for one collection of JSON documents. The catalog
//! (`pasteles`), staff (`empleados`) and order (`pedidos`) stores are all
//! this type, parameterized by entity.
//!
//! ## Storage Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How a Collection Is Stored                           │
//! │                                                                         │
//! │  POST /api/pasteles { "nombre": "Torta", "precio": 10 }                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DocumentRepository::<Product>::insert                                 │
//! │       │   id = uuid v4, document = serde_json::to_string(product)      │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │ pasteles                                                         │  │
//! │  │ seq | id        | document                          | created_at │  │
//! │  │  1  | 0b6c2b4e… | {"nombre":"Torta","precio":10.0}  | 2026-…     │  │
//! │  │  2  | 9f30aa12… | {"nombre":"Flan","precio":null}   | 2026-…     │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │       │                                                                 │
//! │       ▼  list() → ORDER BY seq                                         │
//! │  [{"_id":"0b6c2b4e…","nombre":"Torta","precio":10.0}, …]               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Table names come from [`Entity::COLLECTION`] constants, never from
//! request input.

use chrono::Utc;
use pasteleria_core::{Entity, Record};
use sqlx::SqlitePool;
use std::marker::PhantomData;
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;

/// Repository for one document collection.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let created = repo.insert(product).await?;
/// let all = repo.list().await?;
/// repo.delete(&created.id).await?;
/// ```
#[derive(Debug)]
pub struct DocumentRepository<T> {
    pool: SqlitePool,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for DocumentRepository<T> {
    fn clone(&self) -> Self {
        DocumentRepository {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: Entity> DocumentRepository<T> {
    /// Creates a new repository over the shared pool.
    pub fn new(pool: SqlitePool) -> Self {
        DocumentRepository {
            pool,
            _entity: PhantomData,
        }
    }

    fn decode(id: String, document: &str) -> DbResult<Record<T>> {
        let data: T = serde_json::from_str(document)?;
        Ok(Record::new(id, data))
    }

    /// Lists every document in insertion order.
    pub async fn list(&self) -> DbResult<Vec<Record<T>>> {
        let sql = format!("SELECT id, document FROM {} ORDER BY seq", T::COLLECTION);

        let rows: Vec<(String, String)> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;

        debug!(collection = T::COLLECTION, count = rows.len(), "Listed documents");

        rows.into_iter()
            .map(|(id, document)| Self::decode(id, &document))
            .collect()
    }

    /// Inserts a new document under a freshly generated id.
    ///
    /// ## Returns
    /// * `Ok(Record<T>)` - The stored document with its id
    pub async fn insert(&self, data: T) -> DbResult<Record<T>> {
        let id = generate_document_id();
        let document = serde_json::to_string(&data)?;

        debug!(collection = T::COLLECTION, id = %id, "Inserting document");

        let sql = format!(
            "INSERT INTO {} (id, document, created_at) VALUES (?1, ?2, ?3)",
            T::COLLECTION
        );

        sqlx::query(&sql)
            .bind(&id)
            .bind(&document)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(Record::new(id, data))
    }

    /// Deletes a document by id.
    ///
    /// ## Returns
    /// * `Ok(true)` - A document was removed
    /// * `Ok(false)` - No document had that id (not an error)
    pub async fn delete(&self, id: &str) -> DbResult<bool> {
        debug!(collection = T::COLLECTION, id = %id, "Deleting document");

        let sql = format!("DELETE FROM {} WHERE id = ?1", T::COLLECTION);

        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;

        Ok(result.rows_affected() > 0)
    }

    /// Gets a document by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Record<T>))` - Document found
    /// * `Ok(None)` - Document not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Record<T>>> {
        let sql = format!("SELECT id, document FROM {} WHERE id = ?1", T::COLLECTION);

        let row: Option<(String, String)> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|(id, document)| Self::decode(id, &document))
            .transpose()
    }

    /// Finds the oldest document whose top-level `field` equals `value`.
    ///
    /// `field` is a compile-time constant so the JSON path stays literal
    /// and can use an expression index.
    pub async fn find_first_by_field(
        &self,
        field: &'static str,
        value: &str,
    ) -> DbResult<Option<Record<T>>> {
        let sql = format!(
            "SELECT id, document FROM {} \
             WHERE json_extract(document, '$.{}') = ?1 \
             ORDER BY seq LIMIT 1",
            T::COLLECTION,
            field
        );

        let row: Option<(String, String)> = sqlx::query_as(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|(id, document)| Self::decode(id, &document))
            .transpose()
    }

    /// Counts documents in the collection (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", T::COLLECTION);

        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;

        Ok(count)
    }
}

/// Generates a new opaque document id.
fn generate_document_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
